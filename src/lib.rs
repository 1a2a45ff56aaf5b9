//! # sovran-typedmap
//!
//! A string-keyed heterogeneous map with exact-type, panic-free accessors.
//!
//! `sovran-typedmap` stores values of many different types under `String` keys
//! and hands them back through accessors that check the stored type exactly.
//! A lookup that finds nothing and a lookup that finds the wrong type look the
//! same to the caller: a zero value and `false`. Nothing panics.
//!
//! ## Key Features
//!
//! - **Exact-type**: Values are matched by `TypeId`; `i32` is never read as `i64`
//! - **Panic-free**: Every accessor returns `(value, found)`
//! - **Table-driven**: The `get_*` accessors are expanded from one type table
//! - **Flexible**: Anything `'static + Send + Sync` can be stored, and read back
//!   with [`TypedMap::get_as`] or [`TypedMap::try_get`]
//!
//! ## Supported Semantic Types
//!
//! | Accessor | Type | Zero value |
//! |---|---|---|
//! | `get_string` | `String` | `""` |
//! | `get_bool` | `bool` | `false` |
//! | `get_int32` | `i32` | `0` |
//! | `get_int64` | `i64` | `0` |
//! | `get_float32` | `f32` | `0.0` |
//! | `get_float64` | `f64` | `0.0` |
//! | `get_map` | [`AnyMap`] | empty map |
//! | `get_array` | [`AnyArray`] | empty vec |
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_typedmap::TypedMap;
//!
//! let mut map = TypedMap::new();
//!
//! // Store values of different types
//! map.set("count", 42i64);
//! map.set("name", "alice".to_string());
//! map.set("enabled", true);
//!
//! // Retrieve them with the matching accessor
//! assert_eq!(map.get_int64("count"), (42, true));
//! assert_eq!(map.get_string("name"), ("alice".to_string(), true));
//!
//! // A different integer width is a different type
//! assert_eq!(map.get_int32("count"), (0, false));
//! assert_eq!(map.get_string("count"), (String::new(), false));
//!
//! // Missing keys look the same as mismatches
//! assert_eq!(map.get_bool("missing"), (false, false));
//! ```
//!
//! ### Nested Maps and Arrays
//!
//! ```rust
//! use sovran_typedmap::{AnyArray, AnyMap, AnyValue, TypedMap};
//!
//! let mut server = AnyMap::new();
//! server.insert("host".to_string(), AnyValue::new("localhost".to_string()));
//! server.insert("port".to_string(), AnyValue::new(8080i32));
//!
//! let mut map = TypedMap::new();
//! map.set("server", server);
//! let tags: AnyArray = vec![AnyValue::new("a".to_string()), AnyValue::new(1i64)];
//! map.set("tags", tags);
//!
//! let (server, found) = map.get_map("server");
//! assert!(found);
//!
//! // A nested map can be wrapped to use the same accessors
//! let server = TypedMap::from(server);
//! assert_eq!(server.get_int32("port"), (8080, true));
//!
//! let (tags, found) = map.get_array("tags");
//! assert!(found);
//! assert_eq!(tags.len(), 2);
//! ```
//!
//! ### Telling Missing Keys Apart From Mismatches
//!
//! ```rust
//! use sovran_typedmap::{MapError, TypedMap};
//!
//! let mut map = TypedMap::new();
//! map.set("config", vec!["setting1", "setting2"]);
//!
//! match map.try_get::<String>("config") {
//!     Ok(value) => println!("Config: {}", value),
//!     Err(MapError::KeyNotFound(_)) => println!("Config key not found"),
//!     Err(MapError::TypeMismatch { found, .. }) => println!("Config is a {}", found),
//! }
//! ```

mod any_value;
mod error;
mod map;
mod typed;

pub use any_value::AnyValue;
pub use error::MapError;
pub use map::{AnyArray, AnyMap, TypedMap};
pub use typed::{Semantic, SemanticType};
