//! The supported semantic types and their exact-type accessors.
//!
//! Everything here is expanded from the single table at the bottom of this
//! file. Each row `Tag => Type = zero;` produces:
//!
//! - a `SemanticType::Tag` variant,
//! - a [`Semantic`] impl for `Type` whose `zero()` is the row's zero value,
//! - a `TypedMap::get_tag(key) -> (Type, bool)` accessor.
//!
//! Adding a supported type means adding a row; accessors are never written by
//! hand.

use crate::any_value::AnyValue;
use crate::map::{AnyArray, AnyMap, TypedMap};
use paste::paste;
use std::any::Any;
use std::fmt;
use tracing::trace;

mod sealed {
    pub trait Sealed {}
}

/// A type that has a row in the semantic type table
///
/// Implemented only by the table; it cannot be implemented outside this crate.
pub trait Semantic: sealed::Sealed + Any + Clone + Send + Sync {
    /// The table row this type belongs to
    const KIND: SemanticType;

    /// The value returned when a lookup misses
    fn zero() -> Self;
}

impl TypedMap {
    /// Retrieves a clone of the value under `key` if it is exactly a `T`
    ///
    /// This is the generic accessor every generated `get_*` method delegates
    /// to. A missing key and a value of any other type both return
    /// `(T::zero(), false)`; no coercion or widening is attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_typedmap::TypedMap;
    ///
    /// let mut map = TypedMap::new();
    /// map.set("ratio", 0.5f32);
    ///
    /// assert_eq!(map.lookup::<f32>("ratio"), (0.5, true));
    /// assert_eq!(map.lookup::<f64>("ratio"), (0.0, false));
    /// ```
    pub fn lookup<T: Semantic>(&self, key: &str) -> (T, bool) {
        let Some(value) = self.get(key) else {
            return (T::zero(), false);
        };

        match value.downcast_ref::<T>() {
            Some(typed) => (typed.clone(), true),
            None => {
                trace!(
                    key,
                    expected = T::KIND.rust_type(),
                    found = value.type_name(),
                    "typed lookup type mismatch"
                );
                (T::zero(), false)
            }
        }
    }
}

macro_rules! semantic_types {
    ($($tag:ident => $ty:ty = $zero:expr;)*) => {
        /// One variant per supported semantic type
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SemanticType {
            $($tag,)*
        }

        impl SemanticType {
            /// Every supported semantic type, in table order
            pub const ALL: &'static [SemanticType] = &[$(SemanticType::$tag,)*];

            /// The table tag, e.g. `"Int64"`
            pub fn name(&self) -> &'static str {
                match self {
                    $(SemanticType::$tag => stringify!($tag),)*
                }
            }

            /// The concrete Rust type name, as reported by `std::any::type_name`
            pub fn rust_type(&self) -> &'static str {
                match self {
                    $(SemanticType::$tag => std::any::type_name::<$ty>(),)*
                }
            }

            /// Classifies a stored value, or `None` if its type has no row
            pub fn of(value: &AnyValue) -> Option<Self> {
                $(
                    if value.is::<$ty>() {
                        return Some(SemanticType::$tag);
                    }
                )*
                None
            }
        }

        $(
            impl sealed::Sealed for $ty {}

            impl Semantic for $ty {
                const KIND: SemanticType = SemanticType::$tag;

                fn zero() -> Self {
                    $zero
                }
            }
        )*

        impl TypedMap {
            $(
                paste! {
                    typed_accessor!([<get_ $tag:snake>], $ty, $zero);
                }
            )*
        }
    };
}

macro_rules! typed_accessor {
    ($name:ident, $ty:ty, $zero:expr) => {
        #[doc = concat!(
            "Retrieves the `", stringify!($ty), "` stored under `key`\n\n",
            "Returns `(", stringify!($zero), ", false)` if the key is absent ",
            "or holds a value of any other type."
        )]
        pub fn $name(&self, key: &str) -> ($ty, bool) {
            self.lookup::<$ty>(key)
        }
    };
}

semantic_types! {
    String => String = String::new();
    Bool => bool = false;
    Int32 => i32 = 0;
    Int64 => i64 = 0;
    Float32 => f32 = 0.0;
    Float64 => f64 = 0.0;
    Map => AnyMap = AnyMap::new();
    Array => AnyArray = AnyArray::new();
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
