use crate::any_value::AnyValue;
use crate::error::MapError;
use std::any::{type_name, Any};
use std::collections::HashMap;

/// A nested, string-keyed map of untyped values
pub type AnyMap = HashMap<String, AnyValue>;

/// An ordered sequence of untyped values
pub type AnyArray = Vec<AnyValue>;

/// A string-keyed heterogeneous map
///
/// `TypedMap` stores values of any `'static + Send + Sync` type under `String`
/// keys. Values go in untyped through [`set`](TypedMap::set) and come back out
/// either untyped through [`get`](TypedMap::get) or through one of the
/// exact-type accessors generated from the semantic type table (`get_string`,
/// `get_int64`, ...).
///
/// The map has no internal locking. It is `Send + Sync`, so an owner that needs
/// to share it across threads can wrap it in a `Mutex` or `RwLock`.
///
/// # Examples
///
/// ```
/// use sovran_typedmap::TypedMap;
///
/// let mut map = TypedMap::new();
/// map.set("name", "alice".to_string());
/// map.set("count", 42i64);
///
/// assert_eq!(map.get_string("name"), ("alice".to_string(), true));
/// assert_eq!(map.get_int64("count"), (42, true));
/// assert_eq!(map.get_int32("count"), (0, false));
/// assert!(map.get("missing").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TypedMap {
    entries: AnyMap,
}

impl TypedMap {
    /// Creates a new, empty TypedMap
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates an empty TypedMap with room for at least `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Stores a value under `key`, replacing whatever was there
    ///
    /// Any `'static + Send + Sync` type is accepted. The value's exact type is
    /// what the typed accessors compare against later, so `42i32` and `42i64`
    /// are different values as far as the map is concerned. Values that are not
    /// `Send + Sync`, such as `Rc` or `RefCell`, cannot be stored.
    ///
    /// ```compile_fail
    /// use sovran_typedmap::TypedMap;
    /// use std::rc::Rc;
    ///
    /// let mut map = TypedMap::new();
    /// map.set("shared", Rc::new(1i32));
    /// ```
    pub fn set<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.set_value(key, AnyValue::new(value));
    }

    /// Stores an already type-erased value under `key`
    pub fn set_value(&mut self, key: impl Into<String>, value: AnyValue) {
        self.entries.insert(key.into(), value);
    }

    /// Retrieves the untyped value stored under `key`
    ///
    /// Returns `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<&AnyValue> {
        self.entries.get(key)
    }

    /// Retrieves a reference to the value under `key` if it is exactly of type `T`
    ///
    /// Absence and type mismatch both produce `None`. Unlike the generated
    /// accessors this works for any type, not only the supported semantic
    /// types, and does not clone.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_typedmap::TypedMap;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Port(u16);
    ///
    /// let mut map = TypedMap::new();
    /// map.set("port", Port(8080));
    ///
    /// assert_eq!(map.get_as::<Port>("port"), Some(&Port(8080)));
    /// assert_eq!(map.get_as::<u16>("port"), None);
    /// ```
    pub fn get_as<T: Any>(&self, key: &str) -> Option<&T> {
        self.get(key)?.downcast_ref::<T>()
    }

    /// Retrieves a reference to the value under `key`, telling apart a missing
    /// key from a value of the wrong type
    ///
    /// # Errors
    ///
    /// - Returns `MapError::KeyNotFound` if the key doesn't exist
    /// - Returns `MapError::TypeMismatch` if the stored value is not exactly a `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_typedmap::{MapError, TypedMap};
    ///
    /// let mut map = TypedMap::new();
    /// map.set("count", 42i64);
    ///
    /// assert_eq!(map.try_get::<i64>("count"), Ok(&42));
    /// assert!(matches!(map.try_get::<i32>("count"), Err(MapError::TypeMismatch { .. })));
    /// assert!(matches!(map.try_get::<i64>("nope"), Err(MapError::KeyNotFound(_))));
    /// ```
    pub fn try_get<T: Any>(&self, key: &str) -> Result<&T, MapError> {
        let value = self
            .get(key)
            .ok_or_else(|| MapError::KeyNotFound(key.to_string()))?;

        value
            .downcast_ref::<T>()
            .ok_or_else(|| MapError::TypeMismatch {
                key: key.to_string(),
                expected: type_name::<T>(),
                found: value.type_name(),
            })
    }

    /// Returns true if the map contains the specified key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the type name of the value stored under `key`, if any
    pub fn type_name_of(&self, key: &str) -> Option<&'static str> {
        self.get(key).map(AnyValue::type_name)
    }

    /// Returns the number of entries in the map
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map contains no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the map and hands back its entries
    pub fn into_inner(self) -> AnyMap {
        self.entries
    }
}

impl From<AnyMap> for TypedMap {
    fn from(entries: AnyMap) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>> FromIterator<(K, AnyValue)> for TypedMap {
    fn from_iter<I: IntoIterator<Item = (K, AnyValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
