use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A type-erased value that remembers what it was
///
/// `AnyValue` is the untyped slot stored under every key of a
/// [`TypedMap`](crate::TypedMap). The payload lives behind an `Arc`, so cloning
/// an `AnyValue` (or a nested map/array of them) shares the payload instead of
/// copying it.
///
/// # Examples
///
/// ```
/// use sovran_typedmap::AnyValue;
///
/// let value = AnyValue::new(42i64);
/// assert!(value.is::<i64>());
/// assert!(!value.is::<i32>());
/// assert_eq!(value.downcast_ref::<i64>(), Some(&42));
/// assert_eq!(value.type_name(), "i64");
/// ```
#[derive(Clone)]
pub struct AnyValue {
    type_id: TypeId,
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl AnyValue {
    /// Create a new AnyValue from any value that is `'static + Send + Sync`
    ///
    /// Wrapping an `AnyValue` returns it unchanged rather than nesting it.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        // Only the re-wrap case pays for a box and a downcast
        if TypeId::of::<T>() == TypeId::of::<AnyValue>() {
            let boxed: Box<dyn Any + Send + Sync> = Box::new(value);
            return match boxed.downcast::<AnyValue>() {
                Ok(already_erased) => *already_erased,
                Err(boxed) => Self {
                    type_id: TypeId::of::<T>(),
                    type_name: type_name::<T>(),
                    value: Arc::from(boxed),
                },
            };
        }

        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: Arc::new(value),
        }
    }

    /// Check if the contained value is exactly of type T
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Get a reference to the contained value if it is exactly of type T
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        if !self.is::<T>() {
            return None;
        }
        self.value.downcast_ref::<T>()
    }

    /// The `TypeId` of the stored value
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The name of the stored value's type, as reported by `std::any::type_name`
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
