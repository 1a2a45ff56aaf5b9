use thiserror::Error;

/// Errors returned by the discriminated lookup [`TypedMap::try_get`](crate::TypedMap::try_get)
///
/// The typed accessors never return this; they fold both cases into `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The requested key was not found
    #[error("key not found: {0}")]
    KeyNotFound(String),
    /// The key exists but holds a value of a different type
    #[error("type mismatch for key {key}: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}
