//! Error types for the algorithm engine.

use thiserror::Error;

/// Main error type for engine operations.
///
/// Every variant except [`EngineError::Serialization`] is an invalid
/// argument: the call was rejected before any work was done.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Algorithm identifier not recognized
    #[error("Invalid argument: unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// Search algorithm invoked without a target
    #[error("Invalid argument: {algorithm} requires a search target")]
    MissingTarget { algorithm: &'static str },

    /// Empty input where the algorithm needs at least one element
    #[error("Invalid argument: {algorithm} requires a non-empty input")]
    EmptyInput { algorithm: &'static str },

    /// Element or target type incompatible with the algorithm
    #[error("Invalid argument: {algorithm} {reason}")]
    TypeMismatch {
        algorithm: &'static str,
        reason: String,
    },

    /// Input exceeds the configured length limit
    #[error("Invalid argument: input length {len} exceeds limit of {limit}")]
    InputTooLarge { len: usize, limit: usize },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Check if this error is a rejected precondition (`InvalidArgument`)
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, EngineError::Serialization(_))
    }
}

#[cfg(feature = "wasm")]
impl From<EngineError> for wasm_bindgen::JsValue {
    fn from(err: EngineError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
