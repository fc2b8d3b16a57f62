use crate::value::ValueType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Cannot auto-map namespace '{namespace}': it is {} in the input ({input}) but {} in the output ({output}); a {} input must map to a {} output",
        .input.category(), .output.category(), .input.category(), .input.category()
    )]
    TypeMismatch {
        namespace: String,
        input: ValueType,
        output: ValueType,
    },

    #[error("Value type mismatch for namespace '{namespace}': expected {expected}, got {actual}")]
    ValueTypeMismatch {
        namespace: String,
        expected: ValueType,
        actual: ValueType,
    },

    #[error("Namespaces are both auto-mapped and explicitly transformed: {0:?}")]
    NamespaceCollision(Vec<String>),

    #[error("Parallel arrays differ in length: {keys} keys, {values} values")]
    LengthMismatch { keys: usize, values: usize },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
