use crate::model::ModelError;
use crate::primitives::PrimitiveError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("benchmark I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("hardware matrix serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("hardware matrix YAML serialization failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("primitive operation failed: {0}")]
    Primitive(#[from] PrimitiveError),

    #[error("benchmark model validation failed: {0}")]
    Model(#[from] ModelError),
}
