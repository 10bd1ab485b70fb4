use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("phase `{0}` has no steps")]
    EmptyPhase(String),

    #[error("step `{step}` must run at least one operation, found num_operations = 0")]
    NoOperations { step: String },

    #[error("invalid hardware matrix: {0}")]
    InvalidMatrix(String),
}
