use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrimitiveError>;

#[derive(Debug, Error)]
pub enum PrimitiveError {
    #[error("OS entropy source failure: {0}")]
    Entropy(#[from] rand::Error),

    #[error("plaintext of {len} bytes is not a multiple of the {block}-byte cipher block")]
    UnalignedPlaintext { len: usize, block: usize },
}
