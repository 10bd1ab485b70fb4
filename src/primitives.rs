mod cipher;
mod digest;
mod error;
mod schema;
mod system;


pub use cipher::{BLOCK_LEN, IV_LEN, KEY_LEN, aes256_cbc_encrypt};
pub use digest::{DIGEST_LEN, Digest, sha1_digest};
pub use error::{PrimitiveError, Result};
pub use schema::{PrimitiveKind, PrimitiveSchema, Primitives, list_primitives};
pub use system::SystemPrimitives;
