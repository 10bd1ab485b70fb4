use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Digest, Result};

/// The four timed unit operations a step can invoke.
pub trait Primitives {
    fn timestamp(&mut self) -> DateTime<Utc>;
    fn random_bytes(&mut self, len: usize) -> Result<Vec<u8>>;
    fn hash(&mut self, data: &[u8]) -> Digest;
    fn encrypt(&mut self, data: &[u8]) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Timestamp,
    RandomBytes,
    Hash,
    Encrypt,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 4] = [
        PrimitiveKind::Timestamp,
        PrimitiveKind::RandomBytes,
        PrimitiveKind::Hash,
        PrimitiveKind::Encrypt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::RandomBytes => "random_bytes",
            Self::Hash => "hash",
            Self::Encrypt => "encrypt",
        }
    }

    /// Input column holding the per-iteration call count.
    pub fn column(self) -> &'static str {
        match self {
            Self::Timestamp => "generate_timestamp",
            Self::RandomBytes => "generate_random",
            Self::Hash => "hash",
            Self::Encrypt => "encrypt",
        }
    }

    pub fn schema(self) -> PrimitiveSchema {
        let (description, input) = match self {
            Self::Timestamp => ("captures the current wall-clock time", "none"),
            Self::RandomBytes => ("reads bytes from the OS entropy source", "16 bytes"),
            Self::Hash => ("SHA-1 digest (20 bytes)", "1024 random bytes"),
            Self::Encrypt => (
                "AES-256-CBC under a fresh throwaway key and IV, no padding",
                "1024 random bytes",
            ),
        };
        PrimitiveSchema {
            name: self.name().to_string(),
            column: self.column().to_string(),
            description: description.to_string(),
            input: input.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrimitiveSchema {
    pub name: String,
    pub column: String,
    pub description: String,
    pub input: String,
}

pub fn list_primitives() -> Vec<PrimitiveSchema> {
    let mut schemas = PrimitiveKind::ALL
        .iter()
        .map(|kind| kind.schema())
        .collect::<Vec<_>>();
    schemas.sort_by(|left, right| left.name.cmp(&right.name));
    schemas
}
