use chrono::{DateTime, Utc};
use rand::RngCore;
use rand::rngs::OsRng;

use super::{
    Digest, IV_LEN, KEY_LEN, Primitives, Result, aes256_cbc_encrypt, sha1_digest,
};

/// Primitives backed by the system clock, the OS entropy source, SHA-1 and AES.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPrimitives;

impl SystemPrimitives {
    pub fn new() -> Self {
        Self
    }
}

fn fill_random(buffer: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buffer)?;
    Ok(())
}

impl Primitives for SystemPrimitives {
    fn timestamp(&mut self) -> DateTime<Utc> {
        Utc::now()
    }

    fn random_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; len];
        fill_random(&mut bytes)?;
        Ok(bytes)
    }

    fn hash(&mut self, data: &[u8]) -> Digest {
        sha1_digest(data)
    }

    fn encrypt(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        // Key and IV are dropped after use; the ciphertext is never decrypted.
        let mut key = [0u8; KEY_LEN];
        let mut iv = [0u8; IV_LEN];
        fill_random(&mut key)?;
        fill_random(&mut iv)?;
        aes256_cbc_encrypt(&key, &iv, data)
    }
}
