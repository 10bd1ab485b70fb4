use aes::Aes256;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};

use super::{PrimitiveError, Result};

pub const KEY_LEN: usize = 32;
pub const IV_LEN: usize = 16;
pub const BLOCK_LEN: usize = 16;

/// AES-256 in CBC mode without padding.
///
/// Input that is not block aligned is rejected rather than padded.
pub fn aes256_cbc_encrypt(
    key: &[u8; KEY_LEN],
    iv: &[u8; IV_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    if plaintext.len() % BLOCK_LEN != 0 {
        return Err(PrimitiveError::UnalignedPlaintext {
            len: plaintext.len(),
            block: BLOCK_LEN,
        });
    }

    let cipher = Aes256::new(GenericArray::from_slice(key));
    let mut chain = *iv;
    let mut ciphertext = Vec::with_capacity(plaintext.len());
    for chunk in plaintext.chunks_exact(BLOCK_LEN) {
        let mut block = aes::Block::clone_from_slice(chunk);
        for (byte, previous) in block.iter_mut().zip(chain.iter()) {
            *byte ^= previous;
        }
        cipher.encrypt_block(&mut block);
        chain.copy_from_slice(&block);
        ciphertext.extend_from_slice(&block);
    }
    Ok(ciphertext)
}
