use sha1::Sha1;

/// SHA-1 output size in bytes (160 bits).
pub const DIGEST_LEN: usize = 20;

pub type Digest = [u8; DIGEST_LEN];

pub fn sha1_digest(data: &[u8]) -> Digest {
    use sha1::Digest as _;

    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Sha1::digest(data));
    out
}
