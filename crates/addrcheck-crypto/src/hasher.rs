use sha3::{Digest, Keccak256};

/// Keccak-256 hasher.
///
/// This is the original Keccak padding used by Ethereum, not the NIST
/// SHA3-256 variant. The two produce different digests for the same input.
pub struct Keccak256Hasher;

impl Keccak256Hasher {
    /// Size of a digest in bytes.
    pub const DIGEST_LEN: usize = 32;

    /// Hash raw bytes.
    pub fn digest(data: &[u8]) -> [u8; 32] {
        let mut hasher = Keccak256::new();
        hasher.update(data);
        let mut out = [0u8; Self::DIGEST_LEN];
        out.copy_from_slice(&hasher.finalize());
        out
    }

    /// The `index`-th hex digit (nibble) of a digest, most significant first.
    ///
    /// Equivalent to parsing character `index` of the lowercase hex rendering.
    pub fn nibble(digest: &[u8; 32], index: usize) -> u8 {
        let byte = digest[index / 2];
        if index % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0f
        }
    }
}
