//! Mixed-case address checksums (EIP-55).
//!
//! The checksum is carried in the letter casing of the hex body: hash the
//! lowercase body with Keccak-256, then each letter must be uppercase exactly
//! when the digest nibble at the same position is greater than 7. Digits have
//! no case and always pass. Bodies written entirely in one case carry no
//! checksum and are accepted as-is.

use addrcheck_types::{Address, TypeError, ValidationOutcome, ADDRESS_PREFIX};

use crate::hasher::Keccak256Hasher;

/// Nibbles above this value mark an uppercase letter.
const UPPERCASE_THRESHOLD: u8 = 7;

/// Validate a raw address string.
///
/// Never fails: malformed input is reported as [`ValidationOutcome::Invalid`].
pub fn validate(input: &str) -> ValidationOutcome {
    let address = match Address::parse(input) {
        Ok(address) => address,
        Err(e) => {
            tracing::trace!(error = %e, "address rejected by shape check");
            return ValidationOutcome::Invalid;
        }
    };

    if address.casing().is_uniform() {
        return ValidationOutcome::Valid;
    }

    matches_checksum(&address).into()
}

/// Shorthand for `validate(input).is_valid()`.
pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid()
}

/// Render the canonical checksummed form (`0x` + mixed-case body) of an address.
///
/// Accepts any well-formed address regardless of its current casing, so a
/// wrongly checksummed input still has a canonical form.
pub fn to_checksum(input: &str) -> Result<String, ChecksumError> {
    let address = Address::parse(input)?;
    let lower = address.to_lowercase_hex();
    let digest = Keccak256Hasher::digest(lower.as_bytes());

    let mut out = String::with_capacity(ADDRESS_PREFIX.len() + lower.len());
    out.push_str(ADDRESS_PREFIX);
    for (i, ch) in lower.chars().enumerate() {
        if Keccak256Hasher::nibble(&digest, i) > UPPERCASE_THRESHOLD {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}

/// Check every position of a mixed-case body against the digest.
fn matches_checksum(address: &Address) -> bool {
    let digest = Keccak256Hasher::digest(address.to_lowercase_hex().as_bytes());

    let mismatch = address.body().chars().enumerate().find(|&(i, ch)| {
        let upper = Keccak256Hasher::nibble(&digest, i) > UPPERCASE_THRESHOLD;
        if upper {
            ch.is_ascii_lowercase()
        } else {
            ch.is_ascii_uppercase()
        }
    });

    if let Some((index, ch)) = mismatch {
        tracing::debug!(index, %ch, digest = %hex::encode(digest), "checksum casing mismatch");
        return false;
    }
    true
}

/// Errors from checksum rendering.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("malformed address: {0}")]
    Malformed(#[from] TypeError),
}
