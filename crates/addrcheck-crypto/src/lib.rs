//! Cryptographic primitives for addrcheck.
//!
//! Provides Keccak-256 hashing and the mixed-case address checksum built on
//! it: validation of user input and rendering of the canonical checksummed
//! form.
//!
//! All crypto operations wrap established libraries — no custom cryptography.

pub mod checksum;
pub mod hasher;

pub use checksum::{is_valid, to_checksum, validate, ChecksumError};
pub use hasher::Keccak256Hasher;
