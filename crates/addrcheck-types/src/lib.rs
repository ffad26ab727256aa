//! Foundation types for addrcheck.
//!
//! Every other addrcheck crate depends on `addrcheck-types`. The types here
//! are plain values: nothing in this crate hashes, diffs, or performs I/O.
//!
//! # Key Types
//!
//! - [`Address`] — A syntactically well-formed 40-hex-digit account address
//! - [`Casing`] — Letter casing of an address body (lower, upper, or mixed)
//! - [`ValidationOutcome`] — Result of checksum validation
//! - [`ComparisonState`] — Result of comparing two raw inputs

pub mod address;
pub mod error;
pub mod outcome;

pub use address::{Address, Casing, ADDRESS_HEX_LEN, ADDRESS_PREFIX};
pub use error::TypeError;
pub use outcome::{ComparisonState, ValidationOutcome};
