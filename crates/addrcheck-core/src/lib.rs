//! Comparison engine for addrcheck.
//!
//! Ties the checksum validator and the diff engine together: two raw inputs
//! go in, a [`Comparison`] comes out. [`Session`] keeps the two inputs as
//! state and recomputes the comparison on every change, which is what an
//! interactive front end drives.

pub mod comparator;
pub mod config;
pub mod error;
pub mod explorer;
pub mod session;

pub use comparator::{compare, Comparison};
pub use config::CheckerConfig;
pub use error::{ConfigError, ConfigResult};
pub use explorer::explorer_link;
pub use session::{PasteTarget, Session};

// Re-export key types
pub use addrcheck_crypto::{is_valid, to_checksum, validate, ChecksumError};
pub use addrcheck_diff::{diff_chars, CharDiff, DiffSegment, SegmentKind};
pub use addrcheck_types::{Address, ComparisonState, ValidationOutcome};
