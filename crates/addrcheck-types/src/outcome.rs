use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of checking one address string.
///
/// Invalid input is an ordinary value, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Invalid,
}

impl ValidationOutcome {
    pub fn is_valid(self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

impl From<bool> for ValidationOutcome {
    fn from(valid: bool) -> Self {
        if valid {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationOutcome::Valid => write!(f, "Valid"),
            ValidationOutcome::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Result of comparing two raw inputs.
///
/// Exactly one state holds for any pair of inputs. The initial state, with
/// both inputs empty, is [`ComparisonState::NothingToCheck`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonState {
    /// Both inputs empty, or only one side filled in.
    #[default]
    NothingToCheck,
    /// The first (top) input is non-empty and invalid.
    FirstInvalid,
    /// The first input is empty or valid; the second is non-empty and invalid.
    SecondInvalid,
    /// Both valid and equal ignoring letter case.
    Equal,
    /// Both valid and different.
    NotEqual,
}

impl ComparisonState {
    /// Human-readable label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            ComparisonState::NothingToCheck => "Nothing to check",
            ComparisonState::FirstInvalid => "Top address not valid",
            ComparisonState::SecondInvalid => "Bottom address not valid",
            ComparisonState::Equal => "Equal",
            ComparisonState::NotEqual => "Not equal",
        }
    }
}

impl fmt::Display for ComparisonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
