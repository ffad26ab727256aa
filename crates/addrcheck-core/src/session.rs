use serde::Serialize;

use addrcheck_crypto::is_valid;
use addrcheck_types::ComparisonState;

use crate::comparator::{compare, Comparison};
use crate::config::CheckerConfig;
use crate::explorer::explorer_link;

/// Which input a paste was routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasteTarget {
    First,
    Second,
    /// Both inputs already held valid addresses, or the paste was empty.
    Discarded,
}

/// Two address inputs and the comparison derived from them.
///
/// Every mutation recomputes the comparison from scratch, so the result
/// always reflects the current inputs.
#[derive(Clone, Debug, Default)]
pub struct Session {
    first: String,
    second: String,
    comparison: Comparison,
    config: CheckerConfig,
}

impl Session {
    /// An empty session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty session with the given settings.
    pub fn with_config(config: CheckerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    // ---- Inputs ----

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// Replace the first input and recompute.
    pub fn set_first(&mut self, value: impl Into<String>) -> &Comparison {
        self.first = value.into();
        self.recompute()
    }

    /// Replace the second input and recompute.
    pub fn set_second(&mut self, value: impl Into<String>) -> &Comparison {
        self.second = value.into();
        self.recompute()
    }

    /// Route pasted text to the first input that is empty or invalid.
    ///
    /// The first input is tried before the second. When both already hold
    /// valid addresses the paste is discarded and nothing changes.
    pub fn paste(&mut self, text: &str) -> PasteTarget {
        if text.is_empty() {
            return PasteTarget::Discarded;
        }

        let target = if self.first.is_empty() || !is_valid(&self.first) {
            self.set_first(text);
            PasteTarget::First
        } else if self.second.is_empty() || !is_valid(&self.second) {
            self.set_second(text);
            PasteTarget::Second
        } else {
            PasteTarget::Discarded
        };
        tracing::debug!(?target, "paste routed");
        target
    }

    /// Empty both inputs.
    pub fn clear(&mut self) {
        self.first.clear();
        self.second.clear();
        self.recompute();
    }

    // ---- Results ----

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    pub fn state(&self) -> ComparisonState {
        self.comparison.state
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Explorer URL for the first address, offered only when both are equal.
    pub fn explorer_link(&self) -> Option<String> {
        if self.state() != ComparisonState::Equal || !self.config.show_explorer_link {
            return None;
        }
        Some(explorer_link(&self.config.explorer_base_url, &self.first))
    }

    fn recompute(&mut self) -> &Comparison {
        self.comparison = compare(&self.first, &self.second);
        tracing::debug!(state = ?self.comparison.state, "comparison updated");
        &self.comparison
    }
}
