use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Optional marker in front of the hex body. Matched case-insensitively.
pub const ADDRESS_PREFIX: &str = "0x";

/// Number of hex characters in an address body (20 bytes).
pub const ADDRESS_HEX_LEN: usize = 40;

/// Letter casing of an address body. Digits carry no case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Casing {
    /// No uppercase letters (includes bodies made only of digits).
    Lower,
    /// Uppercase letters only, and at least one of them.
    Upper,
    /// Both lowercase and uppercase letters.
    Mixed,
}

impl Casing {
    /// Classify the letters of `s`.
    pub fn of(s: &str) -> Self {
        let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
        match (has_lower, has_upper) {
            (_, false) => Casing::Lower,
            (false, true) => Casing::Upper,
            (true, true) => Casing::Mixed,
        }
    }

    /// Returns `true` for single-case bodies, which carry no checksum.
    pub fn is_uniform(self) -> bool {
        !matches!(self, Casing::Mixed)
    }
}

/// A syntactically well-formed account address.
///
/// Parsing only checks shape: an optional `0x`/`0X` marker followed by
/// exactly 40 hex digits. The casing of the body is preserved as given,
/// since it carries the checksum. Whether that casing is a correct checksum
/// is decided by `addrcheck-crypto`, not here.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    body: String,
}

impl Address {
    /// Parse a raw string into an address, keeping its casing.
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        let body = strip_prefix(input);

        let actual = body.chars().count();
        if actual != ADDRESS_HEX_LEN {
            return Err(TypeError::InvalidLength {
                expected: ADDRESS_HEX_LEN,
                actual,
            });
        }

        if let Some((index, ch)) = body.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidHex { ch, index });
        }

        Ok(Self {
            body: body.to_string(),
        })
    }

    /// The 40 hex characters without the marker, in their original case.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The body folded to lowercase. This is the checksum hash input.
    pub fn to_lowercase_hex(&self) -> String {
        self.body.to_ascii_lowercase()
    }

    /// Letter casing of the body.
    pub fn casing(&self) -> Casing {
        Casing::of(&self.body)
    }
}

/// Remove a leading `0x` or `0X`, if present.
fn strip_prefix(input: &str) -> &str {
    input
        .strip_prefix(ADDRESS_PREFIX)
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

impl FromStr for Address {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({ADDRESS_PREFIX}{})", self.body)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ADDRESS_PREFIX}{}", self.body)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(serde::de::Error::custom)
    }
}
