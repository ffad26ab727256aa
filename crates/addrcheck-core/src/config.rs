use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Presentation settings for a checker front end.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Block explorer URL the address is appended to.
    pub explorer_base_url: String,
    /// Whether to offer an explorer link when both addresses are equal.
    pub show_explorer_link: bool,
    /// Whether to print the correct checksum form of a well-formed input
    /// whose casing failed validation.
    pub show_checksum_hint: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            explorer_base_url: "https://etherscan.io/address/".into(),
            show_explorer_link: true,
            show_checksum_hint: true,
        }
    }
}

impl CheckerConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = CheckerConfig::default();
        assert_eq!(c.explorer_base_url, "https://etherscan.io/address/");
        assert!(c.show_explorer_link);
        assert!(c.show_checksum_hint);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let c = CheckerConfig::from_toml_str("").unwrap();
        assert_eq!(c, CheckerConfig::default());
    }

    #[test]
    fn partial_document() {
        let c = CheckerConfig::from_toml_str(
            r#"
            explorer_base_url = "https://sepolia.etherscan.io/address/"
            show_checksum_hint = false
            "#,
        )
        .unwrap();
        assert_eq!(c.explorer_base_url, "https://sepolia.etherscan.io/address/");
        assert!(c.show_explorer_link);
        assert!(!c.show_checksum_hint);
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = CheckerConfig::from_toml_str("show_explorer_link = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_explorer_link = false").unwrap();
        let c = CheckerConfig::load(file.path()).unwrap();
        assert!(!c.show_explorer_link);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CheckerConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
