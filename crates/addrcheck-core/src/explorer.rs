/// Build a block explorer URL for `address`.
///
/// A separating `/` is inserted when `base_url` does not already end in one.
pub fn explorer_link(base_url: &str, address: &str) -> String {
    if base_url.ends_with('/') {
        format!("{base_url}{address}")
    } else {
        format!("{base_url}/{address}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_trailing_slash() {
        assert_eq!(
            explorer_link("https://etherscan.io/address/", "0xabc"),
            "https://etherscan.io/address/0xabc"
        );
    }

    #[test]
    fn inserts_missing_slash() {
        assert_eq!(
            explorer_link("https://etherscan.io/address", "0xabc"),
            "https://etherscan.io/address/0xabc"
        );
    }
}
