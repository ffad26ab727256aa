use serde::Serialize;

use addrcheck_crypto::validate;
use addrcheck_diff::{diff_chars, CharDiff};
use addrcheck_types::ComparisonState;

/// The outcome of comparing two raw inputs.
///
/// `diff` is present exactly when `state` is [`ComparisonState::NotEqual`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub state: ComparisonState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<CharDiff>,
}

impl Comparison {
    fn without_diff(state: ComparisonState) -> Self {
        Self { state, diff: None }
    }
}

/// Compare two raw inputs.
///
/// Rules, in order:
/// 1. both empty: nothing to check
/// 2. first non-empty and invalid: first invalid (the second is not looked at)
/// 3. second non-empty and invalid: second invalid
/// 4. both non-empty: equal if they match ignoring letter case, otherwise
///    not equal with a character diff of the raw strings
/// 5. anything else (one side empty): nothing to check
///
/// Equality ignores case on purpose: a checksum mismatch is reported by
/// validation, not as a different address. The raw strings are compared,
/// so a prefixed and an unprefixed rendering of one address are not equal.
pub fn compare(first: &str, second: &str) -> Comparison {
    if first.is_empty() && second.is_empty() {
        return Comparison::without_diff(ComparisonState::NothingToCheck);
    }

    if !first.is_empty() && !validate(first).is_valid() {
        return Comparison::without_diff(ComparisonState::FirstInvalid);
    }

    if !second.is_empty() && !validate(second).is_valid() {
        return Comparison::without_diff(ComparisonState::SecondInvalid);
    }

    if first.is_empty() || second.is_empty() {
        return Comparison::without_diff(ComparisonState::NothingToCheck);
    }

    if first.eq_ignore_ascii_case(second) {
        return Comparison::without_diff(ComparisonState::Equal);
    }

    let diff = diff_chars(first, second);
    tracing::debug!(
        additions = diff.additions(),
        removals = diff.removals(),
        "addresses differ"
    );
    Comparison {
        state: ComparisonState::NotEqual,
        diff: Some(diff),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrcheck_diff::SegmentKind;
    use proptest::prelude::*;

    const X: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const Y: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    fn side(diff: &CharDiff, kind: SegmentKind) -> String {
        diff.segments
            .iter()
            .filter(|s| s.kind == kind || s.kind == SegmentKind::Unchanged)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn both_empty() {
        assert_eq!(compare("", "").state, ComparisonState::NothingToCheck);
    }

    #[test]
    fn first_invalid_wins() {
        assert_eq!(compare("not-an-address", "").state, ComparisonState::FirstInvalid);
        assert_eq!(
            compare("not-an-address", "also-not").state,
            ComparisonState::FirstInvalid
        );
    }

    #[test]
    fn second_invalid() {
        assert_eq!(compare(X, "nope").state, ComparisonState::SecondInvalid);
        assert_eq!(compare("", "nope").state, ComparisonState::SecondInvalid);
    }

    #[test]
    fn bad_checksum_is_invalid() {
        let flipped = "0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert_eq!(compare(flipped, X).state, ComparisonState::FirstInvalid);
        assert_eq!(compare(X, flipped).state, ComparisonState::SecondInvalid);
    }

    #[test]
    fn one_side_empty() {
        assert_eq!(compare(X, "").state, ComparisonState::NothingToCheck);
        assert_eq!(compare("", Y).state, ComparisonState::NothingToCheck);
    }

    #[test]
    fn same_address() {
        let c = compare(X, X);
        assert_eq!(c.state, ComparisonState::Equal);
        assert!(c.diff.is_none());
    }

    #[test]
    fn equal_ignoring_case() {
        assert_eq!(compare(X, &X.to_lowercase()).state, ComparisonState::Equal);
        assert_eq!(compare(&X.to_uppercase(), X).state, ComparisonState::Equal);
    }

    #[test]
    fn prefix_is_part_of_identity() {
        let c = compare(X, &X[2..]);
        assert_eq!(c.state, ComparisonState::NotEqual);
        let diff = c.diff.unwrap();
        assert_eq!(diff.removals(), 2);
        assert_eq!(diff.additions(), 0);
    }

    #[test]
    fn distinct_addresses_carry_diff() {
        let c = compare(X, Y);
        assert_eq!(c.state, ComparisonState::NotEqual);
        let diff = c.diff.unwrap();
        assert_eq!(side(&diff, SegmentKind::Removed), X);
        assert_eq!(side(&diff, SegmentKind::Added), Y);
    }

    #[test]
    fn serializes_state_and_diff() {
        let json = serde_json::to_value(compare(X, Y)).unwrap();
        assert_eq!(json["state"], "not_equal");
        assert!(json["diff"].is_array());

        let json = serde_json::to_value(compare(X, X)).unwrap();
        assert_eq!(json["state"], "equal");
        assert!(json.get("diff").is_none());
    }

    proptest! {
        #[test]
        fn diff_present_iff_not_equal(a in "(0x)?[0-9a-f]{40}|[a-z-]{0,10}", b in "(0x)?[0-9a-f]{40}|[a-z-]{0,10}") {
            let c = compare(&a, &b);
            prop_assert_eq!(c.diff.is_some(), c.state == ComparisonState::NotEqual);
        }

        #[test]
        fn lowercase_addresses_compare_by_content(a in "[0-9a-f]{40}", b in "[0-9a-f]{40}") {
            let c = compare(&a, &b);
            if a == b {
                prop_assert_eq!(c.state, ComparisonState::Equal);
            } else {
                prop_assert_eq!(c.state, ComparisonState::NotEqual);
                let diff = c.diff.unwrap();
                prop_assert_eq!(diff.old_text(), a);
                prop_assert_eq!(diff.new_text(), b);
            }
        }
    }
}
