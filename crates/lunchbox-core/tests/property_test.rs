//! Property-based tests for slash-command parsing invariants.
//!
//! Tests the parsing rules that must hold regardless of input text. Uses
//! deterministic, in-memory testing without external dependencies.

#![allow(clippy::unwrap_used)] // Test regex patterns are known to be valid

use lunchbox_core::Command;
use proptest::{prelude::*, test_runner::Config as ProptestConfig};

/// Deterministic property test configuration for CI stability.
fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 50,
        timeout: 5000, // 5 seconds max
        fork: false,
        failure_persistence: None,
        source_file: None,
        ..ProptestConfig::default()
    }
}

/// Sub-command tokens: non-empty, no whitespace.
fn sub_command_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,12}").unwrap()
}

/// Argument text with interior spaces but no surrounding whitespace.
fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9][a-zA-Z0-9 '&-]{0,40}[a-zA-Z0-9]").unwrap()
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Parsing never panics, whatever the caller sends.
    #[test]
    fn parse_never_panics(text in any::<String>()) {
        let _ = Command::parse(&text);
    }

    /// The sub-command token never contains a space.
    #[test]
    fn sub_command_contains_no_space(text in any::<String>()) {
        let command = Command::parse(&text);
        prop_assert!(!command.sub_command.contains(' '));
    }

    /// A sub-command followed by an argument splits at the first space with
    /// the argument passed through verbatim.
    #[test]
    fn splits_sub_command_from_value(
        sub in sub_command_strategy(),
        value in value_strategy(),
    ) {
        let command = Command::parse(&format!("{sub} {value}"));
        prop_assert_eq!(&command.sub_command, &sub);
        prop_assert_eq!(&command.value, &value);
    }

    /// Text without any space is all sub-command, with an empty value.
    #[test]
    fn spaceless_text_has_empty_value(sub in sub_command_strategy()) {
        let command = Command::parse(&sub);
        prop_assert_eq!(&command.sub_command, &sub);
        prop_assert_eq!(&command.value, "");
    }

    /// Surrounding whitespace never changes the parse result.
    #[test]
    fn surrounding_whitespace_is_ignored(
        sub in sub_command_strategy(),
        value in value_strategy(),
        pad_left in prop::string::string_regex("[ \t]{0,4}").unwrap(),
        pad_right in prop::string::string_regex("[ \t]{0,4}").unwrap(),
    ) {
        let bare = Command::parse(&format!("{sub} {value}"));
        let padded = Command::parse(&format!("{pad_left}{sub} {value}{pad_right}"));
        prop_assert_eq!(bare, padded);
    }
}
