//! Slash-command text parsing.
//!
//! Slack delivers the command argument as a single `text` form field. The
//! first whitespace-delimited token selects the operation; everything after
//! the first space is the operation's argument.

/// Parsed slash-command input.
///
/// `sub_command` is the first space-delimited token of the trimmed text and
/// `value` is the remainder, passed through verbatim. Both are empty when
/// the text is empty or whitespace-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    /// Operation selector, e.g. `add` or `list`.
    pub sub_command: String,

    /// Argument text following the first space. Empty when no space exists.
    pub value: String,
}

impl Command {
    /// Parses the `text` field of a slash-command payload.
    ///
    /// Surrounding whitespace is trimmed before splitting; the split happens
    /// at the first space only, so the value keeps any interior spacing.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        match trimmed.split_once(' ') {
            Some((sub_command, value)) => {
                Self { sub_command: sub_command.to_string(), value: value.to_string() }
            },
            None => Self { sub_command: trimmed.to_string(), value: String::new() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sub_command_and_value() {
        let command = Command::parse("add Sushi Place");
        assert_eq!(command.sub_command, "add");
        assert_eq!(command.value, "Sushi Place");
    }

    #[test]
    fn parses_sub_command_without_value() {
        let command = Command::parse("list");
        assert_eq!(command.sub_command, "list");
        assert_eq!(command.value, "");
    }

    #[test]
    fn empty_text_yields_empty_command() {
        let command = Command::parse("");
        assert_eq!(command, Command::default());
    }

    #[test]
    fn whitespace_only_text_yields_empty_command() {
        let command = Command::parse("   \t  ");
        assert_eq!(command, Command::default());
    }

    #[test]
    fn trims_surrounding_whitespace_before_splitting() {
        let command = Command::parse("  add Ramen Shop  ");
        assert_eq!(command.sub_command, "add");
        assert_eq!(command.value, "Ramen Shop");
    }

    #[test]
    fn splits_on_first_space_only() {
        // Interior spacing belongs to the value, including a leading space
        // left by consecutive separators.
        let command = Command::parse("add  Double Space");
        assert_eq!(command.sub_command, "add");
        assert_eq!(command.value, " Double Space");
    }
}
