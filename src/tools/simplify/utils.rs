/// Private helper functions for item-string simplification
use regex::Regex;
use std::sync::LazyLock;

// `(...)` spans with no nested parenthesis, within a single line
static PAREN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));

// Signed integers (+25, -8) or percentages (30%)
static STAT_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+%|[+-]\d+").expect("valid regex"));

/// True for modifier annotation lines like `{ Implicit Modifier }`.
///
/// Matching is deliberately literal (leading `"{ "`, trailing `"}"` after
/// trimming); the item text format guarantees this shape.
pub fn is_modifier_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("{ ") && trimmed.ends_with('}')
}

/// True if the line carries a stat value, typical for item stat lines.
pub fn contains_stat_value(line: &str) -> bool {
    STAT_VALUE_REGEX.is_match(line)
}

/// Delete every parenthesized span in the line, keeping surrounding text.
///
/// Spans crossing lines or containing a nested `(` are left alone.
pub fn remove_parenthesized(line: &str) -> String {
    PAREN_REGEX.replace_all(line, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_modifier_line() {
        assert!(is_modifier_line("{ Implicit Modifier }"));
        assert!(is_modifier_line("  { Rune Modifier }  "));
        assert!(!is_modifier_line("{no space}"));
        assert!(!is_modifier_line("{ unterminated"));
        assert!(!is_modifier_line("plain text"));
    }

    #[test]
    fn test_contains_stat_value() {
        assert!(contains_stat_value("+25 to Strength"));
        assert!(contains_stat_value("-8 to Mana Cost"));
        assert!(contains_stat_value("30% increased Attack Speed"));
        assert!(!contains_stat_value("Requires Level 60"));
        assert!(!contains_stat_value("Corrupted"));
    }

    #[test]
    fn test_remove_parenthesized() {
        assert_eq!(remove_parenthesized("+25 to Strength (20-30)"), "+25 to Strength ");
        assert_eq!(remove_parenthesized("(a) mid (b)"), " mid ");
        assert_eq!(remove_parenthesized("no parens"), "no parens");
        assert_eq!(remove_parenthesized("()"), "");
    }

    #[test]
    fn test_remove_parenthesized_leaves_unbalanced_alone() {
        assert_eq!(remove_parenthesized("open ( only"), "open ( only");
        assert_eq!(remove_parenthesized("close ) only"), "close ) only");
    }
}
