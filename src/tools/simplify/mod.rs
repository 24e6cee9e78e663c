mod utils;


use utils::*;

/// Simplify raw item text.
///
/// Works line by line, in order, with one bit of lookback state:
/// 1. Modifier lines (trimmed form starts with `"{ "` and ends with `"}"`)
///    are dropped, and the line right after one is emitted with its
///    parenthesized spans removed.
/// 2. Stat lines (containing values like `+25`, `-8` or `30%`) are emitted
///    with parenthesized spans removed.
/// 3. Everything else passes through unchanged.
///
/// Only modifier lines are dropped, so the output never has more lines than
/// the input. Parenthesis removal is per line and non-nested; spans crossing
/// lines are not handled.
///
/// # Examples
/// ```
/// use itembridge::tools::simplify::simplify;
///
/// let raw = "{ Implicit Modifier }\n+25 to Strength (20-30)\nCorrupted";
/// assert_eq!(simplify(raw), "+25 to Strength \nCorrupted");
/// ```
pub fn simplify(text: &str) -> String {
    let mut simplified: Vec<String> = Vec::new();
    let mut skip_next = false;

    for line in text.split('\n') {
        if is_modifier_line(line) {
            // Annotation for the stat that follows; drop it and mark the
            // next line for cleanup.
            skip_next = true;
        } else if skip_next {
            simplified.push(remove_parenthesized(line));
            skip_next = false;
        } else if contains_stat_value(line) {
            simplified.push(remove_parenthesized(line));
        } else {
            simplified.push(line.to_string());
        }
    }

    simplified.join("\n")
}
