//! Text cleanup applied before any heuristic runs.
//!
//! Two views of the same text are produced. [`normalize`] collapses all
//! whitespace, newlines included, and feeds the regex-based extractors and
//! the result's `text`. [`normalize_lines`] keeps line structure for the
//! layout heuristics (first-line name, skills section boundaries).

/// Replace NUL with a space, collapse whitespace runs to one space and trim.
pub fn normalize(raw: &str) -> String {
    raw.replace('\0', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line-preserving variant of [`normalize`].
///
/// Each line is collapsed and trimmed, empty lines are dropped and the rest
/// joined with `\n`.
pub fn normalize_lines(raw: &str) -> String {
    raw.replace('\0', " ")
        .split(is_line_break)
        .map(normalize)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{2028}' | '\u{2029}'
    )
}
