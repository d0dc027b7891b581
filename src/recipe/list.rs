//! Splitting extracted blocks into list items.

use std::sync::LazyLock;

use regex::Regex;

/// `<number>.` followed by the step text.
static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*(\S.*)$").expect("numbered line pattern must compile"));

/// Split an ingredient/tool block into items.
///
/// Blank lines are dropped, a single leading bullet (`-`, `•`, or `* `) is
/// removed and each item is trimmed.
///
/// ```rust
/// use recipe_guide::recipe::split_bulleted;
///
/// assert_eq!(split_bulleted("- a\n- b\n\n- c"), ["a", "b", "c"]);
/// ```
pub fn split_bulleted(block: &str) -> Vec<String> {
    block
        .lines()
        .map(strip_bullet)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a steps block into step texts.
///
/// Only lines starting with `<number>.` are steps; any other line inside the
/// block is dropped rather than merged into the previous step.
///
/// ```rust
/// use recipe_guide::recipe::split_numbered;
///
/// assert_eq!(split_numbered("1. do X\nnote\n2. do Y"), ["do X", "do Y"]);
/// ```
pub fn split_numbered(block: &str) -> Vec<String> {
    block
        .lines()
        .filter_map(|line| {
            NUMBERED_LINE
                .captures(line.trim())
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('•')) {
        return rest.trim();
    }
    match line.strip_prefix('*') {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => line,
    }
}
