//! Forward scans for numbers and durations following a row title.

use crate::layout::Document;
use regex::Regex;
use std::sync::LazyLock;

/// A whole-token elapsed duration such as `6:08` or `06:44`.
static DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}$").expect("valid duration pattern"));

/// Anything carrying a `h:mm` clock reading, including `10:27pm`.
static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d:\d\d").expect("valid clock pattern"));

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)").expect("valid number pattern"));

/// True for tokens that start with a decimal number (`34.5`, `100.0`, `7%`),
/// excluding clock readings and durations.
pub fn is_numeric(token: &str) -> bool {
    let token = token.trim();
    LEADING_NUMBER.is_match(token) && !CLOCK.is_match(token)
}

pub fn is_duration(token: &str) -> bool {
    DURATION.is_match(token.trim())
}

/// Left-pad a duration with zeros to the `hh:mm` width.
pub fn pad_duration(duration: &str) -> String {
    format!("{:0>5}", duration.trim())
}

/// Collect up to `n` numeric block texts after `after`. Missing slots are `None`.
pub fn number_sequence(doc: &Document, after: usize, n: usize) -> Vec<Option<String>> {
    let mut found: Vec<Option<String>> = doc
        .blocks()
        .iter()
        .skip(after.saturating_add(1))
        .filter(|b| is_numeric(&b.text))
        .take(n)
        .map(|b| Some(b.text.trim().to_string()))
        .collect();
    found.resize(n, None);
    found
}

/// The first duration at or after `from`, zero-padded to five characters.
pub fn next_duration(doc: &Document, from: usize) -> Option<String> {
    doc.blocks()
        .iter()
        .skip(from)
        .find(|b| is_duration(&b.text))
        .map(|b| pad_duration(&b.text))
}
