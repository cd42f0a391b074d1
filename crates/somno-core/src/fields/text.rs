use crate::layout::Document;

/// Join the texts of all blocks from `start` on with single spaces, stopping
/// before the first block whose trimmed text starts with `limit`.
///
/// Used for free-text narrative such as interpretations and footnotes.
pub fn concat_until(doc: &Document, limit: &str, start: usize) -> String {
    doc.blocks()
        .iter()
        .skip(start)
        .take_while(|b| !b.text.trim().starts_with(limit))
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::block;

    fn footer() -> Document {
        Document::from_blocks(vec![
            block("Interpretation", 1, 0.0, 300.0),
            block("This patient needs ongoing therapy.", 1, 0.0, 290.0),
            block("Electronically signed by Dr Alexis Physician", 1, 0.0, 280.0),
            block("  Printed on 28/04/2022", 1, 0.0, 100.0),
            block("Page 1 of 2", 1, 0.0, 90.0),
        ])
    }

    #[test]
    fn test_concat_until_limit() {
        assert_eq!(
            concat_until(&footer(), "Printed on", 1),
            "This patient needs ongoing therapy. Electronically signed by Dr Alexis Physician"
        );
    }

    #[test]
    fn test_concat_runs_to_end_without_limit() {
        assert_eq!(concat_until(&footer(), "Nowhere", 4), "Page 1 of 2");
    }

    #[test]
    fn test_concat_past_end_is_empty() {
        assert_eq!(concat_until(&footer(), "Printed on", 42), "");
        assert_eq!(concat_until(&footer(), "Printed on", 3), "");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("32 years"), "32");
        assert_eq!(digits_only("none"), "");
    }
}
