//! Field extraction strategies over a normalized [`Document`].
//!
//! Every strategy is total: a missing anchor or too few following blocks
//! yields `""` or `None` for that one field and never an error.

pub mod scan;
pub mod text;

use crate::layout::anchor::{find_anchor_from, find_titled};
use crate::layout::Document;

/// Value of the first `Label: value` block, matched case-insensitively.
///
/// Not found is `""`.
pub fn titled_value(doc: &Document, label: &str) -> String {
    find_titled(doc, label)
        .and_then(|i| doc.text(i))
        .and_then(|t| t.split_once(':'))
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

/// Trimmed text of the block right after the `label` anchor.
///
/// Not found, or anchor is the last block, is `""`.
pub fn first_after(doc: &Document, label: &str) -> String {
    first_after_from(doc, label, 0)
}

/// [`first_after`] restricted to anchors at index `from` or later.
pub fn first_after_from(doc: &Document, label: &str, from: usize) -> String {
    find_anchor_from(doc, label, from)
        .and_then(|i| doc.text(i + 1))
        .map(|t| t.trim().to_string())
        .unwrap_or_default()
}

/// Text of the block `offset` positions after the block at `anchor`.
pub fn at_offset(doc: &Document, anchor: Option<usize>, offset: usize) -> Option<String> {
    let index = anchor?.checked_add(offset)?;
    doc.text(index).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::anchor::find_anchor;
    use crate::layout::test_support::block;

    fn recording_row() -> Document {
        Document::from_blocks(vec![
            block("Patient ID: 123455", 1, 400.0, 700.0),
            block("gender:  Male ", 1, 400.0, 680.0),
            block("Recording", 1, 0.0, 100.0),
            block("Start:", 1, 20.0, 100.0),
            block("10:27pm", 1, 40.0, 100.0),
            block("End:", 1, 80.0, 100.0),
            block("6:10am", 1, 100.0, 100.0),
            block("Duration - hr:", 1, 130.0, 100.0),
            block("07:42", 1, 160.0, 100.0),
            block("Monitoring time (flow)", 1, 0.0, 90.0),
        ])
    }

    #[test]
    fn test_titled_value_preserves_value_case() {
        let doc = recording_row();
        assert_eq!(titled_value(&doc, "PATIENT ID"), "123455");
        assert_eq!(titled_value(&doc, "Gender"), "Male");
        assert_eq!(titled_value(&doc, "BMI"), "");
    }

    #[test]
    fn test_titled_value_keeps_later_colons() {
        let doc = Document::from_blocks(vec![block("Printed: 10:36pm", 1, 0.0, 0.0)]);
        assert_eq!(titled_value(&doc, "Printed"), "10:36pm");
    }

    #[test]
    fn test_first_after() {
        let doc = recording_row();
        assert_eq!(first_after(&doc, "Recording"), "Start:");
        assert_eq!(first_after(&doc, "Monitoring time (flow)"), "");
        assert_eq!(first_after(&doc, "Device"), "");
    }

    #[test]
    fn test_first_after_from_scope() {
        let doc = recording_row();
        assert_eq!(first_after_from(&doc, "End", 0), "6:10am");
        assert_eq!(first_after_from(&doc, "Start", 4), "");
    }

    #[test]
    fn test_at_offset_triples() {
        let doc = recording_row();
        let anchor = find_anchor(&doc, "Recording");
        assert_eq!(at_offset(&doc, anchor, 2).as_deref(), Some("10:27pm"));
        assert_eq!(at_offset(&doc, anchor, 4).as_deref(), Some("6:10am"));
        assert_eq!(at_offset(&doc, anchor, 6).as_deref(), Some("07:42"));
    }

    #[test]
    fn test_at_offset_out_of_range() {
        let doc = recording_row();
        let anchor = find_anchor(&doc, "Recording");
        assert_eq!(at_offset(&doc, anchor, 8), None);
        assert_eq!(at_offset(&doc, None, 1), None);
        assert_eq!(at_offset(&doc, Some(usize::MAX), 1), None);
    }
}
