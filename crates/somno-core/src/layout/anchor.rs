//! Label anchors: locating the block that carries a known literal.
//!
//! All lookups are linear scans in reading order and return the first match.
//! A missing label is `None`, never an error.

use crate::layout::Document;

/// Index of the first block whose trimmed text is exactly `label` or `label:`.
pub fn find_anchor(doc: &Document, label: &str) -> Option<usize> {
    find_anchor_from(doc, label, 0)
}

/// Like [`find_anchor`], considering only blocks at index `from` or later.
pub fn find_anchor_from(doc: &Document, label: &str, from: usize) -> Option<usize> {
    doc.blocks()
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, b)| {
            let text = b.text.trim();
            text == label || text.strip_suffix(':') == Some(label)
        })
        .map(|(i, _)| i)
}

/// Index of the first block whose text starts with `prefix`.
pub fn find_prefixed(doc: &Document, prefix: &str) -> Option<usize> {
    doc.blocks()
        .iter()
        .position(|b| b.text.trim_start().starts_with(prefix))
}

/// Index of the first `Label: value` block, matching the label case-insensitively.
pub fn find_titled(doc: &Document, label: &str) -> Option<usize> {
    let needle = format!("{}:", label.to_lowercase());
    doc.blocks()
        .iter()
        .position(|b| b.text.to_lowercase().starts_with(&needle))
}
