use crate::layout::anchor::find_anchor;
use crate::layout::Document;

/// `label -> value` cells of one tabular row, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowCells {
    row_label: String,
    cells: Vec<(String, String)>,
}

impl RowCells {
    /// Look up a cell by its local label, falling back to the label qualified
    /// by the row title (e.g. `Supine AI` in the `Supine` row).
    pub fn get(&self, local: &str) -> Option<&str> {
        self.lookup(local).or_else(|| {
            let qualified = format!("{} {}", self.row_label, local);
            self.lookup(&qualified)
        })
    }

    fn lookup(&self, label: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }
}

/// Cluster the blocks printed between the baseline of `row_label` (inclusive)
/// and that of `next_row_label` (exclusive) into labelled cells.
///
/// Returns an empty row if either label is missing.
pub fn horizontal_row(doc: &Document, row_label: &str, next_row_label: &str) -> RowCells {
    let (Some(row_idx), Some(next_idx)) = (
        find_anchor(doc, row_label),
        find_anchor(doc, next_row_label),
    ) else {
        return RowCells::default();
    };
    let blocks = doc.blocks();
    let (row, next) = (&blocks[row_idx], &blocks[next_idx]);
    let (y_lo, y_hi) = (next.y, row.y);

    // Blocks are already in reading order, so the band comes out sorted.
    let mut tokens: Vec<&str> = blocks
        .iter()
        .filter(|b| b.page == row.page && y_lo < b.y && b.y <= y_hi)
        .map(|b| b.text.trim())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() % 2 == 1 {
        tokens.remove(0);
    }

    let cells = tokens
        .chunks_exact(2)
        .map(|pair| {
            let label = pair[0].trim_end_matches(':').trim_end();
            (label.to_string(), pair[1].to_string())
        })
        .collect();

    RowCells {
        row_label: row_label.to_string(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::block;

    fn events_table() -> Document {
        Document::from_blocks(vec![
            block("Events totals", 1, 0.0, 300.0),
            block("Apneas:", 1, 100.0, 300.0),
            block("114", 1, 160.0, 300.0),
            block("Hypopneas::", 1, 200.0, 299.9),
            block(" ", 1, 230.0, 300.0),
            block("119", 1, 260.0, 299.8),
            block("Apnea Index", 1, 0.0, 280.0),
            block("Obstructive:", 1, 100.0, 280.0),
            block("5.8", 1, 160.0, 280.0),
            block("Central:", 1, 200.0, 280.0),
            block("10.2", 1, 260.0, 280.0),
            block("Cheyne-Stokes respiration", 1, 0.0, 260.0),
            block("Supine", 1, 0.0, 240.0),
            block("Supine AI:", 1, 100.0, 240.0),
            block("16.9", 1, 160.0, 240.0),
            block("Non-supine", 1, 0.0, 220.0),
        ])
    }

    #[test]
    fn test_pairs_labels_with_values() {
        let row = horizontal_row(&events_table(), "Events totals", "Apnea Index");
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("Apneas"), Some("114"));
        assert_eq!(row.get("Hypopneas"), Some("119"));
    }

    #[test]
    fn test_band_excludes_next_row() {
        let row = horizontal_row(&events_table(), "Apnea Index", "Cheyne-Stokes respiration");
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("Central"), Some("10.2"));
        assert_eq!(row.get("Apneas"), None);
    }

    #[test]
    fn test_qualified_lookup() {
        let row = horizontal_row(&events_table(), "Supine", "Non-supine");
        assert_eq!(row.get("AI"), Some("16.9"));
    }

    #[test]
    fn test_even_token_count_keeps_first_token() {
        // Anchored on a cell label rather than a row title: nothing to drop.
        let doc = Document::from_blocks(vec![
            block("Recording", 1, 0.0, 310.0),
            block("Start:", 1, 100.0, 300.0),
            block("10:27pm", 1, 160.0, 300.0),
            block("Monitoring", 1, 0.0, 290.0),
        ]);
        let row = horizontal_row(&doc, "Start", "Monitoring");
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("Start"), Some("10:27pm"));
    }

    #[test]
    fn test_missing_anchor_gives_empty_row() {
        assert!(horizontal_row(&events_table(), "Breaths", "Apnea Index").is_empty());
        assert!(horizontal_row(&events_table(), "Events totals", "Breaths").is_empty());
    }
}
