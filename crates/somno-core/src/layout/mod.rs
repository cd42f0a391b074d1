pub mod anchor;
pub mod geometry;
pub mod row;

use crate::extraction::PageContent;
use crate::model::TextBlock;
use std::cmp::Ordering;

/// Visible text blocks of one document in canonical reading order:
/// page ascending, then row (rounded baseline) top to bottom, then left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    blocks: Vec<TextBlock>,
}

impl Document {
    /// Concatenate the requested pages in order, drop invisible fragments and
    /// establish reading order.
    pub fn from_pages(pages: &[PageContent], order: &[usize]) -> Document {
        let blocks = order
            .iter()
            .filter_map(|n| pages.iter().find(|p| p.page_number == *n))
            .flat_map(|page| {
                page.fragments.iter().map(move |f| TextBlock {
                    text: f.text.clone(),
                    page: page.page_number,
                    x: f.x(),
                    y: f.y(),
                    width: f.width,
                    height: f.height,
                })
            })
            .collect();
        Document::from_blocks(blocks)
    }

    pub fn from_blocks(mut blocks: Vec<TextBlock>) -> Document {
        let before = blocks.len();
        blocks.retain(TextBlock::is_visible);
        blocks.sort_by(reading_order);
        tracing::debug!(
            blocks = blocks.len(),
            dropped = before - blocks.len(),
            "normalized document"
        );
        Document { blocks }
    }

    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TextBlock> {
        self.blocks.get(index)
    }

    pub fn text(&self, index: usize) -> Option<&str> {
        self.get(index).map(|b| b.text.as_str())
    }
}

/// Page, then row descending, then x ascending.
pub(crate) fn reading_order(a: &TextBlock, b: &TextBlock) -> Ordering {
    a.page
        .cmp(&b.page)
        .then_with(|| b.row().cmp(&a.row()))
        .then_with(|| a.x.total_cmp(&b.x))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::TextBlock;

    pub fn block(text: &str, page: usize, x: f64, y: f64) -> TextBlock {
        TextBlock {
            text: text.to_string(),
            page,
            x,
            y,
            width: 10.0,
            height: 10.0,
        }
    }

    pub fn sized(text: &str, x: f64, y: f64, width: f64, height: f64) -> TextBlock {
        TextBlock {
            text: text.to_string(),
            page: 1,
            x,
            y,
            width,
            height,
        }
    }
}
