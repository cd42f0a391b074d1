//! Geometric predicates over text blocks and the header finders built on them.
//!
//! Report headers print right-aligned text (dates, patient names) as
//! independent fragments; these helpers recover them by right margin.

use crate::layout::Document;
use crate::model::TextBlock;
use std::cmp::Ordering;

pub fn ends_on_same_right_margin(a: &TextBlock, b: &TextBlock) -> bool {
    (a.right() - b.right()).abs() < 1.0
}

/// `a` sits at least one row of `b` higher than `b`.
pub fn is_above(a: &TextBlock, b: &TextBlock) -> bool {
    a.y >= b.y + b.height
}

/// `a` sits more than one row of `b` lower than `b`.
pub fn is_below(a: &TextBlock, b: &TextBlock) -> bool {
    a.y < b.y - b.height
}

/// Row descending, then right to left.
fn top_right_first(a: &&TextBlock, b: &&TextBlock) -> Ordering {
    b.row().cmp(&a.row()).then_with(|| b.x.total_cmp(&a.x))
}

fn on_page_top_right_first(doc: &Document, page: usize) -> Vec<&TextBlock> {
    let mut blocks: Vec<&TextBlock> = doc.blocks().iter().filter(|b| b.page == page).collect();
    blocks.sort_by(top_right_first);
    blocks
}

/// The top-most, right-most block of `page`.
pub fn top_right(doc: &Document, page: usize) -> Option<&TextBlock> {
    on_page_top_right_first(doc, page).into_iter().next()
}

/// The first block of `anchor`'s page, scanning top-right first, that lies
/// below `anchor` and ends on its right margin.
pub fn below_on_margin<'a>(doc: &'a Document, anchor: &TextBlock) -> Option<&'a TextBlock> {
    on_page_top_right_first(doc, anchor.page)
        .into_iter()
        .find(|b| ends_on_same_right_margin(b, anchor) && is_below(b, anchor))
}

/// The nearest block above `anchor` that ends on its right margin.
///
/// Used for the reporting period printed right-aligned above the patient
/// identifier.
pub fn nearest_above_on_margin<'a>(
    doc: &'a Document,
    anchor: &TextBlock,
) -> Option<&'a TextBlock> {
    doc.blocks()
        .iter()
        .filter(|b| is_above(b, anchor) && ends_on_same_right_margin(b, anchor))
        .last()
}
