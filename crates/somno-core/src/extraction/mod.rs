pub mod fragments;
pub mod pdftotext;

use crate::error::SomnoError;
use serde::{Deserialize, Serialize};

/// A positioned text fragment as produced by a PDF text decoder.
///
/// `transform` is the 2D affine positioning matrix `[a, b, c, d, e, f]`;
/// the baseline origin is `(e, f)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFragment {
    #[serde(rename = "str")]
    pub text: String,
    pub width: f64,
    pub height: f64,
    pub transform: [f64; 6],
}

impl RawFragment {
    /// Fragment with an identity scale placed at baseline `(x, y)`.
    pub fn at(text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        RawFragment {
            text: text.into(),
            width,
            height,
            transform: [height, 0.0, 0.0, height, x, y],
        }
    }

    pub fn x(&self) -> f64 {
        self.transform[4]
    }

    pub fn y(&self) -> f64 {
        self.transform[5]
    }
}

/// Fragments decoded from a single page, in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(rename = "page")]
    pub page_number: usize,
    #[serde(rename = "items")]
    pub fragments: Vec<RawFragment>,
}

/// Trait for PDF text decoding backends.
pub trait PdfExtractor: Send + Sync {
    /// Decode the requested 1-based pages. Pages the document does not have
    /// are silently absent from the result.
    fn extract_pages(&self, pdf_bytes: &[u8], pages: &[usize])
        -> Result<Vec<PageContent>, SomnoError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
