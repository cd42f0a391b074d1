pub mod assemble;
pub mod error;
pub mod extraction;
pub mod fields;
pub mod fixture;
pub mod language;
pub mod layout;
pub mod model;
pub mod schema;

use error::SomnoError;
use extraction::{PageContent, PdfExtractor};
use layout::Document;
use model::{ExtractOptions, Outcome, ReportKind};

/// Main API entry point: extract the fields of one report from a PDF.
///
/// Decoding failures are errors. A document that decodes but does not carry
/// the report's validation field is an `Outcome::Rejected`, not an error.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    report: ReportKind,
    options: &ExtractOptions,
) -> Result<Outcome, SomnoError> {
    let pages = extractor.extract_pages(pdf_bytes, report.pages())?;
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "decoded {report} report"
    );
    Ok(extract_pages(&pages, report, options))
}

/// Extract from pages already decoded by some backend.
pub fn extract_pages(pages: &[PageContent], report: ReportKind, options: &ExtractOptions) -> Outcome {
    let doc = Document::from_pages(pages, report.pages());
    assemble::assemble(&doc, report, options)
}
