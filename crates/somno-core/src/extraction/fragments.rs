use crate::error::SomnoError;
use crate::extraction::{PageContent, PdfExtractor};
use serde::{Deserialize, Serialize};

/// Already-decoded fragments, as dumped by a pdf.js-style text decoder.
///
/// ```json
/// {"pages": [{"page": 1, "items": [
///     {"str": "Patient ID: 123455", "width": 74.6, "height": 9,
///      "transform": [9, 0, 0, 9, 455.35, 703.51]}
/// ]}]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FragmentDump {
    pub pages: Vec<PageContent>,
}

impl FragmentDump {
    pub fn from_json(bytes: &[u8]) -> Result<FragmentDump, SomnoError> {
        let dump: FragmentDump =
            serde_json::from_slice(bytes).map_err(|e| SomnoError::Fragments(e.to_string()))?;
        if let Some(p) = dump.pages.iter().find(|p| p.page_number == 0) {
            return Err(SomnoError::Fragments(format!(
                "page numbers are 1-based, found page {} with {} item(s)",
                p.page_number,
                p.fragments.len()
            )));
        }
        Ok(dump)
    }
}

/// Extraction backend that reads a JSON [`FragmentDump`] instead of PDF bytes.
pub struct FragmentDumpExtractor;

impl PdfExtractor for FragmentDumpExtractor {
    fn extract_pages(
        &self,
        dump_bytes: &[u8],
        pages: &[usize],
    ) -> Result<Vec<PageContent>, SomnoError> {
        let dump = FragmentDump::from_json(dump_bytes)?;
        Ok(dump
            .pages
            .into_iter()
            .filter(|p| pages.contains(&p.page_number))
            .collect())
    }

    fn backend_name(&self) -> &str {
        "fragment-dump"
    }
}
