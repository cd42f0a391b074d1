use rayon::prelude::*;
use somno_core::error::SomnoError;
use somno_core::extraction::fragments::FragmentDumpExtractor;
use somno_core::extraction::pdftotext::PdftotextExtractor;
use somno_core::extraction::PdfExtractor;
use somno_core::model::{ExtractOptions, Outcome, ReportKind};
use std::path::{Path, PathBuf};

use crate::output;

/// One input file and what became of it.
pub struct Extracted {
    pub path: PathBuf,
    pub result: Result<Outcome, SomnoError>,
}

impl Extracted {
    pub fn succeeded(&self) -> bool {
        matches!(&self.result, Ok(outcome) if outcome.is_validated())
    }
}

pub fn run(
    input_files: Vec<PathBuf>,
    report: &str,
    output_format: &str,
    output_file: Option<PathBuf>,
    translate_units: bool,
    jobs: Option<usize>,
) -> Result<(), SomnoError> {
    let report = super::report_kind(report)?;
    let options = ExtractOptions { translate_units };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .build()
        .map_err(|e| SomnoError::Extraction(format!("could not start worker pool: {e}")))?;

    // Documents share nothing, so each runs its own pipeline.
    let extracted: Vec<Extracted> = pool.install(|| {
        input_files
            .into_par_iter()
            .map(|path| {
                let result = extract_file(&path, report, &options);
                Extracted { path, result }
            })
            .collect()
    });

    match output_format {
        "json" => output::json::print(&extracted)?,
        _ => output::table::print(&extracted),
    }

    if let Some(path) = output_file {
        std::fs::write(&path, output::json::render(&extracted)?)?;
        eprintln!(
            "Extracted {} document(s), written to {}",
            extracted.len(),
            path.display()
        );
    }

    let failed = extracted.iter().filter(|e| !e.succeeded()).count();
    if failed > 0 {
        return Err(SomnoError::Extraction(format!(
            "{failed} of {} document(s) could not be extracted",
            extracted.len()
        )));
    }

    Ok(())
}

fn extract_file(
    path: &Path,
    report: ReportKind,
    options: &ExtractOptions,
) -> Result<Outcome, SomnoError> {
    let bytes = std::fs::read(path)?;

    // Determine input type by extension
    let is_dump = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let extractor: Box<dyn PdfExtractor> = if is_dump {
        Box::new(FragmentDumpExtractor)
    } else {
        Box::new(PdftotextExtractor::new())
    };

    tracing::debug!(
        file = %path.display(),
        backend = extractor.backend_name(),
        "extracting"
    );
    somno_core::extract_pdf(&bytes, extractor.as_ref(), report, options)
}
