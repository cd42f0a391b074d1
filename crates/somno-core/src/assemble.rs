//! Report assembly: language resolution, schema evaluation and validation.

use crate::language::{LanguageDictionary, LanguageRegistry};
use crate::layout::Document;
use crate::model::{ExtractOptions, ExtractedField, ExtractionResult, Outcome, ReportKind};
use crate::schema::Schema;

/// Run one report family's schema over a normalized document.
///
/// Resolves the language from the document, evaluates every field in schema
/// order and rejects the document when the validation field came out empty.
pub fn assemble(doc: &Document, report: ReportKind, options: &ExtractOptions) -> Outcome {
    let dictionary = LanguageRegistry::for_report(report).resolve(doc);
    tracing::info!("Handling a {} {} report", dictionary.language(), report);
    assemble_with(doc, report, dictionary, options)
}

/// [`assemble`] with the language already chosen.
pub fn assemble_with(
    doc: &Document,
    report: ReportKind,
    dictionary: &LanguageDictionary,
    options: &ExtractOptions,
) -> Outcome {
    let schema = Schema::for_report(report);
    let fields: Vec<ExtractedField> = schema
        .fields()
        .iter()
        .map(|spec| {
            let field = ExtractedField {
                code: spec.code.to_string(),
                name: spec.name.to_string(),
                value: spec.evaluate(doc, dictionary, options),
            };
            if !field.has_value() {
                tracing::debug!(code = spec.code, "field absent");
            }
            field
        })
        .collect();

    let valid = fields
        .iter()
        .find(|f| f.code == schema.validation_code())
        .is_some_and(ExtractedField::has_value);

    let language = dictionary.language();
    if !valid {
        tracing::warn!(
            report = %report,
            language = %language,
            code = schema.validation_code(),
            "validation field empty, rejecting document"
        );
        return Outcome::Rejected { report, language };
    }

    let found = fields.iter().filter(|f| f.has_value()).count();
    tracing::debug!(found, total = fields.len(), "assembled {report} report");

    Outcome::Validated(ExtractionResult {
        report,
        language,
        fields,
    })
}
