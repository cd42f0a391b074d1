//! Recorded-layout fixtures: decoded pages plus the values a correct
//! extraction must produce.
//!
//! Fixtures pin the offset contracts of each template. When a vendor reflows
//! a report, `verify` reports which anchors moved instead of silently
//! emitting neighbouring values.

use crate::assemble::assemble_with;
use crate::error::SomnoError;
use crate::extraction::PageContent;
use crate::language::{LabelKey, LanguageDictionary, LanguageRegistry};
use crate::layout::Document;
use crate::model::{ExtractOptions, Language, ReportKind};
use crate::schema::{Extractor, Schema};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub report: ReportKind,
    #[serde(default)]
    pub description: Option<String>,
    pub pages: Vec<PageContent>,
    pub expected: Vec<ExpectedField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedField {
    pub code: String,
    /// `None` asserts the field is absent.
    pub value: Option<String>,
}

/// Load a fixture from a JSON file.
pub fn load_fixture(path: &Path) -> Result<Fixture, SomnoError> {
    let content = std::fs::read_to_string(path).map_err(|e| SomnoError::FixtureLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let fixture: Fixture = serde_json::from_str(&content).map_err(|e| SomnoError::FixtureLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_fixture(&fixture)?;
    Ok(fixture)
}

/// Parse a fixture from a JSON string (no file path context).
pub fn parse_fixture_str(json: &str) -> Result<Fixture, SomnoError> {
    let fixture: Fixture = serde_json::from_str(json)?;
    validate_fixture(&fixture)?;
    Ok(fixture)
}

pub fn validate_fixture(fixture: &Fixture) -> Result<(), SomnoError> {
    if fixture.expected.is_empty() {
        return Err(SomnoError::FixtureInvalid(
            "expected must not be empty".into(),
        ));
    }

    let schema = Schema::for_report(fixture.report);
    let mut seen = HashSet::new();
    for field in &fixture.expected {
        if !schema.contains(&field.code) {
            return Err(SomnoError::FixtureInvalid(format!(
                "code '{}' is not part of the {} schema",
                field.code, fixture.report
            )));
        }
        if !seen.insert(field.code.as_str()) {
            return Err(SomnoError::FixtureInvalid(format!(
                "code '{}' is listed twice",
                field.code
            )));
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The dictionary has no literal for the anchor.
    MissingLabel,
    AnchorNotFound,
    /// Anchor found, but the value position lies past the last block.
    PastEnd { index: usize, len: usize },
}

/// An offset contract that does not hold on a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractViolation {
    pub code: &'static str,
    pub anchor: LabelKey,
    pub kind: ViolationKind,
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::MissingLabel => {
                write!(f, "{}: no label for {:?}", self.code, self.anchor)
            }
            ViolationKind::AnchorNotFound => {
                write!(f, "{}: anchor {:?} not found", self.code, self.anchor)
            }
            ViolationKind::PastEnd { index, len } => write!(
                f,
                "{}: value of {:?} expected at block {index} of {len}",
                self.code, self.anchor
            ),
        }
    }
}

/// Check every offset contract of `schema` against `doc`.
pub fn check_contracts(
    doc: &Document,
    dictionary: &LanguageDictionary,
    schema: &Schema,
) -> Vec<ContractViolation> {
    schema
        .fields()
        .iter()
        .filter_map(|spec| {
            let Extractor::AtOffset(contract) = spec.extractor else {
                return None;
            };
            let violation = |kind| ContractViolation {
                code: spec.code,
                anchor: contract.anchor,
                kind,
            };

            let Some(label) = dictionary.label(contract.anchor) else {
                return Some(violation(ViolationKind::MissingLabel));
            };
            let Some(anchor) = contract.locate(doc, label) else {
                return Some(violation(ViolationKind::AnchorNotFound));
            };
            let index = anchor.saturating_add(contract.offset);
            (index >= doc.len()).then(|| {
                violation(ViolationKind::PastEnd {
                    index,
                    len: doc.len(),
                })
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub code: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FixtureReport {
    pub outcome_validated: bool,
    pub language: Language,
    pub mismatches: Vec<Mismatch>,
    pub violations: Vec<ContractViolation>,
}

impl FixtureReport {
    pub fn passed(&self) -> bool {
        self.outcome_validated && self.mismatches.is_empty() && self.violations.is_empty()
    }
}

/// Run a fixture's pages through the pipeline and compare against its
/// expected values.
pub fn verify(fixture: &Fixture, options: &ExtractOptions) -> FixtureReport {
    let doc = Document::from_pages(&fixture.pages, fixture.report.pages());
    let dictionary = LanguageRegistry::for_report(fixture.report).resolve(&doc);
    let schema = Schema::for_report(fixture.report);

    let violations = check_contracts(&doc, dictionary, schema);
    let outcome = assemble_with(&doc, fixture.report, dictionary, options);

    let mismatches = match outcome.result() {
        Some(result) => fixture
            .expected
            .iter()
            .filter_map(|expected| {
                let actual = result.value(&expected.code).map(str::to_string);
                (actual != expected.value).then(|| Mismatch {
                    code: expected.code.clone(),
                    expected: expected.value.clone(),
                    actual,
                })
            })
            .collect(),
        None => Vec::new(),
    };

    for violation in &violations {
        tracing::warn!(%violation, "offset contract broken");
    }

    FixtureReport {
        outcome_validated: outcome.is_validated(),
        language: dictionary.language(),
        mismatches,
        violations,
    }
}
