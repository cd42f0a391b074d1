use serde::{Deserialize, Serialize};
use std::fmt;

/// One positioned run of rendered text.
///
/// `x` and `y` are the baseline translation of the fragment's transform, in
/// PDF user space (y grows upwards).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub page: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TextBlock {
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Baseline rounded to whole units, used to put jittery fragments of one
    /// printed line on the same row.
    pub fn row(&self) -> i64 {
        self.y.round() as i64
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// The report families the engine knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Diagnostic,
    Compliance,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Diagnostic, ReportKind::Compliance];

    /// Pages read from the source PDF, in reading order.
    pub fn pages(&self) -> &'static [usize] {
        match self {
            ReportKind::Diagnostic => &[1, 2],
            ReportKind::Compliance => &[1],
        }
    }

    pub fn from_str_loose(s: &str) -> Option<ReportKind> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "diagnostic" | "diagnosticreport" | "diagnostic-report" => Some(ReportKind::Diagnostic),
            "compliance" | "compliancereport" | "compliance-report" => Some(ReportKind::Compliance),
            _ => None,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Diagnostic => write!(f, "diagnostic"),
            ReportKind::Compliance => write!(f, "compliance"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Portuguese,
    Spanish,
    Catalan,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "english"),
            Language::Portuguese => write!(f, "portuguese"),
            Language::Spanish => write!(f, "spanish"),
            Language::Catalan => write!(f, "catalan"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Unknown(String),
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Unknown(raw) => write!(f, "Unknown ({raw})"),
        }
    }
}

/// A single (code, name, value) record of the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedField {
    pub code: String,
    pub name: String,
    pub value: Option<String>,
}

impl ExtractedField {
    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// Schema-ordered fields of one validated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub report: ReportKind,
    pub language: Language,
    pub fields: Vec<ExtractedField>,
}

impl ExtractionResult {
    pub fn field(&self, code: &str) -> Option<&ExtractedField> {
        self.fields.iter().find(|f| f.code == code)
    }

    pub fn value(&self, code: &str) -> Option<&str> {
        self.field(code).and_then(|f| f.value.as_deref())
    }
}

/// Terminal state of one document run through the assembler.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Validated(ExtractionResult),
    /// The document parsed but its anchor field was empty: it does not match
    /// the expected template.
    Rejected {
        report: ReportKind,
        language: Language,
    },
}

impl Outcome {
    pub fn is_validated(&self) -> bool {
        matches!(self, Outcome::Validated(_))
    }

    pub fn language(&self) -> Language {
        match self {
            Outcome::Validated(r) => r.language,
            Outcome::Rejected { language, .. } => *language,
        }
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        match self {
            Outcome::Validated(r) => Some(r),
            Outcome::Rejected { .. } => None,
        }
    }

    pub fn into_result(self) -> Option<ExtractionResult> {
        match self {
            Outcome::Validated(r) => Some(r),
            Outcome::Rejected { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Rewrite localized unit words (e.g. "dias") to English on unit-bearing fields.
    #[serde(default)]
    pub translate_units: bool,
}
