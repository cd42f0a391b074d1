pub mod compliance;
pub mod diagnostic;

use crate::layout::anchor::find_anchor;
use crate::layout::Document;
use crate::model::{Gender, Language, ReportKind};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Language-independent name of a printed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    // Shared header
    PatientId,
    Dob,
    Age,
    Gender,

    // Diagnostic report
    Bmi,
    RecordingDetails,
    Device,
    Recording,
    MonitoringTimeFlow,
    FlowEvaluation,
    OxygenSaturationEvaluation,
    EventsIndex,
    Supine,
    NonSupine,
    Upright,
    EventsTotal,
    Apneas,
    Hypopneas,
    ApneaIndex,
    Obstructive,
    Central,
    Mixed,
    Unclassified,
    CheyneStokes,
    OxygenDesaturation,
    OxygenSaturationPercentage,
    OxygenSaturationEvalTimePercentage,
    Breaths,
    PulseBpm,
    AnalysisGuidelines,
    Interpretation,
    PrintedOn,

    // Compliance report
    ReportTitle,
    UsageDays,
    UsageDaysAtLeast4Hours,
    UsageDaysUnder4Hours,
    AverageUsageTotalDays,
    AverageUsageDaysUsed,
    MedianUsageDaysUsed,
    SerialNumber,
    Mode,
    MinPressure,
    MaxPressure,
    EprLevel,
    Response,
    TherapyPressure,
    TherapyLeaks,
    TherapyEventsPerHour,
    TherapyApnoeaIndex,
    TherapyCheyneStokes,
    TherapySpo2Time,
    TherapySpo2Median,
    TherapySpo2Percentile95,
}

/// Lowercase tokens identifying each gender in one language.
#[derive(Debug, Clone, Copy)]
pub struct GenderTokens {
    pub male: &'static str,
    pub female: &'static str,
}

pub(crate) const ENGLISH_GENDER: GenderTokens = GenderTokens {
    male: "male",
    female: "female",
};
pub(crate) const PORTUGUESE_GENDER: GenderTokens = GenderTokens {
    male: "masculino",
    female: "feminino",
};
pub(crate) const SPANISH_GENDER: GenderTokens = GenderTokens {
    male: "hombre",
    female: "mujer",
};
pub(crate) const CATALAN_GENDER: GenderTokens = GenderTokens {
    male: "home",
    female: "dona",
};

/// Localized label literals and value translators for one language.
#[derive(Debug)]
pub struct LanguageDictionary {
    language: Language,
    labels: HashMap<LabelKey, &'static str>,
    gender: GenderTokens,
    units: Vec<(Regex, &'static str)>,
}

impl LanguageDictionary {
    pub(crate) fn new(
        language: Language,
        labels: &[(LabelKey, &'static str)],
        gender: GenderTokens,
        units: &[(&'static str, &'static str)],
    ) -> Self {
        let units = units
            .iter()
            .map(|(word, english)| {
                let pattern = format!(r"\b{}\b", regex::escape(word));
                let re = RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("escaped literal is a valid pattern");
                (re, *english)
            })
            .collect();

        LanguageDictionary {
            language,
            labels: labels.iter().copied().collect(),
            gender,
            units,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn label(&self, key: LabelKey) -> Option<&'static str> {
        self.labels.get(&key).copied()
    }

    /// Case-insensitive substring match on the gender tokens. Female is
    /// tested first since "female" contains "male".
    pub fn translate_gender(&self, raw: &str) -> Gender {
        let lower = raw.to_lowercase();
        if lower.contains(self.gender.female) {
            Gender::Female
        } else if lower.contains(self.gender.male) {
            Gender::Male
        } else {
            Gender::Unknown(raw.to_string())
        }
    }

    /// Rewrite localized time and day units to English. Identity for
    /// languages without a unit table.
    pub fn translate_units(&self, value: &str) -> String {
        self.units
            .iter()
            .fold(value.to_string(), |acc, (re, english)| {
                re.replace_all(&acc, *english).into_owned()
            })
    }
}

/// Dictionaries of one report family in resolution priority order.
#[derive(Debug)]
pub struct LanguageRegistry {
    report: ReportKind,
    distinguishing: LabelKey,
    dictionaries: Vec<LanguageDictionary>,
}

static DIAGNOSTIC: LazyLock<LanguageRegistry> = LazyLock::new(diagnostic::registry);
static COMPLIANCE: LazyLock<LanguageRegistry> = LazyLock::new(compliance::registry);

impl LanguageRegistry {
    /// Build a registry. The first dictionary is the fallback.
    pub(crate) fn new(
        report: ReportKind,
        distinguishing: LabelKey,
        dictionaries: Vec<LanguageDictionary>,
    ) -> Self {
        assert!(!dictionaries.is_empty(), "registry needs a fallback language");
        LanguageRegistry {
            report,
            distinguishing,
            dictionaries,
        }
    }

    pub fn for_report(report: ReportKind) -> &'static LanguageRegistry {
        match report {
            ReportKind::Diagnostic => &DIAGNOSTIC,
            ReportKind::Compliance => &COMPLIANCE,
        }
    }

    pub fn report(&self) -> ReportKind {
        self.report
    }

    /// Key whose literal differs in every language and appears once per document.
    pub fn distinguishing(&self) -> LabelKey {
        self.distinguishing
    }

    pub fn dictionaries(&self) -> &[LanguageDictionary] {
        &self.dictionaries
    }

    pub fn get(&self, language: Language) -> Option<&LanguageDictionary> {
        self.dictionaries.iter().find(|d| d.language == language)
    }

    pub fn fallback(&self) -> &LanguageDictionary {
        &self.dictionaries[0]
    }

    /// Pick the first dictionary whose distinguishing label is present in
    /// `doc`; fall back to the first (English) dictionary.
    pub fn resolve(&self, doc: &Document) -> &LanguageDictionary {
        self.dictionaries
            .iter()
            .find(|d| {
                d.label(self.distinguishing)
                    .is_some_and(|label| find_anchor(doc, label).is_some())
            })
            .unwrap_or_else(|| self.fallback())
    }
}
