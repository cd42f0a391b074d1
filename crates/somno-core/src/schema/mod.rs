//! Declarative field schemas.
//!
//! A schema is an ordered list of [`FieldSpec`]s. Each spec names the
//! localized labels it needs through [`LabelKey`]s, so one schema serves
//! every language registered for its report family.

pub mod compliance;
pub mod diagnostic;

use crate::fields::scan::{next_duration, number_sequence, pad_duration};
use crate::fields::text::{concat_until, digits_only};
use crate::fields::{at_offset, first_after, first_after_from, titled_value};
use crate::language::{LabelKey, LanguageDictionary};
use crate::layout::anchor::{find_anchor, find_prefixed, find_titled};
use crate::layout::geometry::{below_on_margin, nearest_above_on_margin, top_right};
use crate::layout::row::horizontal_row;
use crate::layout::Document;
use crate::model::{ExtractOptions, ReportKind};
use std::fmt;
use std::sync::LazyLock;

/// Page holding the report header.
const HEADER_PAGE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorMatch {
    /// Trimmed text equals the label, optionally followed by `:`.
    Exact,
    /// Text starts with the label.
    Prefix,
}

/// A value expected exactly `offset` blocks after its anchor.
///
/// The layouts these are written against print `label, separator, value`
/// runs, so offsets step by two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetContract {
    pub anchor: LabelKey,
    pub matching: AnchorMatch,
    pub offset: usize,
}

impl OffsetContract {
    pub fn locate(&self, doc: &Document, label: &str) -> Option<usize> {
        match self.matching {
            AnchorMatch::Exact => find_anchor(doc, label),
            AnchorMatch::Prefix => find_prefixed(doc, label),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// Value of the `Label: value` block.
    Titled(LabelKey),
    /// The block right after the label.
    FirstAfter(LabelKey),
    /// The block right after `key`, searching from the first block prefixed
    /// by `scope`.
    FirstAfterWithin { scope: LabelKey, key: LabelKey },
    AtOffset(OffsetContract),
    /// Slot `slot` of the first `count` numbers following the row title.
    NumberInRow {
        row: LabelKey,
        count: usize,
        slot: usize,
    },
    /// The first duration following the row title.
    DurationInRow(LabelKey),
    /// A labelled cell of the band between two row titles.
    RowCell {
        row: LabelKey,
        next_row: LabelKey,
        cell: LabelKey,
    },
    /// Free text from `skip` blocks after the anchor up to `limit`.
    ConcatAfter {
        anchor: LabelKey,
        skip: usize,
        limit: LabelKey,
    },
    HeaderTopRight,
    HeaderBelowTopRight,
    /// The right-aligned block printed above the titled `key` block.
    DateRange(LabelKey),
}

impl Extractor {
    /// Every label key this extractor reads.
    pub fn labels(&self) -> Vec<LabelKey> {
        match *self {
            Extractor::Titled(k)
            | Extractor::FirstAfter(k)
            | Extractor::DurationInRow(k)
            | Extractor::DateRange(k) => vec![k],
            Extractor::FirstAfterWithin { scope, key } => vec![scope, key],
            Extractor::AtOffset(c) => vec![c.anchor],
            Extractor::NumberInRow { row, .. } => vec![row],
            Extractor::RowCell {
                row,
                next_row,
                cell,
            } => vec![row, next_row, cell],
            Extractor::ConcatAfter { anchor, limit, .. } => vec![anchor, limit],
            Extractor::HeaderTopRight | Extractor::HeaderBelowTopRight => Vec::new(),
        }
    }

    fn run(&self, doc: &Document, dict: &LanguageDictionary) -> Option<String> {
        let label = |key| dict.label(key);

        match *self {
            Extractor::Titled(key) => Some(titled_value(doc, label(key)?)),
            Extractor::FirstAfter(key) => Some(first_after(doc, label(key)?)),
            Extractor::FirstAfterWithin { scope, key } => {
                let (scope, key) = (label(scope)?, label(key)?);
                let from = find_prefixed(doc, scope)?;
                Some(first_after_from(doc, key, from))
            }
            Extractor::AtOffset(contract) => {
                let anchor = contract.locate(doc, label(contract.anchor)?);
                at_offset(doc, anchor, contract.offset)
            }
            Extractor::NumberInRow { row, count, slot } => {
                let row = find_prefixed(doc, label(row)?)?;
                number_sequence(doc, row, count).into_iter().nth(slot).flatten()
            }
            Extractor::DurationInRow(row) => {
                let row = find_prefixed(doc, label(row)?)?;
                next_duration(doc, row)
            }
            Extractor::RowCell {
                row,
                next_row,
                cell,
            } => {
                let cells = horizontal_row(doc, label(row)?, label(next_row)?);
                cells.get(label(cell)?).map(str::to_string)
            }
            Extractor::ConcatAfter {
                anchor,
                skip,
                limit,
            } => {
                let (anchor, limit) = (label(anchor)?, label(limit)?);
                Some(
                    find_anchor(doc, anchor)
                        .map(|i| concat_until(doc, limit, i.saturating_add(skip)))
                        .unwrap_or_default(),
                )
            }
            Extractor::HeaderTopRight => top_right(doc, HEADER_PAGE).map(|b| b.text.clone()),
            Extractor::HeaderBelowTopRight => {
                let date = top_right(doc, HEADER_PAGE)?;
                below_on_margin(doc, date).map(|b| b.text.clone())
            }
            Extractor::DateRange(key) => {
                let titled = find_titled(doc, label(key)?).and_then(|i| doc.get(i))?;
                nearest_above_on_margin(doc, titled).map(|b| b.text.clone())
            }
        }
    }
}

impl fmt::Display for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extractor::Titled(k) => write!(f, "titled({k:?})"),
            Extractor::FirstAfter(k) => write!(f, "first-after({k:?})"),
            Extractor::FirstAfterWithin { scope, key } => {
                write!(f, "first-after({key:?} within {scope:?})")
            }
            Extractor::AtOffset(c) => {
                let matching = match c.matching {
                    AnchorMatch::Exact => "exact",
                    AnchorMatch::Prefix => "prefix",
                };
                write!(f, "offset({:?} {matching} +{})", c.anchor, c.offset)
            }
            Extractor::NumberInRow { row, count, slot } => {
                write!(f, "number({row:?} {}/{count})", slot + 1)
            }
            Extractor::DurationInRow(row) => write!(f, "duration({row:?})"),
            Extractor::RowCell {
                row,
                next_row,
                cell,
            } => write!(f, "row-cell({row:?}..{next_row:?} {cell:?})"),
            Extractor::ConcatAfter {
                anchor,
                skip,
                limit,
            } => write!(f, "concat({anchor:?} +{skip} until {limit:?})"),
            Extractor::HeaderTopRight => write!(f, "header-top-right"),
            Extractor::HeaderBelowTopRight => write!(f, "header-below-top-right"),
            Extractor::DateRange(k) => write!(f, "above-on-margin({k:?})"),
        }
    }
}

/// Post-processing applied to a found value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Finish {
    #[default]
    AsIs,
    PadDuration,
    DigitsOnly,
    Gender,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub code: &'static str,
    /// Canonical English name, emitted verbatim.
    pub name: &'static str,
    pub extractor: Extractor,
    pub finish: Finish,
    /// Value carries day/hour/minute units subject to translation.
    pub unit_bearing: bool,
}

impl FieldSpec {
    pub(crate) fn new(code: &'static str, name: &'static str, extractor: Extractor) -> Self {
        FieldSpec {
            code,
            name,
            extractor,
            finish: Finish::AsIs,
            unit_bearing: false,
        }
    }

    pub(crate) fn finish(mut self, finish: Finish) -> Self {
        self.finish = finish;
        self
    }

    pub(crate) fn with_units(mut self) -> Self {
        self.unit_bearing = true;
        self
    }

    /// Evaluate this field against a normalized document.
    ///
    /// `None` when a label is missing from the dictionary or the layout
    /// has no block where the value should be.
    pub fn evaluate(
        &self,
        doc: &Document,
        dict: &LanguageDictionary,
        options: &ExtractOptions,
    ) -> Option<String> {
        let raw = self.extractor.run(doc, dict)?;

        // Gender is always translated, so a missing one reads "Unknown ()".
        let value = match self.finish {
            Finish::Gender => dict.translate_gender(&raw).to_string(),
            _ if raw.is_empty() => return Some(raw),
            Finish::AsIs => raw,
            Finish::PadDuration => pad_duration(&raw),
            Finish::DigitsOnly => digits_only(&raw),
        };

        if self.unit_bearing && options.translate_units {
            Some(dict.translate_units(&value))
        } else {
            Some(value)
        }
    }
}

/// The ordered field list of one report template.
#[derive(Debug)]
pub struct Schema {
    report: ReportKind,
    validation_code: &'static str,
    fields: Vec<FieldSpec>,
}

static DIAGNOSTIC: LazyLock<Schema> = LazyLock::new(diagnostic::schema);
static COMPLIANCE: LazyLock<Schema> = LazyLock::new(compliance::schema);

impl Schema {
    pub fn for_report(report: ReportKind) -> &'static Schema {
        match report {
            ReportKind::Diagnostic => &DIAGNOSTIC,
            ReportKind::Compliance => &COMPLIANCE,
        }
    }

    pub fn report(&self) -> ReportKind {
        self.report
    }

    /// Code of the field whose absence marks the document as not a report
    /// of this kind.
    pub fn validation_code(&self) -> &'static str {
        self.validation_code
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, code: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.field(code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageRegistry;
    use crate::layout::test_support::block;
    use crate::model::Language;

    fn english(report: ReportKind) -> &'static LanguageDictionary {
        LanguageRegistry::for_report(report).fallback()
    }

    #[test]
    fn test_codes_are_unique_and_ordered() {
        for report in ReportKind::ALL {
            let schema = Schema::for_report(report);
            let codes: Vec<&str> = schema.fields().iter().map(|f| f.code).collect();
            let mut sorted = codes.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(codes, sorted, "{report} codes out of order or duplicated");
            assert!(codes.iter().all(|c| c.len() == 4 && c.bytes().all(|b| b.is_ascii_digit())));
            assert!(schema.contains(schema.validation_code()));
        }
    }

    #[test]
    fn test_every_label_is_in_every_dictionary() {
        for report in ReportKind::ALL {
            let schema = Schema::for_report(report);
            for dict in LanguageRegistry::for_report(report).dictionaries() {
                for spec in schema.fields() {
                    for key in spec.extractor.labels() {
                        assert!(
                            dict.label(key).is_some(),
                            "{report}/{} lacks {key:?} for {}",
                            dict.language(),
                            spec.code
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_anchor_is_absent() {
        let doc = Document::from_blocks(vec![block("Nothing here", 1, 0.0, 100.0)]);
        let dict = english(ReportKind::Diagnostic);
        let spec = FieldSpec::new(
            "0100",
            "Recording Start",
            Extractor::AtOffset(OffsetContract {
                anchor: LabelKey::Recording,
                matching: AnchorMatch::Exact,
                offset: 2,
            }),
        );
        assert_eq!(spec.evaluate(&doc, dict, &ExtractOptions::default()), None);

        let spec = FieldSpec::new(
            "0401",
            "Events index REI (AHI)",
            Extractor::NumberInRow {
                row: LabelKey::EventsIndex,
                count: 3,
                slot: 0,
            },
        );
        assert_eq!(spec.evaluate(&doc, dict, &ExtractOptions::default()), None);
    }

    #[test]
    fn test_label_missing_from_dictionary_is_absent() {
        // Compliance dictionaries carry no diagnostic row titles.
        let doc = Document::from_blocks(vec![
            block("Events index", 1, 0.0, 100.0),
            block("12.0", 1, 50.0, 100.0),
        ]);
        let spec = FieldSpec::new(
            "0401",
            "Events index REI (AHI)",
            Extractor::NumberInRow {
                row: LabelKey::EventsIndex,
                count: 3,
                slot: 0,
            },
        );
        let compliance = english(ReportKind::Compliance);
        assert_eq!(spec.evaluate(&doc, compliance, &ExtractOptions::default()), None);
        let diagnostic = english(ReportKind::Diagnostic);
        assert_eq!(
            spec.evaluate(&doc, diagnostic, &ExtractOptions::default()).as_deref(),
            Some("12.0")
        );
    }

    #[test]
    fn test_finishes() {
        let doc = Document::from_blocks(vec![
            block("Age: 32 years", 1, 0.0, 300.0),
            block("Gender: Feminino", 1, 0.0, 290.0),
            block("Usage days", 1, 0.0, 280.0),
            block("21/30 dias (70%)", 1, 50.0, 280.0),
        ]);
        let registry = LanguageRegistry::for_report(ReportKind::Compliance);
        let pt = registry.get(Language::Portuguese).unwrap();
        let en = registry.fallback();
        let opts = ExtractOptions::default();

        let age = FieldSpec::new("1004", "Age", Extractor::Titled(LabelKey::Age))
            .finish(Finish::DigitsOnly);
        assert_eq!(age.evaluate(&doc, en, &opts).as_deref(), Some("32"));

        let gender = FieldSpec::new("1005", "Gender", Extractor::Titled(LabelKey::Gender))
            .finish(Finish::Gender);
        assert_eq!(gender.evaluate(&doc, en, &opts).as_deref(), Some("Unknown (Feminino)"));

        let usage = FieldSpec::new("1006", "Usage days", Extractor::FirstAfter(LabelKey::UsageDays))
            .with_units();
        assert_eq!(usage.evaluate(&doc, en, &opts).as_deref(), Some("21/30 dias (70%)"));
        let translate = ExtractOptions {
            translate_units: true,
        };
        assert_eq!(usage.evaluate(&doc, en, &translate).as_deref(), Some("21/30 dias (70%)"));

        let pt_usage = FieldSpec::new("1006", "Usage days", Extractor::FirstAfter(LabelKey::UsageDays))
            .with_units();
        let pt_doc = Document::from_blocks(vec![
            block("Dias de utilização", 1, 0.0, 280.0),
            block("21/30 dias (70%)", 1, 50.0, 280.0),
        ]);
        assert_eq!(pt_usage.evaluate(&pt_doc, pt, &opts).as_deref(), Some("21/30 dias (70%)"));
        assert_eq!(
            pt_usage.evaluate(&pt_doc, pt, &translate).as_deref(),
            Some("21/30 days (70%)")
        );
    }

    #[test]
    fn test_missing_gender_reads_unknown() {
        let doc = Document::from_blocks(vec![block("Device", 1, 0.0, 100.0)]);
        let spec = FieldSpec::new("0006", "Gender", Extractor::Titled(LabelKey::Gender))
            .finish(Finish::Gender);
        let dict = english(ReportKind::Diagnostic);
        assert_eq!(
            spec.evaluate(&doc, dict, &ExtractOptions::default()).as_deref(),
            Some("Unknown ()")
        );
    }

    #[test]
    fn test_padding_skips_empty_values() {
        let doc = Document::from_blocks(vec![block("Device", 1, 0.0, 100.0)]);
        let spec = FieldSpec::new(
            "0102",
            "Recording Duration - hr",
            Extractor::Titled(LabelKey::Recording),
        )
        .finish(Finish::PadDuration);
        let dict = english(ReportKind::Diagnostic);
        assert_eq!(
            spec.evaluate(&doc, dict, &ExtractOptions::default()).as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_concat_after_missing_anchor_is_empty() {
        let doc = Document::from_blocks(vec![
            block("Some narrative", 1, 0.0, 100.0),
            block("Printed on 01/01/2020", 1, 0.0, 50.0),
        ]);
        let spec = FieldSpec::new(
            "1700",
            "Interpretation",
            Extractor::ConcatAfter {
                anchor: LabelKey::Interpretation,
                skip: 1,
                limit: LabelKey::PrintedOn,
            },
        );
        let dict = english(ReportKind::Diagnostic);
        assert_eq!(
            spec.evaluate(&doc, dict, &ExtractOptions::default()).as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_display_strategy() {
        let spec = Schema::for_report(ReportKind::Diagnostic).field("0102").unwrap();
        assert_eq!(spec.extractor.to_string(), "offset(Recording exact +6)");
    }
}
