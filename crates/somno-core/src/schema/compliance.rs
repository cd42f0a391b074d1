use super::{AnchorMatch, Extractor, FieldSpec, Finish, OffsetContract, Schema};
use crate::language::LabelKey::{self, *};
use crate::model::ReportKind;

pub const VALIDATION_CODE: &str = "1002";

fn after(key: LabelKey) -> Extractor {
    Extractor::FirstAfter(key)
}

fn prefixed_offset(anchor: LabelKey, offset: usize) -> Extractor {
    Extractor::AtOffset(OffsetContract {
        anchor,
        matching: AnchorMatch::Prefix,
        offset,
    })
}

/// The three values of a `title  label value  label value  label value` therapy row.
fn three_value_row(codes: [&'static str; 3], names: [&'static str; 3], row: LabelKey) -> [FieldSpec; 3] {
    [
        FieldSpec::new(codes[0], names[0], prefixed_offset(row, 2)),
        FieldSpec::new(codes[1], names[1], prefixed_offset(row, 4)),
        FieldSpec::new(codes[2], names[2], prefixed_offset(row, 6)),
    ]
}

pub(super) fn schema() -> Schema {
    let mut fields = vec![
        FieldSpec::new("1001", "Date", Extractor::DateRange(PatientId)),
        FieldSpec::new(VALIDATION_CODE, "Patient ID", Extractor::Titled(PatientId)),
        FieldSpec::new("1003", "DOB", Extractor::Titled(Dob)),
        FieldSpec::new("1004", "Age", Extractor::Titled(Age)).finish(Finish::DigitsOnly),
        FieldSpec::new("1005", "Gender", Extractor::Titled(Gender)).finish(Finish::Gender),
        FieldSpec::new("1006", "Usage days", after(UsageDays)).with_units(),
        FieldSpec::new("1007", ">= 4 hours", after(UsageDaysAtLeast4Hours)).with_units(),
        FieldSpec::new("1008", "< 4 hours", after(UsageDaysUnder4Hours)).with_units(),
        FieldSpec::new(
            "1009",
            "Average usage (total days)",
            after(AverageUsageTotalDays),
        )
        .with_units(),
        FieldSpec::new(
            "1010",
            "Average usage (days used)",
            after(AverageUsageDaysUsed),
        )
        .with_units(),
        FieldSpec::new(
            "1011",
            "Median usage (days used)",
            after(MedianUsageDaysUsed),
        )
        .with_units(),
        FieldSpec::new("1012", "Serial number", after(SerialNumber)),
        FieldSpec::new("1013", "Mode", after(Mode)),
        FieldSpec::new("1014", "Min Pressure", after(MinPressure)),
        FieldSpec::new("1015", "Max Pressure", after(MaxPressure)),
        FieldSpec::new("1016", "EPR level", after(EprLevel)),
        FieldSpec::new("1017", "Response", after(Response)),
    ];

    fields.extend(three_value_row(
        ["1018", "1019", "1020"],
        [
            "Pressure -cm H2O - median",
            "Pressure -cm H2O - percentile 95",
            "Pressure -cm H2O - max",
        ],
        TherapyPressure,
    ));
    fields.extend(three_value_row(
        ["1021", "1022", "1023"],
        [
            "Leaks l/min - median",
            "Leaks l/min - percentile 95",
            "Leaks l/min - max",
        ],
        TherapyLeaks,
    ));
    fields.extend(three_value_row(
        ["1024", "1025", "1026"],
        [
            "Events per hour - AI",
            "Events per hour - HI",
            "Events per hour - AHI",
        ],
        TherapyEventsPerHour,
    ));
    fields.extend(three_value_row(
        ["1027", "1028", "1029"],
        [
            "Apnoea Index - Central",
            "Apnoea Index - Obstructive",
            "Apnoea Index - Unknown",
        ],
        TherapyApnoeaIndex,
    ));

    fields.extend([
        FieldSpec::new(
            "1030",
            "Cheyne-Stokes respiration (average duration per night)",
            after(TherapyCheyneStokes),
        )
        .with_units(),
        FieldSpec::new(
            "1031",
            "SpO2% - Time<88%",
            prefixed_offset(TherapySpo2Time, 1),
        ),
        FieldSpec::new(
            "1032",
            "SpO2% - Median",
            Extractor::FirstAfterWithin {
                scope: TherapySpo2Time,
                key: TherapySpo2Median,
            },
        ),
        FieldSpec::new(
            "1033",
            "SpO2% - percentile 95",
            Extractor::FirstAfterWithin {
                scope: TherapySpo2Time,
                key: TherapySpo2Percentile95,
            },
        ),
    ]);

    Schema {
        report: ReportKind::Compliance,
        validation_code: VALIDATION_CODE,
        fields,
    }
}
