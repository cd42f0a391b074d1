use super::{AnchorMatch, Extractor, FieldSpec, Finish, OffsetContract, Schema};
use crate::language::LabelKey::{self, *};
use crate::model::ReportKind;

/// The recording-details date is printed on every genuine diagnostic report.
pub const VALIDATION_CODE: &str = "0008";

fn offset(anchor: LabelKey, offset: usize) -> Extractor {
    Extractor::AtOffset(OffsetContract {
        anchor,
        matching: AnchorMatch::Exact,
        offset,
    })
}

fn number(row: LabelKey, count: usize, slot: usize) -> Extractor {
    Extractor::NumberInRow { row, count, slot }
}

fn cell(row: LabelKey, next_row: LabelKey, cell: LabelKey) -> Extractor {
    Extractor::RowCell {
        row,
        next_row,
        cell,
    }
}

/// Start, End and Duration of a `label  Start: .. End: .. Duration - hr: ..` row.
fn start_end_duration(
    codes: [&'static str; 3],
    names: [&'static str; 3],
    row: LabelKey,
) -> [FieldSpec; 3] {
    [
        FieldSpec::new(codes[0], names[0], offset(row, 2)),
        FieldSpec::new(codes[1], names[1], offset(row, 4)),
        FieldSpec::new(codes[2], names[2], offset(row, 6)).finish(Finish::PadDuration),
    ]
}

/// Time, Percentage, REI (AHI), AI and HI of a body-position row.
fn timed_rei(codes: [&'static str; 5], names: [&'static str; 5], row: LabelKey) -> [FieldSpec; 5] {
    [
        FieldSpec::new(codes[0], names[0], Extractor::DurationInRow(row)),
        FieldSpec::new(codes[1], names[1], number(row, 4, 0)),
        FieldSpec::new(codes[2], names[2], number(row, 4, 1)),
        FieldSpec::new(codes[3], names[3], number(row, 4, 2)),
        FieldSpec::new(codes[4], names[4], number(row, 4, 3)),
    ]
}

pub(super) fn schema() -> Schema {
    let mut fields = vec![
        FieldSpec::new("0001", "Date", Extractor::HeaderTopRight),
        FieldSpec::new("0002", "Type", Extractor::HeaderBelowTopRight),
        FieldSpec::new("0003", "Patient ID", Extractor::Titled(PatientId)),
        FieldSpec::new("0004", "DOB", Extractor::Titled(Dob)),
        FieldSpec::new("0005", "Age", Extractor::Titled(Age)),
        FieldSpec::new("0006", "Gender", Extractor::Titled(Gender)).finish(Finish::Gender),
        FieldSpec::new("0007", "BMI", Extractor::Titled(Bmi)),
        FieldSpec::new(
            VALIDATION_CODE,
            "Recording details",
            Extractor::FirstAfter(RecordingDetails),
        ),
        FieldSpec::new("0009", "Device", Extractor::FirstAfter(Device)),
    ];

    fields.extend(start_end_duration(
        ["0100", "0101", "0102"],
        ["Recording Start", "Recording End", "Recording Duration - hr"],
        Recording,
    ));
    fields.extend(start_end_duration(
        ["0201", "0202", "0203"],
        [
            "Monitoring time (flow) Start ",
            "Monitoring time (flow) End ",
            "Monitoring time (flow) Duration - hr",
        ],
        MonitoringTimeFlow,
    ));
    fields.extend(start_end_duration(
        ["0204", "0205", "0206"],
        [
            "Flow evaluation Start",
            "Flow evaluation End",
            "Flow evaluation Duration - hr",
        ],
        FlowEvaluation,
    ));
    fields.extend(start_end_duration(
        ["0301", "0302", "0303"],
        [
            "Oxygen saturation evaluation Start ",
            "Oxygen saturation evaluation End ",
            "Oxygen saturation evaluation Duration - hr",
        ],
        OxygenSaturationEvaluation,
    ));

    fields.extend([
        FieldSpec::new("0401", "Events index REI (AHI)", number(EventsIndex, 3, 0)),
        FieldSpec::new("0402", "Events index AI", number(EventsIndex, 3, 1)),
        FieldSpec::new("0403", "Events index HI", number(EventsIndex, 3, 2)),
    ]);

    fields.extend(timed_rei(
        ["0501", "0502", "0503", "0504", "0505"],
        [
            "Supine Time-hr",
            "Supine Percentage",
            "Supine REI (AHI)",
            "Supine AI",
            "Supine HI",
        ],
        Supine,
    ));
    fields.extend(timed_rei(
        ["0601", "0602", "0603", "0604", "0605"],
        [
            "Non-supine Time-hr",
            "Non-supine Percentage",
            "Non-supine REI (AHI)",
            "Non-supine AI",
            "Non-supine HI",
        ],
        NonSupine,
    ));
    fields.extend(timed_rei(
        ["0701", "0702", "0703", "0704", "0705"],
        [
            "Upright Time-hr",
            "Upright Percentage",
            "Upright REI (AHI)",
            "Upright AI",
            "Upright HI",
        ],
        Upright,
    ));

    fields.extend([
        FieldSpec::new(
            "0801",
            "Events totals Apneas:",
            cell(EventsTotal, ApneaIndex, Apneas),
        ),
        FieldSpec::new(
            "0802",
            "Events totals Hypopneas:",
            cell(EventsTotal, ApneaIndex, Hypopneas),
        ),
        FieldSpec::new(
            "0901",
            "Apnea Index Obstructive:",
            cell(ApneaIndex, CheyneStokes, Obstructive),
        ),
        FieldSpec::new(
            "0902",
            "Apnea Index Central:",
            cell(ApneaIndex, CheyneStokes, Central),
        ),
        FieldSpec::new(
            "0903",
            "Apnea Index Mixed:",
            cell(ApneaIndex, CheyneStokes, Mixed),
        ),
        FieldSpec::new(
            "0904",
            "Apnea Index Unclassified:",
            cell(ApneaIndex, CheyneStokes, Unclassified),
        ),
        FieldSpec::new(
            "1001",
            "Cheyne-Stokes respiration Time - hr: ",
            Extractor::DurationInRow(CheyneStokes),
        ),
        FieldSpec::new(
            "1002",
            "Cheyne-Stokes respiration Percentage",
            number(CheyneStokes, 1, 0),
        ),
        FieldSpec::new("1101", "Oxygen desaturation ODI", number(OxygenDesaturation, 2, 0)),
        FieldSpec::new("1102", "Oxygen desaturation Total", number(OxygenDesaturation, 2, 1)),
        FieldSpec::new(
            "1201",
            "Oxygen saturation % Baseline",
            number(OxygenSaturationPercentage, 3, 0),
        ),
        FieldSpec::new(
            "1202",
            "Oxygen saturation % Avg",
            number(OxygenSaturationPercentage, 3, 1),
        ),
        FieldSpec::new(
            "1203",
            "Oxygen saturation % Lowest",
            number(OxygenSaturationPercentage, 3, 2),
        ),
        FieldSpec::new(
            "1204",
            "Oxygen saturation - eval time % <=90%sat",
            number(OxygenSaturationEvalTimePercentage, 4, 0),
        ),
        FieldSpec::new(
            "1205",
            "Oxygen saturation - eval time % <=85%sat:",
            number(OxygenSaturationEvalTimePercentage, 4, 1),
        ),
        FieldSpec::new(
            "1206",
            "Oxygen saturation - eval time % <=80%sat",
            number(OxygenSaturationEvalTimePercentage, 4, 2),
        ),
        FieldSpec::new(
            "1207",
            "Oxygen saturation - eval time % <=88%sat",
            number(OxygenSaturationEvalTimePercentage, 4, 3),
        ),
        FieldSpec::new(
            "1208",
            "Oxygen saturation - eval time % <=88%Time - hr:",
            Extractor::DurationInRow(OxygenSaturationEvalTimePercentage),
        ),
        FieldSpec::new("1301", "Breaths Total", number(Breaths, 3, 0)),
        FieldSpec::new("1302", "Breaths Avg/min", number(Breaths, 3, 1)),
        FieldSpec::new("1303", "Breaths Snores", number(Breaths, 3, 2)),
        FieldSpec::new("1401", "Pulse - bpm Min", number(PulseBpm, 3, 0)),
        FieldSpec::new("1402", "Pulse - bpm Avg", number(PulseBpm, 3, 1)),
        FieldSpec::new("1403", "Pulse - bpm Max", number(PulseBpm, 3, 2)),
        FieldSpec::new(
            "1500",
            "Analysis guidelines",
            Extractor::FirstAfter(AnalysisGuidelines),
        ),
        FieldSpec::new(
            "1600",
            "Adicional data",
            Extractor::ConcatAfter {
                anchor: AnalysisGuidelines,
                skip: 2,
                limit: PrintedOn,
            },
        ),
        FieldSpec::new(
            "1700",
            "Interpretation",
            Extractor::ConcatAfter {
                anchor: Interpretation,
                skip: 1,
                limit: PrintedOn,
            },
        ),
    ]);

    Schema {
        report: ReportKind::Diagnostic,
        validation_code: VALIDATION_CODE,
        fields,
    }
}
