pub mod extract;
pub mod languages;
pub mod schema;
pub mod verify;

use somno_core::error::SomnoError;
use somno_core::model::ReportKind;

pub(crate) fn report_kind(name: &str) -> Result<ReportKind, SomnoError> {
    ReportKind::from_str_loose(name).ok_or_else(|| SomnoError::UnknownReport(name.to_string()))
}
