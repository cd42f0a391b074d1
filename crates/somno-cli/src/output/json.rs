use serde_json::{json, Value};
use somno_core::error::SomnoError;
use somno_core::model::Outcome;

use crate::commands::extract::Extracted;

pub const SUCCESS: &str = "Data extracted successfully";
pub const REJECTED: &str = "Unable to extract relevant data";

fn envelope(doc: &Extracted) -> Value {
    let file = doc.path.display().to_string();
    match &doc.result {
        Ok(Outcome::Validated(result)) => json!({
            "file": file,
            "message": SUCCESS,
            "language": result.language,
            "data": result.fields,
        }),
        Ok(Outcome::Rejected { .. }) => json!({
            "file": file,
            "message": REJECTED,
        }),
        Err(e) => json!({
            "file": file,
            "error": e.to_string(),
        }),
    }
}

/// A single document renders as its own envelope, several as an array.
pub fn render(extracted: &[Extracted]) -> Result<String, SomnoError> {
    let value = match extracted {
        [single] => envelope(single),
        many => Value::Array(many.iter().map(envelope).collect()),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn print(extracted: &[Extracted]) -> Result<(), SomnoError> {
    println!("{}", render(extracted)?);
    Ok(())
}
