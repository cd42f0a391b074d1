use somno_core::model::{ExtractionResult, Outcome};

use crate::commands::extract::Extracted;
use crate::output::json::REJECTED;

pub fn print(extracted: &[Extracted]) {
    for (i, doc) in extracted.iter().enumerate() {
        if i > 0 {
            println!();
        }

        match &doc.result {
            Ok(Outcome::Validated(result)) => {
                println!(
                    "=== {} ({} {} report) ===\n",
                    doc.path.display(),
                    result.language,
                    result.report
                );
                print!("{}", format_fields(result));
            }
            Ok(Outcome::Rejected { report, language }) => {
                println!("=== {} ===\n", doc.path.display());
                println!("  {REJECTED} (read as {language} {report} report)");
            }
            Err(e) => {
                println!("=== {} ===\n", doc.path.display());
                println!("  Error: {e}");
            }
        }
    }
}

/// One `code  name  value` line per field; absent values show as `-`.
pub fn format_fields(result: &ExtractionResult) -> String {
    let max_name = result
        .fields
        .iter()
        .map(|f| f.name.trim_end().chars().count())
        .max()
        .unwrap_or(10);

    let mut out = String::new();
    for field in &result.fields {
        let value = field.value.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "  {}  {:<width$}  {}\n",
            field.code,
            field.name.trim_end(),
            value,
            width = max_name
        ));
    }
    out
}
