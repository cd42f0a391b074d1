use somno_core::error::SomnoError;
use somno_core::fixture::{self, FixtureReport};
use somno_core::model::ExtractOptions;
use std::path::PathBuf;

pub fn run(fixtures: Vec<PathBuf>, translate_units: bool) -> Result<(), SomnoError> {
    let options = ExtractOptions { translate_units };
    let mut failed = 0;

    for path in &fixtures {
        let fixture = fixture::load_fixture(path)?;
        let report = fixture::verify(&fixture, &options);

        let status = if report.passed() { "PASS" } else { "FAIL" };
        println!(
            "{status}  {} ({} {} report)",
            path.display(),
            report.language,
            fixture.report
        );
        if let Some(ref desc) = fixture.description {
            println!("      {desc}");
        }
        print_details(&report);

        if !report.passed() {
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(SomnoError::FixtureInvalid(format!(
            "{failed} of {} fixture(s) failed",
            fixtures.len()
        )));
    }
    Ok(())
}

fn print_details(report: &FixtureReport) {
    if !report.outcome_validated {
        println!("      document rejected: validation field empty");
    }
    for m in &report.mismatches {
        println!(
            "      {}: expected {:?}, got {:?}",
            m.code, m.expected, m.actual
        );
    }
    for v in &report.violations {
        println!("      contract: {v}");
    }
}
