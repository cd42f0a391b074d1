use somno_core::error::SomnoError;
use somno_core::schema::Schema;

pub fn run(report: &str) -> Result<(), SomnoError> {
    let report = super::report_kind(report)?;
    let schema = Schema::for_report(report);

    println!(
        "Fields of the {} report ({} total, pages {:?}):\n",
        report,
        schema.fields().len(),
        report.pages()
    );

    let max_name = schema
        .fields()
        .iter()
        .map(|f| f.name.trim_end().chars().count())
        .max()
        .unwrap_or(10);

    for spec in schema.fields() {
        let marker = if spec.code == schema.validation_code() {
            "  [validation]"
        } else {
            ""
        };
        println!(
            "  {}  {:<width$}  {}{}",
            spec.code,
            spec.name.trim_end(),
            spec.extractor,
            marker,
            width = max_name
        );
    }
    Ok(())
}
