use somno_core::error::SomnoError;
use somno_core::language::LanguageRegistry;

pub fn run(report: &str) -> Result<(), SomnoError> {
    let report = super::report_kind(report)?;
    let registry = LanguageRegistry::for_report(report);

    println!("Languages recognized for the {report} report, in resolution order:\n");
    for (i, dict) in registry.dictionaries().iter().enumerate() {
        let anchor = dict.label(registry.distinguishing()).unwrap_or("-");
        let fallback = if i == 0 { "  (fallback)" } else { "" };
        println!("  {:<12} \"{}\"{}", dict.language(), anchor, fallback);
    }
    Ok(())
}
