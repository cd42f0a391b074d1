//! Label tables for the therapy compliance report.
//!
//! Only the English table has been checked against printed reports. The
//! Portuguese, Spanish and Catalan literals are translations and apply only
//! when a report carries the localized title.

use super::{
    LabelKey, LanguageDictionary, LanguageRegistry, CATALAN_GENDER, ENGLISH_GENDER,
    PORTUGUESE_GENDER, SPANISH_GENDER,
};
use crate::model::{Language, ReportKind};
use LabelKey::*;

const ENGLISH: &[(LabelKey, &str)] = &[
    (ReportTitle, "Compliance Report"),
    (PatientId, "Patient ID"),
    (Dob, "DOB"),
    (Age, "Age"),
    (Gender, "Gender"),
    (UsageDays, "Usage days"),
    (UsageDaysAtLeast4Hours, ">= 4 hours"),
    (UsageDaysUnder4Hours, "< 4 hours"),
    (AverageUsageTotalDays, "Average usage (total days)"),
    (AverageUsageDaysUsed, "Average usage (days used)"),
    (MedianUsageDaysUsed, "Median usage (days used)"),
    (SerialNumber, "Serial number"),
    (Mode, "Mode"),
    (MinPressure, "Min Pressure"),
    (MaxPressure, "Max Pressure"),
    (EprLevel, "EPR level"),
    (Response, "Response"),
    (TherapyPressure, "Pressure - cm H2O"),
    (TherapyLeaks, "Leaks - L/min"),
    (TherapyEventsPerHour, "Events per hour"),
    (TherapyApnoeaIndex, "Apnoea Index"),
    (TherapyCheyneStokes, "Cheyne-Stokes respiration (average duration per night)"),
    (TherapySpo2Time, "Time SpO2 < 88%"),
    (TherapySpo2Median, "Median"),
    (TherapySpo2Percentile95, "95th percentile"),
];

const PORTUGUESE: &[(LabelKey, &str)] = &[
    (ReportTitle, "Relatório de conformidade"),
    (PatientId, "ID Paciente"),
    (Dob, "Data Nascimento"),
    (Age, "Idade"),
    (Gender, "Sexo"),
    (UsageDays, "Dias de utilização"),
    (UsageDaysAtLeast4Hours, ">= 4 horas"),
    (UsageDaysUnder4Hours, "< 4 horas"),
    (AverageUsageTotalDays, "Utilização média (total de dias)"),
    (AverageUsageDaysUsed, "Utilização média (dias utilizados)"),
    (MedianUsageDaysUsed, "Utilização mediana (dias utilizados)"),
    (SerialNumber, "Número de série"),
    (Mode, "Modo"),
    (MinPressure, "Pressão mín."),
    (MaxPressure, "Pressão máx."),
    (EprLevel, "Nível de EPR"),
    (Response, "Resposta"),
    (TherapyPressure, "Pressão - cm H2O"),
    (TherapyLeaks, "Fugas - L/min"),
    (TherapyEventsPerHour, "Eventos por hora"),
    (TherapyApnoeaIndex, "Índice de apneia"),
    (TherapyCheyneStokes, "Respiração de Cheyne-Stokes (duração média por noite)"),
    (TherapySpo2Time, "Tempo SpO2 < 88%"),
    (TherapySpo2Median, "Mediana"),
    (TherapySpo2Percentile95, "Percentil 95"),
];

const SPANISH: &[(LabelKey, &str)] = &[
    (ReportTitle, "Informe de cumplimiento"),
    (PatientId, "Identificación del paciente"),
    (Dob, "Fecha de nacimiento"),
    (Age, "Edad"),
    (Gender, "Sexo"),
    (UsageDays, "Días de uso"),
    (UsageDaysAtLeast4Hours, ">= 4 horas"),
    (UsageDaysUnder4Hours, "< 4 horas"),
    (AverageUsageTotalDays, "Uso promedio (total de días)"),
    (AverageUsageDaysUsed, "Uso promedio (días de uso)"),
    (MedianUsageDaysUsed, "Uso mediano (días de uso)"),
    (SerialNumber, "Número de serie"),
    (Mode, "Modo"),
    (MinPressure, "Presión mín."),
    (MaxPressure, "Presión máx."),
    (EprLevel, "Nivel de EPR"),
    (Response, "Respuesta"),
    (TherapyPressure, "Presión - cm H2O"),
    (TherapyLeaks, "Fugas - L/min"),
    (TherapyEventsPerHour, "Eventos por hora"),
    (TherapyApnoeaIndex, "Índice de apnea"),
    (TherapyCheyneStokes, "Respiración de Cheyne-Stokes (duración media por noche)"),
    (TherapySpo2Time, "Tiempo SpO2 < 88%"),
    (TherapySpo2Median, "Mediana"),
    (TherapySpo2Percentile95, "Percentil 95"),
];

const CATALAN: &[(LabelKey, &str)] = &[
    (ReportTitle, "Informe de compliment"),
    (PatientId, "Identificació del pacient"),
    (Dob, "Data de naixement"),
    (Age, "Edat"),
    (Gender, "Sexe"),
    (UsageDays, "Dies d'ús"),
    (UsageDaysAtLeast4Hours, ">= 4 hores"),
    (UsageDaysUnder4Hours, "< 4 hores"),
    (AverageUsageTotalDays, "Ús mitjà (total de dies)"),
    (AverageUsageDaysUsed, "Ús mitjà (dies d'ús)"),
    (MedianUsageDaysUsed, "Ús medià (dies d'ús)"),
    (SerialNumber, "Número de sèrie"),
    (Mode, "Mode"),
    (MinPressure, "Pressió mín."),
    (MaxPressure, "Pressió màx."),
    (EprLevel, "Nivell d'EPR"),
    (Response, "Resposta"),
    (TherapyPressure, "Pressió - cm H2O"),
    (TherapyLeaks, "Fuites - L/min"),
    (TherapyEventsPerHour, "Esdeveniments per hora"),
    (TherapyApnoeaIndex, "Índex d'apnea"),
    (TherapyCheyneStokes, "Respiració de Cheyne-Stokes (durada mitjana per nit)"),
    (TherapySpo2Time, "Temps SpO2 < 88%"),
    (TherapySpo2Median, "Mediana"),
    (TherapySpo2Percentile95, "Percentil 95"),
];

// Plural before singular.
const PORTUGUESE_UNITS: &[(&str, &str)] = &[
    ("dias", "days"),
    ("dia", "day"),
    ("horas", "hours"),
    ("hora", "hour"),
    ("minutos", "minutes"),
    ("minuto", "minute"),
];

const SPANISH_UNITS: &[(&str, &str)] = &[
    ("días", "days"),
    ("día", "day"),
    ("horas", "hours"),
    ("hora", "hour"),
    ("minutos", "minutes"),
    ("minuto", "minute"),
];

const CATALAN_UNITS: &[(&str, &str)] = &[
    ("dies", "days"),
    ("dia", "day"),
    ("hores", "hours"),
    ("hora", "hour"),
    ("minuts", "minutes"),
    ("minut", "minute"),
];

pub(super) fn registry() -> LanguageRegistry {
    LanguageRegistry::new(
        ReportKind::Compliance,
        ReportTitle,
        vec![
            LanguageDictionary::new(Language::English, ENGLISH, ENGLISH_GENDER, &[]),
            LanguageDictionary::new(
                Language::Portuguese,
                PORTUGUESE,
                PORTUGUESE_GENDER,
                PORTUGUESE_UNITS,
            ),
            LanguageDictionary::new(Language::Spanish, SPANISH, SPANISH_GENDER, SPANISH_UNITS),
            LanguageDictionary::new(Language::Catalan, CATALAN, CATALAN_GENDER, CATALAN_UNITS),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_share_keys() {
        let mut english: Vec<_> = ENGLISH.iter().map(|(k, _)| format!("{k:?}")).collect();
        english.sort();
        for table in [PORTUGUESE, SPANISH, CATALAN] {
            let mut keys: Vec<_> = table.iter().map(|(k, _)| format!("{k:?}")).collect();
            keys.sort();
            assert_eq!(keys, english);
        }
    }

    #[test]
    fn test_spanish_accented_units() {
        let registry = registry();
        let es = registry.get(Language::Spanish).unwrap();
        assert_eq!(es.translate_units("7/30 Días (23%)"), "7/30 days (23%)");
        assert_eq!(es.translate_units("1 día"), "1 day");
    }
}
