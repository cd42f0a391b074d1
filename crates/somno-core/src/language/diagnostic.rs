//! Label tables for the sleep-study diagnostic report.

use super::{
    LabelKey, LanguageDictionary, LanguageRegistry, CATALAN_GENDER, ENGLISH_GENDER,
    PORTUGUESE_GENDER, SPANISH_GENDER,
};
use crate::model::{Language, ReportKind};
use LabelKey::*;

const ENGLISH: &[(LabelKey, &str)] = &[
    (PatientId, "Patient ID"),
    (Dob, "DOB"),
    (Age, "Age"),
    (Gender, "Gender"),
    (Bmi, "BMI"),
    (RecordingDetails, "Recording details"),
    (Device, "Device"),
    (Recording, "Recording"),
    (MonitoringTimeFlow, "Monitoring time (flow)"),
    (FlowEvaluation, "Flow evaluation"),
    (OxygenSaturationEvaluation, "Oxygen saturation evaluation"),
    (EventsIndex, "Events index"),
    (Supine, "Supine"),
    (NonSupine, "Non-supine"),
    (Upright, "Upright"),
    (EventsTotal, "Events totals"),
    (Apneas, "Apneas"),
    (Hypopneas, "Hypopneas"),
    (ApneaIndex, "Apnea Index"),
    (Obstructive, "Obstructive"),
    (Central, "Central"),
    (Mixed, "Mixed"),
    (Unclassified, "Unclassified"),
    (CheyneStokes, "Cheyne-Stokes respiration"),
    (OxygenDesaturation, "Oxygen desaturation"),
    (OxygenSaturationPercentage, "Oxygen saturation %"),
    (OxygenSaturationEvalTimePercentage, "Oxygen saturation - eval time %"),
    (Breaths, "Breaths"),
    (PulseBpm, "Pulse - bpm"),
    (AnalysisGuidelines, "Analysis guidelines:"),
    (Interpretation, "Interpretation"),
    (PrintedOn, "Printed on"),
];

const PORTUGUESE: &[(LabelKey, &str)] = &[
    (PatientId, "ID Paciente"),
    (Dob, "Data Nascimento"),
    (Age, "Idade"),
    (Gender, "Sexo"),
    (Bmi, "IMC"),
    (RecordingDetails, "A gravar detalhes"),
    (Device, "Dispositivo"),
    (Recording, "A gravar"),
    (MonitoringTimeFlow, "Avaliação do fluxo"),
    (FlowEvaluation, "Flow evaluation"),
    (OxygenSaturationEvaluation, "Aval. satur. Oxigénio"),
    (EventsIndex, "Índice de eventos"),
    (Supine, "Decúbito dorsal"),
    (NonSupine, "Decúbito ventral"),
    (Upright, "Vertical"),
    (EventsTotal, "Eventos totais"),
    (Apneas, "Apneias"),
    (Hypopneas, "Hipopneias"),
    (ApneaIndex, "Índice de apneia"),
    (Obstructive, "Obstrutiva"),
    (Central, "Central"),
    (Mixed, "Mista"),
    (Unclassified, "Não classificado"),
    (CheyneStokes, "Cheyne-Stokes"),
    (OxygenDesaturation, "Dessaturação de oxigénio"),
    (OxygenSaturationPercentage, "% saturação de oxigénio"),
    (OxygenSaturationEvalTimePercentage, "Satur. oxigénio — % tempo aval. Sat."),
    (Breaths, "Respirações"),
    (PulseBpm, "Pulso — bpm"),
    (AnalysisGuidelines, "Orient. análise"),
    (Interpretation, "Interpretação"),
    (PrintedOn, "Impresso em"),
];

// Interpretation and footer are printed untranslated on Spanish reports.
const SPANISH: &[(LabelKey, &str)] = &[
    (PatientId, "Identificación del paciente"),
    (Dob, "Fecha de nacimiento"),
    (Age, "Edad"),
    (Gender, "Sexo"),
    (Bmi, "IMC"),
    (RecordingDetails, "Datos de la grabación"),
    (Device, "Dispositivo"),
    (Recording, "Grabando"),
    (MonitoringTimeFlow, "Evaluación del flujo"),
    (FlowEvaluation, "Flow evaluation"),
    (OxygenSaturationEvaluation, "Evaluación saturación"),
    (EventsIndex, "Índice de eventos"),
    (Supine, "Supino"),
    (NonSupine, "No supino"),
    (Upright, "Erguido"),
    (EventsTotal, "Eventos totales"),
    (Apneas, "Apneas"),
    (Hypopneas, "Hipopneas"),
    (ApneaIndex, "Índice de apnea"),
    (Obstructive, "Obstructiva"),
    (Central, "Central"),
    (Mixed, "Mixta"),
    (Unclassified, "No clasificada"),
    (CheyneStokes, "Cheyne-Stokes"),
    (OxygenDesaturation, "Desaturación de oxígeno"),
    (OxygenSaturationPercentage, "% de saturación de oxígeno"),
    (OxygenSaturationEvalTimePercentage, "% satur. oxíg. - tiempo estudio"),
    (Breaths, "Respiraciones"),
    (PulseBpm, "Pulso - rpm"),
    (AnalysisGuidelines, "Criterios análisis"),
    (Interpretation, "Interpretation"),
    (PrintedOn, "Printed on"),
];

const CATALAN: &[(LabelKey, &str)] = &[
    (PatientId, "Identificació del pacient"),
    (Dob, "Data de naixement"),
    (Age, "Edat"),
    (Gender, "Sexe"),
    (Bmi, "IMC"),
    (RecordingDetails, "Dades de l'enregistrament"),
    (Device, "Dispositiu"),
    (Recording, "Enregistrament"),
    (MonitoringTimeFlow, "Avaluació del flux"),
    (FlowEvaluation, "Flow evaluation"),
    (OxygenSaturationEvaluation, "Avaluació saturació"),
    (EventsIndex, "Índex d'esdeveniments"),
    (Supine, "Supí"),
    (NonSupine, "No supí"),
    (Upright, "Dret"),
    (EventsTotal, "Esdeveniments totals"),
    (Apneas, "Apnees"),
    (Hypopneas, "Hipopnees"),
    (ApneaIndex, "Índex d'apnea"),
    (Obstructive, "Obstructiva"),
    (Central, "Central"),
    (Mixed, "Mixta"),
    (Unclassified, "No classificada"),
    (CheyneStokes, "Cheyne-Stokes"),
    (OxygenDesaturation, "Dessaturació d'oxigen"),
    (OxygenSaturationPercentage, "% de saturació d'oxigen"),
    (OxygenSaturationEvalTimePercentage, "% satur. oxig. - temps estudi"),
    (Breaths, "Respiracions"),
    (PulseBpm, "Pols - ppm"),
    (AnalysisGuidelines, "Criteris anàlisi"),
    (Interpretation, "Interpretació"),
    (PrintedOn, "Imprès el"),
];

pub(super) fn registry() -> LanguageRegistry {
    LanguageRegistry::new(
        ReportKind::Diagnostic,
        RecordingDetails,
        vec![
            LanguageDictionary::new(Language::English, ENGLISH, ENGLISH_GENDER, &[]),
            LanguageDictionary::new(Language::Portuguese, PORTUGUESE, PORTUGUESE_GENDER, &[]),
            LanguageDictionary::new(Language::Spanish, SPANISH, SPANISH_GENDER, &[]),
            LanguageDictionary::new(Language::Catalan, CATALAN, CATALAN_GENDER, &[]),
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
    fn test_position_rows_are_not_prefixes_of_each_other() {
        for table in [ENGLISH, PORTUGUESE, SPANISH, CATALAN] {
            let label = |key: LabelKey| table.iter().find(|(k, _)| *k == key).unwrap().1;
            let rows = [label(Supine), label(NonSupine), label(Upright)];
            for a in rows {
                for b in rows {
                    if a != b {
                        assert!(!b.starts_with(a), "{b} starts with {a}");
                    }
                }
            }
        }
    }
}
