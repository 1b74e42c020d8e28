//! Submitted activity reports as handed over by the submission pipeline.
//!
//! The dashboard only reads these. Field names on the wire follow the
//! pipeline's camelCase JSON export.

use serde::{Deserialize, Serialize};

/// Review state of a submitted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending,
    Validated,
    Rejected,
    /// Any status string this build does not know about.
    #[serde(other)]
    Unknown,
}

impl ReportStatus {
    pub fn is_validated(self) -> bool {
        matches!(self, Self::Validated)
    }
}

/// A single submitted report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Report {
    #[serde(default)]
    pub id: String,
    pub status: ReportStatus,
    #[serde(default)]
    pub data: ReportData,
}

impl Report {
    pub fn new(id: impl Into<String>, status: ReportStatus, data: ReportData) -> Self {
        Self {
            id: id.into(),
            status,
            data,
        }
    }
}

/// Activity counters filled in by the reporting church.
///
/// Counters missing from the export decode as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportData {
    pub total_conversoes: u32,
    pub disc_total_alunos: u32,
    pub cead_total: u32,

    pub ativ_evangelismo_pessoal: u32,
    pub ativ_evangelismo_transito: u32,
    pub ativ_evangelismo_infantil: u32,
    pub ativ_evangelismo_no_lar: u32,
    pub ativ_evangelismo_noturno: u32,

    pub bencaos_batismos: u32,
    pub bencaos_renovos: u32,
    pub bencaos_curas_divinas: u32,
    pub bencaos_outros: u32,
}

impl ReportData {
    /// All five evangelism categories for this report.
    pub fn evangelisms(&self) -> u64 {
        [
            self.ativ_evangelismo_pessoal,
            self.ativ_evangelismo_transito,
            self.ativ_evangelismo_infantil,
            self.ativ_evangelismo_no_lar,
            self.ativ_evangelismo_noturno,
        ]
        .iter()
        .map(|&n| u64::from(n))
        .sum()
    }

    /// All four blessing categories, baptisms included.
    pub fn blessings(&self) -> u64 {
        [
            self.bencaos_batismos,
            self.bencaos_renovos,
            self.bencaos_curas_divinas,
            self.bencaos_outros,
        ]
        .iter()
        .map(|&n| u64::from(n))
        .sum()
    }
}

/// Decode a JSON array of reports.
pub fn parse_reports(raw: &str) -> Result<Vec<Report>, String> {
    serde_json::from_str(raw).map_err(|err| format!("Invalid report export: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_export() {
        let raw = r#"[{
            "id": "r-1",
            "status": "validated",
            "data": {
                "totalConversoes": 5,
                "discTotalAlunos": 12,
                "ceadTotal": 3,
                "ativEvangelismoNoLar": 2,
                "bencaosCurasDivinas": 1
            }
        }]"#;

        let reports = parse_reports(raw).unwrap();
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.id, "r-1");
        assert!(report.status.is_validated());
        assert_eq!(report.data.total_conversoes, 5);
        assert_eq!(report.data.disc_total_alunos, 12);
        assert_eq!(report.data.ativ_evangelismo_no_lar, 2);
        assert_eq!(report.data.bencaos_curas_divinas, 1);
        // Omitted counters default to zero.
        assert_eq!(report.data.bencaos_outros, 0);
    }

    #[test]
    fn unknown_status_is_not_validated() {
        let reports = parse_reports(r#"[{"status": "archived", "data": {}}]"#).unwrap();
        assert_eq!(reports[0].status, ReportStatus::Unknown);
        assert!(!reports[0].status.is_validated());
    }

    #[test]
    fn non_numeric_counter_is_rejected() {
        let err = parse_reports(r#"[{"status": "validated", "data": {"ceadTotal": "many"}}]"#)
            .unwrap_err();
        assert!(err.starts_with("Invalid report export"));
    }

    #[test]
    fn category_sums() {
        let data = ReportData {
            ativ_evangelismo_pessoal: 1,
            ativ_evangelismo_transito: 2,
            ativ_evangelismo_infantil: 3,
            ativ_evangelismo_no_lar: 4,
            ativ_evangelismo_noturno: 5,
            bencaos_batismos: 3,
            bencaos_renovos: 1,
            bencaos_curas_divinas: 0,
            bencaos_outros: 2,
            ..Default::default()
        };
        assert_eq!(data.evangelisms(), 15);
        assert_eq!(data.blessings(), 6);
    }
}
