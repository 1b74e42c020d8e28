//! Aggregate totals shown on the dashboard.

use super::report::{Report, ReportData};

/// The six dashboard metrics, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Conversions,
    Students,
    Enrollments,
    Evangelisms,
    Blessings,
    Baptisms,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Conversions,
        Metric::Students,
        Metric::Enrollments,
        Metric::Evangelisms,
        Metric::Blessings,
        Metric::Baptisms,
    ];

    /// This metric's contribution from a single report.
    pub fn extract(self, data: &ReportData) -> u64 {
        match self {
            Metric::Conversions => u64::from(data.total_conversoes),
            Metric::Students => u64::from(data.disc_total_alunos),
            Metric::Enrollments => u64::from(data.cead_total),
            Metric::Evangelisms => data.evangelisms(),
            Metric::Blessings => data.blessings(),
            Metric::Baptisms => u64::from(data.bencaos_batismos),
        }
    }
}

/// Totals across validated reports. Recomputed per render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateMetrics {
    pub conversions: u64,
    pub students: u64,
    pub enrollments: u64,
    pub evangelisms: u64,
    pub blessings: u64,
    pub baptisms: u64,
}

impl AggregateMetrics {
    /// Fixed figures shown when no report data is supplied.
    pub const SAMPLE: AggregateMetrics = AggregateMetrics {
        conversions: 23,
        students: 147,
        enrollments: 98,
        evangelisms: 56,
        blessings: 15,
        baptisms: 8,
    };

    /// Sum every metric over the validated subset of `reports`.
    pub fn from_reports(reports: &[Report]) -> Self {
        validated(reports).fold(Self::default(), |mut totals, report| {
            totals.add(&report.data);
            totals
        })
    }

    fn add(&mut self, data: &ReportData) {
        self.conversions += Metric::Conversions.extract(data);
        self.students += Metric::Students.extract(data);
        self.enrollments += Metric::Enrollments.extract(data);
        self.evangelisms += Metric::Evangelisms.extract(data);
        self.blessings += Metric::Blessings.extract(data);
        self.baptisms += Metric::Baptisms.extract(data);
    }

    pub fn value(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Conversions => self.conversions,
            Metric::Students => self.students,
            Metric::Enrollments => self.enrollments,
            Metric::Evangelisms => self.evangelisms,
            Metric::Blessings => self.blessings,
            Metric::Baptisms => self.baptisms,
        }
    }

    /// `(metric, total)` pairs in display order.
    pub fn entries(&self) -> [(Metric, u64); 6] {
        Metric::ALL.map(|metric| (metric, self.value(metric)))
    }
}

/// Reports eligible for aggregation. Other statuses are skipped silently.
pub fn validated(reports: &[Report]) -> impl Iterator<Item = &Report> {
    reports.iter().filter(|report| report.status.is_validated())
}
