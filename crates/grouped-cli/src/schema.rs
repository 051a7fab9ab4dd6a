use chrono::{DateTime, Utc};
use grouped_stats::{
    analysis::AnalysisResult,
    chart::ChartData,
    frequency::{FrequencyDistribution, FrequencyTable, Preliminaries},
};
use serde::Serialize;

/// JSON report of a full analysis run
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    /// Timestamp when the report was generated (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Number of observations analyzed
    pub observations: usize,
    /// Frequency table, measures and derivation trails
    pub result: &'a AnalysisResult,
    /// Per-class series for plotting
    pub chart: ChartData,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self {
            generated_at: Utc::now(),
            observations: result.table().total_count(),
            result,
            chart: result.chart_data(),
        }
    }
}

/// JSON report of the frequency distribution only
#[derive(Debug, Serialize)]
pub struct TableReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub observations: usize,
    pub preliminaries: &'a Preliminaries,
    pub table: &'a FrequencyTable,
    pub chart: ChartData,
}

impl<'a> TableReport<'a> {
    pub fn new(distribution: &'a FrequencyDistribution) -> Self {
        Self {
            generated_at: Utc::now(),
            observations: distribution.table.total_count(),
            preliminaries: &distribution.preliminaries,
            table: &distribution.table,
            chart: ChartData::from_table(&distribution.table),
        }
    }
}
