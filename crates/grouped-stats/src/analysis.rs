//! End-to-end analysis of an observation set
//!
//! [`analyze`] runs the three stages in order and stops at the first error:
//!
//! 1. Frequency distribution ([`FrequencyDistribution`])
//! 2. Central tendency on the table ([`CentralTendency`])
//! 3. Dispersion on the table around the mean ([`Dispersion`])
//!
//! The result holds no reference to the input and no hidden state, so the same
//! observations always produce an identical [`AnalysisResult`].

use serde::Serialize;

use crate::{
    Statistic,
    central_tendency::CentralTendency,
    chart::ChartData,
    dispersion::Dispersion,
    error::AnalysisError,
    frequency::{FrequencyDistribution, FrequencyTable, Preliminaries},
    trail::DerivationTrail,
};

/// Every table, measure and derivation trail produced for one observation set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub distribution: FrequencyDistribution,
    pub central_tendency: CentralTendency,
    pub dispersion: Dispersion,
}

/// Section a derivation trail belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Section {
    #[display("Preliminaries")]
    Preliminaries,
    #[display("Central tendency")]
    CentralTendency,
    #[display("Dispersion")]
    Dispersion,
}

/// A derivation trail labelled with where it belongs in the report.
#[derive(Debug, Clone, Copy)]
pub struct LabelledTrail<'a> {
    pub section: Section,
    pub name: &'static str,
    pub trail: &'a DerivationTrail,
}

/// Computes the frequency table, central tendency and dispersion of `observations`.
///
/// # Errors
///
/// Returns the error of the first failing stage unchanged:
///
/// * [`AnalysisError::EmptyObservations`], [`AnalysisError::NonFiniteObservation`]
///   or [`AnalysisError::RangeOverflow`] from the frequency table
/// * [`AnalysisError::ZeroFrequencyClass`] from the median
///
/// # Examples
///
/// ```
/// use grouped_stats::analysis::analyze;
///
/// let result = analyze([12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0, 32.0, 35.0]).unwrap();
/// assert_eq!(result.table().num_classes(), 5);
/// assert_eq!(result.central_tendency.mean.value, 24.5);
/// assert!(result.dispersion.standard_deviation.value > 0.0);
/// ```
pub fn analyze<I>(observations: I) -> Result<AnalysisResult, AnalysisError>
where
    I: IntoIterator<Item = f64>,
{
    let distribution = FrequencyDistribution::new(observations)?;
    tracing::debug!(
        classes = distribution.table.num_classes(),
        n = distribution.table.total_count(),
        "frequency table built"
    );

    let central_tendency = CentralTendency::from_table(&distribution.table)?;
    tracing::debug!(
        mean = central_tendency.mean.value,
        median = central_tendency.median.value,
        mode = central_tendency.mode.value,
        "central tendency computed"
    );

    let dispersion = Dispersion::from_table(&distribution.table, central_tendency.mean.value);
    tracing::debug!(
        mean_deviation = dispersion.mean_deviation.value,
        standard_deviation = dispersion.standard_deviation.value,
        "dispersion computed"
    );

    Ok(AnalysisResult {
        distribution,
        central_tendency,
        dispersion,
    })
}

impl AnalysisResult {
    #[must_use]
    pub fn table(&self) -> &FrequencyTable {
        &self.distribution.table
    }

    #[must_use]
    pub fn preliminaries(&self) -> &Preliminaries {
        &self.distribution.preliminaries
    }

    #[must_use]
    pub fn chart_data(&self) -> ChartData {
        ChartData::from_table(self.table())
    }

    /// Statistics in report order, each with its display name.
    #[must_use]
    pub fn statistics(&self) -> [(Section, &'static str, &Statistic); 5] {
        [
            (Section::CentralTendency, "mean", &self.central_tendency.mean),
            (
                Section::CentralTendency,
                "median",
                &self.central_tendency.median,
            ),
            (Section::CentralTendency, "mode", &self.central_tendency.mode),
            (
                Section::Dispersion,
                "mean_deviation",
                &self.dispersion.mean_deviation,
            ),
            (
                Section::Dispersion,
                "standard_deviation",
                &self.dispersion.standard_deviation,
            ),
        ]
    }

    /// Every derivation trail, in the order the steps are narrated.
    pub fn trails(&self) -> impl Iterator<Item = LabelledTrail<'_>> {
        let preliminaries = LabelledTrail {
            section: Section::Preliminaries,
            name: "preliminaries",
            trail: &self.preliminaries().trail,
        };
        std::iter::once(preliminaries).chain(self.statistics().into_iter().map(
            |(section, name, stat)| LabelledTrail {
                section,
                name,
                trail: &stat.trail,
            },
        ))
    }
}
