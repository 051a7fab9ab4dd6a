//! Mean deviation, variance and standard deviation of grouped data
//!
//! Deviations are taken between each class mark and a previously computed
//! mean, weighted by the class frequency:
//!
//! - Mean deviation: `DM = Σ|xi - x̄| × fi / n`
//! - Variance: `σ² = Σ(xi - x̄)² × fi / n`
//! - Standard deviation: `σ = √σ²`

use serde::Serialize;

use crate::{
    Statistic,
    frequency::FrequencyTable,
    trail::{DerivationTrail, WorkTable},
};

/// Measures of dispersion around the mean of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dispersion {
    pub mean_deviation: Statistic,
    pub variance: f64,
    pub standard_deviation: Statistic,
}

impl Dispersion {
    /// Computes mean deviation, variance and standard deviation of `table`
    /// around `mean`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grouped_stats::{dispersion::Dispersion, frequency::FrequencyDistribution};
    ///
    /// let values = [12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0, 32.0, 35.0];
    /// let dist = FrequencyDistribution::new(values).unwrap();
    /// let disp = Dispersion::from_table(&dist.table, 24.5);
    ///
    /// assert_eq!(disp.mean_deviation.value, 6.0);
    /// assert_eq!(disp.variance, 50.0);
    /// ```
    #[must_use]
    pub fn from_table(table: &FrequencyTable, mean: f64) -> Self {
        let (variance, standard_deviation) = variance_and_standard_deviation(table, mean);
        Self {
            mean_deviation: mean_deviation(table, mean),
            variance,
            standard_deviation,
        }
    }
}

/// Mean absolute deviation of grouped data.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean_deviation(table: &FrequencyTable, mean: f64) -> Statistic {
    let n = table.total_count();

    let mut sheet = WorkTable::new(vec!["xi", "fi", "xi - x̄", "|xi - x̄|", "|xi - x̄| × fi"]);
    let mut sum = 0.0;
    for class in table.intervals() {
        let fi = class.absolute_frequency as f64;
        let deviation = class.class_mark - mean;
        let weighted = deviation.abs() * fi;
        sheet.push_row(vec![class.class_mark, fi, deviation, deviation.abs(), weighted]);
        sum += weighted;
    }
    let result = sum / n as f64;

    let mut trail = DerivationTrail::new();
    trail.push("table", sheet);
    trail.push("mean", mean);
    trail.push("sum", sum);
    trail.push("sum_formula", format!("Σ|xi - x̄| × fi = {sum:.4}"));
    trail.push("result", result);
    trail.push("formula", "DM = Σ|xi - x̄| × fi / n".to_owned());
    trail.push(
        "final_formula",
        format!("DM = {sum:.4} / {n} = {result:.2}"),
    );

    Statistic {
        value: result,
        trail,
    }
}

/// Population variance of grouped data.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn variance(table: &FrequencyTable, mean: f64) -> f64 {
    squared_deviation_sheet(table, mean).1 / table.total_count() as f64
}

/// Standard deviation of grouped data (square root of the population variance).
#[must_use]
pub fn standard_deviation(table: &FrequencyTable, mean: f64) -> Statistic {
    variance_and_standard_deviation(table, mean).1
}

#[expect(clippy::cast_precision_loss)]
fn variance_and_standard_deviation(table: &FrequencyTable, mean: f64) -> (f64, Statistic) {
    let n = table.total_count();
    let (sheet, sum) = squared_deviation_sheet(table, mean);
    let variance = sum / n as f64;
    let result = variance.sqrt();

    let mut trail = DerivationTrail::new();
    trail.push("table", sheet);
    trail.push("mean", mean);
    trail.push("sum", sum);
    trail.push("sum_formula", format!("Σ(xi - x̄)² × fi = {sum:.4}"));
    trail.push("variance", variance);
    trail.push(
        "variance_formula",
        format!("σ² = {sum:.4} / {n} = {variance:.4}"),
    );
    trail.push("result", result);
    trail.push("formula", "σ = √[Σ(xi - x̄)² × fi / n]".to_owned());
    trail.push(
        "final_formula",
        format!("σ = √{variance:.4} = {result:.2}"),
    );

    (
        variance,
        Statistic {
            value: result,
            trail,
        },
    )
}

#[expect(clippy::cast_precision_loss)]
fn squared_deviation_sheet(table: &FrequencyTable, mean: f64) -> (WorkTable, f64) {
    let mut sheet = WorkTable::new(vec!["xi", "fi", "xi - x̄", "(xi - x̄)²", "(xi - x̄)² × fi"]);
    let mut sum = 0.0;
    for class in table.intervals() {
        let fi = class.absolute_frequency as f64;
        let deviation = class.class_mark - mean;
        let squared = deviation.powi(2);
        let weighted = squared * fi;
        sheet.push_row(vec![class.class_mark, fi, deviation, squared, weighted]);
        sum += weighted;
    }
    (sheet, sum)
}
