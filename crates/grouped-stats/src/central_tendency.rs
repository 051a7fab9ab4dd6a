//! Mean, median and mode of grouped data
//!
//! All three measures are computed from a [`FrequencyTable`], using each
//! class mark as the representative value of its class:
//!
//! - Mean: `x̄ = Σ(xi × fi) / n`
//! - Median: `Me = Li + [(n/2 - Fi-1) / fi] × A`, where the median class is the
//!   first class whose cumulative frequency reaches `n/2`
//! - Mode: `Mo = Li + [d1 / (d1 + d2)] × A`, where the modal class is the first
//!   class with the highest frequency, `d1 = fi - fi-1` and `d2 = fi - fi+1`

use serde::Serialize;

use crate::{
    Statistic,
    error::AnalysisError,
    frequency::FrequencyTable,
    trail::{DerivationTrail, WorkTable},
};

/// Measures of central tendency for a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralTendency {
    pub mean: Statistic,
    pub median: Statistic,
    pub mode: Statistic,
}

impl CentralTendency {
    /// Computes mean, median and mode of `table`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ZeroFrequencyClass`] if the median class is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use grouped_stats::{central_tendency::CentralTendency, frequency::FrequencyDistribution};
    ///
    /// let values = [12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0, 32.0, 35.0];
    /// let dist = FrequencyDistribution::new(values).unwrap();
    /// let ct = CentralTendency::from_table(&dist.table).unwrap();
    ///
    /// assert_eq!(ct.mean.value, 24.5);
    /// assert_eq!(ct.median.value, 24.5);
    /// assert_eq!(ct.mode.value, 17.0);
    /// ```
    pub fn from_table(table: &FrequencyTable) -> Result<Self, AnalysisError> {
        Ok(Self {
            mean: mean(table),
            median: median(table)?,
            mode: mode(table),
        })
    }
}

/// Arithmetic mean of grouped data.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(table: &FrequencyTable) -> Statistic {
    let n = table.total_count();

    let mut sheet = WorkTable::new(vec!["xi", "fi", "xi × fi"]);
    let mut sum_xi_fi = 0.0;
    for class in table.intervals() {
        let fi = class.absolute_frequency as f64;
        let product = class.class_mark * fi;
        sheet.push_row(vec![class.class_mark, fi, product]);
        sum_xi_fi += product;
    }
    let mean = sum_xi_fi / n as f64;

    let mut trail = DerivationTrail::new();
    trail.push("table", sheet);
    trail.push("sum_xi_fi", sum_xi_fi);
    trail.push("sum_formula", format!("Σ(xi × fi) = {sum_xi_fi:.4}"));
    trail.push("mean", mean);
    trail.push(
        "final_formula",
        format!("x̄ = Σ(xi × fi) / n = {sum_xi_fi:.4} / {n} = {mean:.2}"),
    );

    Statistic { value: mean, trail }
}

/// Median of grouped data, interpolated inside the median class.
///
/// # Errors
///
/// Returns [`AnalysisError::ZeroFrequencyClass`] if the selected median class
/// has no observations.
#[expect(clippy::cast_precision_loss)]
pub fn median(table: &FrequencyTable) -> Result<Statistic, AnalysisError> {
    let n = table.total_count();
    let intervals = table.intervals();
    let position = n as f64 / 2.0;

    // The last class always has Fi = n >= n/2.
    let idx = intervals
        .iter()
        .position(|class| class.cumulative_frequency as f64 >= position)
        .unwrap_or(intervals.len() - 1);
    let class = &intervals[idx];
    let cumulative_prev = idx
        .checked_sub(1)
        .map_or(0, |prev| intervals[prev].cumulative_frequency);

    if class.absolute_frequency == 0 {
        return Err(AnalysisError::ZeroFrequencyClass {
            statistic: "median",
            class: class.label(),
        });
    }

    let li = class.lower_bound;
    let fi = class.absolute_frequency;
    let width = class.width();
    let offset = position - cumulative_prev as f64;
    let median = li + (offset / fi as f64) * width;

    let mut trail = DerivationTrail::new();
    trail.push("position", position);
    trail.push("position_formula", format!("n/2 = {n}/2 = {position}"));
    trail.push("median_class", class.label());
    trail.push("li", li);
    trail.push("fi", fi);
    trail.push("cumulative_prev", cumulative_prev);
    trail.push("width", width);
    trail.push("formula", "Me = Li + [(n/2 - Fi-1) / fi] × A".to_owned());
    trail.push(
        "substitution",
        format!("Me = {li} + [({position} - {cumulative_prev}) / {fi}] × {width}"),
    );
    trail.push(
        "calculation",
        format!("Me = {li} + [{offset} / {fi}] × {width}"),
    );
    trail.push("result", median);
    trail.push("final_formula", format!("Me = {median:.2}"));

    Ok(Statistic {
        value: median,
        trail,
    })
}

/// Mode of grouped data, interpolated inside the modal class.
///
/// When the modal class has the same frequency as both neighbours
/// (`d1 + d2 = 0`, e.g. a single-class table) the class midpoint is used.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mode(table: &FrequencyTable) -> Statistic {
    let intervals = table.intervals();

    // Strictly greater keeps the first class on ties.
    let mut idx = 0;
    for (i, class) in intervals.iter().enumerate().skip(1) {
        if class.absolute_frequency > intervals[idx].absolute_frequency {
            idx = i;
        }
    }
    let class = &intervals[idx];
    let fi_modal = class.absolute_frequency;
    let fi_prev = idx
        .checked_sub(1)
        .map_or(0, |prev| intervals[prev].absolute_frequency);
    let fi_next = intervals
        .get(idx + 1)
        .map_or(0, |next| next.absolute_frequency);

    let li = class.lower_bound;
    let width = class.width();
    let d1 = fi_modal - fi_prev;
    let d2 = fi_modal - fi_next;

    let mode = if d1 + d2 == 0 {
        li + width / 2.0
    } else {
        li + (d1 as f64 / (d1 + d2) as f64) * width
    };

    let mut trail = DerivationTrail::new();
    trail.push("modal_class", class.label());
    trail.push("fi_modal", fi_modal);
    trail.push("li", li);
    trail.push("fi_prev", fi_prev);
    trail.push("fi_next", fi_next);
    trail.push("d1", d1);
    trail.push("d2", d2);
    trail.push("width", width);
    trail.push("formula", "Mo = Li + [d1 / (d1 + d2)] × A".to_owned());
    trail.push(
        "d1_formula",
        format!("d1 = fi_modal - fi_prev = {fi_modal} - {fi_prev} = {d1}"),
    );
    trail.push(
        "d2_formula",
        format!("d2 = fi_modal - fi_next = {fi_modal} - {fi_next} = {d2}"),
    );
    if d1 + d2 == 0 {
        trail.push(
            "fallback",
            format!("d1 + d2 = 0: Mo = Li + A / 2 = {li} + {width} / 2"),
        );
    } else {
        trail.push(
            "substitution",
            format!("Mo = {li} + [{d1} / ({d1} + {d2})] × {width}"),
        );
    }
    trail.push("result", mode);
    trail.push("final_formula", format!("Mo = {mode:.2}"));

    Statistic { value: mode, trail }
}
