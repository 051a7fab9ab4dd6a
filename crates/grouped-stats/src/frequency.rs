//! Grouped frequency distribution built with Sturges' rule
//!
//! Raw observations are sorted, their range is split into `k` contiguous
//! classes of equal width, and each observation is counted in exactly one
//! class. Every class is half-open `[lower, upper)` except the last one, which
//! is closed `[lower, upper]` so that the maximum observation is always counted.
//!
//! # Algorithm
//!
//! 1. Sort the observations in ascending order
//! 2. `R = Xmax - Xmin`
//! 3. `k = ceil(1 + 3.322 × log10(n))`
//! 4. `A = ceil(R / k)`, or `A = 1` when every observation is equal (`R = 0`)
//! 5. Class `i` covers `[Xmin + i × A, Xmin + (i + 1) × A)`
//!
//! # Examples
//!
//! ```
//! use grouped_stats::frequency::FrequencyDistribution;
//!
//! let values = [12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0, 32.0, 35.0];
//! let distribution = FrequencyDistribution::new(values).unwrap();
//!
//! assert_eq!(distribution.preliminaries.class_count, 5);
//! assert_eq!(distribution.preliminaries.class_width, 5.0);
//!
//! let counts = distribution
//!     .table
//!     .intervals()
//!     .iter()
//!     .map(|class| class.absolute_frequency)
//!     .collect::<Vec<_>>();
//! assert_eq!(counts, [2, 2, 2, 2, 2]);
//! ```

use serde::Serialize;

use crate::{error::AnalysisError, trail::DerivationTrail};

/// Coefficient of `log10(n)` in Sturges' rule.
pub const STURGES_COEFFICIENT: f64 = 3.322;

/// Class width used when all observations are identical.
pub const ZERO_RANGE_CLASS_WIDTH: f64 = 1.0;

/// A frequency table together with the preliminary quantities used to build it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyDistribution {
    /// Range, class count, class width and their derivation.
    pub preliminaries: Preliminaries,
    /// The grouped frequency table.
    pub table: FrequencyTable,
}

/// Quantities computed before any class is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preliminaries {
    /// Observations in ascending order.
    pub sorted: Vec<f64>,
    pub x_min: f64,
    pub x_max: f64,
    /// `x_max - x_min`
    pub range: f64,
    /// `1 + 3.322 × log10(n)` before rounding up.
    pub class_count_decimal: f64,
    pub class_count: usize,
    /// `range / class_count` before rounding up.
    pub class_width_decimal: f64,
    pub class_width: f64,
    /// Preliminary steps in the order they are worked out.
    pub trail: DerivationTrail,
}

/// Grouped frequency table.
///
/// A table always holds at least one class and at least one observation; it
/// can only be obtained through [`FrequencyDistribution`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    intervals: Vec<ClassInterval>,
    total_count: usize,
    class_width: f64,
}

/// One row of a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassInterval {
    /// Inclusive lower bound (`Li`).
    pub lower_bound: f64,
    /// Upper bound (`Ls`), exclusive unless [`is_closed`](Self::is_closed) is set.
    pub upper_bound: f64,
    /// Midpoint of the class (`xi`).
    pub class_mark: f64,
    /// Number of observations in this class (`fi`).
    pub absolute_frequency: usize,
    /// Running total of `fi` up to and including this class (`Fi`).
    pub cumulative_frequency: usize,
    /// `fi / n` (`hi`).
    pub relative_frequency: f64,
    /// `hi × 100`
    pub relative_frequency_percent: f64,
    /// Whether the upper bound belongs to this class (last class only).
    pub is_closed: bool,
}

/// The TOTAL row of a frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyTotals {
    pub absolute: usize,
    pub relative: f64,
    pub percent: f64,
}

impl FrequencyDistribution {
    /// Builds a frequency distribution from unsorted observations.
    ///
    /// The observations are validated, then sorted (stable, duplicates kept)
    /// before delegating to [`from_sorted`](Self::from_sorted).
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::EmptyObservations`] - if there are no observations
    /// * [`AnalysisError::NonFiniteObservation`] - if any observation is NaN or infinite;
    ///   `index` refers to the position in the input sequence
    /// * [`AnalysisError::RangeOverflow`] - if `Xmax - Xmin` or the class bounds
    ///   cannot be represented as finite `f64`
    ///
    /// # Examples
    ///
    /// ```
    /// # use grouped_stats::frequency::FrequencyDistribution;
    /// # use grouped_stats::error::AnalysisError;
    /// assert_eq!(
    ///     FrequencyDistribution::new(Vec::<f64>::new()).unwrap_err(),
    ///     AnalysisError::EmptyObservations
    /// );
    /// assert!(FrequencyDistribution::new([1.0, f64::NAN]).is_err());
    /// ```
    pub fn new<I>(observations: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = observations.into_iter().collect::<Vec<_>>();
        check_finite(&sorted)?;
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Builds a frequency distribution from pre-sorted observations.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, AnalysisError> {
        check_finite(sorted_values)?;
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let n = sorted_values.len();
        let (Some(&x_min), Some(&x_max)) = (sorted_values.first(), sorted_values.last()) else {
            return Err(AnalysisError::EmptyObservations);
        };
        let range = x_max - x_min;

        let class_count_decimal = 1.0 + STURGES_COEFFICIENT * (n as f64).log10();
        let class_count = (class_count_decimal.ceil() as usize).max(1);

        let class_width_decimal = range / class_count as f64;
        let class_width = if range == 0.0 {
            ZERO_RANGE_CLASS_WIDTH
        } else {
            class_width_decimal.ceil()
        };
        // A finite sample can still span more than f64::MAX, and the closing
        // bound can round past it.
        let closing_bound = x_min + class_count as f64 * class_width;
        if !range.is_finite() || !class_width.is_finite() || !closing_bound.is_finite() {
            return Err(AnalysisError::RangeOverflow { x_min, x_max });
        }

        let mut trail = DerivationTrail::new();
        trail.push("sorted_data", sorted_values.to_vec());
        trail.push("x_min", x_min);
        trail.push("x_max", x_max);
        trail.push("range", range);
        trail.push(
            "range_formula",
            format!("R = Xmax - Xmin = {x_max} - {x_min} = {range}"),
        );
        trail.push("k_decimal", class_count_decimal);
        trail.push("k", class_count);
        trail.push(
            "k_formula",
            format!(
                "k = 1 + {STURGES_COEFFICIENT} × log10(n) = 1 + {STURGES_COEFFICIENT} × log10({n}) = {class_count_decimal:.4} ≈ {class_count}"
            ),
        );
        trail.push("width_decimal", class_width_decimal);
        trail.push("width", class_width);
        let mut width_formula = format!(
            "A = R / k = {range} / {class_count} = {class_width_decimal:.4} ≈ {}",
            class_width_decimal.ceil()
        );
        if range == 0.0 {
            width_formula.push_str(&format!(
                " (all observations equal, A = {ZERO_RANGE_CLASS_WIDTH})"
            ));
        }
        trail.push("width_formula", width_formula);

        tracing::debug!(n, x_min, x_max, class_count, class_width, "computed class layout");

        let table = FrequencyTable::tabulate(sorted_values, x_min, class_width, class_count);

        Ok(Self {
            preliminaries: Preliminaries {
                sorted: sorted_values.to_vec(),
                x_min,
                x_max,
                range,
                class_count_decimal,
                class_count,
                class_width_decimal,
                class_width,
                trail,
            },
            table,
        })
    }
}

fn check_finite(values: &[f64]) -> Result<(), AnalysisError> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyObservations);
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(AnalysisError::NonFiniteObservation {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

impl FrequencyTable {
    #[expect(clippy::cast_precision_loss)]
    fn tabulate(sorted_values: &[f64], x_min: f64, class_width: f64, class_count: usize) -> Self {
        let n = sorted_values.len();
        let x_max = sorted_values[n - 1];

        // Bounds are recomputed from x_min for each class so that a class's
        // lower bound is bit-identical to the previous class's upper bound.
        let bound = |i: usize| x_min + (i as f64) * class_width;
        let mut intervals = (0..class_count)
            .map(|i| {
                let is_closed = i == class_count - 1;
                let lower_bound = bound(i);
                let mut upper_bound = bound(i + 1);
                if is_closed {
                    // The closing bound never falls below the maximum observation.
                    upper_bound = upper_bound.max(x_max);
                }
                ClassInterval {
                    lower_bound,
                    upper_bound,
                    class_mark: f64::midpoint(lower_bound, upper_bound),
                    absolute_frequency: 0,
                    cumulative_frequency: 0,
                    relative_frequency: 0.0,
                    relative_frequency_percent: 0.0,
                    is_closed,
                }
            })
            .collect::<Vec<_>>();

        // Values are sorted, so a single cursor walks the classes in order.
        let mut idx = 0;
        for &value in sorted_values {
            while !intervals[idx].contains(value) && idx + 1 < class_count {
                idx += 1;
            }
            debug_assert!(intervals[idx].contains(value));
            intervals[idx].absolute_frequency += 1;
        }

        let mut cumulative = 0;
        for class in &mut intervals {
            cumulative += class.absolute_frequency;
            class.cumulative_frequency = cumulative;
            class.relative_frequency = class.absolute_frequency as f64 / n as f64;
            class.relative_frequency_percent = class.relative_frequency * 100.0;
        }

        Self {
            intervals,
            total_count: n,
            class_width,
        }
    }

    /// Classes in ascending order of lower bound.
    #[must_use]
    pub fn intervals(&self) -> &[ClassInterval] {
        &self.intervals
    }

    /// Number of observations (`n`).
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Common width (`A`) of every class.
    #[must_use]
    pub fn class_width(&self) -> f64 {
        self.class_width
    }

    /// Number of classes (`k`).
    #[must_use]
    pub fn num_classes(&self) -> usize {
        self.intervals.len()
    }

    /// Returns the index of the class containing `value`, if any.
    #[must_use]
    pub fn class_of(&self, value: f64) -> Option<usize> {
        self.intervals.iter().position(|class| class.contains(value))
    }

    /// Sums of the frequency columns (the TOTAL row).
    #[must_use]
    pub fn totals(&self) -> FrequencyTotals {
        FrequencyTotals {
            absolute: self.intervals.iter().map(|c| c.absolute_frequency).sum(),
            relative: self.intervals.iter().map(|c| c.relative_frequency).sum(),
            percent: self
                .intervals
                .iter()
                .map(|c| c.relative_frequency_percent)
                .sum(),
        }
    }
}

impl ClassInterval {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Whether `value` falls in this class under the half-open/closed rule.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower_bound <= value
            && (value < self.upper_bound || (self.is_closed && value <= self.upper_bound))
    }

    /// Display label, e.g. `[12.00 - 17.00)` or `[32.00 - 37.00]` for the last class.
    #[must_use]
    pub fn label(&self) -> String {
        let close = if self.is_closed { ']' } else { ')' };
        format!("[{:.2} - {:.2}{close}", self.lower_bound, self.upper_bound)
    }
}
