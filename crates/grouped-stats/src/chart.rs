//! Per-class series for plotting a frequency table
//!
//! [`ChartData`] flattens a [`FrequencyTable`] into parallel vectors, one entry
//! per class, in the shape bar charts, pie charts, histograms and frequency
//! polygons consume. No rendering happens here.

use serde::Serialize;

use crate::frequency::{ClassInterval, FrequencyTable};

/// Parallel per-class series derived from a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub absolute_frequencies: Vec<usize>,
    pub percentages: Vec<f64>,
    pub class_marks: Vec<f64>,
    pub lower_bounds: Vec<f64>,
    pub upper_bounds: Vec<f64>,
}

impl ChartData {
    #[must_use]
    pub fn from_table(table: &FrequencyTable) -> Self {
        let intervals = table.intervals();
        Self {
            labels: intervals.iter().map(ClassInterval::label).collect(),
            absolute_frequencies: intervals.iter().map(|c| c.absolute_frequency).collect(),
            percentages: intervals
                .iter()
                .map(|c| c.relative_frequency_percent)
                .collect(),
            class_marks: intervals.iter().map(|c| c.class_mark).collect(),
            lower_bounds: intervals.iter().map(|c| c.lower_bound).collect(),
            upper_bounds: intervals.iter().map(|c| c.upper_bound).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyDistribution;

    #[test]
    fn test_series_are_parallel() {
        let values = [12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0, 32.0, 35.0];
        let table = FrequencyDistribution::new(values).unwrap().table;
        let chart = ChartData::from_table(&table);

        assert_eq!(chart.len(), table.num_classes());
        assert_eq!(chart.absolute_frequencies.len(), chart.len());
        assert_eq!(chart.labels[0], "[12.00 - 17.00)");
        assert_eq!(chart.lower_bounds, [12.0, 17.0, 22.0, 27.0, 32.0]);
        assert_eq!(chart.upper_bounds, [17.0, 22.0, 27.0, 32.0, 37.0]);
        assert_eq!(chart.class_marks[2], 24.5);
        assert_eq!(chart.percentages.iter().sum::<f64>().round(), 100.0);
    }
}
