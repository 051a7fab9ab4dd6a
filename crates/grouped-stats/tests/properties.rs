//! Randomized property tests for the analysis pipeline.
//!
//! Observation sets of several shapes (integers with many ties, wide-range
//! floats, constant data, very small samples) are generated from fixed seeds
//! and checked against the invariants of the frequency table and of each
//! derived measure.

use grouped_stats::{analysis::analyze, trail::StepValue};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Number of observation sets per shape
const ITERATIONS: usize = 200;

#[derive(Debug, Clone, Copy)]
enum Shape {
    SmallIntegers,
    WideFloats,
    Constant,
    Tiny,
}

const SHAPES: [Shape; 4] = [
    Shape::SmallIntegers,
    Shape::WideFloats,
    Shape::Constant,
    Shape::Tiny,
];

fn generate<R>(rng: &mut R, shape: Shape) -> Vec<f64>
where
    R: Rng,
{
    match shape {
        Shape::SmallIntegers => {
            let n = rng.random_range(5..300);
            (0..n)
                .map(|_| f64::from(rng.random_range(-50..=50_i32)))
                .collect()
        }
        Shape::WideFloats => {
            let n = rng.random_range(5..500);
            (0..n)
                .map(|_| rng.random_range(-1.0e6..1.0e6))
                .collect()
        }
        Shape::Constant => {
            let n = rng.random_range(1..50);
            let value = rng.random_range(-100.0..100.0);
            vec![value; n]
        }
        Shape::Tiny => {
            let n = rng.random_range(1..5);
            (0..n).map(|_| rng.random_range(0.0..1.0)).collect()
        }
    }
}

fn for_each_sample(seed: u64, mut check: impl FnMut(&[f64])) {
    let mut rng = Pcg32::seed_from_u64(seed);
    for shape in SHAPES {
        for _ in 0..ITERATIONS {
            let values = generate(&mut rng, shape);
            check(&values);
        }
    }
}

#[test]
fn test_frequencies_sum_to_n() {
    for_each_sample(1, |values| {
        let result = analyze(values.iter().copied()).unwrap();
        let table = result.table();
        let n = values.len();

        assert_eq!(table.total_count(), n);
        assert_eq!(table.totals().absolute, n);
        assert_eq!(table.intervals().last().unwrap().cumulative_frequency, n);
        assert!((table.totals().relative - 1.0).abs() < 1e-9);
    });
}

#[test]
fn test_classes_partition_observations() {
    for_each_sample(2, |values| {
        let result = analyze(values.iter().copied()).unwrap();
        let table = result.table();
        let intervals = table.intervals();

        for pair in intervals.windows(2) {
            assert_eq!(pair[0].upper_bound, pair[1].lower_bound);
            assert!(!pair[0].is_closed);
        }
        assert!(intervals.last().unwrap().is_closed);
        assert_eq!(intervals.len(), result.preliminaries().class_count);

        for &value in values {
            let containing = intervals.iter().filter(|c| c.contains(value)).count();
            assert_eq!(containing, 1, "value {value} in {containing} classes");
        }

        let mut counted = vec![0; intervals.len()];
        for &value in values {
            counted[table.class_of(value).unwrap()] += 1;
        }
        let fi = intervals
            .iter()
            .map(|c| c.absolute_frequency)
            .collect::<Vec<_>>();
        assert_eq!(counted, fi);
    });
}

#[test]
#[expect(clippy::cast_precision_loss)]
fn test_median_class_invariant() {
    for_each_sample(3, |values| {
        let result = analyze(values.iter().copied()).unwrap();
        let intervals = result.table().intervals();
        let median = &result.central_tendency.median;
        let label = median
            .trail
            .get("median_class")
            .and_then(StepValue::as_text)
            .unwrap();

        let idx = intervals.iter().position(|c| c.label() == label).unwrap();
        let p = values.len() as f64 / 2.0;
        let prev = if idx == 0 {
            0.0
        } else {
            intervals[idx - 1].cumulative_frequency as f64
        };
        assert!(prev < p && p <= intervals[idx].cumulative_frequency as f64);
        let upper = intervals[idx].upper_bound;
        assert!(intervals[idx].lower_bound <= median.value);
        assert!(median.value <= upper + 1e-9 * upper.abs().max(1.0));
    });
}

#[test]
fn test_mode_lies_in_modal_class() {
    for_each_sample(4, |values| {
        let result = analyze(values.iter().copied()).unwrap();
        let table = result.table();
        if table.num_classes() == 1 {
            let class = &table.intervals()[0];
            assert_eq!(
                result.central_tendency.mode.value,
                class.lower_bound + class.width() / 2.0
            );
        }

        let mode = &result.central_tendency.mode;
        let label = mode
            .trail
            .get("modal_class")
            .and_then(StepValue::as_text)
            .unwrap();
        let modal = table.intervals().iter().find(|c| c.label() == label).unwrap();
        let max_fi = table
            .intervals()
            .iter()
            .map(|c| c.absolute_frequency)
            .max()
            .unwrap();
        assert_eq!(modal.absolute_frequency, max_fi);
        assert!(modal.lower_bound <= mode.value);
        assert!(mode.value <= modal.upper_bound + 1e-9 * modal.upper_bound.abs().max(1.0));
    });
}

#[test]
fn test_standard_deviation_consistent_with_variance() {
    for_each_sample(5, |values| {
        let result = analyze(values.iter().copied()).unwrap();
        let sd = result.dispersion.standard_deviation.value;
        let variance = result.dispersion.variance;

        assert!(sd >= 0.0);
        assert!(variance >= 0.0);
        assert!((sd * sd - variance).abs() <= 1e-9 * variance.max(1.0));
        assert!(result.dispersion.mean_deviation.value >= 0.0);
        assert!(result.dispersion.mean_deviation.value <= sd + 1e-9 * sd.max(1.0));
    });
}

#[test]
fn test_mean_within_table_bounds() {
    for_each_sample(6, |values| {
        let result = analyze(values.iter().copied()).unwrap();
        let intervals = result.table().intervals();
        let mean = result.central_tendency.mean.value;
        assert!(intervals[0].lower_bound <= mean);
        assert!(mean <= intervals.last().unwrap().upper_bound);
    });
}

#[test]
fn test_analysis_is_idempotent() {
    for_each_sample(7, |values| {
        let first = analyze(values.iter().copied()).unwrap();
        let second = analyze(values.iter().copied()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    });
}
