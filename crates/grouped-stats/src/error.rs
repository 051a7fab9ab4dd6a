/// Machine-readable category of an [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum ErrorKind {
    /// The observation set cannot be analyzed (empty, non-finite values, or a
    /// spread too wide to represent).
    #[display("invalid input")]
    InvalidInput,
    /// An interpolation formula would divide by a zero class frequency.
    #[display("division by zero")]
    DivisionByZero,
}

/// Error raised by any stage of the analysis pipeline.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("observation set is empty")]
    EmptyObservations,
    #[display("observation #{index} is not a finite number ({value})")]
    NonFiniteObservation { index: usize, value: f64 },
    #[display("range of observations {x_min} to {x_max} overflows f64")]
    RangeOverflow { x_min: f64, x_max: f64 },
    #[display("{statistic} class {class} has zero frequency")]
    ZeroFrequencyClass {
        statistic: &'static str,
        /// Interval label, e.g. `[12.00 - 17.00)`.
        class: String,
    },
}

impl AnalysisError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyObservations
            | Self::NonFiniteObservation { .. }
            | Self::RangeOverflow { .. } => ErrorKind::InvalidInput,
            Self::ZeroFrequencyClass { .. } => ErrorKind::DivisionByZero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert!(AnalysisError::EmptyObservations.kind().is_invalid_input());
        assert!(
            AnalysisError::NonFiniteObservation {
                index: 3,
                value: f64::NAN
            }
            .kind()
            .is_invalid_input()
        );
        assert!(
            AnalysisError::ZeroFrequencyClass {
                statistic: "median",
                class: "[0.00 - 1.00)".to_owned(),
            }
            .kind()
            .is_division_by_zero()
        );
    }

    #[test]
    fn test_display() {
        let err = AnalysisError::NonFiniteObservation {
            index: 2,
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "observation #2 is not a finite number (inf)");

        let err = AnalysisError::ZeroFrequencyClass {
            statistic: "median",
            class: "[4.00 - 6.00]".to_owned(),
        };
        assert_eq!(err.to_string(), "median class [4.00 - 6.00] has zero frequency");
    }

    #[test]
    fn test_range_overflow_is_invalid_input() {
        let err = AnalysisError::RangeOverflow {
            x_min: -1e308,
            x_max: 1e308,
        };
        assert!(err.kind().is_invalid_input());
    }
}
