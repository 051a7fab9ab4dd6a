//! Observation input parsing
//!
//! Values may be separated by commas, spaces or newlines, in any mix. Every
//! token must be a finite number, and at least a minimum number of values is
//! required before the analysis runs.

/// Default minimum number of observations
pub const MIN_OBSERVATIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    #[display("no values entered; at least {min} numeric values are required")]
    Empty { min: usize },
    #[display("'{token}' is not a valid number")]
    InvalidNumber { token: String },
    #[display("'{token}' is not a finite number")]
    NonFinite { token: String },
    #[display("at least {min} values are required, got {count}")]
    TooFew { min: usize, count: usize },
}

/// Split raw text into numeric observations.
pub fn parse_observations(text: &str, min: usize) -> Result<Vec<f64>, InputError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(InputError::Empty { min });
    }
    if values.len() < min {
        return Err(InputError::TooFew {
            min,
            count: values.len(),
        });
    }
    Ok(values)
}

fn parse_token(token: &str) -> Result<f64, InputError> {
    let value = token
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber {
            token: token.to_owned(),
        })?;
    if !value.is_finite() {
        return Err(InputError::NonFinite {
            token: token.to_owned(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        let values = parse_observations("12, 15 18\n20,22\t25,,28", MIN_OBSERVATIONS).unwrap();
        assert_eq!(values, [12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0]);
    }

    #[test]
    fn test_decimal_and_signed_values() {
        let values = parse_observations("-1.5 2e1 +3 .5 0", MIN_OBSERVATIONS).unwrap();
        assert_eq!(values, [-1.5, 20.0, 3.0, 0.5, 0.0]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            parse_observations(" \n , ", MIN_OBSERVATIONS),
            Err(InputError::Empty { min: 5 })
        );
    }

    #[test]
    fn test_too_few_values() {
        assert_eq!(
            parse_observations("1 2 3", MIN_OBSERVATIONS),
            Err(InputError::TooFew { min: 5, count: 3 })
        );
        assert!(parse_observations("1 2 3", 3).is_ok());
    }

    #[test]
    fn test_invalid_token() {
        let err = parse_observations("1 2 abc 4 5", MIN_OBSERVATIONS).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidNumber {
                token: "abc".to_owned()
            }
        );
        assert_eq!(err.to_string(), "'abc' is not a valid number");
    }

    #[test]
    fn test_non_finite_token() {
        assert_eq!(
            parse_observations("1 2 inf 4 5", MIN_OBSERVATIONS),
            Err(InputError::NonFinite {
                token: "inf".to_owned()
            })
        );
        assert!(parse_observations("1 2 NaN 4 5", MIN_OBSERVATIONS).is_err());
    }
}
