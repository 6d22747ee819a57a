use std::fmt;

/// Errors reported when scenario inputs fall outside their valid ranges.
///
/// The sweep itself never raises these; they exist for input surfaces that
/// check values before handing them to the model.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// Value is NaN or infinite
    NotFinite { field: &'static str, value: f64 },
    /// Value lies outside `[min, max]`
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Too few sample points to span the split domain
    ResolutionTooLow { resolution: usize, min: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotFinite { field, value } => {
                write!(f, "{field} must be a finite number (got {value})")
            }
            InputError::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                if max.is_infinite() {
                    write!(f, "{field} must be at least {min} (got {value})")
                } else {
                    write!(f, "{field} must be within [{min}, {max}] (got {value})")
                }
            }
            InputError::ResolutionTooLow { resolution, min } => {
                write!(f, "resolution must be at least {min} (got {resolution})")
            }
        }
    }
}

impl std::error::Error for InputError {}

impl InputError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            InputError::NotFinite { field, .. } | InputError::OutOfRange { field, .. } => field,
            InputError::ResolutionTooLow { .. } => "resolution",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_open_upper_bound() {
        let err = InputError::OutOfRange {
            field: "primary_holdings",
            value: -1.0,
            min: 0.0,
            max: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "primary_holdings must be at least 0 (got -1)");
    }

    #[test]
    fn test_display_closed_range() {
        let err = InputError::OutOfRange {
            field: "venue_fee",
            value: 0.2,
            min: 0.0,
            max: 0.17,
        };
        assert_eq!(
            err.to_string(),
            "venue_fee must be within [0, 0.17] (got 0.2)"
        );
        assert_eq!(err.field(), "venue_fee");
    }
}
