use thiserror::Error;

/// Convenient result alias for the payload checker library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Raised when a weight is negative or not a finite number.
    #[error("invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// Raised when the explicit weight list does not match the declared passenger count.
    #[error("passenger count mismatch: declared {declared} passengers but {supplied} weights were supplied")]
    SpecMismatch { declared: usize, supplied: usize },

    /// Raised when an aircraft name is not one of the tabulated types.
    #[error("unknown aircraft type: {name}{}", format_suggestions(.suggestions))]
    UnknownAircraft {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a season name is neither summer nor winter.
    #[error("unknown season: {name}; expected summer or winter")]
    UnknownSeason { name: String },

    /// Raised when a month could not be parsed from a name or number.
    #[error("unknown month: {name}; expected a month name or a number from 1 to 12")]
    UnknownMonth { name: String },
}

impl Error {
    pub(crate) fn invalid_weight(field: impl Into<String>, value: f64) -> Self {
        Error::InvalidInput {
            field: field.into(),
            message: format!("weight must be finite and non-negative, got {value}"),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// Validate a single weight in pounds. Used for cargo overrides and explicit passenger weights.
pub(crate) fn ensure_weight(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::invalid_weight(field, value));
    }
    Ok(value)
}
