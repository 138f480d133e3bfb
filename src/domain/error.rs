//! Domain errors - validation failures raised by value objects and the aggregate
//!
//! Only input validation lives here. "Not found" and storage failures belong to
//! the repository port and never share a kind with these.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A scalar fell outside the bound its value object enforces
    #[error("{field} must be {bound}, got {value}")]
    OutOfRange {
        field: &'static str,
        bound: &'static str,
        value: i64,
    },

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Text that names no member of a closed enumeration
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// Coarse validation failure on a whole aggregate
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn out_of_range(field: &'static str, bound: &'static str, value: impl Into<i64>) -> Self {
        Self::OutOfRange {
            field,
            bound,
            value: value.into(),
        }
    }

    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_names_input_and_bound() {
        let err = DomainError::out_of_range("armor class", "between 0 and 30", 31);
        assert_eq!(err.to_string(), "armor class must be between 0 and 30, got 31");
    }

    #[test]
    fn test_unknown_variant_message() {
        let err = DomainError::unknown_variant("creature type", "GOBLINOID");
        assert_eq!(err.to_string(), "Unknown creature type: GOBLINOID");
    }
}
