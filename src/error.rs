//! Error types for the pricer.
//!
//! Every fallible pricing path returns `Result<T, PricingError>` so callers can
//! branch on the failure cause instead of matching message text.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Reasons a pricing attempt can be refused.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PricingError {
    /// A numeric field could not be read as a real number.
    #[error("could not convert {field} to a number: '{value}'")]
    Parse {
        /// Short field name (`S`, `K`, `T`, `r`, `sigma`).
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// The option type is neither `call` nor `put`.
    #[error("Invalid option type: '{value}' (expected 'call' or 'put')")]
    InvalidOptionKind {
        /// The option-type text as received.
        value: String,
    },

    /// A numeric input sits outside the domain where the closed form is defined,
    /// or the computed price came out non-finite.
    #[error("{field} = {value} is out of range: {reason}")]
    Domain {
        /// Short field name, or `price` when the result itself is rejected.
        field: &'static str,
        /// The offending parsed value.
        value: f64,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },
}

impl PricingError {
    /// Short machine-friendly tag for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::Parse { .. } => "parse",
            PricingError::InvalidOptionKind { .. } => "invalid_option_kind",
            PricingError::Domain { .. } => "domain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_field_and_value() {
        let err = PricingError::Parse {
            field: "K",
            value: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains('K'));
        assert!(msg.contains("'abc'"));
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn invalid_kind_display() {
        let err = PricingError::InvalidOptionKind {
            value: "straddle".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid option type: 'straddle' (expected 'call' or 'put')"
        );
        assert_eq!(err.kind(), "invalid_option_kind");
    }

    #[test]
    fn domain_error_fields_accessible() {
        let err = PricingError::Domain {
            field: "T",
            value: 0.0,
            reason: "must be > 0",
        };
        match &err {
            PricingError::Domain {
                field,
                value,
                reason,
            } => {
                assert_eq!(*field, "T");
                assert_eq!(*value, 0.0);
                assert!(reason.contains("> 0"));
            }
            _ => panic!("wrong variant"),
        }
        assert_eq!(err.to_string(), "T = 0 is out of range: must be > 0");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingError>();
    }
}
