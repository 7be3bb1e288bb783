//! Error type shared by every fallible scalar operation.

use std::fmt::Display;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type ScalarResult<T> = Result<T, ScalarError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// The operation has no meaning for the scalar's kind.
    #[error("{op} is not supported for {kind} scalars")]
    UnsupportedOperation {
        op: &'static str,
        kind: &'static str,
    },

    /// The value's magnitude does not fit in the target type.
    #[error("value cannot be converted to type {to} without overflow: {value} (from {from})")]
    ConversionOverflow {
        value: String,
        from: &'static str,
        to: &'static str,
    },

    /// The conversion would drop a fractional or imaginary part.
    #[error("value cannot be converted to type {to} without losing information: {value} (from {from})")]
    ConversionLoss {
        value: String,
        from: &'static str,
        to: &'static str,
    },

    /// A raw scalar type code or name matched none of the known types.
    #[error("unknown scalar type: {0}")]
    UnknownKind(String),
}

impl ScalarError {
    pub(crate) fn overflow(value: impl Display, from: &'static str, to: &'static str) -> Self {
        ScalarError::ConversionOverflow {
            value: value.to_string(),
            from,
            to,
        }
    }

    pub(crate) fn loss(value: impl Display, from: &'static str, to: &'static str) -> Self {
        ScalarError::ConversionLoss {
            value: value.to_string(),
            from,
            to,
        }
    }

    /// True for either flavour of failed narrowing conversion.
    pub fn is_conversion(&self) -> bool {
        matches!(
            self,
            ScalarError::ConversionOverflow { .. } | ScalarError::ConversionLoss { .. }
        )
    }
}
