//! Errors raised by the checked id and bit-index constructors.

use crate::error::{CoreError, ErrorSeverity};

/// Errors produced when a raw integer does not fit a typed id domain.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// Value is not a live pool slot.
    #[error("{tag} value {value} is not a pool slot (end: {end})")]
    OutOfRange {
        /// Name of the id domain.
        tag: &'static str,
        /// Offending raw value.
        value: usize,
        /// Exclusive upper bound of the slot range.
        end: usize,
    },

    /// Value is neither a slot nor one of the domain's reserved values.
    #[error("{tag} value {value} is not defined")]
    Undefined {
        /// Name of the id domain.
        tag: &'static str,
        /// Offending raw value.
        value: usize,
    },

    /// Bit index lies outside the mask's valid bits.
    #[error("bit index {index} is outside the mask")]
    BitOutOfRange {
        /// Decayed bit index.
        index: usize,
    },

    /// Raw mask contains bits outside the valid range.
    #[error("mask {bits:#x} has bits outside {mask:#x}")]
    StrayBits {
        /// Raw mask bits.
        bits: u64,
        /// All-valid mask.
        mask: u64,
    },

    /// Raw discriminant does not name a variant of a closed enumeration.
    #[error("{kind} has no variant with discriminant {value}")]
    UnknownDiscriminant {
        /// Enumeration name.
        kind: &'static str,
        /// Offending discriminant.
        value: u8,
    },
}

impl CoreError for IdError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use IdError::*;
        match self {
            OutOfRange { .. } => "ID_OUT_OF_RANGE",
            Undefined { .. } => "ID_UNDEFINED",
            BitOutOfRange { .. } => "ID_BIT_OUT_OF_RANGE",
            StrayBits { .. } => "ID_STRAY_BITS",
            UnknownDiscriminant { .. } => "ID_UNKNOWN_DISCRIMINANT",
        }
    }
}
