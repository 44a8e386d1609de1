//! Errors raised by the company vocabulary views and bounded values.

use crate::error::{CoreError, ErrorSeverity};
use crate::id::IdError;

use super::kind::NetworkSlot;

/// Errors produced when a company value is read through the wrong view or
/// exceeds a company limit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompanyError {
    /// Owner byte sits in the gap between the ownership tower and the network
    /// pseudo-companies.
    #[error("owner value {value} is not assigned")]
    UnassignedOwner {
        /// Offending raw value.
        value: u8,
    },

    /// A network pseudo-company was read as an owner.
    #[error("network pseudo-company {slot} used as an owner")]
    NetworkPseudoOwner {
        /// The pseudo-company that leaked.
        slot: NetworkSlot,
    },

    /// An ownership sentinel was read as a client's company.
    #[error("owner value {value} is not a client company")]
    NotAClientCompany {
        /// Offending raw value.
        value: u8,
    },

    /// Name is longer than the company name limits allow.
    #[error("name has {actual} characters (max: {max})")]
    NameTooLong {
        /// Maximum number of visible characters.
        max: usize,
        /// Characters in the rejected name.
        actual: usize,
    },

    /// Competitor interval outside the configurable range.
    #[error("competitors interval {value} outside {min}..={max}")]
    CompetitorsIntervalOutOfRange {
        /// Rejected interval in minutes.
        value: u32,
        /// Minimum interval.
        min: u32,
        /// Maximum interval.
        max: u32,
    },

    /// Raw id rejected by the id layer.
    #[error(transparent)]
    Id(#[from] IdError),
}

impl CoreError for CompanyError {
    fn severity(&self) -> ErrorSeverity {
        use CompanyError::*;
        match self {
            // Leaking a session-only value into ownership checks is a caller bug
            NetworkPseudoOwner { .. } => ErrorSeverity::Internal,

            UnassignedOwner { .. }
            | NotAClientCompany { .. }
            | NameTooLong { .. }
            | CompetitorsIntervalOutOfRange { .. } => ErrorSeverity::Validation,

            Id(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use CompanyError::*;
        match self {
            UnassignedOwner { .. } => "COMPANY_UNASSIGNED_OWNER",
            NetworkPseudoOwner { .. } => "COMPANY_NETWORK_PSEUDO_OWNER",
            NotAClientCompany { .. } => "COMPANY_NOT_A_CLIENT_COMPANY",
            NameTooLong { .. } => "COMPANY_NAME_TOO_LONG",
            CompetitorsIntervalOutOfRange { .. } => "COMPANY_COMPETITORS_INTERVAL_OUT_OF_RANGE",
            Id(error) => error.error_code(),
        }
    }
}
