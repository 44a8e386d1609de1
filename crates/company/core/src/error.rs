//! Common error infrastructure for company-core.
//!
//! The fast paths of this crate (unchecked id construction, bit mutation) never
//! fail. Errors only surface from the checked constructors used on untrusted
//! input (save data, network payloads, configuration). Domain-specific errors
//! (`IdError`, `CompanyError`) live next to the types they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each layer has its own error type with specific variants
//! - **Rich Context**: Errors carry the offending raw value and the valid bound
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Untrusted input was rejected; the caller should drop or
///   report the value without retrying
/// - **Internal**: Two value classes were conflated inside trusted code, which
///   indicates a bug in the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: owner byte in the unassigned gap, mask with stray high bits
    Validation,

    /// Internal error - a value of the wrong class reached a typed view.
    ///
    /// Examples: network pseudo-company asked for its ownership kind
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all company-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who is at fault, not on impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
