//! Reason and action codes carried by company commands.
//!
//! These are vocabulary only; command processing interprets them. Every enum
//! is closed, ordered by discriminant, and exposes `END` as the exclusive
//! upper bound of its raw codes.

use strum::EnumCount;

use crate::id::IdError;

macro_rules! impl_raw_code {
    ($kind:ident) => {
        impl $kind {
            /// Exclusive upper bound of the raw codes.
            pub const END: u8 = Self::COUNT as u8;

            /// Raw code of this variant.
            pub const fn code(self) -> u8 {
                self as u8
            }
        }

        impl From<$kind> for u8 {
            fn from(value: $kind) -> Self {
                value.code()
            }
        }

        impl TryFrom<u8> for $kind {
            type Error = IdError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::from_repr(value).ok_or_else(|| {
                    tracing::debug!(kind = stringify!($kind), value, "unknown raw code");
                    IdError::UnknownDiscriminant {
                        kind: stringify!($kind),
                        value,
                    }
                })
            }
        }
    };
}

/// The reason why the company was removed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum CompanyRemoveReason {
    /// The company is manually removed.
    #[default]
    Manual,
    /// The company is removed due to autoclean.
    Autoclean,
    /// The company went belly-up.
    Bankrupt,
}

impl CompanyRemoveReason {
    /// Placeholder reason for actions that don't need one.
    pub const NONE: Self = Self::Manual;
}

impl_raw_code!(CompanyRemoveReason);

/// The action to perform with the company control command.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum CompanyCtrlAction {
    /// Create a new company.
    New,
    /// Create a new AI company.
    NewAi,
    /// Delete a company.
    Delete,
}

impl_raw_code!(CompanyCtrlAction);

/// The action to perform with the company allow-list control command.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum CompanyAllowListCtrlAction {
    /// Add a public key.
    Add,
    /// Remove a public key.
    Remove,
}

impl_raw_code!(CompanyAllowListCtrlAction);
