//! Typed views over the flat owner encoding.
//!
//! The raw `u8` stays the storage and wire representation; these enums are
//! derived from it at the call sites that need to match exhaustively.

use super::error::CompanyError;
use super::owner::{
    COMPANY_INACTIVE_CLIENT, COMPANY_NEW_COMPANY, COMPANY_SPECTATOR, CompanyId, OWNER_DEITY,
    OWNER_NONE, OWNER_TOWN, OWNER_WATER, Owner,
};

/// Who owns a tile or object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OwnerKind {
    /// A company in the pool.
    Company(CompanyId),
    /// A town owns it, or a town is expanding.
    Town,
    /// Nobody owns it.
    None,
    /// Owned by water.
    Water,
    /// Owned by a superuser or goal script.
    Deity,
}

impl OwnerKind {
    /// Encodes back into the flat owner value.
    pub const fn to_owner(self) -> Owner {
        match self {
            Self::Company(company) => company,
            Self::Town => OWNER_TOWN,
            Self::None => OWNER_NONE,
            Self::Water => OWNER_WATER,
            Self::Deity => OWNER_DEITY,
        }
    }

    /// The owning company, if a company owns it.
    pub const fn company(self) -> Option<CompanyId> {
        match self {
            Self::Company(company) => Some(company),
            _ => None,
        }
    }
}

impl TryFrom<Owner> for OwnerKind {
    type Error = CompanyError;

    fn try_from(owner: Owner) -> Result<Self, Self::Error> {
        owner.kind()
    }
}

impl From<OwnerKind> for Owner {
    fn from(kind: OwnerKind) -> Self {
        kind.to_owner()
    }
}

/// Company pseudo-values that only exist during a network session.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum NetworkSlot {
    /// The client is joining.
    InactiveClient = 253,
    /// The client wants a new company.
    NewCompany = 254,
    /// The client is spectating.
    Spectator = 255,
}

impl NetworkSlot {
    /// Flat company value of this pseudo-company.
    pub const fn to_company(self) -> CompanyId {
        match self {
            Self::InactiveClient => COMPANY_INACTIVE_CLIENT,
            Self::NewCompany => COMPANY_NEW_COMPANY,
            Self::Spectator => COMPANY_SPECTATOR,
        }
    }
}

/// Company a network client plays as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientCompany {
    /// The client controls a company.
    Company(CompanyId),
    /// The client is in one of the session-only states.
    Network(NetworkSlot),
}

impl ClientCompany {
    /// Decodes a flat company value received from a session peer.
    ///
    /// Ownership sentinels and unassigned values are rejected.
    pub fn decode(company: CompanyId) -> Result<Self, CompanyError> {
        if company.is_company() {
            return Ok(Self::Company(company));
        }
        match company.network_slot() {
            Some(slot) => Ok(Self::Network(slot)),
            None => {
                tracing::debug!(value = company.base(), "rejected client company");
                Err(CompanyError::NotAClientCompany {
                    value: company.base(),
                })
            }
        }
    }

    /// Encodes into the flat company value.
    pub const fn encode(self) -> CompanyId {
        match self {
            Self::Company(company) => company,
            Self::Network(slot) => slot.to_company(),
        }
    }

    /// Returns true if the client is only watching.
    pub const fn is_spectator(self) -> bool {
        matches!(self, Self::Network(NetworkSlot::Spectator))
    }
}

impl TryFrom<CompanyId> for ClientCompany {
    type Error = CompanyError;

    fn try_from(company: CompanyId) -> Result<Self, Self::Error> {
        Self::decode(company)
    }
}
