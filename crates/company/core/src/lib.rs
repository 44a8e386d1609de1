//! Company identifiers and company sets shared across the simulation.
//!
//! `company-core` defines the in-memory vocabulary other layers speak when
//! they talk about companies: the bounded [`CompanyId`] with its owner
//! sentinels, the [`CompanyMask`] set type, and the command codes. The generic
//! building blocks ([`id::BoundedId`], [`bitset::BaseBitSet`]) are reusable
//! for other pools.
pub mod bitset;
pub mod company;
pub mod config;
pub mod error;
pub mod id;

pub use bitset::{BaseBitSet, BitSetIter, BitStorage};
pub use company::{
    COMPANY_INACTIVE_CLIENT, COMPANY_MASK_ALL, COMPANY_NEW_COMPANY, COMPANY_SPECTATOR,
    ClientCompany, CompanyAllowListCtrlAction, CompanyCtrlAction, CompanyError, CompanyId,
    CompanyManagerFace, CompanyMask, CompanyName, CompanyRemoveReason, CompanyTag, INVALID_OWNER,
    MAX_COMPANIES, NetworkSlot, OWNER_BEGIN, OWNER_DEITY, OWNER_END, OWNER_NONE, OWNER_TOWN,
    OWNER_WATER, Owner, OwnerKind, PresidentName,
};
pub use config::{
    COMPANY_ID_BITS, COMPANY_ID_MASK, COMPANY_POOL_SIZE, CompanyConfig, LEGACY_MAX_COMPANIES,
    MAX_COMPETITORS_INTERVAL, MAX_HISTORY_QUARTERS, MAX_LENGTH_COMPANY_NAME_CHARS,
    MAX_LENGTH_PRESIDENT_NAME_CHARS, MIN_COMPETITORS_INTERVAL,
};
pub use error::{CoreError, ErrorSeverity};
pub use id::{BoundedId, IdError, IdStorage, IdTag};
