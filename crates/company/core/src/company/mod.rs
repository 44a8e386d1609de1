//! Company vocabulary: ids, owner sentinels, masks and command codes.
//!
//! Everything here is a plain value type. Allocation of company slots,
//! company gameplay and the network protocol live in other layers and only
//! consume these types.
pub mod actions;
pub mod error;
pub mod face;
pub mod kind;
pub mod mask;
pub mod names;
pub mod owner;

pub use actions::{CompanyAllowListCtrlAction, CompanyCtrlAction, CompanyRemoveReason};
pub use error::CompanyError;
pub use face::CompanyManagerFace;
pub use kind::{ClientCompany, NetworkSlot, OwnerKind};
pub use mask::{COMPANY_MASK_ALL, CompanyMask};
pub use names::{BoundedName, CompanyName, PresidentName};
pub use owner::{
    COMPANY_INACTIVE_CLIENT, COMPANY_NEW_COMPANY, COMPANY_SPECTATOR, CompanyId, CompanyTag,
    INVALID_OWNER, MAX_COMPANIES, OWNER_BEGIN, OWNER_DEITY, OWNER_END, OWNER_NONE, OWNER_TOWN,
    OWNER_WATER, Owner,
};
