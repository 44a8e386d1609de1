//! Company ids and the owner values layered on top of them.
//!
//! One `u8` carries every ownership state:
//!
//! | Raw | Meaning |
//! |---|---|
//! | `0..50` | live company slot |
//! | `50` | [`OWNER_TOWN`] |
//! | `51` | [`OWNER_NONE`] |
//! | `52` | [`OWNER_WATER`] |
//! | `53` | [`OWNER_DEITY`] |
//! | `54` | [`OWNER_END`] |
//! | `253` | [`COMPANY_INACTIVE_CLIENT`] |
//! | `254` | [`COMPANY_NEW_COMPANY`] |
//! | `255` | [`COMPANY_SPECTATOR`], also the invalid id |
//!
//! The network pseudo-companies only mean something during a live session.
//! They must not be stored in simulation state or compared against the
//! ownership values; use [`Owner::kind`] and [`ClientCompany`] to keep the two
//! classes apart.
//!
//! [`ClientCompany`]: super::kind::ClientCompany

use crate::config::{COMPANY_ID_MASK, COMPANY_POOL_SIZE};
use crate::id::{BoundedId, IdTag};

use super::error::CompanyError;
use super::kind::{NetworkSlot, OwnerKind};

/// Marker for the company id domain.
#[derive(Debug)]
pub enum CompanyTag {}

impl IdTag for CompanyTag {
    type Storage = u8;
    const END: u8 = COMPANY_POOL_SIZE;
    const INVALID: u8 = 0xFF;
    const NAME: &'static str = "CompanyId";

    fn is_defined(raw: u8) -> bool {
        raw < OWNER_END.base() || raw >= COMPANY_INACTIVE_CLIENT.base()
    }
}

/// Slot of a company in the company pool.
pub type CompanyId = BoundedId<CompanyTag>;

/// Owner of a tile or object; a company or one of the ownership sentinels.
pub type Owner = CompanyId;

/// The client is joining.
pub const COMPANY_INACTIVE_CLIENT: CompanyId = CompanyId::new(253);
/// The client wants a new company.
pub const COMPANY_NEW_COMPANY: CompanyId = CompanyId::new(254);
/// The client is spectating.
pub const COMPANY_SPECTATOR: CompanyId = CompanyId::new(255);

/// First owner.
pub const OWNER_BEGIN: Owner = Owner::begin();
/// A town owns the tile, or a town is expanding.
pub const OWNER_TOWN: Owner = Owner::end();
/// The tile has no ownership.
pub const OWNER_NONE: Owner = Owner::new(COMPANY_POOL_SIZE + 1);
/// The tile or execution is done by "water".
pub const OWNER_WATER: Owner = Owner::new(COMPANY_POOL_SIZE + 2);
/// The object is owned by a superuser or goal script.
pub const OWNER_DEITY: Owner = Owner::new(COMPANY_POOL_SIZE + 3);
/// Last + 1 owner.
pub const OWNER_END: Owner = Owner::new(COMPANY_POOL_SIZE + 4);
/// An invalid owner.
pub const INVALID_OWNER: Owner = Owner::invalid();

/// Number of company slots.
pub const MAX_COMPANIES: u8 = CompanyId::end().base();

const _: () = assert!(
    <CompanyTag as IdTag>::END - 1 < <CompanyTag as IdTag>::INVALID,
    "Company slots must stay below the invalid id"
);
const _: () = assert!(
    OWNER_END.base() < COMPANY_INACTIVE_CLIENT.base(),
    "Owner special values must stay below network pseudo companies"
);
const _: () = assert!(
    MAX_COMPANIES <= COMPANY_ID_MASK,
    "Company ID mask must cover all company slots"
);
const _: () = assert!(
    MAX_COMPANIES as u32 <= u64::BITS,
    "CompanyMask storage requires 64 bits or fewer"
);

impl BoundedId<CompanyTag> {
    /// Returns true if this owner is a company in the pool.
    #[inline]
    pub const fn is_company(self) -> bool {
        self.base() < COMPANY_POOL_SIZE
    }

    /// Returns true for the ownership sentinels `TOWN..END`.
    #[inline]
    pub const fn is_owner_sentinel(self) -> bool {
        self.base() >= OWNER_TOWN.base() && self.base() < OWNER_END.base()
    }

    /// Returns true for the session-only pseudo-companies.
    #[inline]
    pub const fn is_network_pseudo(self) -> bool {
        self.base() >= COMPANY_INACTIVE_CLIENT.base()
    }

    /// Typed view of an ownership value.
    ///
    /// Network pseudo-companies and unassigned bytes are rejected, so callers
    /// can match exhaustively on the result.
    pub fn kind(self) -> Result<OwnerKind, CompanyError> {
        match self {
            company if company.is_company() => Ok(OwnerKind::Company(company)),
            owner if owner == OWNER_TOWN => Ok(OwnerKind::Town),
            owner if owner == OWNER_NONE => Ok(OwnerKind::None),
            owner if owner == OWNER_WATER => Ok(OwnerKind::Water),
            owner if owner == OWNER_DEITY => Ok(OwnerKind::Deity),
            other => match other.network_slot() {
                Some(slot) => {
                    tracing::warn!(%slot, "network pseudo-company read as owner");
                    Err(CompanyError::NetworkPseudoOwner { slot })
                }
                None => Err(CompanyError::UnassignedOwner {
                    value: other.base(),
                }),
            },
        }
    }

    /// The pseudo-company this value stands for, if any.
    pub fn network_slot(self) -> Option<NetworkSlot> {
        NetworkSlot::from_repr(self.base())
    }

    /// Checked owner constructor for persisted data.
    ///
    /// Accepts companies and the ownership sentinels below [`OWNER_END`].
    /// Network pseudo-companies are refused.
    pub fn try_owner(raw: u8) -> Result<Owner, CompanyError> {
        let owner = Owner::try_new(raw)?;
        match owner.network_slot() {
            Some(slot) => {
                tracing::debug!(raw, "rejected network pseudo-company as owner");
                Err(CompanyError::NetworkPseudoOwner { slot })
            }
            None => Ok(owner),
        }
    }

    /// Iterates every owner from [`OWNER_BEGIN`] up to, not including,
    /// [`OWNER_END`].
    pub fn owners() -> impl DoubleEndedIterator<Item = Owner> + ExactSizeIterator {
        (OWNER_BEGIN.base()..OWNER_END.base()).map(Owner::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tower_sits_directly_above_the_pool() {
        assert_eq!(OWNER_BEGIN.base(), 0);
        assert_eq!(OWNER_TOWN.base(), 50);
        assert_eq!(OWNER_NONE.base(), 51);
        assert_eq!(OWNER_WATER.base(), 52);
        assert_eq!(OWNER_DEITY.base(), 53);
        assert_eq!(OWNER_END.base(), 54);
        assert_eq!(MAX_COMPANIES, 50);
    }

    #[test]
    fn spectator_is_the_invalid_id() {
        assert_eq!(COMPANY_SPECTATOR, INVALID_OWNER);
        assert_eq!(COMPANY_SPECTATOR, CompanyId::invalid());
    }

    #[test]
    fn value_classes_are_disjoint() {
        for raw in 0..=u8::MAX {
            let owner = Owner::new(raw);
            let classes = [
                owner.is_company(),
                owner.is_owner_sentinel(),
                owner.is_network_pseudo(),
            ];
            assert!(classes.iter().filter(|&&c| c).count() <= 1, "raw {raw}");
        }
    }

    #[test]
    fn kind_covers_the_tower() {
        assert_eq!(Owner::new(7).kind(), Ok(OwnerKind::Company(Owner::new(7))));
        assert_eq!(OWNER_TOWN.kind(), Ok(OwnerKind::Town));
        assert_eq!(OWNER_NONE.kind(), Ok(OwnerKind::None));
        assert_eq!(OWNER_WATER.kind(), Ok(OwnerKind::Water));
        assert_eq!(OWNER_DEITY.kind(), Ok(OwnerKind::Deity));
    }

    #[test]
    fn kind_rejects_other_classes() {
        assert_eq!(
            OWNER_END.kind(),
            Err(CompanyError::UnassignedOwner { value: 54 })
        );
        assert_eq!(
            Owner::new(100).kind(),
            Err(CompanyError::UnassignedOwner { value: 100 })
        );
        assert_eq!(
            COMPANY_NEW_COMPANY.kind(),
            Err(CompanyError::NetworkPseudoOwner {
                slot: NetworkSlot::NewCompany
            })
        );
    }

    #[test]
    fn try_new_skips_the_unassigned_gap() {
        assert!(Owner::try_new(53).is_ok());
        assert!(Owner::try_new(54).is_err());
        assert!(Owner::try_new(252).is_err());
        assert!(Owner::try_new(253).is_ok());
    }

    #[test]
    fn try_owner_refuses_network_values() {
        assert_eq!(Owner::try_owner(52), Ok(OWNER_WATER));
        assert_eq!(
            Owner::try_owner(253),
            Err(CompanyError::NetworkPseudoOwner {
                slot: NetworkSlot::InactiveClient
            })
        );
        assert!(matches!(
            Owner::try_owner(80),
            Err(CompanyError::Id(crate::id::IdError::Undefined { value: 80, .. }))
        ));
    }

    #[test]
    fn owners_stop_before_end() {
        let owners: Vec<Owner> = Owner::owners().collect();
        assert_eq!(owners.len(), 54);
        assert_eq!(owners.last(), Some(&OWNER_DEITY));
    }
}
