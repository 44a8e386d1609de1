//! Compact set of companies.

use core::fmt;

use crate::bitset::{BaseBitSet, impl_bitset_ops};

use super::owner::{CompanyId, MAX_COMPANIES};

/// Every company slot.
pub const COMPANY_MASK_ALL: u64 = (1u64 << MAX_COMPANIES) - 1;

/// Set of companies, bit `i` standing for company slot `i`.
///
/// The raw `u64` is the canonical representation and can be stored as is.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompanyMask(u64);

impl CompanyMask {
    /// No companies.
    pub const EMPTY: Self = Self(0);

    /// Every company slot.
    pub const ALL: Self = Self(COMPANY_MASK_ALL);

    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Raw bits.
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Mask holding exactly one company.
    pub fn of(company: CompanyId) -> Self {
        Self::EMPTY.with(company)
    }
}

impl BaseBitSet for CompanyMask {
    type Value = CompanyId;
    type Storage = u64;
    const MASK: u64 = COMPANY_MASK_ALL;

    #[inline]
    fn decay_value(value: CompanyId) -> usize {
        value.index()
    }

    #[inline]
    fn value_at(index: usize) -> CompanyId {
        // Set bits never exceed MAX_COMPANIES, which fits in a u8.
        CompanyId::new(index as u8)
    }

    #[inline]
    fn from_bits_truncate(bits: u64) -> Self {
        Self(bits & COMPANY_MASK_ALL)
    }

    #[inline]
    fn bits(&self) -> u64 {
        self.0
    }

    #[inline]
    fn store_bits(&mut self, bits: u64) {
        self.0 = bits & COMPANY_MASK_ALL;
    }
}

impl_bitset_ops!(CompanyMask);

impl fmt::Debug for CompanyMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompanyMask")?;
        f.debug_set()
            .entries(self.iter().map(|company| company.base()))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CompanyMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CompanyMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = <u64 as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_bits(bits).map_err(serde::de::Error::custom)
    }
}
