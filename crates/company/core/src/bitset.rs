//! Fixed-width bitmasks over typed ids.
//!
//! [`BaseBitSet`] carries all the bit manipulation once. A concrete mask type
//! only states its element type, its storage integer, the all-valid mask and
//! how an element decays to a bit index. Operators come from the
//! crate-internal `impl_bitset_ops!` macro.
//!
//! Every write path goes through [`BaseBitSet::from_bits_truncate`] or
//! [`BaseBitSet::store_bits`], both of which drop bits outside
//! [`BaseBitSet::MASK`], so no mask reachable through the trait holds stray
//! bits.

use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use crate::id::IdError;

/// Unsigned integer usable as bitmask storage (at most 64 bits).
pub trait BitStorage:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// No bits set.
    const EMPTY: Self;

    /// Width of the storage in bits.
    const BITS: u32;

    /// Single bit at `index`; [`Self::EMPTY`] when `index` exceeds the width.
    fn bit(index: usize) -> Self;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Index of the lowest set bit; [`Self::BITS`] when no bit is set.
    fn trailing_zeros(self) -> u32;

    /// Widens the raw bits for diagnostics and serialization.
    fn to_u64(self) -> u64;
}

macro_rules! impl_bit_storage {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BitStorage for $ty {
                const EMPTY: Self = 0;
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn bit(index: usize) -> Self {
                    u32::try_from(index)
                        .ok()
                        .and_then(|shift| (1 as $ty).checked_shl(shift))
                        .unwrap_or(0)
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$ty>::trailing_zeros(self)
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    u64::from(self)
                }
            }
        )*
    };
}

impl_bit_storage!(u8, u16, u32, u64);

/// Fixed-capacity set of ids stored as a single integer.
///
/// Implementors provide the element-to-bit mapping through
/// [`Self::decay_value`] and its inverse [`Self::value_at`].
pub trait BaseBitSet: Copy + Sized {
    /// Element type.
    type Value: Copy;

    /// Storage integer.
    type Storage: BitStorage;

    /// All valid bits; every reachable mask is a subset of it.
    const MASK: Self::Storage;

    /// Maps an element to its bit position.
    fn decay_value(value: Self::Value) -> usize;

    /// Maps a bit position back to its element. Only called for set bits.
    fn value_at(index: usize) -> Self::Value;

    /// Wraps raw bits, dropping every bit outside [`Self::MASK`].
    ///
    /// Implementations must apply the mask themselves.
    fn from_bits_truncate(bits: Self::Storage) -> Self;

    /// Raw bits.
    fn bits(&self) -> Self::Storage;

    /// Replaces the raw bits, dropping every bit outside [`Self::MASK`].
    ///
    /// Implementations must apply the mask themselves.
    fn store_bits(&mut self, bits: Self::Storage);

    fn empty() -> Self {
        Self::from_bits_truncate(Self::Storage::EMPTY)
    }

    /// Mask with every valid bit set.
    fn full() -> Self {
        Self::from_bits_truncate(Self::MASK)
    }

    /// Wraps raw bits, rejecting any bit outside [`Self::MASK`].
    fn from_bits(bits: Self::Storage) -> Result<Self, IdError> {
        if bits & !Self::MASK == Self::Storage::EMPTY {
            Ok(Self::from_bits_truncate(bits))
        } else {
            tracing::debug!(bits = bits.to_u64(), "rejected mask with stray bits");
            Err(IdError::StrayBits {
                bits: bits.to_u64(),
                mask: Self::MASK.to_u64(),
            })
        }
    }

    /// Returns true if `value` decays to a bit inside the mask.
    fn is_valid_value(value: Self::Value) -> bool {
        Self::Storage::bit(Self::decay_value(value)) & Self::MASK != Self::Storage::EMPTY
    }

    /// Adds `value`. Values outside the mask are a caller bug and are ignored.
    fn set(&mut self, value: Self::Value) -> &mut Self {
        debug_assert!(Self::is_valid_value(value), "bit index outside the mask");
        let bit = Self::Storage::bit(Self::decay_value(value)) & Self::MASK;
        self.store_bits(self.bits() | bit);
        self
    }

    /// Adds `value`, reporting values outside the mask.
    fn try_set(&mut self, value: Self::Value) -> Result<&mut Self, IdError> {
        if Self::is_valid_value(value) {
            Ok(self.set(value))
        } else {
            Err(IdError::BitOutOfRange {
                index: Self::decay_value(value),
            })
        }
    }

    /// Removes `value`.
    fn reset(&mut self, value: Self::Value) -> &mut Self {
        let bit = Self::Storage::bit(Self::decay_value(value));
        self.store_bits(self.bits() & !bit);
        self
    }

    /// Toggles `value`. Values outside the mask are ignored.
    fn flip(&mut self, value: Self::Value) -> &mut Self {
        debug_assert!(Self::is_valid_value(value), "bit index outside the mask");
        let bit = Self::Storage::bit(Self::decay_value(value)) & Self::MASK;
        self.store_bits(self.bits() ^ bit);
        self
    }

    /// Membership test; defined for every value.
    fn test(&self, value: Self::Value) -> bool {
        self.bits() & Self::Storage::bit(Self::decay_value(value)) != Self::Storage::EMPTY
    }

    /// Returns a copy with `value` added.
    #[must_use]
    fn with(mut self, value: Self::Value) -> Self {
        self.set(value);
        self
    }

    /// Returns a copy with `value` removed.
    #[must_use]
    fn without(mut self, value: Self::Value) -> Self {
        self.reset(value);
        self
    }

    fn any(&self) -> bool {
        self.bits() != Self::Storage::EMPTY
    }

    fn none(&self) -> bool {
        !self.any()
    }

    /// Returns true if every valid bit is set.
    fn is_full(&self) -> bool {
        self.bits() & Self::MASK == Self::MASK
    }

    /// Number of members.
    fn count(&self) -> u32 {
        self.bits().count_ones()
    }

    #[must_use]
    fn union(self, other: Self) -> Self {
        Self::from_bits_truncate(self.bits() | other.bits())
    }

    #[must_use]
    fn intersection(self, other: Self) -> Self {
        Self::from_bits_truncate(self.bits() & other.bits())
    }

    #[must_use]
    fn difference(self, other: Self) -> Self {
        Self::from_bits_truncate(self.bits() & !other.bits())
    }

    /// Members of exactly one of the two masks.
    #[must_use]
    fn symmetric_difference(self, other: Self) -> Self {
        Self::from_bits_truncate(self.bits() ^ other.bits())
    }

    /// Valid bits not in this mask.
    #[must_use]
    fn complement(self) -> Self {
        Self::from_bits_truncate(!self.bits() & Self::MASK)
    }

    fn is_subset_of(&self, other: &Self) -> bool {
        self.bits() & !other.bits() == Self::Storage::EMPTY
    }

    fn intersects(&self, other: &Self) -> bool {
        self.bits() & other.bits() != Self::Storage::EMPTY
    }

    /// Lowest member, if any.
    fn first(&self) -> Option<Self::Value> {
        self.iter().next()
    }

    /// Members in ascending bit order.
    fn iter(&self) -> BitSetIter<Self> {
        BitSetIter { bits: self.bits() }
    }
}

/// Iterator over the members of a [`BaseBitSet`], lowest bit first.
#[derive(Clone, Debug)]
pub struct BitSetIter<B: BaseBitSet> {
    bits: B::Storage,
}

impl<B: BaseBitSet> Iterator for BitSetIter<B> {
    type Item = B::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == B::Storage::EMPTY {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits = self.bits & !B::Storage::bit(index);
        Some(B::value_at(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl<B: BaseBitSet> ExactSizeIterator for BitSetIter<B> {}

impl<B: BaseBitSet> FusedIterator for BitSetIter<B> {}

/// Implements set operators and iterator plumbing for a [`BaseBitSet`].
///
/// `|` union, `&` intersection, `-` difference, `^` symmetric difference,
/// plus `FromIterator`, `Extend` and `IntoIterator`.
macro_rules! impl_bitset_ops {
    ($mask:ty) => {
        impl ::core::ops::BitOr for $mask {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                $crate::bitset::BaseBitSet::union(self, rhs)
            }
        }

        impl ::core::ops::BitOrAssign for $mask {
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }

        impl ::core::ops::BitAnd for $mask {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                $crate::bitset::BaseBitSet::intersection(self, rhs)
            }
        }

        impl ::core::ops::BitAndAssign for $mask {
            fn bitand_assign(&mut self, rhs: Self) {
                *self = *self & rhs;
            }
        }

        impl ::core::ops::Sub for $mask {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                $crate::bitset::BaseBitSet::difference(self, rhs)
            }
        }

        impl ::core::ops::SubAssign for $mask {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl ::core::ops::BitXor for $mask {
            type Output = Self;

            fn bitxor(self, rhs: Self) -> Self {
                $crate::bitset::BaseBitSet::symmetric_difference(self, rhs)
            }
        }

        impl ::core::iter::FromIterator<<$mask as $crate::bitset::BaseBitSet>::Value> for $mask {
            fn from_iter<I>(iter: I) -> Self
            where
                I: IntoIterator<Item = <$mask as $crate::bitset::BaseBitSet>::Value>,
            {
                let mut mask = <$mask as $crate::bitset::BaseBitSet>::empty();
                ::core::iter::Extend::extend(&mut mask, iter);
                mask
            }
        }

        impl ::core::iter::Extend<<$mask as $crate::bitset::BaseBitSet>::Value> for $mask {
            fn extend<I>(&mut self, iter: I)
            where
                I: IntoIterator<Item = <$mask as $crate::bitset::BaseBitSet>::Value>,
            {
                for value in iter {
                    $crate::bitset::BaseBitSet::set(self, value);
                }
            }
        }

        impl ::core::iter::IntoIterator for $mask {
            type Item = <$mask as $crate::bitset::BaseBitSet>::Value;
            type IntoIter = $crate::bitset::BitSetIter<$mask>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::bitset::BaseBitSet::iter(&self)
            }
        }
    };
}

pub(crate) use impl_bitset_ops;

#[cfg(test)]
mod tests {
    use super::*;

    /// Bitset over plain indices with a non-contiguous mask.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct LaneMask(u8);

    impl BaseBitSet for LaneMask {
        type Value = usize;
        type Storage = u8;
        const MASK: u8 = 0b0101_1111;

        fn decay_value(value: usize) -> usize {
            value
        }

        fn value_at(index: usize) -> usize {
            index
        }

        fn from_bits_truncate(bits: u8) -> Self {
            Self(bits & Self::MASK)
        }

        fn bits(&self) -> u8 {
            self.0
        }

        fn store_bits(&mut self, bits: u8) {
            self.0 = bits & Self::MASK;
        }
    }

    impl_bitset_ops!(LaneMask);

    #[test]
    fn bit_beyond_storage_width_is_empty() {
        assert_eq!(<u8 as BitStorage>::bit(7), 0x80);
        assert_eq!(<u8 as BitStorage>::bit(8), 0);
        assert_eq!(<u64 as BitStorage>::bit(63), 1 << 63);
        assert_eq!(<u64 as BitStorage>::bit(usize::MAX), 0);
    }

    #[test]
    fn set_test_reset() {
        let mut lanes = LaneMask::empty();
        lanes.set(0).set(3);
        assert!(lanes.test(0));
        assert!(lanes.test(3));
        assert!(!lanes.test(1));
        lanes.reset(0);
        assert!(!lanes.test(0));
        assert_eq!(lanes.count(), 1);
    }

    #[test]
    fn try_set_rejects_bits_outside_the_mask() {
        let mut lanes = LaneMask::empty();
        assert_eq!(
            lanes.try_set(5).map(|m| *m),
            Err(IdError::BitOutOfRange { index: 5 })
        );
        assert_eq!(
            lanes.try_set(9).map(|m| *m),
            Err(IdError::BitOutOfRange { index: 9 })
        );
        assert!(lanes.try_set(6).is_ok());
        assert_eq!(lanes.bits(), 0b0100_0000);
    }

    #[test]
    fn from_bits_checks_the_mask() {
        assert_eq!(LaneMask::from_bits(0b0000_0011), Ok(LaneMask(0b11)));
        assert_eq!(
            LaneMask::from_bits(0b1000_0000),
            Err(IdError::StrayBits {
                bits: 0x80,
                mask: 0x5f
            })
        );
    }

    #[test]
    fn raw_writes_drop_bits_outside_the_mask() {
        assert_eq!(LaneMask::from_bits_truncate(u8::MAX), LaneMask::full());
        let mut lanes = LaneMask::empty();
        lanes.store_bits(0b1010_0001);
        assert_eq!(lanes.bits(), 0b0000_0001);
        assert!(lanes.is_subset_of(&LaneMask::full()));
    }

    #[test]
    fn complement_stays_within_mask() {
        let lanes: LaneMask = [0, 1].into_iter().collect();
        assert_eq!(lanes.complement().bits(), 0b0101_1100);
        assert!(LaneMask::full().is_full());
        assert!(LaneMask::full().complement().none());
    }

    #[test]
    fn operators_match_named_methods() {
        let a: LaneMask = [0, 1, 2].into_iter().collect();
        let b: LaneMask = [2, 3].into_iter().collect();
        assert_eq!(a | b, a.union(b));
        assert_eq!(a & b, LaneMask(0b0100));
        assert_eq!(a - b, LaneMask(0b0011));
        assert_eq!(a ^ b, LaneMask(0b1011));
        assert!(LaneMask(0b0100).is_subset_of(&a));
        assert!(a.intersects(&b));
    }

    #[test]
    fn iterates_lowest_bit_first() {
        let lanes: LaneMask = [6, 1, 4].into_iter().collect();
        let members: Vec<usize> = lanes.into_iter().collect();
        assert_eq!(members, vec![1, 4, 6]);
        assert_eq!(lanes.iter().len(), 3);
        assert_eq!(lanes.first(), Some(1));
        assert_eq!(LaneMask::empty().first(), None);
    }
}
