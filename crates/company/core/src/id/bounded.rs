//! Strongly-typed pool identifiers with a bounded slot range.
//!
//! A [`BoundedId`] wraps a small unsigned integer. Values in `[begin, end)`
//! address live slots of a fixed-capacity pool, [`BoundedId::invalid`] means
//! "no id", and a domain may reserve further values in between (see
//! [`IdTag::is_defined`]). The tag parameter only exists at the type level so
//! that ids of different pools cannot be mixed even when they share a storage
//! integer.
//!
//! Each tag asserts its own layout (`END - 1 < INVALID`, storage width) with a
//! `const _: () = assert!(..)` next to its definition.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use super::error::IdError;

/// Unsigned integer usable as the raw storage of a [`BoundedId`].
pub trait IdStorage:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Raw value of the first slot.
    const ZERO: Self;

    /// Width of the storage in bits.
    const BITS: u32;

    /// Widens the raw value to an index.
    fn to_index(self) -> usize;

    /// Narrows an index back to storage, `None` if it does not fit.
    fn from_index(index: usize) -> Option<Self>;
}

macro_rules! impl_id_storage {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IdStorage for $ty {
                const ZERO: Self = 0;
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn to_index(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_index(index: usize) -> Option<Self> {
                    <$ty>::try_from(index).ok()
                }
            }
        )*
    };
}

impl_id_storage!(u8, u16, u32);

/// Type-level description of one id domain.
///
/// Implemented on uninhabited marker enums; the tag never exists at runtime.
pub trait IdTag: 'static {
    /// Raw storage integer.
    type Storage: IdStorage;

    /// Pool capacity; the first raw value past the last slot.
    const END: Self::Storage;

    /// Sentinel meaning "no id".
    const INVALID: Self::Storage;

    /// Domain name used in diagnostics.
    const NAME: &'static str;

    /// Returns true if `raw` carries a meaning in this domain.
    ///
    /// Defaults to live slots plus the invalid sentinel. Domains that reserve
    /// extra values override this so the checked constructor accepts them.
    fn is_defined(raw: Self::Storage) -> bool {
        raw < Self::END || raw == Self::INVALID
    }
}

/// Identifier of a slot in a fixed-capacity pool described by `T`.
pub struct BoundedId<T: IdTag> {
    value: T::Storage,
    _tag: PhantomData<fn() -> T>,
}

impl<T: IdTag> BoundedId<T> {
    /// Wraps a raw value without any range check.
    ///
    /// This is the allocation fast path; values coming from save data or the
    /// network must go through [`Self::try_new`] instead.
    #[inline]
    pub const fn new(value: T::Storage) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Smallest valid id.
    #[inline]
    pub const fn begin() -> Self {
        Self::new(<T::Storage as IdStorage>::ZERO)
    }

    /// First id past the last valid slot.
    #[inline]
    pub const fn end() -> Self {
        Self::new(T::END)
    }

    /// The "no id" sentinel.
    #[inline]
    pub const fn invalid() -> Self {
        Self::new(T::INVALID)
    }

    /// Raw storage value, used for indexing and serialization.
    #[inline]
    pub const fn base(self) -> T::Storage {
        self.value
    }

    /// Raw value widened to `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.value.to_index()
    }

    /// Returns true if this id addresses a live pool slot.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.value < T::END
    }

    /// Returns true if this id is the invalid sentinel.
    #[inline]
    pub fn is_invalid(self) -> bool {
        self.value == T::INVALID
    }

    /// Checked constructor for untrusted input.
    ///
    /// Accepts every value the domain defines, including reserved values.
    pub fn try_new(value: T::Storage) -> Result<Self, IdError> {
        if T::is_defined(value) {
            Ok(Self::new(value))
        } else {
            tracing::debug!(tag = T::NAME, value = value.to_index(), "rejected undefined id");
            Err(IdError::Undefined {
                tag: T::NAME,
                value: value.to_index(),
            })
        }
    }

    /// Checked constructor that only accepts live pool slots.
    pub fn try_slot(value: T::Storage) -> Result<Self, IdError> {
        if value < T::END {
            Ok(Self::new(value))
        } else {
            tracing::debug!(tag = T::NAME, value = value.to_index(), "rejected non-slot id");
            Err(IdError::OutOfRange {
                tag: T::NAME,
                value: value.to_index(),
                end: T::END.to_index(),
            })
        }
    }

    /// Checked constructor from a slot index.
    pub fn from_index(index: usize) -> Result<Self, IdError> {
        match T::Storage::from_index(index) {
            Some(value) => Self::try_slot(value),
            None => Err(IdError::OutOfRange {
                tag: T::NAME,
                value: index,
                end: T::END.to_index(),
            }),
        }
    }

    /// Iterates every live slot in ascending order.
    pub fn slots() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..T::END.to_index()).map(|index| {
            // Every index below END fits the storage because END itself does.
            Self::new(T::Storage::from_index(index).unwrap_or(T::INVALID))
        })
    }
}

// Manual impls: derives would put bounds on the tag, which is uninhabited.

impl<T: IdTag> Clone for BoundedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: IdTag> Copy for BoundedId<T> {}

impl<T: IdTag> PartialEq for BoundedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: IdTag> Eq for BoundedId<T> {}

impl<T: IdTag> PartialOrd for BoundedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: IdTag> Ord for BoundedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: IdTag> Hash for BoundedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: IdTag> Default for BoundedId<T> {
    fn default() -> Self {
        Self::invalid()
    }
}

impl<T: IdTag> fmt::Debug for BoundedId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(T::NAME).field(&self.value).finish()
    }
}

impl<T: IdTag> fmt::Display for BoundedId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.value)
    }
}

#[cfg(feature = "serde")]
impl<T: IdTag> serde::Serialize for BoundedId<T>
where
    T::Storage: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: IdTag> serde::Deserialize<'de> for BoundedId<T>
where
    T::Storage: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <T::Storage as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_new(value).map_err(serde::de::Error::custom)
    }
}
