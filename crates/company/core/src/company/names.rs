//! Length-capped company and president names.
//!
//! The limits count characters and include a terminator, so a name holds at
//! most `MAX - 1` visible characters.

use core::fmt;
use core::ops::Deref;

use arrayvec::ArrayString;

use crate::config::{MAX_LENGTH_COMPANY_NAME_CHARS, MAX_LENGTH_PRESIDENT_NAME_CHARS};

use super::error::CompanyError;

/// Byte capacity large enough for any name allowed by the limits.
const NAME_BUFFER_BYTES: usize = 128;

/// Name of at most `MAX_CHARS - 1` characters, stored inline.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedName<const MAX_CHARS: usize> {
    text: ArrayString<NAME_BUFFER_BYTES>,
}

/// Company name.
pub type CompanyName = BoundedName<MAX_LENGTH_COMPANY_NAME_CHARS>;

/// President (manager) name.
pub type PresidentName = BoundedName<MAX_LENGTH_PRESIDENT_NAME_CHARS>;

impl<const MAX_CHARS: usize> BoundedName<MAX_CHARS> {
    const FITS_BUFFER: () = assert!(
        MAX_CHARS > 0 && (MAX_CHARS - 1) * 4 <= NAME_BUFFER_BYTES,
        "name limit does not fit the inline buffer"
    );

    /// Maximum number of visible characters.
    pub const MAX_VISIBLE_CHARS: usize = MAX_CHARS - 1;

    /// Validates and copies `text`.
    pub fn try_new(text: &str) -> Result<Self, CompanyError> {
        let () = Self::FITS_BUFFER;
        let actual = text.chars().count();
        if actual > Self::MAX_VISIBLE_CHARS {
            tracing::debug!(actual, max = Self::MAX_VISIBLE_CHARS, "rejected name");
            return Err(CompanyError::NameTooLong {
                max: Self::MAX_VISIBLE_CHARS,
                actual,
            });
        }
        let text = ArrayString::from(text).map_err(|_| CompanyError::NameTooLong {
            max: Self::MAX_VISIBLE_CHARS,
            actual,
        })?;
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<const MAX_CHARS: usize> Deref for BoundedName<MAX_CHARS> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const MAX_CHARS: usize> AsRef<str> for BoundedName<MAX_CHARS> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const MAX_CHARS: usize> TryFrom<&str> for BoundedName<MAX_CHARS> {
    type Error = CompanyError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::try_new(text)
    }
}

impl<const MAX_CHARS: usize> fmt::Debug for BoundedName<MAX_CHARS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const MAX_CHARS: usize> fmt::Display for BoundedName<MAX_CHARS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<const MAX_CHARS: usize> serde::Serialize for BoundedName<MAX_CHARS> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de, const MAX_CHARS: usize> serde::Deserialize<'de> for BoundedName<MAX_CHARS> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_new(&text).map_err(serde::de::Error::custom)
    }
}
