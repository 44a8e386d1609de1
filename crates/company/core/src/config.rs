//! Company limits and tunable parameters.

use crate::company::CompanyError;

/// Amount of bits used to encode company identifiers inside the game state.
pub const COMPANY_ID_BITS: u8 = 6;
/// Maximum representable company slot number based on the encoding width.
pub const COMPANY_ID_MASK: u8 = (1 << COMPANY_ID_BITS) - 1;
/// Number of company slots supported by the pool.
pub const COMPANY_POOL_SIZE: u8 = 50;
/// Legacy maximum number of companies, kept for old save compatibility.
pub const LEGACY_MAX_COMPANIES: u8 = 15;

/// Maximum length of a president name in characters, including the terminator.
pub const MAX_LENGTH_PRESIDENT_NAME_CHARS: usize = 32;
/// Maximum length of a company name in characters, including the terminator.
pub const MAX_LENGTH_COMPANY_NAME_CHARS: usize = 32;

/// Maximum number of quarters kept as performance history.
pub const MAX_HISTORY_QUARTERS: usize = 24;

/// Minimum interval (in minutes) between competitor starts.
pub const MIN_COMPETITORS_INTERVAL: u32 = 0;
/// Maximum interval (in minutes) between competitor starts.
pub const MAX_COMPETITORS_INTERVAL: u32 = 500;

/// Company configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCompanyConfig")
)]
pub struct CompanyConfig {
    /// Minutes between AI competitor starts.
    competitors_interval: u32,
}

impl CompanyConfig {
    // ===== compile-time constants used as type parameters =====
    pub const POOL_SIZE: usize = COMPANY_POOL_SIZE as usize;
    pub const HISTORY_QUARTERS: usize = MAX_HISTORY_QUARTERS;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_COMPETITORS_INTERVAL: u32 = 10;

    pub fn new() -> Self {
        Self {
            competitors_interval: Self::DEFAULT_COMPETITORS_INTERVAL,
        }
    }

    /// Builds a configuration, rejecting intervals outside the allowed range.
    pub fn with_competitors_interval(competitors_interval: u32) -> Result<Self, CompanyError> {
        if !(MIN_COMPETITORS_INTERVAL..=MAX_COMPETITORS_INTERVAL).contains(&competitors_interval) {
            tracing::debug!(competitors_interval, "competitors interval out of range");
            return Err(CompanyError::CompetitorsIntervalOutOfRange {
                value: competitors_interval,
                min: MIN_COMPETITORS_INTERVAL,
                max: MAX_COMPETITORS_INTERVAL,
            });
        }
        Ok(Self {
            competitors_interval,
        })
    }

    pub fn competitors_interval(&self) -> u32 {
        self.competitors_interval
    }
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated wire form of [`CompanyConfig`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCompanyConfig {
    competitors_interval: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCompanyConfig> for CompanyConfig {
    type Error = CompanyError;

    fn try_from(raw: RawCompanyConfig) -> Result<Self, Self::Error> {
        Self::with_competitors_interval(raw.competitors_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_mask_matches_bit_width() {
        assert_eq!(COMPANY_ID_MASK, 63);
    }

    #[test]
    fn default_interval_is_in_range() {
        let config = CompanyConfig::default();
        assert_eq!(
            config.competitors_interval(),
            CompanyConfig::DEFAULT_COMPETITORS_INTERVAL
        );
    }

    #[test]
    fn interval_bounds_are_inclusive() {
        assert!(CompanyConfig::with_competitors_interval(MIN_COMPETITORS_INTERVAL).is_ok());
        assert!(CompanyConfig::with_competitors_interval(MAX_COMPETITORS_INTERVAL).is_ok());
        assert_eq!(
            CompanyConfig::with_competitors_interval(501),
            Err(CompanyError::CompetitorsIntervalOutOfRange {
                value: 501,
                min: 0,
                max: 500
            })
        );
    }
}
