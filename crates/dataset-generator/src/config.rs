//! Vocabulary pools and numeric bounds for dataset generation.
//!
//! The defaults reproduce the reference corpus. A [`DatasetConfig`] can also
//! be loaded from YAML to generate a different corpus with the same
//! algorithm:
//!
//! ```yaml
//! first_names: [Ada, Grace]
//! last_names: [Lovelace, Hopper]
//! email_domains: [example.org]
//! countries: [Spain]
//! amount_min: 1
//! amount_max: 50
//! ```
//!
//! Omitted keys fall back to the defaults.

use chrono::{DateTime, Duration, TimeZone, Utc};
use grid_core::Status;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of rows per dataset request.
pub const ROW_COUNT_DEFAULT: usize = 20_000;

/// Default seed per dataset request.
pub const DATASET_SEED: u32 = 42;

/// Lower bound (inclusive) of generated amounts.
pub const AMOUNT_MIN: f64 = 10.0;

/// Upper bound (inclusive) of generated amounts.
pub const AMOUNT_MAX: f64 = 10_000.0;

/// Exclusive upper bound of the creation day offset (~3 years).
pub const MAX_DAYS_OFFSET: u32 = 3 * 365;

/// 2020-01-01T00:00:00Z as seconds since the epoch.
const BASE_DATE_SECS: i64 = 1_577_836_800;

pub const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bob", "Charlie", "Diana", "Ethan", "Fiona", "George", "Hannah", "Ivan", "Julia",
];

pub const LAST_NAMES: [&str; 10] = [
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Miller",
    "Davis",
    "Garcia",
    "Rodriguez",
    "Martinez",
];

pub const EMAIL_DOMAINS: [&str; 4] = ["example.com", "acme.io", "datamotion.dev", "gridtools.app"];

pub const COUNTRIES: [&str; 10] = [
    "Spain",
    "Germany",
    "France",
    "United Kingdom",
    "United States",
    "Canada",
    "Brazil",
    "Japan",
    "Australia",
    "Netherlands",
];

/// Error type for dataset configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read dataset config: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A vocabulary pool is empty
    #[error("Pool '{0}' must not be empty")]
    EmptyPool(&'static str),

    /// Amount bounds are inverted or not finite
    #[error("Invalid amount range: {min}..={max}")]
    InvalidAmountRange { min: f64, max: f64 },

    /// Day offset bound is zero
    #[error("max_days_offset must be positive")]
    InvalidDayOffset,

    /// Base date plus the day offset bound leaves the representable range
    #[error("max_days_offset {0} overflows the date range from base_date")]
    DayOffsetOutOfRange(u32),
}

/// Pools and bounds driving generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub email_domains: Vec<String>,
    pub countries: Vec<String>,
    pub statuses: Vec<Status>,
    pub amount_min: f64,
    pub amount_max: f64,
    /// Base creation date; day offsets are added to it
    pub base_date: DateTime<Utc>,
    /// Exclusive upper bound of the day offset
    pub max_days_offset: u32,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            first_names: to_owned_pool(&FIRST_NAMES),
            last_names: to_owned_pool(&LAST_NAMES),
            email_domains: to_owned_pool(&EMAIL_DOMAINS),
            countries: to_owned_pool(&COUNTRIES),
            statuses: Status::ALL.to_vec(),
            amount_min: AMOUNT_MIN,
            amount_max: AMOUNT_MAX,
            base_date: default_base_date(),
            max_days_offset: MAX_DAYS_OFFSET,
        }
    }
}

impl DatasetConfig {
    /// Parse a config from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: DatasetConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check that every pool can be drawn from and the bounds are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pools: [(&'static str, bool); 5] = [
            ("first_names", self.first_names.is_empty()),
            ("last_names", self.last_names.is_empty()),
            ("email_domains", self.email_domains.is_empty()),
            ("countries", self.countries.is_empty()),
            ("statuses", self.statuses.is_empty()),
        ];
        if let Some((name, _)) = pools.iter().find(|(_, empty)| *empty) {
            return Err(ConfigError::EmptyPool(*name));
        }

        if !self.amount_min.is_finite()
            || !self.amount_max.is_finite()
            || self.amount_min > self.amount_max
        {
            return Err(ConfigError::InvalidAmountRange {
                min: self.amount_min,
                max: self.amount_max,
            });
        }

        if self.max_days_offset == 0 {
            return Err(ConfigError::InvalidDayOffset);
        }
        let span = Duration::days(i64::from(self.max_days_offset));
        if self.base_date.checked_add_signed(span).is_none() {
            return Err(ConfigError::DayOffsetOutOfRange(self.max_days_offset));
        }

        Ok(())
    }
}

fn to_owned_pool(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|s| s.to_string()).collect()
}

fn default_base_date() -> DateTime<Utc> {
    Utc.timestamp_opt(BASE_DATE_SECS, 0)
        .single()
        .unwrap_or_default()
}
