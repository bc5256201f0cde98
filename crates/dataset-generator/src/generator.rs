//! Main dataset generator producing rows.

use crate::config::DatasetConfig;
use crate::generators::{numeric, pattern, pick, timestamp};
use crate::lcg::Lcg;
use grid_core::Row;
use tracing::{debug, info};

/// Data generator that produces deterministic dataset rows.
///
/// The LCG stream is strictly sequential, so a generator always starts at
/// index 0; row `n` can only be reached by generating rows `0..n` first.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    /// Pools and bounds
    config: DatasetConfig,
    /// Seed the stream started from
    seed: u32,
    /// Pseudo-random stream
    rng: Lcg,
    /// Index of the next row
    index: u64,
}

impl DatasetGenerator {
    /// Create a generator over the default pools.
    pub fn new(seed: u32) -> Self {
        Self::with_config(DatasetConfig::default(), seed)
    }

    /// Create a generator over custom pools.
    ///
    /// The config is expected to have passed [`DatasetConfig::validate`].
    pub fn with_config(config: DatasetConfig, seed: u32) -> Self {
        Self {
            config,
            seed,
            rng: Lcg::new(seed),
            index: 0,
        }
    }

    /// Seed this generator started from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Index of the next row to be generated.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Generate the next row.
    ///
    /// Draw order: first name, last name, domain, status, country,
    /// day offset, amount.
    pub fn next_row(&mut self) -> Row {
        let config = &self.config;
        let rng = &mut self.rng;
        let id = self.index + 1;

        let first = pick(&config.first_names, rng);
        let last = pick(&config.last_names, rng);
        let domain = pick(&config.email_domains, rng);
        let status = *pick(&config.statuses, rng);
        let country = pick(&config.countries, rng).clone();
        let created_at =
            timestamp::generate_created_at(rng, config.base_date, config.max_days_offset);
        let amount = numeric::generate_amount(rng, config.amount_min, config.amount_max);

        let row = Row {
            id,
            name: pattern::full_name(first, last),
            email: pattern::email(first, last, id, domain),
            status,
            created_at,
            country,
            amount,
        };

        self.index += 1;
        row
    }

    /// Lazily generate `count` rows.
    pub fn rows(&mut self, count: usize) -> RowIterator<'_> {
        RowIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates rows.
pub struct RowIterator<'a> {
    generator: &'a mut DatasetGenerator,
    remaining: usize,
}

impl Iterator for RowIterator<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        let row = self.generator.next_row();

        if row.id % 10_000 == 0 {
            debug!("Generated {} rows", row.id);
        }

        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RowIterator<'_> {}

/// Generate `row_count` rows from `seed` over the default pools.
///
/// A count of zero yields an empty vector.
pub fn generate(row_count: usize, seed: u32) -> Vec<Row> {
    generate_with_config(DatasetConfig::default(), row_count, seed)
}

/// Generate `row_count` rows from `seed` over custom pools.
pub fn generate_with_config(config: DatasetConfig, row_count: usize, seed: u32) -> Vec<Row> {
    info!("Generating dataset: {} rows, seed {}", row_count, seed);
    let mut generator = DatasetGenerator::with_config(config, seed);
    generator.rows(row_count).collect()
}

/// Coerce a signed integer seed to the generator's 32-bit unsigned seed.
///
/// Wraps modulo 2^32, so `-1` becomes `4294967295`.
pub fn coerce_seed(raw: i64) -> u32 {
    raw as u32
}
