//! Deterministic mock dataset generator for datamotion-grid.
//!
//! This crate provides [`DatasetGenerator`], which produces synthetic
//! [`Row`](grid_core::Row)s from a 32-bit seed. The pseudo-random stream is a
//! fixed linear congruential generator so that the same `(row_count, seed)`
//! pair always yields the same rows, byte for byte.
//!
//! # Architecture
//!
//! ```text
//! DatasetConfig (pools, bounds; YAML or defaults)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   DatasetGenerator   │
//! │                      │
//! │  - seed              │
//! │  - rng (Lcg)         │
//! │  - index             │
//! └──────────┬───────────┘
//!            │  draws per row: first, last, domain,
//!            │  status, country, day offset, amount
//!            ▼
//!    Row { id, name, email, status, createdAt, country, amount }
//! ```
//!
//! # Example
//!
//! ```rust
//! use dataset_generator::generate;
//!
//! let rows = generate(10, 123);
//! assert_eq!(rows.len(), 10);
//! assert_eq!(rows[0].id, 1);
//! assert_eq!(rows[9].id, 10);
//! ```
//!
//! # Draw order
//!
//! Each row consumes exactly seven draws in a fixed order. Reordering them
//! changes the generated rows for the same seed.

pub mod config;
pub mod generator;
pub mod generators;
pub mod lcg;

// Re-exports for convenience
pub use config::{
    ConfigError, DatasetConfig, AMOUNT_MAX, AMOUNT_MIN, COUNTRIES, DATASET_SEED, EMAIL_DOMAINS,
    FIRST_NAMES, LAST_NAMES, MAX_DAYS_OFFSET, ROW_COUNT_DEFAULT,
};
pub use generator::{coerce_seed, generate, generate_with_config, DatasetGenerator, RowIterator};
pub use lcg::Lcg;
