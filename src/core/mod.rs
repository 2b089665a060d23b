// src/core/mod.rs

pub mod currency;
pub mod record;
pub mod aggregate;
pub mod finalize;
pub mod sanitize;

pub use aggregate::{ingest, Aggregator, Groups};
pub use currency::CurrencyTable;
pub use finalize::{finalize, FinalizedTables};
pub use record::{normalize, NormalizedRecord, RawRecord};
