//! Typed monthly energy table: records, cleaning, filtering, stats, joins.

pub mod clean;
pub mod filter;
pub mod merge;
pub mod sample;
pub mod stats;
pub mod types;

pub use clean::{drop_missing, fill_missing};
pub use sample::sample_year;
pub use types::{MonthlyRecord, RawMonthlyRecord};
