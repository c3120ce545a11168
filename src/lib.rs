//! Building energy benchmarking and comfort analysis toolkit.

pub mod analysis;
pub mod comfort;
pub mod config;
/// Monthly energy records, cleaning, filtering, stats, and table joins.
pub mod dataset;
pub mod geometry;
pub mod io;
pub mod metrics;
pub mod report;
