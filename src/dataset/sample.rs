//! Built-in sample dataset used when no CSV is supplied.

use super::types::MonthlyRecord;

/// One year of monthly consumption and mean outdoor temperature for a
/// small mixed-use building in a temperate climate.
pub fn sample_year() -> Vec<MonthlyRecord> {
    [
        ("Jan", 320.0, 2.0),
        ("Feb", 280.0, 4.0),
        ("Mar", 300.0, 8.0),
        ("Apr", 250.0, 12.0),
        ("May", 200.0, 18.0),
        ("Jun", 180.0, 22.0),
        ("Jul", 170.0, 25.0),
        ("Aug", 190.0, 24.0),
        ("Sep", 220.0, 20.0),
        ("Oct", 260.0, 14.0),
        ("Nov", 300.0, 8.0),
        ("Dec", 330.0, 4.0),
    ]
    .iter()
    .map(|&(m, e, t)| MonthlyRecord::new(m, e, t))
    .collect()
}
