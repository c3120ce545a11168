//! Row selection over the monthly table.

use super::types::MonthlyRecord;

/// First `n` rows (fewer if the table is shorter).
pub fn head(records: &[MonthlyRecord], n: usize) -> Vec<MonthlyRecord> {
    records.iter().take(n).cloned().collect()
}

/// Last `n` rows (fewer if the table is shorter).
pub fn tail(records: &[MonthlyRecord], n: usize) -> Vec<MonthlyRecord> {
    let start = records.len().saturating_sub(n);
    records[start..].to_vec()
}

/// Months with mean temperature strictly above `min_c`.
pub fn warmer_than(records: &[MonthlyRecord], min_c: f64) -> Vec<MonthlyRecord> {
    records
        .iter()
        .filter(|r| r.temperature_c > min_c)
        .cloned()
        .collect()
}

/// Months that are both mild and frugal: temperature strictly above
/// `min_temp_c` and consumption strictly below `max_energy_kwh`.
pub fn moderate(
    records: &[MonthlyRecord],
    min_temp_c: f64,
    max_energy_kwh: f64,
) -> Vec<MonthlyRecord> {
    records
        .iter()
        .filter(|r| r.temperature_c > min_temp_c && r.energy_kwh < max_energy_kwh)
        .cloned()
        .collect()
}

/// Months with consumption strictly below `max_kwh`.
pub fn below_energy(records: &[MonthlyRecord], max_kwh: f64) -> Vec<MonthlyRecord> {
    records
        .iter()
        .filter(|r| r.energy_kwh < max_kwh)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample::sample_year;

    #[test]
    fn head_and_tail_slice() {
        let records = sample_year();
        let first = head(&records, 3);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].month, "Jan");
        assert_eq!(first[2].month, "Mar");

        let last = tail(&records, 3);
        assert_eq!(last.len(), 3);
        assert_eq!(last[0].month, "Oct");
        assert_eq!(last[2].month, "Dec");
    }

    #[test]
    fn head_beyond_len_returns_all() {
        let records = sample_year();
        assert_eq!(head(&records, 100).len(), 12);
        assert_eq!(tail(&records, 100).len(), 12);
    }

    #[test]
    fn summer_months() {
        let records = sample_year();
        let summer = warmer_than(&records, 20.0);
        let months: Vec<&str> = summer.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["Jun", "Jul", "Aug"]);
    }

    #[test]
    fn moderate_months() {
        let records = sample_year();
        let mild = moderate(&records, 10.0, 250.0);
        let months: Vec<&str> = mild.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["May", "Jun", "Jul", "Aug", "Sep"]);
    }

    #[test]
    fn low_energy_months() {
        let records = sample_year();
        let low = below_energy(&records, 200.0);
        let months: Vec<&str> = low.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["Jun", "Jul", "Aug"]);
    }
}
