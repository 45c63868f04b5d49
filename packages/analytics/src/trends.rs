//! Month-over-month trend calculation.

/// Computes the period-over-period change for one metric as a formatted
/// percentage string.
///
/// `records` must be ordered most-recent-first; the trend compares the
/// first entry against the second. With fewer than two records, or a
/// zero previous value, the result is the plain `"0%"` guard string:
/// missing data is a neutral outcome, not an error. A computed zero change
/// renders as `"0.0%"`, which keeps the two cases distinguishable
/// downstream.
pub fn period_trend<T>(records: &[T], metric: impl Fn(&T) -> f64) -> String {
    let (Some(current), Some(previous)) = (records.first(), records.get(1)) else {
        return "0%".to_string();
    };

    let previous_value = metric(previous);
    if previous_value == 0.0 {
        return "0%".to_string();
    }

    let change = (metric(current) - previous_value) / previous_value * 100.0;
    format_change(change)
}

/// Formats a signed percentage change to one decimal, with an explicit
/// leading `+` for positive values.
fn format_change(change: f64) -> String {
    let rounded = (change * 10.0).round() / 10.0;
    if rounded > 0.0 {
        format!("+{rounded:.1}%")
    } else {
        format!("{rounded:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        jobs: f64,
    }

    fn records(values: &[f64]) -> Vec<Record> {
        values.iter().map(|&jobs| Record { jobs }).collect()
    }

    #[test]
    fn fewer_than_two_records_yields_the_guard_string() {
        assert_eq!(period_trend(&records(&[]), |r| r.jobs), "0%");
        assert_eq!(period_trend(&records(&[110.0]), |r| r.jobs), "0%");
    }

    #[test]
    fn zero_previous_value_yields_the_guard_string() {
        assert_eq!(period_trend(&records(&[110.0, 0.0]), |r| r.jobs), "0%");
    }

    #[test]
    fn ten_percent_rise_formats_with_explicit_plus() {
        assert_eq!(period_trend(&records(&[110.0, 100.0]), |r| r.jobs), "+10.0%");
    }

    #[test]
    fn ten_percent_drop_formats_with_natural_minus() {
        assert_eq!(period_trend(&records(&[90.0, 100.0]), |r| r.jobs), "-10.0%");
    }

    #[test]
    fn unchanged_value_formats_as_signless_zero() {
        assert_eq!(period_trend(&records(&[100.0, 100.0]), |r| r.jobs), "0.0%");
    }

    #[test]
    fn change_rounds_to_one_decimal() {
        // (107 - 93) / 93 * 100 = 15.053...
        assert_eq!(period_trend(&records(&[107.0, 93.0]), |r| r.jobs), "+15.1%");
    }

    #[test]
    fn only_the_two_most_recent_records_matter() {
        assert_eq!(
            period_trend(&records(&[110.0, 100.0, 7.0, 2.0]), |r| r.jobs),
            "+10.0%"
        );
    }
}
