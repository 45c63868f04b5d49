//! Pairwise metric comparison between two districts.

use mgnrega_pulse_analytics_models::{
    ComparisonSet, MetricComparison, MetricReadings, Winner,
};
use mgnrega_pulse_scheme_models::MetricKind;

/// How close (in percentage points of relative difference) two values can
/// be and still count as equal.
const TIE_THRESHOLD: f64 = 1.0;

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compares one metric value between two districts.
///
/// A missing or zero value on either side short-circuits to the degenerate
/// `{percentage: 0, winner: tie}` result. A legitimately-zero metric (e.g.
/// zero pending payments) is therefore indistinguishable from missing
/// data; this matches long-standing production behavior and is preserved
/// deliberately.
///
/// Otherwise the relative difference `(v1 - v2) / v2 * 100` decides the
/// outcome: within [`TIE_THRESHOLD`] it is a tie regardless of direction,
/// beyond it the direction flag picks the winner. The signed `difference`
/// is reported either way, so a tie can still carry a non-zero difference.
#[must_use]
pub fn compare_values(
    value1: Option<f64>,
    value2: Option<f64>,
    higher_is_better: bool,
) -> MetricComparison {
    let (Some(value1), Some(value2)) = (value1, value2) else {
        return MetricComparison::degenerate();
    };
    if value1 == 0.0 || value2 == 0.0 {
        return MetricComparison::degenerate();
    }

    let diff = (value1 - value2) / value2 * 100.0;

    let winner = if diff.abs() < TIE_THRESHOLD {
        Winner::Tie
    } else if higher_is_better {
        if value1 > value2 {
            Winner::District1
        } else {
            Winner::District2
        }
    } else if value1 < value2 {
        Winner::District1
    } else {
        Winner::District2
    };

    MetricComparison {
        percentage: round_tenth(diff.abs()),
        winner,
        difference: Some(round_tenth(diff)),
    }
}

/// Compares all four tracked metrics between two districts.
#[must_use]
pub fn compare_all(district1: &MetricReadings, district2: &MetricReadings) -> ComparisonSet {
    ComparisonSet {
        jobs: compare_values(
            district1.jobs_provided,
            district2.jobs_provided,
            MetricKind::JobsProvided.higher_is_better(),
        ),
        wages: compare_values(
            district1.wages_paid_percentage,
            district2.wages_paid_percentage,
            MetricKind::WagesPaidPercentage.higher_is_better(),
        ),
        pending: compare_values(
            district1.pending_payments_crores,
            district2.pending_payments_crores,
            MetricKind::PendingPaymentsCrores.higher_is_better(),
        ),
        person_days: compare_values(
            district1.person_days,
            district2.person_days,
            MetricKind::PersonDays.higher_is_better(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_tie_with_zero_percentage() {
        let result = compare_values(Some(42.0), Some(42.0), true);
        assert_eq!(result.winner, Winner::Tie);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.difference, Some(0.0));
    }

    #[test]
    fn missing_or_zero_values_short_circuit_to_the_degenerate_result() {
        for (v1, v2) in [
            (None, Some(10.0)),
            (Some(10.0), None),
            (None, None),
            (Some(0.0), Some(10.0)),
            (Some(10.0), Some(0.0)),
        ] {
            let result = compare_values(v1, v2, true);
            assert_eq!(result, MetricComparison::degenerate(), "{v1:?} vs {v2:?}");
        }
    }

    #[test]
    fn five_percent_lead_wins_when_higher_is_better() {
        let result = compare_values(Some(105.0), Some(100.0), true);
        assert_eq!(result.percentage, 5.0);
        assert_eq!(result.winner, Winner::District1);
        assert_eq!(result.difference, Some(5.0));
    }

    #[test]
    fn swapped_inputs_with_inverted_direction_flip_the_winner() {
        let result = compare_values(Some(100.0), Some(105.0), false);
        assert_eq!(result.winner, Winner::District1);
        assert_eq!(result.difference, Some(-4.8));
    }

    #[test]
    fn sub_threshold_difference_ties_but_keeps_the_signed_difference() {
        let result = compare_values(Some(100.5), Some(100.0), true);
        assert_eq!(result.winner, Winner::Tie);
        assert_eq!(result.percentage, 0.5);
        assert_eq!(result.difference, Some(0.5));
    }

    #[test]
    fn lower_is_better_picks_the_smaller_value() {
        let result = compare_values(Some(50.0), Some(30.0), false);
        assert_eq!(result.winner, Winner::District2);
        assert_eq!(result.percentage, 66.7);
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        let result = compare_values(Some(2_250_000.0), Some(1_980_000.0), true);
        assert_eq!(result.percentage, 13.6);
        assert_eq!(result.difference, Some(13.6));
    }

    #[test]
    fn compare_all_applies_each_metric_direction() {
        let district1 = MetricReadings {
            jobs_provided: Some(2_250_000.0),
            wages_paid_percentage: Some(89.5),
            pending_payments_crores: Some(50.0),
            person_days: Some(1_000_000.0),
        };
        let district2 = MetricReadings {
            jobs_provided: Some(1_980_000.0),
            wages_paid_percentage: Some(92.1),
            pending_payments_crores: Some(30.0),
            person_days: Some(1_000_000.0),
        };

        let set = compare_all(&district1, &district2);
        assert_eq!(set.jobs.winner, Winner::District1);
        assert_eq!(set.wages.winner, Winner::District2);
        // Lower pending payments wins.
        assert_eq!(set.pending.winner, Winner::District2);
        assert_eq!(set.person_days.winner, Winner::Tie);
    }
}
