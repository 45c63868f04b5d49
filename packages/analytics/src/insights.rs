//! Natural-language insight sentences for a district comparison.

use mgnrega_pulse_analytics_models::{ComparisonSet, Winner};

/// Orders the two district names as (winner, loser), or `None` on a tie.
fn ranked<'a>(
    winner: Winner,
    district1_name: &'a str,
    district2_name: &'a str,
) -> Option<(&'a str, &'a str)> {
    match winner {
        Winner::District1 => Some((district1_name, district2_name)),
        Winner::District2 => Some((district2_name, district1_name)),
        Winner::Tie => None,
    }
}

/// Converts comparison outcomes into short human-readable sentences.
///
/// The order is fixed: jobs, then wages, then pending payments. Ties
/// produce no sentence, so the result holds between zero and three
/// entries. Person-days has no sentence.
#[must_use]
pub fn generate_insights(
    comparisons: &ComparisonSet,
    district1_name: &str,
    district2_name: &str,
) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some((winner, loser)) = ranked(comparisons.jobs.winner, district1_name, district2_name)
    {
        insights.push(format!(
            "{winner} has provided {:.1}% more jobs than {loser}",
            comparisons.jobs.percentage
        ));
    }

    if let Some((winner, _)) = ranked(comparisons.wages.winner, district1_name, district2_name) {
        insights.push(format!("{winner} has better wage payment rate"));
    }

    if let Some((winner, _)) = ranked(comparisons.pending.winner, district1_name, district2_name) {
        insights.push(format!("{winner} has lower pending payments"));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare_all;
    use mgnrega_pulse_analytics_models::{MetricComparison, MetricReadings};

    fn all_ties() -> ComparisonSet {
        ComparisonSet {
            jobs: MetricComparison::degenerate(),
            wages: MetricComparison::degenerate(),
            pending: MetricComparison::degenerate(),
            person_days: MetricComparison::degenerate(),
        }
    }

    #[test]
    fn all_ties_yield_no_insights() {
        assert!(generate_insights(&all_ties(), "Raipur", "Durg").is_empty());
    }

    #[test]
    fn person_days_never_produces_a_sentence() {
        let mut comparisons = all_ties();
        comparisons.person_days = MetricComparison {
            percentage: 25.0,
            winner: Winner::District1,
            difference: Some(25.0),
        };

        assert!(generate_insights(&comparisons, "Raipur", "Durg").is_empty());
    }

    #[test]
    fn split_outcome_names_each_winner_in_fixed_order() {
        let district1 = MetricReadings {
            jobs_provided: Some(2_250_000.0),
            wages_paid_percentage: Some(89.5),
            pending_payments_crores: Some(50.0),
            person_days: Some(1_200_000.0),
        };
        let district2 = MetricReadings {
            jobs_provided: Some(1_980_000.0),
            wages_paid_percentage: Some(92.1),
            pending_payments_crores: Some(30.0),
            person_days: Some(900_000.0),
        };

        let comparisons = compare_all(&district1, &district2);
        let insights = generate_insights(&comparisons, "Raipur", "Durg");

        assert_eq!(
            insights,
            vec![
                "Raipur has provided 13.6% more jobs than Durg".to_string(),
                "Durg has better wage payment rate".to_string(),
                "Durg has lower pending payments".to_string(),
            ]
        );
    }

    #[test]
    fn jobs_sentence_carries_the_rounded_percentage() {
        let mut comparisons = all_ties();
        comparisons.jobs = MetricComparison {
            percentage: 5.0,
            winner: Winner::District2,
            difference: Some(-4.8),
        };

        let insights = generate_insights(&comparisons, "Korba", "Bastar");
        assert_eq!(
            insights,
            vec!["Bastar has provided 5.0% more jobs than Korba".to_string()]
        );
    }
}
