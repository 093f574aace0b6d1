use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::debug;

use crate::error::AppResult;
use crate::models::analytics::{AnalyticsOverview, GradeCount, ScorePair, SleepGroupMean};
use crate::models::response::SurveyResponse;
use crate::models::score::{grade_to_score, sleep_to_score, GradeLabel, SleepBucket};

/// Aggregation over the loaded response collection. All computations are
/// pure; only `overview` touches the store.
pub struct AnalyticsService {
    store: Arc<dyn crate::storage::ResponseStore>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn crate::storage::ResponseStore>) -> Self {
        Self { store }
    }

    /// Loads the collection and derives everything the chart view needs.
    pub fn overview(&self) -> AppResult<AnalyticsOverview> {
        let responses = self.store.load()?;
        debug!(target: "app::analytics", count = responses.len(), "computing analytics overview");

        let grade_distribution = Self::grade_distribution(&responses);
        let score_pairs: Vec<ScorePair> = Self::score_pairs(&responses)
            .into_iter()
            .filter(|pair| pair.defined().is_some())
            .collect();
        let mean_grade_by_sleep = Self::mean_grade_by_sleep(&responses);

        Ok(AnalyticsOverview {
            has_responses: !responses.is_empty(),
            has_defined_pairs: !score_pairs.is_empty(),
            grade_distribution,
            score_pairs,
            mean_grade_by_sleep,
            responses,
        })
    }

    pub fn grade_distribution_for_store(&self) -> AppResult<Vec<GradeCount>> {
        Ok(Self::grade_distribution(&self.store.load()?))
    }

    pub fn score_pairs_for_store(&self) -> AppResult<Vec<ScorePair>> {
        Ok(Self::score_pairs(&self.store.load()?))
    }

    pub fn mean_grade_by_sleep_for_store(&self) -> AppResult<Vec<SleepGroupMean>> {
        Ok(Self::mean_grade_by_sleep(&self.store.load()?))
    }

    /// Counts responses per distinct grade label. Known labels are ordered
    /// by the grade scale (-3 up to 12); labels outside the enumeration sort
    /// after them, lexicographically.
    pub fn grade_distribution(responses: &[SurveyResponse]) -> Vec<GradeCount> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for response in responses {
            *counts.entry(response.most_common_grade.as_str()).or_insert(0) += 1;
        }

        let mut distribution: Vec<GradeCount> = counts
            .into_iter()
            .map(|(label, count)| GradeCount {
                label: label.to_string(),
                count,
            })
            .collect();

        distribution.sort_by(|a, b| {
            let rank = |entry: &GradeCount| {
                GradeLabel::scale_position(&entry.label).unwrap_or(GradeLabel::ALL.len())
            };
            rank(a).cmp(&rank(b)).then_with(|| a.label.cmp(&b.label))
        });

        distribution
    }

    /// One score pair per response, in collection order. Out-of-enumeration
    /// labels become `None` on the affected axis rather than an error.
    pub fn score_pairs(responses: &[SurveyResponse]) -> Vec<ScorePair> {
        responses
            .iter()
            .map(|response| ScorePair {
                sleep_score: sleep_to_score(&response.sleep_bucket),
                grade_score: grade_to_score(&response.most_common_grade),
            })
            .collect()
    }

    /// Arithmetic mean of the grade score per sleep bucket, ascending by
    /// sleep score. Responses missing either mapping are excluded from the
    /// grouping.
    pub fn mean_grade_by_sleep(responses: &[SurveyResponse]) -> Vec<SleepGroupMean> {
        let mut groups: BTreeMap<SleepBucket, (i64, usize)> = BTreeMap::new();

        for response in responses {
            let Ok(bucket) = SleepBucket::try_from(response.sleep_bucket.as_str()) else {
                continue;
            };
            let Some(grade) = grade_to_score(&response.most_common_grade) else {
                continue;
            };

            let entry = groups.entry(bucket).or_insert((0, 0));
            entry.0 += grade;
            entry.1 += 1;
        }

        groups
            .into_iter()
            .map(|(bucket, (sum, count))| SleepGroupMean {
                sleep_score: bucket.score(),
                mean_grade: sum as f64 / count as f64,
                sample_count: count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(sleep: &str, grade: &str) -> SurveyResponse {
        SurveyResponse {
            sleep_bucket: sleep.to_string(),
            screen_time_bucket: "1-2 timer".to_string(),
            written_performance: "Middel".to_string(),
            oral_performance: "Godt".to_string(),
            most_common_grade: grade.to_string(),
        }
    }

    #[test]
    fn distribution_counts_sum_to_collection_length() {
        let responses = vec![
            response("<5h", "7"),
            response("7-8h", "7"),
            response("7-8h", "12"),
            response(">8h", "00"),
        ];

        let distribution = AnalyticsService::grade_distribution(&responses);
        let total: usize = distribution.iter().map(|entry| entry.count).sum();
        assert_eq!(total, responses.len());
        assert_eq!(distribution.len(), 3);
    }

    #[test]
    fn distribution_is_ordered_by_grade_scale() {
        let responses = vec![
            response("7-8h", "12"),
            response("7-8h", "4"),
            response("7-8h", "-3"),
            response("7-8h", "10"),
        ];

        let distribution = AnalyticsService::grade_distribution(&responses);
        let labels: Vec<&str> = distribution
            .iter()
            .map(|entry| entry.label.as_str())
            .collect();
        assert_eq!(labels, vec!["-3", "4", "10", "12"]);
    }

    #[test]
    fn unknown_grade_labels_sort_after_known_ones() {
        let responses = vec![response("7-8h", "A+"), response("7-8h", "12")];

        let distribution = AnalyticsService::grade_distribution(&responses);
        let labels: Vec<&str> = distribution
            .iter()
            .map(|entry| entry.label.as_str())
            .collect();
        assert_eq!(labels, vec!["12", "A+"]);
    }

    #[test]
    fn score_pairs_keep_undefined_components() {
        let responses = vec![response("7-8h", "10"), response("ukendt", "10")];

        let pairs = AnalyticsService::score_pairs(&responses);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].defined(), Some((7.5, 10)));
        assert_eq!(pairs[1].sleep_score, None);
        assert_eq!(pairs[1].grade_score, Some(10));
        assert_eq!(pairs[1].defined(), None);
    }

    #[test]
    fn mean_grade_groups_by_sleep_score() {
        let responses = vec![response("7-8h", "10"), response("7-8h", "12")];

        let groups = AnalyticsService::mean_grade_by_sleep(&responses);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sleep_score, 7.5);
        assert_eq!(groups[0].mean_grade, 11.0);
        assert_eq!(groups[0].sample_count, 2);
    }

    #[test]
    fn grouping_excludes_rows_missing_either_score() {
        let responses = vec![
            response("7-8h", "10"),
            response("ukendt", "12"),
            response("7-8h", "B"),
        ];

        let groups = AnalyticsService::mean_grade_by_sleep(&responses);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].mean_grade, 10.0);
        assert_eq!(groups[0].sample_count, 1);
    }

    #[test]
    fn groups_are_ordered_by_ascending_sleep_score() {
        let responses = vec![
            response(">8h", "7"),
            response("<5h", "4"),
            response("5-6h", "10"),
        ];

        let scores: Vec<f64> = AnalyticsService::mean_grade_by_sleep(&responses)
            .iter()
            .map(|group| group.sleep_score)
            .collect();
        assert_eq!(scores, vec![4.5, 5.5, 9.0]);
    }

    #[test]
    fn empty_collection_aggregates_to_empty_views() {
        let responses: Vec<SurveyResponse> = Vec::new();
        assert!(AnalyticsService::grade_distribution(&responses).is_empty());
        assert!(AnalyticsService::score_pairs(&responses).is_empty());
        assert!(AnalyticsService::mean_grade_by_sleep(&responses).is_empty());
    }
}
