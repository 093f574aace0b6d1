use serde::{Deserialize, Serialize};

use crate::models::response::SurveyResponse;

/// One bar of the grade distribution chart: a grade label and how many
/// responses reported it as their most common grade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GradeCount {
    pub label: String,
    pub count: usize,
}

/// Numeric view of one response. Either component is `None` when the stored
/// label falls outside its fixed enumeration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScorePair {
    pub sleep_score: Option<f64>,
    pub grade_score: Option<i64>,
}

impl ScorePair {
    /// Both axes resolved, as required by the scatter and grouping charts.
    pub fn defined(&self) -> Option<(f64, i64)> {
        match (self.sleep_score, self.grade_score) {
            (Some(sleep), Some(grade)) => Some((sleep, grade)),
            _ => None,
        }
    }
}

/// One bar of the mean-grade-per-sleep-bucket chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SleepGroupMean {
    pub sleep_score: f64,
    pub mean_grade: f64,
    pub sample_count: usize,
}

/// Everything the chart view consumes in one payload. `has_responses` and
/// `has_defined_pairs` let the frontend skip rendering empty sections, per
/// the reference behavior of hiding the correlation charts when no response
/// maps onto both axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub responses: Vec<SurveyResponse>,
    pub grade_distribution: Vec<GradeCount>,
    pub score_pairs: Vec<ScorePair>,
    pub mean_grade_by_sleep: Vec<SleepGroupMean>,
    pub has_responses: bool,
    pub has_defined_pairs: bool,
}
