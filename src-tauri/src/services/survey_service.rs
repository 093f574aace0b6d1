use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::response::{PerformanceLevel, ScreenTimeBucket, SurveyDraft, SurveyResponse};
use crate::models::score::{GradeLabel, SleepBucket};
use crate::storage::ResponseStore;

/// Result of a reset: whether there was anything to delete, so the frontend
/// can distinguish "data deleted" from "nothing to delete".
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetOutcome {
    pub removed: bool,
}

/// Handles questionnaire submissions against the injected response store.
pub struct SurveyService {
    store: Arc<dyn ResponseStore>,
}

impl SurveyService {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self { store }
    }

    /// Validates a draft and appends it to the store. An incomplete draft
    /// is rejected with the full list of missing fields and the store is
    /// left untouched.
    pub fn submit(&self, draft: SurveyDraft) -> AppResult<SurveyResponse> {
        let response = draft.finalize().map_err(AppError::incomplete_submission)?;

        Self::ensure_known(
            "sleepBucket",
            &response.sleep_bucket,
            SleepBucket::try_from(response.sleep_bucket.as_str()).is_ok(),
        )?;
        Self::ensure_known(
            "screenTimeBucket",
            &response.screen_time_bucket,
            ScreenTimeBucket::try_from(response.screen_time_bucket.as_str()).is_ok(),
        )?;
        Self::ensure_known(
            "writtenPerformance",
            &response.written_performance,
            PerformanceLevel::try_from(response.written_performance.as_str()).is_ok(),
        )?;
        Self::ensure_known(
            "oralPerformance",
            &response.oral_performance,
            PerformanceLevel::try_from(response.oral_performance.as_str()).is_ok(),
        )?;
        Self::ensure_known(
            "mostCommonGrade",
            &response.most_common_grade,
            GradeLabel::try_from(response.most_common_grade.as_str()).is_ok(),
        )?;

        self.store.append(response.clone())?;
        info!(
            target: "app::survey",
            sleep_bucket = %response.sleep_bucket,
            grade = %response.most_common_grade,
            "survey response stored"
        );

        Ok(response)
    }

    /// The full collection in insertion order.
    pub fn list(&self) -> AppResult<Vec<SurveyResponse>> {
        self.store.load()
    }

    /// Deletes every stored response.
    pub fn reset(&self) -> AppResult<ResetOutcome> {
        let removed = self.store.clear()?;
        info!(target: "app::survey", removed, "survey store reset");
        Ok(ResetOutcome { removed })
    }

    fn ensure_known(field: &'static str, value: &str, known: bool) -> AppResult<()> {
        if known {
            return Ok(());
        }

        Err(AppError::validation_with_details(
            format!("unknown value for {field}"),
            json!({ "field": field, "value": value }),
        ))
    }
}
