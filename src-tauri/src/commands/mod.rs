pub mod analytics;
pub mod survey;

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use tracing::error;

use crate::error::AppError;
use crate::services::analytics_service::AnalyticsService;
use crate::services::survey_service::SurveyService;
use crate::storage::ResponseStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ResponseStore>,
    survey_service: Arc<SurveyService>,
    analytics_service: Arc<AnalyticsService>,
}

impl AppState {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        let survey_service = Arc::new(SurveyService::new(Arc::clone(&store)));
        let analytics_service = Arc::new(AnalyticsService::new(Arc::clone(&store)));

        Self {
            store,
            survey_service,
            analytics_service,
        }
    }

    pub fn survey(&self) -> Arc<SurveyService> {
        Arc::clone(&self.survey_service)
    }

    pub fn analytics(&self) -> Arc<AnalyticsService> {
        Arc::clone(&self.analytics_service)
    }

    pub fn store(&self) -> Arc<dyn ResponseStore> {
        Arc::clone(&self.store)
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl CommandError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<JsonValue>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::IncompleteSubmission { missing } => CommandError::new(
                "INCOMPLETE_SUBMISSION",
                "Udfyld venligst alle spørgsmål, før du indsender.",
                Some(json!({ "missingFields": missing })),
            ),
            AppError::Validation {
                message, details, ..
            } => CommandError::new("VALIDATION_ERROR", message, details),
            AppError::Storage { message } => {
                CommandError::new("STORAGE_READ_ERROR", message, None)
            }
            AppError::Serialization(error) => {
                error!(target: "app::command", error = %error, "serialization error in command");
                CommandError::new("UNKNOWN", "serialization failed", None)
            }
            AppError::Io(error) => {
                error!(target: "app::command", error = %error, "io error in command");
                CommandError::new("UNKNOWN", "file system operation failed", None)
            }
            AppError::Other(message) => {
                error!(target: "app::command", %message, "unexpected error in command");
                CommandError::new("UNKNOWN", message, None)
            }
        }
    }
}
