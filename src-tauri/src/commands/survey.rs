use tauri::{async_runtime, State};

use crate::commands::{AppState, CommandError, CommandResult};
use crate::error::AppError;
use crate::models::response::{SurveyDraft, SurveyResponse};
use crate::services::survey_service::ResetOutcome;

#[tauri::command]
pub async fn survey_submit(
    state: State<'_, AppState>,
    draft: SurveyDraft,
) -> CommandResult<SurveyResponse> {
    let app_state = state.inner().clone();

    run_blocking(move || app_state.survey().submit(draft)).await
}

#[tauri::command]
pub async fn survey_list(state: State<'_, AppState>) -> CommandResult<Vec<SurveyResponse>> {
    let app_state = state.inner().clone();

    run_blocking(move || app_state.survey().list()).await
}

#[tauri::command]
pub async fn survey_reset(state: State<'_, AppState>) -> CommandResult<ResetOutcome> {
    let app_state = state.inner().clone();

    run_blocking(move || app_state.survey().reset()).await
}

async fn run_blocking<T: Send + 'static>(
    task: impl FnOnce() -> Result<T, AppError> + Send + 'static,
) -> CommandResult<T> {
    async_runtime::spawn_blocking(task)
        .await
        .map_err(|err| CommandError::new("UNKNOWN", format!("survey task failed: {err}"), None))?
        .map_err(CommandError::from)
}
