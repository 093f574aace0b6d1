use tauri::{async_runtime, State};

use crate::commands::{AppState, CommandError, CommandResult};
use crate::error::AppError;
use crate::models::analytics::{AnalyticsOverview, GradeCount, ScorePair, SleepGroupMean};

#[tauri::command]
pub async fn analytics_overview(state: State<'_, AppState>) -> CommandResult<AnalyticsOverview> {
    let app_state = state.inner().clone();

    run_blocking(move || app_state.analytics().overview()).await
}

#[tauri::command]
pub async fn analytics_grade_distribution(
    state: State<'_, AppState>,
) -> CommandResult<Vec<GradeCount>> {
    let app_state = state.inner().clone();

    run_blocking(move || app_state.analytics().grade_distribution_for_store()).await
}

#[tauri::command]
pub async fn analytics_score_pairs(state: State<'_, AppState>) -> CommandResult<Vec<ScorePair>> {
    let app_state = state.inner().clone();

    run_blocking(move || app_state.analytics().score_pairs_for_store()).await
}

#[tauri::command]
pub async fn analytics_mean_grade_by_sleep(
    state: State<'_, AppState>,
) -> CommandResult<Vec<SleepGroupMean>> {
    let app_state = state.inner().clone();

    run_blocking(move || app_state.analytics().mean_grade_by_sleep_for_store()).await
}

async fn run_blocking<T: Send + 'static>(
    task: impl FnOnce() -> Result<T, AppError> + Send + 'static,
) -> CommandResult<T> {
    async_runtime::spawn_blocking(task)
        .await
        .map_err(|err| {
            CommandError::new("UNKNOWN", format!("analytics task failed: {err}"), None)
        })?
        .map_err(CommandError::from)
}
