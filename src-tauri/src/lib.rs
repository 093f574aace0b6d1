pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Arc;

use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    if let Err(error) = try_run() {
        eprintln!("failed to launch application: {error}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let handle = app.handle();

            crate::utils::logger::init_logging(&handle)
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

            let mut data_dir = handle
                .path()
                .app_data_dir()
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

            std::fs::create_dir_all(&data_dir)?;
            data_dir.push("responses.json");

            let store = crate::storage::JsonResponseStore::new(&data_dir)
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

            let state =
                crate::commands::AppState::new(Arc::new(store) as Arc<dyn crate::storage::ResponseStore>);
            app.manage(state);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            crate::commands::survey::survey_submit,
            crate::commands::survey::survey_list,
            crate::commands::survey::survey_reset,
            crate::commands::analytics::analytics_overview,
            crate::commands::analytics::analytics_grade_distribution,
            crate::commands::analytics::analytics_score_pairs,
            crate::commands::analytics::analytics_mean_grade_by_sleep,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
