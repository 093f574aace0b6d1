use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::response::SurveyResponse;

/// Append-only store of questionnaire responses. Injected into the services
/// so tests can swap the file-backed store for an in-memory one.
pub trait ResponseStore: Send + Sync {
    /// Returns every persisted response in insertion order. An absent store
    /// is an empty collection, not an error.
    fn load(&self) -> AppResult<Vec<SurveyResponse>>;

    /// Appends one response, rewriting the whole collection.
    fn append(&self, response: SurveyResponse) -> AppResult<()>;

    /// Deletes the whole collection. Idempotent; returns whether anything
    /// existed to delete.
    fn clear(&self) -> AppResult<bool>;
}

/// File-backed store: one pretty-printed JSON array of five-field objects.
/// No in-memory cache is kept, so every operation re-reads the file and the
/// store always reflects the latest successful write.
#[derive(Debug, Clone)]
pub struct JsonResponseStore {
    path: PathBuf,
}

impl JsonResponseStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> AppResult<Self> {
        let path = path.into();
        info!(target: "app::store", store_path = %path.display(), "initializing response store");
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, responses: &[SurveyResponse]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(responses)?;

        // Write-then-rename so an interrupted write cannot truncate the
        // existing collection.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(
            target: "app::store",
            store_path = %self.path.display(),
            count = responses.len(),
            "persisted response collection"
        );
        Ok(())
    }
}

impl ResponseStore for JsonResponseStore {
    fn load(&self) -> AppResult<Vec<SurveyResponse>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(target: "app::store", store_path = %self.path.display(), "no store yet, empty collection");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&content).map_err(|err| {
            AppError::storage(format!(
                "malformed response store at {}: {err}",
                self.path.display()
            ))
        })
    }

    fn append(&self, response: SurveyResponse) -> AppResult<()> {
        let mut responses = self.load()?;
        responses.push(response);
        self.write_all(&responses)
    }

    fn clear(&self) -> AppResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(target: "app::store", store_path = %self.path.display(), "response store deleted");
                Ok(true)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store used by service-level unit tests.
#[derive(Debug, Default)]
pub struct MemoryResponseStore {
    responses: Mutex<Vec<SurveyResponse>>,
}

impl MemoryResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SurveyResponse>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ResponseStore for MemoryResponseStore {
    fn load(&self) -> AppResult<Vec<SurveyResponse>> {
        Ok(self.lock().clone())
    }

    fn append(&self, response: SurveyResponse) -> AppResult<()> {
        self.lock().push(response);
        Ok(())
    }

    fn clear(&self) -> AppResult<bool> {
        let mut responses = self.lock();
        let existed = !responses.is_empty();
        responses.clear();
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn response(sleep: &str, grade: &str) -> SurveyResponse {
        SurveyResponse {
            sleep_bucket: sleep.to_string(),
            screen_time_bucket: "Under 30 min".to_string(),
            written_performance: "Godt".to_string(),
            oral_performance: "Middel".to_string(),
            most_common_grade: grade.to_string(),
        }
    }

    #[test]
    fn load_of_absent_store_is_empty() {
        let dir = tempdir().expect("tempdir");
        let store = JsonResponseStore::new(dir.path().join("responses.json")).expect("store");

        assert_eq!(store.load().expect("load"), Vec::new());
    }

    #[test]
    fn append_then_load_preserves_order() {
        let dir = tempdir().expect("tempdir");
        let store = JsonResponseStore::new(dir.path().join("responses.json")).expect("store");

        store.append(response("<5h", "4")).expect("append");
        store.append(response("7-8h", "12")).expect("append");

        let loaded = store.load().expect("load");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].sleep_bucket, "<5h");
        assert_eq!(loaded[1].sleep_bucket, "7-8h");
    }

    #[test]
    fn persisted_file_is_a_pretty_printed_array() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("responses.json");
        let store = JsonResponseStore::new(&path).expect("store");

        store.append(response("5-6h", "7")).expect("append");

        let content = std::fs::read_to_string(&path).expect("read store file");
        assert!(content.starts_with('['));
        assert!(content.contains("\n  {"), "expected indented objects");
        assert!(content.contains("\"sleepBucket\": \"5-6h\""));
    }

    #[test]
    fn clear_removes_file_and_is_idempotent() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("responses.json");
        let store = JsonResponseStore::new(&path).expect("store");

        store.append(response("7-8h", "10")).expect("append");
        assert!(store.clear().expect("first clear"));
        assert!(!path.exists());

        assert!(!store.clear().expect("second clear"));
        assert_eq!(store.load().expect("load"), Vec::new());
    }

    #[test]
    fn malformed_store_surfaces_storage_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("responses.json");
        std::fs::write(&path, "{ not an array").expect("write garbage");

        let store = JsonResponseStore::new(&path).expect("store");
        let err = store.load().expect_err("malformed store must fail");
        assert!(matches!(err, crate::error::AppError::Storage { .. }));
    }

    #[test]
    fn append_leaves_no_temp_file_behind() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("responses.json");
        let store = JsonResponseStore::new(&path).expect("store");

        store.append(response(">8h", "02")).expect("append");
        assert!(!path.with_extension("json.tmp").exists());
    }
}
