use crate::database::DatabaseService;
use crate::error::ApiError;
use std::sync::Arc;

#[derive(Debug)]
pub struct AppState {
    pub database: Arc<DatabaseService>,
}

impl AppState {
    /// Runs `work` against the store on the blocking thread pool, so pool
    /// checkout retries and SQLite I/O never park an async worker.
    pub async fn with_store<T, F>(&self, work: F) -> Result<T, ApiError>
    where
        F: FnOnce(&DatabaseService) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let database = Arc::clone(&self.database);
        rocket::tokio::task::spawn_blocking(move || work(database.as_ref()))
            .await
            .map_err(|e| ApiError::InternalServerError(format!("Store task failed: {e}")))?
    }
}
