use crate::state::AppState;
use log::warn;
use rocket::serde::json::Json;
use rocket::{State, get};

#[get("/health")]
pub async fn health_check(state: &State<AppState>) -> Json<serde_json::Value> {
    let database = state
        .with_store(|db| {
            Ok(match db.get_connection() {
                Ok(_) => "ok",
                Err(e) => {
                    warn!("Health check could not reach the database: {e}");
                    "unavailable"
                }
            })
        })
        .await
        .unwrap_or("unavailable");

    Json(serde_json::json!({
        "status": "ok",
        "database": database
    }))
}
