pub mod config;
pub mod database;
pub mod error;
pub mod fairings;
pub mod models;
pub mod routes;
pub mod schema;
pub mod state;

use rocket::Config;
use rocket_cors::{AllowedOrigins, CorsOptions};
use std::sync::Arc;

pub use config::AppConfig;
pub use database::DatabaseService;
pub use error::ApiError;
pub use fairings::RequestLogger;
pub use state::AppState;

pub fn create_rocket(
    config: AppConfig,
) -> Result<rocket::Rocket<rocket::Build>, Box<dyn std::error::Error>> {
    // Opens the database and applies pending migrations
    let database = Arc::new(DatabaseService::new(&config.database_url)?);

    // Cross-origin requests are allowed from anywhere
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .to_cors()?;

    let rocket_config = Config {
        port: config.port,
        address: config.host.parse()?,
        ..Config::default()
    };

    let state = AppState { database };

    Ok(rocket::custom(&rocket_config)
        .manage(state)
        .attach(cors)
        .attach(RequestLogger)
        .mount("/", routes::get_routes())
        .register("/", routes::catchers::get_catchers()))
}
