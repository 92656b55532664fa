use log::info;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub host: String,
    pub data_dir: String,
    pub database_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            data_dir: "./data".to_string(),
            database_url: "./data/app.sqlite".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("GEARLOCKER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .unwrap_or(8000);

        let host = env::var("GEARLOCKER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let data_dir = env::var("GEARLOCKER_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let database_url = env::var("GEARLOCKER_DATABASE_URL")
            .unwrap_or_else(|_| format!("{data_dir}/app.sqlite"));

        info!("Configuration loaded:");
        info!("  Host: {host}");
        info!("  Port: {port}");
        info!("  Data Directory: {data_dir}");
        info!("  Database URL: {database_url}");

        Self {
            port,
            host,
            data_dir,
            database_url,
        }
    }

    /// Same as the defaults, but with the database at `database_url`.
    pub fn with_database(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }
}
