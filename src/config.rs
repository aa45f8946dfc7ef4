use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// When true, the error-translation layer logs the detail of
    /// unexpected failures. The detail never reaches a response body.
    pub log_unexpected_errors: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);
        let log_unexpected_errors = std::env::var("ENABLE_GLOBAL_ERROR_LOGGING")
            .map(|v| v == "true")
            .unwrap_or(false);
        Ok(Self {
            database_url,
            host,
            port,
            log_unexpected_errors,
        })
    }
}
