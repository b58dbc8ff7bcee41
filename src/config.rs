use anyhow::Result;
use std::time::Duration;

/// Default analysis service endpoint (its local dev port)
const DEFAULT_EMOTION_API_URL: &str = "http://127.0.0.1:5000";
/// Default per-request timeout for the analysis call, in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub emotion_api_url: String,
    pub emotion_timeout: Duration,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    // Read variables, falling back to local-service defaults
    let emotion_api_url =
        std::env::var("EMOTION_API_URL").unwrap_or_else(|_| DEFAULT_EMOTION_API_URL.to_string());
    let timeout_secs = match std::env::var("EMOTION_API_TIMEOUT_SECS") {
        Ok(raw) => raw.parse::<u64>().map_err(|_| {
            anyhow::anyhow!(
                "EMOTION_API_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
            )
        })?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };
    if timeout_secs == 0 {
        return Err(anyhow::anyhow!("EMOTION_API_TIMEOUT_SECS must be at least 1"));
    }
    Ok(Config {
        emotion_api_url,
        emotion_timeout: Duration::from_secs(timeout_secs),
    })
}
