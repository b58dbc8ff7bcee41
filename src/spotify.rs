use anyhow::{Context, Result};
use rand::Rng;
use rand::distributions::Alphanumeric;
use urlencoding::encode;

/// OAuth scope requested for library reads and playback control
pub const SPOTIFY_SCOPE: &str = "user-library-read user-modify-playback-state";
/// Where the token cache lives once an exchange has happened
pub const TOKEN_CACHE_PATH: &str = ".spotify_cache";

const ACCOUNTS_BASE_URL: &str = "https://accounts.spotify.com";

/// Spotify application credentials loaded from environment variables
#[derive(Debug)]
pub struct SpotifyConfig {
    pub client_id: String,
    /// Held for the token exchange, which happens outside this helper
    #[allow(dead_code)]
    pub client_secret: String,
    pub redirect_uri: String,
}

impl SpotifyConfig {
    /// Load credentials from `.env` and environment
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        let client_id =
            std::env::var("SPOTIFY_CLIENT_ID").context("SPOTIFY_CLIENT_ID is not set")?;
        let client_secret =
            std::env::var("SPOTIFY_CLIENT_SECRET").context("SPOTIFY_CLIENT_SECRET is not set")?;
        let redirect_uri =
            std::env::var("SPOTIFY_REDIRECT_URI").context("SPOTIFY_REDIRECT_URI is not set")?;
        Ok(SpotifyConfig {
            client_id,
            client_secret,
            redirect_uri,
        })
    }
}

/// Builds the user-facing authorization URL for the Spotify account flow
pub struct SpotifyAuth {
    config: SpotifyConfig,
}

impl SpotifyAuth {
    pub fn new(config: SpotifyConfig) -> Self {
        SpotifyAuth { config }
    }

    /// Random state parameter tying the redirect back to this request
    pub fn generate_state() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(16)
            .map(char::from)
            .collect()
    }

    /// The authorization URL the user opens in a browser
    pub fn authorize_url(&self, state: &str) -> String {
        format!(
            "{}/authorize?client_id={}&response_type=code&redirect_uri={}&scope={}&state={}",
            ACCOUNTS_BASE_URL,
            encode(&self.config.client_id),
            encode(&self.config.redirect_uri),
            encode(SPOTIFY_SCOPE),
            encode(state)
        )
    }
}
