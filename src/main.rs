use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

mod client;
mod config;
mod models;
mod recommend;
mod spotify;


use crate::client::EmotionApiClient;
use crate::config::load_config;
use crate::recommend::{
    Language, MoodLabel, MoodResolver, MoodSource, PlaylistRecord, PlaylistSelector,
    RecommendationTable, Resolution, SessionSelection,
};
use crate::spotify::{SpotifyAuth, SpotifyConfig, TOKEN_CACHE_PATH};

#[derive(Parser)]
#[command(name = "moodtunes")]
#[command(about = "Mood-based playlist recommendations for Hindi, English and Punjabi music")]
#[command(version)]
struct Args {
    /// Mood to use: happy, sad, angry, neutral, surprised, fear or disgust
    #[arg(short = 'm', long = "mood")]
    mood: Option<String>,

    /// Music language for the recommendation
    #[arg(short = 'l', long = "language", value_enum, ignore_case = true)]
    language: Option<Language>,

    /// Photo to analyze; a successfully detected mood overrides --mood
    #[arg(short = 'p', long = "photo")]
    photo: Option<PathBuf>,

    /// Print the recommendation as JSON instead of text
    #[arg(long = "json")]
    json: bool,

    /// Print the Spotify authorization URL and exit
    #[arg(long = "spotify-auth-url")]
    spotify_auth_url: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging();

    if args.spotify_auth_url {
        return print_spotify_auth_url();
    }

    // Build the recommendation table up front; an incomplete catalog is a
    // packaging mistake and stops the program before any interaction
    let table =
        RecommendationTable::embedded().context("bundled recommendation catalog is invalid")?;
    tracing::debug!(entries = table.len(), "recommendation table ready");
    let selector = PlaylistSelector::new(&table);

    // clap already rejects unknown languages; the mood stays free text so
    // an out-of-set label surfaces as a normal not-found outcome below
    let manual_choice: Option<MoodLabel> = args.mood.as_deref().and_then(|raw| raw.parse().ok());

    let mut session = SessionSelection::new();
    if let Some(language) = args.language {
        session.choose_language(language);
    }

    let resolution = match &args.photo {
        Some(path) => {
            let image = std::fs::read(path)
                .with_context(|| format!("could not read photo '{}'", path.display()))?;
            let config = load_config()?;
            let client = EmotionApiClient::new(&config);
            let resolver = MoodResolver::new(&client);

            println!("🔍 Analyzing your photo...");
            resolver.resolve(manual_choice, Some(image.as_slice()))
        }
        None => Resolution::from_manual(manual_choice),
    };

    match (&resolution.detection_error, resolution.source) {
        (None, MoodSource::Detected) => {
            if let Some(mood) = resolution.mood {
                println!("✓ Detected mood: {} {}", mood.as_str(), mood.emoji());
            }
        }
        (Some(err), _) => {
            println!("✗ Could not analyze the photo: {err}");
            match resolution.mood {
                Some(mood) => println!("  Keeping your manual choice: {}", mood.as_str()),
                None => println!("  You can try another photo or pick a mood with --mood."),
            }
        }
        _ => {}
    }

    session.apply(&resolution);
    tracing::debug!(state = ?session.state(), "session after resolution");

    // Fall back to the raw flag text when nothing resolved, so an
    // out-of-set mood like "ecstatic" is reported back by name
    let mood_arg = session
        .mood()
        .map(MoodLabel::as_str)
        .or(args.mood.as_deref());

    match selector.select(mood_arg, session.language()) {
        Ok(record) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                print_recommendation(record, &session);
            }
        }
        Err(reason) => {
            // Not-found outcomes are prompts for the user, not failures
            println!("{reason}");
        }
    }

    Ok(())
}

/// Route diagnostics to stderr so piped stdout stays clean
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodtunes=info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print the authorization URL for linking a Spotify account
fn print_spotify_auth_url() -> Result<()> {
    let config = SpotifyConfig::load()?;
    let auth = SpotifyAuth::new(config);
    let state = SpotifyAuth::generate_state();

    println!("Open this URL in your browser to authorize Spotify access:");
    println!("{}", auth.authorize_url(&state));
    println!("\nAfter authorizing, tokens are cached in '{TOKEN_CACHE_PATH}'.");
    Ok(())
}

fn print_recommendation(record: &PlaylistRecord, session: &SessionSelection) {
    if let (Some(mood), Some(language)) = (session.mood(), session.language()) {
        let source_note = match session.source() {
            MoodSource::Detected => " (detected from your photo)",
            _ => "",
        };
        println!("\nMood: {} {}{}", mood.as_str(), mood.emoji(), source_note);
        println!("Language: {}", language.as_str());
    }

    println!("\n🎵 {}", record.name);
    println!("{}", "=".repeat(record.name.len()));
    for (i, track) in record.tracks.iter().enumerate() {
        println!("  {}. \"{}\" by {}", i + 1, track.title, track.artist);
    }
    println!("\nOpen on Spotify: {}", record.link);
}
