use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use thiserror::Error;
use url::Url;

use super::mood::{Language, MoodLabel};

/// Curated fact base bundled into the binary at compile time
const CATALOG_JSON: &str = include_str!("catalog.json");

/// A single song within a curated playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
}

/// One curated playlist for a mood/language pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub name: String,
    pub link: String, // external Spotify URL, opened by the user
    pub tracks: Vec<Track>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no {language} playlist defined for mood '{mood}'")]
    MissingEntry { mood: MoodLabel, language: Language },
    #[error("{language} playlist for mood '{mood}' has an empty name")]
    EmptyName { mood: MoodLabel, language: Language },
    #[error("playlist '{name}' has an unusable link: {link}")]
    BadLink { name: String, link: String },
    #[error("playlist '{name}' lists no tracks")]
    NoTracks { name: String },
    #[error("playlist '{name}' has a track with an empty title or artist")]
    EmptyTrackField { name: String },
}

/// Read-only lookup table from (mood, language) to a curated playlist.
/// Built once at startup; lookups never mutate it.
#[derive(Debug, Clone)]
pub struct RecommendationTable {
    entries: HashMap<(MoodLabel, Language), PlaylistRecord>,
}

impl RecommendationTable {
    /// Build the table from the bundled catalog and require full coverage
    /// of every mood/language pair
    pub fn embedded() -> Result<Self, CatalogError> {
        let table = Self::from_json(CATALOG_JSON)?;
        table.verify_complete()?;
        Ok(table)
    }

    /// Parse a catalog from JSON, validating each record individually.
    /// Coverage is not checked here; callers that need the full grid run
    /// `verify_complete` afterwards.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<MoodLabel, HashMap<Language, PlaylistRecord>> =
            serde_json::from_str(json)?;

        let mut entries = HashMap::new();
        for (mood, by_language) in raw {
            for (language, record) in by_language {
                validate_record(mood, language, &record)?;
                entries.insert((mood, language), record);
            }
        }

        Ok(Self { entries })
    }

    /// Fail with the first missing mood/language pair, if any
    pub fn verify_complete(&self) -> Result<(), CatalogError> {
        for mood in MoodLabel::iter() {
            for language in Language::iter() {
                if !self.entries.contains_key(&(mood, language)) {
                    return Err(CatalogError::MissingEntry { mood, language });
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, mood: MoodLabel, language: Language) -> Option<&PlaylistRecord> {
        self.entries.get(&(mood, language))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reject records that would render as broken output later
fn validate_record(
    mood: MoodLabel,
    language: Language,
    record: &PlaylistRecord,
) -> Result<(), CatalogError> {
    if record.name.trim().is_empty() {
        return Err(CatalogError::EmptyName { mood, language });
    }

    let link_ok = Url::parse(&record.link)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);
    if !link_ok {
        return Err(CatalogError::BadLink {
            name: record.name.clone(),
            link: record.link.clone(),
        });
    }

    if record.tracks.is_empty() {
        return Err(CatalogError::NoTracks {
            name: record.name.clone(),
        });
    }

    if record
        .tracks
        .iter()
        .any(|t| t.title.trim().is_empty() || t.artist.trim().is_empty())
    {
        return Err(CatalogError::EmptyTrackField {
            name: record.name.clone(),
        });
    }

    Ok(())
}
