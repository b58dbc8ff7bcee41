use thiserror::Error;

use super::catalog::{PlaylistRecord, RecommendationTable};
use super::mood::{Language, MoodLabel};

/// Why a lookup produced no recommendation. These are expected outcomes
/// rather than faults; the messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("Please select your mood (or upload a selfie) and a language to get recommendations.")]
    IncompleteSelection,
    #[error("Sorry, no playlist found for mood '{0}'.")]
    UnknownMood(String),
    #[error("Sorry, no {language} playlist found for mood '{mood}'.")]
    UnknownLanguageForMood { mood: MoodLabel, language: Language },
}

/// Pure lookup from a (mood, language) selection to a curated playlist
pub struct PlaylistSelector<'a> {
    table: &'a RecommendationTable,
}

impl<'a> PlaylistSelector<'a> {
    pub fn new(table: &'a RecommendationTable) -> Self {
        PlaylistSelector { table }
    }

    /// Look up the playlist for a selection. The mood arrives as raw text
    /// so out-of-set labels can be reported back; matching itself is
    /// case-insensitive. Both halves must be present.
    pub fn select(
        &self,
        mood: Option<&str>,
        language: Option<Language>,
    ) -> Result<&'a PlaylistRecord, NotFound> {
        let (Some(mood_raw), Some(language)) = (mood, language) else {
            return Err(NotFound::IncompleteSelection);
        };

        let mood: MoodLabel = mood_raw
            .parse()
            .map_err(|_| NotFound::UnknownMood(mood_raw.to_string()))?;

        self.table
            .get(mood, language)
            .ok_or(NotFound::UnknownLanguageForMood { mood, language })
    }
}
