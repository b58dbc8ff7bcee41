use super::mood::{Language, MoodLabel};
use super::resolver::{MoodSource, Resolution};

/// Lifecycle of a selection, derived from what has been chosen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoSelection,
    MoodSelected,
    Ready,
}

/// The user's current choices. Mood and language are independent; either
/// can be changed at any time, always by replacing the previous value.
#[derive(Debug, Default)]
pub struct SessionSelection {
    mood: Option<MoodLabel>,
    source: MoodSource,
    language: Option<Language>,
}

impl SessionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a manually picked mood, replacing any earlier mood
    pub fn choose_mood(&mut self, mood: MoodLabel) {
        self.mood = Some(mood);
        self.source = MoodSource::Manual;
    }

    /// Record a detected mood. Last write wins; there is no undo back
    /// to an earlier manual choice.
    pub fn record_detection(&mut self, mood: MoodLabel) {
        self.mood = Some(mood);
        self.source = MoodSource::Detected;
    }

    pub fn choose_language(&mut self, language: Language) {
        self.language = Some(language);
    }

    /// Fold a resolution outcome into the session
    pub fn apply(&mut self, resolution: &Resolution) {
        match (resolution.mood, resolution.source) {
            (Some(mood), MoodSource::Detected) => self.record_detection(mood),
            (Some(mood), MoodSource::Manual) => self.choose_mood(mood),
            _ => {}
        }
    }

    pub fn mood(&self) -> Option<MoodLabel> {
        self.mood
    }

    pub fn source(&self) -> MoodSource {
        self.source
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Current lifecycle state; a language alone does not leave NoSelection
    pub fn state(&self) -> SessionState {
        match (self.mood, self.language) {
            (Some(_), Some(_)) => SessionState::Ready,
            (Some(_), None) => SessionState::MoodSelected,
            (None, _) => SessionState::NoSelection,
        }
    }
}
