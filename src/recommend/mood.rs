use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The canonical mood categories used as the primary recommendation key.
///
/// This is a closed set: the recommendation table is keyed by it, and the
/// emotion analysis service is expected to emit exactly these labels. Input
/// parsing is case-insensitive; the canonical form is lowercase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MoodLabel {
    Happy,
    Sad,
    Angry,
    Neutral,
    Surprised,
    Fear,
    Disgust,
}

impl MoodLabel {
    /// The canonical lowercase form of this mood
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Emoji accent shown next to the mood in text output
    pub fn emoji(self) -> &'static str {
        match self {
            MoodLabel::Happy => "😄",
            MoodLabel::Sad => "😢",
            MoodLabel::Angry => "😠",
            MoodLabel::Neutral => "😐",
            MoodLabel::Surprised => "😲",
            MoodLabel::Fear => "😨",
            MoodLabel::Disgust => "🤢",
        }
    }
}

/// The music-language categories used as the secondary recommendation key.
/// There is no default: a recommendation requires an explicit choice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    ValueEnum,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    Hindi,
    English,
    Punjabi,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
