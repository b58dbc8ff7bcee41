use crate::client::{DetectionError, EmotionClassifier};

use super::mood::MoodLabel;

/// Where the effective mood came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoodSource {
    Manual,
    Detected,
    #[default]
    None,
}

/// Outcome of one resolution pass: the mood to use (if any), where it
/// came from, and the detection failure to surface (if one happened)
#[derive(Debug)]
pub struct Resolution {
    pub mood: Option<MoodLabel>,
    pub source: MoodSource,
    pub detection_error: Option<DetectionError>,
}

impl Resolution {
    /// Resolution from the manual choice alone, with no detection involved
    pub fn from_manual(manual: Option<MoodLabel>) -> Self {
        let source = if manual.is_some() {
            MoodSource::Manual
        } else {
            MoodSource::None
        };
        Resolution {
            mood: manual,
            source,
            detection_error: None,
        }
    }
}

/// Combines a manual mood choice with photo-based detection.
/// A successful detection always wins over the manual choice.
pub struct MoodResolver<'a> {
    classifier: &'a dyn EmotionClassifier,
}

impl<'a> MoodResolver<'a> {
    pub fn new(classifier: &'a dyn EmotionClassifier) -> Self {
        MoodResolver { classifier }
    }

    /// Resolve the effective mood. A photo's detected mood overrides the
    /// manual choice; when detection fails the manual choice (if any)
    /// stands and the failure is carried along in the result.
    pub fn resolve(&self, manual: Option<MoodLabel>, image: Option<&[u8]>) -> Resolution {
        let Some(image) = image else {
            return Resolution::from_manual(manual);
        };

        match self.detect(image) {
            Ok(mood) => Resolution {
                mood: Some(mood),
                source: MoodSource::Detected,
                detection_error: None,
            },
            Err(err) => {
                let mut fallback = Resolution::from_manual(manual);
                fallback.detection_error = Some(err);
                fallback
            }
        }
    }

    /// Run the classifier and pick the highest-scoring label
    fn detect(&self, image: &[u8]) -> Result<MoodLabel, DetectionError> {
        let scores = self.classifier.classify(image)?;

        let top = scores
            .into_iter()
            .max_by(|a, b| {
                a.score
                    .partial_cmp(&b.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .ok_or(DetectionError::EmptyResult)?;

        match top.label.parse::<MoodLabel>() {
            Ok(mood) => {
                tracing::info!(mood = %mood, score = top.score, "detected mood from photo");
                Ok(mood)
            }
            Err(_) => {
                // Contract drift: the service label set and the canonical
                // set are supposed to be identical
                tracing::warn!(
                    label = %top.label,
                    "analysis returned a label outside the canonical mood set"
                );
                Err(DetectionError::UnsupportedLabel(top.label))
            }
        }
    }
}
