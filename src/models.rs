use serde::Deserialize;
use std::collections::HashMap;

/// Response structure for the /analyze API call
#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub results: Vec<FaceAnalysis>,
}

/// Analysis block for one detected face
#[derive(Debug, Deserialize)]
pub struct FaceAnalysis {
    /// Label-to-score map as emitted by the service; scores are percentages
    #[serde(default)]
    pub emotion: HashMap<String, f64>,
    pub dominant_emotion: Option<String>,
    pub face_confidence: Option<f64>,
}

/// One labelled emotion score, flattened out of the per-face map
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScore {
    pub label: String,
    pub score: f64,
}

impl FaceAnalysis {
    /// Flatten the emotion map into labelled scores. Order is unspecified;
    /// callers rank by score themselves.
    pub fn score_list(&self) -> Vec<EmotionScore> {
        self.emotion
            .iter()
            .map(|(label, score)| EmotionScore {
                label: label.clone(),
                score: *score,
            })
            .collect()
    }
}
