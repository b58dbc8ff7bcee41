use crate::config::Config;
use crate::models::{AnalyzeResponse, EmotionScore};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use ureq::Agent;

/// Ways a detection attempt can fail. All of these are recoverable:
/// the caller keeps whatever mood was chosen manually.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("analysis service returned status {status}: {message}")]
    Service { status: u16, message: String },
    #[error("could not reach the analysis service: {0}")]
    Transport(String),
    #[error("no face could be detected in the photo")]
    NoFace,
    #[error("unsupported image format, use a JPEG or PNG photo")]
    UnsupportedImage,
    #[error("analysis returned unrecognized mood label '{0}'")]
    UnsupportedLabel(String),
    #[error("could not make sense of the analysis response: {0}")]
    MalformedResponse(String),
    #[error("analysis returned no emotion scores")]
    EmptyResult,
}

/// Anything that can turn a photo into labelled emotion scores
#[cfg_attr(test, mockall::automock)]
pub trait EmotionClassifier {
    fn classify(&self, image: &[u8]) -> Result<Vec<EmotionScore>, DetectionError>;
}

/// HTTP client for the facial emotion analysis service
pub struct EmotionApiClient {
    agent: Agent,
    base_url: String,
}

impl EmotionApiClient {
    /// Create a new client with configuration from environment
    pub fn new(config: &Config) -> Self {
        // The analysis call runs a neural net server-side; cap how long
        // we are willing to block on it
        let agent = ureq::AgentBuilder::new()
            .timeout(config.emotion_timeout)
            .build();

        EmotionApiClient {
            agent,
            base_url: config.emotion_api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl EmotionClassifier for EmotionApiClient {
    fn classify(&self, image: &[u8]) -> Result<Vec<EmotionScore>, DetectionError> {
        let img = data_uri(image)?;
        let url = format!("{}/analyze", self.base_url);

        tracing::debug!(url = %url, bytes = image.len(), "sending photo for emotion analysis");

        // Send POST request
        let response = self
            .agent
            .post(&url)
            .send_json(serde_json::json!({
                "img": img,
                "actions": ["emotion"],
            }))
            .map_err(map_request_error)?;

        let response_text = response
            .into_string()
            .map_err(|e| DetectionError::MalformedResponse(e.to_string()))?;

        // Parse JSON response
        let parsed: AnalyzeResponse = serde_json::from_str(&response_text)
            .map_err(|e| DetectionError::MalformedResponse(e.to_string()))?;

        // The service analyzes every face it finds; only the first is used
        let Some(face) = parsed.results.into_iter().next() else {
            return Err(DetectionError::NoFace);
        };

        tracing::debug!(
            dominant = face.dominant_emotion.as_deref().unwrap_or("?"),
            confidence = ?face.face_confidence,
            "analysis response parsed"
        );

        let scores = face.score_list();
        if scores.is_empty() {
            return Err(DetectionError::EmptyResult);
        }
        Ok(scores)
    }
}

/// Encode raw photo bytes as the data URI the service expects.
/// Only JPEG and PNG photos are accepted.
pub(crate) fn data_uri(image: &[u8]) -> Result<String, DetectionError> {
    let mime = match infer::get(image) {
        Some(kind) if matches!(kind.mime_type(), "image/jpeg" | "image/png") => kind.mime_type(),
        _ => return Err(DetectionError::UnsupportedImage),
    };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(image)))
}

fn map_request_error(err: ureq::Error) -> DetectionError {
    match err {
        ureq::Error::Status(status, response) => {
            let message = response.into_string().unwrap_or_default();
            // The service reports an undetectable face as a client error
            if status == 400 && message.to_lowercase().contains("face could not be detected") {
                DetectionError::NoFace
            } else {
                DetectionError::Service { status, message }
            }
        }
        ureq::Error::Transport(transport) => DetectionError::Transport(transport.to_string()),
    }
}
