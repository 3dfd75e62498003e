use thiserror::Error;

/// Everything that can go wrong between the UI and the Gemini service.
///
/// Failures in `analyze`/`send` never escape the client boundary as errors;
/// they are rendered into the transcript as assistant text. This type is the
/// tagged form they take on the inside.
#[derive(Debug, Error)]
pub enum InspectorError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("could not decode image: {0}")]
    ImageDecode(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl InspectorError {
    pub fn config(msg: impl Into<String>) -> Self {
        InspectorError::Config(msg.into())
    }

    pub fn image_decode(msg: impl Into<String>) -> Self {
        InspectorError::ImageDecode(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        InspectorError::Transport(msg.into())
    }
}

pub type InspectorResult<T> = Result<T, InspectorError>;
