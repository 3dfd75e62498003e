// src/models.rs

use chrono::{DateTime, Utc};
use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Uppercase label used by the transcript export.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Assistant => "ASSISTANT",
        }
    }
}

/// One entry of the conversation transcript. Immutable once appended.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Message {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Logs details of each API call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCallLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: u16,
    pub response_time_ms: u128,
}

/// The photo currently under inspection: decoded pixels plus metadata.
/// Replaced wholesale on each new upload, never mutated in place.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub image: DynamicImage,
    pub source: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ImageAsset {
    pub fn new(image: DynamicImage, source: &Path) -> Self {
        let width = image.width();
        let height = image.height();
        ImageAsset {
            image,
            source: source.to_path_buf(),
            width,
            height,
        }
    }

    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    /// Short human-readable summary for the UI banner.
    pub fn describe(&self) -> String {
        let color = match self.image.color() {
            image::ColorType::L8 | image::ColorType::L16 => "grayscale",
            image::ColorType::La8 | image::ColorType::La16 => "grayscale+alpha",
            image::ColorType::Rgb8 | image::ColorType::Rgb16 | image::ColorType::Rgb32F => "RGB",
            image::ColorType::Rgba8 | image::ColorType::Rgba16 | image::ColorType::Rgba32F => {
                "RGBA"
            }
            _ => "unknown",
        };
        format!(
            "{} — {}×{} {}",
            self.file_name(),
            self.width,
            self.height,
            color
        )
    }
}
