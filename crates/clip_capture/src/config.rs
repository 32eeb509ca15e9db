//! Capture settings, loaded from RON.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use clip_logging::{clip_info, clip_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::IMAGES_FILTER;

/// Filter used in `filter` mode when the configuration names none.
pub const DEFAULT_EMBED_FILTER: &str = IMAGES_FILTER;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// How embed nodes are resolved during a capture.
///
/// Any unrecognised mode name reads as [`EmbedCaptureMode::Filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmbedCaptureMode {
    SaveImage,
    SaveAll,
    Remove,
    #[default]
    Filter,
}

impl EmbedCaptureMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedCaptureMode::SaveImage => "saveImage",
            EmbedCaptureMode::SaveAll => "saveAll",
            EmbedCaptureMode::Remove => "remove",
            EmbedCaptureMode::Filter => "filter",
        }
    }
}

impl From<&str> for EmbedCaptureMode {
    fn from(value: &str) -> Self {
        match value {
            "saveImage" => EmbedCaptureMode::SaveImage,
            "saveAll" => EmbedCaptureMode::SaveAll,
            "remove" => EmbedCaptureMode::Remove,
            "filter" => EmbedCaptureMode::Filter,
            other => {
                clip_warn!("unknown embed capture mode {:?}, using filter", other);
                EmbedCaptureMode::Filter
            }
        }
    }
}

impl From<String> for EmbedCaptureMode {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<EmbedCaptureMode> for String {
    fn from(mode: EmbedCaptureMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for EmbedCaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which part of the page URL is sent as `Referer` with resource requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferrerPolicy {
    NoReferrer,
    Origin,
    #[default]
    StrictOriginWhenCrossOrigin,
    UnsafeUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub embed_capture_mode: EmbedCaptureMode,
    /// Filter expression used in `filter` mode.
    pub embed_filter: String,
    /// Folder, relative to the clip folder, that receives fetched resources.
    pub asset_folder: String,
    pub request_timeout_secs: u32,
    pub request_max_attempts: u32,
    pub user_agent: Option<String>,
    pub referrer_policy: ReferrerPolicy,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            embed_capture_mode: EmbedCaptureMode::default(),
            embed_filter: DEFAULT_EMBED_FILTER.to_string(),
            asset_folder: "assets".to_string(),
            request_timeout_secs: 40,
            request_max_attempts: 3,
            user_agent: None,
            referrer_policy: ReferrerPolicy::default(),
        }
    }
}

impl CaptureConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: CaptureConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be positive".into(),
            ));
        }
        if self.request_max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "request_max_attempts must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a RON capture configuration.
pub fn load_config(path: &Path) -> Result<CaptureConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    let config = CaptureConfig::from_ron_str(&text)?;
    clip_info!(
        "Loaded capture config from {:?} (embed mode {})",
        path,
        config.embed_capture_mode
    );
    Ok(config)
}
