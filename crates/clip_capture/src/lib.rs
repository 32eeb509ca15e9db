//! Clip capture: per-node embed policy and the session collaborators it relies on.
mod config;
mod embed;
mod filter;
mod node;
mod request;

pub use config::{
    load_config, CaptureConfig, ConfigError, EmbedCaptureMode, ReferrerPolicy,
    DEFAULT_EMBED_FILTER,
};
pub use embed::{CaptureSession, EmbedOutcome};
pub use filter::{FilterMatcher, SignatureFilter, AUDIOS_FILTER, IMAGES_FILTER, VIDEOS_FILTER};
pub use node::{EmbedNode, SnapshotNode};
pub use request::SessionRequestParams;
