//! Deterministic asset filenames.

use sha2::{Digest, Sha256};

use crate::resolve_file_extension;

/// Extension used when neither the URL nor the MIME type names one.
pub const DEFAULT_EXTENSION: &str = "bin";

/// Deterministic asset filename: `{asset_folder}/{short_hash(url)}.{ext}`.
///
/// The same URL always maps to the same name, so a resource embedded twice
/// collapses to one task when the set is deduplicated.
pub fn asset_filename(asset_folder: &str, url: &str, mime_type: Option<&str>) -> String {
    let ext = resolve_file_extension(Some(url), mime_type)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    let name = format!("{}.{ext}", short_hash(url));
    let folder = asset_folder.trim_matches(&['/', '\\'][..]);
    if folder.is_empty() {
        name
    } else {
        format!("{folder}/{name}")
    }
}

fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(16);
    for byte in digest.iter().take(8) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
