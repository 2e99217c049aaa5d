//! Raster image embedding
//!
//! Rewrites `<image>` references to local raster files as base64 `data:` URIs
//! so an exported SVG no longer depends on files next to the source document.

use super::node::ElementNode;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};

const HREF_ATTRIBUTES: [&str; 2] = ["href", "xlink:href"];

/// Embed every linked local raster image under `root`
///
/// Relative references resolve against `base_dir`. Unreadable files and
/// unsupported formats are logged and left linked.
///
/// Returns the number of references that were embedded.
pub fn embed_raster_images(root: &mut ElementNode, base_dir: Option<&Path>) -> usize {
    let mut embedded = 0;

    root.walk_mut(&mut |element| {
        if element.local_name() != "image" {
            return;
        }
        for key in HREF_ATTRIBUTES {
            let Some(href) = element.attr(key).map(|v| v.into_owned()) else {
                continue;
            };
            if let Some(data_uri) = to_data_uri(&href, base_dir) {
                element.set_attr(key, &data_uri);
                embedded += 1;
            }
        }
    });

    if embedded > 0 {
        tracing::debug!(count = embedded, "Embedded raster images");
    }
    embedded
}

fn to_data_uri(href: &str, base_dir: Option<&Path>) -> Option<String> {
    if href.starts_with("data:") || (href.contains("://") && !href.starts_with("file://")) {
        return None;
    }

    let path = resolve_path(href.trim_start_matches("file://"), base_dir);
    let Some(mime) = mime_type(&path) else {
        tracing::debug!(href = %href, "Skipping image with unsupported format");
        return None;
    };

    match std::fs::read(&path) {
        Ok(bytes) => Some(format!("data:{mime};base64,{}", STANDARD.encode(bytes))),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to read linked image, leaving it linked"
            );
            None
        }
    }
}

fn resolve_path(reference: &str, base_dir: Option<&Path>) -> PathBuf {
    let path = PathBuf::from(reference);
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    }
}

fn mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}
