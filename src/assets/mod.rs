use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec {
    pub file_name: &'static str,
    pub caption: &'static str,
}

pub const FLOWCHART: ImageSpec = ImageSpec {
    file_name: "flowchart.png",
    caption: "System Architecture",
};

pub const DASHBOARD_PREVIEW: ImageSpec = ImageSpec {
    file_name: "dashboard.png",
    caption: "Dashboard Preview",
};

pub fn builtin_images() -> &'static [ImageSpec] {
    &[FLOWCHART, DASHBOARD_PREVIEW]
}

pub fn find_image(file_name: &str) -> Option<ImageSpec> {
    builtin_images()
        .iter()
        .copied()
        .find(|spec| spec.file_name == file_name)
}

#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a recognized image")]
    NotAnImage { path: PathBuf },
}

/// Reads an image by its fixed file name. The content is sniffed, not the
/// extension, so a JPEG or GIF saved as `flowchart.png` is still shown.
pub fn load_image(dir: &Path, file_name: &str) -> Result<ImageAsset, ImageError> {
    let path = dir.join(file_name);
    let bytes = std::fs::read(&path).map_err(|source| ImageError::Read {
        path: path.clone(),
        source,
    })?;
    let mime_type = match infer::get(&bytes) {
        Some(kind) if kind.matcher_type() == infer::MatcherType::Image => kind.mime_type(),
        _ => return Err(ImageError::NotAnImage { path }),
    };
    Ok(ImageAsset {
        path,
        bytes,
        mime_type,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageSlot {
    Shown { href: String, size_bytes: usize },
    Warning { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagePanel {
    pub file_name: &'static str,
    pub caption: &'static str,
    #[serde(skip)]
    pub source: Option<PathBuf>,
    #[serde(flatten)]
    pub slot: ImageSlot,
}

impl ImagePanel {
    /// Loads `spec` from `dir`. A failed load becomes a warning panel rather
    /// than an error, so the rest of the page still renders.
    pub fn resolve(dir: &Path, spec: ImageSpec, href_prefix: &str) -> Self {
        match load_image(dir, spec.file_name) {
            Ok(asset) => ImagePanel {
                file_name: spec.file_name,
                caption: spec.caption,
                slot: ImageSlot::Shown {
                    href: format!("{href_prefix}{}", spec.file_name),
                    size_bytes: asset.bytes.len(),
                },
                source: Some(asset.path),
            },
            Err(err) => {
                crate::warn!("{err}");
                ImagePanel {
                    file_name: spec.file_name,
                    caption: spec.caption,
                    source: None,
                    slot: ImageSlot::Warning {
                        message: missing_message(spec.file_name),
                    },
                }
            }
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.slot, ImageSlot::Shown { .. })
    }
}

pub fn missing_message(file_name: &str) -> String {
    format!("{file_name} not found. Add it to the assets directory to show it.")
}

/// Both dashboard images, in display order.
pub fn resolve_images(dir: &Path, href_prefix: &str) -> Vec<ImagePanel> {
    builtin_images()
        .iter()
        .map(|spec| ImagePanel::resolve(dir, *spec, href_prefix))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/assets/tests.rs"]
mod tests;
