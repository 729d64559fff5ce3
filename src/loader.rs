//! Image loading: the one asynchronous boundary in the editor
//!
//! Decoding runs off the event loop on the blocking pool; nothing touches
//! the polygon until the decoded image is installed into the session via
//! [`crate::session::EditorSession::install_image`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

/// A decoded RGBA image ready to be installed into a session
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub rgba: RgbaImage,
}

impl LoadedImage {
    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.rgba.height()
    }
}

/// Decode the image at `path` into RGBA8 without blocking the caller
pub async fn load_image(path: impl AsRef<Path>) -> anyhow::Result<LoadedImage> {
    let path: PathBuf = path.as_ref().to_owned();
    tokio::task::spawn_blocking(move || -> anyhow::Result<LoadedImage> {
        let rgba = image::open(&path)
            .with_context(|| format!("failed to decode {}", path.display()))?
            .to_rgba8();
        log::debug!(
            "decoded {}: {}x{} pixels",
            path.display(),
            rgba.width(),
            rgba.height()
        );
        Ok(LoadedImage { rgba })
    })
    .await?
}
