//! Clip export: cut the polygon region out of the image and save it as PNG
//!
//! The exported raster matches the display surface size; pixels inside the
//! polygon equal the source image and everything outside is transparent.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;
use tiny_skia::{FillRule, FilterQuality, Paint, Pattern, Pixmap, SpreadMode, Transform};

use crate::config::SaveLocation;
use crate::domain::Polygon;
use crate::render;
use crate::session::state::EditorSession;

/// Cut the polygon's interior out of `img`
///
/// Fills the polygon path with the source image as a pattern on a
/// transparent canvas, then converts the premultiplied result back to
/// straight RGBA.
pub fn clip_to_polygon(img: &RgbaImage, polygon: &Polygon) -> anyhow::Result<RgbaImage> {
    let (w, h) = (img.width(), img.height());
    let source = render::image::image_pixmap(img).context("image has zero size")?;
    let mut out = Pixmap::new(w, h).context("image has zero size")?;

    if let Some(path) = render::image::polygon_path(polygon) {
        let paint = Paint {
            shader: Pattern::new(
                source.as_ref(),
                SpreadMode::Pad,
                FilterQuality::Nearest,
                1.0,
                Transform::identity(),
            ),
            anti_alias: true,
            ..Paint::default()
        };
        out.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    let mut rgba = Vec::with_capacity(w as usize * h as usize * 4);
    for px in out.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(w, h, rgba).context("clipped buffer size mismatch")
}

/// Encode an RGBA image as an 8-bit PNG
pub fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}

/// Directory exported clips land in for `location`
pub fn save_dir(location: SaveLocation) -> Option<PathBuf> {
    match location {
        SaveLocation::Pictures => {
            dirs::picture_dir().or_else(|| dirs::home_dir().map(|h| h.join("Pictures")))
        }
        SaveLocation::Documents => {
            dirs::document_dir().or_else(|| dirs::home_dir().map(|h| h.join("Documents")))
        }
    }
}

/// Clip the session's image with its polygon and write the PNG into `dir`
///
/// Fails when no image has been loaded yet. The file is written to a
/// temporary name first and only moved into place once fully encoded.
pub fn export_clip_to(session: &EditorSession, dir: &Path) -> anyhow::Result<PathBuf> {
    let img = session.image().context("no image loaded")?;
    let clipped = clip_to_polygon(img, session.polygon())?;

    std::fs::create_dir_all(dir)?;
    let name = chrono::Local::now()
        .format("Clip_%Y-%m-%d_%H-%M-%S.png")
        .to_string();
    let target = dir.join(name);

    let mut file = tempfile::Builder::new()
        .prefix("clip-")
        .suffix(".png")
        .tempfile_in(dir)?;
    write_png(&mut file, &clipped)?;
    file.persist(&target)?;
    log::debug!("exported clip to {}", target.display());

    Ok(target)
}

/// Clip and save under the user's configured save location
pub fn export_clip(session: &EditorSession, location: SaveLocation) -> anyhow::Result<PathBuf> {
    let dir = save_dir(location).context("no usable save directory")?;
    export_clip_to(session, &dir)
}
