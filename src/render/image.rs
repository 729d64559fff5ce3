//! Scene rendering using tiny-skia
//!
//! Draws the loaded image with the polygon overlay (closed outline plus a
//! handle circle on every vertex) onto a Pixmap the embedding UI can
//! present. Nothing is drawn before an image has been installed.

use image::RgbaImage;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::config::OverlayColor;
use crate::domain::Polygon;
use crate::render::style;
use crate::session::messages::EditMode;
use crate::session::state::EditorSession;

/// Build a closed path through the polygon's vertices in sequence order
pub(crate) fn polygon_path(polygon: &Polygon) -> Option<tiny_skia::Path> {
    let vertices = polygon.vertices();
    let first = vertices.first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for v in &vertices[1..] {
        pb.line_to(v.x, v.y);
    }
    pb.close();
    pb.finish()
}

/// Copy an RGBA image into a Pixmap of the same size
///
/// The image carries straight alpha while Pixmap stores premultiplied
/// pixels, so each channel is premultiplied on the way in. For opaque
/// images this is a plain copy.
pub(crate) fn image_pixmap(img: &RgbaImage) -> Option<Pixmap> {
    let mut data = Vec::with_capacity(img.as_raw().len());
    for px in img.pixels() {
        let [r, g, b, a] = px.0;
        let c = tiny_skia::ColorU8::from_rgba(r, g, b, a).premultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Pixmap::from_vec(
        data,
        tiny_skia::IntSize::from_wh(img.width(), img.height())?,
    )
}

/// Render the current scene, or None until an image has been loaded
pub fn render_scene(session: &EditorSession, color: OverlayColor) -> Option<Pixmap> {
    let img = session.image()?;
    let mut pixmap = image_pixmap(img)?;
    draw_polygon_overlay(&mut pixmap, session.polygon(), session.mode(), color);
    Some(pixmap)
}

/// Stroke the closed polygon outline and draw a handle on every vertex
///
/// Handles fill white, except in Remove mode where they fill in the overlay
/// color as a deletion cue.
fn draw_polygon_overlay(
    pixmap: &mut Pixmap,
    polygon: &Polygon,
    mode: EditMode,
    color: OverlayColor,
) {
    let Some(path) = polygon_path(polygon) else {
        return;
    };
    let [r, g, b, a] = color.to_rgba_u8();

    let mut outline = Paint::default();
    outline.set_color_rgba8(r, g, b, a);
    outline.anti_alias = true;

    let stroke = Stroke {
        width: style::OUTLINE_WIDTH,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &outline, &stroke, Transform::identity(), None);

    let mut fill = Paint::default();
    match mode {
        EditMode::Remove => fill.set_color_rgba8(r, g, b, a),
        EditMode::Select | EditMode::Add => fill.set_color_rgba8(255, 255, 255, 255),
    }
    fill.anti_alias = true;

    for v in polygon.vertices() {
        if let Some(handle) = PathBuilder::from_circle(v.x, v.y, style::POINT_RADIUS) {
            pixmap.fill_path(&handle, &fill, FillRule::Winding, Transform::identity(), None);
            pixmap.stroke_path(&handle, &outline, &stroke, Transform::identity(), None);
        }
    }
}
