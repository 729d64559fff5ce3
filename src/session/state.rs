//! Owned editor state: one session per loaded image

use image::RgbaImage;

use crate::domain::Polygon;
use crate::loader::LoadedImage;
use crate::session::messages::{EditMode, Notice};

/// All editor state for one image: the loaded picture, the polygon overlay,
/// the interaction mode and the transient drag gesture.
///
/// Everything runs on one logical thread; each pointer event mutates the
/// session to completion, and the mutation synchronously raises the redraw
/// request so the presented scene never lags the model.
#[derive(Debug, Default)]
pub struct EditorSession {
    image: Option<RgbaImage>,
    surface_size: (u32, u32),
    polygon: Polygon,
    mode: EditMode,
    /// Index of the vertex being dragged; valid only during a gesture
    pub(crate) dragging: Option<usize>,
    redraw_requested: bool,
    notice: Option<Notice>,
}

impl EditorSession {
    /// Fresh session with no image and no polygon
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a freshly decoded image
    ///
    /// The surface takes the image's pixel size and the polygon is reset to
    /// the default octagon, superseding any previous image and polygon
    /// wholesale. This is the decode-completion side of the async image
    /// loading boundary; nothing renders or exports before the first call.
    pub fn install_image(&mut self, loaded: LoadedImage) {
        let (w, h) = (loaded.rgba.width(), loaded.rgba.height());
        log::debug!("image installed: {w}x{h} pixels");
        self.surface_size = (w, h);
        self.image = Some(loaded.rgba);
        self.polygon = Polygon::new(w, h);
        self.dragging = None;
        self.request_redraw();
    }

    /// The loaded image, if any
    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    /// Display surface size in pixels; (0, 0) before the first image
    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    /// The polygon overlay
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub(crate) fn polygon_mut(&mut self) -> &mut Polygon {
        &mut self.polygon
    }

    /// Current interaction mode
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Switch interaction mode
    ///
    /// Takes effect for the next event; an in-flight drag gesture does not
    /// survive the switch.
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            self.dragging = None;
        }
        self.mode = mode;
    }

    /// Mark the presented scene stale
    pub(crate) fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Consume the pending redraw request, if any
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub(crate) fn push_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Consume the pending user-facing notice, if any
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
