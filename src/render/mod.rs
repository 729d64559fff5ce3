//! Scene rendering for the editor
//!
//! This module contains:
//! - Style constants shared between drawing and pointer hit testing
//! - Pixmap rendering of the image plus polygon overlay using tiny-skia

pub mod image;
pub mod style;
