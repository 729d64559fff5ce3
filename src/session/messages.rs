//! Message types for the editor session
//!
//! This module contains:
//! - EditMode, the interaction mode set by the embedding UI
//! - PointerEvent, pointer input in surface-local coordinates
//! - Notice, non-fatal messages the UI should surface to the user

use crate::domain::Point;

/// Interaction mode chosen through the embedding UI's mode selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Drag existing vertices
    #[default]
    Select,
    /// Insert a vertex on the clicked edge
    Add,
    /// Delete clicked vertices
    Remove,
}

impl EditMode {
    /// Cursor the embedding UI should show while this mode is active
    pub fn cursor_hint(self) -> CursorHint {
        match self {
            EditMode::Select => CursorHint::Grab,
            EditMode::Add => CursorHint::Copy,
            EditMode::Remove => CursorHint::NotAllowed,
        }
    }
}

/// Cursor shapes matching the three interaction modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    Grab,
    Copy,
    NotAllowed,
}

/// A pointer event in surface-local coordinates, origin top-left
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Button pressed at position
    Down(Point),
    /// Pointer moved to position
    Moved(Point),
    /// Button released
    Up,
}

/// Non-fatal, user-facing message surfaced by the embedding UI
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A removal was rejected to keep the polygon valid
    MinimumVertices,
}

impl Notice {
    /// Text the embedding UI can show directly
    pub fn text(self) -> &'static str {
        match self {
            Notice::MinimumVertices => "The polygon needs at least 3 vertices.",
        }
    }
}
