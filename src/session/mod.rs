//! Editor session: owned state, messages, and pointer-event handling
//!
//! One [`EditorSession`] holds everything the editor mutates between events.
//! The embedding UI feeds it pointer events and mode changes, then drains
//! the redraw request and any pending notice after each one.

pub mod handlers;
pub mod messages;
pub mod state;

pub use messages::*;
pub use state::EditorSession;
