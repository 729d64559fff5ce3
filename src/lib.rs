//! Polygon clip editor core
//!
//! Load an image, edit a polygon overlay on top of it (drag, add and remove
//! vertices), and export the pixels bounded by the polygon as a PNG with
//! everything outside made transparent.
//!
//! The embedding UI owns the window, the pointer source and the mode
//! selector; this crate owns the editor state ([`session::EditorSession`]),
//! hit testing, rendering and export. Binaries embedding the crate are
//! expected to initialize logging themselves, e.g.
//! `env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init()`.

pub mod config;
pub mod domain;
pub mod export;
pub mod loader;
pub mod render;
pub mod session;

pub use session::EditorSession;
