//! Browser platform layer
//!
//! Thin wrappers over web-sys for:
//! - Element lookup and styling
//! - Animation frames and timers
//! - Canvas 2D drawing of the blob field

pub mod canvas;
pub mod dom;
pub mod timers;

pub use canvas::BlobCanvas;
