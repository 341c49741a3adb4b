//! Effect state
//!
//! Everything here is host-independent:
//! - No DOM access
//! - Timing comes in as arguments, never read from a clock
//! - Randomness comes from seeded generators
//!
//! The platform layer owns the elements and feeds events in.

pub mod blobs;
pub mod nav;
pub mod parallax;
pub mod pulse;
pub mod reveal;
pub mod ripple;
pub mod task;
pub mod tilt;
pub mod typing;

pub use blobs::{Blob, BlobField, BlobShape, Pointer, Rgba, SurfaceSize, scroll_fraction};
pub use nav::NavToggle;
pub use parallax::{FINE_POINTER_QUERY, hero_transform, inner_transform, scroll_progress};
pub use pulse::{GLOW_CLASS, GlowPulse, logo_transform};
pub use reveal::{RevealAction, RevealSet, stagger_transition};
pub use ripple::{RIPPLE_TRANSITION, RippleGeometry, RippleSet, is_primary_button};
pub use task::{Debounce, FrameTask, IntervalTask};
pub use tilt::{TiltState, TiltTransform, relative_offset};
pub use typing::{Direction, TypingFrame, TypingState, TypingTiming};
