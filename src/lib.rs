//! Landing FX - interactive effects for a marketing landing page
//!
//! Core modules:
//! - `fx`: Pure effect state (typing, tilt, reveal, blobs, parallax, ripples, pulses)
//! - `platform`: Browser glue (DOM lookups, timers, animation frames, canvas drawing)
//! - `settings`: Tunable configuration, loaded from the page
//! - `error`: Setup failures

pub mod error;
pub mod fx;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod settings;

pub use error::FxError;
pub use settings::Settings;

/// Effect tuning constants
pub mod consts {
    /// Words cycled by the typing animation
    pub const TYPED_WORDS: [&str; 3] = ["accelerate.", "automate.", "augment."];
    /// Delay between typed characters (ms)
    pub const TYPING_DELAY_MS: u32 = 80;
    /// Hold time once a word is fully typed (ms)
    pub const TYPING_PAUSE_MS: u32 = 900;
    /// Gap between deleting one word and typing the next (ms)
    pub const TYPING_WORD_GAP_MS: u32 = 240;
    /// Delay before the first typed character (ms)
    pub const TYPING_INTRO_MS: u32 = 300;
    /// Backward ticks run faster than forward ones
    pub const TYPING_BACKWARD_FACTOR: f32 = 0.6;

    /// Per-frame easing factor for card tilt
    pub const TILT_SMOOTHING: f32 = 0.12;
    /// Degrees of rotateX per unit of vertical offset
    pub const TILT_ROTATE_X: f32 = 8.0;
    /// Degrees of rotateY per unit of horizontal offset
    pub const TILT_ROTATE_Y: f32 = 12.0;
    /// Resting translateZ (px)
    pub const TILT_BASE_DEPTH: f32 = 8.0;
    /// Extra translateZ per unit of combined offset (px)
    pub const TILT_DEPTH_GAIN: f32 = 4.0;
    /// Perspective distance (px)
    pub const TILT_PERSPECTIVE: f32 = 1200.0;
    /// Time after pointer leave before the tilt loop stops (ms)
    pub const TILT_SETTLE_MS: u32 = 350;

    /// Fraction of an element that must be visible to reveal it
    pub const REVEAL_THRESHOLD: f64 = 0.15;
    /// Transition delay step between staggered elements (ms)
    pub const STAGGER_STEP_MS: u32 = 60;

    /// Number of background blobs
    pub const BLOB_COUNT: usize = 8;
    /// Blob palette (RGB)
    pub const BLOB_PALETTE: [[u8; 3]; 3] = [[124, 92, 255], [0, 224, 184], [28, 145, 255]];
    /// Pointer repulsion radius
    pub const POINTER_REPEL_RADIUS: f32 = 220.0;
    /// Outer edge of the attraction band
    pub const POINTER_ATTRACT_RADIUS: f32 = 420.0;
    /// Repulsion impulse at zero distance
    pub const POINTER_REPEL_STRENGTH: f32 = 1.8;
    /// Attraction impulse at the outer band edge
    pub const POINTER_ATTRACT_STRENGTH: f32 = 0.06;
    /// Velocity damping applied every frame
    pub const BLOB_DAMPING: f32 = 0.96;
    /// Distance past an edge before a blob wraps around
    pub const BLOB_WRAP_MARGIN: f32 = 360.0;
    /// Where an inactive pointer is parked
    pub const POINTER_PARKED: f32 = -9999.0;
    /// Quiet period before a canvas resize is applied (ms)
    pub const RESIZE_DEBOUNCE_MS: u32 = 80;

    /// Hero translateY at full scroll progress (px)
    pub const HERO_SCROLL_SHIFT: f32 = 10.0;

    /// Logo animation interval (ms)
    pub const LOGO_INTERVAL_MS: u32 = 80;
    /// Base glow interval (ms)
    pub const GLOW_BASE_MS: u32 = 4200;
    /// Random extra glow interval, exclusive upper bound (ms)
    pub const GLOW_JITTER_MS: u32 = 2200;
    /// How long the glow class stays on (ms)
    pub const GLOW_HOLD_MS: u32 = 900;

    /// Ripple diameter relative to the larger button side
    pub const RIPPLE_SCALE: f64 = 1.6;
    /// Time until a ripple element is removed (ms)
    pub const RIPPLE_LIFETIME_MS: u32 = 800;
}

/// Linear interpolation from `a` toward `b` by `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp to the unit interval
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert!((lerp(0.0, 1.0, 0.12) - 0.12).abs() < 1e-6);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-3.0), 0.0);
        assert_eq!(clamp01(0.4), 0.4);
        assert_eq!(clamp01(7.0), 1.0);
    }
}
