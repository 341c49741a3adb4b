//! Button ripple feedback
//!
//! A ripple is spawned where the pointer went down and removed after a fixed
//! lifetime, whether or not its CSS transition has finished.

use crate::consts::{RIPPLE_LIFETIME_MS, RIPPLE_SCALE};

/// Size and placement of a ripple inside its button (CSS px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// `rect` is the button's `(left, top, width, height)`, `client` the pointer position
    pub fn at(rect: (f64, f64, f64, f64), client: (f64, f64)) -> Self {
        let (left, top, width, height) = rect;
        let size = width.max(height) * RIPPLE_SCALE;
        Self {
            size,
            left: client.0 - left - size / 2.0,
            top: client.1 - top - size / 2.0,
        }
    }
}

/// Only the primary button ripples
pub fn is_primary_button(button: i16) -> bool {
    button == 0
}

/// CSS transition applied once the ripple is in the document
pub const RIPPLE_TRANSITION: &str = "transform .6s cubic-bezier(.2,.9,.2,1), opacity .7s";

/// Live ripples and when they must be gone
#[derive(Debug, Clone, Default)]
pub struct RippleSet {
    next_id: u32,
    live: Vec<(u32, f64)>,
}

impl RippleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ripple spawned at `now_ms`; returns its id
    pub fn spawn(&mut self, now_ms: f64) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push((id, now_ms + RIPPLE_LIFETIME_MS as f64));
        id
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Remove and return every ripple whose lifetime has run out by `now_ms`
    pub fn expire(&mut self, now_ms: f64) -> Vec<u32> {
        let mut expired = Vec::new();
        self.live.retain(|&(id, deadline)| {
            if deadline <= now_ms {
                expired.push(id);
                false
            } else {
                true
            }
        });
        expired
    }
}
