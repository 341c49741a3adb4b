//! Hero parallax
//!
//! Scroll nudges the hero down as it leaves the viewport; on fine-pointer displays
//! the inner wrapper also leans toward the pointer.

use glam::Vec2;

use crate::clamp01;
use crate::consts::HERO_SCROLL_SHIFT;

/// How far the hero has scrolled up out of view, in `[0, 1]`
pub fn scroll_progress(hero_top: f32, viewport_height: f32) -> f32 {
    1.0 - clamp01(hero_top / viewport_height)
}

/// CSS transform for the hero at a given scroll progress
pub fn hero_transform(progress: f32) -> String {
    format!("translateY({}px)", progress * HERO_SCROLL_SHIFT)
}

/// CSS transform for the inner wrapper given a centered pointer offset
pub fn inner_transform(offset: Vec2) -> String {
    format!(
        "translateX({}px) translateY({}px) rotateX({}deg) rotateY({}deg)",
        offset.x * 10.0,
        offset.y * 6.0,
        0.0 - offset.y * 2.0,
        offset.x * 2.0
    )
}

/// Media query that gates the pointer parallax
pub const FINE_POINTER_QUERY: &str = "(hover:hover) and (pointer:fine)";
