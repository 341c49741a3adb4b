//! Pointer-reactive 3D card tilt
//!
//! The displayed tilt eases toward the pointer offset every frame, which gives the
//! card a little inertia. Leaving the card eases it back to neutral; the host stops
//! the frame loop after a settle delay.

use glam::Vec2;

use super::task::FrameTask;
use crate::consts::*;
use crate::lerp;

/// Rotation and depth for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub translate_z: f32,
}

impl TiltTransform {
    pub fn from_offset(offset: Vec2) -> Self {
        Self {
            // Subtracting from zero never yields -0.0, which CSS would print as "-0deg"
            rotate_x: 0.0 - offset.y * TILT_ROTATE_X,
            rotate_y: offset.x * TILT_ROTATE_Y,
            translate_z: TILT_BASE_DEPTH + (offset.x + offset.y).abs() * TILT_DEPTH_GAIN,
        }
    }

    /// CSS `transform` value
    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            TILT_PERSPECTIVE, self.rotate_x, self.rotate_y, self.translate_z
        )
    }
}

/// Pointer position relative to an element's box, centered: `[-0.5, 0.5]` inside it
pub fn relative_offset(client: Vec2, origin: Vec2, size: Vec2) -> Vec2 {
    (client - origin) / size - Vec2::splat(0.5)
}

/// Tilt state for one card
#[derive(Debug, Clone)]
pub struct TiltState<H> {
    pointer: Vec2,
    eased: Vec2,
    smoothing: f32,
    /// Bumped on every pointer move so stale settle timers can be ignored
    generation: u64,
    task: FrameTask<H>,
}

impl<H> Default for TiltState<H> {
    fn default() -> Self {
        Self::new(TILT_SMOOTHING)
    }
}

impl<H> TiltState<H> {
    pub fn new(smoothing: f32) -> Self {
        Self {
            pointer: Vec2::ZERO,
            eased: Vec2::ZERO,
            smoothing,
            generation: 0,
            task: FrameTask::new(),
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn eased(&self) -> Vec2 {
        self.eased
    }

    pub fn is_animating(&self) -> bool {
        self.task.is_running()
    }

    /// Update the target. Returns true if the frame loop needs starting.
    pub fn pointer_moved(&mut self, offset: Vec2) -> bool {
        self.pointer = offset;
        self.generation += 1;
        !self.task.is_running()
    }

    /// Pointer left the card: ease back to neutral. Returns the generation the
    /// settle timer should carry.
    pub fn pointer_left(&mut self) -> u64 {
        self.pointer = Vec2::ZERO;
        self.generation
    }

    /// Advance the easing one frame
    pub fn frame(&mut self) -> TiltTransform {
        self.eased = Vec2::new(
            lerp(self.eased.x, self.pointer.x, self.smoothing),
            lerp(self.eased.y, self.pointer.y, self.smoothing),
        );
        TiltTransform::from_offset(self.eased)
    }

    /// Record the handle of the next requested frame
    pub fn frame_scheduled(&mut self, handle: H) -> Option<H> {
        self.task.schedule(handle)
    }

    /// Settle timer fired. If the pointer has not come back since `generation`,
    /// the loop stops and the pending frame handle is returned for cancellation.
    /// `None` with the loop still running means the timer was stale.
    pub fn settle(&mut self, generation: u64) -> Option<H> {
        if generation != self.generation {
            return None;
        }
        self.eased = Vec2::ZERO;
        self.task.stop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_relative_offset_center_and_corner() {
        let origin = Vec2::new(100.0, 50.0);
        let size = Vec2::new(200.0, 100.0);
        assert_eq!(relative_offset(Vec2::new(200.0, 100.0), origin, size), Vec2::ZERO);
        assert_eq!(
            relative_offset(origin, origin, size),
            Vec2::new(-0.5, -0.5)
        );
    }

    #[test]
    fn test_transform_neutral() {
        let t = TiltTransform::from_offset(Vec2::ZERO);
        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
        assert_eq!(t.translate_z, TILT_BASE_DEPTH);
        assert_eq!(
            t.to_css(),
            "perspective(1200px) rotateX(0deg) rotateY(0deg) translateZ(8px)"
        );
    }

    #[test]
    fn test_settled_card_renders_unsigned_zero() {
        let mut tilt: TiltState<i32> = TiltState::default();
        let css = tilt.frame().to_css();
        assert!(!css.contains("-0deg"), "{css}");
        assert_eq!(TiltTransform::from_offset(Vec2::new(0.0, -0.0)).rotate_x.to_string(), "0");
    }

    #[test]
    fn test_frame_eases_by_smoothing_factor() {
        let mut tilt: TiltState<i32> = TiltState::default();
        tilt.pointer_moved(Vec2::new(0.5, -0.25));
        tilt.frame();
        assert!((tilt.eased().x - 0.06).abs() < 1e-6);
        assert!((tilt.eased().y + 0.03).abs() < 1e-6);
    }

    #[test]
    fn test_transform_signs() {
        let t = TiltTransform::from_offset(Vec2::new(0.5, 0.5));
        assert_eq!(t.rotate_x, -4.0);
        assert_eq!(t.rotate_y, 6.0);
        assert_eq!(t.translate_z, 12.0);
    }

    #[test]
    fn test_first_move_starts_loop_once() {
        let mut tilt: TiltState<i32> = TiltState::default();
        assert!(tilt.pointer_moved(Vec2::new(0.2, 0.1)));
        tilt.frame_scheduled(1);
        assert!(!tilt.pointer_moved(Vec2::new(0.3, 0.1)));
        assert!(tilt.is_animating());
    }

    #[test]
    fn test_leave_then_settle_stops_loop() {
        let mut tilt: TiltState<i32> = TiltState::default();
        tilt.pointer_moved(Vec2::new(0.4, -0.2));
        tilt.frame_scheduled(1);
        for _ in 0..10 {
            tilt.frame();
        }
        let generation = tilt.pointer_left();
        assert_eq!(tilt.pointer(), Vec2::ZERO);
        // Roughly 350 ms of frames at 60 Hz
        for _ in 0..21 {
            tilt.frame();
        }
        assert!(tilt.eased().length() < 0.05);
        assert_eq!(tilt.settle(generation), Some(1));
        assert!(!tilt.is_animating());
        assert_eq!(tilt.eased(), Vec2::ZERO);
    }

    #[test]
    fn test_stale_settle_ignored() {
        let mut tilt: TiltState<i32> = TiltState::default();
        tilt.pointer_moved(Vec2::new(0.1, 0.1));
        tilt.frame_scheduled(1);
        let generation = tilt.pointer_left();
        tilt.pointer_moved(Vec2::new(0.2, 0.2));
        assert_eq!(tilt.settle(generation), None);
        assert!(tilt.is_animating());
    }

    proptest! {
        #[test]
        fn prop_converges_without_overshoot(x in -0.5f32..0.5, y in -0.5f32..0.5) {
            let mut tilt: TiltState<i32> = TiltState::default();
            tilt.pointer_moved(Vec2::new(x, y));
            let target = TiltTransform::from_offset(Vec2::new(x, y));
            let mut prev_gap = f32::INFINITY;
            for _ in 0..200 {
                let t = tilt.frame();
                let gap = (t.rotate_y - target.rotate_y).abs() + (t.rotate_x - target.rotate_x).abs();
                prop_assert!(gap <= prev_gap + 1e-6);
                prop_assert!(t.rotate_y.abs() <= target.rotate_y.abs() + 1e-5);
                prop_assert!(t.rotate_x.abs() <= target.rotate_x.abs() + 1e-5);
                prev_gap = gap;
            }
            prop_assert!(prev_gap < 1e-3);
        }
    }
}
