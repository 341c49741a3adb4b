//! Background blob field
//!
//! A handful of soft gradient ellipses drifting under a gentle oscillating force,
//! pushed away by a nearby pointer and pulled slightly toward it from mid range.
//! Blobs that drift far off-surface wrap to the opposite side.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use crate::consts::*;

/// RGBA color, alpha in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// A single blob
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Constant acceleration bias
    pub bias: Vec2,
    pub phase: f32,
    pub color: [u8; 3],
}

/// Shared pointer state over the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub pos: Vec2,
    pub active: bool,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            pos: Vec2::splat(POINTER_PARKED),
            active: false,
        }
    }
}

impl Pointer {
    pub fn moved(&mut self, pos: Vec2) {
        self.pos = pos;
        self.active = true;
    }

    pub fn left(&mut self) {
        *self = Self::default();
    }
}

/// Everything needed to paint one blob
#[derive(Debug, Clone, PartialEq)]
pub struct BlobShape {
    /// Gradient center (the blob's position)
    pub gradient_center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Gradient stops at 0, 0.5 and 1
    pub stops: [Rgba; 3],
    /// Ellipse center, offset from the gradient by scroll-dependent sway
    pub center: Vec2,
    pub radii: Vec2,
    pub rotation: f32,
}

/// Device-pixel sizing for the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// CSS pixel size
    pub css: Vec2,
    pub pixel_ratio: f64,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl SurfaceSize {
    pub fn new(client_width: f64, client_height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = device_pixel_ratio.max(1.0);
        Self {
            css: Vec2::new(client_width as f32, client_height as f32),
            pixel_ratio: dpr,
            backing_width: (client_width * dpr).floor() as u32,
            backing_height: (client_height * dpr).floor() as u32,
        }
    }
}

/// Scroll position as a fraction of the scrollable range
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    (scroll_y / (scroll_height - viewport_height).max(1.0)) as f32
}

/// Pointer impulse on a blob at `offset` from the pointer (blob - pointer)
pub fn pointer_impulse(offset: Vec2) -> Vec2 {
    let mut d = offset.length();
    if d == 0.0 {
        d = 1.0;
    }
    let dir = offset / d;
    if d < POINTER_REPEL_RADIUS {
        let strength = (POINTER_REPEL_RADIUS - d) / POINTER_REPEL_RADIUS;
        dir * POINTER_REPEL_STRENGTH * strength
    } else if d < POINTER_ATTRACT_RADIUS {
        let strength = (d - POINTER_REPEL_RADIUS) / (POINTER_ATTRACT_RADIUS - POINTER_REPEL_RADIUS);
        -dir * POINTER_ATTRACT_STRENGTH * strength
    } else {
        Vec2::ZERO
    }
}

/// Toroidal wrap with a margin past each edge
pub fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v < -BLOB_WRAP_MARGIN {
        extent + BLOB_WRAP_MARGIN
    } else if v > extent + BLOB_WRAP_MARGIN {
        -BLOB_WRAP_MARGIN
    } else {
        v
    }
}

/// The blob field and its pointer
#[derive(Debug, Clone)]
pub struct BlobField {
    blobs: Vec<Blob>,
    size: Vec2,
    pub pointer: Pointer,
    shapes: Vec<BlobShape>,
}

impl BlobField {
    /// Scatter `count` blobs over a `size` surface
    pub fn new(count: usize, size: Vec2, palette: &[[u8; 3]], seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let palette = if palette.is_empty() {
            &BLOB_PALETTE[..]
        } else {
            palette
        };

        let blobs = (0..count)
            .map(|i| {
                let x = rng.random::<f32>() * size.x;
                let y = rng.random::<f32>() * size.y;
                Blob {
                    // A zero-sized surface would pile everything in the corner
                    pos: Vec2::new(
                        if x == 0.0 { 100.0 } else { x },
                        if y == 0.0 { 100.0 } else { y },
                    ),
                    vel: Vec2::ZERO,
                    radius: 60.0 + rng.random::<f32>() * 180.0,
                    bias: Vec2::new(
                        rng.random::<f32>() * 0.6 - 0.3,
                        rng.random::<f32>() * 0.6 - 0.3,
                    ),
                    phase: rng.random::<f32>() * TAU,
                    color: palette[i % palette.len()],
                }
            })
            .collect();

        Self {
            blobs,
            size,
            pointer: Pointer::default(),
            shapes: Vec::with_capacity(count),
        }
    }

    pub fn from_blobs(blobs: Vec<Blob>, size: Vec2) -> Self {
        let count = blobs.len();
        Self {
            blobs,
            size,
            pointer: Pointer::default(),
            shapes: Vec::with_capacity(count),
        }
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Advance one frame and return the shapes to paint.
    ///
    /// Shapes reflect the pre-wrap position; wrapping applies to the next frame.
    pub fn step(&mut self, scroll: f32) -> &[BlobShape] {
        self.shapes.clear();
        let opacity = 0.14 - (0.5 - scroll).abs() * 0.06;

        for (i, b) in self.blobs.iter_mut().enumerate() {
            let fi = i as f32;
            b.vel.x += (b.phase * 0.7 + fi).sin() * 0.02 + b.bias.x * 0.02;
            b.vel.y += (b.phase * 0.9 + fi).cos() * 0.01 + b.bias.y * 0.02;

            if self.pointer.active {
                b.vel += pointer_impulse(b.pos - self.pointer.pos);
            }

            b.pos += b.vel;
            b.vel *= BLOB_DAMPING;
            b.phase += 0.006 + (i % 4) as f32 * 0.0008;

            self.shapes.push(shape_for(b, scroll, opacity));

            b.pos.x = wrap_axis(b.pos.x, self.size.x);
            b.pos.y = wrap_axis(b.pos.y, self.size.y);
        }

        &self.shapes
    }
}

fn shape_for(b: &Blob, scroll: f32, opacity: f32) -> BlobShape {
    let [r, g, bl] = b.color;
    let dim = |c: u8| (c as f32 * 0.6).floor() as u8;
    let wobble = 1.0 + (b.phase * 0.6).sin() * 0.12;

    BlobShape {
        gradient_center: b.pos,
        inner_radius: b.radius * 0.08,
        outer_radius: b.radius,
        stops: [
            Rgba { r, g, b: bl, a: opacity.max(0.0) },
            Rgba { r: dim(r), g: dim(g), b: dim(bl), a: (opacity * 0.5).max(0.0) },
            Rgba { r: 4, g: 8, b: 20, a: 0.0 },
        ],
        center: Vec2::new(
            b.pos.x + b.phase.sin() * 30.0 * scroll,
            b.pos.y + b.phase.cos() * 24.0 * (1.0 - scroll),
        ),
        radii: Vec2::new(b.radius * wobble, b.radius * 0.6 * wobble),
        rotation: b.phase.sin() * 0.6,
    }
}
