//! Canvas 2D renderer for the blob field

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{FxError, FxResult};
use crate::fx::{BlobShape, SurfaceSize};

pub struct BlobCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: SurfaceSize,
}

impl BlobCanvas {
    pub fn new(canvas: HtmlCanvasElement, device_pixel_ratio: f64) -> FxResult<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(FxError::Js("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FxError::WrongElementType {
                selector: "canvas context".into(),
                expected: "CanvasRenderingContext2d",
            })?;
        let mut this = Self {
            canvas,
            ctx,
            size: SurfaceSize::new(0.0, 0.0, 1.0),
        };
        this.resize(device_pixel_ratio);
        Ok(this)
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// CSS pixel size of the drawing area
    pub fn css_size(&self) -> Vec2 {
        self.size.css
    }

    /// Match the backing store to the client size at the device pixel ratio
    pub fn resize(&mut self, device_pixel_ratio: f64) {
        self.size = SurfaceSize::new(
            self.canvas.client_width() as f64,
            self.canvas.client_height() as f64,
            device_pixel_ratio,
        );
        self.canvas.set_width(self.size.backing_width);
        self.canvas.set_height(self.size.backing_height);
        let dpr = self.size.pixel_ratio;
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("Canvas transform failed: {:?}", e);
        }
        log::debug!(
            "Canvas resized to {}x{} (dpr {})",
            self.size.backing_width,
            self.size.backing_height,
            dpr
        );
    }

    pub fn draw(&self, shapes: &[BlobShape]) {
        let css = self.size.css;
        self.ctx.clear_rect(0.0, 0.0, css.x as f64, css.y as f64);
        for shape in shapes {
            if let Err(e) = self.draw_shape(shape) {
                log::warn!("Blob draw failed: {:?}", e);
            }
        }
    }

    fn draw_shape(&self, shape: &BlobShape) -> FxResult<()> {
        let c = shape.gradient_center;
        let gradient = self.ctx.create_radial_gradient(
            c.x as f64,
            c.y as f64,
            shape.inner_radius as f64,
            c.x as f64,
            c.y as f64,
            shape.outer_radius as f64,
        )?;
        for (offset, stop) in [0.0, 0.5, 1.0].into_iter().zip(shape.stops.iter()) {
            gradient.add_color_stop(offset, &stop.to_css())?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx.ellipse(
            shape.center.x as f64,
            shape.center.y as f64,
            shape.radii.x as f64,
            shape.radii.y as f64,
            shape.rotation as f64,
            0.0,
            TAU,
        )?;
        self.ctx.fill();
        Ok(())
    }
}
