use crate::constants::{LINE_CAP, LINE_JOIN, TRANSPARENT};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wavefield_core::{DrawCommand, StrokeSurface};
use web_sys as web;

/// `StrokeSurface` over a 2D canvas context, in CSS pixel units.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    size: Option<(f32, f32)>,
    /// Set by the window resize listener; forces a DPR re-read.
    dirty: Rc<Cell<bool>>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas,
            ctx,
            size: None,
            dirty: Rc::new(Cell::new(true)),
        })
    }

    pub fn dirty_flag(&self) -> Rc<Cell<bool>> {
        self.dirty.clone()
    }
}

impl StrokeSurface for CanvasSurface {
    fn resize(&mut self, width: f32, height: f32) {
        if self.size == Some((width, height)) && !self.dirty.get() {
            return;
        }
        let dpr = dom::device_pixel_ratio();
        dom::sync_canvas_backing_size(&self.canvas, width as f64, height as f64, dpr);
        // Resizing the backing store resets context state, so re-apply the transform.
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.size = Some((width, height));
        self.dirty.set(false);
        log::debug!("[waves] surface {}x{} @{}x", width, height, dpr);
    }

    fn clear(&mut self, background: &str) {
        let (w, h) = self.size.unwrap_or((0.0, 0.0));
        if background == TRANSPARENT {
            self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
        } else {
            self.ctx.set_fill_style_str(background);
            self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
        }
    }

    fn stroke_polyline(&mut self, cmd: &DrawCommand) {
        let Some((first, rest)) = cmd.points.split_first() else {
            return;
        };
        let ctx = &self.ctx;
        ctx.set_global_alpha(cmd.alpha.clamp(0.0, 1.0) as f64);
        ctx.set_stroke_style_str(&cmd.color);
        ctx.set_line_width(cmd.width as f64);
        ctx.set_line_cap(LINE_CAP);
        ctx.set_line_join(LINE_JOIN);
        ctx.begin_path();
        ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.stroke();
        ctx.set_global_alpha(1.0);
    }
}
