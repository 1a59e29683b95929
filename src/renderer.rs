use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use kururin_core::{RenderSurface, Ring};

pub(crate) struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub(crate) fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    fn draw_ring_scoped(&self, ring: &Ring<HtmlImageElement>) -> Result<(), JsValue> {
        // save/restore bracket the clip and transform so no state leaks into
        // the next draw, even when a call in between fails.
        self.ctx.save();
        let outcome = self.clip_and_draw(ring);
        self.ctx.restore();
        outcome
    }

    fn clip_and_draw(&self, ring: &Ring<HtmlImageElement>) -> Result<(), JsValue> {
        let center_x = f64::from(ring.center_x);
        let center_y = f64::from(ring.center_y);
        self.ctx.begin_path();
        self.ctx
            .arc(center_x, center_y, f64::from(ring.radius), 0.0, TAU)?;
        self.ctx.clip();
        self.ctx.translate(center_x, center_y)?;
        self.ctx.rotate(f64::from(ring.rotation))?;
        let image_w = f64::from(ring.image.natural_width());
        let image_h = f64::from(ring.image.natural_height());
        // The image's own center sits on the ring center before rotation.
        self.ctx
            .draw_image_with_html_image_element(&ring.image, image_w * -0.5, image_h * -0.5)
    }
}

impl RenderSurface for CanvasSurface {
    type Image = HtmlImageElement;

    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn draw_ring(&mut self, ring: &Ring<HtmlImageElement>) {
        if let Err(err) = self.draw_ring_scoped(ring) {
            gloo::console::error!("ring draw failed", format!("{err:?}"));
        }
    }
}
