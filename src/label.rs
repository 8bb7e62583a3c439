//! Label rasterization on an offscreen 2D canvas.

use anyhow::anyhow;
use diorama_core::{Label, LabelBitmap, LabelRasterizer};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasRasterizer {
    document: web::Document,
}

impl CanvasRasterizer {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn context_2d(
        &self,
        width: u32,
        height: u32,
    ) -> anyhow::Result<web::CanvasRenderingContext2d> {
        let canvas: web::HtmlCanvasElement = self
            .document
            .create_element("canvas")
            .map_err(|e| anyhow!("create canvas: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow!("not a canvas: {:?}", e))?;
        canvas.set_width(width);
        canvas.set_height(height);
        canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("not a 2d context: {:?}", e))
    }
}

impl LabelRasterizer for CanvasRasterizer {
    fn rasterize(&self, label: &Label) -> anyhow::Result<LabelBitmap> {
        let style = &label.style;
        let (w, h) = (style.bitmap_width, style.bitmap_height);
        let ctx = self.context_2d(w, h)?;

        ctx.set_font(&style.font);
        ctx.set_fill_style_str(&style.fill);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(&label.text, w as f64 / 2.0, h as f64 / 2.0)
            .map_err(|e| anyhow!("fill_text: {:?}", e))?;

        let pixels = ctx
            .get_image_data(0.0, 0.0, w as f64, h as f64)
            .map_err(|e| anyhow!("get_image_data: {:?}", e))?
            .data()
            .0;
        Ok(LabelBitmap::new(w, h, pixels)?)
    }
}
