//! Canvas 2D backend

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use super::surface::{DrawSurface, ImageId, TextAlign};
use crate::sim::Rect;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<ImageId, HtmlImageElement>,
}

impl CanvasSurface {
    /// Wrap the canvas and look up every sprite `<img>` in the document.
    /// Missing images are logged; their entities draw with fallbacks.
    pub fn new(canvas: &HtmlCanvasElement, document: &Document) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("{e:?}"))?
            .ok_or("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context has unexpected type".to_string())?;

        let mut images = HashMap::new();
        for id in ImageId::ALL {
            match document
                .get_element_by_id(id.dom_id())
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            {
                Some(img) => {
                    images.insert(id, img);
                }
                None => log::warn!("Image #{} not found, using fallback", id.dom_id()),
            }
        }

        Ok(Self { ctx, images })
    }
}

fn warn_on_err(op: &str, result: Result<(), wasm_bindgen::JsValue>) {
    if let Err(e) = result {
        log::warn!("{} failed: {:?}", op, e);
    }
}

impl DrawSurface for CanvasSurface {
    fn image_ready(&self, image: ImageId) -> bool {
        self.images
            .get(&image)
            .is_some_and(|img| img.complete() && img.natural_width() > 0)
    }

    fn draw_image(&mut self, image: ImageId, src: Option<Rect>, dest: Rect) {
        let Some(img) = self.images.get(&image) else {
            return;
        };
        let (dx, dy, dw, dh) = (
            dest.pos.x as f64,
            dest.pos.y as f64,
            dest.size.x as f64,
            dest.size.y as f64,
        );
        let result = match src {
            Some(s) => self
                .ctx
                .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    img,
                    s.pos.x as f64,
                    s.pos.y as f64,
                    s.size.x as f64,
                    s.size.y as f64,
                    dx,
                    dy,
                    dw,
                    dh,
                ),
            None => self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, dx, dy, dw, dh),
        };
        warn_on_err("drawImage", result);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ctx.stroke_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_str());
    }

    fn set_shadow(&mut self, offset: Vec2, color: &str) {
        self.ctx.set_shadow_offset_x(offset.x as f64);
        self.ctx.set_shadow_offset_y(offset.y as f64);
        self.ctx.set_shadow_color(color);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) {
        warn_on_err("fillText", self.ctx.fill_text(text, pos.x as f64, pos.y as f64));
    }

    fn clear(&mut self, rect: Rect) {
        self.ctx.clear_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        warn_on_err("translate", self.ctx.translate(offset.x as f64, offset.y as f64));
    }

    fn rotate(&mut self, angle: f32) {
        warn_on_err("rotate", self.ctx.rotate(angle as f64));
    }
}
