use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::extract::{RenderFrame, ShapeCommand};

/// Paints `RenderFrame`s onto a 2D canvas context
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| "canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context has an unexpected type".to_string())?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Resize the backing store (clears the canvas)
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn draw(&self, frame: &RenderFrame) -> Result<(), String> {
        let w = frame.width as f64;
        let h = frame.height as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        if !frame.background.eq_ignore_ascii_case("transparent") {
            self.ctx.set_fill_style_str(&frame.background);
            self.ctx.fill_rect(0.0, 0.0, w, h);
        }

        for shape in &frame.shapes {
            self.ctx.begin_path();
            let fill = match shape {
                ShapeCommand::Circle { center, radius, fill } => {
                    self.ctx
                        .arc(
                            center.x as f64,
                            center.y as f64,
                            *radius as f64,
                            0.0,
                            std::f64::consts::TAU,
                        )
                        .map_err(js_error)?;
                    fill
                }
                ShapeCommand::Polygon { points, fill } => {
                    let Some((first, rest)) = points.split_first() else {
                        continue;
                    };
                    self.ctx.move_to(first.x as f64, first.y as f64);
                    for p in rest {
                        self.ctx.line_to(p.x as f64, p.y as f64);
                    }
                    self.ctx.close_path();
                    fill
                }
            };

            if frame.wireframes {
                self.ctx.set_stroke_style_str(fill);
                self.ctx.stroke();
            } else {
                self.ctx.set_fill_style_str(fill);
                self.ctx.fill();
            }
        }
        Ok(())
    }
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
