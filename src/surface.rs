// The animator's only view of the host drawing surface: clear the frame,
// fill circles, stroke line segments, with per-call opacity. The browser
// implementation wraps a 2d canvas context; tests record the calls instead.

use crate::color::Color;

pub trait Surface {
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, alpha: f64);
}

#[cfg(target_arch = "wasm32")]
pub use self::canvas::CanvasSurface;

#[cfg(target_arch = "wasm32")]
mod canvas {
    use super::Surface;
    use crate::color::Color;
    use wasm_bindgen::JsValue;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    pub struct CanvasSurface {
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
        width: f64,
        height: f64,
    }

    impl CanvasSurface {
        pub fn new(canvas: HtmlCanvasElement, context: CanvasRenderingContext2d) -> CanvasSurface {
            let width = canvas.width() as f64;
            let height = canvas.height() as f64;
            CanvasSurface {
                canvas,
                context,
                width,
                height,
            }
        }

        // Resizes the canvas element itself, not just the cached dimensions.
        pub fn set_size(&mut self, width: f64, height: f64) {
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
            self.width = width;
            self.height = height;
        }
    }

    impl Surface for CanvasSurface {
        fn clear(&mut self) {
            self.context.clear_rect(0.0, 0.0, self.width, self.height);
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
            self.context.begin_path();
            let _ = self
                .context
                .arc(x, y, radius, 0.0, 2.0 * std::f64::consts::PI);
            #[allow(deprecated)]
            self.context
                .set_fill_style(&JsValue::from_str(&color.to_css(alpha)));
            self.context.fill();
        }

        fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, alpha: f64) {
            self.context.begin_path();
            self.context.move_to(x1, y1);
            self.context.line_to(x2, y2);
            #[allow(deprecated)]
            self.context
                .set_stroke_style(&JsValue::from_str(&color.to_css(alpha)));
            self.context.set_line_width(1.0);
            self.context.stroke();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Surface;
    use crate::color::Color;

    /// Records draw calls so tests can assert on rendered output.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub clears: usize,
        /// (x, y, radius, alpha)
        pub circles: Vec<(f64, f64, f64, f64)>,
        /// (x1, y1, x2, y2, alpha)
        pub lines: Vec<(f64, f64, f64, f64, f64)>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, _color: Color, alpha: f64) {
            self.circles.push((x, y, radius, alpha));
        }

        fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, _color: Color, alpha: f64) {
            self.lines.push((x1, y1, x2, y2, alpha));
        }
    }
}
