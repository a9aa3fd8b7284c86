// Drawing seam between the particle field and whatever paints it. The browser
// build paints through a Canvas 2D context; tests record the draw calls.

use crate::color::Color;
use std::f64::consts::PI;
use thiserror::Error;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The host could not hand us something to draw on. Every variant is handled
/// the same way: the backdrop stays inert.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingCanvas(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
}

pub trait Surface {
    fn resize(&mut self, width: f64, height: f64);
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color);
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Color);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Grabs the 2d context; a canvas already bound to webgl, or a host
    // without canvas support, reports ContextUnavailable
    pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SurfaceError::ContextUnavailable)?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn find(canvas_id: &str) -> Result<HtmlCanvasElement, SurfaceError> {
        let document = web_sys::window()
            .ok_or(SurfaceError::NoWindow)?
            .document()
            .ok_or(SurfaceError::NoDocument)?;
        document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SurfaceError::MissingCanvas(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::NotACanvas(canvas_id.to_owned()))
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        self.context.begin_path();
        if let Err(e) = self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0) {
            // Only thrown for a negative radius
            log::debug!("arc rejected: {:?}", e);
            return;
        }
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill();
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Color) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(width);
        self.context.stroke();
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCommand {
        Resize(f64, f64),
        Clear(f64, f64),
        Circle(Vector2<f64>, f64, Color),
        Line(Vector2<f64>, Vector2<f64>, f64, Color),
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub commands: Vec<DrawCommand>,
    }

    impl RecordingSurface {
        pub fn take(&mut self) -> Vec<DrawCommand> {
            std::mem::take(&mut self.commands)
        }

        pub fn lines(&self) -> Vec<&DrawCommand> {
            self.commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Line(..)))
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn resize(&mut self, width: f64, height: f64) {
            self.commands.push(DrawCommand::Resize(width, height));
        }

        fn clear(&mut self, width: f64, height: f64) {
            self.commands.push(DrawCommand::Clear(width, height));
        }

        fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
            self.commands.push(DrawCommand::Circle(center, radius, color));
        }

        fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Color) {
            self.commands.push(DrawCommand::Line(from, to, width, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_the_missing_piece() {
        assert_eq!(
            SurfaceError::MissingCanvas("hero-canvas".into()).to_string(),
            "no element with id `hero-canvas`"
        );
        assert_eq!(
            SurfaceError::ContextUnavailable.to_string(),
            "2d rendering context unavailable"
        );
    }
}
