//! Opaque 2D drawing surface
//!
//! The simulation issues draw commands through [`Surface`] and never touches
//! the canvas directly. Calls are immediate and stateless except for the
//! explicit save/translate/rotate/scale/restore transform stack and the
//! global alpha.

use glam::Vec2;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
    Top,
}

/// Drawing commands the core issues to its render target. Colors are CSS
/// color strings, matching the canvas 2D backend.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str, line_width: f32);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str);
    fn stroke_circle(&mut self, x: f32, y: f32, r: f32, color: &str, line_width: f32);
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: &str);
    fn line(&mut self, from: Vec2, to: Vec2, color: &str, line_width: f32);
    #[allow(clippy::too_many_arguments)]
    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &str,
        color: &str,
        align: TextAlign,
        baseline: TextBaseline,
    );
    #[allow(clippy::too_many_arguments)]
    fn stroke_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &str,
        color: &str,
        line_width: f32,
        align: TextAlign,
        baseline: TextBaseline,
    );
    fn set_alpha(&mut self, alpha: f32);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, sx: f32, sy: f32);
}

/// Discarding surface for exercising update/draw paths in unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct NullSurface;

#[cfg(test)]
impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn fill_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: &str) {}
    fn stroke_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: &str, _: f32) {}
    fn fill_circle(&mut self, _: f32, _: f32, _: f32, _: &str) {}
    fn stroke_circle(&mut self, _: f32, _: f32, _: f32, _: &str, _: f32) {}
    fn fill_triangle(&mut self, _: Vec2, _: Vec2, _: Vec2, _: &str) {}
    fn line(&mut self, _: Vec2, _: Vec2, _: &str, _: f32) {}
    fn fill_text(
        &mut self,
        _: &str,
        _: f32,
        _: f32,
        _: &str,
        _: &str,
        _: TextAlign,
        _: TextBaseline,
    ) {
    }
    fn stroke_text(
        &mut self,
        _: &str,
        _: f32,
        _: f32,
        _: &str,
        _: &str,
        _: f32,
        _: TextAlign,
        _: TextBaseline,
    ) {
    }
    fn set_alpha(&mut self, _: f32) {}
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _: f32, _: f32) {}
    fn rotate(&mut self, _: f32) {}
    fn scale(&mut self, _: f32, _: f32) {}
}
