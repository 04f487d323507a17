//! Canvas 2D backend for the [`Surface`] trait (wasm only)

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Surface, TextAlign, TextBaseline};
use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn set_fill(&self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke(&self, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
    }

    fn set_text_style(&self, font: &str, align: TextAlign, baseline: TextBaseline) {
        self.ctx.set_font(font);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        self.ctx.set_text_baseline(match baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
            TextBaseline::Top => "top",
        });
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.set_fill(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str, line_width: f32) {
        self.set_stroke(color, line_width);
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str) {
        self.set_fill(color);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, x: f32, y: f32, r: f32, color: &str, line_width: f32) {
        self.set_stroke(color, line_width);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU);
        self.ctx.stroke();
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: &str) {
        self.set_fill(color);
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.line_to(c.x as f64, c.y as f64);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: &str, line_width: f32) {
        self.set_stroke(color, line_width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &str,
        color: &str,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        self.set_text_style(font, align, baseline);
        self.set_fill(color);
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }

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
    ) {
        self.set_text_style(font, align, baseline);
        self.set_stroke(color, line_width);
        let _ = self.ctx.stroke_text(text, x as f64, y as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        let _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        let _ = self.ctx.rotate(radians as f64);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        let _ = self.ctx.scale(sx as f64, sy as f64);
    }
}
