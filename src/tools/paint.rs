use super::geometry::{Geometry, Point};
use super::tool_trait::{BrushSettings, Tool, ToolContext, ToolInput};
use crate::core::color::Color;
use crate::core::error::CoreError;
use crate::core::pixel_buffer::PixelBuffer;
use crate::render::blend::blend_over;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Blends the brush color source-over.
    Brush,
    /// Replaces covered pixels with transparent black.
    Eraser,
}

#[derive(Debug, Clone, Copy, Default)]
struct StrokeState {
    active: bool,
    last: Option<Point>,
}

/// Freehand stroke tool. Each instance owns its stroke session.
#[derive(Debug, Clone)]
pub struct PaintTool {
    mode: PaintMode,
    stroke: StrokeState,
}

impl PaintTool {
    pub fn new(mode: PaintMode) -> Self {
        Self { mode, stroke: StrokeState::default() }
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn last_point(&self) -> Option<Point> {
        self.stroke.last
    }

    /// Rasterizes one filled circle: every pixel whose center lies within the radius.
    pub fn stamp(&self, buffer: &mut PixelBuffer, center: Point, brush: &BrushSettings) -> Result<usize, CoreError> {
        let r = brush.radius();
        let x0 = ((center.x - r - 0.5).ceil() as i64).max(0);
        let y0 = ((center.y - r - 0.5).ceil() as i64).max(0);
        let x1 = ((center.x + r - 0.5).floor() as i64).min(buffer.width() as i64 - 1);
        let y1 = ((center.y + r - 0.5).floor() as i64).min(buffer.height() as i64 - 1);

        let mut covered = 0;
        for y in y0..=y1 {
            let dy = y as f64 + 0.5 - center.y;
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - center.x;
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (px, py) = (x as u32, y as u32);
                let out = match self.mode {
                    PaintMode::Brush => blend_over(buffer.get(px, py)?, brush.color, 1.0),
                    PaintMode::Eraser => Color::transparent(),
                };
                buffer.set(px, py, out)?;
                covered += 1;
            }
        }
        Ok(covered)
    }

    fn stamp_active(&self, point: Point, ctx: &mut ToolContext<'_>) -> Result<usize, CoreError> {
        match ctx.layers.active_mut() {
            Some(layer) => self.stamp(layer.buffer_mut(), point, ctx.brush),
            None => Ok(0),
        }
    }
}

impl Tool for PaintTool {
    fn on_pointer_down(&mut self, input: ToolInput, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        self.stroke = StrokeState { active: true, last: Some(input.canvas) };
        self.stamp_active(input.canvas, ctx)?;
        Ok(())
    }

    fn on_pointer_move(&mut self, input: ToolInput, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        let to = input.canvas;
        let from = self.stroke.last.replace(to);
        if !self.stroke.active {
            return Ok(());
        }
        let Some(from) = from else { return Ok(()) };
        if ctx.layers.active().is_none() {
            return Ok(());
        }

        let mut res = Ok(());
        let mut stamps = 0usize;
        Geometry::interpolate_segment(from, to, ctx.brush.radius(), |p| {
            if res.is_err() { return; }
            match self.stamp_active(p, ctx) {
                Ok(_) => stamps += 1,
                Err(e) => res = Err(e),
            }
        });
        trace!(mode = ?self.mode, stamps, "stroke segment");
        res
    }

    fn on_pointer_up(&mut self, _input: ToolInput, _ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        self.stroke = StrokeState::default();
        Ok(())
    }

    fn on_cancel(&mut self) {
        self.stroke = StrokeState::default();
    }

    fn is_active(&self) -> bool {
        self.stroke.active
    }
}

#[cfg(test)]
mod tests;
