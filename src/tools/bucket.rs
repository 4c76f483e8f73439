use super::tool_trait::{Tool, ToolContext, ToolInput};
use crate::core::color::Color;
use crate::core::error::CoreError;
use crate::core::pixel_buffer::PixelBuffer;
use tracing::trace;

/// Per-channel distance from the seed color still counted as part of the region.
pub const FILL_TOLERANCE: u8 = 10;

/// Replaces the 4-connected region around (`x`, `y`) whose pixels each lie within
/// `tolerance` of the seed pixel's original color. Returns the number of pixels written.
///
/// Nothing is written when the seed is outside the buffer or already equals `fill`.
pub fn flood_fill(buffer: &mut PixelBuffer, x: i64, y: i64, fill: Color, tolerance: u8) -> Result<usize, CoreError> {
    if !buffer.contains(x, y) {
        return Ok(0);
    }
    let target = buffer.get(x as u32, y as u32)?;
    if target == fill {
        return Ok(0);
    }

    let width = buffer.width() as usize;
    let mut visited = vec![false; width * buffer.height() as usize];
    let mut stack: Vec<(u32, u32)> = Vec::with_capacity(1024);
    visited[y as usize * width + x as usize] = true;
    stack.push((x as u32, y as u32));

    let mut filled = 0usize;
    while let Some((px, py)) = stack.pop() {
        buffer.set(px, py, fill)?;
        filled += 1;

        let neighbours = [
            (px as i64 + 1, py as i64),
            (px as i64 - 1, py as i64),
            (px as i64, py as i64 + 1),
            (px as i64, py as i64 - 1),
        ];
        for (nx, ny) in neighbours {
            if !buffer.contains(nx, ny) {
                continue;
            }
            let idx = ny as usize * width + nx as usize;
            if visited[idx] {
                continue;
            }
            if buffer.get(nx as u32, ny as u32)?.within_tolerance(target, tolerance) {
                visited[idx] = true;
                stack.push((nx as u32, ny as u32));
            }
        }
    }
    trace!(filled, "flood fill finished");
    Ok(filled)
}

/// Single-shot fill on press; motion and release do nothing.
#[derive(Debug, Clone)]
pub struct BucketTool {
    tolerance: u8,
}

impl Default for BucketTool {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketTool {
    pub fn new() -> Self {
        Self { tolerance: FILL_TOLERANCE }
    }

    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }
}

impl Tool for BucketTool {
    fn on_pointer_down(&mut self, input: ToolInput, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        let Some(layer) = ctx.layers.active_mut() else { return Ok(()) };
        let (x, y) = input.canvas.round_to_pixel();
        flood_fill(layer.buffer_mut(), x, y, ctx.brush.color, self.tolerance)?;
        Ok(())
    }

    fn on_pointer_move(&mut self, _input: ToolInput, _ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        Ok(())
    }

    fn on_pointer_up(&mut self, _input: ToolInput, _ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        Ok(())
    }
}
