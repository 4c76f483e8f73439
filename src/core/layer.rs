use super::color::Color;
use super::id_gen::{self, LayerId};
use super::pixel_buffer::PixelBuffer;
use crate::core::error::Result;

#[derive(Debug)]
pub struct Layer {
    id: LayerId,
    pub name: String,
    pub visible: bool,
    opacity: f32,
    buffer: PixelBuffer,
}

/// A copy is a new layer: same pixels and properties, fresh id.
impl Clone for Layer {
    fn clone(&self) -> Self {
        Self {
            id: id_gen::gen_id(),
            name: self.name.clone(),
            visible: self.visible,
            opacity: self.opacity,
            buffer: self.buffer.clone(),
        }
    }
}

impl Layer {
    pub fn new_blank(name: impl Into<String>, width: u32, height: u32) -> Result<Self> {
        Ok(Self::from_buffer(name, PixelBuffer::new(width, height)?))
    }

    pub fn from_buffer(name: impl Into<String>, buffer: PixelBuffer) -> Self {
        Self {
            id: id_gen::gen_id(),
            name: name.into(),
            visible: true,
            opacity: 1.0,
            buffer,
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        if opacity.is_nan() {
            return;
        }
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color> {
        self.buffer.get(x, y)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.buffer.set(x, y, color)
    }

    /// Paints alternating `light`/`dark` squares of `cell` pixels, starting light at the origin.
    pub fn fill_checkerboard(&mut self, cell: u32, light: Color, dark: Color) {
        let cell = cell.max(1);
        let width = self.buffer.width();
        for (y, row) in self.buffer.rows_mut().enumerate() {
            let cy = y as u32 / cell;
            for x in 0..width {
                let color = if (x / cell + cy) % 2 == 0 { light } else { dark };
                let idx = x as usize * 4;
                row[idx..idx + 4].copy_from_slice(&color.to_array());
            }
        }
    }
}
