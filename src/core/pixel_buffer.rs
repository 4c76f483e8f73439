use super::color::Color;
use crate::core::error::{CoreError, Result};

/// Owned RGBA8 grid, row-major, straight alpha. Dimensions never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

fn byte_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(CoreError::InvalidDimensions { width, height })
}

impl PixelBuffer {
    /// Allocates a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = byte_len(width, height)?;
        Ok(Self { width, height, data: vec![0; len] })
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let mut buffer = Self::new(width, height)?;
        buffer.fill(color);
        Ok(buffer)
    }

    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(CoreError::BufferSizeMismatch { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    /// Imports BGRA-ordered bytes (the in-memory order of little-endian ARGB32 surfaces).
    pub fn from_bgra(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(CoreError::BufferSizeMismatch { expected, actual: data.len() });
        }
        let mut rgba = Vec::with_capacity(expected);
        for px in data.chunks_exact(4) {
            rgba.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
        }
        Ok(Self { width, height, data: rgba })
    }

    pub fn from_image(image: &image::DynamicImage) -> Result<Self> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width, height, rgba.into_raw())
    }

    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(CoreError::OutOfBounds { x, y });
        }
        Ok((y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn get(&self, x: u32, y: u32) -> Result<Color> {
        let idx = self.index(x, y)?;
        let d = &self.data[idx..idx + 4];
        Ok(Color::new(d[0], d[1], d[2], d[3]))
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        let idx = self.index(x, y)?;
        self.data[idx..idx + 4].copy_from_slice(&color.to_array());
        Ok(())
    }

    pub fn fill(&mut self, color: Color) {
        let px = color.to_array();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Iterates rows as RGBA byte slices, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.width as usize * 4)
    }

    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(self.width as usize * 4)
    }
}
