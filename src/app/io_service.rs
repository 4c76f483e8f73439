use std::path::Path;
use crate::app::error::Result;
use crate::core::layer::Layer;
use crate::core::pixel_buffer::PixelBuffer;
use crate::core::error::CoreError;
use tracing::warn;

pub struct IoService;

impl IoService {
    pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer> {
        let img = image::load_from_memory(bytes).inspect_err(|e| warn!(error = %e, "image decode failed"))?;
        Ok(PixelBuffer::from_image(&img)?)
    }

    pub fn load_image(path: &Path) -> Result<PixelBuffer> {
        let img = image::open(path).inspect_err(|e| warn!(path = %path.display(), error = %e, "image load failed"))?;
        Ok(PixelBuffer::from_image(&img)?)
    }

    /// Decodes `path` into a new layer named after the file.
    pub fn load_as_layer(path: &Path) -> Result<Layer> {
        let buffer = Self::load_image(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Layer::from_buffer(name, buffer))
    }

    pub fn save_png(path: &Path, frame: &PixelBuffer) -> Result<()> {
        let img = frame.to_rgba_image().ok_or(CoreError::BufferSizeMismatch {
            expected: frame.width() as usize * frame.height() as usize * 4,
            actual: frame.as_bytes().len(),
        })?;
        img.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
