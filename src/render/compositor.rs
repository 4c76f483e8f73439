use crate::app::view_state::ViewState;
use crate::core::color::Color;
use crate::core::error::Result;
use crate::core::layer::Layer;
use crate::core::pixel_buffer::PixelBuffer;
use crate::render::blend::blend_over;

pub const DEFAULT_BACKGROUND: Color = Color::opaque(20, 20, 20);

pub struct Compositor;

/// Canvas pixel sampled by each output column (or row): nearest neighbour after
/// scaling by zoom, offset by the floored pan. Saturates for huge pans so the
/// sample lands off-canvas instead of wrapping.
fn sample_axis(len: u32, zoom: f64, pan: f64) -> Vec<i64> {
    let origin = pan.floor() as i64;
    (0..len)
        .map(|s| (((s as f64 + 0.5) / zoom).floor() as i64).saturating_add(origin))
        .collect()
}

impl Compositor {
    /// Renders `layers` (bottom first) into a fresh `width`×`height` frame.
    pub fn render(
        layers: &[Layer],
        view: &ViewState,
        width: u32,
        height: u32,
        background: Color,
    ) -> Result<PixelBuffer> {
        let mut frame = PixelBuffer::filled(width, height, background)?;
        let zoom = view.zoom();
        let cols = sample_axis(width, zoom, view.pan_x);
        let rows = sample_axis(height, zoom, view.pan_y);

        for layer in layers.iter().filter(|l| l.visible && l.opacity() > 0.0) {
            Self::composite_layer(&mut frame, layer, &cols, &rows);
        }
        Ok(frame)
    }

    fn composite_layer(frame: &mut PixelBuffer, layer: &Layer, cols: &[i64], rows: &[i64]) {
        let src = layer.buffer();
        let (lw, lh) = (src.width() as i64, src.height() as i64);
        let src_stride = lw as usize * 4;
        let src_bytes = src.as_bytes();
        let opacity = layer.opacity();

        for (row, &ty) in frame.rows_mut().zip(rows) {
            if ty < 0 || ty >= lh {
                continue;
            }
            let src_row = &src_bytes[ty as usize * src_stride..(ty as usize + 1) * src_stride];
            for (x, &tx) in cols.iter().enumerate() {
                if tx < 0 || tx >= lw {
                    continue;
                }
                let s = tx as usize * 4;
                if src_row[s + 3] == 0 {
                    continue;
                }
                let d = x * 4;
                let dst = Color::new(row[d], row[d + 1], row[d + 2], row[d + 3]);
                let px = Color::new(src_row[s], src_row[s + 1], src_row[s + 2], src_row[s + 3]);
                row[d..d + 4].copy_from_slice(&blend_over(dst, px, opacity).to_array());
            }
        }
    }
}
