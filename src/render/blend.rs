use crate::core::color::Color;

/// Straight-alpha source-over with the source alpha scaled by `opacity`.
///
/// Over an opaque destination this is `src * k + dst * (1 - k)` per channel with
/// `k = src_alpha * opacity`.
#[inline]
pub fn blend_over(dst: Color, src: Color, opacity: f32) -> Color {
    let k = src.a as f32 / 255.0 * opacity.clamp(0.0, 1.0);
    if k <= 0.0 {
        return dst;
    }
    let da = dst.a as f32 / 255.0;
    let dst_w = da * (1.0 - k);
    let out_a = k + dst_w;
    if out_a <= 0.0 {
        return Color::transparent();
    }
    let ch = |s: u8, d: u8| ((s as f32 * k + d as f32 * dst_w) / out_a).round().clamp(0.0, 255.0) as u8;
    Color::new(
        ch(src.r, dst.r),
        ch(src.g, dst.g),
        ch(src.b, dst.b),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_half_red_over_white() {
        let res = blend_over(Color::WHITE, Color::opaque(255, 0, 0), 0.5);
        assert_eq!(res, Color::new(255, 128, 128, 255));
    }

    #[test]
    fn test_blend_opaque_replaces() {
        let res = blend_over(Color::opaque(1, 2, 3), Color::opaque(200, 100, 50), 1.0);
        assert_eq!(res, Color::opaque(200, 100, 50));
    }

    #[test]
    fn test_blend_transparent_src_is_noop() {
        let dst = Color::new(10, 20, 30, 40);
        assert_eq!(blend_over(dst, Color::new(255, 255, 255, 0), 1.0), dst);
        assert_eq!(blend_over(dst, Color::WHITE, 0.0), dst);
    }

    #[test]
    fn test_blend_onto_transparent_keeps_src_color() {
        let res = blend_over(Color::transparent(), Color::new(0, 0, 255, 128), 1.0);
        assert_eq!(res, Color::new(0, 0, 255, 128));
    }

    #[test]
    fn test_blend_semi_over_semi() {
        let res = blend_over(Color::new(0, 0, 0, 128), Color::new(255, 255, 255, 128), 1.0);
        assert_eq!(res.a, 192);
        assert!(res.r > 160 && res.r < 175);
    }
}
