#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }

    /// Nearest integer pixel, halves rounded away from zero.
    pub fn round_to_pixel(self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

pub struct Geometry;

impl Geometry {
    /// Segment count keeping consecutive stamps at most half a radius apart.
    pub fn stroke_steps(from: Point, to: Point, radius: f64) -> usize {
        let spacing = radius * 0.5;
        let steps = (from.distance(to) / spacing).ceil();
        if steps.is_finite() && steps >= 1.0 { steps as usize } else { 1 }
    }

    /// Calls `callback` at `steps + 1` evenly spaced points from `from` to `to`, both ends included.
    pub fn interpolate_segment<F>(from: Point, to: Point, radius: f64, mut callback: F)
    where
        F: FnMut(Point),
    {
        let steps = Self::stroke_steps(from, to, radius);
        for i in 0..=steps {
            callback(from.lerp(to, i as f64 / steps as f64));
        }
    }
}
