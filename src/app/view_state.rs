use crate::tools::geometry::Point;

pub const ZOOM_STEP: f64 = 1.1;
pub const MIN_ZOOM: f64 = 0.01;
pub const MAX_ZOOM: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Pan offset in canvas pixels plus zoom factor. Screen = (canvas - pan) * zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub pan_x: f64,
    pub pan_y: f64,
    zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

fn sanitize_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() && zoom > 0.0 {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
        1.0
    }
}

impl ViewState {
    pub fn new(pan_x: f64, pan_y: f64, zoom: f64) -> Self {
        Self { pan_x, pan_y, zoom: sanitize_zoom(zoom) }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = sanitize_zoom(zoom);
    }

    pub fn screen_to_canvas(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(screen_x / self.zoom + self.pan_x, screen_y / self.zoom + self.pan_y)
    }

    pub fn canvas_to_screen(&self, canvas_x: f64, canvas_y: f64) -> Point {
        Point::new((canvas_x - self.pan_x) * self.zoom, (canvas_y - self.pan_y) * self.zoom)
    }

    /// Steps the zoom and re-pans so the canvas point under the pointer stays put.
    pub fn apply_zoom(&self, screen_x: f64, screen_y: f64, direction: ZoomDirection) -> ViewState {
        let old_zoom = self.zoom;
        let new_zoom = match direction {
            ZoomDirection::In => sanitize_zoom(old_zoom * ZOOM_STEP),
            ZoomDirection::Out => sanitize_zoom(old_zoom / ZOOM_STEP),
        };
        ViewState {
            pan_x: self.pan_x + screen_x / old_zoom - screen_x / new_zoom,
            pan_y: self.pan_y + screen_y / old_zoom - screen_y / new_zoom,
            zoom: new_zoom,
        }
    }

    /// Moves the view so content follows a screen-space drag of (`dx`, `dy`).
    pub fn pan_by_screen(&mut self, dx: f64, dy: f64) {
        self.pan_x -= dx / self.zoom;
        self.pan_y -= dy / self.zoom;
    }
}
