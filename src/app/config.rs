use crate::core::color::Color;
use crate::render::compositor::DEFAULT_BACKGROUND;

pub const CHECKER_LIGHT: Color = Color::opaque(204, 204, 204);
pub const CHECKER_DARK: Color = Color::opaque(153, 153, 153);

/// Session defaults for an [`Editor`](crate::app::engine::Editor).
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Size of layers created by "new blank layer".
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub brush_radius: f64,
    pub brush_color: Color,
    /// Color behind all layers in rendered frames.
    pub background: Color,
    /// Checkerboard cell size of the initial "Base" layer; `None` starts with an empty stack.
    pub base_layer: Option<u32>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 512,
            canvas_height: 512,
            brush_radius: 10.0,
            brush_color: Color::BLACK,
            background: DEFAULT_BACKGROUND,
            base_layer: Some(10),
        }
    }
}

impl EditorConfig {
    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_brush(mut self, color: Color, radius: f64) -> Self {
        self.brush_color = color;
        self.brush_radius = radius;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_base_layer(mut self, cell: Option<u32>) -> Self {
        self.base_layer = cell;
        self
    }
}
