use super::geometry::Point;
use crate::app::view_state::ViewState;
use crate::core::color::Color;
use crate::core::error::CoreError;
use crate::core::layer_stack::LayerStack;

pub const MIN_BRUSH_RADIUS: f64 = 1.0;
pub const MAX_BRUSH_RADIUS: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSettings {
    pub color: Color,
    radius: f64,
}

impl BrushSettings {
    pub fn new(color: Color, radius: f64) -> Self {
        let mut brush = Self { color, radius: MIN_BRUSH_RADIUS };
        brush.set_radius(radius);
        brush
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        if radius.is_nan() {
            return;
        }
        self.radius = radius.clamp(MIN_BRUSH_RADIUS, MAX_BRUSH_RADIUS);
    }
}

/// One pointer sample, in both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolInput {
    pub screen: Point,
    pub canvas: Point,
}

pub struct ToolContext<'a> {
    pub layers: &'a mut LayerStack,
    pub view: &'a mut ViewState,
    pub brush: &'a BrushSettings,
}

pub trait Tool {
    fn on_pointer_down(&mut self, input: ToolInput, ctx: &mut ToolContext<'_>) -> Result<(), CoreError>;
    fn on_pointer_move(&mut self, input: ToolInput, ctx: &mut ToolContext<'_>) -> Result<(), CoreError>;
    fn on_pointer_up(&mut self, input: ToolInput, ctx: &mut ToolContext<'_>) -> Result<(), CoreError>;
    /// Drops any in-progress session without touching pixels.
    fn on_cancel(&mut self) {}
    fn is_active(&self) -> bool {
        false
    }
}
