use crate::app::view_state::ZoomDirection;
use crate::core::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Pointer input in screen space, as delivered by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64, button: PointerButton },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64, button: PointerButton },
    ScrollZoom { x: f64, y: f64, direction: ZoomDirection, modifier_held: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEffect {
    None,
    /// The event was not consumed; the caller should pass it on.
    Ignored,
    RedrawCanvas,
    Error(CoreError),
}

impl EngineEffect {
    pub fn needs_redraw(&self) -> bool {
        matches!(self, EngineEffect::RedrawCanvas)
    }
}
