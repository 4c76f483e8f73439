use super::geometry::Point;
use super::tool_trait::{Tool, ToolContext, ToolInput};
use crate::core::error::CoreError;

/// Hand tool: dragging moves the view, never the pixels.
#[derive(Debug, Clone, Default)]
pub struct PanTool {
    last_screen: Option<Point>,
}

impl PanTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for PanTool {
    fn on_pointer_down(&mut self, input: ToolInput, _ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        self.last_screen = Some(input.screen);
        Ok(())
    }

    fn on_pointer_move(&mut self, input: ToolInput, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        if let Some(last) = self.last_screen {
            ctx.view.pan_by_screen(input.screen.x - last.x, input.screen.y - last.y);
            self.last_screen = Some(input.screen);
        }
        Ok(())
    }

    fn on_pointer_up(&mut self, _input: ToolInput, _ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        self.last_screen = None;
        Ok(())
    }

    fn on_cancel(&mut self) {
        self.last_screen = None;
    }

    fn is_active(&self) -> bool {
        self.last_screen.is_some()
    }
}
