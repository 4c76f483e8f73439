use std::collections::HashMap;
use crate::tools::tool_trait::{Tool, ToolContext, ToolInput};
use crate::tools::paint::{PaintMode, PaintTool};
use crate::tools::bucket::BucketTool;
use crate::tools::pan::PanTool;
use crate::core::error::CoreError;
use tracing::debug;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum ToolType {
    #[default]
    Brush,
    Eraser,
    Bucket,
    Pan,
}

pub struct ToolManager {
    active_type: ToolType,
    tools: HashMap<ToolType, Box<dyn Tool>>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    pub fn new() -> Self {
        let mut tools: HashMap<ToolType, Box<dyn Tool>> = HashMap::new();
        tools.insert(ToolType::Brush, Box::new(PaintTool::new(PaintMode::Brush)));
        tools.insert(ToolType::Eraser, Box::new(PaintTool::new(PaintMode::Eraser)));
        tools.insert(ToolType::Bucket, Box::new(BucketTool::new()));
        tools.insert(ToolType::Pan, Box::new(PanTool::new()));

        Self {
            active_type: ToolType::default(),
            tools,
        }
    }

    pub fn active_type(&self) -> ToolType {
        self.active_type
    }

    /// Switching tools abandons the previous tool's session.
    pub fn set_tool(&mut self, tool_type: ToolType) {
        if self.active_type == tool_type {
            return;
        }
        if let Some(tool) = self.tools.get_mut(&self.active_type) {
            tool.on_cancel();
        }
        debug!(from = ?self.active_type, to = ?tool_type, "tool switched");
        self.active_type = tool_type;
    }

    pub fn is_drawing(&self) -> bool {
        self.tools.get(&self.active_type).is_some_and(|t| t.is_active())
    }

    pub fn handle_pointer_down(&mut self, input: ToolInput, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        match self.tools.get_mut(&self.active_type) {
            Some(tool) => tool.on_pointer_down(input, ctx),
            None => Ok(()),
        }
    }

    pub fn handle_pointer_move(&mut self, input: ToolInput, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        match self.tools.get_mut(&self.active_type) {
            Some(tool) => tool.on_pointer_move(input, ctx),
            None => Ok(()),
        }
    }

    pub fn handle_pointer_up(&mut self, input: ToolInput, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        match self.tools.get_mut(&self.active_type) {
            Some(tool) => tool.on_pointer_up(input, ctx),
            None => Ok(()),
        }
    }
}
