use std::path::Path;
use crate::app::config::{EditorConfig, CHECKER_DARK, CHECKER_LIGHT};
use crate::app::events::{EngineEffect, InputEvent, PointerButton};
use crate::app::io_service::IoService;
use crate::app::tool_manager::{ToolManager, ToolType};
use crate::app::view_state::{ViewState, ZoomDirection};
use crate::core::color::Color;
use crate::core::error::Result;
use crate::core::id_gen::LayerId;
use crate::core::layer::Layer;
use crate::core::layer_stack::{LayerEntry, LayerStack};
use crate::core::pixel_buffer::PixelBuffer;
use crate::render::compositor::Compositor;
use crate::tools::geometry::Point;
use crate::tools::tool_trait::{BrushSettings, ToolContext, ToolInput};
use rust_i18n::t;
use tracing::debug;

/// One editing session: layers, view, brush and tools, driven by discrete input events.
pub struct Editor {
    config: EditorConfig,
    layers: LayerStack,
    view: ViewState,
    brush: BrushSettings,
    tool_manager: ToolManager,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Result<Self> {
        let mut layers = LayerStack::new();
        if let Some(cell) = config.base_layer {
            let mut base = Layer::new_blank(t!("layer.base_name"), config.canvas_width, config.canvas_height)?;
            base.fill_checkerboard(cell, CHECKER_LIGHT, CHECKER_DARK);
            layers.push(base);
        }
        let brush = BrushSettings::new(config.brush_color, config.brush_radius);

        Ok(Self {
            config,
            layers,
            view: ViewState::default(),
            brush,
            tool_manager: ToolManager::new(),
        })
    }

    pub fn config(&self) -> &EditorConfig { &self.config }
    pub fn layers(&self) -> &LayerStack { &self.layers }
    pub fn view(&self) -> &ViewState { &self.view }
    pub fn brush(&self) -> &BrushSettings { &self.brush }
    pub fn tool_manager(&self) -> &ToolManager { &self.tool_manager }

    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    pub fn set_tool(&mut self, tool_type: ToolType) {
        self.tool_manager.set_tool(tool_type);
    }

    pub fn set_brush_color(&mut self, color: Color) {
        self.brush.color = color;
    }

    pub fn set_brush_radius(&mut self, radius: f64) {
        self.brush.set_radius(radius);
    }

    pub fn handle_input(&mut self, event: InputEvent) -> EngineEffect {
        let result = match event {
            InputEvent::PointerDown { x, y, button } => {
                if button != PointerButton::Primary {
                    return EngineEffect::None;
                }
                let input = self.tool_input(x, y);
                let (tools, mut ctx) = self.parts_mut();
                tools.handle_pointer_down(input, &mut ctx).map(|_| EngineEffect::RedrawCanvas)
            }
            InputEvent::PointerMove { x, y } => {
                let input = self.tool_input(x, y);
                let was_drawing = self.tool_manager.is_drawing();
                let (tools, mut ctx) = self.parts_mut();
                tools.handle_pointer_move(input, &mut ctx).map(|_| {
                    if was_drawing { EngineEffect::RedrawCanvas } else { EngineEffect::None }
                })
            }
            InputEvent::PointerUp { x, y, button } => {
                if button != PointerButton::Primary {
                    return EngineEffect::None;
                }
                let input = self.tool_input(x, y);
                let (tools, mut ctx) = self.parts_mut();
                tools.handle_pointer_up(input, &mut ctx).map(|_| EngineEffect::RedrawCanvas)
            }
            InputEvent::ScrollZoom { x, y, direction, modifier_held } => {
                if !modifier_held {
                    return EngineEffect::Ignored;
                }
                self.zoom_at(x, y, direction);
                Ok(EngineEffect::RedrawCanvas)
            }
        };

        match result {
            Ok(effect) => effect,
            Err(e) => EngineEffect::Error(e),
        }
    }

    pub fn zoom_at(&mut self, screen_x: f64, screen_y: f64, direction: ZoomDirection) {
        self.view = self.view.apply_zoom(screen_x, screen_y, direction);
        debug!(zoom = self.view.zoom(), pan_x = self.view.pan_x, pan_y = self.view.pan_y, "view zoomed");
    }

    pub fn render_frame(&self, width: u32, height: u32) -> Result<PixelBuffer> {
        Compositor::render(self.layers.layers(), &self.view, width, height, self.config.background)
    }

    pub fn layer_entries(&self) -> Vec<LayerEntry> {
        self.layers.entries()
    }

    pub fn set_active(&mut self, index: usize) -> Result<()> {
        self.layers.set_active(index)
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<()> {
        self.layers.set_visible(index, visible)
    }

    pub fn set_layer_opacity(&mut self, index: usize, opacity: f32) -> Result<()> {
        self.layers.set_opacity(index, opacity)
    }

    pub fn append_layer(&mut self, layer: Layer) -> LayerId {
        self.layers.push(layer)
    }

    /// Appends a transparent canvas-sized layer and makes it active.
    pub fn new_blank_layer(&mut self) -> Result<LayerId> {
        let layer = Layer::new_blank(t!("layer.default_name"), self.config.canvas_width, self.config.canvas_height)?;
        Ok(self.layers.push(layer))
    }

    pub fn remove_layer(&mut self, index: usize) -> Result<Layer> {
        self.layers.remove(index)
    }

    pub fn load_image_layer(&mut self, path: &Path) -> crate::app::error::Result<LayerId> {
        let layer = IoService::load_as_layer(path)?;
        Ok(self.layers.push(layer))
    }

    pub fn load_image_layer_from_bytes(&mut self, name: &str, bytes: &[u8]) -> crate::app::error::Result<LayerId> {
        let buffer = IoService::decode_bytes(bytes)?;
        Ok(self.layers.push(Layer::from_buffer(name, buffer)))
    }

    pub fn export_png(&self, path: &Path, width: u32, height: u32) -> crate::app::error::Result<()> {
        let frame = self.render_frame(width, height)?;
        IoService::save_png(path, &frame)
    }

    fn tool_input(&self, screen_x: f64, screen_y: f64) -> ToolInput {
        ToolInput {
            screen: Point::new(screen_x, screen_y),
            canvas: self.view.screen_to_canvas(screen_x, screen_y),
        }
    }

    fn parts_mut(&mut self) -> (&mut ToolManager, ToolContext<'_>) {
        (
            &mut self.tool_manager,
            ToolContext {
                layers: &mut self.layers,
                view: &mut self.view,
                brush: &self.brush,
            },
        )
    }
}
