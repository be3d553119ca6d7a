use egui::{Color32, Rect};

use crate::engine::PaintEngine;
use crate::input::{InputHandler, PointerEvent};
use crate::panels;
use crate::renderer::CanvasRenderer;
use crate::tool::{Tool, ToolSelection};

/// Drawing surface dimensions, from the original layout.
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;
pub const BACKGROUND: Color32 = Color32::WHITE;

fn new_engine() -> PaintEngine {
    PaintEngine::new(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND)
}

/// The host application: owns the engine, the tool selection and the
/// input/render plumbing. The tool selection is persisted across restarts;
/// the canvas is not.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PaintApp {
    selection: ToolSelection,
    #[serde(skip, default = "new_engine")]
    engine: PaintEngine,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: CanvasRenderer,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            selection: ToolSelection::default(),
            engine: new_engine(),
            input: InputHandler::new(),
            renderer: CanvasRenderer::new(),
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value(storage, eframe::APP_KEY) {
                return app;
            }
        }
        Self::default()
    }

    pub fn engine(&self) -> &PaintEngine {
        &self.engine
    }

    pub fn selection(&self) -> &ToolSelection {
        &self.selection
    }

    /// Switch the active tool, aborting any gesture the previous tool left
    /// in progress.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.selection.tool != tool {
            self.engine.cancel_gesture();
            log::info!("tool selected: {}", tool.label());
            self.selection.tool = tool;
        }
    }

    pub fn select_color(&mut self, color: Color32) {
        self.selection.color = color;
    }

    pub fn select_thickness(&mut self, thickness: i32) {
        // The size picker only offers valid widths; a rejection is logged by
        // the selection itself.
        let _ = self.selection.set_thickness(thickness);
    }

    pub fn clear_canvas(&mut self) {
        self.engine.clear_canvas();
    }

    /// Forward this frame's pointer input to the engine.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        for event in self.input.process_input(ctx, canvas_rect) {
            let result = match event {
                PointerEvent::Down(pos) => self.engine.pointer_down(pos, &self.selection),
                PointerEvent::Move(pos) => self.engine.pointer_move(pos, &self.selection),
                PointerEvent::Up(pos) => self.engine.pointer_up(pos, &self.selection),
            };
            if let Err(err) = result {
                log::error!("pointer event rejected: {err}");
            }
        }
    }

    /// Paint the canvas into `canvas_rect`.
    pub fn render_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: Rect) {
        self.renderer.paint(ctx, painter, rect, self.engine.canvas());
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
