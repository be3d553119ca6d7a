use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The stroke widths offered by the size picker.
pub const STROKE_WIDTHS: [i32; 7] = [1, 3, 5, 8, 12, 18, 25];

/// The closed set of drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
    Line,
    Rectangle,
    Circle,
    Fill,
}

impl Tool {
    pub fn all() -> &'static [Tool] {
        &[
            Tool::Pencil,
            Tool::Eraser,
            Tool::Line,
            Tool::Rectangle,
            Tool::Circle,
            Tool::Fill,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Fill => "Fill",
        }
    }

    /// Pencil and eraser draw permanently segment by segment.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }

    /// Line, rectangle and circle preview during the gesture and commit on
    /// release.
    pub fn is_shape(&self) -> bool {
        matches!(self, Tool::Line | Tool::Rectangle | Tool::Circle)
    }
}

/// The current tool, draw color and stroke thickness.
///
/// Owned by the UI collaborator and read by the engine on every pointer
/// event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSelection {
    pub tool: Tool,
    pub color: Color32,
    thickness: i32,
}

impl Default for ToolSelection {
    fn default() -> Self {
        Self {
            tool: Tool::Pencil,
            color: Color32::BLACK,
            thickness: 5,
        }
    }
}

impl ToolSelection {
    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    /// Radius of the dot a single click leaves on the canvas.
    pub fn dot_radius(&self) -> i32 {
        self.thickness / 2
    }

    /// Update the stroke thickness. Zero or negative widths are rejected and
    /// the previous value kept.
    pub fn set_thickness(&mut self, thickness: i32) -> Result<(), EngineError> {
        if thickness <= 0 {
            log::warn!("rejected stroke thickness {thickness}");
            return Err(EngineError::InvalidThickness(thickness));
        }
        self.thickness = thickness;
        Ok(())
    }
}
