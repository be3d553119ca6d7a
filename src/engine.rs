//! The tool state machine.
//!
//! `PaintEngine` turns pointer events plus the current tool selection into
//! canvas mutations. Continuous tools (pencil, eraser) draw permanently
//! segment by segment; shape tools (line, rectangle, circle) snapshot the
//! canvas on press, redraw a transient preview on every move, and commit the
//! final outline on release. The bucket tool flood-fills once per press.
//!
//! One pointer event is fully processed before the next is accepted, and the
//! host reads the canvas only between events, so no partial write is ever
//! observable.

use egui::Color32;

use crate::canvas::{Canvas, CanvasSnapshot, PixelPos};
use crate::error::EngineError;
use crate::fill::flood_fill;
use crate::raster;
use crate::tool::{Tool, ToolSelection};

/// Transient per-gesture state.
///
/// `last` always holds the most recent in-bounds position, so a release
/// outside the canvas can still finalize the gesture there.
#[derive(Debug)]
pub enum GestureState {
    /// No active gesture.
    Idle,
    /// Mid-gesture with a continuous tool; every move is already committed.
    Drawing { last: PixelPos },
    /// Mid-gesture with a shape tool; the live canvas carries a speculative
    /// preview that the snapshot undoes.
    Previewing {
        anchor: PixelPos,
        last: PixelPos,
        snapshot: CanvasSnapshot,
    },
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "Idle",
            GestureState::Drawing { .. } => "Drawing",
            GestureState::Previewing { .. } => "Previewing",
        }
    }
}

/// The canvas/tool engine.
///
/// Owns the pixel canvas and the gesture state; the tool selection stays with
/// the UI collaborator and is passed into every pointer event.
pub struct PaintEngine {
    canvas: Canvas,
    background: Color32,
    state: GestureState,
}

impl PaintEngine {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            canvas: Canvas::new(width, height, background),
            background,
            state: GestureState::Idle,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// True while a shape tool's speculative preview is live in the canvas
    /// buffer. The host renders the canvas as-is either way; this only
    /// signals that the current contents are not yet committed.
    pub fn is_previewing(&self) -> bool {
        matches!(self.state, GestureState::Previewing { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// The eraser strokes with the background color, everything else with the
    /// selected color.
    fn draw_color(&self, selection: &ToolSelection) -> Color32 {
        if selection.tool == Tool::Eraser {
            self.background
        } else {
            selection.color
        }
    }

    /// Pointer pressed at `pos` (canvas-local coordinates).
    ///
    /// Out-of-bounds presses and presses during an active gesture are
    /// ignored.
    pub fn pointer_down(
        &mut self,
        pos: PixelPos,
        selection: &ToolSelection,
    ) -> Result<(), EngineError> {
        if !self.canvas.contains(pos.x, pos.y) {
            return Ok(());
        }
        if !matches!(self.state, GestureState::Idle) {
            log::debug!("pointer down while {}, ignoring", self.state.name());
            return Ok(());
        }
        let thickness = selection.thickness();
        if thickness <= 0 {
            return Err(EngineError::InvalidThickness(thickness));
        }

        match selection.tool {
            Tool::Pencil | Tool::Eraser => {
                let color = self.draw_color(selection);
                raster::fill_dot(&mut self.canvas, pos, selection.dot_radius(), color);
                self.state = GestureState::Drawing { last: pos };
                log::debug!("gesture started: {:?} at ({}, {})", selection.tool, pos.x, pos.y);
            }
            Tool::Line | Tool::Rectangle | Tool::Circle => {
                self.state = GestureState::Previewing {
                    anchor: pos,
                    last: pos,
                    snapshot: self.canvas.snapshot(),
                };
                log::debug!("preview started: {:?} at ({}, {})", selection.tool, pos.x, pos.y);
            }
            Tool::Fill => {
                flood_fill(&mut self.canvas, pos.x, pos.y, selection.color)?;
            }
        }
        Ok(())
    }

    /// Pointer moved to `pos` while the button may be held.
    ///
    /// Moves outside the canvas pause the gesture without clearing it, so
    /// drawing resumes seamlessly when the pointer re-enters.
    pub fn pointer_move(
        &mut self,
        pos: PixelPos,
        selection: &ToolSelection,
    ) -> Result<(), EngineError> {
        if !self.canvas.contains(pos.x, pos.y) {
            return Ok(());
        }
        let color = self.draw_color(selection);

        match &mut self.state {
            GestureState::Idle => Ok(()),
            GestureState::Drawing { last } => {
                let from = *last;
                *last = pos;
                raster::stroke_segment(&mut self.canvas, from, pos, selection.thickness(), color)
            }
            GestureState::Previewing { anchor, last, snapshot } => {
                let anchor = *anchor;
                *last = pos;
                self.canvas.restore(snapshot);
                rasterize_shape(&mut self.canvas, selection, anchor, pos)
            }
        }
    }

    /// Pointer released at `pos`.
    ///
    /// A release outside the canvas finalizes a shape at the last in-bounds
    /// position rather than leaving the gesture stale.
    pub fn pointer_up(
        &mut self,
        pos: PixelPos,
        selection: &ToolSelection,
    ) -> Result<(), EngineError> {
        match std::mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Idle => Ok(()),
            GestureState::Drawing { .. } => {
                log::debug!("gesture finished: {:?}", selection.tool);
                Ok(())
            }
            GestureState::Previewing { anchor, last, snapshot } => {
                let end = if self.canvas.contains(pos.x, pos.y) {
                    pos
                } else {
                    last
                };
                self.canvas.restore(&snapshot);
                let result = rasterize_shape(&mut self.canvas, selection, anchor, end);
                log::debug!(
                    "shape committed: {:?} from ({}, {}) to ({}, {})",
                    selection.tool,
                    anchor.x,
                    anchor.y,
                    end.x,
                    end.y
                );
                result
            }
        }
    }

    /// Abort an in-progress gesture, undoing any live preview.
    ///
    /// Called by the host when the tool changes mid-gesture.
    pub fn cancel_gesture(&mut self) {
        match std::mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Idle => {}
            GestureState::Drawing { .. } => {
                log::debug!("drawing gesture cancelled");
            }
            GestureState::Previewing { snapshot, .. } => {
                self.canvas.restore(&snapshot);
                log::debug!("preview cancelled and restored");
            }
        }
    }

    /// Reset every pixel to the background color. Any active gesture is
    /// cancelled first.
    pub fn clear_canvas(&mut self) {
        self.cancel_gesture();
        self.canvas.fill(self.background);
        log::info!("canvas cleared");
    }
}

/// Rasterize the current shape tool's outline from `anchor` to `pos`.
fn rasterize_shape(
    canvas: &mut Canvas,
    selection: &ToolSelection,
    anchor: PixelPos,
    pos: PixelPos,
) -> Result<(), EngineError> {
    let thickness = selection.thickness();
    match selection.tool {
        Tool::Line => raster::stroke_segment(canvas, anchor, pos, thickness, selection.color),
        Tool::Rectangle => {
            raster::stroke_rect_outline(canvas, anchor, pos, thickness, selection.color)
        }
        Tool::Circle => {
            raster::stroke_circle_outline(canvas, anchor, pos, thickness, selection.color)
        }
        // Continuous tools and fill never reach the preview path.
        Tool::Pencil | Tool::Eraser | Tool::Fill => Ok(()),
    }
}
