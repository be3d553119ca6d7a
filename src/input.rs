use egui::{Context, PointerButton, Rect};

use crate::canvas::PixelPos;

/// A pointer event in canvas-local integer coordinates.
///
/// Coordinates may lie outside the canvas; the engine decides what is in
/// bounds.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    Down(PixelPos),
    Move(PixelPos),
    Up(PixelPos),
}

/// Converts raw egui pointer input into engine events relative to the canvas
/// rect.
#[derive(Default)]
pub struct InputHandler {
    last_pointer_pos: Option<egui::Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn canvas_pos(canvas_rect: Rect, pos: egui::Pos2) -> PixelPos {
        PixelPos::new(
            (pos.x - canvas_rect.min.x).floor() as i32,
            (pos.y - canvas_rect.min.y).floor() as i32,
        )
    }

    /// Drain this frame's pointer input into engine events.
    ///
    /// A release with the pointer outside the window still produces an `Up`
    /// at the last known position, so an in-progress gesture always gets its
    /// finalizing event.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos {
                    events.push(PointerEvent::Move(Self::canvas_pos(canvas_rect, pos)));
                }
                self.last_pointer_pos = Some(pos);
            }

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = hover.or(self.last_pointer_pos) {
                    events.push(PointerEvent::Down(Self::canvas_pos(canvas_rect, pos)));
                }
            }
            if input.pointer.button_released(PointerButton::Primary) {
                if let Some(pos) = hover.or(self.last_pointer_pos) {
                    events.push(PointerEvent::Up(Self::canvas_pos(canvas_rect, pos)));
                }
            }
        });

        events
    }
}
