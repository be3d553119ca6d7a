use egui::{Color32, Sense, Stroke, vec2};

use crate::PaintApp;
use crate::app::{CANVAS_HEIGHT, CANVAS_WIDTH};

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let size = vec2(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
        let (canvas_rect, _response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        // Input first, then render: the frame shows the result of every
        // event processed this frame.
        app.handle_canvas_input(ctx, canvas_rect);
        app.render_canvas(ctx, ui.painter(), canvas_rect);

        ui.painter()
            .rect_stroke(canvas_rect, 0.0, Stroke::new(1.0, Color32::DARK_GRAY));
    });
}
