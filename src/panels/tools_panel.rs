use egui::{Color32, Stroke, vec2};

use crate::PaintApp;
use crate::tool::{STROKE_WIDTHS, Tool};

/// The original program's 15-color palette, five per row.
const PALETTE: [Color32; 15] = [
    Color32::BLACK,
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 120, 255),
    Color32::from_rgb(255, 255, 0),
    Color32::from_rgb(180, 0, 255),
    Color32::from_rgb(255, 165, 0),
    Color32::from_rgb(255, 105, 180),
    Color32::from_rgb(165, 42, 42),
    Color32::from_rgb(0, 255, 255),
    Color32::from_rgb(173, 216, 230),
    Color32::from_rgb(144, 238, 144),
    Color32::WHITE,
    Color32::from_rgb(230, 230, 230),
    Color32::from_rgb(100, 100, 100),
];

const COLORS_PER_ROW: usize = 5;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::right("tools_panel")
        .resizable(false)
        .exact_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Raster Paint");
            ui.separator();

            ui.label("Colors:");
            for row in PALETTE.chunks(COLORS_PER_ROW) {
                ui.horizontal(|ui| {
                    for &color in row {
                        let selected = app.selection().color == color;
                        let button = egui::Button::new("")
                            .fill(color)
                            .min_size(vec2(28.0, 28.0))
                            .stroke(if selected {
                                Stroke::new(2.0, Color32::from_rgb(0, 120, 255))
                            } else {
                                Stroke::new(1.0, Color32::DARK_GRAY)
                            });
                        if ui.add(button).clicked() {
                            app.select_color(color);
                        }
                    }
                });
            }

            // Current color swatch.
            let (swatch, _) = ui.allocate_exact_size(vec2(160.0, 20.0), egui::Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, app.selection().color);
            ui.painter()
                .rect_stroke(swatch, 2.0, Stroke::new(1.0, Color32::BLACK));

            ui.separator();
            ui.label("Tools:");
            for &tool in Tool::all() {
                let selected = app.selection().tool == tool;
                if ui.selectable_label(selected, tool.label()).clicked() {
                    app.select_tool(tool);
                }
            }

            ui.separator();
            ui.label("Brush Size:");
            ui.horizontal_wrapped(|ui| {
                for &width in &STROKE_WIDTHS {
                    let selected = app.selection().thickness() == width;
                    if ui.selectable_label(selected, width.to_string()).clicked() {
                        app.select_thickness(width);
                    }
                }
            });

            // Live brush preview.
            ui.separator();
            ui.label("Current Brush:");
            let (preview, _) = ui.allocate_exact_size(vec2(160.0, 60.0), egui::Sense::hover());
            // Match the radius of the dot a click leaves on the canvas.
            let radius = (app.selection().thickness() as f32 / 2.0).max(0.5);
            ui.painter()
                .circle_filled(preview.center(), radius, app.selection().color);
            ui.painter()
                .circle_stroke(preview.center(), radius, Stroke::new(1.0, Color32::BLACK));

            ui.separator();
            if ui
                .add_sized(vec2(160.0, 32.0), egui::Button::new("Clear Canvas"))
                .clicked()
            {
                app.clear_canvas();
            }

            ui.separator();
            ui.small("Click and drag to draw.");
            ui.small("Shape tools preview until release.");
            ui.small("Fill recolors the clicked region.");
        });
}
