#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("Raster Paint"),
        ..Default::default()
    };
    eframe::run_native(
        "raster_paint",
        native_options,
        Box::new(|cc| Ok(Box::new(raster_paint::PaintApp::new(cc)))),
    )
}
