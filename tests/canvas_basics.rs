use egui::Color32;
use raster_paint::{Canvas, EngineError};

#[test]
fn new_canvas_is_filled_with_background() {
    let canvas = Canvas::new(10, 10, Color32::WHITE);
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(canvas.get(x, y).unwrap(), Color32::WHITE);
        }
    }
}

#[test]
fn set_then_get_returns_written_color() {
    let mut canvas = Canvas::new(10, 10, Color32::WHITE);
    canvas.set(3, 7, Color32::RED).unwrap();
    assert_eq!(canvas.get(3, 7).unwrap(), Color32::RED);
    // Neighbors untouched.
    assert_eq!(canvas.get(4, 7).unwrap(), Color32::WHITE);
    assert_eq!(canvas.get(3, 6).unwrap(), Color32::WHITE);
}

#[test]
fn out_of_bounds_access_is_rejected() {
    let mut canvas = Canvas::new(10, 10, Color32::WHITE);
    for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 10), (100, 100)] {
        assert_eq!(
            canvas.get(x, y),
            Err(EngineError::OutOfBounds {
                x,
                y,
                width: 10,
                height: 10
            })
        );
        assert!(canvas.set(x, y, Color32::RED).is_err());
    }
    // Bounds are never clamped: the corners themselves still work.
    assert!(canvas.set(0, 0, Color32::RED).is_ok());
    assert!(canvas.set(9, 9, Color32::RED).is_ok());
}

#[test]
fn set_clipped_skips_out_of_range_silently() {
    let mut canvas = Canvas::new(10, 10, Color32::WHITE);
    canvas.set_clipped(-5, 3, Color32::RED);
    canvas.set_clipped(3, 12, Color32::RED);
    canvas.set_clipped(3, 3, Color32::RED);
    assert_eq!(canvas.get(3, 3).unwrap(), Color32::RED);
}

#[test]
fn fill_overwrites_every_pixel() {
    let mut canvas = Canvas::new(10, 10, Color32::WHITE);
    canvas.set(5, 5, Color32::BLACK).unwrap();
    canvas.fill(Color32::BLUE);
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(canvas.get(x, y).unwrap(), Color32::BLUE);
        }
    }
}

#[test]
fn snapshot_restore_round_trip() {
    let mut canvas = Canvas::new(10, 10, Color32::WHITE);
    canvas.set(2, 2, Color32::BLACK).unwrap();
    let snapshot = canvas.snapshot();

    canvas.fill(Color32::RED);
    assert_eq!(canvas.get(2, 2).unwrap(), Color32::RED);

    canvas.restore(&snapshot);
    assert_eq!(canvas.get(2, 2).unwrap(), Color32::BLACK);
    assert_eq!(canvas.get(5, 5).unwrap(), Color32::WHITE);
}

#[test]
fn snapshot_is_a_deep_copy() {
    let mut canvas = Canvas::new(10, 10, Color32::WHITE);
    let snapshot = canvas.snapshot();
    canvas.set(0, 0, Color32::BLACK).unwrap();
    // Mutating the canvas must not leak into the snapshot.
    canvas.restore(&snapshot);
    assert_eq!(canvas.get(0, 0).unwrap(), Color32::WHITE);
}

#[test]
fn to_color_image_matches_canvas() {
    let mut canvas = Canvas::new(4, 3, Color32::WHITE);
    canvas.set(1, 2, Color32::RED).unwrap();
    let image = canvas.to_color_image();
    assert_eq!(image.size, [4, 3]);
    assert_eq!(image.pixels[2 * 4 + 1], Color32::RED);
    assert_eq!(image.pixels[0], Color32::WHITE);
}
