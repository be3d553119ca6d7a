//! Pixel coverage for the drawing tools.
//!
//! Every function here is write-only with respect to the canvas: it computes
//! which pixels a stroke covers and writes them through `set_clipped`, so
//! geometry overhanging the canvas edge is legal and simply clipped. None of
//! these functions read pixels back.

use egui::Color32;

use crate::canvas::{Canvas, PixelPos};
use crate::error::EngineError;

fn check_thickness(thickness: i32) -> Result<(), EngineError> {
    if thickness <= 0 {
        Err(EngineError::InvalidThickness(thickness))
    } else {
        Ok(())
    }
}

/// Fill a disc of the given radius. Radius 0 marks exactly the center pixel.
///
/// Used for the pencil/eraser dot on a click with no drag; the engine derives
/// the radius as `thickness / 2` so the dot is flush with drag segments.
pub fn fill_dot(canvas: &mut Canvas, center: PixelPos, radius: i32, color: Color32) {
    if radius <= 0 {
        canvas.set_clipped(center.x, center.y, color);
        return;
    }
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                canvas.set_clipped(center.x + dx, center.y + dy, color);
            }
        }
    }
}

/// Bresenham line, one pixel wide.
fn line(canvas: &mut Canvas, a: PixelPos, b: PixelPos, color: Color32) {
    let dx = (b.x - a.x).abs();
    let dy = -((b.y - a.y).abs());
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut x = a.x;
    let mut y = a.y;

    loop {
        canvas.set_clipped(x, y, color);
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Squared distance from `(x, y)` to the segment `a`-`b`.
fn dist_sq_to_segment(x: i32, y: i32, a: PixelPos, b: PixelPos) -> f32 {
    let dx = (b.x - a.x) as f32;
    let dy = (b.y - a.y) as f32;
    let px = (x - a.x) as f32;
    let py = (y - a.y) as f32;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let ex = px - t * dx;
    let ey = py - t * dy;
    ex * ex + ey * ey
}

/// Stroke a straight segment of the given thickness between two points.
///
/// Thickness 1 is a plain Bresenham line. Thicker strokes scan-convert the
/// capsule of radius `thickness / 2` around the segment, so the stroke has
/// no interior gaps at any angle and its round ends are flush with the
/// pencil dot.
pub fn stroke_segment(
    canvas: &mut Canvas,
    a: PixelPos,
    b: PixelPos,
    thickness: i32,
    color: Color32,
) -> Result<(), EngineError> {
    check_thickness(thickness)?;

    if thickness == 1 {
        line(canvas, a, b, color);
        return Ok(());
    }

    let radius = thickness / 2;
    let r2 = (radius * radius) as f32;
    let min_x = a.x.min(b.x) - radius;
    let max_x = a.x.max(b.x) + radius;
    let min_y = a.y.min(b.y) - radius;
    let max_y = a.y.max(b.y) + radius;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if dist_sq_to_segment(x, y, a, b) <= r2 {
                canvas.set_clipped(x, y, color);
            }
        }
    }
    Ok(())
}

/// Stroke the outline of the axis-aligned rectangle spanned by two corners.
///
/// Corners are normalized per axis, so the drag direction does not matter.
/// The outline is drawn as four edge bands `thickness` deep growing inward;
/// a rectangle thinner than twice the stroke comes out fully filled.
pub fn stroke_rect_outline(
    canvas: &mut Canvas,
    corner_a: PixelPos,
    corner_b: PixelPos,
    thickness: i32,
    color: Color32,
) -> Result<(), EngineError> {
    check_thickness(thickness)?;

    let x0 = corner_a.x.min(corner_b.x);
    let x1 = corner_a.x.max(corner_b.x);
    let y0 = corner_a.y.min(corner_b.y);
    let y1 = corner_a.y.max(corner_b.y);
    let t = thickness - 1;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let edge = (x - x0).min(x1 - x).min(y - y0).min(y1 - y);
            if edge <= t {
                canvas.set_clipped(x, y, color);
            }
        }
    }
    Ok(())
}

/// Stroke the outline of the circle through `edge_point` centered at `center`.
///
/// The radius is the euclidean distance rounded to the nearest integer. The
/// ring covers every pixel whose center distance lies in
/// `[radius + 0.5 - thickness, radius + 0.5)`, growing inward like the
/// rectangle bands.
pub fn stroke_circle_outline(
    canvas: &mut Canvas,
    center: PixelPos,
    edge_point: PixelPos,
    thickness: i32,
    color: Color32,
) -> Result<(), EngineError> {
    check_thickness(thickness)?;

    let radius = center.distance(edge_point).round() as i32;
    if radius <= 0 {
        canvas.set_clipped(center.x, center.y, color);
        return Ok(());
    }

    let outer = radius as f32 + 0.5;
    let inner = (outer - thickness as f32).max(0.0);
    let outer2 = outer * outer;
    let inner2 = inner * inner;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let d2 = (dx * dx + dy * dy) as f32;
            if d2 >= inner2 && d2 < outer2 {
                canvas.set_clipped(center.x + dx, center.y + dy, color);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_canvas() -> Canvas {
        Canvas::new(20, 20, Color32::WHITE)
    }

    fn count_colored(canvas: &Canvas, color: Color32) -> usize {
        let mut n = 0;
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.get(x, y).unwrap() == color {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn dot_radius_zero_is_one_pixel() {
        let mut canvas = white_canvas();
        fill_dot(&mut canvas, PixelPos::new(5, 5), 0, Color32::BLACK);
        assert_eq!(count_colored(&canvas, Color32::BLACK), 1);
        assert_eq!(canvas.get(5, 5).unwrap(), Color32::BLACK);
    }

    #[test]
    fn dot_clips_at_canvas_edge() {
        let mut canvas = white_canvas();
        fill_dot(&mut canvas, PixelPos::new(0, 0), 3, Color32::BLACK);
        // Only the in-bounds quadrant of the disc lands.
        assert!(count_colored(&canvas, Color32::BLACK) > 0);
        assert_eq!(canvas.get(3, 0).unwrap(), Color32::BLACK);
    }

    #[test]
    fn thin_segment_is_exact_bresenham() {
        let mut canvas = white_canvas();
        stroke_segment(
            &mut canvas,
            PixelPos::new(2, 2),
            PixelPos::new(5, 5),
            1,
            Color32::BLACK,
        )
        .unwrap();
        for i in 2..=5 {
            assert_eq!(canvas.get(i, i).unwrap(), Color32::BLACK);
        }
        assert_eq!(count_colored(&canvas, Color32::BLACK), 4);
    }

    #[test]
    fn thick_diagonal_has_no_interior_gaps() {
        let mut canvas = white_canvas();
        let a = PixelPos::new(3, 3);
        let b = PixelPos::new(16, 16);
        stroke_segment(&mut canvas, a, b, 3, Color32::BLACK).unwrap();
        // Every pixel within half the thickness of the center line must be
        // covered, in particular the orthogonal neighbors of each diagonal
        // step like (10,11) and (11,10).
        for y in 0..20 {
            for x in 0..20 {
                if dist_sq_to_segment(x, y, a, b) <= 1.0 {
                    assert_eq!(
                        canvas.get(x, y).unwrap(),
                        Color32::BLACK,
                        "gap at ({x}, {y})"
                    );
                }
            }
        }
        assert_eq!(canvas.get(10, 11).unwrap(), Color32::BLACK);
        assert_eq!(canvas.get(11, 10).unwrap(), Color32::BLACK);
    }

    #[test]
    fn degenerate_segment_draws_cap() {
        let mut canvas = white_canvas();
        let p = PixelPos::new(10, 10);
        stroke_segment(&mut canvas, p, p, 5, Color32::BLACK).unwrap();
        assert_eq!(canvas.get(10, 10).unwrap(), Color32::BLACK);
        // Cap radius is thickness / 2.
        assert_eq!(canvas.get(12, 10).unwrap(), Color32::BLACK);
        assert_eq!(canvas.get(13, 10).unwrap(), Color32::WHITE);
    }

    #[test]
    fn segment_rejects_bad_thickness() {
        let mut canvas = white_canvas();
        let err = stroke_segment(
            &mut canvas,
            PixelPos::new(0, 0),
            PixelPos::new(5, 5),
            0,
            Color32::BLACK,
        )
        .unwrap_err();
        assert_eq!(err, EngineError::InvalidThickness(0));
        assert_eq!(count_colored(&canvas, Color32::BLACK), 0);
    }

    #[test]
    fn rect_outline_leaves_interior_untouched() {
        let mut canvas = white_canvas();
        stroke_rect_outline(
            &mut canvas,
            PixelPos::new(12, 12),
            PixelPos::new(2, 2),
            1,
            Color32::RED,
        )
        .unwrap();
        // Normalized corners regardless of drag direction.
        assert_eq!(canvas.get(2, 2).unwrap(), Color32::RED);
        assert_eq!(canvas.get(12, 12).unwrap(), Color32::RED);
        assert_eq!(canvas.get(7, 2).unwrap(), Color32::RED);
        assert_eq!(canvas.get(2, 7).unwrap(), Color32::RED);
        assert_eq!(canvas.get(7, 7).unwrap(), Color32::WHITE);
    }

    #[test]
    fn thick_rect_outline_grows_inward() {
        let mut canvas = white_canvas();
        stroke_rect_outline(
            &mut canvas,
            PixelPos::new(2, 2),
            PixelPos::new(12, 12),
            3,
            Color32::RED,
        )
        .unwrap();
        assert_eq!(canvas.get(4, 4).unwrap(), Color32::RED);
        assert_eq!(canvas.get(5, 5).unwrap(), Color32::WHITE);
        // Nothing spills outside the dragged corners.
        assert_eq!(canvas.get(1, 7).unwrap(), Color32::WHITE);
        assert_eq!(canvas.get(13, 7).unwrap(), Color32::WHITE);
    }

    #[test]
    fn circle_ring_hits_cardinal_points() {
        let mut canvas = white_canvas();
        let center = PixelPos::new(10, 10);
        stroke_circle_outline(&mut canvas, center, PixelPos::new(15, 10), 1, Color32::BLUE)
            .unwrap();
        assert_eq!(canvas.get(15, 10).unwrap(), Color32::BLUE);
        assert_eq!(canvas.get(5, 10).unwrap(), Color32::BLUE);
        assert_eq!(canvas.get(10, 15).unwrap(), Color32::BLUE);
        assert_eq!(canvas.get(10, 5).unwrap(), Color32::BLUE);
        // Center stays clear.
        assert_eq!(canvas.get(10, 10).unwrap(), Color32::WHITE);
    }

    #[test]
    fn circle_radius_rounds_euclidean_distance() {
        let mut canvas = white_canvas();
        // Distance from (10,10) to (13,14) is 5.
        stroke_circle_outline(
            &mut canvas,
            PixelPos::new(10, 10),
            PixelPos::new(13, 14),
            1,
            Color32::BLUE,
        )
        .unwrap();
        assert_eq!(canvas.get(15, 10).unwrap(), Color32::BLUE);
    }

    #[test]
    fn zero_radius_circle_is_one_pixel() {
        let mut canvas = white_canvas();
        let p = PixelPos::new(4, 4);
        stroke_circle_outline(&mut canvas, p, p, 3, Color32::BLUE).unwrap();
        assert_eq!(canvas.get(4, 4).unwrap(), Color32::BLUE);
        assert_eq!(count_colored(&canvas, Color32::BLUE), 1);
    }
}
