//! Flood fill for the bucket tool.

use std::collections::VecDeque;

use egui::Color32;

use crate::canvas::Canvas;
use crate::error::EngineError;

/// Flood-fill the 4-connected region around `(x, y)` with `new_color`.
///
/// The target color is whatever the seed pixel currently holds. Filling with
/// the target color itself is a defined no-op, not an error. Returns the
/// number of recolored pixels.
///
/// Each cell is enqueued at most once (visited bitmap keyed by pixel index),
/// bounding the work by `width * height`. The fill is synchronous and runs to
/// completion before returning; the caller accepts blocking for the duration.
pub fn flood_fill(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    new_color: Color32,
) -> Result<usize, EngineError> {
    let target = canvas.get(x, y)?;
    if target == new_color {
        log::debug!("flood fill at ({x}, {y}) is a no-op, region already {new_color:?}");
        return Ok(0);
    }

    let width = canvas.width() as i32;
    let height = canvas.height() as i32;
    let mut visited = vec![false; (width * height) as usize];
    let mut queue = VecDeque::new();

    visited[(y * width + x) as usize] = true;
    queue.push_back((x, y));
    let mut recolored = 0usize;

    while let Some((cx, cy)) = queue.pop_front() {
        if canvas.get(cx, cy)? != target {
            continue;
        }
        canvas.set(cx, cy, new_color)?;
        recolored += 1;

        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let nx = cx + dx;
            let ny = cy + dy;
            if nx < 0 || nx >= width || ny < 0 || ny >= height {
                continue;
            }
            let idx = (ny * width + nx) as usize;
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    log::info!("flood fill at ({x}, {y}) recolored {recolored} pixels");
    Ok(recolored)
}
