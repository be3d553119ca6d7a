use egui::{Color32, ColorImage};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// An integer pixel coordinate on the canvas.
///
/// Pointer events arrive in canvas-local coordinates and may lie outside the
/// canvas; only `Canvas` decides what is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance(self, other: PixelPos) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for PixelPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An immutable deep copy of the full pixel grid.
///
/// Taken when a shape tool's preview begins and held for the duration of one
/// press-drag-release gesture; `Canvas::restore` blits it back to undo the
/// transient preview before the final commit.
#[derive(Debug, Clone)]
pub struct CanvasSnapshot {
    pixels: Vec<Color32>,
}

/// The fixed-size raster surface every tool mutates.
///
/// Pixels are stored row-major in a flat buffer. Direct `get`/`set` reject
/// out-of-bounds coordinates instead of clamping; bulk writers that have
/// already clipped their geometry use `set_clipped`.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color32>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if `(x, y)` addresses a pixel on this canvas.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    fn pixel_index(&self, x: i32, y: i32) -> usize {
        (y as u32 * self.width + x as u32) as usize
    }

    fn bounds_error(&self, x: i32, y: i32) -> EngineError {
        EngineError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Read the pixel at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<Color32, EngineError> {
        if self.contains(x, y) {
            Ok(self.pixels[self.pixel_index(x, y)])
        } else {
            Err(self.bounds_error(x, y))
        }
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, color: Color32) -> Result<(), EngineError> {
        if self.contains(x, y) {
            let idx = self.pixel_index(x, y);
            self.pixels[idx] = color;
            Ok(())
        } else {
            Err(self.bounds_error(x, y))
        }
    }

    /// Write a pixel, silently skipping out-of-range coordinates.
    ///
    /// This is the write path for rasterized strokes and flood fill, whose
    /// geometry may legitimately overhang the canvas edge.
    pub fn set_clipped(&mut self, x: i32, y: i32, color: Color32) {
        if self.contains(x, y) {
            let idx = self.pixel_index(x, y);
            self.pixels[idx] = color;
        }
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Color32) {
        self.pixels.fill(color);
    }

    /// Deep copy of the current pixel grid.
    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot {
            pixels: self.pixels.clone(),
        }
    }

    /// Overwrite the live grid with a prior snapshot's contents.
    pub fn restore(&mut self, snapshot: &CanvasSnapshot) {
        debug_assert_eq!(snapshot.pixels.len(), self.pixels.len());
        self.pixels.copy_from_slice(&snapshot.pixels);
    }

    /// Bulk read of the full buffer for rendering.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage {
            size: [self.width as usize, self.height as usize],
            pixels: self.pixels.clone(),
        }
    }
}
