use thiserror::Error;

/// Errors surfaced by the canvas engine.
///
/// All errors are synchronous return values checked by the immediate caller.
/// Bulk operations (rasterized strokes, flood fill) pre-clip and never report
/// `OutOfBounds` for geometry that merely overhangs the canvas edge.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Direct pixel access outside `[0, width) x [0, height)`.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    /// A stroke thickness that is zero or negative.
    #[error("stroke thickness must be positive, got {0}")]
    InvalidThickness(i32),
}
