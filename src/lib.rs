#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod engine;
pub mod error;
pub mod fill;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod tool;

pub use app::PaintApp;
pub use canvas::{Canvas, CanvasSnapshot, PixelPos};
pub use engine::{GestureState, PaintEngine};
pub use error::EngineError;
pub use fill::flood_fill;
pub use input::{InputHandler, PointerEvent};
pub use renderer::CanvasRenderer;
pub use tool::{STROKE_WIDTHS, Tool, ToolSelection};
