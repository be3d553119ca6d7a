use egui::{Color32, Context, Painter, Rect, TextureHandle, TextureOptions, pos2};

use crate::canvas::Canvas;

/// Uploads the pixel canvas as an egui texture and paints it each frame.
///
/// There is no separate preview overlay: shape previews are written into the
/// canvas buffer itself and undone via snapshot restore, so rendering the
/// canvas as-is is always correct.
#[derive(Default)]
pub struct CanvasRenderer {
    texture: Option<TextureHandle>,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the texture from the canvas and paint it 1:1 into `rect`.
    pub fn paint(&mut self, ctx: &Context, painter: &Painter, rect: Rect, canvas: &Canvas) {
        let image = canvas.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }
}
