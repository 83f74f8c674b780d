//! Text layer of the logo panel.

use std::path::Path;

use ab_glyph::{FontArc, FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use modshot_common::error::{ModshotError, ModshotResult};

/// Solid black, used for text blurred into the glow.
pub const GLOW_TEXT: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Solid white, used for the crisp text on top.
pub const ALBEDO_TEXT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Measures and rasterizes a single line of text.
pub trait TextPainter: Send + Sync {
    /// Pixel extent of `text` at `size` px.
    fn measure(&self, text: &str, size: f32) -> (u32, u32);

    /// Blend `text` onto `canvas` with its top-left corner at `(x, y)`.
    /// Pixels outside the canvas are skipped.
    fn draw(&self, canvas: &mut RgbaImage, text: &str, size: f32, x: i32, y: i32, color: Rgba<u8>);
}

/// [`TextPainter`] backed by an outline font.
#[derive(Clone)]
pub struct GlyphPainter {
    font: FontArc,
}

impl GlyphPainter {
    pub fn new(font: FontArc) -> Self {
        Self { font }
    }

    /// Load a TrueType/OpenType font file.
    pub fn load(path: impl AsRef<Path>) -> ModshotResult<Self> {
        Self::load_face(path, 0)
    }

    /// Load face `index` of a font file or collection.
    pub fn load_face(path: impl AsRef<Path>, index: u32) -> ModshotResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| ModshotError::font(format!("cannot read {}: {e}", path.display())))?;
        let font = FontVec::try_from_vec_and_index(bytes, index)
            .map_err(|e| ModshotError::font(format!("invalid font {}: {e}", path.display())))?;
        Ok(Self::new(FontArc::new(font)))
    }
}

impl std::fmt::Debug for GlyphPainter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphPainter").finish_non_exhaustive()
    }
}

impl TextPainter for GlyphPainter {
    fn measure(&self, text: &str, size: f32) -> (u32, u32) {
        text_size(PxScale::from(size), &self.font, text)
    }

    fn draw(&self, canvas: &mut RgbaImage, text: &str, size: f32, x: i32, y: i32, color: Rgba<u8>) {
        draw_text_mut(canvas, color, x, y, PxScale::from(size), &self.font, text);
    }
}

/// Draw `text` horizontally centered with its bottom on the canvas bottom.
pub fn draw_bottom_centered(
    painter: &dyn TextPainter,
    canvas: &mut RgbaImage,
    text: &str,
    size: f32,
    color: Rgba<u8>,
) {
    let (text_w, text_h) = painter.measure(text, size);
    let x = (canvas.width() as i32 - text_w as i32).div_euclid(2);
    let y = canvas.height() as i32 - text_h as i32;
    painter.draw(canvas, text, size, x, y, color);
}
