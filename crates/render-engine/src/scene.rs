//! Screenshot resolution normalization and panel placement.

use image::imageops::{self, FilterType};
use image::{ColorType, DynamicImage, RgbaImage};

use crate::geometry::{shrink_to_fit, GeometryPlan, Size};

/// Largest allowed screenshot dimension after normalization.
pub const MAX_DIMENSION: u32 = 1920;

/// Shrink `screenshot` so neither side exceeds [`MAX_DIMENSION`].
/// Smaller screenshots are returned untouched.
pub fn normalize_resolution(screenshot: DynamicImage) -> DynamicImage {
    let source = Size::new(screenshot.width(), screenshot.height());
    let target = shrink_to_fit(source, Size::new(MAX_DIMENSION, MAX_DIMENSION));
    if target == source {
        return screenshot;
    }
    tracing::debug!(
        width = source.width,
        height = source.height,
        new_width = target.width,
        new_height = target.height,
        "Resizing screenshot"
    );
    screenshot.resize_exact(target.width, target.height, FilterType::CatmullRom)
}

/// Draw `panel` at its bottom-right anchored position on `screenshot`.
///
/// Compositing happens at the screenshot's own channel depth, so pixels
/// outside the panel keep their exact values and the result keeps the
/// screenshot's color type.
pub fn place_panel(screenshot: DynamicImage, panel: &RgbaImage, plan: &GeometryPlan) -> DynamicImage {
    let color = screenshot.color();
    let (x, y) = plan.placement(
        Size::new(screenshot.width(), screenshot.height()),
        Size::new(panel.width(), panel.height()),
    );

    let canvas = match color {
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => {
            let mut canvas = screenshot.into_rgba16();
            let panel = DynamicImage::ImageRgba8(panel.clone()).into_rgba16();
            imageops::overlay(&mut canvas, &panel, x, y);
            DynamicImage::ImageRgba16(canvas)
        }
        ColorType::Rgb32F | ColorType::Rgba32F => {
            let mut canvas = screenshot.into_rgba32f();
            let panel = DynamicImage::ImageRgba8(panel.clone()).into_rgba32f();
            imageops::overlay(&mut canvas, &panel, x, y);
            DynamicImage::ImageRgba32F(canvas)
        }
        _ => {
            let mut canvas = screenshot.into_rgba8();
            imageops::overlay(&mut canvas, panel, x, y);
            DynamicImage::ImageRgba8(canvas)
        }
    };

    restore_color_type(canvas, color)
}

fn restore_color_type(canvas: DynamicImage, color: ColorType) -> DynamicImage {
    if canvas.color() == color {
        return canvas;
    }
    match color {
        ColorType::L8 => DynamicImage::ImageLuma8(canvas.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(canvas.to_luma_alpha8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(canvas.to_rgb8()),
        ColorType::Rgba8 => DynamicImage::ImageRgba8(canvas.to_rgba8()),
        ColorType::L16 => DynamicImage::ImageLuma16(canvas.to_luma16()),
        ColorType::La16 => DynamicImage::ImageLumaA16(canvas.to_luma_alpha16()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(canvas.to_rgb16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(canvas.to_rgba16()),
        ColorType::Rgb32F => DynamicImage::ImageRgb32F(canvas.to_rgb32f()),
        ColorType::Rgba32F => DynamicImage::ImageRgba32F(canvas.to_rgba32f()),
        _ => canvas,
    }
}
