//! Logo panel synthesis: scaled logo, glow outline and optional caption.
//!
//! The glow comes from repeating a short cycle on a padded canvas:
//!
//! ```text
//! ┌────────────── outline_iterations ──────────────┐
//! draw logo → saturate → brighten → black text → box blur
//! └────────────────────────────────────────────────┘
//!                          │
//!            draw logo (crisp) → white text
//! ```
//!
//! Boosting saturation and brightness turns the logo's own colors into the
//! halo tint, so no separate glow color is needed. Each pass depends on the
//! previous canvas, so a panel is built sequentially.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::filters::{self, GLOW_BRIGHTNESS, GLOW_SATURATION};
use crate::geometry::{fit_within, GeometryPlan, Size};
use crate::text::{draw_bottom_centered, TextPainter, ALBEDO_TEXT, GLOW_TEXT};

/// Caption drawn under the logo.
#[derive(Clone, Copy)]
pub struct PanelText<'a> {
    pub text: &'a str,
    pub painter: &'a dyn TextPainter,
}

/// Scale `logo` to fit within `bounds`, preserving aspect ratio.
pub fn scale_logo(logo: &RgbaImage, bounds: Size) -> RgbaImage {
    let source = Size::new(logo.width(), logo.height());
    let target = fit_within(source, bounds);
    if target == source {
        return logo.clone();
    }
    imageops::resize(logo, target.width, target.height, FilterType::CatmullRom)
}

/// Build the glow canvas around an already scaled logo.
///
/// The canvas is `logo + plan.bonus_size` with the logo at
/// `plan.bonus_offset`. Pure and deterministic.
pub fn synthesize_glow(
    logo: &RgbaImage,
    plan: &GeometryPlan,
    caption: Option<PanelText<'_>>,
) -> RgbaImage {
    let size = plan.canvas_size(Size::new(logo.width(), logo.height()));
    let (x, y) = (plan.bonus_offset.x as i64, plan.bonus_offset.y as i64);

    let mut canvas = RgbaImage::new(size.width, size.height);
    imageops::replace(&mut canvas, logo, x, y);

    for _ in 0..plan.outline_iterations {
        imageops::overlay(&mut canvas, logo, x, y);
        filters::saturate(&mut canvas, GLOW_SATURATION);
        filters::brighten(&mut canvas, GLOW_BRIGHTNESS);
        if let Some(caption) = caption {
            draw_bottom_centered(
                caption.painter,
                &mut canvas,
                caption.text,
                plan.font_size,
                GLOW_TEXT,
            );
        }
        filters::box_blur(&mut canvas, plan.outline_offset);
    }

    // albedo
    imageops::overlay(&mut canvas, logo, x, y);
    if let Some(caption) = caption {
        draw_bottom_centered(
            caption.painter,
            &mut canvas,
            caption.text,
            plan.font_size,
            ALBEDO_TEXT,
        );
    }

    canvas
}

/// Scale `logo` for `plan` and build the finished panel.
pub fn compose_panel(
    logo: &RgbaImage,
    plan: &GeometryPlan,
    caption: Option<PanelText<'_>>,
) -> RgbaImage {
    let scaled = scale_logo(logo, plan.logo_bounds);
    tracing::trace!(
        width = scaled.width(),
        height = scaled.height(),
        "Scaled logo"
    );
    synthesize_glow(&scaled, plan, caption)
}
