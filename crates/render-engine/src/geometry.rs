//! Panel geometry derived from screenshot resolution.
//!
//! Every size here is a fraction of the screenshot, with 1920 px wide as
//! the reference, so the watermark keeps the same proportions on any
//! capture resolution.

/// Width the outline radius is calibrated against.
pub const REFERENCE_WIDTH: f32 = 1920.0;

/// Outline radius at the reference width.
pub const REFERENCE_OUTLINE: f32 = 3.0;

/// Glow passes per panel.
pub const OUTLINE_ITERATIONS: u32 = 2;

/// Fraction of each screenshot dimension the logo may occupy.
pub const LOGO_FRACTION: f32 = 0.25;

/// Margin is `max(width, height) / MARGIN_DIVISOR`.
pub const MARGIN_DIVISOR: f32 = 90.0;

/// Font size is `height / FONT_DIVISOR`.
pub const FONT_DIVISOR: f32 = 30.0;

/// Integer 2D offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: u32,
    pub y: u32,
}

/// Integer 2D size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// All placement parameters for one screenshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryPlan {
    /// Box the scaled logo must fit within.
    pub logo_bounds: Size,
    /// Blur radius of each glow pass.
    pub outline_offset: u32,
    /// Number of glow passes.
    pub outline_iterations: u32,
    /// Inset of the logo from the bottom-right corner.
    pub margin: Offset,
    /// Text size in pixels.
    pub font_size: f32,
    /// Where the logo sits inside the padded panel canvas.
    pub bonus_offset: Offset,
    /// Padding added around the scaled logo.
    pub bonus_size: Size,
}

impl GeometryPlan {
    /// Plan the panel for a `width`×`height` screenshot.
    pub fn for_screenshot(width: u32, height: u32, has_text: bool) -> Self {
        let (w, h) = (width as f32, height as f32);

        let outline_offset = (REFERENCE_OUTLINE * w / REFERENCE_WIDTH).round() as u32;
        let margin_px = (w.max(h) / MARGIN_DIVISOR) as u32;
        let font_size = h / FONT_DIVISOR;
        // Text reserves a line below the logo.
        let text_line = if has_text { font_size as u32 } else { 0 };

        let margin = Offset {
            x: margin_px,
            y: margin_px + text_line,
        };
        let bonus_offset = Offset {
            x: outline_offset * 2,
            y: outline_offset * 2 + text_line,
        };

        Self {
            logo_bounds: Size::new((w * LOGO_FRACTION) as u32, (h * LOGO_FRACTION) as u32),
            outline_offset,
            outline_iterations: OUTLINE_ITERATIONS,
            margin,
            font_size,
            bonus_offset,
            bonus_size: Size::new(bonus_offset.x * 2, bonus_offset.y * 2),
        }
    }

    /// Canvas size for a logo scaled to `scaled`.
    pub fn canvas_size(&self, scaled: Size) -> Size {
        Size::new(
            scaled.width + self.bonus_size.width,
            scaled.height + self.bonus_size.height,
        )
    }

    /// Top-left corner of a `panel` drawn on a `screen`, bottom-right
    /// anchored. The visible logo edge, not the padded canvas edge, sits
    /// `margin` away from the corner. May be negative for tiny screens.
    pub fn placement(&self, screen: Size, panel: Size) -> (i64, i64) {
        let x = screen.width as i64 - panel.width as i64 - self.margin.x as i64
            + self.bonus_offset.x as i64;
        let y = screen.height as i64 - panel.height as i64 - self.margin.y as i64
            + self.bonus_offset.y as i64;
        (x, y)
    }
}

/// Largest size with the aspect ratio of `size` that fits in `bounds`.
/// Scales up as well as down; each side is at least one pixel.
pub fn fit_within(size: Size, bounds: Size) -> Size {
    if size.width == 0 || size.height == 0 {
        return Size::new(bounds.width.max(1), bounds.height.max(1));
    }
    let ratio = (bounds.width as f64 / size.width as f64)
        .min(bounds.height as f64 / size.height as f64);
    Size::new(
        ((size.width as f64 * ratio).round() as u32).clamp(1, bounds.width.max(1)),
        ((size.height as f64 * ratio).round() as u32).clamp(1, bounds.height.max(1)),
    )
}

/// Like [`fit_within`] but never enlarges.
pub fn shrink_to_fit(size: Size, bounds: Size) -> Size {
    if size.width <= bounds.width && size.height <= bounds.height {
        size
    } else {
        fit_within(size, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_hd_without_text() {
        let plan = GeometryPlan::for_screenshot(1920, 1080, false);
        assert_eq!(plan.logo_bounds, Size::new(480, 270));
        assert_eq!(plan.outline_offset, 3);
        assert_eq!(plan.outline_iterations, 2);
        assert_eq!(plan.margin, Offset { x: 21, y: 21 });
        assert!((plan.font_size - 36.0).abs() < 1e-4);
        assert_eq!(plan.bonus_offset, Offset { x: 6, y: 6 });
        assert_eq!(plan.bonus_size, Size::new(12, 12));
    }

    #[test]
    fn test_full_hd_with_text() {
        let plan = GeometryPlan::for_screenshot(1920, 1080, true);
        assert_eq!(plan.margin, Offset { x: 21, y: 57 });
        assert_eq!(plan.bonus_offset, Offset { x: 6, y: 42 });
        assert_eq!(plan.bonus_size, Size::new(12, 84));
    }

    #[test]
    fn test_outline_rounds() {
        // 3/1920 * 1000 = 1.5625
        assert_eq!(GeometryPlan::for_screenshot(1000, 800, false).outline_offset, 2);
        // 3/1920 * 300 = 0.47
        assert_eq!(GeometryPlan::for_screenshot(300, 200, false).outline_offset, 0);
    }

    #[test]
    fn test_portrait_margin_uses_height() {
        let plan = GeometryPlan::for_screenshot(1080, 1920, false);
        assert_eq!(plan.margin, Offset { x: 21, y: 21 });
    }

    #[test]
    fn test_placement_compensates_padding() {
        let plan = GeometryPlan::for_screenshot(1920, 1080, true);
        let panel = plan.canvas_size(Size::new(270, 270));
        assert_eq!(panel, Size::new(282, 354));
        let (x, y) = plan.placement(Size::new(1920, 1080), panel);
        assert_eq!((x, y), (1920 - 282 - 21 + 6, 1080 - 354 - 57 + 42));
        // the logo's right edge sits exactly one margin from the corner
        assert_eq!(x + plan.bonus_offset.x as i64 + 270, 1920 - 21);
    }

    #[test]
    fn test_fit_within_examples() {
        assert_eq!(fit_within(Size::new(512, 512), Size::new(480, 270)), Size::new(270, 270));
        assert_eq!(fit_within(Size::new(320, 180), Size::new(480, 270)), Size::new(480, 270));
        assert_eq!(fit_within(Size::new(3840, 2160), Size::new(1920, 1920)), Size::new(1920, 1080));
    }

    #[test]
    fn test_shrink_to_fit_never_enlarges() {
        assert_eq!(shrink_to_fit(Size::new(800, 600), Size::new(1920, 1920)), Size::new(800, 600));
        assert_eq!(shrink_to_fit(Size::new(1080, 2400), Size::new(1920, 1920)), Size::new(864, 1920));
    }

    proptest! {
        #[test]
        fn prop_shrink_respects_bound_and_aspect(w in 1u32..8000, h in 1u32..8000) {
            let out = shrink_to_fit(Size::new(w, h), Size::new(1920, 1920));
            prop_assert!(out.width.max(out.height) <= 1920);
            prop_assert!(out.width <= w && out.height <= h);
            // aspect ratio within one pixel of rounding on the shorter side
            let expected_h = out.width as f64 * h as f64 / w as f64;
            let expected_w = out.height as f64 * w as f64 / h as f64;
            prop_assert!(
                (expected_h - out.height as f64).abs() <= 1.0
                    || (expected_w - out.width as f64).abs() <= 1.0
            );
        }

        #[test]
        fn prop_plan_scales_with_resolution(w in 64u32..4000, h in 64u32..4000, text: bool) {
            let base = GeometryPlan::for_screenshot(w, h, text);
            let double = GeometryPlan::for_screenshot(w * 2, h * 2, text);
            prop_assert!(double.margin.x >= base.margin.x * 2);
            prop_assert!(double.margin.x <= base.margin.x * 2 + 1);
            prop_assert!(double.logo_bounds.width >= base.logo_bounds.width * 2);
            prop_assert!(double.logo_bounds.width <= base.logo_bounds.width * 2 + 1);
            prop_assert!((double.font_size - base.font_size * 2.0).abs() < 1e-2);
            prop_assert_eq!(base.bonus_size.width, base.bonus_offset.x * 2);
            prop_assert_eq!(base.bonus_size.height, base.bonus_offset.y * 2);
        }
    }
}
