//! Logo lookup.

use image::{DynamicImage, RgbaImage};

use modshot_catalog::ModOptions;
use modshot_common::config::AppConfig;
use modshot_common::error::{ModshotError, ModshotResult};

/// Size of the transparent stand-in used when a mod has no logo.
pub const PLACEHOLDER_WIDTH: u32 = 320;
pub const PLACEHOLDER_HEIGHT: u32 = 180;

/// Fully transparent placeholder logo.
pub fn placeholder() -> RgbaImage {
    RgbaImage::new(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT)
}

/// Load the logo for `options`, or the placeholder if there is none.
///
/// A logo file that exists but cannot be decoded is an error.
pub fn load_logo(options: &ModOptions, config: &AppConfig) -> ModshotResult<RgbaImage> {
    let Some(path) = options.logo_path(config) else {
        return Ok(placeholder());
    };
    if !path.is_file() {
        tracing::debug!(
            mod_id = options.identifier().unwrap_or_default(),
            path = %config.display_path(&path),
            "No logo, using placeholder"
        );
        return Ok(placeholder());
    }

    let logo = image::open(&path).map_err(|e| ModshotError::Decode {
        path: path.clone(),
        source: e,
    })?;
    Ok(match logo {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.to_rgba8(),
    })
}
