//! Per-screenshot pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{DynamicImage, ImageError, ImageFormat, RgbaImage};

use modshot_catalog::{ModCatalog, ModOptions};
use modshot_common::config::AppConfig;
use modshot_common::error::{ModshotError, ModshotResult};

use crate::geometry::GeometryPlan;
use crate::logo::load_logo;
use crate::panel::{compose_panel, PanelText};
use crate::scene::{normalize_resolution, place_panel};
use crate::text::TextPainter;

/// Watermark one decoded screenshot. Pure: no I/O, no clock, no randomness.
pub fn render_screenshot(
    screenshot: DynamicImage,
    options: &ModOptions,
    logo: &RgbaImage,
    painter: &dyn TextPainter,
) -> DynamicImage {
    let screenshot = normalize_resolution(screenshot);
    let plan = GeometryPlan::for_screenshot(
        screenshot.width(),
        screenshot.height(),
        options.has_text(),
    );
    let caption = options
        .display_text()
        .map(|text| PanelText { text, painter });

    let panel = compose_panel(logo, &plan, caption);
    place_panel(screenshot, &panel, &plan)
}

/// Everything a job needs, shared read-only across all jobs of a run.
pub struct Renderer {
    config: AppConfig,
    catalog: ModCatalog,
    painter: Arc<dyn TextPainter>,
}

impl Renderer {
    pub fn new(config: AppConfig, catalog: ModCatalog, painter: Arc<dyn TextPainter>) -> Self {
        Self {
            config,
            catalog,
            painter,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ModCatalog {
        &self.catalog
    }

    /// Read `input`, watermark it and write it to the outputs directory.
    /// Returns the output path.
    pub fn process_file(&self, input: &Path) -> ModshotResult<PathBuf> {
        let options = self.catalog.options_for(input, &self.config);
        tracing::info!(
            mod_id = options.identifier().unwrap_or("-"),
            "Processing '{}'",
            self.config.display_path(input)
        );

        let screenshot = image::open(input).map_err(|e| ModshotError::Decode {
            path: input.to_path_buf(),
            source: e,
        })?;
        let logo = load_logo(&options, &self.config)?;

        let rendered = render_screenshot(screenshot, &options, &logo, self.painter.as_ref());

        let output = self.config.output_path_for(input);
        save_png(&rendered, &output)?;
        tracing::debug!(output = %self.config.display_path(&output), "Wrote screenshot");
        Ok(output)
    }
}

fn save_png(image: &DynamicImage, path: &Path) -> ModshotResult<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(source) => ModshotError::Output {
                path: path.to_path_buf(),
                source,
            },
            other => ModshotError::Encode {
                path: path.to_path_buf(),
                source: other,
            },
        })
}
