//! Process every screenshot in the inputs directory.

use std::sync::Arc;

use modshot_catalog::ModCatalog;
use modshot_common::config::AppConfig;
use modshot_render::font::load_display_font;
use modshot_render::{run_batch, Renderer};

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    config.ensure_directories()?;
    let painter = load_display_font(&config)?;
    let catalog = ModCatalog::load(&config.options_file)?;

    let renderer = Arc::new(Renderer::new(config, catalog, Arc::new(painter)));
    let report = run_batch(renderer).await?;

    println!(
        "Processed {} screenshot(s): {} written, {} failed",
        report.total(),
        report.rendered(),
        report.failed()
    );
    for (input, error) in report.failures() {
        println!("  [FAIL] {}: {error}", input.display());
    }

    if report.failed() > 0 {
        anyhow::bail!("{} of {} screenshots failed", report.failed(), report.total());
    }
    Ok(())
}
