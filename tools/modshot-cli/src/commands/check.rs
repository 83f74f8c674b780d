//! Check that everything a run needs is in place.

use modshot_catalog::ModCatalog;
use modshot_common::config::AppConfig;
use modshot_render::batch::list_inputs;
use modshot_render::font::locate_font;

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("modshot check");
    println!("{}", "=".repeat(50));

    let mut ready = true;

    match locate_font(config) {
        Ok(face) => println!("[OK] Font: {}", face.path.display()),
        Err(e) => {
            println!("[FAIL] {e}");
            ready = false;
        }
    }

    for (label, dir) in [
        ("Logos", &config.logos_dir),
        ("Inputs", &config.inputs_dir),
        ("Outputs", &config.outputs_dir),
    ] {
        if dir.is_dir() {
            println!("[OK] {label} directory: {}", config.display_path(dir));
        } else {
            println!(
                "[WARN] {label} directory missing: {} (created on run)",
                config.display_path(dir)
            );
        }
    }

    if config.options_file.exists() {
        match ModCatalog::load(&config.options_file) {
            Ok(catalog) => println!("[OK] Options: {} mod(s) configured", catalog.len()),
            Err(e) => {
                println!("[FAIL] {e}");
                ready = false;
            }
        }
    } else {
        println!("[OK] Options: none (all mods use defaults)");
    }

    if config.inputs_dir.is_dir() {
        let inputs = list_inputs(&config.inputs_dir)?;
        println!("[OK] Screenshots pending: {}", inputs.len());
    }

    println!();
    if ready {
        println!("Ready to run.");
        Ok(())
    } else {
        anyhow::bail!("Some requirements are missing. See above.")
    }
}
