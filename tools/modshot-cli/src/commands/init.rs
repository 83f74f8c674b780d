//! Create the working directory layout.

use modshot_common::config::AppConfig;

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    config.ensure_directories()?;

    println!("Directory layout ready:");
    println!("  {}/   (one <id>.png per mod)", config.display_path(&config.logos_dir));
    println!("  {}/  (screenshots named <id><n>.png)", config.display_path(&config.inputs_dir));
    println!("  {}/ (processed screenshots)", config.display_path(&config.outputs_dir));
    if !config.options_file.exists() {
        println!();
        println!(
            "Optional: create {} to set per-mod text and logo paths:",
            config.display_path(&config.options_file)
        );
        println!("  mods:");
        println!("    coolmod:");
        println!("      text: \"Cool Mod\"");
        println!("      logo: \"./logos/{{id}}.png\"");
    }

    Ok(())
}
