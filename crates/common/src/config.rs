//! Run configuration.
//!
//! Directory layout is fixed by convention relative to a working root:
//!
//! ```text
//! <root>/
//! ├── logos/              one logo per mod identifier
//! ├── inputs/             screenshots to process
//! ├── outputs/            processed screenshots
//! └── Screenshots.yaml    optional per-mod options
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ModshotError, ModshotResult};

pub const LOGOS_DIR: &str = "logos";
pub const INPUTS_DIR: &str = "inputs";
pub const OUTPUTS_DIR: &str = "outputs";
pub const OPTIONS_FILE: &str = "Screenshots.yaml";

/// Placeholder substituted with the mod identifier in logo path templates.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Configuration context for one run. Built once at startup and passed
/// to every component; nothing reads process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Working root that relative paths resolve against.
    pub root: PathBuf,

    /// Directory holding logo images.
    pub logos_dir: PathBuf,

    /// Directory holding input screenshots.
    pub inputs_dir: PathBuf,

    /// Directory receiving processed screenshots.
    pub outputs_dir: PathBuf,

    /// Optional per-mod options document.
    pub options_file: PathBuf,

    /// Display font lookup.
    pub font: FontConfig,

    /// Maximum concurrent jobs. `None` uses available parallelism.
    pub workers: Option<usize>,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Display font lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    /// Family names to look up, most preferred first. Matched
    /// case-insensitively against the names stored in the font files.
    pub families: Vec<String>,

    /// Prefer the bold face of the family.
    pub bold: bool,

    /// Environment variable that may point directly at a font file.
    pub env_override: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "modshot_render=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Show targets and thread ids in text logs.
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            families: vec!["Andy".into(), "Andy Bold".into()],
            bold: true,
            env_override: "MODSHOT_FONT".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Conventional layout rooted at `root`.
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            logos_dir: root.join(LOGOS_DIR),
            inputs_dir: root.join(INPUTS_DIR),
            outputs_dir: root.join(OUTPUTS_DIR),
            options_file: root.join(OPTIONS_FILE),
            root,
            font: FontConfig::default(),
            workers: None,
            logging: LoggingConfig::default(),
        }
    }

    /// Logo path template used when a mod has no stored override.
    pub fn default_logo_template(&self) -> String {
        format!("{}/{ID_PLACEHOLDER}.png", self.logos_dir.display())
    }

    /// Resolve a possibly relative path against the working root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Where the processed copy of `input` is written.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        match input.file_name() {
            Some(name) => self.outputs_dir.join(name),
            None => self.outputs_dir.join(input),
        }
    }

    /// Effective worker count, never zero.
    pub fn worker_count(&self) -> usize {
        self.workers
            .or_else(|| std::thread::available_parallelism().ok().map(|n| n.get()))
            .unwrap_or(1)
            .max(1)
    }

    /// Create the logo, input and output directories if they are missing.
    pub fn ensure_directories(&self) -> ModshotResult<()> {
        for dir in [&self.logos_dir, &self.inputs_dir, &self.outputs_dir] {
            std::fs::create_dir_all(dir).map_err(|e| ModshotError::Directory {
                path: dir.clone(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Path relative to the working root, for log messages.
    pub fn display_path<'a>(&self, path: &'a Path) -> std::borrow::Cow<'a, str> {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
    }
}
