//! Per-mod options.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use modshot_common::config::{AppConfig, ID_PLACEHOLDER};

/// One entry of the options document, as written by the operator.
///
/// Keys are folded to lowercase before this is deserialized, so the
/// aliases cover the usual spellings in any letter case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoredOptions {
    /// Ignored: the identifier always comes from the file name.
    #[serde(default)]
    pub id: Option<String>,

    /// Text drawn under the logo.
    #[serde(default, alias = "displaytext", alias = "display_text")]
    pub text: Option<String>,

    /// Logo path template containing `{id}`.
    #[serde(default, alias = "logopathtemplate", alias = "logo_path_template")]
    pub logo: Option<String>,
}

/// Resolved options for one screenshot job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModOptions {
    identifier: Option<String>,
    display_text: Option<String>,
    logo_template: String,
}

impl ModOptions {
    /// Options for a screenshot whose name carried no identifier.
    pub fn defaults(config: &AppConfig) -> Self {
        Self {
            identifier: None,
            display_text: None,
            logo_template: config.default_logo_template(),
        }
    }

    /// Merge stored options with the identifier taken from the file name.
    ///
    /// The identifier overrides any `id` in `stored`; missing fields fall
    /// back to the defaults; empty text counts as no text.
    pub fn resolve(
        stored: Option<&StoredOptions>,
        identifier: Option<&str>,
        config: &AppConfig,
    ) -> Self {
        let base = Self::defaults(config);
        let Some(stored) = stored else {
            return Self {
                identifier: identifier.map(str::to_string),
                ..base
            };
        };

        Self {
            identifier: identifier.map(str::to_string),
            display_text: stored.text.clone().filter(|t| !t.is_empty()),
            logo_template: stored.logo.clone().unwrap_or(base.logo_template),
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn display_text(&self) -> Option<&str> {
        self.display_text.as_deref()
    }

    pub fn has_text(&self) -> bool {
        self.display_text.is_some()
    }

    pub fn logo_template(&self) -> &str {
        &self.logo_template
    }

    /// Logo location for this mod, resolved against the working root.
    /// `None` when no identifier was resolved.
    pub fn logo_path(&self, config: &AppConfig) -> Option<PathBuf> {
        let id = self.identifier.as_deref()?;
        Some(config.resolve(self.logo_template.replace(ID_PLACEHOLDER, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig::in_dir("/work")
    }

    #[test]
    fn test_missing_entry_keeps_defaults() {
        let options = ModOptions::resolve(None, Some("bar"), &config());
        assert_eq!(options.identifier(), Some("bar"));
        assert_eq!(options.display_text(), None);
        assert_eq!(options.logo_template(), "/work/logos/{id}.png");
        assert_eq!(
            options.logo_path(&config()),
            Some(PathBuf::from("/work/logos/bar.png"))
        );
    }

    #[test]
    fn test_identifier_overrides_stored_id() {
        let stored = StoredOptions {
            id: Some("other".into()),
            text: Some("Foo Mod".into()),
            logo: Some("./art/{id}-logo.png".into()),
        };
        let options = ModOptions::resolve(Some(&stored), Some("foo"), &config());
        assert_eq!(options.identifier(), Some("foo"));
        assert_eq!(options.display_text(), Some("Foo Mod"));
        assert_eq!(
            options.logo_path(&config()),
            Some(PathBuf::from("/work/./art/foo-logo.png"))
        );
    }

    #[test]
    fn test_empty_text_is_absent() {
        let stored = StoredOptions {
            text: Some(String::new()),
            ..Default::default()
        };
        let options = ModOptions::resolve(Some(&stored), Some("foo"), &config());
        assert!(!options.has_text());
        assert_eq!(options.logo_template(), "/work/logos/{id}.png");
    }

    #[test]
    fn test_no_identifier_has_no_logo_path() {
        let options = ModOptions::defaults(&config());
        assert_eq!(options.logo_path(&config()), None);
    }
}
