//! Mod identifier extraction from screenshot file names.
//!
//! Screenshots are named `<identifier><number>.png`, e.g. `coolmod42.png`
//! is the 42nd screenshot of `coolmod`. The identifier is everything before
//! the trailing digit run and may itself contain digits (`mod2x3.png` is
//! `mod2x`), but it needs at least one letter or underscore. Names that do
//! not follow the pattern are processed with default options.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// Raster extension accepted for screenshots and logos.
pub const IMAGE_EXTENSION: &str = "png";

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_]*[A-Za-z_])([0-9]+)\.(?i:png)$").expect("identifier pattern is valid")
    })
}

/// Extract the mod identifier from the final component of `path`.
///
/// Returns `None` when the name does not match; that is an ordinary case.
pub fn resolve_identifier(path: impl AsRef<Path>) -> Option<String> {
    let name = path.as_ref().file_name()?.to_str()?;
    pattern()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Whether `path` carries the screenshot extension (case-insensitive).
pub fn has_image_extension(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_letters_then_digits() {
        assert_eq!(resolve_identifier("coolmod42.png").as_deref(), Some("coolmod"));
        assert_eq!(resolve_identifier("bar7.png").as_deref(), Some("bar"));
        assert_eq!(
            resolve_identifier("cool_mod001.PNG").as_deref(),
            Some("cool_mod")
        );
    }

    #[test]
    fn test_identifiers_may_contain_digits() {
        assert_eq!(resolve_identifier("mod2x3.png").as_deref(), Some("mod2x"));
        assert_eq!(
            resolve_identifier("terraria2mod14.png").as_deref(),
            Some("terraria2mod")
        );
        assert_eq!(
            resolve_identifier("calamity_2mod5.png").as_deref(),
            Some("calamity_2mod")
        );
        assert_eq!(resolve_identifier("2mod5.png").as_deref(), Some("2mod"));
    }

    #[test]
    fn test_directories_are_ignored() {
        assert_eq!(
            resolve_identifier("./inputs/99/coolmod42.png").as_deref(),
            Some("coolmod")
        );
    }

    #[test]
    fn test_non_matching_names() {
        assert_eq!(resolve_identifier("42.png"), None);
        assert_eq!(resolve_identifier("nodigits.png"), None);
        assert_eq!(resolve_identifier("coolmod42.jpg"), None);
        assert_eq!(resolve_identifier("coolmod42.png.bak"), None);
        assert_eq!(resolve_identifier("cool-mod42.png"), None);
        assert_eq!(resolve_identifier(""), None);
    }

    #[test]
    fn test_extension_check() {
        assert!(has_image_extension("a/b/c1.png"));
        assert!(has_image_extension("c1.PnG"));
        assert!(!has_image_extension("c1.jpeg"));
        assert!(!has_image_extension("png"));
    }

    proptest! {
        #[test]
        fn prop_extracts_everything_before_trailing_digits(
            id in "[A-Za-z0-9_]{0,12}[A-Za-z_]",
            number in 0u32..100_000,
        ) {
            let name = format!("{id}{number}.png");
            prop_assert_eq!(resolve_identifier(&name), Some(id));
        }

        #[test]
        fn prop_digit_only_names_never_match(number in 0u64..u64::MAX) {
            let name = format!("{number}.png");
            prop_assert_eq!(resolve_identifier(&name), None);
        }
    }
}
