//! Display font lookup.
//!
//! The panel text uses one display font family that must be available on
//! the host. Faces are matched by family name, never by file name. The
//! lookup order is an environment override naming a font file, a `fonts/`
//! directory under the working root, then the fonts installed on the system.

use std::path::PathBuf;

use fontdb::{Database, Family, Query, Source, Weight};

use modshot_common::config::{AppConfig, FontConfig};
use modshot_common::error::{ModshotError, ModshotResult};

use crate::text::GlyphPainter;

/// A font face on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    pub path: PathBuf,
    /// Face index inside a font collection; 0 for plain font files.
    pub index: u32,
}

/// Family names as spelled in `db`, matched case-insensitively against
/// `wanted`. Names `db` does not know are kept as given.
fn canonical_families(db: &Database, wanted: &[String]) -> Vec<String> {
    wanted
        .iter()
        .map(|name| {
            db.faces()
                .flat_map(|face| face.families.iter())
                .map(|(family, _)| family)
                .find(|family| family.eq_ignore_ascii_case(name))
                .cloned()
                .unwrap_or_else(|| name.clone())
        })
        .collect()
}

/// Best face in `db` for the configured families.
///
/// Earlier families win over later ones. Within a family the face closest
/// to the configured weight is picked.
pub fn query_family(db: &Database, config: &FontConfig) -> Option<FontFace> {
    let names = canonical_families(db, &config.families);
    let families: Vec<Family<'_>> = names.iter().map(|name| Family::Name(name)).collect();
    if families.is_empty() {
        return None;
    }

    let query = Query {
        families: &families,
        weight: if config.bold { Weight::BOLD } else { Weight::NORMAL },
        ..Query::default()
    };
    let face = db.face(db.query(&query)?)?;
    match &face.source {
        Source::File(path) | Source::SharedFile(path, _) => Some(FontFace {
            path: path.clone(),
            index: face.index,
        }),
        Source::Binary(_) => None,
    }
}

/// Resolve the display font face for this run.
pub fn locate_font(config: &AppConfig) -> ModshotResult<FontFace> {
    if let Some(path) = std::env::var_os(&config.font.env_override).map(PathBuf::from) {
        if path.is_file() {
            return Ok(FontFace { path, index: 0 });
        }
        return Err(ModshotError::font(format!(
            "{} points at {}, which is not a file",
            config.font.env_override,
            path.display()
        )));
    }

    let fonts_dir = config.root.join("fonts");
    if fonts_dir.is_dir() {
        let mut db = Database::new();
        db.load_fonts_dir(&fonts_dir);
        tracing::debug!(dir = %fonts_dir.display(), faces = db.len(), "Loaded local fonts");
        if let Some(face) = query_family(&db, &config.font) {
            return Ok(face);
        }
    }

    let mut db = Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "Loaded system fonts");

    query_family(&db, &config.font).ok_or_else(|| {
        ModshotError::font(format!(
            "font family '{}' is not installed (set {} to a font file to override)",
            config.font.families.join("' / '"),
            config.font.env_override,
        ))
    })
}

/// Locate and load the display font.
pub fn load_display_font(config: &AppConfig) -> ModshotResult<GlyphPainter> {
    let face = locate_font(config)?;
    tracing::info!(font = %face.path.display(), index = face.index, "Using display font");
    GlyphPainter::load_face(&face.path, face.index)
}
