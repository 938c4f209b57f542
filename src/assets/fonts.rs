use std::path::Path;
use std::sync::Arc;

/// Font database used to rasterize text masks.
///
/// System fonts are loaded first, then any `.ttf`/`.otf`/`.ttc` files found in the extra
/// directories. Cloning is cheap.
#[derive(Clone)]
pub struct FontLibrary {
    db: Arc<usvg::fontdb::Database>,
}

impl FontLibrary {
    /// System fonts only.
    pub fn system() -> Self {
        Self::with_dirs(&[] as &[&Path])
    }

    /// System fonts plus fonts found in `dirs`.
    #[tracing::instrument(skip_all)]
    pub fn with_dirs<P: AsRef<Path>>(dirs: &[P]) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        for dir in dirs {
            load_fonts_from_dir(&mut db, dir.as_ref());
        }
        tracing::debug!(faces = db.len(), "font library ready");
        Self { db: Arc::new(db) }
    }

    /// A library with no faces. Text renders as nothing.
    pub fn empty() -> Self {
        Self {
            db: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Number of loaded font faces.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    pub(crate) fn svg_options(&self) -> usvg::Options<'static> {
        usvg::Options {
            fontdb: self.db.clone(),
            font_resolver: make_font_resolver(),
            ..Default::default()
        }
    }
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory is not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), %err, "skipping unreadable font");
        }
    }
}

/// Resolve the requested families, then fall back to generic sans-serif and finally any face,
/// so a missing "Arial" still produces glyphs.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);

            let style = match font.style() {
                usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
                usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
                usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
            };

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style,
            };

            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
