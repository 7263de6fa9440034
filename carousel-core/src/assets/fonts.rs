use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    assets::decode::read_asset_bytes,
    config::{
        paths::AssetPaths,
        style::{FontPaths, FontRole},
    },
    foundation::error::AssetLoadError,
};

/// Where a resolved face came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    /// The configured font file.
    File(PathBuf),
    /// The first sans-serif face of the system font database.
    System(String),
}

/// Raw bytes of one usable face.
#[derive(Clone, Debug)]
pub struct LoadedFont {
    /// Whole font file (may be a collection).
    pub bytes: Arc<Vec<u8>>,
    /// Face index inside `bytes`.
    pub index: u32,
    /// Provenance, for logging.
    pub origin: FontOrigin,
}

/// Resolution result for one typographic role.
#[derive(Clone, Debug)]
pub enum FontFace {
    /// Glyphs can be shaped and drawn.
    Loaded(LoadedFont),
    /// Neither the configured file nor a system face could be used.
    Unavailable,
}

/// Whether to consult installed system fonts when a configured file fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemFallback {
    /// Query the system database for a sans-serif face.
    SansSerif,
    /// Never touch system fonts.
    Disabled,
}

/// One resolved face per [`FontRole`], loaded once per render session.
#[derive(Clone, Debug)]
pub struct FontStore {
    title: FontFace,
    body: FontFace,
    handle: FontFace,
}

/// Parse check: the bytes must contain at least one face.
fn validate_font_bytes(
    path: &std::path::Path,
    bytes: Vec<u8>,
) -> Result<LoadedFont, AssetLoadError> {
    let mut db = usvg::fontdb::Database::new();
    db.load_font_data(bytes.clone());
    if db.is_empty() {
        return Err(AssetLoadError::Decode {
            path: path.to_path_buf(),
            reason: "no font faces found".to_string(),
        });
    }
    Ok(LoadedFont {
        bytes: Arc::new(bytes),
        index: 0,
        origin: FontOrigin::File(path.to_path_buf()),
    })
}

/// Load a configured font file.
pub fn load_font_file(path: &std::path::Path) -> Result<LoadedFont, AssetLoadError> {
    let bytes = read_asset_bytes(path)?;
    validate_font_bytes(path, bytes)
}

/// First sans-serif face installed on the system.
pub fn system_sans_serif() -> Option<LoadedFont> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();

    let query = usvg::fontdb::Query {
        families: &[usvg::fontdb::Family::SansSerif],
        ..Default::default()
    };
    let id = db.query(&query).or_else(|| db.faces().next().map(|f| f.id))?;
    let family = db
        .face(id)
        .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_default();
    db.with_face_data(id, |data, index| LoadedFont {
        bytes: Arc::new(data.to_vec()),
        index,
        origin: FontOrigin::System(family),
    })
}

impl FontStore {
    /// Resolve every role: configured file, then a system sans-serif face, then unavailable.
    pub fn load(fonts: &FontPaths, paths: &AssetPaths) -> Self {
        Self::load_with_fallback(fonts, paths, SystemFallback::SansSerif)
    }

    /// Like [`FontStore::load`] with an explicit fallback policy.
    pub fn load_with_fallback(
        fonts: &FontPaths,
        paths: &AssetPaths,
        fallback: SystemFallback,
    ) -> Self {
        let mut system: Option<Option<LoadedFont>> = None;
        let mut resolve = |role: FontRole| -> FontFace {
            let path = paths.resolve(fonts.for_role(role));
            match load_font_file(&path) {
                Ok(font) => {
                    debug!(?role, path = %path.display(), "loaded font");
                    return FontFace::Loaded(font);
                }
                Err(err) => {
                    warn!(?role, error = %err, "font file unusable, falling back");
                }
            }
            if fallback == SystemFallback::Disabled {
                return FontFace::Unavailable;
            }
            match system.get_or_insert_with(system_sans_serif) {
                Some(font) => {
                    debug!(?role, origin = ?font.origin, "using system font");
                    FontFace::Loaded(font.clone())
                }
                None => {
                    warn!(?role, "no system sans-serif font; text will not be drawn");
                    FontFace::Unavailable
                }
            }
        };

        Self {
            title: resolve(FontRole::Title),
            body: resolve(FontRole::Body),
            handle: resolve(FontRole::Handle),
        }
    }

    /// Store where every role is unavailable; text measures with the fixed estimate.
    pub fn unavailable() -> Self {
        Self {
            title: FontFace::Unavailable,
            body: FontFace::Unavailable,
            handle: FontFace::Unavailable,
        }
    }

    /// Store that uses one face for every role.
    pub fn uniform(font: LoadedFont) -> Self {
        Self {
            title: FontFace::Loaded(font.clone()),
            body: FontFace::Loaded(font.clone()),
            handle: FontFace::Loaded(font),
        }
    }

    /// Face resolved for `role`.
    pub fn face(&self, role: FontRole) -> &FontFace {
        match role {
            FontRole::Title => &self.title,
            FontRole::Body => &self.body,
            FontRole::Handle => &self.handle,
        }
    }

    /// Roles that ended up without a usable face.
    pub fn unavailable_roles(&self) -> Vec<FontRole> {
        FontRole::ALL
            .into_iter()
            .filter(|r| matches!(self.face(*r), FontFace::Unavailable))
            .collect()
    }
}
