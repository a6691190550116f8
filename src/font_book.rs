mod descriptor;

pub use descriptor::FontDescriptor;

use std::{collections::HashMap, path::PathBuf, sync::Arc};

use parking_lot::Mutex;

use crate::text::{TextMeasurer, TextMetrics};

type FxHashMap<K, V> = HashMap<K, V, fxhash::FxBuildHasher>;

/// A font descriptor resolved to a loaded face and a pixel size.
#[derive(Clone)]
pub struct ResolvedFont {
    pub id: fontdb::ID,
    pub font: Arc<fontdue::Font>,
    pub size: f32,
}

/// Font engine backed by `fontdb` for face lookup and `fontdue` for metrics.
///
/// Faces are parsed lazily the first time a descriptor resolves to them.
/// State sits behind a `Mutex` so measuring only needs `&self`.
///
/// Loading or removing fonts forgets every resolved descriptor. Callers that
/// keep a [`crate::text::MeasureCache`] keyed by descriptors must clear it
/// as well.
pub struct FontBook {
    inner: Mutex<FontBookInner>,
}

struct FontBookInner {
    font_db: fontdb::Database,
    /// Not all faces in `font_db` are necessarily loaded here.
    loaded_font: FxHashMap<fontdb::ID, Arc<fontdue::Font>>,
    /// descriptor string -> matching face, `None` when nothing matches.
    resolved: FxHashMap<String, Option<(fontdb::ID, f32)>>,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new()
    }
}

impl FontBook {
    /// Creates a book without any fonts.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FontBookInner {
                font_db: fontdb::Database::new(),
                loaded_font: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
                resolved: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
            }),
        }
    }
}

/// Loading fonts.
impl FontBook {
    pub fn load_font_binary(&self, data: impl Into<Vec<u8>>) {
        let mut inner = self.inner.lock();
        inner.font_db.load_font_data(data.into());
        inner.resolved.clear();
    }

    pub fn load_font_file(&self, path: PathBuf) -> Result<(), std::io::Error> {
        let mut inner = self.inner.lock();
        inner.font_db.load_font_file(path)?;
        inner.resolved.clear();
        Ok(())
    }

    pub fn load_fonts_dir(&self, dir: PathBuf) {
        let mut inner = self.inner.lock();
        inner.font_db.load_fonts_dir(dir);
        inner.resolved.clear();
    }

    pub fn load_system_fonts(&self) {
        let mut inner = self.inner.lock();
        inner.font_db.load_system_fonts();
        inner.resolved.clear();
    }

    pub fn remove_face(&self, id: fontdb::ID) {
        let mut inner = self.inner.lock();
        inner.font_db.remove_face(id);
        inner.loaded_font.remove(&id);
        inner.resolved.clear();
    }

    /// Sets the face used for the generic `sans-serif` family.
    pub fn set_sans_serif_family(&self, family: impl Into<String>) {
        let mut inner = self.inner.lock();
        inner.font_db.set_sans_serif_family(family);
        inner.resolved.clear();
    }

    /// Sets the face used for the generic `serif` family.
    pub fn set_serif_family(&self, family: impl Into<String>) {
        let mut inner = self.inner.lock();
        inner.font_db.set_serif_family(family);
        inner.resolved.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().font_db.is_empty()
    }

    /// Number of faces known to the database.
    pub fn len(&self) -> usize {
        self.inner.lock().font_db.len()
    }
}

/// Resolving descriptors.
impl FontBook {
    /// Finds the face a descriptor string selects, loading it if necessary.
    pub fn resolve(&self, descriptor: &str) -> Option<ResolvedFont> {
        let mut inner = self.inner.lock();

        let cached = inner.resolved.get(descriptor).copied();
        let (id, size) = match cached {
            Some(resolved) => resolved?,
            None => {
                let resolved = inner.query(descriptor);
                inner.resolved.insert(descriptor.to_string(), resolved);
                resolved?
            }
        };

        inner.font(id).map(|font| ResolvedFont { id, font, size })
    }
}

impl FontBookInner {
    fn query(&self, descriptor: &str) -> Option<(fontdb::ID, f32)> {
        let Some(parsed) = FontDescriptor::parse(descriptor) else {
            log::warn!("Font descriptor {:?} has no pixel size", descriptor);
            return None;
        };

        let families = parsed.query_families();
        let query = fontdb::Query {
            families: &families,
            weight: parsed.weight,
            stretch: fontdb::Stretch::Normal,
            style: parsed.style,
        };

        match self.font_db.query(&query) {
            Some(id) => Some((id, parsed.size)),
            None => {
                log::warn!("No face matches font descriptor {:?}", descriptor);
                None
            }
        }
    }

    fn font(&mut self, id: fontdb::ID) -> Option<Arc<fontdue::Font>> {
        use std::collections::hash_map::Entry;

        match self.loaded_font.entry(id) {
            Entry::Occupied(entry) => Some(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let font_result = self.font_db.with_face_data(id, |data, index| {
                    fontdue::Font::from_bytes(
                        data,
                        fontdue::FontSettings {
                            collection_index: index,
                            scale: 40.0,
                            load_substitutions: true,
                        },
                    )
                })?;

                match font_result {
                    Ok(font) => Some(Arc::clone(entry.insert(Arc::new(font)))),
                    Err(e) => {
                        log::error!("Failed to load font (id: {:?}): {}", id, e);
                        None
                    }
                }
            }
        }
    }
}

impl TextMeasurer for FontBook {
    /// Lays the characters out on one line with kerning and reports the
    /// advance, the inked bounds and the font's line metrics.
    fn measure_text(&self, text: &str, font: &str) -> TextMetrics {
        let Some(resolved) = self.resolve(font) else {
            return TextMetrics::default();
        };
        let px = resolved.size;

        let mut metrics = TextMetrics::default();
        if let Some(line) = resolved.font.horizontal_line_metrics(px) {
            metrics.font_bounding_box_ascent = line.ascent;
            metrics.font_bounding_box_descent = -line.descent;
        }

        let mut pen_x = 0.0;
        let mut previous: Option<char> = None;
        for ch in text.chars() {
            if let Some(left) = previous {
                pen_x += resolved.font.horizontal_kern(left, ch, px).unwrap_or(0.0);
            }
            let glyph = resolved.font.metrics(ch, px);

            if glyph.width > 0 && glyph.height > 0 {
                let left = pen_x + glyph.xmin as f32;
                let top = glyph.ymin as f32 + glyph.height as f32;
                metrics.actual_bounding_box_left = metrics.actual_bounding_box_left.max(-left);
                metrics.actual_bounding_box_right =
                    metrics.actual_bounding_box_right.max(left + glyph.width as f32);
                metrics.actual_bounding_box_ascent = metrics.actual_bounding_box_ascent.max(top);
                metrics.actual_bounding_box_descent =
                    metrics.actual_bounding_box_descent.max(-(glyph.ymin as f32));
            }

            pen_x += glyph.advance_width;
            previous = Some(ch);
        }
        metrics.width = pen_x;

        metrics
    }
}
