//! Typeface Loading
//!
//! The font is the single external resource of the intro. It is fetched
//! asynchronously (over HTTP via `ehttp`, or from disk on a reader thread)
//! and handed back to the event loop through a bounded channel, so the
//! animation never blocks a frame on the fetch.

pub mod source;
pub mod typeface;

pub use source::AssetSource;
pub use typeface::{OutlineCommand, RawGlyph, TypefaceData, parse_outline};

use crate::errors::{IntroError, Result};

/// A parsed typeface, ready for glyph lookups.
#[derive(Debug, Clone)]
pub struct Font {
    data: TypefaceData,
}

impl Font {
    /// Parses raw `typeface.json` bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let data: TypefaceData = serde_json::from_slice(bytes)?;
        if data.resolution <= 0.0 {
            return Err(IntroError::TypefaceParseError(format!(
                "non-positive resolution {}",
                data.resolution
            )));
        }
        if data.glyphs.is_empty() {
            return Err(IntroError::TypefaceParseError(
                "typeface contains no glyphs".to_string(),
            ));
        }
        Ok(Self { data })
    }

    #[must_use]
    pub fn family_name(&self) -> &str {
        &self.data.family_name
    }

    /// Design units per em.
    #[must_use]
    pub fn resolution(&self) -> f32 {
        self.data.resolution
    }

    /// Raw glyph lookup.
    #[must_use]
    pub fn glyph(&self, ch: char) -> Option<&RawGlyph> {
        let mut buf = [0u8; 4];
        self.data.glyphs.get(ch.encode_utf8(&mut buf) as &str)
    }

    /// Glyph lookup with the loader fallback: unknown characters substitute
    /// `?` (when the face has one) and log a warning.
    ///
    /// Returns the glyph together with the character actually resolved.
    #[must_use]
    pub fn glyph_or_fallback(&self, ch: char) -> Option<(&RawGlyph, char)> {
        if let Some(glyph) = self.glyph(ch) {
            return Some((glyph, ch));
        }
        log::warn!(
            "Typeface {:?} has no glyph for {ch:?}; substituting '?'",
            self.family_name()
        );
        self.glyph('?').map(|glyph| (glyph, '?'))
    }
}

/// Starts loading a typeface and returns the channel the result arrives on.
///
/// The returned receiver yields exactly one message. Poll it with
/// `try_recv` from the event loop; the fetch itself runs on an `ehttp`
/// worker (HTTP) or a short-lived reader thread (file).
#[must_use]
pub fn load_font(source: &str) -> flume::Receiver<Result<Font>> {
    let (tx, rx) = flume::bounded(1);
    log::info!("Loading typeface {}", AssetSource::filename(source));

    match AssetSource::from_source(source) {
        AssetSource::Http(url) => {
            let request = ehttp::Request::get(&url);
            ehttp::fetch(request, move |result| {
                let font = match result {
                    Ok(response) if response.ok => Font::parse(&response.bytes),
                    Ok(response) => Err(IntroError::HttpResponseError {
                        status: response.status,
                    }),
                    Err(reason) => Err(IntroError::FontFetchFailed { url, reason }),
                };
                let _ = tx.send(font);
            });
        }
        AssetSource::File(path) => {
            std::thread::spawn(move || {
                let font = std::fs::read(&path)
                    .map_err(IntroError::from)
                    .and_then(|bytes| Font::parse(&bytes));
                let _ = tx.send(font);
            });
        }
    }

    rx
}
