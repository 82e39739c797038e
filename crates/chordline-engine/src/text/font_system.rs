use std::fmt;
use std::path::{Path, PathBuf};

/// Common locations of a plain sans-serif face on Linux distributions.
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Error returned when a font cannot be loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum FontLoadError {
    /// The bytes are not a font fontdue can parse.
    Parse(String),
    /// None of the candidate files could be read.
    NotFound(Vec<PathBuf>),
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::Parse(msg) => write!(f, "font parse error: {msg}"),
            FontLoadError::NotFound(paths) => {
                write!(f, "no readable font among {} candidate path(s)", paths.len())
            }
        }
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the loaded fonts. Fonts are immutable after loading.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError::Parse(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Loads the first candidate file that reads and parses.
    pub fn load_first_available<P: AsRef<Path>>(
        &mut self,
        candidates: &[P],
    ) -> Result<FontId, FontLoadError> {
        for path in candidates {
            let path = path.as_ref();
            let Ok(bytes) = std::fs::read(path) else { continue; };
            match self.load_font(&bytes) {
                Ok(id) => {
                    log::debug!("loaded font {}", path.display());
                    return Ok(id);
                }
                Err(e) => log::warn!("skipping {}: {e}", path.display()),
            }
        }
        Err(FontLoadError::NotFound(
            candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
        ))
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Distance between baselines at `size` logical pixels.
    ///
    /// Falls back to `1.2 × size` for an unknown font.
    pub fn line_height(&self, id: FontId, size: f32) -> f32 {
        self.get(id)
            .and_then(|f| f.horizontal_line_metrics(size))
            .map_or(size * 1.2, |m| m.new_line_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_do_not_parse() {
        let mut fonts = FontSystem::new();
        assert!(matches!(fonts.load_font(b"not a font"), Err(FontLoadError::Parse(_))));
    }

    #[test]
    fn missing_candidates_report_not_found() {
        let mut fonts = FontSystem::new();
        let err = fonts
            .load_first_available(&["/nonexistent/chordline/a.ttf", "/nonexistent/chordline/b.ttf"])
            .unwrap_err();
        assert_eq!(
            err,
            FontLoadError::NotFound(vec![
                PathBuf::from("/nonexistent/chordline/a.ttf"),
                PathBuf::from("/nonexistent/chordline/b.ttf"),
            ])
        );
        assert_eq!(err.to_string(), "no readable font among 2 candidate path(s)");
    }

    #[test]
    fn unknown_font_uses_fallback_line_height() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.line_height(FontId(3), 20.0), 24.0);
    }
}
