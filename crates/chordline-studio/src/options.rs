//! Start-up options, read from a TOML file.
//!
//! The file is looked up at `$CHORDLINE_CONFIG`, else `chordline.toml` next
//! to the executable. Every field has a default, so a partial file (or no
//! file at all) is fine; a file that fails to parse is an error.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use chordline_engine::device::GpuInit;
use chordline_engine::logging::{init_logging, LoggingConfig};
use chordline_engine::paint::Color;
use chordline_engine::window::RuntimeConfig;
use chordline_geom::{SceneStyle, DEFAULT_CIRCLE_SEGMENTS};

/// Environment variable naming an explicit options file.
pub const CONFIG_ENV: &str = "CHORDLINE_CONFIG";

const CONFIG_FILE_NAME: &str = "chordline.toml";

/// Straight-alpha RGBA.
pub type Rgba = [f32; 4];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioOptions {
    pub window: WindowOptions,
    pub colors: ColorOptions,
    pub scene: SceneOptions,
    pub text: TextOptions,
    /// `env_logger` filter; overrides `RUST_LOG` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub vsync: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOptions {
    pub background: Rgba,
    pub circle: Rgba,
    pub segment: Rgba,
    pub preview: Rgba,
    pub intersection: Rgba,
    pub axis_x: Rgba,
    pub axis_y: Rgba,
    pub text: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    /// Points used to approximate a circle.
    pub circle_segments: usize,
    /// Side of an intersection marker, logical px.
    pub marker_size_px: f32,
    pub axes_length: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// Font size, logical px.
    pub size: f32,
    /// TrueType/OpenType file; the system sans-serif is searched when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "chordline".to_string(),
            width: 700.0,
            height: 700.0,
            vsync: true,
        }
    }
}

impl Default for ColorOptions {
    fn default() -> Self {
        let style = SceneStyle::default();
        Self {
            background: [0.1, 0.2, 0.3, 1.0],
            circle: style.circle_color,
            segment: style.segment_color,
            preview: style.preview_color,
            intersection: style.intersection_color,
            axis_x: [1.0, 0.0, 0.0, 1.0],
            axis_y: [0.0, 1.0, 0.0, 1.0],
            text: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            marker_size_px: 10.0,
            axes_length: 0.85,
        }
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self { size: 16.0, font_path: None }
    }
}

impl StudioOptions {
    /// `$CHORDLINE_CONFIG` if set, else `chordline.toml` beside the binary.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Reads options from `path`. A missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::read_file(path)?.unwrap_or_default())
    }

    /// Reads options from `path`, or `None` when there is no such file.
    pub fn read_file(path: &Path) -> anyhow::Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        Self::from_toml(&content)
            .map(Some)
            .with_context(|| format!("invalid options file {}", path.display()))
    }

    /// Loads the options from [`Self::config_path`] and installs the logger
    /// they configure. A malformed file is returned as an error after the
    /// logger is up, with the default filter.
    pub fn load_with_logging() -> anyhow::Result<Self> {
        let path = Self::config_path();
        let read = Self::read_file(&path);

        let logging = match &read {
            Ok(Some(opts)) => opts.logging(),
            _ => LoggingConfig::default(),
        };
        init_logging(logging);

        match read? {
            Some(opts) => {
                log::info!("options loaded from {}", path.display());
                Ok(opts)
            }
            None => {
                log::info!("no options file at {}, using defaults", path.display());
                Ok(Self::default())
            }
        }
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.sanitized())
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("options saved to {}", path.display());
        Ok(())
    }

    /// Replaces values that cannot be drawn with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.scene.circle_segments < 3 {
            log::warn!("circle_segments must be at least 3, using {}", defaults.scene.circle_segments);
            self.scene.circle_segments = defaults.scene.circle_segments;
        }
        if !positive(self.scene.marker_size_px) {
            log::warn!("marker_size_px must be positive, using {}", defaults.scene.marker_size_px);
            self.scene.marker_size_px = defaults.scene.marker_size_px;
        }
        if !positive(self.text.size) {
            log::warn!("text size must be positive, using {}", defaults.text.size);
            self.text.size = defaults.text.size;
        }
        if !(positive(self.window.width as f32) && positive(self.window.height as f32)) {
            log::warn!("window size must be positive, using defaults");
            self.window.width = defaults.window.width;
            self.window.height = defaults.window.height;
        }
        self
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig::default().with_filter(self.log_filter.as_deref())
    }

    pub fn runtime(&self, title: &str) -> RuntimeConfig {
        RuntimeConfig {
            title: title.to_string(),
            initial_size: winit::dpi::LogicalSize::new(self.window.width, self.window.height),
            ..RuntimeConfig::default()
        }
    }

    pub fn gpu(&self) -> GpuInit {
        GpuInit::default().with_vsync(self.window.vsync)
    }

    pub fn scene_style(&self) -> SceneStyle {
        SceneStyle {
            circle_color: self.colors.circle,
            segment_color: self.colors.segment,
            preview_color: self.colors.preview,
            intersection_color: self.colors.intersection,
            circle_segments: self.scene.circle_segments,
        }
    }

    pub fn background(&self) -> Color {
        Color::from_rgba_array(self.colors.background)
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(StudioOptions::from_toml("").unwrap(), StudioOptions::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let opts = StudioOptions::from_toml(
            r#"
            log_filter = "debug"

            [scene]
            marker_size_px = 14.0

            [colors]
            intersection = [0.0, 1.0, 1.0, 1.0]
            "#,
        )
        .unwrap();

        assert_eq!(opts.log_filter.as_deref(), Some("debug"));
        assert_eq!(opts.scene.marker_size_px, 14.0);
        assert_eq!(opts.scene.circle_segments, DEFAULT_CIRCLE_SEGMENTS);
        assert_eq!(opts.colors.intersection, [0.0, 1.0, 1.0, 1.0]);
        assert_eq!(opts.colors.circle, [1.0, 0.0, 1.0, 1.0]);
        assert_eq!(opts.window, WindowOptions::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(StudioOptions::from_toml("[scene\nmarker_size_px = ").is_err());
        assert!(StudioOptions::from_toml("[scene]\nmarker_size_px = \"big\"").is_err());
    }

    #[test]
    fn unusable_values_fall_back() {
        let opts = StudioOptions::from_toml(
            "[scene]\ncircle_segments = 1\nmarker_size_px = -2.0\n[text]\nsize = 0.0",
        )
        .unwrap();
        assert_eq!(opts.scene, SceneOptions::default());
        assert_eq!(opts.text.size, TextOptions::default().size);
    }

    // ── files ─────────────────────────────────────────────────────────────

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chordline-{}-{name}", std::process::id()))
    }

    #[test]
    fn existing_file_is_reported_as_read() {
        let path = temp_path("present.toml");
        std::fs::write(&path, "[scene]\naxes_length = 0.5\n").unwrap();
        let read = StudioOptions::read_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let opts = read.expect("file exists");
        assert_eq!(opts.scene.axes_length, 0.5);
    }

    #[test]
    fn missing_file_is_defaults() {
        let path = temp_path("does-not-exist.toml");
        assert_eq!(StudioOptions::read_file(&path).unwrap(), None);
        let opts = StudioOptions::load_from_file(&path).unwrap();
        assert_eq!(opts, StudioOptions::default());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip.toml");
        let mut opts = StudioOptions::default();
        opts.window.title = "custom".into();
        opts.text.font_path = Some(PathBuf::from("/tmp/font.ttf"));
        opts.scene.axes_length = 0.5;

        opts.save_to_file(&path).unwrap();
        let loaded = StudioOptions::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, opts);
    }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn defaults_match_the_exercise() {
        let opts = StudioOptions::default();
        assert_eq!(opts.colors.background, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(opts.scene_style(), SceneStyle::default());
        assert_eq!(opts.runtime("x").initial_size, winit::dpi::LogicalSize::new(700.0, 700.0));
    }

    #[test]
    fn blank_log_filter_defers_to_environment() {
        let mut opts = StudioOptions::default();
        opts.log_filter = Some("  ".into());
        assert_eq!(opts.logging().env_filter, None);
    }
}
