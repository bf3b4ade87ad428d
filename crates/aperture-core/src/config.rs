use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::geometry::RootMargin;
use crate::reveal::RevealVariant;
use crate::viewport::ObserverOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (logs live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of a section that must be visible (0.0-1.0)
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Viewport adjustment, CSS order: top right bottom left
    #[serde(default)]
    pub root_margin: RootMargin,
    /// Reveal only around the first intersection
    #[serde(default = "default_true")]
    pub once: bool,
    /// "fadeIn", "slideUp", "slideIn", "scale" or "none"
    #[serde(default)]
    pub variant: RevealVariant,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            root_margin: RootMargin::default(),
            once: default_true(),
            variant: RevealVariant::default(),
        }
    }
}

impl RevealConfig {
    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions {
            threshold: self.threshold,
            root: None,
            root_margin: self.root_margin,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Texts typed in order
    #[serde(default = "default_typewriter_texts")]
    pub texts: Vec<String>,
    /// Delay before each typed character
    #[serde(default = "default_typing_speed")]
    pub typing_speed_ms: u64,
    /// Delay before each deleted character
    #[serde(default = "default_deleting_speed")]
    pub deleting_speed_ms: u64,
    /// Pause with the full text shown
    #[serde(default = "default_delay_between_texts")]
    pub delay_between_texts_ms: u64,
    /// Start over after the last text
    #[serde(default = "default_true", rename = "loop")]
    pub looping: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            texts: default_typewriter_texts(),
            typing_speed_ms: default_typing_speed(),
            deleting_speed_ms: default_deleting_speed(),
            delay_between_texts_ms: default_delay_between_texts(),
            looping: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Split position before any drag (0-100)
    #[serde(default = "default_initial_ratio")]
    pub initial_ratio: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            initial_ratio: default_initial_ratio(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Magnification while the pointer is over the image
    #[serde(default = "default_zoom_scale")]
    pub scale: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            scale: default_zoom_scale(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while something is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Easing for reveal transitions
    #[serde(default)]
    pub easing: EasingType,
    /// Transition length when a style carries none
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Animate page scrolling
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
    /// Duration of one smooth scroll animation
    #[serde(default = "default_scroll_duration")]
    pub scroll_duration_ms: u64,
    /// Theme name: "darkroom" or "gallery"
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            easing: EasingType::default(),
            transition_ms: default_transition_ms(),
            smooth_scroll: default_true(),
            scroll_duration_ms: default_scroll_duration(),
            theme: default_theme_name(),
        }
    }
}

/// Easing curve for transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end
    None,
    Linear,
    /// 1 - (1-t)³
    #[default]
    Cubic,
    /// 1 - (1-t)⁵
    Quintic,
    /// 1 - 2^(-10t)
    EaseOut,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aperture")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_threshold() -> f64 {
    crate::viewport::DEFAULT_THRESHOLD
}

fn default_typewriter_texts() -> Vec<String> {
    vec![
        "Capturing Moments".to_string(),
        "Creating Memories".to_string(),
        "Telling Your Story".to_string(),
    ]
}

fn default_typing_speed() -> u64 {
    100
}

fn default_deleting_speed() -> u64 {
    50
}

fn default_delay_between_texts() -> u64 {
    2000
}

fn default_initial_ratio() -> f64 {
    crate::compare::DEFAULT_RATIO
}

fn default_zoom_scale() -> f64 {
    crate::zoom::DEFAULT_SCALE
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_transition_ms() -> u64 {
    300
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_theme_name() -> String {
    "darkroom".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl UiConfig {
    /// Frame interval while animating
    pub fn animation_tick(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Smooth scrolling is on and has a nonzero duration
    pub fn is_smooth(&self) -> bool {
        self.smooth_scroll && self.scroll_duration_ms > 0
    }
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Reject values the controllers cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let invalid = |field, reason: &str| crate::Error::InvalidConfig {
            field,
            reason: reason.to_string(),
        };

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(invalid("reveal.threshold", "must be between 0.0 and 1.0"));
        }
        if self.typewriter.typing_speed_ms == 0 || self.typewriter.deleting_speed_ms == 0 {
            return Err(invalid("typewriter", "typing and deleting speeds must be positive"));
        }
        if !(0.0..=100.0).contains(&self.compare.initial_ratio) {
            return Err(invalid("compare.initial_ratio", "must be between 0 and 100"));
        }
        if self.zoom.scale.is_nan() || self.zoom.scale < 1.0 {
            return Err(invalid("zoom.scale", "must be at least 1.0"));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/aperture/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("aperture")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// File the TUI writes logs to while it owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("aperture.log")
    }
}
