//! Configuration types for Callout rendering.
//!
//! All types implement [`serde::Deserialize`] with defaults for every key, so
//! a configuration file only lists what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Text wrapping limits for the layout engine.
//! - [`StyleConfig`] - Document-level styling such as the background.
//! - [`Appearance`] - The default bubble appearance for scenes without their own.
//!
//! # Example
//!
//! ```
//! # use callout::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().max_text_width(), 200.0);
//! assert!(config.style().background_color().is_none());
//! ```

use serde::Deserialize;

use callout_core::{appearance::Appearance, color::Color};

use crate::layout::DEFAULT_MAX_TEXT_WIDTH;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,

    /// Appearance used by scenes that do not declare one.
    #[serde(default)]
    appearance: Appearance,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig, appearance: Appearance) -> Self {
        Self {
            layout,
            style,
            appearance,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }
}

/// Layout engine settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Width text wraps at when it is not bounded by an image.
    #[serde(default = "default_max_text_width")]
    max_text_width: f32,
}

impl LayoutConfig {
    pub fn new(max_text_width: f32) -> Self {
        Self { max_text_width }
    }

    pub fn max_text_width(&self) -> f32 {
        self.max_text_width
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_WIDTH)
    }
}

fn default_max_text_width() -> f32 {
    DEFAULT_MAX_TEXT_WIDTH
}

/// Document-level styling of rendered scenes.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Fill behind the whole container; transparent when unset.
    #[serde(default)]
    background_color: Option<Color>,

    /// Whether to outline the anchor rectangle.
    #[serde(default = "default_show_anchor")]
    show_anchor: bool,
}

impl StyleConfig {
    pub fn new(background_color: Option<Color>, show_anchor: bool) -> Self {
        Self {
            background_color,
            show_anchor,
        }
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn show_anchor(&self) -> bool {
        self.show_anchor
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(None, default_show_anchor())
    }
}

fn default_show_anchor() -> bool {
    true
}
