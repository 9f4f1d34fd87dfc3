//! Callout - layout, outline geometry and presentation for anchored tooltip bubbles.
//!
//! A callout is a rounded bubble with an arrow pointing at an anchor
//! rectangle. This crate sizes the bubble around its text and optional image,
//! places it relative to the anchor under optional container insets, builds
//! the bubble outline and drives the show/dismiss lifecycle. Scenes can be
//! read from TOML and rendered to SVG.

pub mod config;
pub mod layout;
pub mod lifecycle;
pub mod scene;

mod error;
mod export;

pub use callout_core::{appearance, color, draw, geometry, outline, text};

pub use error::CalloutError;

use log::{debug, info, trace};

use callout_core::text::{CosmicTextMeasurer, TextMeasurer};

use config::AppConfig;
use export::svg::SvgExporter;
use layout::{BubbleLayoutResult, LayoutEngine};
use scene::Scene;

/// Builder for parsing, laying out and rendering callout scenes.
///
/// # Examples
///
/// ```rust,no_run
/// use callout::{CalloutBuilder, config::AppConfig};
///
/// let source = r#"
/// text = "Tap to edit"
/// [container]
/// width = 400
/// height = 800
/// [anchor]
/// x = 100
/// y = 100
/// width = 50
/// height = 50
/// "#;
///
/// let builder = CalloutBuilder::new(AppConfig::default());
/// let scene = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&scene).expect("Failed to render");
/// println!("{svg}");
/// ```
#[derive(Debug)]
pub struct CalloutBuilder<M = CosmicTextMeasurer> {
    config: AppConfig,
    measurer: M,
}

impl CalloutBuilder {
    /// Create a new builder with the given configuration, measuring text
    /// with the system fonts.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            measurer: CosmicTextMeasurer,
        }
    }
}

impl Default for CalloutBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl<M: TextMeasurer> CalloutBuilder<M> {
    /// Replace the text measurer.
    ///
    /// # Examples
    ///
    /// ```
    /// use callout::{CalloutBuilder, config::AppConfig, text::ApproximateTextMeasurer};
    ///
    /// let builder = CalloutBuilder::new(AppConfig::default())
    ///     .with_measurer(ApproximateTextMeasurer::default());
    /// assert_eq!(builder.config().layout().max_text_width(), 200.0);
    /// ```
    pub fn with_measurer<N: TextMeasurer>(self, measurer: N) -> CalloutBuilder<N> {
        CalloutBuilder {
            config: self.config,
            measurer,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a TOML scene.
    ///
    /// # Errors
    ///
    /// Returns [`CalloutError::Scene`] with the offending span when the
    /// source is not a valid scene.
    pub fn parse(&self, source: &str) -> Result<Scene, CalloutError> {
        info!("Parsing scene");

        let scene: Scene =
            toml::from_str(source).map_err(|err| CalloutError::new_scene_error(err, source))?;

        debug!(container:% = scene.container(), anchor:% = scene.anchor(); "Scene parsed successfully");
        trace!(scene:?; "Parsed scene");

        Ok(scene)
    }

    /// Lay out the bubble of `scene`.
    pub fn layout(&self, scene: &Scene) -> BubbleLayoutResult {
        self.engine().compute_layout(
            scene.anchor(),
            scene.container(),
            &scene.content(),
            self.appearance_for(scene),
        )
    }

    /// Render `scene` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`CalloutError::Export`] when the document cannot be written.
    pub fn render_svg(&self, scene: &Scene) -> Result<String, CalloutError> {
        let appearance = self.appearance_for(scene).sanitized();
        let layout = self.engine().compute_layout(
            scene.anchor(),
            scene.container(),
            &scene.content(),
            &appearance,
        );
        info!(frame:% = layout.frame(), arrow_side:% = layout.arrow_side(); "Layout calculated");

        let exporter = SvgExporter::new(&self.measurer, self.config.style());
        let document = exporter.render(scene, &layout, &appearance);

        let mut buffer = Vec::new();
        exporter.write_document(&document, &mut buffer)?;
        let svg = String::from_utf8(buffer).map_err(export::Error::from)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }

    fn engine(&self) -> LayoutEngine<&M> {
        LayoutEngine::new(&self.measurer).with_max_text_width(self.config.layout().max_text_width())
    }

    /// A scene's own appearance replaces the configured one as a whole.
    fn appearance_for<'a>(&'a self, scene: &'a Scene) -> &'a appearance::Appearance {
        scene
            .appearance()
            .unwrap_or_else(|| self.config.appearance())
    }
}

#[cfg(test)]
mod tests {
    use callout_core::{
        appearance::Appearance,
        geometry::{Bounds, Side},
        text::ApproximateTextMeasurer,
    };

    use super::*;

    fn builder() -> CalloutBuilder<ApproximateTextMeasurer> {
        CalloutBuilder::new(AppConfig::default()).with_measurer(ApproximateTextMeasurer::default())
    }

    const SCENE: &str = r#"
        text = "Hi"
        [container]
        width = 400
        height = 800
        [anchor]
        x = 100
        y = 300
        width = 50
        height = 50
    "#;

    #[test]
    fn test_parse_error_is_scene_error() {
        let err = builder().parse("text = ").unwrap_err();
        assert!(matches!(err, CalloutError::Scene { span: Some(_), .. }));
    }

    #[test]
    fn test_scene_appearance_overrides_config() {
        let builder = builder();
        let scene = builder.parse(SCENE).unwrap();
        assert_eq!(builder.layout(&scene).arrow_side(), Side::Bottom);

        let mut appearance = Appearance::default();
        appearance.arrow.side = Side::Top;
        let scene = scene.with_appearance(appearance);
        assert_eq!(builder.layout(&scene).arrow_side(), Side::Top);
    }

    #[test]
    fn test_render_svg_produces_document() {
        let builder = builder();
        let scene = builder.parse(SCENE).unwrap();
        let svg = builder.render_svg(&scene).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Hi"));
    }

    #[test]
    fn test_layout_uses_configured_wrap_width() {
        let config: AppConfig = toml::from_str("[layout]\nmax_text_width = 100.0").unwrap();
        let builder =
            CalloutBuilder::new(config).with_measurer(ApproximateTextMeasurer::default());
        let scene = Scene::new(
            Bounds::new(0.0, 0.0, 400.0, 800.0),
            Bounds::new(100.0, 300.0, 50.0, 50.0),
            "a fairly long sentence that wraps",
        );

        let layout = builder.layout(&scene);
        assert!(layout.text().width() <= 100.0 + 1e-3);
        assert!(layout.text().height() > 14.0 * 1.2 * 1.5);
    }
}
