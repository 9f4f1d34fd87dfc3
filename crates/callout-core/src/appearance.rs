//! Declarative appearance of a callout bubble.
//!
//! [`Appearance`] aggregates everything the layout engine, the outline
//! builder and the presentation lifecycle read: arrow geometry, image
//! geometry, box styling and animation parameters. It is plain data; build
//! one with [`Appearance::default`] and override the fields you need.
//!
//! ```
//! # use callout_core::appearance::Appearance;
//! # use callout_core::geometry::Side;
//! let mut appearance = Appearance::default();
//! appearance.arrow.side = Side::Top;
//! appearance.style.corner_radius = 4.0;
//! assert_eq!(appearance.arrow.width, 20.0);
//! ```
//!
//! Every section deserializes with defaults for missing keys, so a
//! configuration file only needs to name what it changes.

use log::warn;
use serde::Deserialize;

use crate::{
    color::Color,
    geometry::{Insets, Point, Side, Transform},
};

/// The triangular arrow pointing from the bubble to its anchor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrowSpec {
    /// Base length along the bubble edge.
    pub width: f32,
    /// Perpendicular length from the bubble edge to the tip.
    pub height: f32,
    /// Bubble edge the arrow is attached to.
    pub side: Side,
    /// Gap between the arrow tip and the anchor's facing edge. Negative
    /// values overlap the anchor.
    pub offset: f32,
}

impl Default for ArrowSpec {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 20.0,
            side: Side::Bottom,
            offset: 6.0,
        }
    }
}

/// Upper bounds and placement of the optional image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageSpec {
    pub width: f32,
    pub height: f32,
    pub side: Side,
    /// Margin between the image and the bubble edges around it.
    pub offset: f32,
}

impl Default for ImageSpec {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            side: Side::Left,
            offset: 10.0,
        }
    }
}

/// Horizontal alignment of text lines inside the text frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Font descriptor used for measurement and rendering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 14.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Shadow {
    pub color: Color,
    /// Between 0.0 and 1.0.
    pub opacity: f32,
    pub offset: Point,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::default(),
            opacity: 0.8,
            offset: Point::new(0.0, 2.0),
        }
    }
}

/// Text, fill and container-constraint styling of the bubble body.
///
/// The three container inset sets are independent. `exact` pins the bubble
/// to the container inset by those distances, `min` keeps edges at least that
/// far from the container, and `max` keeps edges at most that far.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxStyle {
    pub font: Font,
    pub text_color: Color,
    pub fill_color: Color,
    pub corner_radius: f32,
    pub shadow: Shadow,
    pub alignment: TextAlignment,
    /// Margins between the text and the surrounding bubble or image.
    pub text_insets: Insets,
    pub exact_insets: Option<Insets>,
    pub min_insets: Option<Insets>,
    pub max_insets: Option<Insets>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            font: Font::default(),
            text_color: Color::default(),
            fill_color: Color::new("white").expect("'white' is a valid CSS color"),
            corner_radius: 10.0,
            shadow: Shadow::default(),
            alignment: TextAlignment::default(),
            text_insets: Insets::uniform(10.0),
            exact_insets: None,
            min_insets: None,
            max_insets: None,
        }
    }
}

/// Longest duration or delay an animation may have, in seconds.
pub const MAX_ANIMATION_SECONDS: f32 = 60.0;

/// Entrance and exit animation parameters. Durations are in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationSpec {
    /// Transform applied before the entrance starts.
    pub initial_transform: Transform,
    /// Resting transform at the end of the entrance.
    pub final_transform: Transform,
    /// Target transform of the exit.
    pub dismiss_transform: Transform,
    /// Spring damping ratio, between 0.0 and 1.0.
    pub damping: f32,
    pub velocity: f32,
    pub duration: f32,
    pub delay: f32,
    pub dismiss_duration: f32,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            initial_transform: Transform::IDENTITY,
            final_transform: Transform::IDENTITY,
            dismiss_transform: Transform::IDENTITY,
            damping: 0.7,
            velocity: 0.7,
            duration: 0.3,
            delay: 1.2,
            dismiss_duration: 0.7,
        }
    }
}

/// Complete appearance of one bubble.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Appearance {
    pub arrow: ArrowSpec,
    pub image: ImageSpec,
    pub style: BoxStyle,
    pub animation: AnimationSpec,
    pub dismiss_on_tap: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            arrow: ArrowSpec::default(),
            image: ImageSpec::default(),
            style: BoxStyle::default(),
            animation: AnimationSpec::default(),
            dismiss_on_tap: true,
        }
    }
}

impl Appearance {
    /// Returns a copy with malformed values clamped to their nearest valid value.
    ///
    /// Lengths that must not be negative are raised to zero, ratios are
    /// clamped to `0.0..=1.0`, animation times to
    /// `0.0..=MAX_ANIMATION_SECONDS`, and NaN falls back to the lower bound. Every
    /// adjustment is logged as a warning. Offsets and insets may legitimately
    /// be negative and are left alone.
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();

        out.arrow.width = at_least_zero("arrow.width", out.arrow.width);
        out.arrow.height = at_least_zero("arrow.height", out.arrow.height);
        out.arrow.offset = finite_or_zero("arrow.offset", out.arrow.offset);

        out.image.width = at_least_zero("image.width", out.image.width);
        out.image.height = at_least_zero("image.height", out.image.height);
        out.image.offset = at_least_zero("image.offset", out.image.offset);

        out.style.font.size = at_least_zero("style.font.size", out.style.font.size);
        out.style.corner_radius = at_least_zero("style.corner_radius", out.style.corner_radius);
        out.style.shadow.opacity = unit_range("style.shadow.opacity", out.style.shadow.opacity);

        out.animation.damping = unit_range("animation.damping", out.animation.damping);
        out.animation.velocity = finite_or_zero("animation.velocity", out.animation.velocity);
        out.animation.duration = animation_time("animation.duration", out.animation.duration);
        out.animation.delay = animation_time("animation.delay", out.animation.delay);
        out.animation.dismiss_duration = animation_time(
            "animation.dismiss_duration",
            out.animation.dismiss_duration,
        );

        out
    }
}

fn at_least_zero(field: &'static str, value: f32) -> f32 {
    clamp_logged(field, value, 0.0, f32::INFINITY)
}

fn animation_time(field: &'static str, value: f32) -> f32 {
    clamp_logged(field, value, 0.0, MAX_ANIMATION_SECONDS)
}

fn unit_range(field: &'static str, value: f32) -> f32 {
    clamp_logged(field, value, 0.0, 1.0)
}

fn finite_or_zero(field: &'static str, value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        warn!(field, value; "Non-finite appearance value replaced with zero");
        0.0
    }
}

fn clamp_logged(field: &'static str, value: f32, min: f32, max: f32) -> f32 {
    let clamped = if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    };
    if clamped != value || value.is_nan() {
        warn!(field, value, clamped; "Appearance value out of range, clamping");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let appearance = Appearance::default();

        assert_eq!(appearance.arrow.side, Side::Bottom);
        assert_approx_eq!(f32, appearance.arrow.width, 20.0);
        assert_approx_eq!(f32, appearance.arrow.height, 20.0);
        assert_approx_eq!(f32, appearance.arrow.offset, 6.0);

        assert_eq!(appearance.image.side, Side::Left);
        assert_approx_eq!(f32, appearance.image.width, 50.0);
        assert_approx_eq!(f32, appearance.image.offset, 10.0);

        assert_eq!(appearance.style.font.family, "sans-serif");
        assert_approx_eq!(f32, appearance.style.font.size, 14.0);
        assert_approx_eq!(f32, appearance.style.corner_radius, 10.0);
        assert_approx_eq!(f32, appearance.style.shadow.opacity, 0.8);
        assert_eq!(appearance.style.shadow.offset, Point::new(0.0, 2.0));
        assert_eq!(appearance.style.text_insets, Insets::uniform(10.0));
        assert_eq!(appearance.style.alignment, TextAlignment::Left);
        assert!(appearance.style.exact_insets.is_none());
        assert!(appearance.style.min_insets.is_none());
        assert!(appearance.style.max_insets.is_none());

        assert_approx_eq!(f32, appearance.animation.damping, 0.7);
        assert_approx_eq!(f32, appearance.animation.duration, 0.3);
        assert_approx_eq!(f32, appearance.animation.dismiss_duration, 0.7);
        assert_approx_eq!(f32, appearance.animation.delay, 1.2);
        assert!(appearance.animation.initial_transform.is_identity());
        assert!(appearance.dismiss_on_tap);
    }

    #[test]
    fn test_sanitized_clamps_malformed_values() {
        let mut appearance = Appearance::default();
        appearance.arrow.width = -5.0;
        appearance.arrow.height = f32::NAN;
        appearance.style.corner_radius = -1.0;
        appearance.style.shadow.opacity = 3.0;
        appearance.animation.damping = -0.5;
        appearance.animation.duration = -1.0;

        let sanitized = appearance.sanitized();

        assert_approx_eq!(f32, sanitized.arrow.width, 0.0);
        assert_approx_eq!(f32, sanitized.arrow.height, 0.0);
        assert_approx_eq!(f32, sanitized.style.corner_radius, 0.0);
        assert_approx_eq!(f32, sanitized.style.shadow.opacity, 1.0);
        assert_approx_eq!(f32, sanitized.animation.damping, 0.0);
        assert_approx_eq!(f32, sanitized.animation.duration, 0.0);
    }

    #[test]
    fn test_sanitized_caps_animation_times() {
        let mut appearance = Appearance::default();
        appearance.animation.duration = f32::INFINITY;
        appearance.animation.delay = 1e30;
        appearance.animation.dismiss_duration = f32::NAN;

        let animation = appearance.sanitized().animation;

        assert_approx_eq!(f32, animation.duration, MAX_ANIMATION_SECONDS);
        assert_approx_eq!(f32, animation.delay, MAX_ANIMATION_SECONDS);
        assert_approx_eq!(f32, animation.dismiss_duration, 0.0);
    }

    #[test]
    fn test_animation_times_from_toml_infinity() {
        let appearance: Appearance =
            toml::from_str("[animation]\nduration = inf\ndelay = -inf\n").unwrap();

        let animation = appearance.sanitized().animation;
        assert_approx_eq!(f32, animation.duration, MAX_ANIMATION_SECONDS);
        assert_approx_eq!(f32, animation.delay, 0.0);
    }

    #[test]
    fn test_sanitized_keeps_negative_offsets() {
        let mut appearance = Appearance::default();
        appearance.arrow.offset = -4.0;

        assert_approx_eq!(f32, appearance.sanitized().arrow.offset, -4.0);
    }

    #[test]
    fn test_sanitized_is_identity_on_defaults() {
        let appearance = Appearance::default();
        assert_eq!(appearance.sanitized(), appearance);
    }
}
