//! Text measurement for bubble sizing and text rendering.
//!
//! The layout engine never shapes text itself; it asks a [`TextMeasurer`]
//! how large a string is when wrapped into some bounds. Two implementations
//! are provided:
//!
//! - [`CosmicTextMeasurer`] - real font metrics and shaping via cosmic-text
//! - [`ApproximateTextMeasurer`] - a font-free, deterministic estimate
//!
//! # Examples
//!
//! ```
//! # use callout_core::appearance::Font;
//! # use callout_core::text::{ApproximateTextMeasurer, TextBounds, TextMeasurer};
//! let measurer = ApproximateTextMeasurer::default();
//! let font = Font::default();
//!
//! let size = measurer.measure("Hello", &font, TextBounds::width(200.0));
//! assert!(size.width() > 0.0);
//! assert!(size.width() <= 200.0);
//! ```

use std::{
    ops::Range,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{debug, info};

use crate::{appearance::Font, geometry::Size};

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Optional wrapping width and height limit for a measurement.
///
/// `None` means unbounded along that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBounds {
    width: Option<f32>,
    height: Option<f32>,
}

impl TextBounds {
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self {
            width: width.map(|w| w.max(0.0)),
            height: height.map(|h| h.max(0.0)),
        }
    }

    /// Bounds with no limit on either axis.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Bounds that wrap at `width` and grow vertically without limit.
    pub fn width(width: f32) -> Self {
        Self::new(Some(width), None)
    }

    pub fn max_width(self) -> Option<f32> {
        self.width
    }

    pub fn max_height(self) -> Option<f32> {
        self.height
    }

    /// Clamps a measured size to these bounds.
    fn clamp(self, size: Size) -> Size {
        Size::new(
            self.width.map_or(size.width(), |w| size.width().min(w)),
            self.height.map_or(size.height(), |h| size.height().min(h)),
        )
    }
}

/// Measures the size of text rendered in a font.
///
/// Implementations must be deterministic: measuring the same text in the same
/// font and bounds always yields the same size.
pub trait TextMeasurer {
    /// Returns the size `text` occupies when wrapped to the bounds' width.
    ///
    /// The result never exceeds the bounds on a bounded axis.
    fn measure(&self, text: &str, font: &Font, bounds: TextBounds) -> Size;

    /// Splits `text` into the visual lines it wraps into at `max_width`.
    ///
    /// The default implementation only breaks at explicit newlines.
    fn wrap_lines(&self, text: &str, _font: &Font, _max_width: Option<f32>) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    /// Height of one line of text in `font`.
    fn line_height(&self, font: &Font) -> f32 {
        font.size * LINE_HEIGHT_FACTOR
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &Font, bounds: TextBounds) -> Size {
        (**self).measure(text, font, bounds)
    }

    fn wrap_lines(&self, text: &str, font: &Font, max_width: Option<f32>) -> Vec<String> {
        (**self).wrap_lines(text, font, max_width)
    }

    fn line_height(&self, font: &Font) -> f32 {
        (**self).line_height(font)
    }
}

/// Font-free text measurement.
///
/// Every character is assumed to be `char_width_factor × font.size` wide and
/// lines are wrapped greedily at word boundaries. Useful for tests and for
/// environments without system fonts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateTextMeasurer {
    char_width_factor: f32,
}

impl ApproximateTextMeasurer {
    pub fn new(char_width_factor: f32) -> Self {
        Self {
            char_width_factor: char_width_factor.max(0.0),
        }
    }

    fn char_width(&self, font: &Font) -> f32 {
        font.size * self.char_width_factor
    }

    fn text_width(&self, text: &str, font: &Font) -> f32 {
        text.chars().count() as f32 * self.char_width(font)
    }
}

impl Default for ApproximateTextMeasurer {
    fn default() -> Self {
        Self::new(0.55)
    }
}

impl TextMeasurer for ApproximateTextMeasurer {
    fn measure(&self, text: &str, font: &Font, bounds: TextBounds) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let lines = self.wrap_lines(text, font, bounds.max_width());
        let width = lines
            .iter()
            .map(|line| self.text_width(line, font))
            .fold(0.0, f32::max);
        let height = lines.len() as f32 * self.line_height(font);

        bounds.clamp(Size::new(width, height))
    }

    fn wrap_lines(&self, text: &str, font: &Font, max_width: Option<f32>) -> Vec<String> {
        let char_width = self.char_width(font);
        let max_chars = match max_width {
            Some(width) if char_width > 0.0 => ((width / char_width).floor() as usize).max(1),
            _ => usize::MAX,
        };

        text.split('\n')
            .flat_map(|paragraph| wrap_paragraph(paragraph, max_chars))
            .collect()
    }
}

/// Greedy word wrap of a single paragraph to at most `max_chars` per line.
///
/// Words longer than a line are broken across lines.
fn wrap_paragraph(paragraph: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in paragraph.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Text measurement backed by cosmic-text shaping and the system fonts.
///
/// All instances share one process-wide font system, loaded on first use.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosmicTextMeasurer;

impl TextMeasurer for CosmicTextMeasurer {
    fn measure(&self, text: &str, font: &Font, bounds: TextBounds) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let size = font_system().shape(text, font, bounds, |runs, metrics| {
            let mut max_width: f32 = 0.0;
            let mut total_height: f32 = 0.0;
            for run in runs {
                let run_width = run
                    .glyphs
                    .iter()
                    .map(|glyph| glyph.x + glyph.w)
                    .fold(0.0, f32::max);
                max_width = max_width.max(run_width);
                total_height += metrics.line_height;
            }
            if total_height == 0.0 {
                // Nothing shaped, so estimate from the character count
                max_width = text.chars().count() as f32 * font.size * 0.55;
                total_height = metrics.line_height;
            }
            Size::new(max_width, total_height)
        });
        bounds.clamp(size)
    }

    fn wrap_lines(&self, text: &str, font: &Font, max_width: Option<f32>) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let lines = font_system().shape(text, font, TextBounds::new(max_width, None), |runs, _| {
            runs.iter()
                .map(|run| {
                    run_source_range(run)
                        .and_then(|range| run.text.get(range))
                        .unwrap_or_default()
                        .to_string()
                })
                .collect::<Vec<_>>()
        });
        if lines.is_empty() {
            text.lines().map(str::to_string).collect()
        } else {
            lines
        }
    }
}

/// The byte range of the line text a run covers.
///
/// Glyphs come in visual order, so with mixed directions neither the first
/// nor the last glyph bounds the range.
fn run_source_range(run: &cosmic_text::LayoutRun<'_>) -> Option<Range<usize>> {
    let start = run.glyphs.iter().map(|glyph| glyph.start).min()?;
    let end = run.glyphs.iter().map(|glyph| glyph.end).max()?;
    Some(start..end)
}

/// Maps the generic CSS family names onto cosmic-text families.
fn family(name: &str) -> Family<'_> {
    match name {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        other => Family::Name(other),
    }
}

/// Owns the shared cosmic-text [`FontSystem`].
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Shapes `text` into `bounds` and hands the resulting layout runs to `f`.
    fn shape<R>(
        &self,
        text: &str,
        font: &Font,
        bounds: TextBounds,
        f: impl FnOnce(&[cosmic_text::LayoutRun<'_>], Metrics) -> R,
    ) -> R {
        // A panic while shaping leaves the font system usable
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size = font.size.max(1.0);
        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_FACTOR);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(family(&font.family));
        buffer.set_size(bounds.max_width(), bounds.max_height());
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let runs: Vec<_> = buffer.layout_runs().collect();
        debug!(lines = runs.len(), font_size; "Shaped text");
        f(&runs, metrics)
    }
}

fn font_system() -> &'static TextManager {
    TEXT_MANAGER.get_or_init(TextManager::new)
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
