//! Intrinsic bubble size from content and appearance.

use log::debug;

use callout_core::{
    appearance::Appearance,
    geometry::{Side, Size},
    text::{TextBounds, TextMeasurer},
};

/// Extra height the text may use beside a left or right image.
const SIDE_IMAGE_TEXT_SLACK: f32 = 50.0;

/// Computes the full bubble size, arrow protrusion included.
///
/// With an image on the left or right the bubble is as tall as the image
/// plus its margins and the text sits beside it. With an image on the top or
/// bottom the bubble is as wide as the image plus its margins and the text
/// wraps to the image width below or above it. Without an image the bubble is
/// the text plus its insets. The arrow height is added last along the arrow
/// axis.
pub fn bubble_size<M: TextMeasurer>(
    measurer: &M,
    text: &str,
    has_image: bool,
    appearance: &Appearance,
    max_text_width: f32,
) -> Size {
    let style = &appearance.style;
    let insets = style.text_insets;
    let image = &appearance.image;

    let content = if !has_image {
        let text_size = measurer.measure(text, &style.font, TextBounds::width(max_text_width));
        debug!(width = text_size.width(), height = text_size.height(); "Measured text");
        text_size.add_padding(insets)
    } else if image.side.is_horizontal_axis() {
        let bounds = TextBounds::new(
            Some(max_text_width),
            Some(image.height + SIDE_IMAGE_TEXT_SLACK),
        );
        let text_size = measurer.measure(text, &style.font, bounds);
        debug!(width = text_size.width(), height = text_size.height(); "Measured text beside image");
        Size::new(
            image.width + 2.0 * image.offset + text_size.width() + insets.horizontal_sum(),
            image.height + 2.0 * image.offset,
        )
    } else {
        let text_size = measurer.measure(text, &style.font, TextBounds::width(image.width));
        debug!(width = text_size.width(), height = text_size.height(); "Measured text under image");
        Size::new(
            image.width + 2.0 * image.offset,
            image.height + 2.0 * image.offset + text_size.height() + insets.vertical_sum(),
        )
    };

    with_arrow(content, appearance.arrow.side, appearance.arrow.height)
}

/// Grows `size` by the arrow height along the arrow's axis.
fn with_arrow(size: Size, side: Side, arrow_height: f32) -> Size {
    if side.is_horizontal_axis() {
        Size::new(size.width() + arrow_height, size.height())
    } else {
        Size::new(size.width(), size.height() + arrow_height)
    }
}

#[cfg(test)]
mod tests {
    use callout_core::text::ApproximateTextMeasurer;
    use float_cmp::assert_approx_eq;

    use super::*;

    fn text_size(measurer: &ApproximateTextMeasurer, text: &str, bounds: TextBounds) -> Size {
        measurer.measure(text, &Appearance::default().style.font, bounds)
    }

    #[test]
    fn test_size_without_image() {
        let measurer = ApproximateTextMeasurer::default();
        let appearance = Appearance::default();
        let text = text_size(&measurer, "Hi", TextBounds::width(200.0));

        let size = bubble_size(&measurer, "Hi", false, &appearance, 200.0);

        assert_approx_eq!(f32, size.width(), text.width() + 20.0);
        assert_approx_eq!(f32, size.height(), text.height() + 20.0 + 20.0);
    }

    #[test]
    fn test_size_with_left_image_and_bottom_arrow() {
        let measurer = ApproximateTextMeasurer::default();
        let appearance = Appearance::default();
        let text = text_size(&measurer, "Look here", TextBounds::new(Some(200.0), Some(100.0)));

        let size = bubble_size(&measurer, "Look here", true, &appearance, 200.0);

        assert_approx_eq!(f32, size.height(), 90.0);
        assert_approx_eq!(f32, size.width(), 70.0 + text.width() + 20.0);
    }

    #[test]
    fn test_size_with_top_image_and_right_arrow() {
        let measurer = ApproximateTextMeasurer::default();
        let mut appearance = Appearance::default();
        appearance.image.side = Side::Top;
        appearance.arrow.side = Side::Right;
        let text = text_size(&measurer, "Wrapped under the image", TextBounds::width(50.0));

        let size = bubble_size(&measurer, "Wrapped under the image", true, &appearance, 200.0);

        assert_approx_eq!(f32, size.width(), 70.0 + 20.0);
        assert_approx_eq!(f32, size.height(), 70.0 + text.height() + 20.0);
    }

    #[test]
    fn test_long_text_wraps_at_max_width() {
        let measurer = ApproximateTextMeasurer::default();
        let mut appearance = Appearance::default();
        appearance.arrow.height = 0.0;
        let text = "word ".repeat(100);

        let size = bubble_size(&measurer, &text, false, &appearance, 120.0);

        assert!(size.width() <= 120.0 + 20.0);
        assert!(size.height() > 40.0);
    }
}
