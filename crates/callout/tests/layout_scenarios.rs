//! End-to-end layout scenarios through the public API.

use std::rc::Rc;

use float_cmp::assert_approx_eq;

use callout::{
    appearance::Appearance,
    geometry::{Bounds, Insets, Side, Size},
    layout::{LayoutEngine, TooltipContent},
    lifecycle::{Presentation, VisibleCounter},
    text::{ApproximateTextMeasurer, TextBounds, TextMeasurer},
};

fn engine() -> LayoutEngine<ApproximateTextMeasurer> {
    LayoutEngine::new(ApproximateTextMeasurer::default())
}

fn anchor() -> Bounds {
    Bounds::new(100.0, 100.0, 50.0, 50.0)
}

fn container() -> Bounds {
    Bounds::new(0.0, 0.0, 400.0, 800.0)
}

#[test]
fn test_short_text_above_anchor() {
    let appearance = Appearance::default();
    let layout = engine().compute_layout(anchor(), container(), &TooltipContent::new("Hi"), &appearance);
    let frame = layout.frame();

    assert_eq!(layout.arrow_side(), Side::Bottom);
    assert_approx_eq!(f32, frame.max_y(), 94.0);
    assert_approx_eq!(f32, layout.tip().y(), frame.height());
    assert_approx_eq!(f32, layout.tip().x(), 125.0 - frame.min_x());

    let outline_bounds = layout.outline().bounds();
    assert_approx_eq!(f32, outline_bounds.width(), frame.width(), epsilon = 1e-3);
    assert_approx_eq!(f32, outline_bounds.height(), frame.height(), epsilon = 1e-3);
}

#[test]
fn test_left_image_sets_minimum_height() {
    let measurer = ApproximateTextMeasurer::default();
    let appearance = Appearance::default();
    let content = TooltipContent::new("Hi").with_image(Size::new(50.0, 50.0));
    let layout = engine().compute_layout(anchor(), container(), &content, &appearance);

    let text_width = measurer
        .measure("Hi", &appearance.style.font, TextBounds::new(Some(200.0), Some(100.0)))
        .width();
    assert_approx_eq!(f32, layout.frame().height(), 90.0);
    assert_approx_eq!(
        f32,
        layout.frame().width(),
        50.0 + 20.0 + text_width + 20.0,
        epsilon = 1e-3
    );

    let slot = layout.image_slot().expect("image slot");
    assert_approx_eq!(f32, slot.min_x(), 10.0);
    assert_approx_eq!(f32, slot.min_y(), 10.0);
    assert!(layout.text().min_x() >= slot.max_x());
}

#[test]
fn test_min_top_inset_pushes_bubble_down() {
    let natural = engine().compute_layout(
        anchor(),
        container(),
        &TooltipContent::new("Hi"),
        &Appearance::default(),
    );

    let mut appearance = Appearance::default();
    appearance.style.min_insets = Some(Insets::new(90.0, 0.0, 0.0, 0.0));
    let layout = engine().compute_layout(anchor(), container(), &TooltipContent::new("Hi"), &appearance);

    assert!(natural.frame().min_y() < 90.0);
    assert_approx_eq!(f32, layout.frame().min_y(), 90.0);
    assert!(layout.frame().height() >= natural.frame().height() - 1e-3);
    assert!(layout.container_distances(container()).top() >= 90.0 - 1e-3);
}

#[test]
fn test_max_right_inset_clamps_width() {
    let text = "This message is long enough to run well past the right side of the screen";
    let wide_engine = engine().with_max_text_width(1000.0);

    let natural = wide_engine.compute_layout(
        anchor(),
        container(),
        &TooltipContent::new(text),
        &Appearance::default(),
    );
    assert!(natural.frame().width() > 364.0);

    let mut appearance = Appearance::default();
    appearance.style.max_insets = Some(Insets::new(0.0, 36.0, 0.0, 0.0));
    let layout = wide_engine.compute_layout(anchor(), container(), &TooltipContent::new(text), &appearance);

    assert_approx_eq!(f32, layout.frame().width(), 364.0);
    assert!(layout.frame().max_x() <= 364.0 + 1e-3);
}

#[test]
fn test_every_arrow_side_points_at_anchor() {
    let anchor = Bounds::new(150.0, 350.0, 40.0, 40.0);
    for side in Side::ALL {
        let mut appearance = Appearance::default();
        appearance.arrow.side = side;
        let layout = engine().compute_layout(anchor, container(), &TooltipContent::new("Hello"), &appearance);

        let tip = layout.tip().add_point(layout.frame().min_point());
        let gap = match side {
            Side::Bottom => anchor.min_y() - tip.y(),
            Side::Top => tip.y() - anchor.max_y(),
            Side::Left => tip.x() - anchor.max_x(),
            Side::Right => anchor.min_x() - tip.x(),
        };
        assert_approx_eq!(f32, gap, 6.0, epsilon = 1e-3);
    }
}

#[test]
fn test_layout_is_deterministic() {
    let appearance = Appearance::default();
    let content = TooltipContent::new("Same input").with_image(Size::new(20.0, 40.0));

    let first = engine().compute_layout(anchor(), container(), &content, &appearance);
    let second = engine().compute_layout(anchor(), container(), &content, &appearance);
    assert_eq!(first, second);
    assert_eq!(
        first.outline().to_path_string(),
        second.outline().to_path_string()
    );
}

#[test]
fn test_double_dismiss_changes_counter_once() {
    let counter = Rc::new(VisibleCounter::default());
    let mut presentation = Presentation::new(Appearance::default(), counter.clone());

    presentation.show(false);
    assert_eq!(counter.count(), 1);

    presentation.dismiss();
    assert_eq!(counter.count(), 0);
    presentation.dismiss();
    assert_eq!(counter.count(), 0);
    presentation.complete_dismiss();
    presentation.complete_dismiss();
    assert_eq!(counter.count(), 0);
}
