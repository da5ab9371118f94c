use scrollpane::{
    Axis, ConfigError, RangePolicy, ScrollBar, ScrollView, ScrollViewConfig, Scroller,
    ScrollerRange, WheelPolicy, DEFAULT_PAGE_SIZE,
};

// ============================================================================
// Scroller
// ============================================================================

#[test]
fn test_scroller_starts_at_low() {
    let scroller = Scroller::new(Axis::Vertical, ScrollerRange::new(10.0, 90.0));

    assert_eq!(scroller.value(), 10.0);
    assert_eq!(scroller.axis(), Axis::Vertical);
    assert_eq!(scroller.thumb_ratio(), 1.0);
    assert!(scroller.is_enabled());
    assert!(scroller.is_visible());
}

#[test]
fn test_set_value_clamps_and_reports_changes() {
    let mut scroller = Scroller::new(Axis::Horizontal, ScrollerRange::new(0.0, 100.0));

    assert_eq!(scroller.set_value(40.0), Some(40.0));
    assert_eq!(scroller.set_value(40.0), None);
    assert_eq!(scroller.set_value(-5.0), Some(0.0));
    assert_eq!(scroller.set_value(250.0), Some(100.0));
    assert_eq!(scroller.value(), 100.0);
}

#[test]
fn test_page_steps_move_by_page_size() {
    let mut scroller = Scroller::new(Axis::Vertical, ScrollerRange::new(0.0, 100.0));

    assert_eq!(scroller.page_down(), Some(DEFAULT_PAGE_SIZE));
    assert_eq!(scroller.page_down(), Some(2.0 * DEFAULT_PAGE_SIZE));
    assert_eq!(scroller.page_up(), Some(DEFAULT_PAGE_SIZE));
    assert_eq!(scroller.page_up(), Some(0.0));
    assert_eq!(scroller.page_up(), None, "already at low");
}

#[test]
fn test_page_steps_on_inverted_range() {
    let mut scroller =
        Scroller::new(Axis::Vertical, ScrollerRange::new(100.0, 0.0)).page_size(30.0);

    assert_eq!(scroller.value(), 100.0);
    assert_eq!(scroller.page_down(), Some(70.0));
    assert_eq!(scroller.page_up(), Some(100.0));
    assert_eq!(scroller.page_up(), None);
    assert_eq!(scroller.set_value(-20.0), Some(0.0));
    assert_eq!(scroller.page_down(), None, "already at high");
}

#[test]
fn test_adjust_clamps_thumb_ratio() {
    let mut scroller = Scroller::new(Axis::Horizontal, ScrollerRange::DEFAULT);

    scroller.adjust(0.4);
    assert_eq!(scroller.thumb_ratio(), 0.4);

    scroller.adjust(2.5);
    assert_eq!(scroller.thumb_ratio(), 1.0);

    scroller.adjust(-1.0);
    assert_eq!(scroller.thumb_ratio(), 0.0);
}

#[test]
fn test_enabled_and_visible_flags() {
    let mut scroller = Scroller::new(Axis::Horizontal, ScrollerRange::DEFAULT);

    scroller.set_enabled(false);
    scroller.set_visible(false);

    assert!(!scroller.is_enabled());
    assert!(!scroller.is_visible());
    assert!(!scroller.node().visible);
}

#[test]
fn test_range_helpers() {
    let range = ScrollerRange::new(100.0, 0.0);

    assert!(range.is_inverted());
    assert_eq!(range.span(), -100.0);
    assert_eq!(range.clamp(150.0), 100.0);
    assert_eq!(range.clamp(-1.0), 0.0);
    assert_eq!(ScrollerRange::from((1.0, 2.0)), ScrollerRange::new(1.0, 2.0));
    assert!(!ScrollerRange::new(f32::NAN, 1.0).is_finite());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_default_config_is_valid() {
    let config = ScrollViewConfig::default();

    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.range_policy, RangePolicy::Neutral);
    assert_eq!(config.wheel_policy, WheelPolicy::AlwaysConsume);
    assert!(!config.show_horizontal);
    assert!(!config.show_vertical);
}

#[test]
fn test_builder_sets_fields() {
    let config = ScrollViewConfig::new()
        .ranges((0.0, 10.0), (5.0, 6.0))
        .show_horizontal(true)
        .show_vertical(true)
        .page_size(3.0)
        .range_policy(RangePolicy::Propagate)
        .wheel_policy(WheelPolicy::ConsumeWhenScrollable);

    assert_eq!(config.horizontal_range, ScrollerRange::new(0.0, 10.0));
    assert_eq!(config.vertical_range, ScrollerRange::new(5.0, 6.0));
    assert!(config.show_horizontal);
    assert!(config.show_vertical);
    assert_eq!(config.page_size, 3.0);

    let view = ScrollView::new(config);
    assert!(view.show_horizontal());
    assert!(view.show_vertical());
}

#[test]
fn test_non_finite_range_is_rejected() {
    let config = ScrollViewConfig::new().ranges((0.0, 100.0), (0.0, f32::INFINITY));

    let err = config.validate().unwrap_err();

    assert!(matches!(
        err,
        ConfigError::NonFiniteRange {
            axis: Axis::Vertical,
            ..
        }
    ));
    assert!(err.to_string().contains("Vertical"));
}

#[test]
fn test_invalid_page_size_is_rejected() {
    for page_size in [0.0, -4.0, f32::NAN] {
        let config = ScrollViewConfig::new().page_size(page_size);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPageSize(_))
        ));
    }
}

#[test]
fn test_try_new_validates() {
    assert!(ScrollView::try_new(ScrollViewConfig::new()).is_ok());
    assert!(ScrollView::try_new(ScrollViewConfig::new().page_size(0.0)).is_err());
}

#[test]
fn test_new_accepts_degenerate_config() {
    let view = ScrollView::new(ScrollViewConfig::new().ranges((5.0, 5.0), (5.0, 5.0)));

    assert_eq!(view.horizontal_scroller_values(), ScrollerRange::new(5.0, 5.0));
    assert_eq!(view.vertical_scroller().value(), 5.0);
}
