//! Shared fixtures: item and group styles with fixed box-model metrics.

#![allow(dead_code)]

use tessera_core::{BoxStyle, Insets, Size, Spacing};
use tessera_layout::{Container, Leaf};

pub const ITEM_BORDER: f64 = 2.0;
pub const ITEM_PADDING: f64 = 5.0;
pub const GROUP_BORDER: f64 = 10.0;
pub const GROUP_PADDING: f64 = 5.0;
pub const SPACING_VERTICAL: f64 = 10.0;
pub const SPACING_HORIZONTAL: f64 = 5.0;

/// Border plus padding of an item across one axis.
pub const ITEM_INSET: f64 = 2.0 * (ITEM_BORDER + ITEM_PADDING);
/// Border plus padding of a group across one axis.
pub const GROUP_INSET: f64 = 2.0 * (GROUP_BORDER + GROUP_PADDING);

pub fn item_style() -> BoxStyle {
    BoxStyle::new()
        .with_border(Insets::uniform(ITEM_BORDER))
        .with_padding(Insets::uniform(ITEM_PADDING))
}

pub fn group_style() -> BoxStyle {
    BoxStyle::new()
        .with_border(Insets::uniform(GROUP_BORDER))
        .with_padding(Insets::uniform(GROUP_PADDING))
        .with_spacing(Spacing::new(SPACING_HORIZONTAL, SPACING_VERTICAL))
}

pub fn item(width: f64, height: f64) -> Leaf {
    Leaf::new(Size::new(width, height), item_style())
}

pub fn vertical_group() -> Container {
    Container::vertical(group_style())
}

pub fn horizontal_group() -> Container {
    Container::horizontal(group_style())
}

/// Content sizes shared by the multi-child cases.
pub const FIVE_ITEMS: [(f64, f64); 5] = [
    (10.0, 20.0),
    (20.0, 30.0),
    (30.0, 40.0),
    (40.0, 50.0),
    (50.0, 60.0),
];

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.001,
        "expected {expected}, got {actual}"
    );
}

/// Route engine logs to the test harness. Set RUST_LOG to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
