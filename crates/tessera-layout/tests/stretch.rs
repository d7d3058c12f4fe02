//! Distribution of fixed and stretched container space to children.

mod common;

use common::*;
use glam::DVec2;
use tessera_core::{Alignment, Axis, LayoutError};
use tessera_layout::{Node, SizeMode, SizeOption};

#[test]
fn test_stretched_children_share_remaining_space() {
    init_tracing();
    // 300px of content height
    let mut group = vertical_group()
        .with_options(&[SizeOption::FixedHeight(300.0 + GROUP_INSET)])
        .unwrap();
    group.add(item(10.0, 50.0 - ITEM_INSET));
    group.add(item(10.0, 0.0).with_options(&[SizeOption::StretchHeight(1)]).unwrap());
    group.add(item(10.0, 70.0 - ITEM_INSET));
    group.add(item(10.0, 0.0).with_options(&[SizeOption::StretchHeight(3)]).unwrap());
    let mut node = Node::from(group);
    node.resolve_height().unwrap();

    // (300 - 10 * 3 - 50 - 70) / 4 = 37.5
    let heights: Vec<f64> = node.children().iter().map(|c| c.rect().height).collect();
    assert_close(heights[0], 50.0);
    assert_close(heights[1], 37.5);
    assert_close(heights[2], 70.0);
    assert_close(heights[3], 112.5);
}

#[test]
fn test_stretched_children_fill_group_after_positioning() {
    let mut group = horizontal_group()
        .with_options(&[SizeOption::FixedWidth(400.0)])
        .unwrap();
    for factor in [1, 2, 1] {
        group.add(item(0.0, 10.0).with_options(&[SizeOption::StretchWidth(factor)]).unwrap());
    }
    let mut node = Node::from(group);
    node.layout(DVec2::ZERO).unwrap();

    let children = node.children();
    let last = children[2].rect();
    // The last child ends exactly at the content box edge
    assert_close(last.right(), 400.0 - GROUP_BORDER - GROUP_PADDING);
    assert_close(children[1].rect().width, 2.0 * children[0].rect().width);
}

#[test]
fn test_add_clamps_cross_axis_factor() {
    let mut group = vertical_group()
        .with_options(&[SizeOption::FixedWidth(200.0)])
        .unwrap();
    group.add(item(10.0, 10.0).with_options(&[SizeOption::StretchWidth(5)]).unwrap());
    let mut node = Node::from(group);

    assert_eq!(
        node.children()[0].size_mode(Axis::Horizontal),
        SizeMode::Stretched(1)
    );

    node.resolve_width().unwrap();
    assert_close(node.children()[0].rect().width, 200.0 - GROUP_INSET);
}

#[test]
fn test_add_removes_stretch_in_content_sized_group() {
    let mut group = horizontal_group();
    group.add(item(10.0, 10.0).with_options(&[SizeOption::StretchWidth(2)]).unwrap());
    let mut node = Node::from(group);

    assert_eq!(node.children()[0].size_mode(Axis::Horizontal), SizeMode::Default);
    node.resolve_width().unwrap();
    assert_close(node.rect().width, 10.0 + ITEM_INSET + GROUP_INSET);
}

#[test]
fn test_fixed_size_below_inset_is_rejected() {
    let err = vertical_group()
        .with_options(&[SizeOption::FixedHeight(GROUP_INSET - 1.0)])
        .unwrap_err();
    assert!(matches!(
        err,
        LayoutError::FixedSizeTooSmall { axis: Axis::Vertical, .. }
    ));
}

#[test]
fn test_group_stretched_inside_group() {
    let mut outer = horizontal_group()
        .with_options(&[SizeOption::FixedWidth(500.0), SizeOption::FixedHeight(200.0)])
        .unwrap();
    let inner = vertical_group()
        .with_options(&[SizeOption::StretchWidth(1), SizeOption::StretchHeight(1)])
        .unwrap();
    outer.add(item(50.0, 50.0));
    outer.add(inner);
    if let Some(inner) = outer.children_mut()[1].as_container_mut() {
        inner.add(item(10.0, 10.0).with_options(&[SizeOption::StretchHeight(1)]).unwrap());
    }
    let mut node = Node::from(outer);
    node.layout(DVec2::new(10.0, 10.0)).unwrap();

    let inner = &node.children()[1];
    // 470 content - 5 spacing - 64 item
    assert_close(inner.rect().width, 401.0);
    assert_close(inner.rect().height, 200.0 - GROUP_INSET);
    assert_close(inner.children()[0].rect().height, 200.0 - 2.0 * GROUP_INSET);
}

#[test]
fn test_centered_stretched_group_layout() {
    let style = group_style().with_alignment(Alignment::Center);
    let mut group = tessera_layout::Container::vertical(style)
        .with_options(&[SizeOption::FixedWidth(130.0), SizeOption::FixedHeight(130.0)])
        .unwrap();
    group.add(item(36.0, 36.0));
    let mut node = Node::from(group);
    node.layout(DVec2::ZERO).unwrap();

    let child = node.children()[0].rect();
    assert_close(child.x, 40.0);
    assert_close(child.y, 40.0);
}
