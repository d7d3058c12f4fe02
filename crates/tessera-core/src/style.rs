//! Box-model metrics: border, padding, cell spacing, and alignment.

use crate::geometry::{Axis, PerAxis};

/// Edge insets on all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Create uniform insets.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create symmetric insets.
    pub fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Inset at the start of an axis (left or top).
    pub fn leading(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Inset at the end of an axis (right or bottom).
    pub fn trailing(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Sum of both insets on an axis.
    pub fn along(&self, axis: Axis) -> f64 {
        self.leading(axis) + self.trailing(axis)
    }
}

/// Gap inserted between consecutive children of a container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    /// Gap between children of a horizontal container
    pub horizontal: f64,
    /// Gap between children of a vertical container
    pub vertical: f64,
}

impl Spacing {
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self { horizontal, vertical }
    }

    /// Gap used along a main axis.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// Placement of children within a container along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Pack items at the start
    #[default]
    Start,
    /// Center items
    Center,
    /// Pack items at the end
    End,
    /// Distribute free space evenly before, between and after items
    SpaceAround,
    /// Distribute free space between items only
    SpaceBetween,
}

/// Direction in which a container stacks its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Top to bottom
    #[default]
    Vertical,
    /// Left to right
    Horizontal,
}

impl Orientation {
    /// The axis children are stacked along.
    pub fn main_axis(self) -> Axis {
        match self {
            Orientation::Vertical => Axis::Vertical,
            Orientation::Horizontal => Axis::Horizontal,
        }
    }

    /// The axis each child is aligned on independently.
    pub fn cross_axis(self) -> Axis {
        self.main_axis().cross()
    }
}

/// Box-model metrics owned by a single node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxStyle {
    pub border: Insets,
    pub padding: Insets,
    pub spacing: Spacing,
    pub alignment: PerAxis<Alignment>,
}

impl BoxStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border widths.
    pub fn with_border(mut self, border: Insets) -> Self {
        self.border = border;
        self
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the cell spacing.
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the alignment on both axes.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = PerAxis::splat(alignment);
        self
    }

    pub fn with_horizontal_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment.horizontal = alignment;
        self
    }

    pub fn with_vertical_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment.vertical = alignment;
        self
    }

    /// Border plus padding across the horizontal axis.
    pub fn horizontal_inset(&self) -> f64 {
        self.border.horizontal() + self.padding.horizontal()
    }

    /// Border plus padding across the vertical axis.
    pub fn vertical_inset(&self) -> f64 {
        self.border.vertical() + self.padding.vertical()
    }

    /// Border plus padding across an axis.
    pub fn inset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal_inset(),
            Axis::Vertical => self.vertical_inset(),
        }
    }

    /// Border plus padding before the content box.
    pub fn leading_inset(&self, axis: Axis) -> f64 {
        self.border.leading(axis) + self.padding.leading(axis)
    }

    /// Border plus padding after the content box.
    pub fn trailing_inset(&self, axis: Axis) -> f64 {
        self.border.trailing(axis) + self.padding.trailing(axis)
    }
}
