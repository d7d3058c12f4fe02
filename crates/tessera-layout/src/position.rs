//! Positioning: assigns absolute origins after sizes are resolved.
//!
//! A container places its own origin first, then its children, recursing into
//! each child before moving on to the next sibling.

use tessera_core::{Alignment, Axis, LayoutError};
use tracing::trace;

use crate::node::{Container, Node};

impl Node {
    /// Place this subtree horizontally. Widths must already be resolved.
    pub fn set_x(&mut self, x: f64) -> Result<(), LayoutError> {
        self.place(Axis::Horizontal, x)
    }

    /// Place this subtree vertically. Heights must already be resolved.
    pub fn set_y(&mut self, y: f64) -> Result<(), LayoutError> {
        self.place(Axis::Vertical, y)
    }

    pub fn place(&mut self, axis: Axis, origin: f64) -> Result<(), LayoutError> {
        match self {
            Node::Leaf(leaf) => {
                leaf.frame.set_origin(axis, origin);
                Ok(())
            }
            Node::Container(container) => container.place(axis, origin),
        }
    }
}

impl Container {
    pub fn place(&mut self, axis: Axis, origin: f64) -> Result<(), LayoutError> {
        self.frame.set_origin(axis, origin);
        trace!(%axis, name = self.frame.name.as_deref(), origin, "placed container");
        if axis == self.main_axis() {
            self.place_main(axis, origin)
        } else {
            self.place_cross(axis, origin)
        }
    }

    fn place_main(&mut self, axis: Axis, origin: f64) -> Result<(), LayoutError> {
        let count = self.children().len();
        if count == 0 {
            return Ok(());
        }

        let style = self.frame.style;
        let spacing = self.spacing();
        let content = self.frame.content_size()[axis];
        let extent = self.frame.rect().extent(axis);
        let leading = origin + style.leading_inset(axis);

        let total: f64 = self.children().iter().map(|child| child.rect().extent(axis)).sum();
        let span = total + spacing * (count - 1) as f64;
        let free = content - total;

        let (start, gap) = match style.alignment[axis] {
            Alignment::Start => (leading, spacing),
            Alignment::Center => (leading + (content - span) / 2.0, spacing),
            Alignment::End => (origin + extent - style.trailing_inset(axis) - span, spacing),
            Alignment::SpaceAround => {
                let gap = free / (count + 1) as f64;
                (leading + gap, gap)
            }
            Alignment::SpaceBetween => {
                if count == 1 {
                    return Err(LayoutError::SpaceBetweenSingleChild { axis });
                }
                (leading, free / (count - 1) as f64)
            }
        };

        let mut next = start;
        for child in self.children_mut() {
            child.place(axis, next)?;
            next += child.rect().extent(axis) + gap;
        }
        Ok(())
    }

    /// Each child is aligned on its own within the content box. SpaceAround
    /// and SpaceBetween have nothing to distribute here and center the child.
    fn place_cross(&mut self, axis: Axis, origin: f64) -> Result<(), LayoutError> {
        let style = self.frame.style;
        let content = self.frame.content_size()[axis];
        let trailing_edge = origin + self.frame.rect().extent(axis) - style.trailing_inset(axis);
        let leading = origin + style.leading_inset(axis);

        for child in self.children_mut() {
            let child_extent = child.rect().extent(axis);
            let child_origin = match style.alignment[axis] {
                Alignment::Start => leading,
                Alignment::End => trailing_edge - child_extent,
                Alignment::Center | Alignment::SpaceAround | Alignment::SpaceBetween => {
                    leading + (content - child_extent) / 2.0
                }
            };
            child.place(axis, child_origin)?;
        }
        Ok(())
    }
}
