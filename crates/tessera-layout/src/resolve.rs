//! Width and height resolution.
//!
//! Each axis is resolved independently. A node's extent comes from exactly one
//! of three modes, in order of precedence: stretched (a share of the space its
//! container hands down), fixed, or content-driven. Containers in content mode
//! measure their children bottom-up; containers whose extent is known upfront
//! distribute it top-down.

use tessera_core::{Axis, LayoutError};
use tracing::{debug, trace};

use crate::node::{Container, Frame, Leaf, Node, SizeMode};
use crate::stretch::StretchResolver;

impl Node {
    /// Resolve widths for this subtree.
    pub fn resolve_width(&mut self) -> Result<(), LayoutError> {
        self.resolve(Axis::Horizontal, None)
    }

    /// Resolve heights for this subtree.
    pub fn resolve_height(&mut self) -> Result<(), LayoutError> {
        self.resolve(Axis::Vertical, None)
    }

    /// Resolve one axis. `unit_part` is the extent of one stretch unit, only
    /// available when an enclosing container determines this node's extent.
    pub fn resolve(&mut self, axis: Axis, unit_part: Option<f64>) -> Result<(), LayoutError> {
        match self {
            Node::Leaf(leaf) => leaf.resolve(axis, unit_part),
            Node::Container(container) => container.resolve(axis, unit_part),
        }
    }
}

impl Frame {
    /// The border-box extent when it is known without looking at content.
    fn determined_extent(
        &self,
        axis: Axis,
        unit_part: Option<f64>,
    ) -> Result<Option<f64>, LayoutError> {
        match self.size_mode(axis) {
            SizeMode::Stretched(factor) => match unit_part {
                Some(part) if part > 0.0 => Ok(Some(part * f64::from(factor))),
                _ => Err(LayoutError::InvalidUnitPart { axis, unit_part }),
            },
            SizeMode::Fixed(extent) => Ok(Some(extent)),
            SizeMode::Default => Ok(None),
        }
    }
}

impl Leaf {
    pub fn resolve(&mut self, axis: Axis, unit_part: Option<f64>) -> Result<(), LayoutError> {
        match self.frame.determined_extent(axis, unit_part)? {
            Some(extent) => {
                self.frame.commit_extent(axis, extent);
            }
            None => self.frame.commit_content(axis, self.content[axis]),
        }
        trace!(
            %axis,
            name = self.frame.name.as_deref(),
            extent = self.frame.rect().extent(axis),
            "resolved leaf"
        );
        Ok(())
    }
}

impl Container {
    pub fn resolve(&mut self, axis: Axis, unit_part: Option<f64>) -> Result<(), LayoutError> {
        match self.frame.determined_extent(axis, unit_part)? {
            Some(extent) => {
                let content = self.frame.commit_extent(axis, extent);
                if content <= 0.0 {
                    debug!(
                        %axis,
                        name = self.frame.name.as_deref(),
                        "container has no space to hold its children"
                    );
                    return Ok(());
                }
                if axis == self.main_axis() {
                    self.distribute_main(axis, content)?;
                } else {
                    self.distribute_cross(axis, content)?;
                }
            }
            None => {
                let content = self.measure(axis)?;
                self.frame.commit_content(axis, content);
            }
        }
        trace!(
            %axis,
            name = self.frame.name.as_deref(),
            extent = self.frame.rect().extent(axis),
            children = self.children().len(),
            "resolved container"
        );
        Ok(())
    }

    /// Resolve every child on its own, then size the content box around them.
    fn measure(&mut self, axis: Axis) -> Result<f64, LayoutError> {
        let main = axis == self.main_axis();
        let spacing = self.spacing();
        let children = self.children_mut();
        for child in children.iter_mut() {
            child.resolve(axis, None)?;
        }

        let extents = children.iter().map(|child| child.rect().extent(axis));
        let content = if main {
            let total_spacing = spacing * children.len().saturating_sub(1) as f64;
            extents.sum::<f64>() + total_spacing
        } else {
            extents.fold(0.0_f64, f64::max)
        };
        Ok(content)
    }

    /// Non-stretched children take what they need, stretched children share
    /// the rest in proportion to their factors.
    fn distribute_main(&mut self, axis: Axis, content: f64) -> Result<(), LayoutError> {
        let spacing = self.spacing();
        let children = self.children_mut();
        let mut resolver = StretchResolver::new(axis, content, spacing, children.len());

        for child in children.iter_mut() {
            if child.frame().is_stretched(axis) {
                resolver.add_stretched(child.frame().sizing(axis).stretch);
            } else {
                child.resolve(axis, None)?;
                resolver.reserve(child.rect().extent(axis));
            }
        }

        if !resolver.has_stretched() {
            return Ok(());
        }

        let unit_part = resolver.unit_part()?;
        trace!(%axis, unit_part, "distributing stretched children");
        for child in children.iter_mut() {
            if child.frame().is_stretched(axis) {
                child.resolve(axis, Some(unit_part))?;
            }
        }
        Ok(())
    }

    /// Stretched children fill the whole content extent on the cross axis.
    fn distribute_cross(&mut self, axis: Axis, content: f64) -> Result<(), LayoutError> {
        for child in self.children_mut() {
            let unit_part = child.frame().is_stretched(axis).then_some(content);
            child.resolve(axis, unit_part)?;
        }
        Ok(())
    }
}
