//! Stack layout engine for immediate-mode UI trees.
//!
//! This crate computes the border-box rect of every node in a tree of leaves
//! and containers. Leaves carry a content size measured by the caller;
//! containers stack their children along a main axis.
//!
//! # Architecture
//!
//! 1. **Resolution**: widths and heights are resolved independently. Each axis
//!    of a node is stretched, fixed, or sized by its content.
//! 2. **Distribution**: containers with a known extent share the space left by
//!    their other children among stretched children.
//! 3. **Positioning**: origins are assigned top-down according to each
//!    container's alignment.
//!
//! # Example
//!
//! ```
//! use glam::DVec2;
//! use tessera_core::{BoxStyle, Insets, Size};
//! use tessera_layout::{Container, Leaf, Node, SizeOption};
//!
//! let style = BoxStyle::new().with_padding(Insets::uniform(4.0));
//! let panel = Container::vertical(style)
//!     .with_options(&[SizeOption::FixedWidth(200.0)])?
//!     .with_child(Leaf::new(Size::new(80.0, 20.0), style))
//!     .with_child(Leaf::new(Size::ZERO, style).with_options(&[SizeOption::StretchWidth(1)])?);
//!
//! let mut root = Node::from(panel);
//! root.layout(DVec2::ZERO)?;
//!
//! assert_eq!(root.children()[1].rect().width, 192.0);
//! # Ok::<(), tessera_core::LayoutError>(())
//! ```

mod node;
mod position;
mod resolve;
mod stretch;
mod tree;

pub use node::{
    AxisSizing, Container, Frame, Leaf, Node, SizeMode, SizeOption, DEFAULT_MAX_EXTENT,
    DEFAULT_MIN_EXTENT,
};
pub use stretch::StretchResolver;
pub use tree::Walk;
