//! Layout node data structures.
//!
//! A layout tree is built fresh for every pass: leaves carry an externally
//! measured content size, containers own their children and stack them along
//! a main axis. Each node owns exactly one [`Frame`] holding its box-model
//! metrics, sizing configuration, and computed rect.

use tessera_core::{
    almost_equal, Axis, BoxStyle, LayoutError, Orientation, PerAxis, Rect, Size,
};

/// Default lower bound of a node's extent.
pub const DEFAULT_MIN_EXTENT: f64 = 1.0;
/// Default upper bound of a node's extent.
pub const DEFAULT_MAX_EXTENT: f64 = 9999.0;

/// Sizing configuration for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSizing {
    /// Minimum border-box extent
    pub min: f64,
    /// Maximum border-box extent
    pub max: f64,
    /// Share of distributed space (0 = don't stretch)
    pub stretch: u32,
}

impl Default for AxisSizing {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_EXTENT,
            max: DEFAULT_MAX_EXTENT,
            stretch: 0,
        }
    }
}

impl AxisSizing {
    /// The extent is fixed when min and max agree.
    pub fn is_fixed(&self) -> bool {
        almost_equal(self.min, self.max)
    }

    pub fn is_stretched(&self) -> bool {
        !self.is_fixed() && self.stretch > 0
    }
}

/// How a node's extent on one axis is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeMode {
    /// Extent is `unit part * factor`, handed down by the enclosing container
    Stretched(u32),
    /// Extent is the given border-box size
    Fixed(f64),
    /// Extent is derived from content plus insets
    Default,
}

/// A size option applied to a node before resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeOption {
    FixedWidth(f64),
    FixedHeight(f64),
    StretchWidth(u32),
    StretchHeight(u32),
}

/// State shared by every node kind.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Optional name for debugging
    pub name: Option<String>,
    /// Box-model metrics
    pub style: BoxStyle,
    sizing: PerAxis<AxisSizing>,
    rect: Rect,
    content_size: Size,
}

impl Frame {
    pub fn new(style: BoxStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    pub fn sizing(&self, axis: Axis) -> &AxisSizing {
        &self.sizing[axis]
    }

    pub fn is_fixed(&self, axis: Axis) -> bool {
        self.sizing[axis].is_fixed()
    }

    pub fn is_stretched(&self, axis: Axis) -> bool {
        self.sizing[axis].is_stretched()
    }

    /// Classify the sizing of one axis. Stretched takes precedence over fixed.
    pub fn size_mode(&self, axis: Axis) -> SizeMode {
        let sizing = &self.sizing[axis];
        if sizing.is_stretched() {
            SizeMode::Stretched(sizing.stretch)
        } else if sizing.is_fixed() {
            SizeMode::Fixed(sizing.min)
        } else {
            SizeMode::Default
        }
    }

    /// Fix the border-box extent on an axis, clearing its stretch factor.
    pub fn set_fixed(&mut self, axis: Axis, size: f64) -> Result<(), LayoutError> {
        if !size.is_finite() {
            return Err(LayoutError::NonFiniteFixedSize { axis, size });
        }
        let inset = self.style.inset(axis);
        if size < inset {
            return Err(LayoutError::FixedSizeTooSmall { axis, size, inset });
        }
        let sizing = &mut self.sizing[axis];
        sizing.min = size;
        sizing.max = size;
        sizing.stretch = 0;
        Ok(())
    }

    pub fn set_stretch(&mut self, axis: Axis, factor: u32) {
        self.sizing[axis].stretch = factor;
    }

    /// Apply size options in order.
    pub fn apply_options(&mut self, options: &[SizeOption]) -> Result<(), LayoutError> {
        for option in options {
            match *option {
                SizeOption::FixedWidth(size) => self.set_fixed(Axis::Horizontal, size)?,
                SizeOption::FixedHeight(size) => self.set_fixed(Axis::Vertical, size)?,
                SizeOption::StretchWidth(factor) => self.set_stretch(Axis::Horizontal, factor),
                SizeOption::StretchHeight(factor) => self.set_stretch(Axis::Vertical, factor),
            }
        }
        Ok(())
    }

    /// Computed border box.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Computed content-box size.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// The content box: the border box minus border and padding.
    pub fn content_rect(&self) -> Rect {
        let style = &self.style;
        Rect::new(
            self.rect.x + style.leading_inset(Axis::Horizontal),
            self.rect.y + style.leading_inset(Axis::Vertical),
            self.content_size.width,
            self.content_size.height,
        )
    }

    /// Record a border-box extent and return the content extent it leaves.
    pub(crate) fn commit_extent(&mut self, axis: Axis, extent: f64) -> f64 {
        let inset = self.style.inset(axis);
        let extent = extent.max(inset);
        let content = extent - inset;
        self.rect.set_extent(axis, extent);
        self.content_size[axis] = content;
        content
    }

    /// Record a content extent and derive the border box around it.
    pub(crate) fn commit_content(&mut self, axis: Axis, content: f64) {
        let content = content.max(0.0);
        self.rect.set_extent(axis, content + self.style.inset(axis));
        self.content_size[axis] = content;
    }

    pub(crate) fn set_origin(&mut self, axis: Axis, origin: f64) {
        self.rect.set_origin(axis, origin);
    }

    pub(crate) fn sizing_mut(&mut self, axis: Axis) -> &mut AxisSizing {
        &mut self.sizing[axis]
    }

    pub(crate) fn reset(&mut self) {
        self.rect = Rect::default();
        self.content_size = Size::ZERO;
    }
}

/// A box whose content size is measured externally.
#[derive(Debug, Clone, Default)]
pub struct Leaf {
    pub frame: Frame,
    /// Intrinsic content size, used when an axis is neither fixed nor stretched
    pub content: Size,
}

impl Leaf {
    pub fn new(content: Size, style: BoxStyle) -> Self {
        Self {
            frame: Frame::new(style),
            content,
        }
    }

    /// Apply size options.
    pub fn with_options(mut self, options: &[SizeOption]) -> Result<Self, LayoutError> {
        self.frame.apply_options(options)?;
        Ok(self)
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.frame.name = Some(name.into());
        self
    }
}

/// A box that stacks child nodes along its main axis.
#[derive(Debug, Clone, Default)]
pub struct Container {
    pub frame: Frame,
    pub orientation: Orientation,
    /// Clip children to the content box when painting
    pub clipped: bool,
    children: Vec<Node>,
}

impl Container {
    pub fn new(orientation: Orientation, style: BoxStyle) -> Self {
        Self {
            frame: Frame::new(style),
            orientation,
            clipped: false,
            children: Vec::new(),
        }
    }

    pub fn vertical(style: BoxStyle) -> Self {
        Self::new(Orientation::Vertical, style)
    }

    pub fn horizontal(style: BoxStyle) -> Self {
        Self::new(Orientation::Horizontal, style)
    }

    /// Apply size options. Options must be applied before children are added.
    pub fn with_options(mut self, options: &[SizeOption]) -> Result<Self, LayoutError> {
        self.frame.apply_options(options)?;
        Ok(self)
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.frame.name = Some(name.into());
        self
    }

    /// Enable clipping.
    pub fn with_clip(mut self, clipped: bool) -> Self {
        self.clipped = clipped;
        self
    }

    /// Add a child and return self.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add(child);
        self
    }

    pub fn main_axis(&self) -> Axis {
        self.orientation.main_axis()
    }

    pub fn cross_axis(&self) -> Axis {
        self.orientation.cross_axis()
    }

    /// Gap between consecutive children along the main axis.
    pub fn spacing(&self) -> f64 {
        self.frame.style.spacing.along(self.main_axis())
    }

    /// Append a child, normalizing its stretch factors to what this container
    /// can give it.
    ///
    /// On an axis where the container is neither fixed nor stretched there is
    /// no space to hand out, so the child's factor is zeroed. On the cross axis
    /// every stretched child receives the whole content extent, so its factor
    /// is clamped to 1.
    pub fn add(&mut self, child: impl Into<Node>) {
        let mut child = child.into();
        for axis in Axis::ALL {
            let determined = self.frame.is_fixed(axis) || self.frame.is_stretched(axis);
            let sizing = child.frame_mut().sizing_mut(axis);
            if !determined {
                sizing.stretch = 0;
            } else if axis != self.main_axis() && sizing.stretch > 1 {
                sizing.stretch = 1;
            }
        }
        self.children.push(child);
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }
}

/// A node in the layout tree.
#[derive(Debug, Clone)]
pub enum Node {
    Leaf(Leaf),
    Container(Container),
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}

impl Node {
    pub fn frame(&self) -> &Frame {
        match self {
            Node::Leaf(leaf) => &leaf.frame,
            Node::Container(container) => &container.frame,
        }
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        match self {
            Node::Leaf(leaf) => &mut leaf.frame,
            Node::Container(container) => &mut container.frame,
        }
    }

    /// Computed border box.
    pub fn rect(&self) -> Rect {
        self.frame().rect()
    }

    pub fn content_size(&self) -> Size {
        self.frame().content_size()
    }

    pub fn content_rect(&self) -> Rect {
        self.frame().content_rect()
    }

    pub fn size_mode(&self, axis: Axis) -> SizeMode {
        self.frame().size_mode(axis)
    }

    pub fn name(&self) -> Option<&str> {
        self.frame().name.as_deref()
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Node::Container(container) => Some(container),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Node::Container(container) => Some(container),
            Node::Leaf(_) => None,
        }
    }

    /// Children in insertion order; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container(container) => container.children(),
            Node::Leaf(_) => &[],
        }
    }
}
