//! Whole-tree operations: the layout pass, traversal, and hit testing.

use glam::DVec2;
use tessera_core::{LayoutError, Rect};
use tracing::{debug, debug_span};

use crate::node::Node;

impl Node {
    /// Run a full layout pass: resolve widths and heights, then position the
    /// tree with its border box at `origin`.
    ///
    /// On failure every rect in the tree is cleared, so no partial layout is
    /// left behind.
    pub fn layout(&mut self, origin: DVec2) -> Result<(), LayoutError> {
        let span = debug_span!("layout", name = self.name());
        let _enter = span.enter();

        let result = self.layout_inner(origin);
        match &result {
            Ok(()) => debug!(rect = ?self.rect(), "layout complete"),
            Err(err) => {
                debug!(error = %err, "layout failed");
                self.reset_layout();
            }
        }
        result
    }

    fn layout_inner(&mut self, origin: DVec2) -> Result<(), LayoutError> {
        self.resolve_width()?;
        self.resolve_height()?;
        self.set_x(origin.x)?;
        self.set_y(origin.y)?;
        Ok(())
    }

    /// Clear computed rects and content sizes in this subtree.
    pub fn reset_layout(&mut self) {
        self.frame_mut().reset();
        if let Some(container) = self.as_container_mut() {
            for child in container.children_mut() {
                child.reset_layout();
            }
        }
    }

    /// Iterate over this subtree depth-first, parents before children,
    /// yielding each node with its depth below `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Find the deepest node containing `point`, as a path of child indices
    /// from `self`. An empty path means `self` itself was hit.
    pub fn hit_test(&self, point: DVec2) -> Option<Vec<usize>> {
        if !self.rect().contains(point) {
            return None;
        }

        if self.clip_rect().is_some_and(|clip| !clip.contains(point)) {
            return Some(Vec::new());
        }

        // Test children in reverse order (last one is on top)
        for (index, child) in self.children().iter().enumerate().rev() {
            if let Some(mut path) = child.hit_test(point) {
                path.insert(0, index);
                return Some(path);
            }
        }

        Some(Vec::new())
    }

    /// The rect children are clipped to, for clipped containers.
    pub fn clip_rect(&self) -> Option<Rect> {
        self.as_container()
            .filter(|container| container.clipped)
            .map(|container| container.frame.content_rect())
    }

    /// The part of the node at `path` left visible by the clip rects of its
    /// ancestors. `None` if the path is invalid or the node is clipped away.
    pub fn visible_rect(&self, path: &[usize]) -> Option<Rect> {
        let mut node = self;
        let mut visible: Option<Rect> = None;
        for &index in path {
            if let Some(clip) = node.clip_rect() {
                visible = Some(match visible {
                    Some(rect) => rect.intersect(&clip)?,
                    None => clip,
                });
            }
            node = node.children().get(index)?;
        }
        match visible {
            Some(rect) => rect.intersect(&node.rect()),
            None => Some(node.rect()),
        }
    }

    /// Follow a path of child indices, as returned by [`Node::hit_test`].
    pub fn descendant(&self, path: &[usize]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }
}

/// Depth-first iterator over a layout tree.
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
