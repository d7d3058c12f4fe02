//! Distribution of a container's free main-axis space among stretched children.

use tessera_core::{Axis, LayoutError};

/// Accumulates the non-stretched extents and stretch factors of a container's
/// children, then yields the extent of one stretch unit.
#[derive(Debug, Clone)]
pub struct StretchResolver {
    axis: Axis,
    available: f64,
    total_factor: u64,
    stretched: usize,
}

impl StretchResolver {
    /// Start from a container's content extent, minus the spacing between
    /// `child_count` children.
    pub fn new(axis: Axis, content_extent: f64, spacing: f64, child_count: usize) -> Self {
        let total_spacing = spacing * child_count.saturating_sub(1) as f64;
        Self {
            axis,
            available: content_extent - total_spacing,
            total_factor: 0,
            stretched: 0,
        }
    }

    /// Take a non-stretched child's resolved extent out of the shared space.
    pub fn reserve(&mut self, extent: f64) {
        self.available -= extent;
    }

    pub fn add_stretched(&mut self, factor: u32) {
        self.total_factor += u64::from(factor);
        self.stretched += 1;
    }

    pub fn has_stretched(&self) -> bool {
        self.stretched > 0
    }

    /// Space left for stretched children.
    pub fn available(&self) -> f64 {
        self.available
    }

    /// Extent of one stretch unit.
    pub fn unit_part(&self) -> Result<f64, LayoutError> {
        if self.total_factor == 0 {
            return Err(LayoutError::ZeroStretchFactor {
                axis: self.axis,
                stretched: self.stretched,
            });
        }
        Ok(self.available / self.total_factor as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_part_shares_remaining_space() {
        let mut resolver = StretchResolver::new(Axis::Vertical, 300.0, 10.0, 4);
        resolver.reserve(50.0);
        resolver.reserve(70.0);
        resolver.add_stretched(1);
        resolver.add_stretched(3);

        assert!((resolver.available() - 150.0).abs() < 0.001);
        assert!((resolver.unit_part().unwrap() - 37.5).abs() < 0.001);
    }

    #[test]
    fn test_single_child_has_no_spacing() {
        let mut resolver = StretchResolver::new(Axis::Horizontal, 120.0, 5.0, 1);
        resolver.add_stretched(2);
        assert!((resolver.unit_part().unwrap() - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_total_factor_fails() {
        let mut resolver = StretchResolver::new(Axis::Horizontal, 100.0, 0.0, 1);
        resolver.add_stretched(0);

        assert!(resolver.has_stretched());
        assert_eq!(
            resolver.unit_part(),
            Err(LayoutError::ZeroStretchFactor {
                axis: Axis::Horizontal,
                stretched: 1,
            })
        );
    }
}
