//! Error types for the Tessera layout engine.

use crate::geometry::Axis;
use thiserror::Error;

/// Errors raised while configuring, resolving, or positioning a layout tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("The specified {axis} {size} is too small. It must be at least the padding and border size ({inset}).")]
    FixedSizeTooSmall { axis: Axis, size: f64, inset: f64 },

    #[error("The specified {axis} {size} is not a finite number.")]
    NonFiniteFixedSize { axis: Axis, size: f64 },

    #[error("The unit part {axis} is invalid: {}", describe_unit_part(.unit_part))]
    InvalidUnitPart { axis: Axis, unit_part: Option<f64> },

    #[error("Cannot distribute {axis} space to {stretched} stretched children with a total stretch factor of zero")]
    ZeroStretchFactor { axis: Axis, stretched: usize },

    #[error("SpaceBetween alignment along {axis} needs at least two children")]
    SpaceBetweenSingleChild { axis: Axis },
}

fn describe_unit_part(unit_part: &Option<f64>) -> String {
    match unit_part {
        Some(value) => format!("{value} is not positive"),
        None => "no enclosing container provided one".to_string(),
    }
}
