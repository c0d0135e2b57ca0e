//! Camera bounds - the pannable region derived from scene content.

use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundsError {
    /// Bounds over zero nodes have no defined box; computing them anyway
    /// would silently produce an inverted min > max range.
    #[error("cannot compute camera bounds from an empty node set")]
    EmptyNodes,
}

/// Axis-aligned min/max box the camera anchor is clamped to.
///
/// Computed once per scene from node positions and held until the scene
/// reloads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl CameraBounds {
    /// Tightest box enclosing `nodes`, expanded by `margin` on every side.
    ///
    /// Deterministic for a given node set: recomputing with the same input
    /// yields the same box.
    pub fn from_nodes(nodes: &[Vec2], margin: Vec2) -> Result<Self, BoundsError> {
        let (&first, rest) = nodes.split_first().ok_or(BoundsError::EmptyNodes)?;
        let mut min = first;
        let mut max = first;
        for node in rest {
            min = min.min(*node);
            max = max.max(*node);
        }
        Ok(Self {
            min: min - margin,
            max: max + margin,
        })
    }

    /// Clamp a position into the box, per axis.
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        position.clamp(self.min, self.max)
    }

    pub fn contains(&self, position: Vec2) -> bool {
        self.clamp(position) == position
    }
}
