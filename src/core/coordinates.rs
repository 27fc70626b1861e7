use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::GridPos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    #[default]
    Isometric,
    Hexagonal,
}

/// A closed set of directions a hero can be ordered to move in, indexable from 0
pub trait GridDirection: Copy + Eq + std::fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn index(self) -> usize;

    fn opposite(self) -> Self;

    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Maps grid indices onto the screen, and walks from one index to its neighbour.
pub trait CoordinateSystem {
    type Direction: GridDirection;

    fn topology(&self) -> Topology;

    fn index_to_screen(&self, pos: GridPos) -> Vec2;

    /// The neighbouring index along `direction`. May fall outside the grid.
    fn next_index_along(&self, pos: GridPos, direction: Self::Direction) -> GridPos;
}
