use serde::{Deserialize, Serialize};

/// What occupies a single grid cell. Hero and ball presence are folded into the
/// destination-ness of the cell, so a cell is always exactly one of these.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Invalid,
    Ground,
    Destination,
    Hero,
    Ball,
    HeroOnDestination,
    BallOnDestination,
}

/// Offset coordinate into the level grid. `i` is the row, `j` the column.
/// Signed so that off-grid neighbours can be represented and bounds checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub i: i32,
    pub j: i32,
}

impl GridPos {
    pub const fn new(i: i32, j: i32) -> GridPos {
        GridPos { i, j }
    }
}

impl std::ops::Add for GridPos {
    type Output = GridPos;

    fn add(self, rhs: Self) -> Self::Output {
        GridPos {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityId {
    Hero,
    /// Balls are numbered in row-major order of their position in the level text
    Ball(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Moved(GameChangeType),
    Rejected(RejectReason),
    /// The level is already solved, no further moves are accepted
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    HeroMove,
    HeroAndBallMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    OutOfBounds,
    Blocked,
    PushOutOfBounds,
    PushBlocked,
    UnknownDirection,
    MissingEntity,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            RejectReason::OutOfBounds => "Cannot move out of bounds",
            RejectReason::Blocked => "Cannot walk into a hole",
            RejectReason::PushOutOfBounds => "Cannot push ball out of bounds",
            RejectReason::PushBlocked => "Cannot push ball",
            RejectReason::UnknownDirection => "Unknown direction",
            RejectReason::MissingEntity => "Cell is occupied but no entity is tracked there",
        };
        f.write_str(message)
    }
}
