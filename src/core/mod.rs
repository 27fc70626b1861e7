mod bounded_grid;
mod bounds;
mod coordinates;
pub mod hexagonal;
pub mod isometric;
mod level;
mod model_helpers;
mod models;
mod update;

pub use coordinates::{CoordinateSystem, GridDirection, Topology};
pub use hexagonal::{HexDirection, HexagonalLayout};
pub use isometric::{IsoDirection, IsometricLayout};
pub use level::{LevelGrid, ParseError};
pub use models::{CellKind, EntityId, GameChangeType, GridPos, MoveOutcome, RejectReason};
pub use update::{step, Game};
