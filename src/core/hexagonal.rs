//! Hexagonal grid maths for a horizontally aligned layout where odd rows are shifted
//! half a tile to the right.
//!
//! Three coordinate spaces are involved:
//! * offset: the `(row, col)` index into the level array
//! * axial: `x` is the row, `y` is the column with the row shift removed
//! * cubic: axial plus `z = -x - y`, only used to snap fractional points to a hex

use glam::{IVec2, Vec2};

use crate::core::coordinates::{CoordinateSystem, GridDirection, Topology};
use crate::core::GridPos;

const ROOT_THREE: f32 = 1.732_050_8;

/// Cyclic order starting at the upper-right neighbour and going clockwise.
/// The discriminant is the index into `neighbors`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum HexDirection {
    NorthEast,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl GridDirection for HexDirection {
    const ALL: &'static [Self] = &[
        HexDirection::NorthEast,
        HexDirection::East,
        HexDirection::SouthEast,
        HexDirection::SouthWest,
        HexDirection::West,
        HexDirection::NorthWest,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn opposite(self) -> Self {
        match self {
            HexDirection::NorthEast => HexDirection::SouthWest,
            HexDirection::East => HexDirection::West,
            HexDirection::SouthEast => HexDirection::NorthWest,
            HexDirection::SouthWest => HexDirection::NorthEast,
            HexDirection::West => HexDirection::East,
            HexDirection::NorthWest => HexDirection::SouthEast,
        }
    }
}

pub fn offset_to_axial(offset: GridPos) -> IVec2 {
    IVec2::new(offset.i, offset.j - offset.i.div_euclid(2))
}

pub fn axial_to_offset(axial: IVec2) -> GridPos {
    GridPos::new(axial.x, axial.y + axial.x.div_euclid(2))
}

pub fn cubic_z(axial: IVec2) -> i32 {
    -axial.x - axial.y
}

pub fn axial_to_screen(axial: IVec2, side_length: f32) -> Vec2 {
    let axial = axial.as_vec2();
    Vec2::new(
        ROOT_THREE * side_length * (axial.y + axial.x / 2.0),
        1.5 * side_length * axial.x,
    )
}

pub fn screen_to_axial(screen: Vec2, side_length: f32) -> IVec2 {
    let fractional = Vec2::new(
        screen.y / (1.5 * side_length),
        (screen.x - screen.y / ROOT_THREE) / (ROOT_THREE * side_length),
    );
    round_axial(fractional)
}

/// Snaps a fractional axial point to the hex containing it.
///
/// All three cubic components are rounded; when the result leaves `x + y + z != 0`
/// the component with the largest rounding error is rebuilt from the other two.
/// Equal errors resolve in the order x, y, z.
pub fn round_axial(fractional: Vec2) -> IVec2 {
    let (x, y) = (fractional.x, fractional.y);
    let z = -x - y;
    let (round_x, round_y, round_z) = (x.round_ties_even(), y.round_ties_even(), z.round_ties_even());
    if round_x + round_y + round_z == 0.0 {
        return IVec2::new(round_x as i32, round_y as i32);
    }

    let delta_x = (x - round_x).abs();
    let delta_y = (y - round_y).abs();
    let delta_z = (z - round_z).abs();
    if delta_x >= delta_y && delta_x >= delta_z {
        IVec2::new((-round_y - round_z) as i32, round_y as i32)
    } else if delta_y >= delta_z {
        IVec2::new(round_x as i32, (-round_x - round_z) as i32)
    } else {
        IVec2::new(round_x as i32, round_y as i32)
    }
}

pub fn neighbors(axial: IVec2) -> [IVec2; 6] {
    let IVec2 { x, y } = axial;
    [
        IVec2::new(x - 1, y + 1),
        IVec2::new(x, y + 1),
        IVec2::new(x + 1, y),
        IVec2::new(x + 1, y - 1),
        IVec2::new(x, y - 1),
        IVec2::new(x - 1, y),
    ]
}

/// Hexagonal grid centred in a viewport of the given size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexagonalLayout {
    side_length: f32,
    middle_offset: Vec2,
    viewport: Vec2,
}

impl HexagonalLayout {
    /// `tile_size` is the distance between the pointy ends of a hex, twice its side length
    pub fn new(rows: i32, cols: i32, tile_size: f32, viewport: Vec2) -> HexagonalLayout {
        let side_length = tile_size * 0.5;
        let tile_width = side_length * ROOT_THREE;
        let middle_offset = Vec2::new(
            cols as f32 * tile_width + tile_width * 0.5,
            rows as f32 * tile_size * 3.0 / 4.0 + tile_size * 0.75,
        );
        HexagonalLayout {
            side_length,
            middle_offset,
            viewport,
        }
    }

    pub fn side_length(&self) -> f32 {
        self.side_length
    }

    pub fn middle_offset(&self) -> Vec2 {
        self.middle_offset
    }

    fn centring(&self) -> Vec2 {
        self.middle_offset - self.viewport / 2.0
    }

    /// Picks the grid index under a screen point. The result may lie outside the grid.
    pub fn screen_to_index(&self, screen: Vec2) -> GridPos {
        let centring = self.centring();
        let unflipped = Vec2::new(screen.x + centring.x, -(screen.y - centring.y));
        axial_to_offset(screen_to_axial(unflipped, self.side_length))
    }
}

impl CoordinateSystem for HexagonalLayout {
    type Direction = HexDirection;

    fn topology(&self) -> Topology {
        Topology::Hexagonal
    }

    fn index_to_screen(&self, pos: GridPos) -> Vec2 {
        let screen = axial_to_screen(offset_to_axial(pos), self.side_length);
        let centring = self.centring();
        Vec2::new(screen.x - centring.x, -screen.y + centring.y)
    }

    fn next_index_along(&self, pos: GridPos, direction: HexDirection) -> GridPos {
        let neighbour = neighbors(offset_to_axial(pos))[direction.index()];
        axial_to_offset(neighbour)
    }
}
