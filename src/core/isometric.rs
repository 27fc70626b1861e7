use glam::Vec2;

use crate::core::coordinates::{CoordinateSystem, GridDirection, Topology};
use crate::core::GridPos;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IsoDirection {
    Up,
    Right,
    Down,
    Left,
}

impl GridDirection for IsoDirection {
    const ALL: &'static [Self] = &[
        IsoDirection::Up,
        IsoDirection::Right,
        IsoDirection::Down,
        IsoDirection::Left,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn opposite(self) -> Self {
        match self {
            IsoDirection::Up => IsoDirection::Down,
            IsoDirection::Right => IsoDirection::Left,
            IsoDirection::Down => IsoDirection::Up,
            IsoDirection::Left => IsoDirection::Right,
        }
    }
}

fn vec_from_dir(dir: IsoDirection) -> GridPos {
    match dir {
        IsoDirection::Up => GridPos { i: -1, j: 0 },
        IsoDirection::Right => GridPos { i: 0, j: 1 },
        IsoDirection::Down => GridPos { i: 1, j: 0 },
        IsoDirection::Left => GridPos { i: 0, j: -1 },
    }
}

pub fn cartesian_to_isometric(cartesian: Vec2) -> Vec2 {
    Vec2::new(cartesian.x - cartesian.y, (cartesian.x + cartesian.y) / 2.0)
}

pub fn isometric_to_cartesian(isometric: Vec2) -> Vec2 {
    Vec2::new(
        (2.0 * isometric.y + isometric.x) / 2.0,
        (2.0 * isometric.y - isometric.x) / 2.0,
    )
}

/// Rectangular grid drawn in isometric projection, centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsometricLayout {
    tile_size: f32,
    middle_offset: Vec2,
}

impl IsometricLayout {
    pub fn new(rows: i32, cols: i32, tile_size: f32) -> IsometricLayout {
        let middle_offset = Vec2::new(
            cols as f32 * tile_size * 0.0625 + tile_size * 0.125,
            rows as f32 * tile_size * 0.25 + tile_size * 0.25,
        );
        IsometricLayout {
            tile_size,
            middle_offset,
        }
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn middle_offset(&self) -> Vec2 {
        self.middle_offset
    }
}

impl CoordinateSystem for IsometricLayout {
    type Direction = IsoDirection;

    fn topology(&self) -> Topology {
        Topology::Isometric
    }

    fn index_to_screen(&self, pos: GridPos) -> Vec2 {
        // columns run along x, rows along y
        let cartesian = Vec2::new(
            pos.j as f32 * self.tile_size / 2.0,
            pos.i as f32 * self.tile_size / 2.0,
        );
        let isometric = cartesian_to_isometric(cartesian);
        Vec2::new(
            isometric.x - self.middle_offset.x,
            -isometric.y + self.middle_offset.y,
        )
    }

    fn next_index_along(&self, pos: GridPos, direction: IsoDirection) -> GridPos {
        pos + vec_from_dir(direction)
    }
}
