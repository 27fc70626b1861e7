use crate::core::GridPos;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub rows: i32,
    pub cols: i32,
}

impl BoundsOriginRoot {
    pub fn new(rows: i32, cols: i32) -> BoundsOriginRoot {
        BoundsOriginRoot { rows, cols }
    }

    pub fn contains(&self, pos: &GridPos) -> bool {
        pos.i >= 0 && pos.i < self.rows && pos.j >= 0 && pos.j < self.cols
    }

    pub fn area(&self) -> i32 {
        self.rows * self.cols
    }
}
