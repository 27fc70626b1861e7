use crate::core::bounds::BoundsOriginRoot;
use crate::core::GridPos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    /// Builds a grid from cells laid out row-major. Returns `None` if the cell count
    /// does not match the bounds.
    pub fn from_cells(bounds: BoundsOriginRoot, cells: Vec<T>) -> Option<Self> {
        if cells.len() != bounds.area() as usize {
            return None;
        }
        Some(BoundedGrid { bounds, cells })
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &GridPos) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &GridPos) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Every cell with its position, row by row
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &T)> {
        let cols = self.bounds.cols;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let index = index as i32;
            (GridPos::new(index / cols, index % cols), cell)
        })
    }

    fn index_of(&self, pos: &GridPos) -> usize {
        (pos.i * self.bounds.cols + pos.j) as usize
    }
}

impl<T> std::ops::Index<&GridPos> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &GridPos) -> &Self::Output {
        &self.cells[self.index_of(index)]
    }
}

impl<T> std::ops::IndexMut<&GridPos> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &GridPos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_outside_bounds_is_none() {
        let grid = BoundedGrid::from_cells(BoundsOriginRoot::new(2, 3), vec![0u8; 6]).unwrap();

        assert_eq!(grid.get(&GridPos::new(0, 0)), Some(&0));
        assert_eq!(grid.get(&GridPos::new(1, 2)), Some(&0));
        assert_eq!(grid.get(&GridPos::new(2, 0)), None);
        assert_eq!(grid.get(&GridPos::new(0, 3)), None);
        assert_eq!(grid.get(&GridPos::new(-1, 0)), None);
        assert_eq!(grid.get(&GridPos::new(0, -1)), None);
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = BoundedGrid::from_cells(BoundsOriginRoot::new(2, 2), vec![1, 2, 3, 4]).unwrap();
        let positions: Vec<(GridPos, i32)> = grid.iter().map(|(pos, &v)| (pos, v)).collect();

        assert_eq!(positions, vec![
            (GridPos::new(0, 0), 1),
            (GridPos::new(0, 1), 2),
            (GridPos::new(1, 0), 3),
            (GridPos::new(1, 1), 4),
        ]);
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert!(BoundedGrid::from_cells(BoundsOriginRoot::new(2, 2), vec![1, 2, 3]).is_none());
    }
}
