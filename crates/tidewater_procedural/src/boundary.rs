//! # Boundary Extraction
//!
//! Marks the cells that sit on either side of a category change. A pair of
//! horizontally or vertically adjacent cells with different values marks
//! BOTH cells, so a boundary is always two cells thick. Diagonal neighbours
//! are ignored and the outer edge of the grid is never a boundary by itself.

use tidewater_shared::GridCoord;

use crate::grid::{Grid, Mask};

/// Returns a mask with `true` wherever a cell differs from a 4-neighbour.
#[must_use]
pub fn transition_mask<T: PartialEq>(grid: &Grid<T>) -> Mask {
    let (width, length) = grid.dimensions();
    let mut mask = Mask::new_with(width, length, false);

    for (coord, value) in grid.iter() {
        let mut neighbours = [None, None];
        if coord.x + 1 < width {
            neighbours[0] = Some(GridCoord::new(coord.x + 1, coord.z));
        }
        if coord.z + 1 < length {
            neighbours[1] = Some(GridCoord::new(coord.x, coord.z + 1));
        }

        for next in neighbours.into_iter().flatten() {
            if grid.get(next).is_some_and(|other| other != value) {
                mask.set(coord, true);
                mask.set(next, true);
            }
        }
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_marking() {
        let input = Mask::from_rows(&[&[0, 0, 1], &[0, 0, 1]]);
        let boundary = transition_mask(&input);

        assert_eq!(boundary, Mask::from_rows(&[&[0, 1, 1], &[0, 1, 1]]));
    }

    #[test]
    fn test_uniform_grid_has_no_boundary() {
        let input = Grid::new_with(6, 4, 3_i32);
        assert!(!transition_mask(&input).any());
    }

    #[test]
    fn test_single_cell_island() {
        let input = Mask::from_fn(5, 5, |c| c == GridCoord::new(2, 2));
        let boundary = transition_mask(&input);

        assert_eq!(boundary.count(), 5, "centre plus its four neighbours");
        assert!(!boundary.is_set(GridCoord::new(1, 1)), "diagonals never mark");
    }

    #[test]
    fn test_vertical_split() {
        let input = Grid::from_fn(4, 3, |c| c.z >= 2);
        let boundary = transition_mask(&input);

        for (coord, marked) in boundary.iter() {
            assert_eq!(*marked, coord.z == 1 || coord.z == 2, "cell {coord}");
        }
    }

    #[test]
    fn test_works_on_non_bool_grids() {
        let input = Grid::from_fn(3, 1, |c| [7_u8, 7, 9][c.x]);
        let boundary = transition_mask(&input);

        assert_eq!(boundary, Mask::from_rows(&[&[0], &[1], &[1]]));
    }
}
