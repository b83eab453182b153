//! # Placement Grids
//!
//! A [`Grid`] is a dense width x length array indexed by [`GridCoord`].
//! All grids of one generation run share the terrain's dimensions; combining
//! two grids of different sizes is a programming error and panics.
//!
//! Boolean grids are the working type of the engine: `true` means the cell
//! belongs to the category (land, free, boundary, ...), `false` means it does
//! not.

use tidewater_shared::GridCoord;

/// Dense 2D grid, stored x-major (`x * length + z`).
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    length: usize,
    cells: Vec<T>,
}

/// A boolean classification or occupancy grid.
pub type Mask = Grid<bool>;

impl<T: Clone> Grid<T> {
    /// Creates a grid filled with `value`.
    #[must_use]
    pub fn new_with(width: usize, length: usize, value: T) -> Self {
        Self {
            width,
            length,
            cells: vec![value; width * length],
        }
    }

    /// Fills every cell within `radius` of `center` with `value`.
    ///
    /// Membership uses squared distance, so no square roots are taken. The
    /// bounding square is clipped to the grid; `center` itself may lie
    /// outside. A radius of 0 touches only the centre cell. Radii beyond
    /// `width + length` cover the same cells and are clamped to it.
    pub fn fill_disk(&mut self, center: GridCoord, radius: usize, value: T) {
        let radius = radius.min(self.width + self.length);
        let x_min = center.x.saturating_sub(radius);
        let x_max = center.x.saturating_add(radius).saturating_add(1).min(self.width);
        let z_min = center.z.saturating_sub(radius);
        let z_max = center.z.saturating_add(radius).saturating_add(1).min(self.length);

        let radius_sq = radius * radius;
        for x in x_min..x_max {
            let dx = x.abs_diff(center.x);
            let dx_sq = dx * dx;
            for z in z_min..z_max {
                let dz = z.abs_diff(center.z);
                if dx_sq + dz * dz <= radius_sq {
                    let idx = self.index(x, z);
                    self.cells[idx] = value.clone();
                }
            }
        }
    }
}

impl<T> Grid<T> {
    /// Creates a grid by evaluating `f` for every cell.
    #[must_use]
    pub fn from_fn<F>(width: usize, length: usize, mut f: F) -> Self
    where
        F: FnMut(GridCoord) -> T,
    {
        let mut cells = Vec::with_capacity(width * length);
        for x in 0..width {
            for z in 0..length {
                cells.push(f(GridCoord::new(x, z)));
            }
        }
        Self { width, length, cells }
    }

    /// Grid width (x extent).
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid length (z extent).
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// `(width, length)`.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.length)
    }

    /// Returns whether `coord` lies inside the grid.
    #[inline]
    #[must_use]
    pub const fn contains(&self, coord: GridCoord) -> bool {
        coord.within(self.width, self.length)
    }

    /// Cell value; `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, coord: GridCoord) -> Option<&T> {
        if self.contains(coord) {
            Some(&self.cells[self.index(coord.x, coord.z)])
        } else {
            None
        }
    }

    /// Sets a cell. Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, coord: GridCoord, value: T) {
        if self.contains(coord) {
            let idx = self.index(coord.x, coord.z);
            self.cells[idx] = value;
        }
    }

    /// Iterates `(coord, value)` in x-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &T)> + '_ {
        let length = self.length;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (GridCoord::new(i / length, i % length), v))
    }

    /// Combines two same-sized grids cell by cell.
    ///
    /// # Panics
    ///
    /// If the dimensions differ.
    #[must_use]
    pub fn zip_with<U, V, F>(&self, other: &Grid<U>, mut f: F) -> Grid<V>
    where
        F: FnMut(&T, &U) -> V,
    {
        self.assert_same_dimensions(other);
        Grid {
            width: self.width,
            length: self.length,
            cells: self
                .cells
                .iter()
                .zip(&other.cells)
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }

    /// Applies `f` to every cell.
    #[must_use]
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            width: self.width,
            length: self.length,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Fails fast when two grids of one run disagree on size.
    ///
    /// # Panics
    ///
    /// If the dimensions differ.
    pub fn assert_same_dimensions<U>(&self, other: &Grid<U>) {
        assert_eq!(
            self.dimensions(),
            other.dimensions(),
            "grid dimension mismatch: {:?} vs {:?}",
            self.dimensions(),
            other.dimensions()
        );
    }

    #[inline]
    const fn index(&self, x: usize, z: usize) -> usize {
        x * self.length + z
    }
}

impl Mask {
    /// Cell-wise AND.
    ///
    /// # Panics
    ///
    /// If the dimensions differ.
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| *a && *b)
    }

    /// Cell-wise NOT.
    #[must_use]
    pub fn not(&self) -> Self {
        self.map(|v| !*v)
    }

    /// Returns whether any cell is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.cells.iter().any(|v| *v)
    }

    /// Number of set cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|v| **v).count()
    }

    /// Returns whether `coord` is inside the grid and set.
    #[inline]
    #[must_use]
    pub fn is_set(&self, coord: GridCoord) -> bool {
        self.get(coord).copied().unwrap_or(false)
    }

    /// Set cells in x-major order.
    pub fn set_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.iter().filter(|(_, v)| **v).map(|(c, _)| c)
    }

    /// Builds a mask from rows written as `rows[x][z]`; handy in tests.
    ///
    /// # Panics
    ///
    /// If the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let width = rows.len();
        let length = rows.first().map_or(0, |r| r.len());
        assert!(rows.iter().all(|r| r.len() == length), "ragged rows");
        Self::from_fn(width, length, |c| rows[c.x][c.z] != 0)
    }
}

/// Normalises a keep-clear radius for carving: nearest integer, at least 1.
///
/// Non-finite or non-positive inputs also yield 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clearance_radius(radius: f64) -> usize {
    if !radius.is_finite() {
        return 1;
    }
    let rounded = radius.round();
    if rounded < 1.0 {
        1
    } else {
        rounded as usize
    }
}
