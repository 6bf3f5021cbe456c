use std::fmt;

use itertools::iproduct;
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, Cell, CellIndex, CompassPrimary, CoordinateSmallVec,
                   Directions};
use crate::errors::*;
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_iterators::{RectGridCellIter, RectRowIter};
use crate::units::{ColumnLength, ColumnsCount, RowLength, RowsCount};


/// Dense row major arena of maze cells. A cell's index is `x + y * width`.
#[derive(Clone)]
pub struct Grid {
    dimensions: RectGridDimensions,
    cells: Vec<Cell>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, row length: {:?}, links: {:?}",
               self.rows(), self.row_length(), self.links_count())
    }
}

impl Grid {
    pub fn new(dimensions: RectGridDimensions) -> Grid {
        let mut grid = Grid {
            dimensions,
            cells: Vec::with_capacity(dimensions.size().0),
        };
        grid.reset_cells();
        grid
    }

    pub fn from_height_width(height: usize, width: usize) -> Result<Grid> {
        Ok(Grid::new(RectGridDimensions::from_height_width(height, width)?))
    }

    /// Throw away all wall and visit state, every cell is walled in and unvisited.
    pub fn reset_cells(&mut self) {
        let RowLength(width) = self.row_length();
        let ColumnLength(height) = self.column_length();

        self.cells.clear();
        self.cells.extend(iproduct!(0..height, 0..width).map(|(y, x)| {
            Cell::new(Cartesian2DCoordinate::new(x as u32, y as u32), width, height)
        }));
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn row_length(&self) -> RowLength {
        self.dimensions.row_length()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn column_length(&self) -> ColumnLength {
        self.dimensions.column_length()
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.row_length().0 && (coord.y as usize) < self.column_length().0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<CellIndex> {
        if self.is_valid_coordinate(coord) {
            Some(CellIndex(coord.y as usize * self.row_length().0 + coord.x as usize))
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_coordinate(&self, index: CellIndex) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::from_row_major_index(index.0, self.row_length())
    }

    /// Panics if the index is not from this grid.
    #[inline]
    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[index.0]
    }

    /// Panics if the index is not from this grid.
    #[inline]
    pub fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        &mut self.cells[index.0]
    }

    pub fn get(&self, coord: Cartesian2DCoordinate) -> Option<&Cell> {
        self.coordinate_to_index(coord).map(|index| self.cell(index))
    }

    /// The cell at `coord`.
    ///
    /// Panics if the coordinate is outside the grid, asking for one is a bug in the caller.
    pub fn cell_at(&mut self, coord: Cartesian2DCoordinate) -> &mut Cell {
        match self.coordinate_to_index(coord) {
            Some(index) => self.cell_mut(index),
            None => {
                panic!("out of bounds cell access at {} on a {}x{} grid",
                       coord,
                       self.row_length().0,
                       self.column_length().0)
            }
        }
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        let (x, y) = (coord.x, coord.y);
        let neighbour_coord = match direction {
            CompassPrimary::North => y.checked_sub(1).map(|y| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::South => y.checked_add(1).map(|y| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::East => x.checked_add(1).map(|x| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::West => x.checked_sub(1).map(|x| Cartesian2DCoordinate::new(x, y)),
        };

        neighbour_coord.filter(|&c| self.is_valid_coordinate(c))
    }

    #[inline]
    pub fn neighbour_index(&self, index: CellIndex, direction: CompassPrimary) -> Option<CellIndex> {
        self.neighbour_at_direction(self.index_to_coordinate(index), direction)
            .and_then(|neighbour_coord| self.coordinate_to_index(neighbour_coord))
    }

    /// Cells that are to the North, East, South or West of a particular cell, but not
    /// necessarily linked by a passage.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
            .collect()
    }

    /// Is there an open passage from `coord` towards `direction`?
    ///
    /// A North or East wall is read from the cell itself, a South or West wall from the
    /// neighbour owning it. Sides on the grid boundary are always closed.
    pub fn is_passage_open(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        let neighbour = match self.neighbour_at_direction(coord, direction) {
            Some(neighbour_coord) => neighbour_coord,
            None => return false,
        };

        match direction {
            CompassPrimary::North | CompassPrimary::East => {
                self.get(coord).map_or(false, |cell| !cell.has_wall(direction))
            }
            CompassPrimary::South | CompassPrimary::West => {
                self.get(neighbour).map_or(false, |cell| !cell.has_wall(direction.opposite()))
            }
        }
    }

    /// All directions with an open passage away from `coord`.
    pub fn open_passages(&self, coord: Cartesian2DCoordinate) -> Directions {
        CompassPrimary::ALL
            .iter()
            .filter(|&&dir| self.is_passage_open(coord, dir))
            .fold(Directions::EMPTY, |open, &dir| open.with(dir))
    }

    /// Cells joined to `coord` by an open passage.
    pub fn links(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        self.open_passages(coord)
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, dir))
            .collect()
    }

    /// Knock down the wall between the cell at `index` and its neighbour towards `direction`,
    /// returning the neighbour.
    ///
    /// Panics if there is no neighbour in that direction.
    pub fn carve_passage(&mut self, index: CellIndex, direction: CompassPrimary) -> CellIndex {
        let neighbour = self.neighbour_index(index, direction)
            .unwrap_or_else(|| {
                panic!("no neighbour {:?} of {} to carve a passage to",
                       direction,
                       self.index_to_coordinate(index))
            });

        match direction {
            CompassPrimary::North | CompassPrimary::East => {
                self.cell_mut(index).clear_wall(direction)
            }
            CompassPrimary::South | CompassPrimary::West => {
                self.cell_mut(neighbour).clear_wall(direction.opposite())
            }
        }

        neighbour
    }

    #[inline]
    pub fn iter(&self) -> RectGridCellIter {
        RectGridCellIter::new(&self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RectRowIter {
        RectRowIter::new(&self.dimensions)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every open passage exactly once, as the pair of cells it joins.
    pub fn iter_links(&self) -> impl Iterator<Item = (Cartesian2DCoordinate, Cartesian2DCoordinate)> + '_ {
        self.cells.iter().flat_map(move |cell| {
            let coord = cell.coordinate();
            let mut owned_links = SmallVec::<[(Cartesian2DCoordinate, Cartesian2DCoordinate); 2]>::new();
            for &dir in &[CompassPrimary::North, CompassPrimary::East] {
                if self.is_passage_open(coord, dir) {
                    if let Some(neighbour) = self.neighbour_at_direction(coord, dir) {
                        owned_links.push((coord, neighbour));
                    }
                }
            }
            owned_links.into_iter()
        })
    }

    #[inline]
    pub fn links_count(&self) -> usize {
        self.iter_links().count()
    }
}
