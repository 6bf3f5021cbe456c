use std::fmt;

use crate::cells::Cartesian2DCoordinate;
use crate::grid_dimensions::RectGridDimensions;
use crate::units::{ColumnIndex, RowIndex, RowLength, RowsCount};


/// Row major walk over every coordinate of a grid.
#[derive(Clone)]
pub struct RectGridCellIter {
    row_length: RowLength,
    current_cell_number: usize,
    cells_count: usize,
}

impl RectGridCellIter {
    pub fn new(dimensions: &RectGridDimensions) -> RectGridCellIter {
        RectGridCellIter {
            row_length: dimensions.row_length(),
            current_cell_number: 0,
            cells_count: dimensions.size().0,
        }
    }
}

impl fmt::Debug for RectGridCellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for RectGridCellIter {} // default impl using size_hint()
impl Iterator for RectGridCellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Cartesian2DCoordinate::from_row_major_index(self.current_cell_number,
                                                                    self.row_length);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Walks the grid one row at a time, north to south.
#[derive(Debug, Copy, Clone)]
pub struct RectRowIter {
    current_index: usize,
    row_length: RowLength,
    rows_size: RowsCount,
}

impl RectRowIter {
    pub fn new(dimensions: &RectGridDimensions) -> RectRowIter {
        RectRowIter {
            current_index: 0,
            row_length: dimensions.row_length(),
            rows_size: dimensions.rows(),
        }
    }
}

impl ExactSizeIterator for RectRowIter {} // default impl using size_hint()
impl Iterator for RectRowIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let RowsCount(count) = self.rows_size;
        if self.current_index < count {
            let RowLength(length) = self.row_length;
            let coords = (0..length)
                .map(|i: usize| {
                    Cartesian2DCoordinate::from_row_column_indices(ColumnIndex(i),
                                                                   RowIndex(self.current_index))
                })
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.rows_size.0 - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
