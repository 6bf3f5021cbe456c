use error_chain::bail;

use crate::errors::*;
use crate::units::{ColumnLength, ColumnsCount, EdgesCount, NodesCount, RowLength, RowsCount};


/// Validated `width` x `height` extent of a rectangular grid. Both sides are at least 1, fit in a
/// `u32`, and their product fits in a `usize`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectGridDimensions {
    row_width: RowLength,
    column_height: ColumnLength,
}

impl RectGridDimensions {
    pub fn new(row_width: RowLength, column_height: ColumnLength) -> Result<RectGridDimensions> {
        let (RowLength(width), ColumnLength(height)) = (row_width, column_height);
        if width == 0 || height == 0 {
            bail!(ErrorKind::InvalidDimensions(height, width));
        }
        // Coordinates are u32 and the cell count has to be addressable.
        let max_side = u32::MAX as usize;
        if width > max_side || height > max_side || width.checked_mul(height).is_none() {
            bail!(ErrorKind::DimensionsTooLarge(height, width));
        }

        Ok(RectGridDimensions {
            row_width,
            column_height,
        })
    }

    /// Dimensions in the `height`, `width` argument order used by the maze driver.
    pub fn from_height_width(height: usize, width: usize) -> Result<RectGridDimensions> {
        RectGridDimensions::new(RowLength(width), ColumnLength(height))
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.row_width.0 * self.column_height.0)
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.column_height.0)
    }

    #[inline(always)]
    pub fn row_length(&self) -> RowLength {
        self.row_width
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.row_width.0)
    }

    #[inline(always)]
    pub fn column_length(&self) -> ColumnLength {
        self.column_height
    }

    /// Node and edge capacity for a graph of every adjacency in the grid.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (width, height) = (self.row_width.0, self.column_height.0);
        let edges_count = ((width - 1) * height).saturating_add(width * (height - 1));
        (self.size(), EdgesCount(edges_count))
    }
}
