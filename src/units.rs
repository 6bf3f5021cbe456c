#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

/// Number of cells along a row, i.e. the maze width.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowLength(pub usize);
/// Number of cells down a column, i.e. the maze height.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnLength(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);
