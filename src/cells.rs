use std::fmt;

use rand::Rng;
use smallvec::SmallVec;

use crate::units::{ColumnIndex, RowIndex, RowLength};

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_length: RowLength) -> Cartesian2DCoordinate {
        let RowLength(width) = row_length;
        let x = index % width;
        let y = index / width;

        Cartesian2DCoordinate::new(x as u32, y as u32)
    }

    #[inline]
    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> Self {
        let (ColumnIndex(col), RowIndex(row)) = (col_index, row_index);
        Cartesian2DCoordinate::new(col as u32, row as u32)
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    /// All directions, in the order used when drawing a random direction.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];

    #[inline]
    fn bit(self) -> u8 {
        match self {
            CompassPrimary::North => 1,
            CompassPrimary::East => 2,
            CompassPrimary::South => 4,
            CompassPrimary::West => 8,
        }
    }

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    /// Uniformly pick one of the four directions, ignoring whatever may still be unexplored.
    pub fn rand_direction<R: Rng + ?Sized>(rng: &mut R) -> CompassPrimary {
        const DIRS_COUNT: usize = 4;
        let dir_index = rng.gen::<usize>() % DIRS_COUNT;
        CompassPrimary::ALL[dir_index]
    }
}

/// A set of compass directions packed into the low four bits of a byte.
#[derive(Eq, PartialEq, Copy, Clone, Default, Hash)]
pub struct Directions(u8);

impl Directions {
    pub const EMPTY: Directions = Directions(0);
    pub const ALL: Directions = Directions(0b1111);

    pub fn from_slice(dirs: &[CompassPrimary]) -> Directions {
        dirs.iter().fold(Directions::EMPTY, |set, &dir| set.with(dir))
    }

    #[inline]
    pub fn contains(self, dir: CompassPrimary) -> bool {
        self.0 & dir.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, dir: CompassPrimary) {
        self.0 |= dir.bit();
    }

    /// Returns true if the direction was in the set.
    #[inline]
    pub fn remove(&mut self, dir: CompassPrimary) -> bool {
        let present = self.contains(dir);
        self.0 &= !dir.bit();
        present
    }

    #[inline]
    pub fn with(mut self, dir: CompassPrimary) -> Directions {
        self.insert(dir);
        self
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = CompassPrimary> {
        (0..CompassPrimary::ALL.len())
            .map(|i| CompassPrimary::ALL[i])
            .filter(move |&dir| self.contains(dir))
    }
}

impl fmt::Debug for Directions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Stable position of a cell within the grid's row major cell vector.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct CellIndex(pub usize);

/// How the depth first walk has reached a cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum VisitState {
    Unvisited,
    Visited { parent: CellIndex },
    /// The start cell: visited, with no parent to backtrack to.
    Root,
}

#[derive(Clone, Debug)]
pub struct Cell {
    coord: Cartesian2DCoordinate,
    walls: Directions,
    free_dirs: Directions,
    visit: VisitState,
}

impl Cell {
    /// A fresh cell only tracks its northern and eastern walls; the southern and western walls
    /// belong to the neighbours on those sides.
    /// `free_dirs` never contains a direction leaving a `width` x `height` grid.
    pub fn new(coord: Cartesian2DCoordinate, width: usize, height: usize) -> Cell {
        let (x, y) = (coord.x as usize, coord.y as usize);
        let mut free_dirs = Directions::ALL;
        if y == 0 {
            free_dirs.remove(CompassPrimary::North);
        }
        if y + 1 == height {
            free_dirs.remove(CompassPrimary::South);
        }
        if x == 0 {
            free_dirs.remove(CompassPrimary::West);
        }
        if x + 1 == width {
            free_dirs.remove(CompassPrimary::East);
        }

        Cell {
            coord,
            walls: Directions::from_slice(&[CompassPrimary::North, CompassPrimary::East]),
            free_dirs,
            visit: VisitState::Unvisited,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Cartesian2DCoordinate {
        self.coord
    }

    /// The walls owned by this cell. Only ever a subset of North and East.
    #[inline]
    pub fn walls(&self) -> Directions {
        self.walls
    }

    /// Does this cell's own wall state block `dir`?
    /// South and West are never owned by the cell so are always reported as open here.
    #[inline]
    pub fn has_wall(&self, dir: CompassPrimary) -> bool {
        self.walls.contains(dir)
    }

    #[inline]
    pub fn clear_wall(&mut self, dir: CompassPrimary) {
        self.walls.remove(dir);
    }

    #[inline]
    pub fn free_dirs(&self) -> Directions {
        self.free_dirs
    }

    #[inline]
    pub fn take_free_dir(&mut self, dir: CompassPrimary) -> bool {
        self.free_dirs.remove(dir)
    }

    #[inline]
    pub fn visit_state(&self) -> VisitState {
        self.visit
    }

    #[inline]
    pub fn set_visit_state(&mut self, visit: VisitState) {
        self.visit = visit;
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visit != VisitState::Unvisited
    }

    #[inline]
    pub fn parent(&self) -> Option<CellIndex> {
        match self.visit {
            VisitState::Visited { parent } => Some(parent),
            _ => None,
        }
    }
}
