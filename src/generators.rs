use log::{debug, trace};
use rand::Rng;

use crate::cells::{CellIndex, CompassPrimary, VisitState};
use crate::errors::*;
use crate::grid::Grid;

/// What a single step of the depth first walk decided to do from the current cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum Step {
    /// Carved a passage into an unvisited neighbour, which becomes the current cell.
    Descend(CellIndex),
    /// Every direction out of the current cell has been tried.
    Exhausted,
}

/// Counters gathered while carving a maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct GenerationStats {
    pub descents: usize,
    pub backtracks: usize,
    /// Random directions drawn that had already been tried from the current cell.
    pub rejected_draws: usize,
    /// Directions tried that led to an already visited neighbour.
    pub dead_ends: usize,
}

/// Apply the recursive backtracker maze generation algorithm to the grid.
///
/// Any previous maze on the grid is discarded first. The walk starts at the north west cell
/// (0, 0), the root of the spanning tree. From the current cell a direction is drawn uniformly
/// from all four compass points; a draw that was already tried from this cell is thrown away and
/// drawn again, otherwise the direction is struck off the cell's free directions whether or not
/// it leads anywhere new. An unvisited neighbour has the wall between the cells knocked down,
/// records where it was entered from and becomes the current cell. When a cell runs out of free
/// directions the walk backtracks to its parent, and it stops once the root is exhausted.
///
/// Every cell is entered exactly once, so the open passages form a spanning tree of the grid: a
/// perfect maze. The result only depends on the values drawn from `rng`.
pub fn recursive_backtracker<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> GenerationStats {
    grid.reset_cells();

    let mut stats = GenerationStats::default();
    let root = CellIndex(0);
    grid.cell_mut(root).set_visit_state(VisitState::Root);

    let mut current = root;
    loop {
        match next_cell(grid, current, rng, &mut stats) {
            Step::Descend(next) => {
                trace!("descend {} -> {}",
                       grid.index_to_coordinate(current),
                       grid.index_to_coordinate(next));
                stats.descents += 1;
                current = next;
            }
            Step::Exhausted => {
                match grid.cell(current).visit_state() {
                    VisitState::Root => break,
                    VisitState::Visited { parent } => {
                        stats.backtracks += 1;
                        current = parent;
                    }
                    VisitState::Unvisited => {
                        panic!("the maze walk reached unvisited cell {}",
                               grid.index_to_coordinate(current))
                    }
                }
            }
        }
    }

    debug!("recursive backtracker carved {}x{} maze (height x width): {:?}",
           grid.rows().0,
           grid.columns().0,
           stats);
    stats
}

/// Build a fresh `height` x `width` grid and carve a maze into it.
pub fn generate_maze<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Result<Grid> {
    let mut grid = Grid::from_height_width(height, width)?;
    let _ = recursive_backtracker(&mut grid, rng);
    Ok(grid)
}

/// Try the free directions of `current` in random order until one enters an unvisited cell.
fn next_cell<R: Rng + ?Sized>(grid: &mut Grid,
                              current: CellIndex,
                              rng: &mut R,
                              stats: &mut GenerationStats)
                              -> Step {

    while !grid.cell(current).free_dirs().is_empty() {

        let dir = CompassPrimary::rand_direction(rng);
        if !grid.cell_mut(current).take_free_dir(dir) {
            stats.rejected_draws += 1;
            continue;
        }

        // Boundary directions were never free, so the neighbour must exist.
        let neighbour = grid.neighbour_index(current, dir)
            .unwrap_or_else(|| {
                panic!("free direction {:?} of {} leaves the grid",
                       dir,
                       grid.index_to_coordinate(current))
            });

        if grid.cell(neighbour).is_visited() {
            stats.dead_ends += 1;
            continue;
        }

        grid.cell_mut(neighbour).set_visit_state(VisitState::Visited { parent: current });
        grid.carve_passage(current, dir);
        return Step::Descend(neighbour);
    }

    Step::Exhausted
}
