//! Read only checks that a carved grid really is a perfect maze.

use bit_set::BitSet;
use petgraph::algo;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;

use crate::cells::{Cartesian2DCoordinate, CellIndex, VisitState};
use crate::grid::Grid;
use crate::units::{EdgesCount, NodesCount};

pub type PassageGraph = Graph<(), (), Undirected, u32>;

/// The indices of every cell reachable from `start` through open passages.
/// Empty if `start` is not on the grid.
pub fn flood_fill(grid: &Grid, start: Cartesian2DCoordinate) -> BitSet {
    let mut reached = BitSet::with_capacity(grid.size());
    let start_index = match grid.coordinate_to_index(start) {
        Some(index) => index,
        None => return reached,
    };
    reached.insert(start_index.0);

    // Every step is one passage from the previous frontier, so a cell already in `reached`
    // never needs looking at again.
    let mut frontier = vec![start];
    while !frontier.is_empty() {

        let mut new_frontier = vec![];
        for cell_coord in &frontier {
            for link_coord in grid.links(*cell_coord).iter() {
                if let Some(CellIndex(link_index)) = grid.coordinate_to_index(*link_coord) {
                    if reached.insert(link_index) {
                        new_frontier.push(*link_coord);
                    }
                }
            }
        }
        frontier = new_frontier;
    }

    reached
}

/// One node per cell, in row major order, and one edge per open passage.
pub fn passage_graph(grid: &Grid) -> PassageGraph {
    let (NodesCount(nodes), EdgesCount(edges)) = grid.dimensions().graph_size();
    let mut graph = PassageGraph::with_capacity(nodes, edges);
    for _ in 0..nodes {
        let _ = graph.add_node(());
    }

    for (a, b) in grid.iter_links() {
        let a_index = grid.coordinate_to_index(a).expect("Links iter should give valid coordinate");
        let b_index = grid.coordinate_to_index(b).expect("Links iter should give valid coordinate");
        let _ = graph.add_edge(NodeIndex::new(a_index.0), NodeIndex::new(b_index.0), ());
    }

    graph
}

/// Does following parent links from every cell end at the root?
///
/// A chain longer than the number of cells must be going round in circles.
pub fn all_cells_reach_root(grid: &Grid) -> bool {
    let max_steps = grid.size();

    (0..grid.size()).map(CellIndex).all(|start| {
        let mut current = start;
        for _ in 0..=max_steps {
            match grid.cell(current).visit_state() {
                VisitState::Root => return true,
                VisitState::Visited { parent } => current = parent,
                VisitState::Unvisited => return false,
            }
        }
        false
    })
}

/// A perfect maze: a spanning tree of the grid. Exactly `size - 1` passages, every cell reachable
/// from the north west corner, no loops, and the walk's parent links all lead back to the start.
pub fn is_perfect(grid: &Grid) -> bool {
    if grid.links_count() != grid.size() - 1 {
        return false;
    }

    if flood_fill(grid, Cartesian2DCoordinate::new(0, 0)).len() != grid.size() {
        return false;
    }

    let graph = passage_graph(grid);
    algo::connected_components(&graph) == 1 && !algo::is_cyclic_undirected(&graph) &&
    all_cells_reach_root(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::CompassPrimary;
    use crate::generators;

    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    fn generated(height: usize, width: usize, seed: u64) -> Grid {
        let mut grid = Grid::from_height_width(height, width).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let _ = generators::recursive_backtracker(&mut grid, &mut rng);
        grid
    }

    #[test]
    fn flood_fill_on_a_walled_grid_reaches_only_the_start() {
        let g = Grid::from_height_width(3, 3).unwrap();
        let reached = flood_fill(&g, gc(1, 1));
        assert_eq!(reached.len(), 1);
        assert!(reached.contains(4));
    }

    #[test]
    fn flood_fill_from_an_invalid_start_is_empty() {
        let g = generated(3, 3, 1);
        assert!(flood_fill(&g, gc(3, 3)).is_empty());
    }

    #[test]
    fn flood_fill_follows_passages() {
        let mut g = Grid::from_height_width(2, 2).unwrap();
        let _ = g.carve_passage(CellIndex(0), CompassPrimary::East);
        let _ = g.carve_passage(CellIndex(1), CompassPrimary::South);
        let reached = flood_fill(&g, gc(0, 0));
        assert_eq!(reached.iter().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn generated_maze_is_fully_connected() {
        let g = generated(17, 23, 8);
        let reached = flood_fill(&g, gc(0, 0));
        assert_eq!(reached.len(), g.size());

        // any start reaches everything in a perfect maze
        assert_eq!(flood_fill(&g, gc(22, 16)).len(), g.size());
    }

    #[test]
    fn passage_graph_matches_links() {
        let g = generated(5, 6, 21);
        let graph = passage_graph(&g);
        assert_eq!(graph.node_count(), 30);
        assert_eq!(graph.edge_count(), 29);
        assert_eq!(algo::connected_components(&graph), 1);
        assert!(!algo::is_cyclic_undirected(&graph));
    }

    #[test]
    fn generated_mazes_are_perfect() {
        for seed in 0..20 {
            assert!(is_perfect(&generated(7, 11, seed)));
        }
        assert!(is_perfect(&generated(1, 1, 0)));
    }

    #[test]
    fn a_loop_is_not_perfect() {
        let mut g = generated(4, 4, 2);
        let interior_wall = (0..16)
            .map(CellIndex)
            .flat_map(|index| vec![(index, CompassPrimary::North), (index, CompassPrimary::East)])
            .find(|&(index, dir)| {
                let coord = g.index_to_coordinate(index);
                g.neighbour_at_direction(coord, dir).is_some() && !g.is_passage_open(coord, dir)
            });
        let (index, dir) = interior_wall.expect("a perfect maze keeps some interior walls");
        g.cell_mut(index).clear_wall(dir);

        assert_eq!(g.links_count(), 16);
        assert!(algo::is_cyclic_undirected(&passage_graph(&g)));
        assert!(!is_perfect(&g));
    }

    #[test]
    fn an_uncarved_grid_is_not_perfect() {
        let g = Grid::from_height_width(2, 3).unwrap();
        assert!(!all_cells_reach_root(&g));
        assert!(!is_perfect(&g));
    }

    #[test]
    fn parent_cycles_never_reach_the_root() {
        let mut g = Grid::from_height_width(1, 2).unwrap();
        g.cell_mut(CellIndex(0)).set_visit_state(VisitState::Visited { parent: CellIndex(1) });
        g.cell_mut(CellIndex(1)).set_visit_state(VisitState::Visited { parent: CellIndex(0) });
        assert!(!all_cells_reach_root(&g));
    }

    #[test]
    fn boundary_has_no_open_passages() {
        let g = generated(12, 9, 77);
        for x in 0..9 {
            assert!(!g.is_passage_open(gc(x, 0), CompassPrimary::North));
            assert!(!g.is_passage_open(gc(x, 11), CompassPrimary::South));
            assert!(g.get(gc(x, 0)).unwrap().has_wall(CompassPrimary::North));
        }
        for y in 0..12 {
            assert!(!g.is_passage_open(gc(0, y), CompassPrimary::West));
            assert!(!g.is_passage_open(gc(8, y), CompassPrimary::East));
            assert!(g.get(gc(8, y)).unwrap().has_wall(CompassPrimary::East));
        }
    }
}
