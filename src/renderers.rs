use std::io;
use std::io::prelude::*;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid::Grid;

pub const DEFAULT_WALL_CHAR: char = '#';
const PASSAGE_CHAR: char = ' ';

// Text rendering at double resolution: a cell at (x, y) owns the characters at columns 1 + 2x
// (its body, or the gap through its north wall) and 2 + 2x (the gap through its east wall) of
// the two lines drawn for row y. Column 0 is the western boundary.

/// The two text lines drawn for one row of cells.
fn render_row(grid: &Grid, row: &[Cartesian2DCoordinate], wall: char) -> (String, String) {
    let line_length = 2 * row.len() + 1;
    let mut upper = vec![wall; line_length];
    let mut lower = vec![wall; line_length];

    for (x, &coord) in row.iter().enumerate() {
        let cell = grid.get(coord).expect("row iter should give valid coordinate");

        lower[1 + 2 * x] = PASSAGE_CHAR;
        if !cell.has_wall(CompassPrimary::North) {
            upper[1 + 2 * x] = PASSAGE_CHAR;
        }
        if !cell.has_wall(CompassPrimary::East) {
            lower[2 + 2 * x] = PASSAGE_CHAR;
        }
    }

    (upper.into_iter().collect(), lower.into_iter().collect())
}

fn bottom_border(grid: &Grid, wall: char) -> String {
    std::iter::repeat(wall).take(2 * grid.columns().0 + 1).collect()
}

/// Render the maze as `rows + 1` bands: for every row of cells a band holding its two text
/// lines separated by a newline, then the solid southern border.
pub fn render_bands(grid: &Grid, wall: char) -> Vec<String> {
    let mut bands: Vec<String> = grid.iter_row()
        .map(|row| {
            let (upper, lower) = render_row(grid, &row, wall);
            format!("{}\n{}", upper, lower)
        })
        .collect();
    bands.push(bottom_border(grid, wall));
    bands
}

/// Render the maze as `2 * rows + 1` lines, each `2 * columns + 1` characters long.
/// Walls are drawn with `wall`, passages and cell bodies are spaces.
pub fn render_lines(grid: &Grid, wall: char) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 * grid.rows().0 + 1);
    for row in grid.iter_row() {
        let (upper, lower) = render_row(grid, &row, wall);
        lines.push(upper);
        lines.push(lower);
    }
    lines.push(bottom_border(grid, wall));
    lines
}

/// Write the rendered lines, each terminated by a newline.
pub fn write_text<W: Write>(grid: &Grid, wall: char, out: &mut W) -> io::Result<()> {
    for line in render_lines(grid, wall) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::CellIndex;
    use crate::generators;

    use quickcheck::{quickcheck, TestResult};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn generated(height: usize, width: usize, seed: u64) -> Grid {
        let mut grid = Grid::from_height_width(height, width).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let _ = generators::recursive_backtracker(&mut grid, &mut rng);
        grid
    }

    #[test]
    fn single_cell() {
        let g = generated(1, 1, 0);
        assert_eq!(render_lines(&g, '#'), vec!["###", "# #", "###"]);
        assert_eq!(render_bands(&g, '#'), vec!["###\n# #", "###"]);
    }

    #[test]
    fn two_by_two_block() {
        for seed in 0..10 {
            let g = generated(2, 2, seed);
            let lines = render_lines(&g, '#');
            assert_eq!(lines.len(), 5);
            assert!(lines.iter().all(|line| line.chars().count() == 5));
            assert_eq!(lines[0], "#####");
            assert_eq!(lines[4], "#####");

            // Interior wall segments between the four cells: exactly three of the four are open.
            let gaps = [(1, 2), (3, 2), (2, 1), (2, 3)]
                .iter()
                .filter(|&&(line, column)| lines[line].chars().nth(column) == Some(' '))
                .count();
            assert_eq!(gaps, 3);
            let corridor_chars = lines.iter().map(|l| l.matches(' ').count()).sum::<usize>();
            assert_eq!(corridor_chars, 4 + 3);
        }
    }

    #[test]
    fn hand_carved_layout() {
        // A 2x3 maze:
        //  (0,0) - (1,0) - (2,0)
        //                    |
        //  (0,1) - (1,1) - (2,1)
        let mut g = Grid::from_height_width(2, 3).unwrap();
        let _ = g.carve_passage(CellIndex(0), CompassPrimary::East);
        let _ = g.carve_passage(CellIndex(1), CompassPrimary::East);
        let _ = g.carve_passage(CellIndex(2), CompassPrimary::South);
        let _ = g.carve_passage(CellIndex(5), CompassPrimary::West);
        let _ = g.carve_passage(CellIndex(4), CompassPrimary::West);

        assert_eq!(render_lines(&g, '#'),
                   vec!["#######",
                        "#     #",
                        "##### #",
                        "#     #",
                        "#######"]);
    }

    #[test]
    fn wall_character_is_configurable() {
        let g = generated(3, 4, 6);
        let lines = render_lines(&g, '█');
        assert!(lines.iter().all(|line| line.chars().all(|c| c == '█' || c == ' ')));
        assert_eq!(lines[0].chars().count(), 9);
        assert!(!lines.iter().any(|line| line.contains('#')));
    }

    #[test]
    fn bands_flatten_to_lines() {
        let g = generated(6, 5, 12);
        let bands = render_bands(&g, '#');
        assert_eq!(bands.len(), 7);
        let flattened: Vec<String> = bands.iter()
            .flat_map(|band| band.split('\n').map(String::from))
            .collect();
        assert_eq!(flattened, render_lines(&g, '#'));
    }

    #[test]
    fn rendering_does_not_touch_the_grid() {
        let g = generated(4, 4, 1);
        let before: Vec<_> = g.cells().iter().map(|c| (c.walls(), c.visit_state())).collect();
        let _ = render_lines(&g, '#');
        let after: Vec<_> = g.cells().iter().map(|c| (c.walls(), c.visit_state())).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn written_text_is_newline_terminated() {
        let g = generated(2, 3, 4);
        let mut out = Vec::new();
        write_text(&g, '#', &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().collect::<Vec<_>>(), render_lines(&g, '#'));
    }

    #[test]
    fn quickcheck_render_dimensions() {
        fn prop(height: u8, width: u8, seed: u64) -> TestResult {
            let (h, w) = (height as usize % 16, width as usize % 16);
            if h == 0 || w == 0 {
                return TestResult::discard();
            }
            let g = generated(h, w, seed);
            let lines = render_lines(&g, '#');
            TestResult::from_bool(render_bands(&g, '#').len() == h + 1 &&
                                  lines.len() == 2 * h + 1 &&
                                  lines.iter().all(|line| line.len() == 2 * w + 1))
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }
}
