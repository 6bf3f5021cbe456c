use std::fmt;

use crate::grid::Grid;
use crate::renderers::{self, DEFAULT_WALL_CHAR};


impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in renderers::render_lines(self, DEFAULT_WALL_CHAR) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;

    #[test]
    fn display_uses_hash_walls() {
        let g = Grid::from_height_width(1, 2).unwrap();
        assert_eq!(format!("{}", g), "#####\n# # #\n#####\n");
    }
}
