//! **dfs_mazes** generates perfect rectangular mazes with a randomized depth first backtracker
//! and renders them as text.

// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

pub mod cells;
pub mod connectivity;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod renderers;
pub mod units;
