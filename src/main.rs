#![recursion_limit = "1024"]

use docopt::Docopt;
use error_chain::bail;
use log::{debug, info};
use rand::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use dfs_mazes::{
    connectivity,
    generators,
    renderers,
};
use std::io;

const USAGE: &str = "Maze Driver

Generates a perfect maze with a randomized depth first backtracker and prints it as text.

Usage:
    maze_driver -h | --help
    maze_driver <height> <width> [--wall-char=<c>] [--seed=<n>] [--verify]

Options:
    -h --help           Show this screen.
    --wall-char=<c>     Single character used to draw walls [default: #].
    --seed=<n>          Seed for the random number generator, for reproducible mazes.
    --verify            Check the maze is perfect (a spanning tree) before printing it.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    arg_height: usize,
    arg_width: usize,
    flag_wall_char: String,
    flag_seed: Option<u64>,
    flag_verify: bool,
}

// Library failures are linked in, anything else is a chained message.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::dfs_mazes::errors::Error, ::dfs_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    // --help is reported by docopt as a non fatal error that prints the usage.
    let args: MazeArgs = match Docopt::new(USAGE).and_then(|d| d.deserialize()) {
        Ok(args) => args,
        Err(e) if !e.fatal() => e.exit(),
        Err(e) => return Err(e.into()),
    };

    let wall_char = single_char(&args.flag_wall_char)?;

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    info!("generating {}x{} maze (height x width) with seed {}",
          args.arg_height,
          args.arg_width,
          seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);

    let maze_grid = generators::generate_maze(args.arg_height, args.arg_width, &mut rng)?;

    if args.flag_verify {
        let perfect = connectivity::is_perfect(&maze_grid);
        debug!("maze verification: perfect = {}", perfect);
        if !perfect {
            bail!("Generated maze is not perfect: {:?}", maze_grid);
        }
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    renderers::write_text(&maze_grid, wall_char, &mut handle)?;

    Ok(())
}

fn single_char(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("The wall character must be exactly one character, got {:?}", text),
    }
}
