use criterion::{criterion_group, criterion_main, Criterion};
use dfs_mazes::{connectivity, generators, renderers};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_render_lines_200(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(200);
    let maze_grid = generators::generate_maze(200, 200, &mut rng).unwrap();
    c.bench_function("render_lines_200", move |b| {
        b.iter(|| renderers::render_lines(&maze_grid, renderers::DEFAULT_WALL_CHAR))
    });
}

fn bench_is_perfect_200(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(200);
    let maze_grid = generators::generate_maze(200, 200, &mut rng).unwrap();
    c.bench_function("is_perfect_200", move |b| {
        b.iter(|| connectivity::is_perfect(&maze_grid))
    });
}

criterion_group!(benches, bench_render_lines_200, bench_is_perfect_200);
criterion_main!(benches);
