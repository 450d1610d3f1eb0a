use std::hint::black_box;
use std::time::Instant;

use lifegrid_common::Pos;
use lifegrid_kernel::World;

fn make_world(count: usize, width: u32, height: u32) -> World {
    let mut world = World::with_seed(7);
    world
        .randomize(count, width, height)
        .expect("bench rectangle holds the requested cells");
    world
}

fn bench_update(count: usize, side: u32, iterations: usize) {
    let mut world = make_world(count, side, side);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(world.update());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  update ({count} cells in {side}x{side}, {iterations} gens): {per_iter:?}/gen, total {elapsed:?}, live now {}",
        world.count()
    );
}

/// Same number of live cells, spread over ever larger distances. Per-step
/// cost should stay flat because empty space is never visited.
fn bench_sparse_spread(spacing: i64, iterations: usize) {
    let mut world = World::new();
    for i in 0..100 {
        let base = Pos::new(i * spacing, -i * spacing);
        // blinkers keep the population constant between generations
        for dx in -1..=1 {
            world.set_cell(Pos::new(base.x + dx, base.y));
        }
    }

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(world.update());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  100 blinkers, spacing {spacing} ({iterations} gens): {per_iter:?}/gen");
}

fn bench_candidates(count: usize, side: u32, iterations: usize) {
    let world = make_world(count, side, side);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(black_box(&world).candidates());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  candidates ({count} cells, {iterations} iters): {per_iter:?}/iter");
}

fn main() {
    println!("=== World Update Benchmarks ===\n");

    println!("Dense random soup:");
    bench_update(300, 30, 1000);
    bench_update(3_000, 100, 100);
    bench_update(30_000, 300, 10);

    println!("\nSparse spread:");
    bench_sparse_spread(10, 1000);
    bench_sparse_spread(10_000, 1000);
    bench_sparse_spread(10_000_000_000, 1000);

    println!("\nCandidate set:");
    bench_candidates(1_000, 60, 1000);
    bench_candidates(10_000, 200, 100);

    println!("\n=== Done ===");
}
