//! Performance benchmark comparing serial and parallel generation steps

use std::time::Instant;

use toroidal_life::{Algorithm, SeedStrategy, Universe};

fn benchmark(algorithm: Algorithm, size: u32, iterations: u32) -> anyhow::Result<f64> {
    let seed = SeedStrategy::Random { seed: u64::from(size), density: 0.3 };
    let mut universe = Universe::with_seed(size, size, &seed)?;

    let start = Instant::now();
    for _ in 0..iterations {
        algorithm.step(&mut universe);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [64, 100, 500, 1000, 2000, 5000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 5000x5000 ===\n");

    let cells = 5000.0 * 5000.0;
    for algorithm in Algorithm::all() {
        let ms = benchmark(algorithm, 5000, iterations)?;
        println!(
            "{:<10} {:.2} ms/gen, {:.1}M cells/sec",
            algorithm.name(),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
    Ok(())
}
