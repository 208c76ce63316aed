//! Map generator binary: runs one or more random generation passes.
//!
//! Usage: cargo run --release --bin generate_map -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>        JSON map params (default: built-in defaults)
//!   --seed <SEED>          Override the generation seed
//!   --samples <N>          Independent maps for seeds seed..seed+N (default: 1)
//!   --resolution <RES>     Replay every map at this resolution afterwards
//!   --max-idle <N>         Abandon a category after N placements that add nothing
//!   --jobs <N>             Max parallel generators (default: 4)
//!   --write-config <PATH>  Write the effective params as JSON and exit

use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use rayon::prelude::*;

use structmap::config::MapParams;
use structmap::core::Result;
use structmap::generation::MapGenerator;

/// Outcome of one sample, for the final report.
struct SampleResult {
    seed: u64,
    shapes: usize,
    points: usize,
    replayed: Option<usize>,
}

fn main() -> ExitCode {
    structmap::core::logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut params = match parse_arg::<String>(&args, "--config") {
        Some(path) => MapParams::load(path)?,
        None => MapParams::default(),
    };
    if let Some(seed) = parse_arg(&args, "--seed") {
        params.generation.seed = seed;
    }
    if let Some(cap) = parse_arg(&args, "--max-idle") {
        params.generation.max_idle_attempts = Some(cap);
    }
    params.validate()?;

    if let Some(path) = parse_arg::<String>(&args, "--write-config") {
        params.save(&path)?;
        println!("Wrote params to {}", path);
        return Ok(());
    }

    let samples: u64 = parse_arg(&args, "--samples").unwrap_or(1);
    let replay: Option<f64> = parse_arg(&args, "--resolution");
    let jobs: usize = parse_arg(&args, "--jobs").unwrap_or(4);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    println!("=== Structmap Generator ===");
    println!("Map:        {} at origin {}", params.grid.size, params.grid.origin);
    println!("Resolution: {}", params.grid.resolution);
    println!(
        "Seeds:      {}..{}",
        params.generation.seed,
        params.generation.seed.wrapping_add(samples)
    );
    println!();

    let start = Instant::now();
    let results: Vec<SampleResult> = pool.install(|| {
        (0..samples)
            .into_par_iter()
            .map(|i| generate_sample(&params, sample_seed(params.generation.seed, i), replay))
            .collect::<Result<Vec<_>>>()
    })?;

    for result in &results {
        match result.replayed {
            Some(replayed) => println!(
                "seed {:>6}: {:>5} shapes, {:>9} points ({} after replay)",
                result.seed, result.shapes, result.points, replayed
            ),
            None => println!(
                "seed {:>6}: {:>5} shapes, {:>9} points",
                result.seed, result.shapes, result.points
            ),
        }
    }
    println!();
    println!("Generated {} maps in {:.1}s", results.len(), start.elapsed().as_secs_f64());
    Ok(())
}

fn generate_sample(params: &MapParams, seed: u64, replay: Option<f64>) -> Result<SampleResult> {
    let mut generator = MapGenerator::new(params.grid)?;
    generator.regenerate(&params.generation, seed)?;
    let points = generator.points().len();

    let replayed = match replay {
        Some(resolution) => Some(generator.replay_at(resolution)?),
        None => None,
    };

    Ok(SampleResult {
        seed,
        shapes: generator.catalog().len(),
        points,
        replayed,
    })
}

/// Seed of the `index`-th sample; wraps past `u64::MAX`.
fn sample_seed(base: u64, index: u64) -> u64 {
    base.wrapping_add(index)
}

fn parse_arg<T: FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}
