use clap::{Parser, ValueEnum};
use junction::network::Edge;
use junction::output::write_jsonl;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;

/// A CLI tool to generate synthetic edge networks for the junction simplifier
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON Lines file to
    #[arg(short, long, default_value = "generated_network.jsonl")]
    output: String,

    /// The shape of network to generate
    #[arg(short, long, value_enum, default_value_t = Shape::Grid)]
    shape: Shape,

    /// Number of nodes along a chain, ring or star arm, or grid side length
    #[arg(long, default_value_t = 10)]
    size: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that an edge is written in both directions
    #[arg(long, default_value_t = 0.5)]
    bidirectional: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shape {
    Chain,
    Ring,
    Star,
    Grid,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.size < 2 {
        eprintln!("Error: --size ({}) must be at least 2", cli.size);
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.bidirectional) {
        eprintln!(
            "Error: --bidirectional ({}) must be between 0 and 1",
            cli.bidirectional
        );
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating {:?} network (size {}, bidirectional ratio {})...",
        cli.shape, cli.size, cli.bidirectional
    );

    let pairs = match cli.shape {
        Shape::Chain => chain_pairs(cli.size),
        Shape::Ring => ring_pairs(cli.size),
        Shape::Star => star_pairs(cli.size),
        Shape::Grid => grid_pairs(cli.size),
    };
    let edges = build_edges(&mut rng, pairs, cli.bidirectional);

    let written = write_jsonl(File::create(&cli.output)?, &edges)?;
    println!(
        "Successfully generated and saved {} edges to '{}'",
        written, cli.output
    );

    Ok(())
}

/// Turns node pairs into edges with random lengths, a way id per run of
/// pairs, and a random orientation or a reverse companion edge.
fn build_edges(rng: &mut StdRng, pairs: Vec<(String, String)>, bidirectional: f64) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(pairs.len() * 2);
    let mut way = 0;
    for (i, (a, b)) in pairs.into_iter().enumerate() {
        // Start a new named way every few edges.
        if i > 0 && rng.random_bool(0.2) {
            way += 1;
        }
        let way_id = format!("way-{:03}", way);
        let length = (rng.random_range(1.0..250.0_f64) * 10.0).round() / 10.0;

        let (source, target) = if rng.random_bool(0.5) {
            (a, b)
        } else {
            (b, a)
        };
        if rng.random_bool(bidirectional) {
            let id = edges.len() as i64;
            edges.push(Edge::new(
                id + 1,
                target.clone(),
                source.clone(),
                length,
                way_id.clone(),
            ));
        }
        let id = edges.len() as i64;
        edges.push(Edge::new(id + 1, source, target, length, way_id));
    }
    edges
}

fn node(name: impl std::fmt::Display) -> String {
    format!("N{}", name)
}

fn chain_pairs(size: usize) -> Vec<(String, String)> {
    (0..size - 1).map(|i| (node(i), node(i + 1))).collect()
}

fn ring_pairs(size: usize) -> Vec<(String, String)> {
    (0..size).map(|i| (node(i), node((i + 1) % size))).collect()
}

/// Three arms of `size` nodes meeting at a central hub.
fn star_pairs(size: usize) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for arm in 0..3 {
        let mut previous = "HUB".to_string();
        for i in 0..size {
            let current = node(format!("{}-{}", arm, i));
            pairs.push((previous, current.clone()));
            previous = current;
        }
    }
    pairs
}

fn grid_pairs(size: usize) -> Vec<(String, String)> {
    let cell = |x: usize, y: usize| node(format!("{}x{}", x, y));
    let mut pairs = Vec::new();
    for y in 0..size {
        for x in 0..size {
            if x + 1 < size {
                pairs.push((cell(x, y), cell(x + 1, y)));
            }
            if y + 1 < size {
                pairs.push((cell(x, y), cell(x, y + 1)));
            }
        }
    }
    pairs
}
