use std::env;
use std::time::{Duration, Instant};
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use shortest_shortest::graph::generators::random_graph;
use shortest_shortest::graph::Graph;
use shortest_shortest::{breadth_first_parents, compute_shortest_shortest_paths, render_path};

/// Number of sources run in the parallel all-sources sweep
const SWEEP_SOURCES: usize = 64;

#[derive(Debug, Serialize)]
struct Summary {
    vertices: usize,
    edges: usize,
    seed: u64,
    reachable: usize,
    stale_pops: usize,
    pushes: usize,
    weighted_ms: f64,
    bfs_ms: f64,
    render_ms: f64,
    rendered_length: usize,
    sweep_sources: usize,
    sweep_ms: f64,
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Positional arguments: vertices, edge factor, seed
    let args: Vec<String> = env::args().collect();
    let vertices: usize = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(100_000);
    let edge_factor: f64 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(4.0);
    let seed: u64 = args.get(3).and_then(|a| a.parse().ok()).unwrap_or(42);

    if vertices == 0 {
        return Err("the graph needs at least one vertex".into());
    }

    println!("=====================================================");
    println!("Benchmark: shortest-shortest paths, BFS, path rendering");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    info!("Generating random graph with {} vertices (seed {})", vertices, seed);
    let graph = random_graph(vertices, edge_factor, 1..=10, seed);
    let source = 0usize;
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let start = Instant::now();
    let result = compute_shortest_shortest_paths(&graph, &source)?;
    let weighted_time = start.elapsed();
    println!(
        "Shortest-shortest paths: {} reachable vertices in {:?}",
        result.reachable_count(),
        weighted_time
    );

    let start = Instant::now();
    let parents = breadth_first_parents(&graph, &source)?;
    let bfs_time = start.elapsed();
    println!("BFS: {} vertices in the parent tree in {:?}", parents.len(), bfs_time);

    let destination = if parents.contains(&(vertices - 1)) { vertices - 1 } else { source };
    let start = Instant::now();
    let rendered = render_path(&parents, &destination)?;
    let render_time = start.elapsed();
    println!(
        "Path to {}: {} vertices before the destination, rendered in {:?}",
        destination,
        rendered.len(),
        render_time
    );

    let sweep_sources = SWEEP_SOURCES.min(vertices);
    let start = Instant::now();
    let reachable_counts = (0..sweep_sources)
        .into_par_iter()
        .map(|s| compute_shortest_shortest_paths(&graph, &s).map(|r| r.reachable_count()))
        .collect::<Result<Vec<_>, _>>()?;
    let sweep_time = start.elapsed();
    let total_reachable: usize = reachable_counts.iter().sum();
    println!(
        "Parallel sweep: {} sources, {:.1} reachable on average, {:?}",
        sweep_sources,
        total_reachable as f64 / sweep_sources as f64,
        sweep_time
    );

    let summary = Summary {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        seed,
        reachable: result.reachable_count(),
        stale_pops: result.stats.stale_pops,
        pushes: result.stats.pushes,
        weighted_ms: millis(weighted_time),
        bfs_ms: millis(bfs_time),
        render_ms: millis(render_time),
        rendered_length: rendered.len(),
        sweep_sources,
        sweep_ms: millis(sweep_time),
    };

    println!("\n=====================================================");
    println!("Summary");
    println!("=====================================================");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
