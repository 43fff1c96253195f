#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rapid_pagerank::graph::{CsrGraph, GraphBuilder};
use rapid_pagerank::pagerank::PerplexityPageRank;
use rapid_pagerank::{io, Result};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Batch PageRank over a link file with perplexity-based convergence"
)]
struct Cli {
    /// Link file: one page per line, `<pageId> <inLinkId>...`
    input: PathBuf,

    /// Output file for the per-iteration perplexity trace.
    #[arg(long, default_value = "perplexity.out")]
    perplexity_out: PathBuf,

    /// Output file for final scores, sorted by ascending page id.
    #[arg(long, default_value = "pr_scores.out")]
    scores_out: PathBuf,

    /// How many top-ranked pages to print to stdout.
    #[arg(short = 'k', long, default_value_t = 100)]
    top: usize,

    /// Damping factor.
    #[arg(long, default_value_t = 0.85)]
    damping: f64,

    /// Hard bound on iterations (extension; the reference algorithm stops
    /// only via the perplexity test).
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let records = io::read_link_file(&cli.input)?;
    let graph = CsrGraph::from_builder(&GraphBuilder::from_records(&records));
    info!(
        nodes = graph.num_nodes,
        edges = graph.num_edges(),
        elapsed = ?start.elapsed(),
        "graph loaded"
    );

    let mut engine = PerplexityPageRank::new().with_damping(cli.damping);
    if let Some(cap) = cli.max_iterations {
        engine = engine.with_iteration_cap(cap);
    }

    let rank_start = Instant::now();
    let result = engine.run(&graph);
    info!(
        iterations = result.iterations,
        converged = result.converged,
        elapsed = ?rank_start.elapsed(),
        "ranking complete"
    );

    io::write_perplexity(&cli.perplexity_out, &result.trace)?;
    io::write_scores(&cli.scores_out, &graph, &result)?;

    println!("Top {} pages:", cli.top.min(graph.num_nodes));
    for (id, score) in result.top_pages(&graph, cli.top) {
        println!("{id} {score}");
    }

    info!(elapsed = ?start.elapsed(), "done");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
