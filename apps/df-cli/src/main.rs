use clap::{Parser, Subcommand, ValueEnum};
use df_analytics::FlowReport;
use df_core::timing::{Timer, enable_timing};
use df_project::{ProjectError, Topology, build_graph, load as load_topology, reference};
use df_solver::{SolveConfig, SolverError, max_flow_with};
use std::path::{Path, PathBuf};
use tracing::info;

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "df-cli")]
#[command(about = "DistFlow CLI - maximum flow through tiered distribution networks", long_about = None)]
struct Cli {
    /// Print solve timings (same as setting DF_TIMING)
    #[arg(long, global = true)]
    timing: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a topology file
    Validate {
        /// Path to the topology file (YAML, or JSON by extension)
        topology_path: PathBuf,
    },
    /// Solve a topology file and print its flow report
    Solve {
        /// Path to the topology file (YAML, or JSON by extension)
        topology_path: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Give up after this many augmenting paths
        #[arg(long)]
        max_augmentations: Option<usize>,
    },
    /// Solve the built-in reference network
    Reference {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.timing {
        enable_timing();
    }

    match cli.command {
        Commands::Validate { topology_path } => cmd_validate(&topology_path),
        Commands::Solve {
            topology_path,
            format,
            max_augmentations,
        } => {
            let topology = load_topology(&topology_path)?;
            cmd_solve(&topology, format, &SolveConfig { max_augmentations })
        }
        Commands::Reference { format } => cmd_solve(
            &reference::distribution_network(),
            format,
            &SolveConfig::default(),
        ),
    }
}

fn cmd_validate(topology_path: &Path) -> CliResult<()> {
    println!("Validating topology: {}", topology_path.display());
    let topology = load_topology(topology_path)?;
    let graph = build_graph(&topology)?;
    println!("✓ Topology is valid");
    println!(
        "  {} - {} nodes, {} edges",
        topology.name,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

fn cmd_solve(topology: &Topology, format: Format, config: &SolveConfig) -> CliResult<()> {
    let mut graph = build_graph(topology)?;

    let timer = Timer::start("max_flow");
    let summary = max_flow_with(&mut graph, topology.source.as_str(), topology.sink.as_str(), config)?;
    timer.stop_and_print();

    info!(
        name = %topology.name,
        value = summary.value,
        augmentations = summary.augmentations,
        "solved"
    );

    let report = FlowReport::build(&graph, summary.value);
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print_report(&topology.name, &report, summary.augmentations),
    }
    Ok(())
}

fn print_report(name: &str, report: &FlowReport, augmentations: usize) {
    println!("✓ Solved: {}", name);
    println!(
        "Maximum flow: {} ({} augmenting paths)",
        report.max_flow_value, augmentations
    );

    println!();
    println!("Warehouse inflow:");
    for inflow in &report.tiered_inflow {
        println!("  {:<16} {:>8}", inflow.node, inflow.total);
    }

    println!();
    if report.allocation_table.is_empty() {
        println!("No allocation rows");
    } else {
        println!("Allocation (proportional estimate):");
        println!(
            "  {:<16} {:<16} {:<16} {:>8}",
            "terminal", "warehouse", "store", "flow"
        );
        for row in &report.allocation_table {
            println!(
                "  {:<16} {:<16} {:<16} {:>8}",
                row.terminal, row.warehouse, row.store, row.attributed_flow
            );
        }
    }

    let extremal = &report.extremal;
    println!();
    match &extremal.busiest_terminal {
        Some(t) => println!("Busiest terminal: {} ({})", t.node, t.total),
        None => println!("Busiest terminal: none"),
    }
    match &extremal.min_capacity_edges {
        Some(min) => {
            println!("Smallest capacity: {}", min.capacity);
            for edge in &min.edges {
                println!("  {} -> {} ({}/{})", edge.from, edge.to, edge.flow, edge.capacity);
            }
        }
        None => println!("Smallest capacity: none"),
    }
    match &extremal.most_starved_stores {
        Some(starved) => println!(
            "Most starved stores ({}): {}",
            starved.allocation,
            starved.stores.join(", ")
        ),
        None => println!("Most starved stores: none"),
    }
    if extremal.saturated_edges.is_empty() {
        println!("Saturated edges: none");
    } else {
        println!("Saturated edges:");
        for edge in &extremal.saturated_edges {
            println!("  {} -> {} ({})", edge.from, edge.to, edge.capacity);
        }
    }
}
