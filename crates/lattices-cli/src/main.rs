//! Command-line interface for the lattice catalogue
//!
//! Builds one of the named lattices over the items `0..size` and prints its
//! size, extremes, validity, algebraic laws and irreducibles.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lattices_core::config::ENV_PREFIX;
use lattices_engine::{catalog, LatticeConfig};
use std::path::{Path, PathBuf};

mod summary;

use summary::Summary;

#[derive(Parser)]
#[command(name = "lattices")]
#[command(about = "Build a named finite lattice and report its structure", long_about = None)]
struct Cli {
    /// Which lattice to build
    #[arg(value_enum)]
    kind: Kind,

    /// Number of items the lattice is built over (ignored by m3 and n5)
    #[arg(default_value = "3")]
    size: u8,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path; overrides the lattice's own label settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    /// Subsets ordered by inclusion
    Powerset,
    /// Partitions ordered by refinement
    Partition,
    /// Antichains of non-empty subsets ordered by containment
    FreeDistributive,
    /// Covering antichains ordered by refinement
    Dependency,
    /// Antichains of partitions
    PartitionAntichain,
    /// The smallest non-distributive lattice
    M3,
    /// The smallest non-modular lattice
    N5,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let labels = load_config(cli.config.as_deref())?;
    let items = 0..cli.size;

    let summary = match cli.kind {
        Kind::Powerset => Summary::of(&catalog::powerset_lattice(items)?, labels.as_ref())?,
        Kind::Partition => Summary::of(&catalog::partition_lattice(items)?, labels.as_ref())?,
        Kind::FreeDistributive => {
            Summary::of(&catalog::free_distributive_lattice(items)?, labels.as_ref())?
        }
        Kind::Dependency => {
            Summary::of(&catalog::dependency_lattice(items, true, false)?, labels.as_ref())?
        }
        Kind::PartitionAntichain => {
            Summary::of(&catalog::partition_antichain_lattice(items)?, labels.as_ref())?
        }
        Kind::M3 => Summary::of(&catalog::m3()?, labels.as_ref())?,
        Kind::N5 => Summary::of(&catalog::n5()?, labels.as_ref())?,
    };

    tracing::info!(kind = ?cli.kind, size = cli.size, nodes = summary.nodes, "Built lattice");
    print!("{summary}");
    Ok(())
}

/// Label settings from the config file and `LATTICES_*` variables, if any
fn load_config(path: Option<&Path>) -> Result<Option<LatticeConfig>> {
    let mut config = match path {
        Some(path) => Some(
            LatticeConfig::load_from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
        ),
        None => None,
    };

    if std::env::vars().any(|(key, _)| key.starts_with(ENV_PREFIX)) {
        let mut merged = config.unwrap_or_default();
        merged
            .merge_with_env()
            .context("applying environment overrides")?;
        config = Some(merged);
    }

    Ok(config)
}
