use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "puzzle-edge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the four oriented edge curves for one piece size.
    Edges(EdgesArgs),
    /// Print reference tab curves from the catalog.
    Catalog(CatalogArgs),
}

#[derive(Parser, Debug)]
struct EdgesArgs {
    /// Piece width in pixels.
    #[arg(long)]
    width: u32,

    /// Piece height in pixels.
    #[arg(long)]
    height: u32,

    /// Global tab size in percent (0 = half amplitude, 100 = full).
    #[arg(long, default_value_t = 80.0)]
    size: f64,

    /// Seed for tab selection and jitter.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Fit configuration JSON (missing fields use defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Only print this entry.
    #[arg(long)]
    index: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Svg,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Edges(args) => cmd_edges(args),
        Command::Catalog(args) => cmd_catalog(args),
    }
}

fn read_fit_config(path: Option<&PathBuf>) -> anyhow::Result<puzzle_edge::FitConfig> {
    let Some(path) = path else {
        return Ok(puzzle_edge::FitConfig::default());
    };
    Ok(puzzle_edge::FitConfig::load(path)?)
}

fn cmd_edges(args: EdgesArgs) -> anyhow::Result<()> {
    let config = read_fit_config(args.config.as_ref())?;
    let factory = puzzle_edge::CurveFactory::new(config)?;
    let mut rng = puzzle_edge::Rng64::new(args.seed);
    let edges = factory
        .random_edge_curves(
            f64::from(args.width),
            f64::from(args.height),
            puzzle_edge::CATALOG_KNOTS,
            args.size,
            &mut rng,
        )
        .with_context(|| format!("derive edges for {}x{}", args.width, args.height))?;

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&edges)?),
        Format::Svg => {
            for (name, curve) in [
                ("horizontal", &edges.horizontal),
                ("vertical", &edges.vertical),
                ("horizontal_negative", &edges.horizontal_negative),
                ("vertical_negative", &edges.vertical_negative),
            ] {
                println!("{name}: {}", curve.to_svg_path());
            }
        }
    }
    Ok(())
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let indices = match args.index {
        Some(i) if i >= puzzle_edge::CATALOG_LEN => {
            anyhow::bail!(
                "catalog index {i} out of range (0..{})",
                puzzle_edge::CATALOG_LEN
            )
        }
        Some(i) => i..i + 1,
        None => 0..puzzle_edge::CATALOG_LEN,
    };
    let curves: Vec<puzzle_edge::Curve> =
        indices.filter_map(puzzle_edge::catalog_curve).collect();
    println!("{}", serde_json::to_string_pretty(&curves)?);
    Ok(())
}
