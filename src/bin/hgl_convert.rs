//! CLI for building and checking HairGL hair assets
//!
//! Usage:
//!   hgl_convert convert <input> <hgl_output> <obj_output> [options]
//!   hgl_convert inspect <hgl_file> [options]
//!
//! Examples:
//!   hgl_convert convert hair10.obj hair.hgl hair_guides.obj --guides 50 -n 20
//!   hgl_convert convert hair10.obj hair.hgl hair_guides.obj -n 16 --allow-uneven-step
//!   hgl_convert inspect hair.hgl --json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use hairgl_asset::hair::Bounds;
use hairgl_asset::{convert, read_hgl_file, ByteOrder, ConvertConfig};

#[derive(Parser, Debug)]
#[command(name = "hgl_convert")]
#[command(author, version, about = "Convert hair strand meshes into HairGL assets", long_about = None)]
struct Cli {
    /// Log more (-v debug, -vv per-vertex trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a strand file into a .hgl asset plus an OBJ mirror
    Convert(ConvertArgs),
    /// Print the header and bounds of a .hgl asset
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Exported strand file
    input: PathBuf,

    /// Binary asset to write
    hgl_output: PathBuf,

    /// OBJ mirror to write
    obj_output: PathBuf,

    /// Number of guide strands to keep
    #[arg(short, long)]
    guides: Option<usize>,

    /// Vertices kept per guide strand
    #[arg(short = 'n', long)]
    vertices_per_strand: Option<usize>,

    /// JSON file with conversion settings; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Byte order of the binary asset (native, little, big)
    #[arg(long)]
    byte_order: Option<ByteOrder>,

    /// Allow a vertex count that does not divide the strand length
    #[arg(long)]
    allow_uneven_step: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Asset to read
    input: PathBuf,

    /// Byte order the asset was written with
    #[arg(long, default_value = "native")]
    byte_order: ByteOrder,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectSummary {
    guides_count: usize,
    segments_count: usize,
    triangles_count: usize,
    vertex_count: usize,
    bounds: Option<Bounds>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Convert(args) => run_convert(args),
        Commands::Inspect(args) => run_inspect(args),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &ConvertArgs) -> Result<ConvertConfig> {
    let mut config = match &args.config {
        Some(path) => ConvertConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConvertConfig::default(),
    };
    if let Some(guides) = args.guides {
        config.guides_count = guides;
    }
    if let Some(per_strand) = args.vertices_per_strand {
        config.vertices_per_strand = per_strand;
    }
    if let Some(order) = args.byte_order {
        config.byte_order = order;
    }
    if args.allow_uneven_step {
        config.allow_uneven_step = true;
    }
    Ok(config)
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let config = build_config(&args)?;
    let report = convert(&config, &args.input, &args.hgl_output, &args.obj_output)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Wrote {}", args.hgl_output.display());
        println!("Wrote {}", args.obj_output.display());
        println!("  guides:    {}", report.guides_count);
        println!("  segments:  {}", report.segments_count);
        println!("  triangles: {}", report.triangles_count);
        println!("  vertices:  {} (every {} lines)", report.vertex_count, report.step_size);
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let asset = read_hgl_file(&args.input, args.byte_order)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let summary = InspectSummary {
        guides_count: asset.guides_count(),
        segments_count: asset.segments_count(),
        triangles_count: asset.triangles_count(),
        vertex_count: asset.vertices.len(),
        bounds: asset.bounds(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", args.input.display());
    println!("  guides:    {}", summary.guides_count);
    println!("  segments:  {}", summary.segments_count);
    println!("  triangles: {}", summary.triangles_count);
    println!("  vertices:  {}", summary.vertex_count);
    if let Some(b) = summary.bounds {
        println!(
            "  bounds:    [{}, {}, {}] - [{}, {}, {}]",
            b.min[0], b.min[1], b.min[2], b.max[0], b.max[1], b.max[2]
        );
    }
    Ok(())
}
