//! dstv2peddimat CLI
//!
//! Converts DSTV/NC1 part files into Peddimat records and inspects decoded parts.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use encoding_rs::Encoding;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dstv_peddimat::convert::{convert_files, find_nc1_files};
use dstv_peddimat::{encode, DstvReader, DstvReaderConfiguration, Surface, ToolRegistry};

/// Convert DSTV/NC1 steel part files into Peddimat drilling records
#[derive(Parser)]
#[command(name = "dstv2peddimat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert NC1 files (or directories of them) into Peddimat files
    Convert(ConvertArgs),

    /// Show the decoded header, holes and tool registry of an NC1 file
    Inspect(ReadArgs),

    /// Print the Peddimat record of an NC1 file to stdout
    Print(ReadArgs),
}

#[derive(Args)]
struct ReaderArgs {
    /// Skip malformed hole lines instead of failing the file
    #[arg(long)]
    failsafe: bool,

    /// Encoding label used when a file is not UTF-8 (e.g. windows-1252)
    #[arg(long)]
    encoding: Option<String>,
}

impl ReaderArgs {
    fn configuration(&self) -> Result<DstvReaderConfiguration> {
        let fallback_encoding = match &self.encoding {
            Some(label) => match Encoding::for_label(label.as_bytes()) {
                Some(enc) => Some(enc),
                None => bail!("Unknown encoding: {}", label),
            },
            None => None,
        };
        Ok(DstvReaderConfiguration {
            failsafe: self.failsafe,
            fallback_encoding,
        })
    }
}

#[derive(Args)]
struct ConvertArgs {
    /// NC1 files or directories containing them
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    reader: ReaderArgs,
}

#[derive(Args)]
struct ReadArgs {
    /// Path to the NC1 file
    path: PathBuf,

    #[command(flatten)]
    reader: ReaderArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert(args) => cmd_convert(args),
        Commands::Inspect(args) => cmd_inspect(args),
        Commands::Print(args) => cmd_print(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = find_nc1_files(input)
                .with_context(|| format!("Failed to list {}", input.display()))?;
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

fn cmd_convert(args: ConvertArgs) -> Result<()> {
    let config = args.reader.configuration()?;
    let files = collect_inputs(&args.inputs)?;
    if files.is_empty() {
        bail!("No NC1 files found");
    }

    info!(files = files.len(), output = %args.output.display(), "converting");
    let outcomes = convert_files(&files, &args.output, &config)
        .with_context(|| format!("Failed to prepare {}", args.output.display()))?;

    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(path) => println!("{} -> {}", outcome.source.display(), path.display()),
            Err(err) => {
                failed += 1;
                error!(source = %outcome.source.display(), "{}", err);
                eprintln!("{}: {}", outcome.source.display(), err);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed", failed, outcomes.len());
    }
    Ok(())
}

fn read_part(path: &Path, reader: &ReaderArgs) -> Result<dstv_peddimat::SteelPart> {
    let config = reader.configuration()?;
    DstvReader::from_file(path)
        .and_then(|r| r.with_configuration(config).read())
        .with_context(|| format!("Failed to decode {}", path.display()))
}

fn cmd_inspect(args: ReadArgs) -> Result<()> {
    let part = read_part(&args.path, &args.reader)?;

    println!("Partmark:         {}", part.partmark());
    println!("Profile:          {} ({})", part.profile(), part.profile_type());
    println!("Quantity:         {}", part.quantity());
    println!("Length:           {:.1} mm", part.length().millimeters());
    println!("Depth:            {:.1} mm", part.profile_depth().millimeters());
    println!("Flange height:    {:.1} mm", part.flange_height().millimeters());
    println!("Flange thickness: {:.1} mm", part.flange_thickness().millimeters());
    println!("Web thickness:    {:.1} mm", part.web_thickness().millimeters());
    println!();

    println!(
        "{:<8} {:>14} {:>12} {:>12}  {}",
        "Surface", "Size[mm*10]", "X[mm*1000]", "Y[mm*1000]", "Type"
    );
    for (row, hole) in part.hole_table().iter().zip(part.holes()) {
        println!(
            "{:<8} {:>14} {:>12} {:>12}  {}",
            row.surface.to_string(),
            row.size,
            row.x_distance,
            row.y_distance,
            hole.hole_type()
        );
    }

    if part.is_valid() {
        println!();
        match ToolRegistry::build(&part) {
            Ok(registry) => {
                for surface in Surface::TOOL_ORDER {
                    let tools: Vec<String> = registry
                        .sizes(surface)
                        .map(|size| match registry.tool_number(size, surface) {
                            Some(tool) => format!("{}={}", tool, size),
                            None => size.to_string(),
                        })
                        .collect();
                    println!("Tools {:<7} {}", format!("{}:", surface), tools.join(" "));
                }
            }
            Err(err) => println!("Tools: {}", err),
        }
    }

    if !part.notifications().is_empty() {
        println!();
        for notification in part.notifications() {
            println!("{}", notification);
        }
    }

    Ok(())
}

fn cmd_print(args: ReadArgs) -> Result<()> {
    let part = read_part(&args.path, &args.reader)?;
    let record = encode(&part).with_context(|| format!("Failed to encode {}", part.partmark()))?;
    print!("{}", record);
    Ok(())
}
