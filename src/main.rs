// src/main.rs
use benchmark_parser::converter::{self, OutputFormat};
use benchmark_parser::extractors::Benchmark;
use benchmark_parser::storage::StorageManager;
use benchmark_parser::utils::{self, AppError};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command Line Interface for parsing controls out of CIS benchmarks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File path to the benchmark in PDF format
    benchmark: PathBuf,

    /// Control ID to parse and print to stdout (e.g. 1.1.2)
    #[arg(short, long)]
    control: Option<String>,

    /// Converter output format: "text" or "html"
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Treat the benchmark path as already converted text and skip the converter
    #[arg(long)]
    input_text: bool,

    /// Also save the extracted controls and metadata into this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Debug mode - save the converted text annotated with control boundaries
    #[arg(short, long)]
    debug: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Obtain the converted text
    let format: OutputFormat = args.format.parse()?;
    let raw = if args.input_text {
        std::fs::read_to_string(&args.benchmark)?
    } else {
        converter::convert_document(&args.benchmark, format)?
    };
    tracing::info!("Loaded converted document ({} bytes)", raw.len());

    if args.debug {
        let debug_dir = args
            .output_dir
            .as_ref()
            .map_or_else(|| PathBuf::from("./debug"), |dir| dir.join("debug"));
        if let Err(e) = utils::debug::save_debug_text(&raw, &debug_dir) {
            tracing::warn!("Failed to save debug text: {}", e);
        }
    }

    // 4. Segment and parse the controls
    let benchmark = Benchmark::from_text(&raw);
    if benchmark.is_empty() {
        tracing::warn!("No controls found in {}", args.benchmark.display());
    }

    // 5. Optionally persist the result
    if let Some(dir) = &args.output_dir {
        let storage = StorageManager::new(dir)?;
        let stem = file_stem(&args.benchmark)?;
        storage.save_controls(&stem, &benchmark)?;
        storage.save_metadata(&stem, &args.benchmark, format.as_str(), &benchmark)?;
    }

    // 6. Print either a single control or all of them
    let json = match &args.control {
        Some(section) => match benchmark.control(section) {
            Some(control) => Some(to_json(control, args.pretty)?),
            None => {
                tracing::info!("Control {} not found", section);
                None
            }
        },
        None => {
            let controls: Vec<_> = benchmark.controls().collect();
            Some(to_json(&controls, args.pretty)?)
        }
    };
    if let Some(json) = json {
        println!("{}", json);
    }

    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn file_stem(path: &Path) -> Result<String, AppError> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| {
            AppError::Config(format!("Benchmark path has no file name: {}", path.display()))
        })
}
