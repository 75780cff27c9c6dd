use std::path::PathBuf;

use amei::extract::{ExtractOptions, Extractor, output_path_for};
use amei::interchange::{Crop2Ml, DocumentFormat, Json, detect_format, supported_extensions};
use amei::models::builtin_registry;
use amei::parser::CommentDetection;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{Level, debug, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Generate a Crop2ML model description for a registered model type.
#[derive(Debug, Parser)]
#[command(name = "amei", version)]
struct CliArgs {
    /// Fully qualified type name, e.g. Models.Toy.Toy1
    #[arg(required_unless_present = "list")]
    type_name: Option<String>,

    /// Path to the type's source code
    #[arg(required_unless_present = "list")]
    source: Option<PathBuf>,

    /// Output file (defaults to the source path with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (defaults to the output file's extension, then xml)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// How commented-out member accesses are recognised
    #[arg(long, value_enum, default_value_t = CommentMode::Tokenized)]
    comment_detection: CommentMode,

    /// List registered type names and exit
    #[arg(long)]
    list: bool,

    #[arg(short, long)]
    verbose: bool,

    /// trace, debug, info, warn or error
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Xml,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CommentMode {
    Tokenized,
    Line,
}

impl From<CommentMode> for CommentDetection {
    fn from(mode: CommentMode) -> Self {
        match mode {
            CommentMode::Tokenized => CommentDetection::Tokenized,
            CommentMode::Line => CommentDetection::LineHeuristic,
        }
    }
}

fn main() {
    let args = CliArgs::parse();
    init_logging(&args);
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let registry = builtin_registry();

    if args.list {
        for id in registry.identifiers() {
            println!("{id}");
        }
        return Ok(());
    }

    let (Some(type_name), Some(source)) = (&args.type_name, &args.source) else {
        anyhow::bail!("Usage: amei TypeName SourceCodePath");
    };

    let format = output_format(args);
    let format = format.as_ref();

    let ty = registry.resolve(type_name)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| output_path_for(source, format));

    let options = ExtractOptions::default().with_comment_detection(args.comment_detection.into());
    Extractor::new(options)
        .write_file(&ty, source, &output, format)
        .with_context(|| format!("Failed to generate model description for {type_name}"))?;

    println!("{}", output.display());
    Ok(())
}

/// `--format` wins, then the `--output` extension, then Crop2ML.
fn output_format(args: &CliArgs) -> Box<dyn DocumentFormat> {
    match args.format {
        Some(OutputFormat::Xml) => return Box::new(Crop2Ml),
        Some(OutputFormat::Json) => return Box::new(Json),
        None => {}
    }
    let Some(output) = &args.output else {
        return Box::new(Crop2Ml);
    };
    detect_format(output).unwrap_or_else(|| {
        warn!(
            "Unrecognised extension on {} (supported: {}), writing Crop2ML",
            output.display(),
            supported_extensions().join(", ")
        );
        Box::new(Crop2Ml)
    })
}

fn init_logging(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("amei={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}
