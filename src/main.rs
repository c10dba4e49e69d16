use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use dam_engine::{AnalyzeRequest, Engine, EngineConfig, EngineError, LanguageModel, ScoreWeights};

#[derive(Parser)]
#[command(
    name = "dam",
    about = "Score rhetorical distraction in prose and strip decorative modifiers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON engine configuration
    #[arg(long, global = true, env = "DAM_CONFIG")]
    config: Option<PathBuf>,

    /// JSON lexicon overlay extending the built-in word tables
    #[arg(long, global = true, env = "DAM_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Truncate input beyond this many characters
    #[arg(long, global = true)]
    max_chars: Option<usize>,

    /// Reject analysis input shorter than this many characters
    #[arg(long, global = true)]
    min_chars: Option<usize>,

    /// Weight of topical divergence; sentiment takes the remainder
    #[arg(long, global = true)]
    divergence_weight: Option<f64>,
}

#[derive(Subcommand)]
enum Command {
    /// Score text and print the de-painted rewrite
    Analyze {
        /// File paths to analyze (reads stdin if none provided)
        files: Vec<String>,
        /// Neutral reference text on the same topic
        #[arg(long)]
        baseline: Option<PathBuf>,
    },
    /// Strip removable modifiers without scoring
    Depaint {
        /// File paths to de-paint (reads stdin if none provided)
        files: Vec<String>,
    },
    /// Analyze JSON-lines requests from stdin, one JSON line out per request
    Batch,
    /// Load the language resource and report its status
    Health,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = build_engine(&cli).unwrap_or_else(|e| fail(&e));

    match &cli.command {
        Command::Analyze { files, baseline } => {
            let baseline = baseline
                .as_deref()
                .map(read_path)
                .transpose()
                .unwrap_or_else(|e| fail(&e));
            for text in inputs(files) {
                let result = engine
                    .analyze(&text, baseline.as_deref())
                    .unwrap_or_else(|e| fail(&e));
                print_pretty(&result);
            }
        }
        Command::Depaint { files } => {
            for text in inputs(files) {
                let result = engine.depaint(&text).unwrap_or_else(|e| fail(&e));
                print_pretty(&result);
            }
        }
        Command::Batch => run_batch(&engine),
        Command::Health => print_pretty(&engine.health()),
    }
}

fn build_engine(cli: &Cli) -> Result<Engine, EngineError> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(max_chars) = cli.max_chars {
        config = config.with_max_chars(max_chars);
    }
    if let Some(min_chars) = cli.min_chars {
        config = config.with_min_chars(min_chars);
    }
    if let Some(weight) = cli.divergence_weight {
        config = config.with_weights(ScoreWeights::with_divergence(weight)?);
    }
    let model = LanguageModel::load(cli.lexicon.as_deref())?;
    Engine::new(Arc::new(model), config)
}

fn run_batch(engine: &Engine) {
    let input = read_stdin().unwrap_or_else(|e| fail(&e));
    let requests: Vec<Result<AnalyzeRequest, EngineError>> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(EngineError::from))
        .collect();

    let responses: Vec<serde_json::Value> = requests
        .into_par_iter()
        .map(|request| {
            match request.and_then(|request| engine.analyze_request(&request)) {
                Ok(result) => {
                    serde_json::to_value(&result).unwrap_or_else(|e| error_json(&e.into()))
                }
                Err(e) => error_json(&e),
            }
        })
        .collect();

    for response in responses {
        println!("{response}");
    }
}

fn error_json(err: &EngineError) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "kind": err.kind(),
            "message": err.to_string(),
            "client_error": err.is_client_error(),
        }
    })
}

fn inputs(files: &[String]) -> Vec<String> {
    if files.is_empty() {
        return vec![read_stdin().unwrap_or_else(|e| fail(&e))];
    }
    files
        .iter()
        .map(|path| {
            read_path(Path::new(path)).unwrap_or_else(|e| {
                eprintln!("Error reading {path}: {e}");
                std::process::exit(1);
            })
        })
        .collect()
}

fn read_stdin() -> Result<String, EngineError> {
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_path(path: &Path) -> Result<String, EngineError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn print_pretty<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(&e.into()),
    }
}

fn fail(err: &EngineError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(if err.is_client_error() { 2 } else { 1 });
}
