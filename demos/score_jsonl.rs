//! Score JSON-lines product search requests.
//!
//! ```bash
//! echo '{"Query": "red shoes", "Price": 59.0, "Categories": [3, 8]}' \
//!     | cargo run --example score_jsonl -- --bias -1.5 -w 1234=0.8 -w 98765=0.2 --logistic --explain
//! ```
use anyhow::Context;
use clap::Parser;
use hotvect::prelude::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

namespaces! {
    /// Fields of an incoming search request
    pub enum Request {
        Query => SingleString,
        Price => SingleNumerical,
        Categories => Categoricals,
        Device => SingleString,
    }
}

namespaces! {
    /// Features the model was trained on
    pub enum Features {
        QueryTokens => Strings,
        Price => SingleNumerical,
        Categories => Categoricals,
        Device => SingleString,
        QueryLength => SingleNumerical,
    }
}

/// Score JSON-lines records read from stdin, one score per output line
#[derive(Parser, Debug)]
#[command(name = "score_jsonl")]
#[command(about = "Score JSON-lines records with a hashed linear model", long_about = None)]
struct Args {
    /// Model bias
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    bias: f64,

    /// Model weight as INDEX=WEIGHT, may be repeated
    #[arg(short = 'w', long = "weight", value_parser = parse_weight)]
    weights: Vec<(u32, f64)>,

    /// Pass the margin through the logistic function
    #[arg(long)]
    logistic: bool,

    /// JSON linear model file: {"bias": 0.0, "weights": [[index, weight]], "link": "logistic"}
    #[arg(short, long, conflicts_with_all = ["weights", "bias", "logistic"])]
    model: Option<PathBuf>,

    /// Size of the hashed index space in bits
    #[arg(long, default_value_t = 20)]
    bits: u8,

    /// Hash seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the transformed record after each score
    #[arg(long)]
    explain: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn transformer() -> hotvect::Result<PassThroughTransformer<Request, Features, RawValue>> {
    PassThroughTransformer::builder()
        .transform(Features::QueryTokens, |input: &DataRecord<Request, RawValue>| {
            match input.get(Request::Query)? {
                RawValue::SingleString(q) => {
                    Some(RawValue::strings(q.split_whitespace().map(str::to_lowercase)))
                }
                _ => None,
            }
        })
        .transform(Features::QueryLength, |input: &DataRecord<Request, RawValue>| {
            match input.get(Request::Query)? {
                RawValue::SingleString(q) => Some(RawValue::SingleNumerical(q.chars().count() as f64)),
                _ => None,
            }
        })
        .build()
}

fn parse_weight(arg: &str) -> std::result::Result<(u32, f64), String> {
    let (index, weight) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=WEIGHT, got '{}'", arg))?;
    let index = index.trim().parse().map_err(|e| format!("bad index '{}': {}", index, e))?;
    let weight = weight.trim().parse().map_err(|e| format!("bad weight '{}': {}", weight, e))?;
    Ok((index, weight))
}

fn load_model(args: &Args) -> anyhow::Result<LinearModel> {
    let Some(path) = args.model.as_ref() else {
        let link = if args.logistic { Link::Logistic } else { Link::Identity };
        return Ok(LinearModel::new(args.bias, args.weights.clone()).with_link(link));
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading model {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing model {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let model = load_model(&args)?;
    info!("Model: bias {}, {} weights, {:?} link", model.bias, model.weights.len(), model.link);

    let vectorizer = HashingVectorizer::<Features>::new(HashingConfig::new(args.bits).with_seed(args.seed))?;
    let scorer = TransformingScorer::<Features, _, _>::new(
        transformer()?,
        VectorizingScorer::new(vectorizer, LinearEstimator::new(model)?),
    );
    let decoder = JsonRecordDecoder::<Request>::new();
    let encoder = JsonRecordEncoder::<Features>::new();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut scored = 0usize;

    for (n, line) in stdin.lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let record = decoder
            .decode(&line)
            .with_context(|| format!("line {}", n + 1))?;
        let score = scorer.score(&record);
        debug!(line = n + 1, score, "scored");

        if args.explain {
            let transformed = scorer.transformer().transform(&record);
            writeln!(out, "{}\t{}", score, encoder.encode(&transformed)?)?;
        } else {
            writeln!(out, "{}", score)?;
        }
        scored += 1;
    }

    info!("Scored {} records", scored);
    Ok(())
}
