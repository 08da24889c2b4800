use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "svgburst", version)]
struct Cli {
    /// Number of documents to generate.
    count: u64,

    /// File name prefix; outputs are `{prefix}_{seq:09}.svg`.
    prefix: String,

    /// Base image every output is layered on.
    #[arg(long, default_value = "./base.svg")]
    base: PathBuf,

    /// Output directory, created if missing.
    #[arg(long, default_value = "./SVGs")]
    out_dir: PathBuf,

    /// Seed for reproducible batches. Drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding the default generation and minify settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => svgburst::Config::load(path)?,
        None => svgburst::Config::default(),
    };

    let base = svgburst::BaseImage::load(&cli.base)
        .with_context(|| format!("load base image '{}'", cli.base.display()))?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let composer = svgburst::Composer::new(&base, &config.generation)?;
    let minifier = svgburst::Minifier::new(config.minify.clone());
    let opts = svgburst::BatchOpts {
        count: cli.count,
        prefix: cli.prefix,
        out_dir: cli.out_dir,
    };

    let report = svgburst::run_batch(&composer, &minifier, &opts, &mut rng);
    if !report.failed.is_empty() {
        eprintln!(
            "{} of {} documents failed; see log for details",
            report.failed.len(),
            report.requested
        );
    }
    eprintln!("wrote {} files to {}", report.written.len(), opts.out_dir.display());
    Ok(())
}
