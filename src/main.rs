use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use oxidecompare::compare::{compare, display_comparison};
use oxidecompare::config::{Config, SinkFormat};
use oxidecompare::report::Reporter;

#[derive(Parser, Debug)]
#[command(name = "oxidecompare")]
#[command(
    version,
    about = "Compare two whitespace-delimited numeric files and export histogram data"
)]
struct Cli {
    /// First input file
    file1: PathBuf,

    /// Second input file
    file2: PathBuf,

    /// Sort one file and reorder the other by the same permutation
    #[arg(long)]
    reorder: bool,

    /// With --reorder, take the sort order from the second file
    #[arg(long)]
    sort_second: bool,

    /// Directory for plot data artifacts
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// File name (without extension) for plot data artifacts
    #[arg(long)]
    output_stem: Option<String>,

    /// Plot data format
    #[arg(long, value_enum)]
    format: Option<SinkFormat>,

    /// JSON config file; flags given on the command line take precedence
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config, oxidecompare::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(stem) = &self.output_stem {
            config.output_stem = Some(stem.clone());
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.sort_second {
            config.sort_first = false;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };

    let mut sink = match config.make_sink() {
        Ok(sink) => sink,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };

    let mut reporter = Reporter::new(std::io::stdout().lock());
    let outcome = if cli.reorder {
        compare(&cli.file1, &cli.file2, config.sort_first, &mut sink, &mut reporter).map(|_| ())
    } else {
        display_comparison(&cli.file1, &cli.file2, &mut sink, &mut reporter).map(|_| ())
    };

    // Failures were already logged by the comparison itself.
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(1),
    }
}
