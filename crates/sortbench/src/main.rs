use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use sortbench::{console, ConfigError, Suite, SuiteConfig, SuiteError};

/// Benchmark bubble, insertion and selection sort over generated datasets.
#[derive(Debug, Parser)]
#[command(name = "sortbench", version, about)]
struct Cli {
    /// Suite configuration file (TOML, or YAML by extension). Defaults apply
    /// when the file does not exist.
    #[arg(default_value = "sortbench.toml")]
    config: PathBuf,

    /// Regenerate the datasets even if they already exist.
    #[arg(long)]
    regenerate: bool,

    /// Write the CSV report to this path.
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Write the Markdown report to this path.
    #[arg(long, value_name = "PATH")]
    markdown: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    console::init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SuiteError> {
    let mut config = load_config(&cli.config)?;
    config.regenerate |= cli.regenerate;
    if let Some(path) = cli.csv {
        config.output.csv = Some(path);
    }
    if let Some(path) = cli.markdown {
        config.output.markdown = Some(path);
    }

    let suite = Suite::new(config);
    let runs = suite.run()?;

    for run in &runs {
        println!();
        println!("{}", format!("=== {} ===", run.dataset.title).bright_cyan().bold());
        for result in &run.results {
            println!("{}", result);
        }
    }
    println!();

    suite.write_reports(&runs)?;
    Ok(())
}

fn load_config(path: &Path) -> Result<SuiteConfig, ConfigError> {
    match SuiteConfig::load(path) {
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok(SuiteConfig::default())
        }
        other => other,
    }
}
