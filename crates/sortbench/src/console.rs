//! Colorful console output for benchmark progress.
//!
//! Provides a custom `tracing` layer that formats dataset and benchmark
//! events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Dataset generation and loading, benchmark start/end, reports
//! - **DEBUG**: Individual trials
//!
//! Dataset and report events are shown by default. Set `RUST_LOG`, e.g.
//! `RUST_LOG=sortbench_benchmark=debug`, to follow the benchmarks themselves.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const DEFAULT_FILTER: &str = "warn,sortbench=info,sortbench_datasets=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let title = format!("SortBench v{}", env!("CARGO_PKG_VERSION"));
    let subtitle = "Instrumented sorting benchmarks";

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", title.bright_cyan().bold());
    let _ = writeln!(stdout, "{}", subtitle.bright_white());
    let _ = writeln!(stdout);
    let _ = stdout.flush();
}

/// A tracing layer that formats benchmark events with colors.
pub struct BenchConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("sortbench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    algorithm: Option<String>,
    dataset: Option<String>,
    path: Option<String>,
    dir: Option<String>,
    size: Option<u64>,
    trials: Option<u64>,
    trial: Option<u64>,
    records: Option<u64>,
    fields: Option<u64>,
    line: Option<u64>,
    seed: Option<u64>,
    comparisons: Option<u64>,
    swaps: Option<u64>,
    time_ns: Option<u64>,
    elapsed_ns: Option<u64>,
    warmup: Option<bool>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "algorithm" => self.algorithm = Some(value),
            "dataset" => self.dataset = Some(value),
            "path" => self.path = Some(value),
            "dir" => self.dir = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "size" => self.size = Some(value),
            "trials" => self.trials = Some(value),
            "trial" => self.trial = Some(value),
            "records" => self.records = Some(value),
            "fields" => self.fields = Some(value),
            "line" => self.line = Some(value),
            "seed" => self.seed = Some(value),
            "comparisons" => self.comparisons = Some(value),
            "swaps" => self.swaps = Some(value),
            "time_ns" => self.time_ns = Some(value),
            "elapsed_ns" => self.elapsed_ns = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "warmup" {
            self.warmup = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "datasets_generated" => format_datasets_generated(v),
        "dataset_written" => format_dataset_written(v),
        "dataset_loaded" => format_dataset_loaded(v),
        "row_skipped" => format_row_skipped(v),
        "benchmark_start" => format_benchmark_start(v),
        "trial_end" => format_trial_end(v, level),
        "benchmark_end" => format_benchmark_end(v),
        "report_written" => format_report_written(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_datasets_generated(v: &EventVisitor) -> String {
    format!(
        "{} {} Generated datasets │ {} │ seed {}",
        format_elapsed(),
        "✚".bright_green().bold(),
        v.dir.as_deref().unwrap_or("?").white().bold(),
        v.seed.unwrap_or(0).bright_yellow()
    )
}

fn format_dataset_written(v: &EventVisitor) -> String {
    format!(
        "{} {} Wrote {} records │ {}",
        format_elapsed(),
        "↳".bright_black(),
        count(v.records).bright_yellow(),
        v.path.as_deref().unwrap_or("?").bright_black()
    )
}

fn format_dataset_loaded(v: &EventVisitor) -> String {
    format!(
        "{} {} Loaded {} records │ {}",
        format_elapsed(),
        "◆".bright_blue(),
        count(v.records).bright_yellow(),
        v.path.as_deref().unwrap_or("?").white()
    )
}

fn format_row_skipped(v: &EventVisitor) -> String {
    format!(
        "{} {} Skipped line {} │ {} fields",
        format_elapsed(),
        "!".yellow().bold(),
        v.line.unwrap_or(0),
        v.fields.unwrap_or(0)
    )
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} on {} │ {} records │ {} trials",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.algorithm.as_deref().unwrap_or("?").white().bold(),
        v.dataset.as_deref().unwrap_or("?").white(),
        count(v.size).bright_yellow(),
        count(v.trials).bright_yellow()
    )
}

fn format_trial_end(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG {
        return String::new();
    }

    let marker = if v.warmup.unwrap_or(false) {
        "warm-up".bright_black().to_string()
    } else {
        "measured".bright_green().to_string()
    };

    format!(
        "{}   Trial {:>3} │ {:>12} │ {}",
        format_elapsed(),
        v.trial.unwrap_or(0),
        format_duration_ns(v.elapsed_ns.unwrap_or(0)).yellow(),
        marker
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} on {} │ {} comparisons │ {} swaps │ median {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.algorithm.as_deref().unwrap_or("?").white().bold(),
        v.dataset.as_deref().unwrap_or("?").white(),
        count(v.comparisons).bright_magenta(),
        count(v.swaps).bright_magenta(),
        format_duration_ns(v.time_ns.unwrap_or(0)).yellow()
    )
}

fn format_report_written(v: &EventVisitor) -> String {
    format!(
        "{} {} Report written │ {}",
        format_elapsed(),
        "✎".bright_cyan(),
        v.path.as_deref().unwrap_or("?").white().bold()
    )
}

fn format_duration_ns(ns: u64) -> String {
    if ns < 1_000 {
        format!("{}ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.2}µs", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.2}ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", ns as f64 / 1_000_000_000.0)
    }
}
