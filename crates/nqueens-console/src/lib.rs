//! Colorful console output for benchmark events.
//!
//! Provides a custom `tracing` layer that formats benchmark and search events
//! with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (benchmark start/end, reports written)
//! - **DEBUG**: One line per finished trial
//! - **TRACE**: Individual applied moves

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "nqueens_benchmark=info,nqueens_solver=info";

/// Initializes the benchmark console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchmarkConsoleLayer)
            .try_init();
    });
}

// Marks the start of the benchmark for elapsed time tracking.
fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 _   _        ___
| \ | |      / _ \ _   _  ___  ___ _ __  ___
|  \| |_____| | | | | | |/ _ \/ _ \ '_ \/ __|
| |\  |_____| |_| | |_| |  __/  __/ | | \__ \
|_| \_|      \__\_\\__,_|\___|\___|_| |_|___/
"#;

    let version_line = format!("        v{} - Local Search Benchmark\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats benchmark events with colors.
pub struct BenchmarkConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchmarkConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("nqueens_benchmark") && !target.starts_with("nqueens_solver") {
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
    name: Option<String>,
    algorithm: Option<String>,
    termination: Option<String>,
    format: Option<String>,
    path: Option<String>,
    board_size: Option<u64>,
    trial_count: Option<u64>,
    seed: Option<u64>,
    trial: Option<u64>,
    step: Option<u64>,
    column: Option<u64>,
    row: Option<u64>,
    ties: Option<u64>,
    iterations: Option<u64>,
    collisions: Option<u64>,
    duration_us: Option<u64>,
    duration_ms: Option<u64>,
    hill_climbing_solved: Option<u64>,
    min_conflicts_solved: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "board_size" => self.board_size = Some(value),
            "trial_count" => self.trial_count = Some(value),
            "seed" => self.seed = Some(value),
            "trial" => self.trial = Some(value),
            "step" => self.step = Some(value),
            "column" => self.column = Some(value),
            "row" => self.row = Some(value),
            "ties" => self.ties = Some(value),
            "iterations" => self.iterations = Some(value),
            "collisions" => self.collisions = Some(value),
            "duration_us" => self.duration_us = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "hill_climbing_solved" => self.hill_climbing_solved = Some(value),
            "min_conflicts_solved" => self.min_conflicts_solved = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        // Every field shown is a count; negative values are dropped.
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "name" => self.name = value,
            "algorithm" => self.algorithm = value,
            "termination" => self.termination = value,
            "format" => self.format = value,
            "path" => self.path = value,
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "benchmark_start" => format_benchmark_start(v),
        "benchmark_end" => format_benchmark_end(v),
        "trial_end" => format_trial_end(v),
        "report_written" => format_report_written(v),
        "step" => format_step(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    mark_run_start();
    let name = v.name.as_deref().unwrap_or("Benchmark");
    let size = v.board_size.unwrap_or(0);
    let trials = v.trial_count.unwrap_or(0);

    let mut output = format!(
        "{} {} {} │ {}-queens │ {} trials",
        format_elapsed(),
        "▶".bright_green().bold(),
        name.white().bold(),
        size.to_formatted_string(&Locale::en).bright_yellow(),
        trials.to_formatted_string(&Locale::en).bright_yellow(),
    );

    if let Some(seed) = v.seed {
        output.push_str(&format!(" │ seed {}", seed.bright_magenta()));
    }

    output
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    let name = v.name.as_deref().unwrap_or("Benchmark");
    let trials = v.trial_count.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} {} complete │ {} │ hill climbing solved {} │ min conflicts solved {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        name.white().bold(),
        format_duration_ms(duration).yellow(),
        format_ratio(v.hill_climbing_solved.unwrap_or(0), trials),
        format_ratio(v.min_conflicts_solved.unwrap_or(0), trials),
    )
}

fn format_trial_end(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("Unknown");
    let trial = v.trial.unwrap_or(0);
    let termination = v.termination.as_deref().unwrap_or("unknown");
    let iterations = v.iterations.unwrap_or(0);
    let collisions = v.collisions.unwrap_or(0);
    let micros = v.duration_us.unwrap_or(0);

    let status = if termination == "solved" {
        termination.bright_green().to_string()
    } else {
        termination.bright_red().to_string()
    };

    format!(
        "{} {} {} #{:<5} │ {} │ {:>8} moves │ {} collisions │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        algorithm.white(),
        trial.to_formatted_string(&Locale::en),
        status,
        iterations.to_formatted_string(&Locale::en).white(),
        collisions.to_formatted_string(&Locale::en).bright_yellow(),
        format_duration_ms(micros / 1000).yellow(),
    )
}

fn format_report_written(v: &EventVisitor) -> String {
    let format = v.format.as_deref().unwrap_or("report");
    let path = v.path.as_deref().unwrap_or("?");

    format!(
        "{} {} {} report written to {}",
        format_elapsed(),
        "✎".bright_cyan(),
        format.white().bold(),
        path.underline(),
    )
}

fn format_step(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let step = v.step.unwrap_or(0);
    let column = v.column.unwrap_or(0);
    let row = v.row.unwrap_or(0);
    let ties = v.ties.unwrap_or(0);
    let collisions = v.collisions.unwrap_or(0);

    format!(
        "{} {} Step {:>10} │ column {:>4} → row {:>4} │ {} ties │ {} collisions",
        format_elapsed(),
        "✓".bright_green(),
        step.to_formatted_string(&Locale::en).bright_black(),
        column.bright_black(),
        row.bright_black(),
        ties.bright_black(),
        collisions.to_formatted_string(&Locale::en).bright_black(),
    )
}

fn format_ratio(solved: u64, trials: u64) -> String {
    let text = format!(
        "{}/{}",
        solved.to_formatted_string(&Locale::en),
        trials.to_formatted_string(&Locale::en)
    );
    if trials > 0 && solved == trials {
        text.bright_green().bold().to_string()
    } else {
        text.bright_yellow().to_string()
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
