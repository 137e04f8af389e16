//! `nqueens-bench`: compares steepest hill climbing with min-conflicts.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use nqueens::{Benchmark, BenchmarkConfig, BenchmarkError, NQueensConfig, SummaryReport};
use owo_colors::OwoColorize;

/// Configuration file read when `--config` is not given.
const DEFAULT_CONFIG_PATH: &str = "nqueens.toml";

#[derive(Parser, Debug)]
#[command(name = "nqueens-bench", version)]
#[command(about = "Benchmark steepest hill climbing against min-conflicts on random N-Queens boards")]
struct Cli {
    /// Configuration file (TOML). Defaults to ./nqueens.toml when present.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Board size (number of queens).
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Number of trials per algorithm.
    #[arg(short, long)]
    trials: Option<usize>,

    /// Seed for the random source; drawn from OS entropy when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Min-conflicts iteration limit.
    #[arg(long)]
    iteration_limit: Option<u64>,

    /// Write per-trial results as CSV.
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,

    /// Write a Markdown report.
    #[arg(long, value_name = "PATH")]
    markdown: Option<String>,

    /// Disable banner and progress logging.
    #[arg(short, long)]
    quiet: bool,

    /// Print the first solved board of each algorithm.
    #[arg(long)]
    show_solution: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BenchmarkError> {
    let file = load_config(cli.config.as_deref())?;
    let file = apply_overrides(file, cli);
    file.validate()?;

    if !cli.quiet {
        nqueens::console::init();
    }

    let config = BenchmarkConfig::from_config(benchmark_name(&file), &file);
    let benchmark = Benchmark::new(config);
    let result = benchmark.run()?;

    println!();
    print!("{}", SummaryReport::new(&result));

    if cli.show_solution {
        for algorithm in result.algorithms() {
            println!();
            match algorithm.first_solution() {
                Some(board) => {
                    println!("{}", format!("{} solution:", algorithm.algorithm).bold());
                    println!("{}", board);
                }
                None => println!("{}", format!("{}: no solution found", algorithm.algorithm).yellow()),
            }
        }
    }

    benchmark.export(&result)?;
    Ok(())
}

/// Reads the explicit config file, or the default one if it exists.
fn load_config(path: Option<&Path>) -> Result<NQueensConfig, BenchmarkError> {
    match path {
        Some(path) => Ok(NQueensConfig::from_toml_file(path)?),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Ok(NQueensConfig::from_toml_file(DEFAULT_CONFIG_PATH)?)
        }
        None => Ok(NQueensConfig::default()),
    }
}

fn apply_overrides(mut config: NQueensConfig, cli: &Cli) -> NQueensConfig {
    if let Some(size) = cli.size {
        config = config.with_board_size(size);
    }
    if let Some(trials) = cli.trials {
        config = config.with_trial_count(trials);
    }
    if let Some(seed) = cli.seed {
        config = config.with_random_seed(seed);
    }
    if let Some(limit) = cli.iteration_limit {
        config = config.with_iteration_limit(limit);
    }
    if cli.csv.is_some() {
        config.benchmark.csv_output = cli.csv.clone();
    }
    if cli.markdown.is_some() {
        config.benchmark.markdown_output = cli.markdown.clone();
    }
    config
}

fn benchmark_name(config: &NQueensConfig) -> String {
    format!("{}-Queens Local Search", config.board.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("nqueens-bench").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_file_values() {
        let cli = parse(&["--size", "8", "--trials", "5", "--seed", "9", "--iteration-limit", "50"]);
        let config = apply_overrides(NQueensConfig::default(), &cli);

        assert_eq!(config.board.size, 8);
        assert_eq!(config.benchmark.trial_count, 5);
        assert_eq!(config.random_seed, Some(9));
        assert_eq!(config.min_conflicts.iteration_limit, 50);
    }

    #[test]
    fn test_missing_flags_keep_file_values() {
        let file = NQueensConfig::default().with_board_size(12).with_random_seed(1);
        let config = apply_overrides(file.clone(), &parse(&["--quiet"]));
        assert_eq!(config, file);
    }

    #[test]
    fn test_output_paths() {
        let cli = parse(&["--csv", "out.csv", "--markdown", "out.md"]);
        let config = apply_overrides(NQueensConfig::default(), &cli);

        assert_eq!(config.benchmark.csv_output.as_deref(), Some("out.csv"));
        assert_eq!(config.benchmark.markdown_output.as_deref(), Some("out.md"));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/nqueens.toml"))).unwrap_err();
        assert!(matches!(err, BenchmarkError::Config(_)));
    }

    #[test]
    fn test_zero_size_fails_validation() {
        let config = apply_overrides(NQueensConfig::default(), &parse(&["--size", "0"]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_benchmark_name() {
        assert_eq!(benchmark_name(&NQueensConfig::default()), "17-Queens Local Search");
    }
}
