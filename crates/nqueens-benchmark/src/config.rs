//! Benchmark configuration.

use nqueens_config::{NQueensConfig, DEFAULT_BOARD_SIZE, DEFAULT_ITERATION_LIMIT, DEFAULT_TRIAL_COUNT};

/// Configuration for a benchmark run.
///
/// Controls board size, trial count, seeding, the min-conflicts iteration
/// limit and optional output paths.
///
/// # Example
///
/// ```
/// use nqueens_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("My Benchmark")
///     .with_board_size(8)
///     .with_trial_count(10)
///     .with_random_seed(42);
///
/// assert_eq!(config.name(), "My Benchmark");
/// assert_eq!(config.board_size(), 8);
/// assert_eq!(config.trial_count(), 10);
/// assert_eq!(config.random_seed(), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    board_size: usize,
    trial_count: usize,
    random_seed: Option<u64>,
    iteration_limit: u64,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - board_size: 17
    /// - trial_count: 200
    /// - iteration_limit: 1000
    /// - random_seed: none (seeded from OS entropy)
    ///
    /// # Example
    ///
    /// ```
    /// use nqueens_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test Benchmark");
    /// assert_eq!(config.board_size(), 17);
    /// assert_eq!(config.trial_count(), 200);
    /// assert_eq!(config.iteration_limit(), 1000);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board_size: DEFAULT_BOARD_SIZE,
            trial_count: DEFAULT_TRIAL_COUNT,
            random_seed: None,
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Creates a configuration from a loaded configuration file.
    ///
    /// # Example
    ///
    /// ```
    /// use nqueens_benchmark::BenchmarkConfig;
    /// use nqueens_config::NQueensConfig;
    ///
    /// let file = NQueensConfig::new().with_board_size(10).with_random_seed(1);
    /// let config = BenchmarkConfig::from_config("From File", &file);
    /// assert_eq!(config.board_size(), 10);
    /// assert_eq!(config.random_seed(), Some(1));
    /// ```
    pub fn from_config(name: impl Into<String>, config: &NQueensConfig) -> Self {
        Self {
            name: name.into(),
            board_size: config.board.size,
            trial_count: config.benchmark.trial_count,
            random_seed: config.random_seed,
            iteration_limit: config.min_conflicts.iteration_limit,
            csv_output_path: config.benchmark.csv_output.clone(),
            markdown_output_path: config.benchmark.markdown_output.clone(),
        }
    }

    /// Sets the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Sets the number of trials.
    pub fn with_trial_count(mut self, count: usize) -> Self {
        self.trial_count = count;
        self
    }

    /// Sets the seed of the benchmark's random source.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the min-conflicts iteration limit.
    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = limit;
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// # Example
    ///
    /// ```
    /// use nqueens_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test")
    ///     .with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some("results.csv"));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the board size.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Returns the number of trials.
    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    /// Returns the configured seed, if any.
    pub fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    /// Returns the min-conflicts iteration limit.
    pub fn iteration_limit(&self) -> u64 {
        self.iteration_limit
    }

    /// Returns the CSV output path.
    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path.
    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("N-Queens Local Search")
    }
}
