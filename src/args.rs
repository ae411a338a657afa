use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use xword_gen::config::{
  BuilderConfig, DEFAULT_COLS, DEFAULT_EMPTY, DEFAULT_MAX_LOOPS, DEFAULT_ROWS, DEFAULT_SPINS,
  DEFAULT_TIME_BUDGET_SECS,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
  Solution,
  Puzzle,
  WordFind,
  WordBank,
  Legend,
  All,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  #[arg(long, default_value_t = DEFAULT_COLS)]
  pub cols: u32,

  #[arg(long, default_value_t = DEFAULT_ROWS)]
  pub rows: u32,

  /// Character printed for squares no word covers.
  #[arg(long, default_value_t = DEFAULT_EMPTY)]
  pub empty: char,

  /// Seconds to spend on attempts. At least one attempt always runs.
  #[arg(long, default_value_t = DEFAULT_TIME_BUDGET_SECS, allow_negative_numbers = true)]
  pub time_budget: f64,

  #[arg(long, default_value_t = DEFAULT_MAX_LOOPS)]
  pub max_loops: usize,

  #[arg(long, default_value_t = DEFAULT_SPINS)]
  pub spins: u32,

  #[arg(long)]
  pub seed: Option<u64>,

  /// File with one "word<TAB>clue" entry per line.
  #[arg(long)]
  pub words: Option<PathBuf>,

  #[arg(long, value_enum, default_value = "all")]
  pub view: View,

  /// Writes the finished puzzle here in bitcode format.
  #[arg(long)]
  pub save: Option<PathBuf>,
}

impl Args {
  pub fn builder_config(&self) -> BuilderConfig {
    BuilderConfig::new(self.cols, self.rows)
      .with_empty(self.empty)
      .with_time_budget(self.time_budget)
      .with_max_loops(self.max_loops)
      .with_spins(self.spins)
  }
}
