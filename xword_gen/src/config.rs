use std::time::Duration;

use util::{
  error::{XWordError, XWordResult},
  time::budget_from_secs,
};

pub const DEFAULT_COLS: u32 = 13;
pub const DEFAULT_ROWS: u32 = 13;
pub const DEFAULT_EMPTY: char = '-';
pub const DEFAULT_TIME_BUDGET_SECS: f64 = 1.;
pub const DEFAULT_MAX_LOOPS: usize = 2000;
/// Two passes over the pool are almost always enough to place every word that
/// will ever fit.
pub const DEFAULT_SPINS: u32 = 2;
/// Largest board, in cells, that a builder will allocate.
pub const MAX_CELLS: u64 = 1 << 20;

#[derive(Clone, Debug, PartialEq)]
pub struct BuilderConfig {
  pub cols: u32,
  pub rows: u32,
  pub empty: char,
  /// Wall-clock seconds the attempt loop may run. One attempt always runs.
  pub time_budget: f64,
  /// Ceiling on candidate coordinates tried for a single word.
  pub max_loops: usize,
  pub spins: u32,
}

impl Default for BuilderConfig {
  fn default() -> Self {
    Self {
      cols: DEFAULT_COLS,
      rows: DEFAULT_ROWS,
      empty: DEFAULT_EMPTY,
      time_budget: DEFAULT_TIME_BUDGET_SECS,
      max_loops: DEFAULT_MAX_LOOPS,
      spins: DEFAULT_SPINS,
    }
  }
}

impl BuilderConfig {
  pub fn new(cols: u32, rows: u32) -> Self {
    Self { cols, rows, ..Self::default() }
  }

  pub fn with_empty(self, empty: char) -> Self {
    Self { empty, ..self }
  }

  pub fn with_time_budget(self, time_budget: f64) -> Self {
    Self { time_budget, ..self }
  }

  pub fn with_max_loops(self, max_loops: usize) -> Self {
    Self { max_loops, ..self }
  }

  pub fn with_spins(self, spins: u32) -> Self {
    Self { spins, ..self }
  }

  pub fn budget(&self) -> Duration {
    budget_from_secs(self.time_budget)
  }

  pub fn validate(&self) -> XWordResult {
    if self.cols == 0 || self.rows == 0 {
      return Err(
        XWordError::InvalidInput(format!(
          "Grid dimensions must be positive, got {}x{}",
          self.cols, self.rows
        ))
        .into(),
      );
    }
    if self.cols as u64 * self.rows as u64 > MAX_CELLS {
      return Err(
        XWordError::InvalidInput(format!(
          "Grid {}x{} is too large, at most {MAX_CELLS} cells are allowed",
          self.cols, self.rows
        ))
        .into(),
      );
    }
    if self.empty.is_alphabetic() {
      return Err(
        XWordError::InvalidInput(format!(
          "Empty marker '{}' could be mistaken for a letter",
          self.empty
        ))
        .into(),
      );
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::time::Duration;

  use googletest::prelude::*;
  use util::error::{as_xword_error, XWordError};

  use super::{BuilderConfig, MAX_CELLS};

  #[gtest]
  fn test_defaults() {
    let config = BuilderConfig::default();
    expect_that!(config.cols, eq(13));
    expect_that!(config.rows, eq(13));
    expect_that!(config.empty, eq('-'));
    expect_that!(config.spins, eq(2));
    expect_that!(config.budget(), eq(Duration::from_secs(1)));
    expect_that!(config.validate(), ok(anything()));
  }

  #[gtest]
  fn test_rejects_zero_dimensions() {
    expect_that!(BuilderConfig::new(0, 5).validate(), err(anything()));
    expect_that!(BuilderConfig::new(5, 0).validate(), err(anything()));
  }

  #[gtest]
  fn test_rejects_oversized_grid() {
    let error = BuilderConfig::new(i32::MAX as u32, i32::MAX as u32)
      .validate()
      .unwrap_err();
    expect_true!(matches!(
      as_xword_error(error.as_ref()),
      Some(XWordError::InvalidInput(_))
    ));
    expect_that!(BuilderConfig::new(u32::MAX, 1).validate(), err(anything()));
    expect_that!(BuilderConfig::new(1 << 10, 1 << 10).validate(), ok(anything()));
    expect_that!(BuilderConfig::new(1 << 10, (1 << 10) + 1).validate(), err(anything()));
    expect_that!(BuilderConfig::new(MAX_CELLS as u32, 1).validate(), ok(anything()));
  }

  #[gtest]
  fn test_rejects_letter_marker() {
    expect_that!(BuilderConfig::new(5, 5).with_empty('x').validate(), err(anything()));
    expect_that!(BuilderConfig::new(5, 5).with_empty('.').validate(), ok(anything()));
  }

  #[gtest]
  fn test_negative_budget_is_zero() {
    let config = BuilderConfig::new(3, 3).with_time_budget(-2.);
    expect_that!(config.budget(), eq(Duration::ZERO));
  }
}
