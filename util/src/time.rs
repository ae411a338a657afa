use std::time::{Duration, Instant};

pub const MAX_BUDGET_SECS: f64 = u32::MAX as f64;

pub fn time_fn<F: FnOnce() -> T, T>(f: F) -> (Duration, T) {
  let start = Instant::now();
  let result = f();
  (start.elapsed(), result)
}

/// Converts a budget in (possibly fractional, possibly negative) seconds into
/// a `Duration`. Zero, negative and NaN budgets are zero; anything longer than
/// `MAX_BUDGET_SECS`, infinity included, is capped there.
pub fn budget_from_secs(secs: f64) -> Duration {
  if secs > 0. {
    Duration::from_secs_f64(secs.min(MAX_BUDGET_SECS))
  } else {
    Duration::ZERO
  }
}
