use std::{cmp::Reverse, time::Instant};

use log::{debug, info, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use util::{
  error::{XWordError, XWordResult},
  grid::Grid,
  pos::Pos,
};

use crate::{
  config::BuilderConfig,
  fit::{check_fit_score, sort_coords, suggest_coords, Board},
  render::Solution,
  word::{NumberedWord, Orientation, PlacedWord, Placement, Word},
};

/// The grid and placed words produced by one randomized pass over the pool.
#[derive(Clone, Debug)]
pub struct Attempt {
  board: Board,
  /// In the order the words were placed.
  placed: Vec<PlacedWord>,
}

impl Attempt {
  pub fn new(cols: u32, rows: u32) -> Self {
    Self { board: Grid::filled(cols, rows, None), placed: Vec::new() }
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  pub fn placed(&self) -> &[PlacedWord] {
    &self.placed
  }

  pub fn into_parts(self) -> (Board, Vec<PlacedWord>) {
    (self.board, self.placed)
  }

  /// Tries to put `word` on the board, returning whether it was placed.
  ///
  /// The first word goes in the top left corner. Every later word must be
  /// placed on one of its scored coordinates; a word with none is skipped.
  pub fn fit_and_add<R: Rng + ?Sized>(
    &mut self,
    word: &Word,
    max_loops: usize,
    rng: &mut R,
  ) -> XWordResult<bool> {
    if self.placed.is_empty() {
      return self.seed(word, rng);
    }

    let candidates = sort_coords(&self.board, word, suggest_coords(&self.board, word), rng);
    match candidates
      .into_iter()
      .take(max_loops)
      .find(|candidate| candidate.score > 0)
    {
      Some(candidate) => {
        self.set_word(word.clone(), candidate.placement)?;
        Ok(true)
      }
      None => Ok(false),
    }
  }

  fn seed<R: Rng + ?Sized>(&mut self, word: &Word, rng: &mut R) -> XWordResult<bool> {
    let first = if rng.random_bool(0.5) {
      Orientation::Down
    } else {
      Orientation::Across
    };

    for orientation in [first, first.other()] {
      let placement = Placement::new(Pos::zero(), orientation);
      if check_fit_score(&self.board, word, placement) > 0 {
        self.set_word(word.clone(), placement)?;
        return Ok(true);
      }
    }
    Ok(false)
  }

  /// Writes every letter of `word` onto the board and records it as placed.
  /// The board is left untouched if any letter would not fit.
  pub fn set_word(&mut self, word: Word, placement: Placement) -> XWordResult {
    let placed = word.place(placement);
    for (letter, pos) in placed.letter_positions() {
      match self.board.get(pos) {
        None => {
          return Err(
            XWordError::Internal(format!(
              "Position {pos} is out of bounds for '{}'",
              placed.text()
            ))
            .into(),
          );
        }
        Some(Some(existing)) if *existing != letter => {
          return Err(
            XWordError::Internal(format!(
              "Conflicting letter assignment at position {pos}: {letter} vs {existing}"
            ))
            .into(),
          );
        }
        Some(_) => {}
      }
    }

    for (letter, pos) in placed.letter_positions() {
      if let Some(cell) = self.board.get_mut(pos) {
        *cell = Some(letter);
      }
    }
    self.placed.push(placed);
    Ok(())
  }
}

/// Runs one attempt: shuffles the pool, puts the longest words first, then
/// makes `config.spins` passes trying every word that is not yet placed.
pub fn run_attempt<R: Rng + ?Sized>(
  config: &BuilderConfig,
  candidates: &[Word],
  rng: &mut R,
) -> XWordResult<Attempt> {
  let mut pool: Vec<&Word> = candidates.iter().collect();
  pool.shuffle(rng);
  pool.sort_by_key(|word| Reverse(word.len()));

  let mut attempt = Attempt::new(config.cols, config.rows);
  let mut is_placed = vec![false; pool.len()];
  for _ in 0..config.spins {
    for (idx, word) in pool.iter().enumerate() {
      if is_placed[idx] {
        continue;
      }
      is_placed[idx] = attempt.fit_and_add(word, config.max_loops, rng)?;
      if !is_placed[idx] {
        trace!("No room for '{}' yet", word.text());
      }
    }
  }

  Ok(attempt)
}

/// Generates a crossword from a pool of candidate words, keeping the attempt
/// that placed the most words.
#[derive(Debug)]
pub struct CrosswordBuilder {
  config: BuilderConfig,
  candidates: Vec<Word>,
  rng: StdRng,
  best: Solution,
  attempts: u64,
}

impl CrosswordBuilder {
  /// Normalizes every (text, clue) pair, rejecting the whole list if any text
  /// is empty.
  pub fn new<T, C>(
    config: BuilderConfig,
    words: impl IntoIterator<Item = (T, C)>,
  ) -> XWordResult<Self>
  where
    T: AsRef<str>,
    C: Into<String>,
  {
    Self::from_words(config, Self::normalize(words)?, None)
  }

  pub fn with_seed<T, C>(
    config: BuilderConfig,
    words: impl IntoIterator<Item = (T, C)>,
    seed: u64,
  ) -> XWordResult<Self>
  where
    T: AsRef<str>,
    C: Into<String>,
  {
    Self::from_words(config, Self::normalize(words)?, Some(seed))
  }

  /// Builds from already-normalized words. Without a seed the generator is
  /// seeded from the OS.
  pub fn from_words(
    config: BuilderConfig,
    candidates: Vec<Word>,
    seed: Option<u64>,
  ) -> XWordResult<Self> {
    config.validate()?;
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let best = Solution::new(
      Attempt::new(config.cols, config.rows),
      config.empty,
      &mut rng,
    );
    Ok(Self { config, candidates, rng, best, attempts: 0 })
  }

  fn normalize<T, C>(words: impl IntoIterator<Item = (T, C)>) -> XWordResult<Vec<Word>>
  where
    T: AsRef<str>,
    C: Into<String>,
  {
    words
      .into_iter()
      .map(|(text, clue)| Word::new(text.as_ref(), clue))
      .collect()
  }

  /// Runs attempts until the time budget is spent, always at least one. The
  /// best result only ever gets replaced by one that placed strictly more
  /// words.
  pub fn compute(&mut self) -> XWordResult {
    let budget = self.config.budget();
    let start = Instant::now();
    let mut count = 0u64;

    while count == 0 || start.elapsed() < budget {
      let attempt = run_attempt(&self.config, &self.candidates, &mut self.rng)?;
      count += 1;
      self.attempts += 1;
      debug!(
        "Attempt {} placed {}/{} words",
        self.attempts,
        attempt.placed().len(),
        self.candidates.len()
      );

      if attempt.placed().len() > self.best.placed().len() {
        info!(
          "Attempt {} is the new best with {} words",
          self.attempts,
          attempt.placed().len()
        );
        self.best = Solution::new(attempt, self.config.empty, &mut self.rng);
      }
    }

    info!(
      "Ran {count} attempts in {:.3}s, best placed {}/{} words",
      start.elapsed().as_secs_f64(),
      self.best.placed().len(),
      self.candidates.len()
    );
    Ok(())
  }

  pub fn config(&self) -> &BuilderConfig {
    &self.config
  }

  /// Total attempts run across every `compute` call.
  pub fn attempts(&self) -> u64 {
    self.attempts
  }

  pub fn candidates(&self) -> &[Word] {
    &self.candidates
  }

  pub fn board(&self) -> &Board {
    self.best.board()
  }

  /// Placed words in placement order.
  pub fn placed_words(&self) -> &[PlacedWord] {
    self.best.placed()
  }

  /// Placed words in clue-number order.
  pub fn numbered_words(&self) -> &[NumberedWord] {
    self.best.numbered()
  }

  /// Candidates that did not make it onto the grid.
  pub fn unplaced_words(&self) -> Vec<&Word> {
    let mut placed: Vec<&Word> = self.placed_words().iter().map(|word| word.word()).collect();
    self
      .candidates
      .iter()
      .filter(|candidate| match placed.iter().position(|word| word == candidate) {
        Some(idx) => {
          placed.swap_remove(idx);
          false
        }
        None => true,
      })
      .collect()
  }

  pub fn solution(&self) -> String {
    self.best.solution()
  }

  pub fn puzzle(&self) -> String {
    self.best.puzzle()
  }

  pub fn word_find(&self) -> String {
    self.best.word_find()
  }

  pub fn word_bank(&self) -> String {
    self.best.word_bank()
  }

  pub fn legend(&self) -> String {
    self.best.legend()
  }
}
