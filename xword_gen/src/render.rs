use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use util::grid::Grid;

use crate::{
  builder::Attempt,
  fit::Board,
  word::{NumberedWord, PlacedWord},
};

/// Assigns clue numbers in order of column plus row. Words starting on the
/// same square share a number.
pub fn number_words(placed: &[PlacedWord]) -> Vec<NumberedWord> {
  placed
    .iter()
    .sorted_by_key(|word| (word.placement().anchor_key(), word.row()))
    .scan(None, |state: &mut Option<(u32, _)>, word| {
      let anchor = word.placement().pos;
      let number = match *state {
        Some((number, prev)) if prev == anchor => number,
        Some((number, _)) => number + 1,
        None => 1,
      };
      *state = Some((number, anchor));
      Some(NumberedWord { number, placed: word.clone() })
    })
    .collect()
}

/// A finished attempt with everything the read-only views need precomputed,
/// so asking for the same view twice gives the same text.
#[derive(Clone, Debug)]
pub struct Solution {
  board: Board,
  placed: Vec<PlacedWord>,
  numbered: Vec<NumberedWord>,
  empty: char,
  /// Board with every empty cell replaced by a random letter.
  decoy: Grid<char>,
  bank_order: Vec<usize>,
}

impl Solution {
  pub fn new<R: Rng + ?Sized>(attempt: Attempt, empty: char, rng: &mut R) -> Self {
    let (board, placed) = attempt.into_parts();
    let numbered = number_words(&placed);
    let decoy = board.map(|cell| cell.unwrap_or_else(|| rng.random_range('a'..='z')));
    let mut bank_order: Vec<_> = (0..placed.len()).collect();
    bank_order.shuffle(rng);
    Self { board, placed, numbered, empty, decoy, bank_order }
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  pub fn placed(&self) -> &[PlacedWord] {
    &self.placed
  }

  pub fn numbered(&self) -> &[NumberedWord] {
    &self.numbered
  }

  /// The filled grid, letters and empty markers separated by spaces.
  pub fn solution(&self) -> String {
    self.board.map(|cell| cell.unwrap_or(self.empty)).to_string()
  }

  /// The grid players see: letters blanked out, each word's first square
  /// showing its clue number.
  pub fn puzzle(&self) -> String {
    let mut grid = self.board.map(|cell| match cell {
      Some(_) => " ".to_owned(),
      None => self.empty.to_string(),
    });
    for entry in &self.numbered {
      if let Some(cell) = grid.get_mut(entry.placed.placement().pos) {
        *cell = entry.number.to_string();
      }
    }
    grid.to_string()
  }

  /// The solution with every empty cell filled by a random letter.
  pub fn word_find(&self) -> String {
    self.decoy.to_string()
  }

  pub fn word_bank(&self) -> String {
    self
      .bank_order
      .iter()
      .filter_map(|&idx| self.placed.get(idx))
      .map(|word| format!("{}\n", word.text()))
      .collect()
  }

  pub fn legend(&self) -> String {
    self
      .numbered
      .iter()
      .map(|entry| format!("{entry}\n"))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use rand::{rngs::StdRng, SeedableRng};
  use util::pos::Pos;

  use crate::{
    builder::Attempt,
    word::{Orientation, Placement, Word},
  };

  use super::{number_words, Solution};

  fn attempt_with(cols: u32, rows: u32, words: &[(&str, i32, i32, Orientation)]) -> Attempt {
    let mut attempt = Attempt::new(cols, rows);
    for &(text, x, y, orientation) in words {
      attempt
        .set_word(
          Word::new(text, format!("clue for {text}")).unwrap(),
          Placement::new(Pos { x, y }, orientation),
        )
        .unwrap();
    }
    attempt
  }

  fn cat_car_dog() -> Attempt {
    // c a t - -
    // a - - - -
    // r - d o g
    attempt_with(
      5,
      3,
      &[
        ("cat", 0, 0, Orientation::Across),
        ("car", 0, 0, Orientation::Down),
        ("dog", 2, 2, Orientation::Across),
      ],
    )
  }

  #[gtest]
  fn test_numbering_shares_anchor() {
    let attempt = cat_car_dog();
    let numbered = number_words(attempt.placed());
    expect_that!(
      numbered
        .iter()
        .map(|entry| (entry.number, entry.placed.text()))
        .collect::<Vec<_>>(),
      elements_are![eq(&(1, "cat")), eq(&(1, "car")), eq(&(2, "dog"))]
    );
  }

  #[gtest]
  fn test_numbering_keeps_same_anchor_adjacent() {
    // "ax" starts at (1,3), "bee" at (2,2) and "ay" at (1,3): same column plus
    // row for all three.
    let attempt = attempt_with(
      5,
      5,
      &[
        ("ax", 0, 2, Orientation::Across),
        ("bee", 1, 1, Orientation::Across),
        ("ay", 0, 2, Orientation::Down),
      ],
    );
    let numbered = number_words(attempt.placed());
    let numbers: Vec<_> = numbered
      .iter()
      .map(|entry| (entry.placed.text(), entry.number))
      .collect();
    expect_that!(
      numbers,
      elements_are![eq(&("bee", 1)), eq(&("ax", 2)), eq(&("ay", 2))]
    );
  }

  #[gtest]
  fn test_views() {
    let solution = Solution::new(cat_car_dog(), '-', &mut StdRng::seed_from_u64(1));
    expect_that!(solution.solution().as_str(), eq("c a t - -\na - - - -\nr - d o g\n"));
    expect_that!(solution.puzzle().as_str(), eq("1     - -\n  - - - -\n  - 2    \n"));
    expect_that!(
      solution.legend().as_str(),
      eq("1. (1,1) across: clue for cat\n1. (1,1) down: clue for car\n2. (3,3) across: clue for dog\n")
    );
  }

  #[gtest]
  fn test_word_find_keeps_letters() {
    let solution = Solution::new(cat_car_dog(), '-', &mut StdRng::seed_from_u64(1));
    let rows: Vec<Vec<char>> = solution
      .word_find()
      .lines()
      .map(|line| line.split(' ').filter_map(|cell| cell.chars().next()).collect())
      .collect();
    expect_that!(rows.len(), eq(3));
    expect_true!(rows.iter().flatten().all(|c| c.is_ascii_lowercase()));
    let top: String = rows[0][..3].iter().collect();
    let bottom: String = rows[2][2..].iter().collect();
    expect_that!(top.as_str(), eq("cat"));
    expect_that!(bottom.as_str(), eq("dog"));
  }

  #[gtest]
  fn test_word_bank_lists_each_word() {
    let solution = Solution::new(cat_car_dog(), '-', &mut StdRng::seed_from_u64(9));
    let bank = solution.word_bank();
    expect_that!(
      bank.lines().collect::<Vec<_>>(),
      unordered_elements_are![eq(&"cat"), eq(&"car"), eq(&"dog")]
    );
    expect_that!(solution.word_bank(), eq(&bank));
  }

  #[gtest]
  fn test_empty_views() {
    let solution = Solution::new(Attempt::new(2, 2), '.', &mut StdRng::seed_from_u64(0));
    expect_that!(solution.solution().as_str(), eq(". .\n. .\n"));
    expect_that!(solution.puzzle().as_str(), eq(". .\n. .\n"));
    expect_that!(solution.word_bank().as_str(), eq(""));
    expect_that!(solution.legend().as_str(), eq(""));
  }
}
