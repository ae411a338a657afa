#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashSet;

use util::{grid::Grid, pos::Pos};

use crate::{
  fit::Board,
  word::{Orientation, PlacedWord},
};

/// Builds a board from rows of text, `-` marking an empty cell.
pub fn board_from_layout(layout: &str) -> Board {
  let rows: Vec<Vec<Option<char>>> = layout
    .lines()
    .map(|line| {
      line
        .trim()
        .chars()
        .map(|c| (c != '-').then_some(c))
        .collect()
    })
    .collect();
  let width = rows.first().map_or(0, |row| row.len()) as u32;
  let height = rows.len() as u32;
  Grid::from_vec(rows.into_iter().flatten().collect(), width, height).unwrap()
}

/// Every maximal run of two or more letters on the board, in either direction.
pub fn letter_runs(board: &Board) -> HashSet<(Pos, Orientation, String)> {
  let is_letter = |pos: Pos| board.get(pos).is_some_and(|cell| cell.is_some());
  Orientation::BOTH
    .into_iter()
    .flat_map(|orientation| {
      let step = orientation.step();
      board
        .positions()
        .filter(move |&pos| is_letter(pos) && !is_letter(pos - step))
        .map(move |start| {
          let mut text = String::new();
          let mut pos = start;
          while let Some(Some(letter)) = board.get(pos) {
            text.push(*letter);
            pos += step;
          }
          (start, orientation, text)
        })
    })
    .filter(|(_, _, text)| text.chars().count() >= 2)
    .collect()
}

/// Each placed word reads off the board where it claims to be, and every
/// letter on the board belongs to some placed word.
pub fn is_consistent(board: &Board, placed: &[PlacedWord]) -> bool {
  let words_match = placed.iter().all(|word| {
    word
      .letter_positions()
      .all(|(letter, pos)| board.get(pos) == Some(&Some(letter)))
  });
  let covered: HashSet<Pos> = placed
    .iter()
    .flat_map(|word| word.letter_positions().map(|(_, pos)| pos))
    .collect();
  let all_covered = board
    .positions()
    .filter(|&pos| board.get(pos).is_some_and(|cell| cell.is_some()))
    .all(|pos| covered.contains(&pos));
  words_match && all_covered
}

/// No letters sit flush against each other except where words cross: the
/// only runs of letters on the board are the placed words themselves.
pub fn runs_are_words(board: &Board, placed: &[PlacedWord]) -> bool {
  let words: HashSet<_> = placed
    .iter()
    .filter(|word| word.word().len() >= 2)
    .map(|word| (word.placement().pos, word.orientation(), word.text().to_owned()))
    .collect();
  letter_runs(board) == words
}
