use std::cmp::Reverse;

use itertools::iproduct;
use rand::{seq::SliceRandom, Rng};
use util::{grid::Grid, pos::Pos};

use crate::word::{Orientation, Placement, Word};

/// Grid cells hold the letter written there, or `None` when nothing is.
pub type Board = Grid<Option<char>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
  pub placement: Placement,
  /// 0 until scored. See `check_fit_score`.
  pub score: u32,
}

impl Candidate {
  pub fn anchor_key(&self) -> u32 {
    self.placement.anchor_key()
  }
}

/// Cells beyond the edge of the board count as clear.
fn is_clear(board: &Board, pos: Pos) -> bool {
  board.get(pos).is_none_or(|cell| cell.is_none())
}

/// Proposes an anchor for every way one of `word`'s letters could land on a
/// matching letter already on the board, keeping only spans that stay inside
/// the board.
pub fn suggest_coords(board: &Board, word: &Word) -> Vec<Candidate> {
  let len = word.len() as i32;
  iproduct!(word.letters().iter().enumerate(), board.positions())
    .filter(|&((_, &letter), pos)| board.get(pos) == Some(&Some(letter)))
    .flat_map(|((offset, _), pos)| {
      [Orientation::Down, Orientation::Across]
        .into_iter()
        .map(move |orientation| Placement::new(pos - offset as i32 * orientation.step(), orientation))
    })
    .filter(|placement| {
      let end = placement.pos + (len - 1) * placement.orientation.step();
      board.in_bounds(placement.pos) && board.in_bounds(end)
    })
    .map(|placement| Candidate { placement, score: 0 })
    .collect()
}

/// Scores `word` laid down at `placement`: 0 means it does not fit, 1 means it
/// fits without touching anything, and each letter it shares with a word
/// already on the board adds 1.
///
/// A letter that is not a crossing must have clear cells on both sides of it,
/// a crossing must not already have letters before or after it along this
/// word's line, and the cells just before the first letter and just after the
/// last must be clear, so words never run alongside, into or over each other.
pub fn check_fit_score(board: &Board, word: &Word, placement: Placement) -> u32 {
  let step = placement.orientation.step();
  let side = step.perpendicular();
  let last = word.len().saturating_sub(1);

  let mut score = 1;
  for (idx, (&letter, pos)) in word
    .letters()
    .iter()
    .zip(placement.cells(word.len()))
    .enumerate()
  {
    match board.get(pos) {
      None => return 0,
      Some(Some(existing)) if *existing == letter => {
        // The letter must belong to a word running across this one. Letters
        // on either side along this line mean it sits in a parallel word,
        // which this one would swallow.
        if !is_clear(board, pos + step) || !is_clear(board, pos - step) {
          return 0;
        }
        score += 1;
      }
      Some(Some(_)) => return 0,
      Some(None) => {
        if !is_clear(board, pos + side) || !is_clear(board, pos - side) {
          return 0;
        }
      }
    }

    if idx == 0 && !is_clear(board, pos - step) {
      return 0;
    }
    if idx == last && !is_clear(board, pos + step) {
      return 0;
    }
  }

  score
}

/// Scores every candidate, drops the ones that do not fit, and orders the rest
/// best first. Equal scores come out in random order.
pub fn sort_coords<R: Rng + ?Sized>(
  board: &Board,
  word: &Word,
  candidates: Vec<Candidate>,
  rng: &mut R,
) -> Vec<Candidate> {
  let mut scored: Vec<_> = candidates
    .into_iter()
    .map(|candidate| Candidate {
      score: check_fit_score(board, word, candidate.placement),
      ..candidate
    })
    .filter(|candidate| candidate.score > 0)
    .collect();
  scored.shuffle(rng);
  scored.sort_by_key(|candidate| Reverse(candidate.score));
  scored
}
