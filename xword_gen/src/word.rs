use std::fmt::Display;

use bitcode::{Decode, Encode};
use util::{
  error::{XWordError, XWordResult},
  pos::{Diff, Pos},
};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Encode, Decode)]
pub enum Orientation {
  Across,
  Down,
}

impl Orientation {
  pub const BOTH: [Orientation; 2] = [Orientation::Across, Orientation::Down];

  /// Step between consecutive letters of a word laid out this way.
  pub const fn step(&self) -> Diff {
    match self {
      Orientation::Across => Diff::DX,
      Orientation::Down => Diff::DY,
    }
  }

  pub const fn other(&self) -> Self {
    match self {
      Orientation::Across => Orientation::Down,
      Orientation::Down => Orientation::Across,
    }
  }
}

impl Display for Orientation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Orientation::Across => "across",
        Orientation::Down => "down",
      }
    )
  }
}

/// A candidate entry before it has been positioned on a grid.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Encode, Decode)]
pub struct Word {
  text: String,
  letters: Vec<char>,
  clue: String,
}

impl Word {
  /// Lowercases `text` and strips every whitespace character from it.
  pub fn new(text: &str, clue: impl Into<String>) -> XWordResult<Self> {
    let text: String = text
      .chars()
      .filter(|c| !c.is_whitespace())
      .flat_map(char::to_lowercase)
      .collect();
    if text.is_empty() {
      return Err(XWordError::InvalidInput("Word is empty after normalization".to_owned()).into());
    }

    let letters = text.chars().collect();
    Ok(Self { text, letters, clue: clue.into() })
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn clue(&self) -> &str {
    &self.clue
  }

  pub fn letters(&self) -> &[char] {
    &self.letters
  }

  /// Number of letters, not bytes.
  pub fn len(&self) -> usize {
    self.letters.len()
  }

  pub fn is_empty(&self) -> bool {
    self.letters.is_empty()
  }

  pub fn place(self, placement: Placement) -> PlacedWord {
    PlacedWord { word: self, placement }
  }
}

/// Where a word starts and which way it runs.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Encode, Decode)]
pub struct Placement {
  pub pos: Pos,
  pub orientation: Orientation,
}

impl Placement {
  pub fn new(pos: Pos, orientation: Orientation) -> Self {
    Self { pos, orientation }
  }

  /// 1-based column of the first letter.
  pub fn col(&self) -> u32 {
    (self.pos.x + 1) as u32
  }

  /// 1-based row of the first letter.
  pub fn row(&self) -> u32 {
    (self.pos.y + 1) as u32
  }

  /// Column plus row, the key clue numbering orders by.
  pub fn anchor_key(&self) -> u32 {
    self.col() + self.row()
  }

  /// Positions covered by `len` letters from this anchor.
  pub fn cells(&self, len: usize) -> impl Iterator<Item = Pos> {
    let Placement { pos, orientation } = *self;
    (0..len as i32).map(move |idx| pos + idx * orientation.step())
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct PlacedWord {
  word: Word,
  placement: Placement,
}

impl PlacedWord {
  pub fn word(&self) -> &Word {
    &self.word
  }

  pub fn text(&self) -> &str {
    self.word.text()
  }

  pub fn clue(&self) -> &str {
    self.word.clue()
  }

  pub fn placement(&self) -> Placement {
    self.placement
  }

  pub fn col(&self) -> u32 {
    self.placement.col()
  }

  pub fn row(&self) -> u32 {
    self.placement.row()
  }

  pub fn orientation(&self) -> Orientation {
    self.placement.orientation
  }

  pub fn letter_positions(&self) -> impl Iterator<Item = (char, Pos)> + '_ {
    self
      .word
      .letters()
      .iter()
      .cloned()
      .zip(self.placement.cells(self.word.len()))
  }
}

/// A placed word together with the clue number the numbering pass gave it.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct NumberedWord {
  pub number: u32,
  pub placed: PlacedWord,
}

impl Display for NumberedWord {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}. ({},{}) {}: {}",
      self.number,
      self.placed.col(),
      self.placed.row(),
      self.placed.orientation(),
      self.placed.clue()
    )
  }
}
