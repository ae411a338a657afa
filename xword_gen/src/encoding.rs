use bitcode::{Decode, Encode};
use util::error::XWordResult;

use crate::{builder::CrosswordBuilder, fit::Board, word::NumberedWord};

/// Serializable snapshot of a finished puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct PuzzleEncoding {
  pub board: Board,
  pub empty: char,
  pub entries: Vec<NumberedWord>,
}

impl PuzzleEncoding {
  pub fn encode(&self) -> Vec<u8> {
    bitcode::encode(self)
  }

  pub fn decode(bytes: &[u8]) -> XWordResult<Self> {
    Ok(bitcode::decode(bytes)?)
  }
}

impl From<&CrosswordBuilder> for PuzzleEncoding {
  fn from(builder: &CrosswordBuilder) -> Self {
    Self {
      board: builder.board().clone(),
      empty: builder.config().empty,
      entries: builder.numbered_words().to_vec(),
    }
  }
}
