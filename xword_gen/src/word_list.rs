use std::borrow::Borrow;

use util::error::{XWordError, XWordResult};

use crate::word::Word;

/// The list a fresh puzzle starts from when none is configured.
#[rustfmt::skip]
pub const DEFAULT_WORDS: [(&str, &str); 20] = [
  ("saffron", "The dried, orange yellow plant used to as dye and as a cooking spice."),
  ("pumpernickel", "Dark, sour bread made from coarse ground rye."),
  ("leaven", "An agent, such as yeast, that cause batter or dough to rise.."),
  ("coda", "Musical conclusion of a movement or composition."),
  ("paladin", "A heroic champion or paragon of chivalry."),
  ("syncopation", "Shifting the emphasis of a beat to the normally weak beat."),
  ("albatross", "A large bird of the ocean having a hooked beek and long, narrow wings."),
  ("harp", "Musical instrument with 46 or more open strings played by plucking."),
  ("piston", "A solid cylinder or disk that fits snugly in a larger cylinder and moves under pressure as in an engine."),
  ("caramel", "A smooth chery candy made from suger, butter, cream or milk with flavoring."),
  ("coral", "A rock-like deposit of organism skeletons that make up reefs."),
  ("dawn", "The time of each morning at which daylight begins."),
  ("pitch", "A resin derived from the sap of various pine trees."),
  ("fjord", "A long, narrow, deep inlet of the sea between steep slopes."),
  ("lip", "Either of two fleshy folds surrounding the mouth."),
  ("lime", "The egg-shaped citrus fruit having a green coloring and acidic juice."),
  ("mist", "A mass of fine water droplets in the air near or in contact with the ground."),
  ("plague", "A widespread affliction or calamity."),
  ("yarn", "A strand of twisted threads or a long elaborate narrative."),
  ("snicker", "A snide, slightly stifled laugh."),
];

pub fn default_words() -> XWordResult<Vec<Word>> {
  DEFAULT_WORDS
    .iter()
    .map(|&(text, clue)| Word::new(text, clue))
    .collect()
}

/// Parses one `word<TAB>clue` entry. Blank lines and `#` comments yield `None`.
fn parse_line(line: &str) -> XWordResult<Option<Word>> {
  let line = line.trim_end_matches(['\r', '\n']);
  if line.trim().is_empty() || line.trim_start().starts_with('#') {
    return Ok(None);
  }

  let (text, clue) = line
    .split_once('\t')
    .ok_or_else(|| XWordError::Parse(format!("Expected \"word<TAB>clue\", found \"{line}\"")))?;
  Word::new(text, clue.trim()).map(Some)
}

pub fn parse_word_list<S>(lines: impl IntoIterator<Item = S>) -> XWordResult<Vec<Word>>
where
  S: Borrow<str>,
{
  lines
    .into_iter()
    .enumerate()
    .filter_map(|(idx, line)| -> Option<XWordResult<Word>> {
      parse_line(line.borrow())
        .map_err(|err| XWordError::Parse(format!("Line {}: {err}", idx + 1)).into())
        .transpose()
    })
    .collect()
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;

  use super::{default_words, parse_word_list};

  #[gtest]
  fn test_default_words() {
    let words = default_words().unwrap();
    expect_that!(words.len(), eq(20));
    expect_true!(words.iter().any(|word| word.text() == "pumpernickel"));
  }

  #[gtest]
  fn test_parse() {
    let words = parse_word_list([
      "# animals",
      "cat\tFeline pet",
      "",
      "Sea Lion\tBarks on the pier ",
    ])
    .unwrap();
    expect_that!(words.len(), eq(2));
    expect_that!(words[0].text(), eq("cat"));
    expect_that!(words[0].clue(), eq("Feline pet"));
    expect_that!(words[1].text(), eq("sealion"));
    expect_that!(words[1].clue(), eq("Barks on the pier"));
  }

  #[gtest]
  fn test_missing_tab() {
    let result = parse_word_list(["cat feline pet"]);
    expect_that!(result, err(displays_as(contains_substring("Line 1"))));
  }

  #[gtest]
  fn test_blank_word() {
    let result = parse_word_list(["cat\tpet", "  \tnothing"]);
    expect_that!(result, err(displays_as(contains_substring("Line 2"))));
  }
}
