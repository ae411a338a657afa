#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;

use std::{
  fs::File,
  io::{BufRead, BufReader, Write},
  path::Path,
  process::ExitCode,
};

use args::{Args, View};
use clap::Parser;
use log::{error, info};
use util::{error::XWordResult, time::time_fn};
use xword_gen::{
  builder::CrosswordBuilder,
  encoding::PuzzleEncoding,
  word::Word,
  word_list::{default_words, parse_word_list},
};

fn load_words(path: Option<&Path>) -> XWordResult<Vec<Word>> {
  match path {
    Some(path) => parse_word_list(
      BufReader::new(File::open(path)?)
        .lines()
        .collect::<Result<Vec<_>, _>>()?,
    ),
    None => default_words(),
  }
}

fn print_view(builder: &CrosswordBuilder, view: View) {
  match view {
    View::Solution => print!("{}", builder.solution()),
    View::Puzzle => print!("{}", builder.puzzle()),
    View::WordFind => print!("{}", builder.word_find()),
    View::WordBank => print!("{}", builder.word_bank()),
    View::Legend => print!("{}", builder.legend()),
    View::All => {
      for (title, view) in [
        ("Solution", View::Solution),
        ("Puzzle", View::Puzzle),
        ("Word find", View::WordFind),
        ("Word bank", View::WordBank),
        ("Clues", View::Legend),
      ] {
        println!("== {title}");
        print_view(builder, view);
        println!();
      }
    }
  }
}

fn save_puzzle(builder: &CrosswordBuilder, path: &Path) -> XWordResult {
  let mut file = File::create(path)?;
  file.write_all(&PuzzleEncoding::from(builder).encode())?;
  Ok(())
}

fn run(args: Args) -> XWordResult {
  let words = load_words(args.words.as_deref())?;
  let mut builder = CrosswordBuilder::from_words(args.builder_config(), words, args.seed)?;

  let (time, result) = time_fn(|| builder.compute());
  result?;
  info!(
    "Placed {}/{} words in {} attempts, took {}s",
    builder.placed_words().len(),
    builder.candidates().len(),
    builder.attempts(),
    time.as_secs_f32()
  );
  for word in builder.unplaced_words() {
    info!("Could not place '{}'", word.text());
  }

  print_view(&builder, args.view);

  if let Some(path) = &args.save {
    save_puzzle(&builder, path)?;
  }
  Ok(())
}

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  if let Err(err) = run(Args::parse()) {
    error!("{err}");
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  }
}
