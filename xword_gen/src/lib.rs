#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod builder;
pub mod config;
pub mod encoding;
pub mod fit;
pub mod render;
pub mod word;
pub mod word_list;

#[cfg(test)]
mod testing;
