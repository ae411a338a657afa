use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug, PartialEq, Eq)]
pub enum XWordError {
  /// A caller-supplied value was rejected before any search ran.
  InvalidInput(String),
  Parse(String),
  Internal(String),
}

impl Display for XWordError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      XWordError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
      XWordError::Parse(msg) => write!(f, "Parse error: {msg}"),
      XWordError::Internal(msg) => write!(f, "Internal error: {msg}"),
    }
  }
}

impl Error for XWordError {}

pub type XWordResult<T = ()> = Result<T, Box<dyn Error>>;

/// Returns the `XWordError` carried by a boxed error, if that is what it is.
pub fn as_xword_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a XWordError> {
  err.downcast_ref::<XWordError>()
}
