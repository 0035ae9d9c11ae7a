use crate::collection::LinkedDequeError;
use core::fmt::{Debug, Display, Formatter};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  // External - Std
  //
  /// See [`core::num::ParseIntError`]
  ParseIntError(core::num::ParseIntError),

  // Internal
  //
  /// See [`LinkedDequeError`]
  LinkedDequeError(LinkedDequeError),
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl From<core::num::ParseIntError> for Error {
  #[inline]
  fn from(from: core::num::ParseIntError) -> Self {
    Self::ParseIntError(from)
  }
}

impl From<LinkedDequeError> for Error {
  #[inline]
  fn from(from: LinkedDequeError) -> Self {
    Self::LinkedDequeError(from)
  }
}
