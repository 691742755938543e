
use crate::stack::StackError;
use crate::driver::ParseCommandError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  IoError(#[from] std::io::Error),
  #[error("{0}")]
  StackError(#[from] StackError),
  #[error("{0}")]
  ParseCommandError(#[from] ParseCommandError),
}
