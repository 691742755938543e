
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StackError {
  #[error("IntegerStack Error: {operation}() called on NULL IntegerStack reference")]
  NullHandle {
    operation: &'static str,
  },
  #[error("Not enough stack elements, expected at least {expected} but found {actual}.")]
  NotEnoughElements {
    expected: usize,
    actual: usize,
  },
}
