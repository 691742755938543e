
use super::error::StackError;
use super::structure::IntegerStack;

use std::io::Write;

/// A nullable reference to an [`IntegerStack`].
///
/// A handle is either live, in which case it exclusively owns its
/// stack, or null, in which case every operation reports
/// [`StackError::NullHandle`] naming the operation that was attempted.
/// Freeing a live handle releases the stack and leaves the handle
/// null; freeing a null handle does nothing.
#[derive(Clone, Debug, Default)]
pub struct StackHandle {
  stack: Option<IntegerStack>,
}

impl StackHandle {
  /// A live handle owning a new, empty stack.
  pub fn new() -> Self {
    Self { stack: Some(IntegerStack::new()) }
  }

  /// A handle which refers to nothing.
  pub fn null() -> Self {
    Self { stack: None }
  }

  pub fn is_null(&self) -> bool {
    self.stack.is_none()
  }

  /// Releases the owned stack, if any.
  pub fn free(&mut self) {
    if self.stack.take().is_some() {
      tracing::trace!("freed integer stack");
    }
  }

  pub fn get(&self, operation: &'static str) -> Result<&IntegerStack, StackError> {
    self.stack.as_ref().ok_or(StackError::NullHandle { operation })
  }

  pub fn get_mut(&mut self, operation: &'static str) -> Result<&mut IntegerStack, StackError> {
    self.stack.as_mut().ok_or(StackError::NullHandle { operation })
  }

  pub fn is_empty(&self) -> Result<bool, StackError> {
    Ok(self.get("isEmpty")?.is_empty())
  }

  pub fn size(&self) -> Result<usize, StackError> {
    Ok(self.get("size")?.len())
  }

  pub fn peek(&self) -> Result<i64, StackError> {
    self.get("peek")?.peek()
  }

  pub fn push(&mut self, element: i64) -> Result<(), StackError> {
    self.get_mut("push")?.push(element);
    Ok(())
  }

  pub fn pop(&mut self) -> Result<i64, StackError> {
    self.get_mut("pop")?.pop()
  }

  pub fn pop_all(&mut self) -> Result<(), StackError> {
    self.get_mut("popAll")?.pop_all();
    Ok(())
  }

  /// Prints the stack according to [`IntegerStack::print`]. Null
  /// handles are reported before anything is written.
  pub fn print(&self, out: &mut impl Write) -> crate::error::Result<()> {
    self.get("printIntegerStack")?.print(out)?;
    Ok(())
  }

  /// Compares two stacks. Fails if either handle is null.
  pub fn equals(&self, other: &StackHandle) -> Result<bool, StackError> {
    let left = self.get("equals")?;
    let right = other.get("equals")?;
    Ok(left.equals(right))
  }
}

impl From<IntegerStack> for StackHandle {
  fn from(stack: IntegerStack) -> Self {
    Self { stack: Some(stack) }
  }
}
