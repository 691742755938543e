
use super::error::StackError;

use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

/// Length of the buffer owned by a freshly-constructed stack.
pub const INITIAL_CAPACITY: usize = 1;

/// LIFO stack of integers. Implemented internally as an owned buffer
/// whose "top" is at position `count - 1`, allowing for constant-time
/// pops and amortized constant-time pushes.
///
/// The buffer doubles in length whenever a push finds it full, and it
/// never shrinks. Slots at or above `count` are always zero.
#[derive(Clone, Debug)]
pub struct IntegerStack {
  items: Box<[i64]>,
  count: usize,
}

impl IntegerStack {

  pub fn new() -> Self {
    Self::default()
  }

  /// The number of elements on the stack.
  pub fn len(&self) -> usize {
    self.count
  }

  pub fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// The length of the underlying buffer. Always at least
  /// [`INITIAL_CAPACITY`], and never smaller than [`IntegerStack::len`].
  pub fn capacity(&self) -> usize {
    self.items.len()
  }

  fn live(&self) -> &[i64] {
    &self.items[..self.count]
  }

  fn empty_stack_error(&self) -> StackError {
    StackError::NotEnoughElements { expected: 1, actual: self.count }
  }

  /// Returns the top of the stack without removing it, or an
  /// appropriate [`StackError`] if the stack is empty.
  pub fn peek(&self) -> Result<i64, StackError> {
    self.live().last().copied().ok_or_else(|| self.empty_stack_error())
  }

  pub fn push(&mut self, element: i64) {
    if self.count == self.capacity() {
      self.grow();
    }
    self.items[self.count] = element;
    self.count += 1;
  }

  fn grow(&mut self) {
    let old_capacity = self.capacity();
    let new_capacity = old_capacity * 2;
    let mut items = vec![0; new_capacity].into_boxed_slice();
    items[..self.count].copy_from_slice(self.live());
    self.items = items;
    tracing::debug!(old_capacity, new_capacity, "grew integer stack buffer");
  }

  /// Removes and returns the top of the stack. In case of a
  /// [`StackError`], `self` will NOT be modified.
  pub fn pop(&mut self) -> Result<i64, StackError> {
    let top = self.peek()?;
    self.count -= 1;
    self.items[self.count] = 0;
    Ok(top)
  }

  /// Removes every element. The capacity is left untouched.
  pub fn pop_all(&mut self) {
    self.items[..self.count].fill(0);
    self.count = 0;
  }

  /// Writes the elements from top to bottom, each followed by a single
  /// space, and then a newline.
  pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{self}")
  }

  /// True if both stacks hold the same elements in the same order.
  /// Capacity plays no part in the comparison.
  pub fn equals(&self, other: &IntegerStack) -> bool {
    self.count == other.count && self.live().iter().zip(other.live()).all(|(a, b)| a == b)
  }

}

impl Default for IntegerStack {

  fn default() -> Self {
    Self {
      items: vec![0; INITIAL_CAPACITY].into_boxed_slice(),
      count: 0,
    }
  }

}

impl PartialEq for IntegerStack {
  fn eq(&self, other: &Self) -> bool {
    self.equals(other)
  }
}

impl Eq for IntegerStack {}

impl Display for IntegerStack {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for element in self.live().iter().rev() {
      write!(f, "{element} ")?;
    }
    Ok(())
  }
}

/// Converts a vector to a stack, where the top of the stack is at the
/// end. The buffer is sized to the smallest power of two that holds
/// every element.
impl From<Vec<i64>> for IntegerStack {
  fn from(elements: Vec<i64>) -> Self {
    let count = elements.len();
    let mut items = elements;
    items.resize(count.max(INITIAL_CAPACITY).next_power_of_two(), 0);
    Self { items: items.into_boxed_slice(), count }
  }
}
