
//! Line-oriented interpreter which drives a [`StackHandle`] from a
//! textual script.

use crate::error::{self, Result};
use crate::stack::StackHandle;

use thiserror::Error;

use std::io::{BufRead, Write};
use std::str::FromStr;

/// A single script instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  New,
  Free,
  Push(i64),
  Pop,
  Peek,
  Size,
  Empty,
  Clear,
  Print,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Could not parse command {text:?}: {reason}")]
pub struct CommandSyntaxError {
  text: String,
  reason: &'static str,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Line {line}: {source}")]
pub struct ParseCommandError {
  line: usize,
  #[source]
  source: CommandSyntaxError,
}

impl ParseCommandError {
  pub fn line(&self) -> usize {
    self.line
  }
}

impl FromStr for Command {
  type Err = CommandSyntaxError;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    let syntax_error = |reason| CommandSyntaxError { text: s.to_owned(), reason };
    let mut words = s.split_whitespace();
    let name = words.next().ok_or_else(|| syntax_error("empty command"))?;
    let command = match name {
      "new" => Command::New,
      "free" => Command::Free,
      "push" => {
        let arg = words.next().ok_or_else(|| syntax_error("push requires an integer"))?;
        let value = arg.parse().map_err(|_| syntax_error("invalid integer"))?;
        Command::Push(value)
      }
      "pop" => Command::Pop,
      "peek" => Command::Peek,
      "size" => Command::Size,
      "empty" => Command::Empty,
      "clear" => Command::Clear,
      "print" => Command::Print,
      _ => return Err(syntax_error("unknown command")),
    };
    if words.next().is_some() {
      return Err(syntax_error("unexpected trailing input"));
    }
    Ok(command)
  }
}

/// Interpreter state: the handle under test.
#[derive(Debug)]
pub struct Driver {
  handle: StackHandle,
}

impl Driver {
  pub fn new() -> Self {
    Self { handle: StackHandle::new() }
  }

  pub fn handle(&self) -> &StackHandle {
    &self.handle
  }

  /// Runs every command in `input`, writing results to `out`.
  ///
  /// Stack failures (null handles, popping an empty stack) are
  /// reported inline as `error: ...` lines and do not stop the script.
  /// Malformed lines abort with a [`ParseCommandError`].
  pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    for (index, line) in input.lines().enumerate() {
      let line = line?;
      let text = line.trim();
      if text.is_empty() || text.starts_with('#') {
        continue;
      }
      let command = text.parse::<Command>()
        .map_err(|source| ParseCommandError { line: index + 1, source })?;
      tracing::trace!(?command, line = index + 1, "executing");
      if let Err(err) = self.execute(command, out) {
        match err {
          error::Error::StackError(err) => {
            tracing::debug!(%err, "stack operation failed");
            writeln!(out, "error: {err}")?;
          }
          err => return Err(err),
        }
      }
    }
    Ok(())
  }

  pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
      Command::New => {
        self.handle = StackHandle::new();
      }
      Command::Free => {
        self.handle.free();
      }
      Command::Push(value) => {
        self.handle.push(value)?;
      }
      Command::Pop => {
        let value = self.handle.pop()?;
        writeln!(out, "{value}")?;
      }
      Command::Peek => {
        let value = self.handle.peek()?;
        writeln!(out, "{value}")?;
      }
      Command::Size => {
        let size = self.handle.size()?;
        writeln!(out, "{size}")?;
      }
      Command::Empty => {
        let empty = self.handle.is_empty()?;
        writeln!(out, "{empty}")?;
      }
      Command::Clear => {
        self.handle.pop_all()?;
      }
      Command::Print => {
        self.handle.print(out)?;
      }
    }
    Ok(())
  }
}

impl Default for Driver {
  fn default() -> Self {
    Self::new()
  }
}

/// Convenience wrapper: runs a whole script on a fresh [`Driver`] and
/// returns its output.
pub fn run_script(script: &str) -> Result<String> {
  let mut out = Vec::new();
  Driver::new().run(script.as_bytes(), &mut out)?;
  Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;
  use crate::stack::StackError;

  #[test]
  fn test_parse_commands() {
    assert_eq!("push 5".parse::<Command>(), Ok(Command::Push(5)));
    assert_eq!("  push   -12 ".parse::<Command>(), Ok(Command::Push(-12)));
    assert_eq!("pop".parse::<Command>(), Ok(Command::Pop));
    assert_eq!("clear".parse::<Command>(), Ok(Command::Clear));
    assert_eq!("print".parse::<Command>(), Ok(Command::Print));
    assert!("push".parse::<Command>().is_err());
    assert!("push x".parse::<Command>().is_err());
    assert!("pop 3".parse::<Command>().is_err());
    assert!("frobnicate".parse::<Command>().is_err());
  }

  #[test]
  fn test_run_script() {
    let script = "
      # build up a stack
      push 1
      push 2
      push 3
      size
      peek
      print
      pop
      size
      empty
      clear
      empty
    ";
    assert_eq!(run_script(script).unwrap(), "3\n3\n3 2 1 \n3\n2\nfalse\ntrue\n");
  }

  #[test]
  fn test_run_script_reports_stack_errors() {
    let script = "pop\npush 4\nfree\npeek\nfree\nnew\npeek\nsize\n";
    assert_eq!(
      run_script(script).unwrap(),
      "error: Not enough stack elements, expected at least 1 but found 0.\n\
       error: IntegerStack Error: peek() called on NULL IntegerStack reference\n\
       error: Not enough stack elements, expected at least 1 but found 0.\n\
       0\n",
    );
  }

  #[test]
  fn test_run_script_parse_error() {
    let err = run_script("push 1\n\npush one\n").unwrap_err();
    let Error::ParseCommandError(err) = err else {
      panic!("Expected parse error, got {err:?}");
    };
    assert_eq!(err.line(), 3);
  }

  #[test]
  fn test_driver_handle_after_free() {
    let mut driver = Driver::new();
    let mut out = Vec::new();
    driver.run("push 1\nfree\n".as_bytes(), &mut out).unwrap();
    assert!(driver.handle().is_null());
    assert_eq!(driver.handle().size(), Err(StackError::NullHandle { operation: "size" }));
  }
}
