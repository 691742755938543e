
mod error;
mod handle;
mod structure;

pub use error::StackError;
pub use handle::StackHandle;
pub use structure::{IntegerStack, INITIAL_CAPACITY};
