//! Input source selection and reading.

mod reader;

pub use reader::{InputReader, InputSource};
