//! Grouped dotenv model plus the parser and serializer that move it to and from disk.
//!
//! Every `KEY=value` line in a file, live or commented out, belongs to the
//! [`VariableGroup`] named by its key. A group is active when one of its lines
//! is live; the other lines are alternatives that can be swapped in.

mod document;
mod error;
mod fs;
mod line;
mod model;
mod parse;

pub use document::{Document, SourceLine};
pub use error::{Error, Result};
pub use fs::{read_text, save_to_path};
pub use line::{ConfigLine, LineKind, Variable};
pub use model::{ConfigModel, VariableGroup};
