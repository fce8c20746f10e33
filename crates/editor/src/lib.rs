//! Controller for the dotenv editor.
//!
//! [`State`] turns [`Command`]s into model mutations and asks the caller to
//! perform side effects through [`Effect`]. It never touches the filesystem.

mod command;
mod state;
mod transition;

pub use command::{Command, Effect, Prompt};
pub use state::State;
pub use transition::{activate, deactivate, select, toggle_group};
