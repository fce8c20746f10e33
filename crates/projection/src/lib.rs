//! List projection: turns a [`ConfigModel`](envfile::ConfigModel) into the
//! flat sequence of rows the editor navigates and the renderer draws.
//!
//! The projection is a pure function of model state. It is recomputed from
//! scratch on every frame and never mutates the model.

mod glyphs;
mod project;
mod row;

pub use glyphs::Glyphs;
pub use project::{mark_cursor, project, project_with, row_position};
pub use row::{DisplayRow, Marker};
