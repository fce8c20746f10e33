//! Editing session: cursor, toggles, prompts and the effects they request.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use envfile::Document;
use projection::{DisplayRow, Glyphs, mark_cursor, project_with, row_position};
use tracing::{debug, info};

use crate::{Command, Effect, Prompt, transition};

/// Prefix marking a status message as an error.
const ERROR_PREFIX: &str = "Error:";

/// Editing session for one file.
#[derive(Debug)]
pub struct State {
    /// The document being edited.
    doc: Document,
    /// File the document came from.
    path: PathBuf,
    /// Glyphs used when projecting rows.
    glyphs: Glyphs,
    /// Row index of the cursor.
    cursor: usize,
    /// The model differs from what was last loaded or saved.
    modified: bool,
    /// One-line message shown in the footer.
    status: Option<String>,
    /// Open modal question, if any.
    prompt: Option<Prompt>,
    /// The session is ending.
    quitting: bool,
    /// The file changed on disk while the quit prompt was open.
    pending_reload: bool,
}

impl State {
    /// Start a session on a freshly loaded document.
    pub fn new(doc: Document, path: impl Into<PathBuf>) -> Self {
        Self {
            doc,
            path: path.into(),
            glyphs: Glyphs::default(),
            cursor: 0,
            modified: false,
            status: None,
            prompt: None,
            quitting: false,
            pending_reload: false,
        }
    }

    /// Use `glyphs` for projected rows.
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// The document being edited.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// File being edited.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Glyphs used for rows.
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Row index of the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// There are unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Current footer message.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Open prompt, if any.
    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    /// The session is ending.
    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Replace the footer message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Show `err` as an error in the footer.
    pub fn set_error(&mut self, err: impl Display) {
        self.status = Some(format!("{ERROR_PREFIX} {err}"));
    }

    /// Projected rows with the cursor row flagged.
    pub fn rows(&self) -> Vec<DisplayRow> {
        let mut rows = project_with(&self.doc.model, &self.glyphs);
        mark_cursor(&mut rows, self.cursor);
        rows
    }

    /// Number of rows in the list.
    fn row_count(&self) -> usize {
        project_with(&self.doc.model, &self.glyphs).len()
    }

    /// Process one command.
    pub fn handle(&mut self, cmd: Command) -> Effect {
        if let Some(prompt) = self.prompt {
            return self.handle_prompt(prompt, cmd);
        }
        match cmd {
            Command::Up => self.move_to(self.cursor.saturating_sub(1)),
            Command::Down => self.move_to(self.cursor.saturating_add(1)),
            Command::Top => self.move_to(0),
            Command::Bottom => self.move_to(usize::MAX),
            Command::PageUp(n) => self.move_to(self.cursor.saturating_sub(n)),
            Command::PageDown(n) => self.move_to(self.cursor.saturating_add(n)),
            Command::Toggle => {
                self.toggle();
                Effect::None
            }
            Command::Save => Effect::Save,
            Command::Quit | Command::ForceQuit => {
                if self.modified {
                    self.prompt = Some(Prompt::Quit);
                    Effect::None
                } else {
                    self.quitting = true;
                    Effect::Quit
                }
            }
            Command::FileChanged => {
                if self.modified {
                    info!(path = %self.path.display(), "file changed on disk with unsaved edits");
                    self.prompt = Some(Prompt::Reload);
                    Effect::None
                } else {
                    Effect::Reload
                }
            }
            Command::Yes | Command::No | Command::Cancel | Command::Reload | Command::Keep => {
                Effect::None
            }
        }
    }

    /// Commands while a prompt is open. Anything but an answer is ignored.
    fn handle_prompt(&mut self, prompt: Prompt, cmd: Command) -> Effect {
        match (prompt, cmd) {
            (Prompt::Quit, Command::Yes) => {
                self.prompt = None;
                self.quitting = true;
                Effect::SaveAndQuit
            }
            (Prompt::Quit, Command::No | Command::ForceQuit) => {
                self.prompt = None;
                self.quitting = true;
                Effect::Quit
            }
            (Prompt::Quit, Command::Cancel) => {
                self.prompt = None;
                if self.pending_reload {
                    self.pending_reload = false;
                    return self.handle(Command::FileChanged);
                }
                Effect::None
            }
            (Prompt::Quit, Command::FileChanged) => {
                debug!("file changed while the quit prompt is open");
                self.pending_reload = true;
                Effect::None
            }
            (Prompt::Reload, Command::Reload | Command::Yes) => {
                self.prompt = None;
                Effect::Reload
            }
            (Prompt::Reload, Command::Keep | Command::No | Command::Cancel) => {
                self.prompt = None;
                self.set_status("Kept editor changes; saving will overwrite the file");
                Effect::None
            }
            // A reload prompt implies unsaved edits.
            (Prompt::Reload, Command::ForceQuit) => {
                self.prompt = Some(Prompt::Quit);
                Effect::None
            }
            _ => {
                debug!(?prompt, ?cmd, "ignored while prompting");
                Effect::None
            }
        }
    }

    /// Move the cursor to `row`, clamped to the list.
    fn move_to(&mut self, row: usize) -> Effect {
        let last = self.row_count().saturating_sub(1);
        self.cursor = row.min(last);
        self.status = None;
        Effect::None
    }

    /// Apply a toggle at the cursor.
    fn toggle(&mut self) {
        let rows = self.rows();
        let Some(row) = rows.get(self.cursor) else {
            return;
        };
        let Some(group) = self.doc.model.group_at_mut(row.group_index) else {
            return;
        };
        let changed = match row.value_index {
            None => transition::toggle_group(group),
            Some(line) => transition::select(group, line),
        };
        if changed {
            debug!(
                group = group.key(),
                active = group.is_active,
                line = ?group.active_line,
                "toggled"
            );
            self.modified = true;
            self.status = None;
        }
    }

    /// Report the outcome of an [`Effect::Save`] or [`Effect::SaveAndQuit`].
    ///
    /// A failed save cancels a pending quit so the error stays visible.
    pub fn saved<E: Display>(&mut self, result: Result<(), E>) {
        match result {
            Ok(()) => {
                self.modified = false;
                self.set_status(format!("Saved {}", self.path.display()));
            }
            Err(err) => {
                self.quitting = false;
                self.set_error(err);
            }
        }
    }

    /// Install a document re-read from disk after an [`Effect::Reload`].
    ///
    /// The cursor stays on the same group and value when they still exist.
    pub fn reloaded(&mut self, doc: Document) {
        let anchor = self.rows().get(self.cursor).and_then(|row| {
            let key = self.doc.model.group_order().get(row.group_index)?.clone();
            Some((key, row.value_index))
        });
        self.doc = doc;
        self.modified = false;
        self.prompt = None;
        self.pending_reload = false;

        let rows = project_with(&self.doc.model, &self.glyphs);
        let restored = anchor.and_then(|(key, value)| {
            let group = self.doc.model.index_of(&key)?;
            row_position(&rows, group, value).or_else(|| row_position(&rows, group, None))
        });
        self.cursor = restored.unwrap_or(self.cursor).min(rows.len().saturating_sub(1));
        self.set_status(format!("Reloaded {}", self.path.display()));
    }

    /// Report a failed reload.
    pub fn reload_failed(&mut self, err: impl Display) {
        self.set_error(err);
    }
}
