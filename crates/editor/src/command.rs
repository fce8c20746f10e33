//! Inputs to and outputs from the controller.

/// A user or environment event routed to [`State::handle`](crate::State::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor one row up.
    Up,
    /// Move the cursor one row down.
    Down,
    /// Jump to the first row.
    Top,
    /// Jump to the last row.
    Bottom,
    /// Move up by the given number of rows.
    PageUp(usize),
    /// Move down by the given number of rows.
    PageDown(usize),
    /// Toggle the group under the cursor, or select the value under it.
    Toggle,
    /// Write the file.
    Save,
    /// Quit, asking first when there are unsaved changes.
    Quit,
    /// Like [`Command::Quit`]; answers an open quit prompt with "don't save".
    ForceQuit,
    /// Prompt answer: yes.
    Yes,
    /// Prompt answer: no.
    No,
    /// Prompt answer: cancel.
    Cancel,
    /// Reload prompt answer: take the file from disk.
    Reload,
    /// Reload prompt answer: keep the editor's state.
    Keep,
    /// The file changed on disk.
    FileChanged,
}

/// Side effect the caller must perform after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do beyond redrawing.
    None,
    /// Write the document, then report back through `State::saved`.
    Save,
    /// Re-read the file, then report back through `State::reloaded`.
    Reload,
    /// Exit the event loop.
    Quit,
    /// Write the document and exit if that succeeds.
    SaveAndQuit,
}

/// A modal question shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Save changes before quitting?
    Quit,
    /// The file changed on disk; reload it or keep the editor's changes?
    Reload,
}
