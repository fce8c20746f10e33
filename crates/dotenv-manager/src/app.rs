//! The terminal event loop.

use std::{
    io::{self, Stdout},
    path::Path,
    time::Duration,
};

use crossbeam_channel::Receiver;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use editor::{Command, Effect, State};
use envfile::Document;
use logging::fmt::RenderedLog;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{Level, debug, info};

use crate::{
    error::{Error, Result},
    keys, render,
    theme::Theme,
    watch::FileWatcher,
};

/// Terminal type the app draws to.
type Term = Terminal<CrosstermBackend<Stdout>>;

/// Editor state plus everything the loop needs around it.
pub struct App {
    /// Controller state.
    state: State,
    /// Resolved styles.
    theme: Theme,
    /// Text of the file as last read or written by us.
    synced: String,
    /// External change notifications, if enabled.
    watcher: Option<FileWatcher>,
    /// Warnings and errors forwarded from tracing.
    logs: Receiver<RenderedLog>,
    /// First visible list row.
    scroll: usize,
    /// Input poll timeout.
    tick: Duration,
}

impl App {
    /// Build an app around a parsed file whose on-disk text is `synced`.
    pub fn new(
        state: State,
        theme: Theme,
        synced: String,
        watcher: Option<FileWatcher>,
        logs: Receiver<RenderedLog>,
        tick: Duration,
    ) -> Self {
        Self {
            state,
            theme,
            synced,
            watcher,
            logs,
            scroll: 0,
            tick,
        }
    }

    /// Run until the user quits. Returns the last status message.
    pub fn run(mut self) -> Result<Option<String>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ignored = disable_raw_mode();
            return Err(err.into());
        }

        let result = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(Error::from)
            .and_then(|mut terminal| {
                let res = self.event_loop(&mut terminal);
                let _ignored = terminal.show_cursor();
                res
            });

        let _ignored = disable_raw_mode();
        let _ignored = execute!(io::stdout(), LeaveAlternateScreen);
        result.map(|()| self.state.status().map(str::to_string))
    }

    /// Draw, wait for input, apply; until the state says we are done.
    fn event_loop(&mut self, terminal: &mut Term) -> Result<()> {
        while !self.state.is_quitting() {
            terminal.draw(|f| render::draw(f, &self.state, &self.theme, &mut self.scroll))?;

            if event::poll(self.tick)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                let page = terminal.size()?.height.saturating_sub(2).max(1) as usize;
                if let Some(cmd) = keys::command_for(key, self.state.prompt(), page) {
                    debug!(?cmd, "key");
                    self.dispatch(cmd);
                }
            }

            self.poll_file();
            self.poll_logs();
        }
        Ok(())
    }

    /// Hand a command to the state and carry out what it asks for.
    fn dispatch(&mut self, cmd: Command) {
        let effect = self.state.handle(cmd);
        self.perform(effect);
    }

    /// Carry out a side effect requested by the state.
    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::None | Effect::Quit => {}
            Effect::Save | Effect::SaveAndQuit => {
                let path = self.state.path().to_path_buf();
                let result = envfile::save_to_path(&path, self.state.document()).map(|text| {
                    self.synced = text;
                });
                self.state.saved(result);
            }
            Effect::Reload => {
                let path = self.state.path().to_path_buf();
                match read_document(&path) {
                    Ok((text, doc)) => {
                        info!(path = %path.display(), "reloaded");
                        self.synced = text;
                        self.state.reloaded(doc);
                    }
                    Err(err) => self.state.reload_failed(err),
                }
            }
        }
    }

    /// Turn watcher events into [`Command::FileChanged`] when the content
    /// differs from what we last read or wrote.
    fn poll_file(&mut self) {
        let Some(watcher) = &self.watcher else {
            return;
        };
        if !watcher.changed() {
            return;
        }
        match envfile::read_text(self.state.path()) {
            Ok(text) if text == self.synced => debug!("own write; ignoring"),
            Ok(_) => self.dispatch(Command::FileChanged),
            // Mid-replace; the next event will catch the new file.
            Err(err) => debug!(%err, "file unreadable after change"),
        }
    }

    /// Show forwarded warnings and errors in the status line.
    fn poll_logs(&mut self) {
        for log in self.logs.try_iter() {
            if log.level == Level::ERROR {
                self.state.set_error(&log.message);
            } else {
                self.state.set_status(log.message);
            }
        }
    }
}

/// Read and parse the file at `path`.
pub fn read_document(path: &Path) -> envfile::Result<(String, Document)> {
    let text = envfile::read_text(path)?;
    let doc = Document::parse(&text);
    Ok((text, doc))
}
