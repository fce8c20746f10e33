//! Key bindings: crossterm key events to editor commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use editor::{Command, Prompt};

/// One-line help shown in the footer when nothing else is.
pub const HELP: &str =
    "↑/↓/j/k: Navigate | Space: Toggle/Select | Ctrl+S: Save | q/Ctrl+C: Quit";

/// Footer text for an open prompt.
pub fn prompt_text(prompt: Prompt) -> &'static str {
    match prompt {
        Prompt::Quit => "Save changes before quitting? ([Y]es/[N]o/[C]ancel)",
        Prompt::Reload => {
            "File changed externally. [R]eload (lose editor changes) / [K]eep editor changes?"
        }
    }
}

/// Map a key press to a command. `page` is the number of rows a page key moves.
pub fn command_for(key: KeyEvent, prompt: Option<Prompt>, page: usize) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Command::ForceQuit);
    }
    match prompt {
        Some(Prompt::Quit) => match key.code {
            KeyCode::Char('y' | 'Y') => Some(Command::Yes),
            KeyCode::Char('n' | 'N') => Some(Command::No),
            KeyCode::Char('c' | 'C') | KeyCode::Esc => Some(Command::Cancel),
            _ => None,
        },
        Some(Prompt::Reload) => match key.code {
            KeyCode::Char('r' | 'R') => Some(Command::Reload),
            KeyCode::Char('k' | 'K') | KeyCode::Esc => Some(Command::Keep),
            _ => None,
        },
        None if ctrl => match key.code {
            KeyCode::Char('s') => Some(Command::Save),
            KeyCode::Char('d') => Some(Command::PageDown(page / 2)),
            KeyCode::Char('u') => Some(Command::PageUp(page / 2)),
            _ => None,
        },
        None => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Command::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::Down),
            KeyCode::Home | KeyCode::Char('g') => Some(Command::Top),
            KeyCode::End | KeyCode::Char('G') => Some(Command::Bottom),
            KeyCode::PageUp => Some(Command::PageUp(page)),
            KeyCode::PageDown => Some(Command::PageDown(page)),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Toggle),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(command_for(key(KeyCode::Char('j')), None, 10), Some(Command::Down));
        assert_eq!(command_for(key(KeyCode::Up), None, 10), Some(Command::Up));
        assert_eq!(command_for(key(KeyCode::PageDown), None, 10), Some(Command::PageDown(10)));
        assert_eq!(command_for(ctrl('u'), None, 10), Some(Command::PageUp(5)));
        assert_eq!(command_for(key(KeyCode::Char(' ')), None, 10), Some(Command::Toggle));
        assert_eq!(command_for(ctrl('s'), None, 10), Some(Command::Save));
        assert_eq!(command_for(key(KeyCode::Char('x')), None, 10), None);
    }

    #[test]
    fn prompt_keys_shadow_navigation() {
        let reload = Some(Prompt::Reload);
        assert_eq!(command_for(key(KeyCode::Char('k')), reload, 10), Some(Command::Keep));
        assert_eq!(command_for(key(KeyCode::Char('j')), reload, 10), None);

        let quit = Some(Prompt::Quit);
        assert_eq!(command_for(key(KeyCode::Char('Y')), quit, 10), Some(Command::Yes));
        assert_eq!(command_for(key(KeyCode::Esc), quit, 10), Some(Command::Cancel));
        assert_eq!(command_for(key(KeyCode::Char('q')), quit, 10), None);
    }

    #[test]
    fn ctrl_c_always_quits() {
        for prompt in [None, Some(Prompt::Quit), Some(Prompt::Reload)] {
            assert_eq!(command_for(ctrl('c'), prompt, 1), Some(Command::ForceQuit));
        }
    }
}
