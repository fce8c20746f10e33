//! Drawing the editor: header bar, scrolling row list, footer.

use editor::State;
use projection::{DisplayRow, Glyphs};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{keys, theme::Theme};

/// Application title shown in the header bar.
const TITLE: &str = "dotenv-manager";

/// Indent in front of value markers.
const VALUE_INDENT: &str = "   ";

/// Status messages starting with this are drawn in the error style.
const ERROR_PREFIX: &str = "Error:";

/// Draw one frame. `scroll` is the first visible row and is adjusted to keep
/// the cursor in view.
pub fn draw(frame: &mut Frame<'_>, state: &State, theme: &Theme, scroll: &mut usize) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(header_line(state, theme, header.width)).style(theme.header),
        header,
    );
    draw_list(frame, body, state, theme, scroll);
    frame.render_widget(
        Paragraph::new(footer_line(state, theme)).style(theme.footer),
        footer,
    );
}

/// Draw the visible window of rows.
fn draw_list(frame: &mut Frame<'_>, area: Rect, state: &State, theme: &Theme, scroll: &mut usize) {
    let rows = state.rows();
    *scroll = scroll_for(state.cursor(), *scroll, area.height as usize);
    let lines: Vec<Line<'_>> = rows
        .iter()
        .skip(*scroll)
        .take(area.height as usize)
        .map(|row| row_line(row, state.glyphs(), theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// First visible row so that `cursor` lies inside a window of `height` rows.
pub fn scroll_for(cursor: usize, scroll: usize, height: usize) -> usize {
    if height == 0 {
        return scroll;
    }
    if cursor < scroll {
        cursor
    } else if cursor >= scroll + height {
        cursor + 1 - height
    } else {
        scroll
    }
}

/// Title on the left, file name and modified badge on the right.
pub fn header_line<'a>(state: &'a State, theme: &Theme, width: u16) -> Line<'a> {
    let file = Span::raw(format!("File: {}", state.path().display()));
    let badge = if state.is_modified() {
        Span::styled(" [MODIFIED]", theme.modified)
    } else {
        Span::raw("")
    };
    let used = TITLE.len() + file.width() + badge.width() + 2;
    let gap = (width as usize).saturating_sub(used).max(1);
    Line::from(vec![
        Span::raw(" "),
        Span::raw(TITLE),
        Span::raw(" ".repeat(gap)),
        file,
        badge,
        Span::raw(" "),
    ])
}

/// Prompt, else status, else help.
pub fn footer_line<'a>(state: &'a State, theme: &Theme) -> Line<'a> {
    if let Some(prompt) = state.prompt() {
        return Line::from(Span::styled(keys::prompt_text(prompt), theme.prompt));
    }
    match state.status() {
        Some(msg) if msg.starts_with(ERROR_PREFIX) => Line::from(Span::styled(msg, theme.error)),
        Some(msg) => Line::from(Span::styled(msg, theme.status)),
        None => Line::from(keys::HELP),
    }
}

/// One list row: pointer, marker prefix, then the key or value.
pub fn row_line<'a>(row: &'a DisplayRow, glyphs: &'a Glyphs, theme: &Theme) -> Line<'a> {
    let (line_style, text_style) = row_styles(row, theme);
    let pointer = if row.is_cursor {
        Span::styled(glyphs.pointer.as_str(), theme.focused)
    } else {
        Span::raw(" ".repeat(glyphs.pointer.chars().count()))
    };

    let mut marker_style = line_style;
    if row.is_selected && !row.is_disabled {
        marker_style = marker_style.fg(theme.accent);
    }
    let indent = if row.is_header { "" } else { VALUE_INDENT };

    Line::from(vec![
        pointer,
        Span::styled(indent, line_style),
        Span::styled(row.marker.glyph(glyphs), marker_style),
        Span::styled(" ", line_style),
        Span::styled(row.label.as_str(), text_style),
    ])
}

/// Styles for the row as a whole and for its label.
fn row_styles(row: &DisplayRow, theme: &Theme) -> (Style, Style) {
    if row.is_cursor {
        let text = if row.is_header {
            theme.focused.add_modifier(Modifier::BOLD)
        } else {
            theme.focused
        };
        return (theme.focused, text);
    }
    let line = if row.is_disabled {
        theme.disabled
    } else {
        theme.normal
    };
    let text = if row.is_header {
        line.patch(theme.key)
    } else if row.is_empty_placeholder && row.is_disabled {
        theme.empty_value.patch(theme.disabled).add_modifier(Modifier::DIM)
    } else if row.is_empty_placeholder {
        theme.empty_value
    } else {
        line
    };
    (line, text)
}
