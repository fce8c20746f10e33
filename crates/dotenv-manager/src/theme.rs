//! Theme colors: the serializable spec and the resolved ratatui styles.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Color names as written in the settings file.
///
/// Accepts anything `ratatui` parses: named colors (`"dark gray"`),
/// `#rrggbb`, or an ANSI index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSpec {
    /// Header bar foreground.
    pub header_fg: String,
    /// Header bar background.
    pub header_bg: String,
    /// Footer foreground.
    pub footer_fg: String,
    /// Color for "on" markers of live rows.
    pub accent: String,
    /// Cursor row foreground.
    pub focus_fg: String,
    /// Cursor row background.
    pub focus_bg: String,
    /// Rows of disabled groups.
    pub disabled: String,
    /// Group keys.
    pub key: String,
    /// Empty-value placeholders.
    pub empty_value: String,
    /// Status messages.
    pub status: String,
    /// Error messages.
    pub error: String,
    /// Prompt text.
    pub prompt: String,
    /// The `[MODIFIED]` badge.
    pub modified: String,
}

impl Default for ThemeSpec {
    fn default() -> Self {
        Self {
            header_fg: "white".into(),
            header_bg: "#2c3471".into(),
            footer_fg: "gray".into(),
            accent: "green".into(),
            focus_fg: "black".into(),
            focus_bg: "cyan".into(),
            disabled: "dark gray".into(),
            key: "light blue".into(),
            empty_value: "yellow".into(),
            status: "green".into(),
            error: "red".into(),
            prompt: "yellow".into(),
            modified: "light red".into(),
        }
    }
}

/// Resolved styles used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Header bar.
    pub header: Style,
    /// `[MODIFIED]` badge.
    pub modified: Style,
    /// Footer bar and help text.
    pub footer: Style,
    /// Ordinary row text.
    pub normal: Style,
    /// Cursor row.
    pub focused: Style,
    /// Rows of disabled groups.
    pub disabled: Style,
    /// Group keys.
    pub key: Style,
    /// Empty-value placeholders.
    pub empty_value: Style,
    /// Foreground of "on" markers.
    pub accent: Color,
    /// Status messages.
    pub status: Style,
    /// Error messages.
    pub error: Style,
    /// Prompt text.
    pub prompt: Style,
}

/// Parse one color field.
fn color(field: &'static str, value: &str) -> Result<Color> {
    Color::from_str(value).map_err(|_| Error::Color {
        field,
        value: value.to_string(),
    })
}

impl Theme {
    /// Resolve a spec into styles.
    pub fn from_spec(spec: &ThemeSpec) -> Result<Self> {
        let fg = |field, value: &str| color(field, value).map(|c| Style::default().fg(c));
        Ok(Self {
            header: fg("header_fg", &spec.header_fg)?
                .bg(color("header_bg", &spec.header_bg)?)
                .add_modifier(Modifier::BOLD),
            modified: fg("modified", &spec.modified)?.add_modifier(Modifier::BOLD),
            footer: fg("footer_fg", &spec.footer_fg)?,
            normal: Style::default(),
            focused: fg("focus_fg", &spec.focus_fg)?.bg(color("focus_bg", &spec.focus_bg)?),
            disabled: fg("disabled", &spec.disabled)?,
            key: fg("key", &spec.key)?.add_modifier(Modifier::BOLD),
            empty_value: fg("empty_value", &spec.empty_value)?.add_modifier(Modifier::ITALIC),
            accent: color("accent", &spec.accent)?,
            status: fg("status", &spec.status)?,
            error: fg("error", &spec.error)?.add_modifier(Modifier::BOLD),
            prompt: fg("prompt", &spec.prompt)?.add_modifier(Modifier::BOLD),
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_spec(&ThemeSpec::default())
            .unwrap_or_else(|err| panic!("built-in theme is invalid: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_resolves() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Green);
        assert_eq!(theme.disabled.fg, Some(Color::DarkGray));
    }

    #[test]
    fn hex_colors_parse() {
        let spec = ThemeSpec {
            accent: "#00ff00".into(),
            ..ThemeSpec::default()
        };
        assert_eq!(Theme::from_spec(&spec).unwrap().accent, Color::Rgb(0, 255, 0));
    }

    #[test]
    fn bad_color_names_field() {
        let spec = ThemeSpec {
            key: "not-a-color".into(),
            ..ThemeSpec::default()
        };
        let err = Theme::from_spec(&spec).unwrap_err();
        assert!(matches!(err, Error::Color { field: "key", .. }));
    }
}
