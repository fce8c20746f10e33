//! User settings: glyphs and theme colors, loaded from RON.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use projection::Glyphs;
use ron::error::SpannedError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    theme::ThemeSpec,
};

/// Everything the settings file can configure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Marker, pointer and placeholder glyphs.
    pub glyphs: Glyphs,
    /// Named colors.
    pub theme: ThemeSpec,
}

/// Determine the default settings path (`~/.config/dotenv-manager/config.ron`).
pub fn default_settings_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".config");
    p.push("dotenv-manager");
    p.push("config.ron");
    p
}

impl Settings {
    /// Load settings.
    ///
    /// Policy:
    /// 1) Use `explicit` when provided; it must exist.
    /// 2) Else use the default path when it exists.
    /// 3) Else fall back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }
        let preferred = default_settings_path();
        if preferred.exists() {
            return Self::load_from_path(&preferred);
        }
        debug!(path = %preferred.display(), "no settings file; using defaults");
        Ok(Self::default())
    }

    /// Read and parse a settings file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let settings_err = |message: String| Error::Settings {
            path: path.to_path_buf(),
            message,
        };
        let text = fs::read_to_string(path).map_err(|e| settings_err(e.to_string()))?;
        let settings = Self::parse(&text).map_err(|e| settings_err(e.to_string()))?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parse settings from RON text.
    pub fn parse(text: &str) -> std::result::Result<Self, SpannedError> {
        ron::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn partial_settings_keep_defaults() {
        let s = Settings::parse(r#"(glyphs: (pointer: "> "), theme: (accent: "cyan"))"#).unwrap();
        assert_eq!(s.glyphs.pointer, "> ");
        assert_eq!(s.glyphs.value_on, Glyphs::default().value_on);
        assert_eq!(s.theme.accent, "cyan");
        assert_eq!(s.theme.disabled, ThemeSpec::default().disabled);
    }

    #[test]
    fn empty_settings_are_defaults() {
        assert_eq!(Settings::parse("()").unwrap(), Settings::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Settings::parse("(glyphs: (pointr: \">\"))").is_err());
        assert!(Settings::parse("(colours: ())").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = Settings::load(Some(Path::new("/nonexistent/dm.ron"))).unwrap_err();
        assert!(matches!(err, Error::Settings { .. }));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"(glyphs: (empty_value: "∅"))"#).unwrap();
        let s = Settings::load(Some(file.path())).unwrap();
        assert_eq!(s.glyphs.empty_value, "∅");
    }
}
