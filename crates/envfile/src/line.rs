//! Physical lines of a dotenv file.

/// Shape of a [`ConfigLine`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A `KEY=value` assignment, live or commented out.
    Variable,
    /// A comment that is not a commented-out assignment.
    Comment,
    /// An empty or whitespace-only line.
    Blank,
    /// Anything else; kept untouched.
    Other,
}

/// A `KEY=value` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Variable name.
    pub key: String,
    /// Value text with surrounding whitespace removed. Quotes are kept.
    pub value: String,
    /// Written with a leading `export `.
    pub export: bool,
    /// Commented out in the source.
    pub commented: bool,
    /// Source text, reused verbatim while the live/commented state is unchanged.
    pub raw: Option<String>,
}

impl Variable {
    /// A live variable with no source text.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            export: false,
            commented: false,
            raw: None,
        }
    }

    /// Render this assignment either live (`KEY=value`) or commented (`# KEY=value`).
    pub fn render(&self, live: bool) -> String {
        if live != self.commented
            && let Some(raw) = &self.raw
        {
            return raw.clone();
        }
        let export = if self.export { "export " } else { "" };
        let comment = if live { "" } else { "# " };
        format!("{comment}{export}{}={}", self.key, self.value)
    }
}

/// One physical line of the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLine {
    /// A selectable assignment.
    Variable(Variable),
    /// Comment text, including the leading `#`.
    Comment(String),
    /// Whitespace-only text.
    Blank(String),
    /// Unrecognised text.
    Other(String),
}

impl ConfigLine {
    /// Shorthand for a live `key=value` line.
    pub fn variable(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Variable(Variable::new(key, value))
    }

    /// The kind tag of this line.
    pub fn kind(&self) -> LineKind {
        match self {
            Self::Variable(_) => LineKind::Variable,
            Self::Comment(_) => LineKind::Comment,
            Self::Blank(_) => LineKind::Blank,
            Self::Other(_) => LineKind::Other,
        }
    }

    /// Borrow the assignment when this is a variable line.
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// Variable name, for variable lines only.
    pub fn key(&self) -> Option<&str> {
        self.as_variable().map(|v| v.key.as_str())
    }

    /// Variable value, for variable lines only.
    pub fn value(&self) -> Option<&str> {
        self.as_variable().map(|v| v.value.as_str())
    }

    /// Text of a non-variable line. Variable lines render through [`Variable::render`].
    pub(crate) fn text(&self) -> Option<&str> {
        match self {
            Self::Variable(_) => None,
            Self::Comment(text) | Self::Blank(text) | Self::Other(text) => Some(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_state_reuses_source_text() {
        let var = Variable {
            key: "URL".into(),
            value: "a".into(),
            export: false,
            commented: true,
            raw: Some("#URL = a".into()),
        };
        assert_eq!(var.render(false), "#URL = a");
        assert_eq!(var.render(true), "URL=a");
    }

    #[test]
    fn export_prefix_survives_toggle() {
        let mut var = Variable::new("PORT", "80");
        var.export = true;
        assert_eq!(var.render(false), "# export PORT=80");
        assert_eq!(var.render(true), "export PORT=80");
    }

    #[test]
    fn kinds_and_accessors() {
        let var = ConfigLine::variable("A", "");
        assert_eq!(var.kind(), LineKind::Variable);
        assert_eq!(var.key(), Some("A"));
        assert_eq!(var.value(), Some(""));
        let comment = ConfigLine::Comment("# hi".into());
        assert_eq!(comment.kind(), LineKind::Comment);
        assert_eq!(comment.key(), None);
        assert_eq!(ConfigLine::Blank(String::new()).kind(), LineKind::Blank);
        assert_eq!(ConfigLine::Other("junk".into()).text(), Some("junk"));
    }
}
