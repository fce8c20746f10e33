//! A model plus the file layout needed to write it back.

use crate::{ConfigLine, ConfigModel, parse};

/// One line of the source file, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLine {
    /// A line that belongs to no group; written back verbatim.
    Line(ConfigLine),
    /// A variable line stored in the model.
    Variable {
        /// Group position in the model's display order.
        group: usize,
        /// Line position within the group.
        line: usize,
    },
}

/// A parsed dotenv file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Grouped variables and their activation state.
    pub model: ConfigModel,
    /// Source line order, each line with its own terminator
    /// (`\n`, `\r\n`, or empty for an unterminated last line).
    layout: Vec<(SourceLine, &'static str)>,
}

impl Document {
    /// Assemble a document from its parts.
    pub(crate) fn from_parts(model: ConfigModel, layout: Vec<(SourceLine, &'static str)>) -> Self {
        Self { model, layout }
    }

    /// Parse dotenv text.
    pub fn parse(text: &str) -> Self {
        parse::parse(text)
    }

    /// Source line order.
    pub fn layout(&self) -> impl Iterator<Item = &SourceLine> {
        self.layout.iter().map(|(line, _)| line)
    }

    /// Serialize the current state in source line order.
    ///
    /// A variable line is written live when its group is active and it is the
    /// group's live line; otherwise it is written commented out. Every line
    /// keeps the terminator it had in the source.
    ///
    /// # Panics
    ///
    /// Panics if the layout references a line the model does not hold.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (source, ending) in &self.layout {
            match source {
                SourceLine::Line(line) => out.push_str(line.text().unwrap_or_default()),
                SourceLine::Variable { group, line } => {
                    let g = self.model.group_at(*group).unwrap_or_else(|| {
                        panic!("layout references missing group {group}")
                    });
                    let var = g.variable_at(*line).unwrap_or_else(|| {
                        panic!("layout references missing line {line} of `{}`", g.key())
                    });
                    out.push_str(&var.render(g.live_line() == Some(*line)));
                }
            }
            out.push_str(ending);
        }
        out
    }
}
