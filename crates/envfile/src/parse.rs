//! Dotenv text to [`Document`].

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::{ConfigLine, ConfigModel, Document, SourceLine, Variable, VariableGroup};

/// Matches `KEY=value`, optionally commented out and/or exported.
const VARIABLE_PATTERN: &str =
    r"^(?P<comment>\s*#[#\s]*)?(?P<export>export\s+)?(?P<key>[A-Za-z_][A-Za-z0-9_.]*)\s*=(?P<value>.*)$";

/// Compiled [`VARIABLE_PATTERN`].
fn variable_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(VARIABLE_PATTERN)
            .unwrap_or_else(|err| panic!("invalid variable pattern: {err}"))
    })
}

/// Split one `split_inclusive` piece into its text and terminator.
fn split_ending(piece: &str) -> (&str, &'static str) {
    if let Some(text) = piece.strip_suffix("\r\n") {
        (text, "\r\n")
    } else if let Some(text) = piece.strip_suffix('\n') {
        (text, "\n")
    } else {
        (piece, "")
    }
}

/// Classify a single line of text.
fn classify(text: &str) -> ConfigLine {
    if let Some(caps) = variable_re().captures(text) {
        return ConfigLine::Variable(Variable {
            key: caps["key"].to_string(),
            value: caps["value"].trim().to_string(),
            export: caps.name("export").is_some(),
            commented: caps.name("comment").is_some(),
            raw: Some(text.to_string()),
        });
    }
    if text.trim().is_empty() {
        ConfigLine::Blank(text.to_string())
    } else if text.trim_start().starts_with('#') {
        ConfigLine::Comment(text.to_string())
    } else {
        ConfigLine::Other(text.to_string())
    }
}

/// Parse dotenv text into a document.
///
/// Groups appear in order of first mention. A group is active when any of its
/// lines is live; with several live lines the last one wins, as it would when
/// the file is sourced by a shell.
pub(crate) fn parse(text: &str) -> Document {
    let mut model = ConfigModel::new();
    let mut layout = Vec::new();

    for piece in text.split_inclusive('\n') {
        let (raw, ending) = split_ending(piece);
        let line = classify(raw);
        let Some(var) = line.as_variable() else {
            layout.push((SourceLine::Line(line), ending));
            continue;
        };
        let live = !var.commented;
        let group = match model.index_of(&var.key) {
            Some(i) => i,
            None => model
                .push_group(VariableGroup::new(var.key.clone(), Vec::new()))
                .unwrap_or_else(|err| panic!("fresh key rejected: {err}")),
        };
        let Some(g) = model.group_at_mut(group) else {
            continue;
        };
        let index = g.push_line(line);
        if live {
            if g.is_active {
                debug!(key = g.key(), line = index, "duplicate live assignment");
            }
            g.is_active = true;
            g.active_line = Some(index);
            g.last_active_line = Some(index);
        }
        layout.push((SourceLine::Variable { group, line: index }, ending));
    }

    debug!(groups = model.len(), lines = layout.len(), "parsed dotenv");
    Document::from_parts(model, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineKind;

    const SAMPLE: &str = "\
# Database
DB_URL=postgres://prod
# DB_URL=postgres://dev
#DB_URL=

export PORT = 8080
## LEGACY=1
not a variable
";

    #[test]
    fn classifies_lines() {
        assert_eq!(classify("# plain comment").kind(), LineKind::Comment);
        assert_eq!(classify("   ").kind(), LineKind::Blank);
        assert_eq!(classify("garbage").kind(), LineKind::Other);
        assert_eq!(classify("# see FOO=bar").kind(), LineKind::Comment);
        let ConfigLine::Variable(var) = classify("  ## export A.B = 'x y' ") else {
            panic!("expected a variable");
        };
        assert_eq!(var.key, "A.B");
        assert_eq!(var.value, "'x y'");
        assert!(var.export);
        assert!(var.commented);
    }

    #[test]
    fn groups_collect_alternatives() {
        let doc = parse(SAMPLE);
        let model = &doc.model;
        assert_eq!(model.group_order(), ["DB_URL", "PORT", "LEGACY"]);

        let db = model.group("DB_URL").unwrap();
        assert_eq!(db.lines().len(), 3);
        assert!(db.is_active);
        assert_eq!(db.active_line, Some(0));
        assert_eq!(db.last_active_line, Some(0));
        assert_eq!(db.lines()[2].value(), Some(""));

        let port = model.group("PORT").unwrap();
        assert_eq!(port.lines()[0].value(), Some("8080"));

        let legacy = model.group("LEGACY").unwrap();
        assert!(!legacy.is_active);
        assert_eq!(legacy.last_active_line, None);
    }

    #[test]
    fn last_live_assignment_wins() {
        let doc = parse("A=1\nA=2\n");
        let a = doc.model.group("A").unwrap();
        assert_eq!(a.active_line, Some(1));
        assert_eq!(doc.render(), "# A=1\nA=2\n");
    }

    #[test]
    fn unmodified_document_round_trips() {
        for text in [
            SAMPLE,
            "",
            "A=1",
            "A=1\r\n# A=2\r\n",
            "\n\n# x\n",
            "A=1\r\nB=2\nC=3\n",
            "# c\r\n\nA=1\r\n# A=2",
        ] {
            assert_eq!(parse(text).render(), text);
        }
    }

    #[test]
    fn toggling_keeps_each_line_ending() {
        let mut doc = parse("A=1\r\n# A=2\nB=3\r\n");
        let a = doc.model.group_mut("A").unwrap();
        a.active_line = Some(1);
        assert_eq!(doc.render(), "# A=1\r\nA=2\nB=3\r\n");
    }

    #[test]
    fn toggled_state_is_written_back() {
        let mut doc = parse(SAMPLE);
        let db = doc.model.group_mut("DB_URL").unwrap();
        db.active_line = Some(1);
        let port = doc.model.group_mut("PORT").unwrap();
        port.is_active = false;
        let legacy = doc.model.group_mut("LEGACY").unwrap();
        legacy.is_active = true;
        legacy.active_line = Some(0);

        let out = doc.render();
        assert!(out.contains("\n# DB_URL=postgres://prod\n"));
        assert!(out.contains("\nDB_URL=postgres://dev\n"));
        assert!(out.contains("\n#DB_URL=\n"));
        assert!(out.contains("\n# export PORT=8080\n"));
        assert!(out.contains("\nLEGACY=1\n"));
        assert!(out.starts_with("# Database\n"));
        assert!(out.ends_with("not a variable\n"));
    }
}
