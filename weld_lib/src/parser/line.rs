use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{eof, opt},
    sequence::{delimited, pair, preceded, tuple},
    Finish, Parser,
};

use super::common::*;
use super::consts::*;

/// One line of input, classified by the directive grammar.
///
/// Classification is whole-line: a directive with anything after its
/// terminating semicolon (other than the line break) is plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize), serde(tag = "kind"))]
pub enum SourceLine {
    /// `'<include> path';` plus its leading indentation
    Include { indent: String, path: String },
    /// `'<constants>';` plus its leading indentation
    ConstantsMarker { indent: String },
    /// Anything else, emitted verbatim
    Text,
}

/// A single `NAME = "value"` line from a definitions file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ConstDef {
    pub name: String,
    pub value: String,
}

fn include_path(input: Span) -> MyResult<Span> {
    take_while1(|c: char| c != DIRECTIVE_QUOTE && c != '\r' && c != '\n')(input)
}

fn parse_include(input: Span) -> MyResult<SourceLine> {
    tuple((
        sp0,
        delimited(
            pair(char(DIRECTIVE_QUOTE), tag(DIRECTIVE_INCLUDE)),
            preceded(char(' '), include_path),
            tag(DIRECTIVE_TERMINATOR),
        ),
        eof,
    ))
    .map(|(indent, path, _)| SourceLine::Include {
        indent: span_string(&indent),
        path: span_string(&path),
    })
    .parse(input)
}

fn parse_marker(input: Span) -> MyResult<SourceLine> {
    tuple((
        sp0,
        char(DIRECTIVE_QUOTE),
        tag(DIRECTIVE_CONSTANTS),
        tag(DIRECTIVE_TERMINATOR),
        eof,
    ))
    .map(|(indent, _, _, _, _)| SourceLine::ConstantsMarker {
        indent: span_string(&indent),
    })
    .parse(input)
}

/// Classify one line (without its terminator).
///
/// Lines matching neither directive are plain text, never an error.
pub fn classify_line(line: &str) -> SourceLine {
    alt((parse_include, parse_marker))
        .parse(Span::new(line))
        .finish()
        .map(|(_, out)| out)
        .unwrap_or(SourceLine::Text)
}

fn parse_const_def(input: Span) -> MyResult<ConstDef> {
    tuple((
        sp0,
        opt(pair(tag(CONST_KEYWORD), sp0)),
        const_name,
        sp0,
        char('='),
        sp0,
        delimited(char('"'), const_value, char('"')),
    ))
    .map(|(_, _, name, _, _, _, value)| ConstDef {
        name: span_string(&name),
        value: span_string(&value),
    })
    .parse(input)
}

/// Parse one definitions-file line.
///
/// Content after the closing quote is ignored; lines that don't match
/// the definition shape at all yield `None`.
pub fn parse_definition(line: &str) -> Option<ConstDef> {
    parse_const_def(Span::new(line))
        .finish()
        .ok()
        .map(|(_, def)| def)
}

#[cfg(test)]
mod test {
    use super::*;

    fn include(indent: &str, path: &str) -> SourceLine {
        SourceLine::Include {
            indent: indent.into(),
            path: path.into(),
        }
    }

    fn def(name: &str, value: &str) -> ConstDef {
        ConstDef {
            name: name.into(),
            value: value.into(),
        }
    }

    #[test]
    fn classify_include() {
        assert_eq!(
            classify_line("'<include> util.js';"),
            include("", "util.js")
        );
        assert_eq!(
            classify_line("  '<include> sub/mod.js';"),
            include("  ", "sub/mod.js")
        );
        assert_eq!(
            classify_line("\t'<include> a.js';"),
            include("\t", "a.js")
        );
    }

    #[test]
    fn classify_marker() {
        assert_eq!(
            classify_line("'<constants>';"),
            SourceLine::ConstantsMarker { indent: "".into() }
        );
        assert_eq!(
            classify_line("    '<constants>';"),
            SourceLine::ConstantsMarker {
                indent: "    ".into()
            }
        );
    }

    #[test]
    fn classify_near_misses_as_text() {
        // missing semicolon
        assert_eq!(classify_line("'<include> a.js'"), SourceLine::Text);
        // missing path
        assert_eq!(classify_line("'<include>';"), SourceLine::Text);
        // trailing content after the terminator
        assert_eq!(classify_line("'<include> a.js'; "), SourceLine::Text);
        assert_eq!(classify_line("'<constants>'; // x"), SourceLine::Text);
        // unquoted
        assert_eq!(classify_line("<include> a.js;"), SourceLine::Text);
        assert_eq!(classify_line("let x = 1;"), SourceLine::Text);
        assert_eq!(classify_line(""), SourceLine::Text);
    }

    #[test]
    fn definition_basic() {
        assert_eq!(parse_definition("FOO = \"bar\""), Some(def("FOO", "bar")));
        assert_eq!(
            parse_definition("const COLOR = \"red\""),
            Some(def("COLOR", "red"))
        );
        assert_eq!(parse_definition("A_B=\"x_1\""), Some(def("A_B", "x_1")));
        assert_eq!(
            parse_definition("  const  KEY  =  \"v\""),
            Some(def("KEY", "v"))
        );
    }

    #[test]
    fn definition_ignores_trailing_content() {
        assert_eq!(
            parse_definition("FOO = \"bar\", // comment"),
            Some(def("FOO", "bar"))
        );
    }

    #[test]
    fn definition_rejects_other_lines() {
        assert_eq!(parse_definition(""), None);
        assert_eq!(parse_definition("// a comment"), None);
        assert_eq!(parse_definition("foo = \"bar\""), None);
        assert_eq!(parse_definition("FOO = bar"), None);
        assert_eq!(parse_definition("FOO = \"bad value\""), None);
        assert_eq!(parse_definition("constant = \"x\""), None);
    }
}
