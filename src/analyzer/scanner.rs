//! Lexical extraction of import specifiers from TypeScript/JavaScript text

use std::sync::OnceLock;

use regex::Regex;

use crate::core::{ImportStatement, SourceLocation};

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

fn regex_import_from() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"\bimport\s+(?:type\s+)?[\w$\s{},*]+?\s*\bfrom\s*["']([^"'\r\n]+)["']"#)
    })
}

fn regex_side_effect_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"\bimport\s*["']([^"'\r\n]+)["']"#))
}

fn regex_export_from() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(
            r#"\bexport\s+(?:type\s+)?(?:\*(?:\s*as\s+[\w$]+)?|\{[^}]*\})\s*from\s*["']([^"'\r\n]+)["']"#,
        )
    })
}

fn regex_import_require() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"\bimport\s+(?:type\s+)?[\w$]+\s*=\s*require\s*\(\s*["']([^"'\r\n]+)["']\s*\)"#)
    })
}

/// Every import and re-export statement in `source`, ordered by position
///
/// Comments and string contents are blanked out first, so commented-out
/// imports and code quoted inside strings are ignored while byte offsets still
/// line up with the original text. Dynamic `import()`
/// calls are not module-level dependencies and are skipped.
pub fn scan_imports(source: &str) -> Vec<ImportStatement> {
    let masked = mask_non_code(source);
    let lines = LineIndex::new(source);

    let mut found: Vec<(usize, usize, &str)> = [
        regex_import_from(),
        regex_side_effect_import(),
        regex_export_from(),
        regex_import_require(),
    ]
    .into_iter()
    .flat_map(|re| re.captures_iter(&masked))
    .filter_map(|caps| {
        let statement = caps.get(0)?;
        let specifier = caps.get(1)?;
        Some((
            statement.start(),
            statement.end(),
            &source[specifier.start()..specifier.end()],
        ))
    })
    .collect();

    found.sort_by_key(|&(start, _, _)| start);
    found.dedup_by_key(|&mut (start, _, _)| start);

    found
        .into_iter()
        .map(|(start, end, specifier)| {
            let (line, column) = lines.position(source, start);
            ImportStatement::new(
                specifier,
                SourceLocation::new(start, end - start).with_position(line, column),
            )
        })
        .collect()
}

/// Replace comment bytes and string literal contents with spaces
///
/// Quotes and newlines are kept, so offsets and line numbers still match
/// `source` and a specifier can be sliced back out of it.
fn mask_non_code(source: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Code,
        LineComment,
        BlockComment,
        Str(u8),
    }

    let bytes = source.as_bytes();
    let mut out = bytes.to_vec();
    let mut state = State::Code;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();
        match state {
            State::Code => match (b, next) {
                (b'/', Some(b'/')) => {
                    state = State::LineComment;
                    out[i] = b' ';
                    out[i + 1] = b' ';
                    i += 1;
                }
                (b'/', Some(b'*')) => {
                    state = State::BlockComment;
                    out[i] = b' ';
                    out[i + 1] = b' ';
                    i += 1;
                }
                (b'"' | b'\'' | b'`', _) => state = State::Str(b),
                _ => {}
            },
            State::LineComment => {
                if b == b'\n' {
                    state = State::Code;
                } else {
                    out[i] = b' ';
                }
            }
            State::BlockComment => {
                if b == b'*' && next == Some(b'/') {
                    out[i] = b' ';
                    out[i + 1] = b' ';
                    i += 1;
                    state = State::Code;
                } else if b != b'\n' {
                    out[i] = b' ';
                }
            }
            State::Str(quote) => {
                if b == b'\\' {
                    out[i] = b' ';
                    if next.is_some_and(|n| n != b'\n') {
                        out[i + 1] = b' ';
                    }
                    i += 1;
                } else if b == quote || (b == b'\n' && quote != b'`') {
                    state = State::Code;
                } else if b != b'\n' {
                    out[i] = b' ';
                }
            }
        }
        i += 1;
    }

    // every byte of a blanked character becomes a space, so no UTF-8 sequence is split
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Byte offsets of line starts, for 1-based line/column lookups
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    fn position(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&start| start <= offset);
        let line_start = self.starts[line - 1];
        let column = source[line_start..offset].chars().count() + 1;
        (line, column)
    }
}
