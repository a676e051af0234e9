//! Lexical normalization of IPPcode23 source text.
//!
//! Comments run from `#` to end of line. Horizontal whitespace collapses
//! to single spaces, lines are trimmed, and lines that end up empty are
//! dropped. CR/CRLF/LF line separators are all accepted.

/// One surviving logical line.
///
/// `number` is the 1-based line number in the original source, so later
/// diagnostics point at the pre-normalization input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

/// Normalize source text into an ordered sequence of non-empty logical
/// lines. Never fails; empty input yields an empty sequence.
pub fn normalize(source: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    for (idx, raw) in split_lines(source).into_iter().enumerate() {
        let text = clean_line(raw);
        if !text.is_empty() {
            lines.push(Line {
                number: idx + 1,
                text,
            });
        }
    }
    lines
}

/// Split on LF, CRLF or lone CR, counting CRLF as one separator.
fn split_lines(source: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = source;
    loop {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                chunks.push(&rest[..pos]);
                let sep = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + sep..];
            }
            None => {
                chunks.push(rest);
                return chunks;
            }
        }
    }
}

/// Strip the comment, collapse whitespace runs, trim.
fn clean_line(raw: &str) -> String {
    let code = match raw.find('#') {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    code.split_whitespace().collect::<Vec<_>>().join(" ")
}
