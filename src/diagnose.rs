use miette::{Diagnostic, SourceSpan};
use serde_json::error::Category;
use thiserror::Error;

/// Syntax error raised while checking a payload, classified from the
/// underlying parser error so the report can point at the offending spot
/// and suggest a fix.
#[derive(Error, Debug, Diagnostic)]
pub enum SyntaxError {
    #[error("trailing comma at line {line}, column {column}")]
    #[diagnostic(code(jauge::trailing_comma))]
    TrailingComma {
        line: usize,
        column: usize,
        #[source_code]
        src: String,
        #[label("remove this comma")]
        span: SourceSpan,
        #[help]
        advice: String,
    },
    #[error("missing comma at line {line}, column {column}")]
    #[diagnostic(code(jauge::missing_comma))]
    MissingComma {
        line: usize,
        column: usize,
        #[source_code]
        src: String,
        #[label("a comma should go before this")]
        span: SourceSpan,
        #[help]
        advice: String,
    },
    #[error("missing `:` after object key at line {line}, column {column}")]
    #[diagnostic(code(jauge::missing_colon))]
    MissingColon {
        line: usize,
        column: usize,
        #[source_code]
        src: String,
        #[label("a `:` should go here")]
        span: SourceSpan,
        #[help]
        advice: String,
    },
    #[error("object key is not a quoted string at line {line}, column {column}")]
    #[diagnostic(code(jauge::unquoted_key))]
    UnquotedKey {
        line: usize,
        column: usize,
        #[source_code]
        src: String,
        #[label("wrap this in double quotes")]
        span: SourceSpan,
        #[help]
        advice: String,
    },
    #[error("invalid escape sequence at line {line}, column {column}")]
    #[diagnostic(code(jauge::bad_escape))]
    BadEscape {
        line: usize,
        column: usize,
        #[source_code]
        src: String,
        #[label("unrecognized escape")]
        span: SourceSpan,
        #[help]
        advice: String,
    },
    #[error("malformed number at line {line}, column {column}")]
    #[diagnostic(code(jauge::bad_number))]
    BadNumber {
        line: usize,
        column: usize,
        #[source_code]
        src: String,
        #[label("this is not a json number")]
        span: SourceSpan,
        #[help]
        advice: String,
    },
    #[error("raw control character inside a string at line {line}, column {column}")]
    #[diagnostic(code(jauge::control_character))]
    UnescapedControl {
        line: usize,
        column: usize,
        #[source_code]
        src: String,
        #[label("escape this character")]
        span: SourceSpan,
        #[help]
        advice: String,
    },
    #[error("payload ends before the document is complete (line {line}, column {column})")]
    #[diagnostic(code(jauge::unexpected_end))]
    UnexpectedEnd {
        line: usize,
        column: usize,
        #[source_code]
        src: String,
        #[label("input ends here")]
        span: SourceSpan,
        #[help]
        advice: String,
    },
    #[error("{message}")]
    #[diagnostic(code(jauge::syntax))]
    Unrecognized {
        message: String,
        #[source_code]
        src: String,
        #[label("somewhere around here")]
        span: SourceSpan,
    },
}

/// Where in the payload the parser gave up. Wraps the line/column reported
/// by serde_json and derives spans and fix-it suggestions from the
/// surrounding text.
struct Scene<'a> {
    text: &'a str,
    line: usize,
    column: usize,
}

impl<'a> Scene<'a> {
    fn new(text: &'a str, line: usize, column: usize) -> Self {
        Self { text, line, column }
    }

    fn line_text(&self) -> &'a str {
        self.text
            .split('\n')
            .nth(self.line.saturating_sub(1))
            .unwrap_or("")
    }

    fn previous_line(&self) -> Option<&'a str> {
        if self.line < 2 {
            return None;
        }
        self.text.split('\n').nth(self.line - 2)
    }

    /// Byte offset of the reported position, clamped onto a character
    /// boundary inside the payload so the span always lands on real text.
    fn span(&self) -> SourceSpan {
        let mut offset = 0usize;
        for (idx, line) in self.text.split('\n').enumerate() {
            if idx + 1 == self.line {
                offset += char_floor(line, self.column.saturating_sub(1));
                break;
            }
            offset += line.len() + 1;
        }
        let offset = offset.min(self.text.len().saturating_sub(1));
        SourceSpan::new(offset.into(), 1)
    }

    fn trailing_comma_advice(&self) -> String {
        let line = self.line_text().trim_end();
        match line
            .strip_suffix(",}")
            .or_else(|| line.strip_suffix(",]"))
        {
            Some(head) => format!(
                "write `{}{}`",
                head.trim_end(),
                if line.ends_with('}') { "}" } else { "]" }
            ),
            None if line.ends_with(',') => {
                format!("drop the comma: `{}`", line.trim_end_matches(','))
            }
            _ => "remove the comma before the closing bracket".to_string(),
        }
    }

    fn missing_comma_advice(&self) -> String {
        match self.previous_line().map(str::trim_end) {
            Some(prev) if !prev.is_empty() && !prev.ends_with([',', '{', '[']) => {
                format!("put a `,` after `{}`", tail(prev, 24))
            }
            _ => "separate items with a comma".to_string(),
        }
    }

    fn missing_colon_advice(&self) -> String {
        let line = self.line_text();
        let head = &line[..char_floor(line, self.column.saturating_sub(1))];
        match last_quoted(head) {
            Some(key) => format!("write `\"{}\":` after the key", key),
            None => "put a `:` between the key and its value".to_string(),
        }
    }

    fn quote_key_advice(&self) -> String {
        let line = self.line_text();
        let head = &line[..char_floor(line, self.column)];
        let token = head
            .split_whitespace()
            .last()
            .unwrap_or("")
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '_');
        if token.is_empty() {
            "wrap the key in double quotes".to_string()
        } else {
            format!("write `\"{}\":` instead", token)
        }
    }

    fn escape_advice(&self) -> String {
        if self.line_text().contains(":\\") {
            return "this looks like a windows path; double each backslash as \\\\".to_string();
        }
        "valid escapes are \\\" \\\\ \\/ \\b \\f \\n \\r \\t and \\uXXXX".to_string()
    }

    fn number_advice(&self) -> String {
        let line = self.line_text();
        let at = char_floor(line, self.column.saturating_sub(1));
        let token: String = line[at..]
            .chars()
            .take_while(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
            .collect();
        if let Some(rest) = token.strip_prefix('+') {
            format!("drop the leading `+`: `{}`", rest)
        } else if let Some(rest) = token.strip_prefix('.') {
            format!("write `0.{}`", rest)
        } else if token.ends_with('.') {
            format!("add a digit after the decimal point: `{}0`", token)
        } else {
            "json numbers look like -12, 3.14 or 6.02e23".to_string()
        }
    }

    /// Scan the whole payload, skipping string contents, and report which
    /// closers never showed up.
    fn balance_advice(&self) -> String {
        let mut objects = 0isize;
        let mut arrays = 0isize;
        let mut in_string = false;
        let mut escaped = false;
        for ch in self.text.chars() {
            if in_string {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == '"' {
                    in_string = false;
                }
                continue;
            }
            match ch {
                '"' => in_string = true,
                '{' => objects += 1,
                '}' => objects -= 1,
                '[' => arrays += 1,
                ']' => arrays -= 1,
                _ => {}
            }
        }
        let mut parts = Vec::new();
        if in_string {
            parts.push("close the open string with `\"`".to_string());
        }
        if objects > 0 {
            parts.push(format!("add {} missing `}}`", objects));
        }
        if arrays > 0 {
            parts.push(format!("add {} missing `]`", arrays));
        }
        if parts.is_empty() {
            "the document ends before the value is complete".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Turn a serde_json parse error into a classified [`SyntaxError`].
///
/// serde_json only exposes its message text and category, so the mapping
/// keys off both; anything unrecognized falls through to a catch-all that
/// carries the parser's own wording.
pub(crate) fn classify(err: serde_json::Error, text: &str) -> SyntaxError {
    let scene = Scene::new(text, err.line(), err.column());
    let message = err.to_string();
    let lower = message.to_ascii_lowercase();
    let (line, column) = (err.line(), err.column());
    let (src, span) = (text.to_owned(), scene.span());

    if lower.contains("trailing comma") {
        SyntaxError::TrailingComma {
            line,
            column,
            src,
            span,
            advice: scene.trailing_comma_advice(),
        }
    } else if lower.contains("key must be a string") {
        SyntaxError::UnquotedKey {
            line,
            column,
            src,
            span,
            advice: scene.quote_key_advice(),
        }
    } else if lower.contains("expected `,`") {
        SyntaxError::MissingComma {
            line,
            column,
            src,
            span,
            advice: scene.missing_comma_advice(),
        }
    } else if lower.contains("expected `:`") {
        SyntaxError::MissingColon {
            line,
            column,
            src,
            span,
            advice: scene.missing_colon_advice(),
        }
    } else if lower.contains("control character") {
        SyntaxError::UnescapedControl {
            line,
            column,
            src,
            span,
            advice: "replace literal tabs and newlines with \\t and \\n".to_string(),
        }
    } else if lower.contains("escape") || lower.contains("surrogate") {
        SyntaxError::BadEscape {
            line,
            column,
            src,
            span,
            advice: scene.escape_advice(),
        }
    } else if lower.contains("number") {
        SyntaxError::BadNumber {
            line,
            column,
            src,
            span,
            advice: scene.number_advice(),
        }
    } else if err.classify() == Category::Eof || lower.contains("eof") {
        SyntaxError::UnexpectedEnd {
            line,
            column,
            src,
            span,
            advice: scene.balance_advice(),
        }
    } else {
        SyntaxError::Unrecognized { message, src, span }
    }
}

/// Largest character boundary in `text` that is at most `idx`.
fn char_floor(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn last_quoted(text: &str) -> Option<&str> {
    let end = text.rfind('"')?;
    let start = text[..end].rfind('"')?;
    Some(&text[start + 1..end])
}

/// Last `keep` characters of `text`.
fn tail(text: &str, keep: usize) -> &str {
    match text.char_indices().rev().nth(keep.saturating_sub(1)) {
        Some((start, _)) => &text[start..],
        None => text,
    }
}
