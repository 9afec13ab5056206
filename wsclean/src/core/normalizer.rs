// src/core/normalizer.rs
use std::borrow::Cow;

/// Line terminator used when a normalized file is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// CRLF when the first terminated line ends in `\r\n`, LF otherwise.
    #[must_use]
    pub fn detect(lines: &[&str]) -> Self {
        match lines.iter().find(|line| terminator(line).is_some()) {
            Some(line) if line.ends_with("\r\n") => Self::CrLf,
            _ => Self::Lf,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Result of normalizing the lines of one file.
///
/// `lines` are logical lines, each ending in a single `\n`; the file's
/// own terminator is restored by [`Normalized::into_content`].
#[derive(Debug, PartialEq, Eq)]
pub struct Normalized {
    pub lines: Vec<String>,
    pub changed: bool,
    pub line_ending: LineEnding,
}

impl Normalized {
    #[must_use]
    pub fn into_content(self) -> String {
        let ending = self.line_ending.as_str();
        let mut content = String::with_capacity(self.lines.iter().map(String::len).sum());
        for line in &self.lines {
            content.push_str(line.strip_suffix('\n').unwrap_or(line));
            content.push_str(ending);
        }
        content
    }
}

/// Splits `content` into lines, each keeping its terminator.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing fragment
/// without a terminator is returned as the last line. Empty content has
/// no lines.
#[must_use]
pub fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        let end = match bytes[index] {
            b'\n' => Some(index),
            b'\r' if bytes.get(index.saturating_add(1)) == Some(&b'\n') => {
                Some(index.saturating_add(1))
            }
            b'\r' => Some(index),
            _ => None,
        };
        if let Some(end) = end {
            lines.push(&content[start..=end]);
            start = end.saturating_add(1);
            index = end;
        }
        index = index.saturating_add(1);
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

fn terminator(line: &str) -> Option<&'static str> {
    if line.ends_with("\r\n") {
        Some("\r\n")
    } else if line.ends_with('\n') {
        Some("\n")
    } else if line.ends_with('\r') {
        Some("\r")
    } else {
        None
    }
}

/// The line as it reads with its terminator translated to `\n`.
fn translate(line: &str) -> Cow<'_, str> {
    match terminator(line) {
        None | Some("\n") => Cow::Borrowed(line),
        Some(ending) => {
            let content = &line[..line.len().saturating_sub(ending.len())];
            Cow::Owned(format!("{content}\n"))
        }
    }
}

/// Normalizes a single line.
///
/// Blank lines become exactly `"\n"`. Any other line loses its trailing
/// whitespace and terminator and gets a single `\n`.
#[must_use]
pub fn normalize_line(line: &str) -> String {
    let content = line.trim_end();
    if content.trim_start().is_empty() {
        return String::from("\n");
    }
    let mut normalized = String::with_capacity(content.len().saturating_add(1));
    normalized.push_str(content);
    normalized.push('\n');
    normalized
}

/// Normalizes every line independently and reports whether anything
/// differs once line terminators are read as `\n`.
#[must_use]
pub fn normalize_lines(lines: &[&str]) -> Normalized {
    let normalized: Vec<String> = lines.iter().copied().map(normalize_line).collect();
    let changed = normalized.len() != lines.len()
        || normalized
            .iter()
            .zip(lines)
            .any(|(new, old)| *new != translate(old));
    Normalized {
        lines: normalized,
        changed,
        line_ending: LineEnding::detect(lines),
    }
}

/// Convenience wrapper over [`split_lines`] and [`normalize_lines`].
#[must_use]
pub fn normalize_content(content: &str) -> Normalized {
    normalize_lines(&split_lines(content))
}
