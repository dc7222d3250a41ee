use std::ops::Range;
use std::path::Path;

/// Line terminator styles the editor can convert to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Lf => "LF",
            Self::CrLf => "CRLF",
        }
    }
}

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Label for a recent-files menu entry: the file name, cut at 30 characters.
pub fn recent_menu_label(path: &Path) -> String {
    const MAX_CHARS: usize = 30;
    let name = extract_filename(path);
    if name.chars().count() > MAX_CHARS {
        let cut: String = name.chars().take(MAX_CHARS).collect();
        format!("{}...", cut)
    } else {
        name
    }
}

/// Turn CRLF and lone CR into LF.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Normalize, then re-emit every line break as `ending`.
pub fn convert_line_endings(text: &str, ending: LineEnding) -> String {
    let normalized = normalize_line_endings(text);
    match ending {
        LineEnding::Lf => normalized,
        LineEnding::CrLf => normalized.replace('\n', ending.as_str()),
    }
}

/// Naive block re-indentation.
///
/// Every line is trimmed and re-indented by `width` spaces per level. A line
/// ending in `:` opens a level after itself; a line starting with a closing
/// bracket closes one before itself. Blank lines stay empty.
pub fn reindent(text: &str, width: usize) -> String {
    let mut level = 0usize;
    let mut out = Vec::new();

    for line in text.split('\n') {
        let stripped = line.trim();
        if stripped.is_empty() {
            out.push(String::new());
            continue;
        }
        if stripped.starts_with([')', ']', '}']) {
            level = level.saturating_sub(1);
        }
        out.push(format!("{}{}", " ".repeat(level * width), stripped));
        if stripped.ends_with(':') {
            level += 1;
        }
    }

    out.join("\n")
}

/// Number of lines in `text`. An empty text still has one line.
pub fn line_count(text: &str) -> usize {
    text.matches('\n').count() + 1
}

/// Convert a byte offset into a 1-based (line, column) pair.
///
/// Columns count characters, not bytes. Offsets past the end clamp to the end.
pub fn line_and_column(text: &str, byte_pos: usize) -> (usize, usize) {
    let mut pos = byte_pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    let before = &text[..pos];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Convert a 1-based line number to a byte position in the text
///
/// Returns None if the line number is 0 or beyond the end of the text.
pub fn line_number_to_byte_position(text: &str, line: usize) -> Option<usize> {
    match line {
        0 => None,
        1 => Some(0),
        _ => text
            .match_indices('\n')
            .nth(line - 2)
            .map(|(i, _)| i + 1),
    }
}

/// Status bar text for the caret position.
pub fn cursor_status(line: usize, column: usize) -> String {
    format!("Line {}, Column {}", line, column)
}

/// Find the first occurrence of `needle` starting at or after byte `from`.
///
/// Returns the byte range of the match in `text`. Case-insensitive matching
/// compares characters after lowercasing, so the range may differ in length
/// from `needle`.
pub fn find_in_text(text: &str, needle: &str, from: usize, case_sensitive: bool) -> Option<Range<usize>> {
    if needle.is_empty() || from > text.len() {
        return None;
    }
    text.char_indices()
        .map(|(i, _)| i)
        .filter(|&i| i >= from)
        .find_map(|start| match_at(text, start, needle, case_sensitive).map(|end| start..end))
}

/// Like [`find_in_text`], but starts over from the top when nothing follows
/// `from`. The flag is true when the search wrapped.
pub fn find_wrapping(
    text: &str,
    needle: &str,
    from: usize,
    case_sensitive: bool,
) -> Option<(Range<usize>, bool)> {
    find_in_text(text, needle, from, case_sensitive)
        .map(|found| (found, false))
        .or_else(|| find_in_text(text, needle, 0, case_sensitive).map(|found| (found, true)))
}

/// Whether the whole of `candidate` is one match of `needle`.
pub fn is_match(candidate: &str, needle: &str, case_sensitive: bool) -> bool {
    find_in_text(candidate, needle, 0, case_sensitive) == Some(0..candidate.len())
}

/// Replace every occurrence of `needle`. Returns (new_text, replacements).
///
/// Replaced text is never searched again, so a replacement containing the
/// needle cannot loop.
pub fn replace_all_in_text(
    text: &str,
    needle: &str,
    replacement: &str,
    case_sensitive: bool,
) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    let mut count = 0;
    while let Some(found) = find_in_text(text, needle, pos, case_sensitive) {
        out.push_str(&text[pos..found.start]);
        out.push_str(replacement);
        pos = found.end;
        count += 1;
    }
    out.push_str(&text[pos..]);
    (out, count)
}

/// End byte of a match of `needle` beginning at `start`, if there is one.
fn match_at(text: &str, start: usize, needle: &str, case_sensitive: bool) -> Option<usize> {
    let mut haystack = text[start..].char_indices();
    let mut end = start;
    for wanted in needle.chars() {
        let (offset, found) = haystack.next()?;
        let same = found == wanted
            || (!case_sensitive && found.to_lowercase().eq(wanted.to_lowercase()));
        if !same {
            return None;
        }
        end = start + offset + found.len_utf8();
    }
    Some(end)
}
