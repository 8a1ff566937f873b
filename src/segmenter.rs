//! Chapter boundary segmentation.
//!
//! Finds every heading match in the document and cuts it into contiguous,
//! non-overlapping segments: each segment runs from its heading to the
//! next heading (or end of document).

use crate::numeral;
use crate::pattern::HeadingPattern;

/// Filesystem-unsafe characters replaced when deriving display titles.
const UNSAFE_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

const MAX_TITLE_CHARS: usize = 50;

/// One chapter: a half-open `[start, end)` range into the document plus
/// its derived title, index token and output filename.
#[derive(Debug, Clone)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    /// Full heading line as it appears in the source, trimmed.
    pub title: String,
    /// Sanitized title for human-facing listings, with Chinese chapter
    /// numerals rendered in Arabic form where possible.
    pub display_title: String,
    /// Raw captured chapter number (Chinese or Arabic numeral), or the
    /// 1-based running count when the pattern has no capture group.
    pub index_token: String,
    pub filename: String,
}

impl Segment {
    /// The chapter text, borrowed from the document.
    pub fn content<'a>(&self, document: &'a str) -> &'a str {
        document[self.start..self.end].trim()
    }
}

/// Split the document at every match of `pattern`.
///
/// Segments are contiguous and ordered: each ends where the next begins,
/// and the last one runs to the end of the document. Text before the
/// first heading is not emitted. An empty result means the pattern
/// matched nothing; the caller decides whether that is fatal.
pub fn segment(document: &str, pattern: &HeadingPattern) -> Vec<Segment> {
    let mut matches = Vec::new();
    for caps in pattern.regex.captures_iter(document) {
        let Some(m) = caps.get(0) else { continue };
        let token = caps.get(1).map(|g| g.as_str().to_string());
        matches.push((m.start(), m.as_str().to_string(), token));
    }

    let mut segments = Vec::with_capacity(matches.len());
    for (i, (start, matched, token)) in matches.iter().enumerate() {
        let end = matches.get(i + 1).map_or(document.len(), |next| next.0);

        let title = heading_line(document, *start, matched);
        let index_token = token
            .clone()
            .unwrap_or_else(|| (segments.len() + 1).to_string());
        let display_title = derive_display_title(&title, &index_token);
        let filename = format!("Chapter{:0>4}.md", index_token);

        segments.push(Segment {
            start: *start,
            end,
            title,
            display_title,
            index_token,
            filename,
        });
    }

    segments
}

/// The full source line containing the match at `start`, trimmed; falls
/// back to the bare matched text when the line trims to nothing.
fn heading_line(document: &str, start: usize, matched: &str) -> String {
    let line_start = document[..start].rfind('\n').map_or(0, |pos| pos + 1);
    let line_end = document[start..]
        .find('\n')
        .map_or(document.len(), |off| start + off);

    let line = document[line_start..line_end].trim();
    if line.is_empty() {
        matched.trim().to_string()
    } else {
        line.to_string()
    }
}

/// Sanitize a heading line for display: replace filesystem-unsafe
/// characters, trim, truncate. 第X章 headings whose sanitized form lacks
/// an Arabic chapter number are rendered as 第{n}章 via numeral parsing,
/// keeping the raw token when parsing fails.
fn derive_display_title(title: &str, token: &str) -> String {
    let safe: String = title
        .chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let safe: String = safe.trim().chars().take(MAX_TITLE_CHARS).collect();

    if title.starts_with('第') && !has_arabic_chapter_number(&safe) {
        return match numeral::parse_cjk_number(token) {
            Some(n) => format!("第{n}章"),
            None => format!("第{token}章"),
        };
    }
    safe
}

fn has_arabic_chapter_number(title: &str) -> bool {
    title
        .strip_prefix('第')
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
}
