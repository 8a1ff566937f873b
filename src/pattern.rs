//! Built-in chapter heading patterns and heading auto-detection.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

/// Only this many leading lines are scanned during detection; matching the
/// chosen pattern against the full document happens in the segmenter.
const DETECTION_LINES: usize = 100;

/// The built-in heading families, in priority order (most specific first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// 第一章 / 第二十三卷 — captures the Chinese numeral
    CjkChapter,
    /// 第1章 / 第12卷 — captures the Arabic numeral
    ArabicChapter,
    /// Chapter 1 — captures the Arabic numeral
    ChapterTitle,
    /// chapter 1 — lowercase variant
    ChapterLower,
    /// 第...章 with anything after, no capture
    LooseChapter,
    /// "1. " numbered-list heading, no capture
    NumberedList,
    /// "1 " bare-number heading, no capture
    BareNumber,
}

impl PatternKind {
    pub const ALL: [PatternKind; 7] = [
        PatternKind::CjkChapter,
        PatternKind::ArabicChapter,
        PatternKind::ChapterTitle,
        PatternKind::ChapterLower,
        PatternKind::LooseChapter,
        PatternKind::NumberedList,
        PatternKind::BareNumber,
    ];

    fn source(self) -> &'static str {
        match self {
            PatternKind::CjkChapter => r"^第([零一二三四五六七八九十百千]+)[章卷]",
            PatternKind::ArabicChapter => r"^第(\d+)[章卷]",
            PatternKind::ChapterTitle => r"^Chapter\s+(\d+)",
            PatternKind::ChapterLower => r"^chapter\s+(\d+)",
            PatternKind::LooseChapter => r"^第[0-9零一二三四五六七八九十百千]+章.*$",
            PatternKind::NumberedList => r"^\s*\d+\.\s+",
            PatternKind::BareNumber => r"^\s*\d+\s+",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            PatternKind::CjkChapter => "Chinese numeral chapter heading (第一章)",
            PatternKind::ArabicChapter => "Arabic numeral chapter heading (第1章)",
            PatternKind::ChapterTitle => "English chapter heading (Chapter 1)",
            PatternKind::ChapterLower => "English chapter heading (chapter 1)",
            PatternKind::LooseChapter => "loose chapter heading (第...章)",
            PatternKind::NumberedList => "numbered-list heading (1. )",
            PatternKind::BareNumber => "number-prefixed heading (1 )",
        }
    }
}

/// A compiled heading pattern plus a human-readable description.
///
/// Built-in patterns anchor at line start and may capture the chapter
/// index token in group 1; custom patterns are user regexes compiled in
/// multi-line mode, with or without a capture group.
pub struct HeadingPattern {
    pub kind: Option<PatternKind>,
    pub regex: Regex,
    pub description: String,
}

impl HeadingPattern {
    pub fn builtin(kind: PatternKind) -> Self {
        let regex = RegexBuilder::new(kind.source())
            .multi_line(true)
            .build()
            .expect("valid regex");
        Self {
            kind: Some(kind),
            regex,
            description: kind.describe().to_string(),
        }
    }

    /// Compile a user-supplied pattern. Fails with the underlying regex
    /// syntax error; no detection fallback is attempted.
    pub fn custom(source: &str) -> Result<Self> {
        let regex = RegexBuilder::new(source)
            .multi_line(true)
            .build()
            .with_context(|| format!("Invalid chapter pattern: {source}"))?;
        Ok(Self {
            kind: None,
            regex,
            description: format!("custom: {source}"),
        })
    }
}

/// Scan the first lines of the document and return the highest-priority
/// built-in pattern that matches any line. First family to match wins;
/// there is no scoring across families.
pub fn detect(text: &str) -> Option<HeadingPattern> {
    let lines: Vec<&str> = text.lines().take(DETECTION_LINES).collect();

    for kind in PatternKind::ALL {
        let pattern = HeadingPattern::builtin(kind);
        if lines.iter().any(|line| pattern.regex.is_match(line.trim())) {
            return Some(pattern);
        }
    }
    None
}
