//! Split plain-text novels into per-chapter Markdown files.

pub mod cli;
pub mod encoding;
pub mod numeral;
pub mod pattern;
pub mod segmenter;
pub mod splitter;
