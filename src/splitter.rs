//! Orchestration: read the novel, pick a heading pattern, segment, and
//! write one Markdown file per chapter plus a table-of-contents README.

use crate::cli::Cli;
use crate::encoding;
use crate::pattern::{self, HeadingPattern};
use crate::segmenter::{self, Segment};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the subdirectory chapters are written into.
const CHAPTERS_DIR: &str = "chapters";

/// Summary of one split run.
#[derive(Debug)]
pub struct SplitResult {
    pub encoding: String,
    pub pattern: String,
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

pub fn split(cli: &Cli) -> Result<SplitResult> {
    let document = encoding::read_document(&cli.input, cli.encoding.as_deref(), cli.strict)?;

    let pattern = match &cli.pattern {
        Some(source) => HeadingPattern::custom(source)?,
        None => pattern::detect(&document.text).context(
            "Could not detect a chapter heading pattern; pass --pattern to supply one",
        )?,
    };

    let segments = segmenter::segment(&document.text, &pattern);
    if segments.is_empty() {
        bail!(
            "Pattern \"{}\" matched no chapter headings",
            pattern.description
        );
    }

    let output_dir = resolve_output_dir(cli);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;

    // Chapter files are always written as UTF-8, whatever the input was.
    let mut files = Vec::with_capacity(segments.len());
    for seg in &segments {
        let path = output_dir.join(&seg.filename);
        fs::write(&path, seg.content(&document.text))
            .with_context(|| format!("Failed to write chapter: {}", path.display()))?;
        files.push(path);
    }

    write_index(&output_dir, &segments)?;

    Ok(SplitResult {
        encoding: document.encoding.name().to_string(),
        pattern: pattern.description,
        output_dir,
        files,
    })
}

fn resolve_output_dir(cli: &Cli) -> PathBuf {
    let base = cli.output.clone().unwrap_or_else(|| {
        cli.input
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    });
    base.join(CHAPTERS_DIR)
}

/// Write a README.md with a table of contents linking every chapter.
fn write_index(output_dir: &Path, segments: &[Segment]) -> Result<()> {
    let mut readme = String::from("## Table of Contents\n\n");

    for (i, seg) in segments.iter().enumerate() {
        readme.push_str(&format!(
            "{}. [{}]({})\n",
            i + 1,
            seg.display_title,
            seg.filename
        ));
    }
    readme.push('\n');

    fs::write(output_dir.join("README.md"), &readme)
        .with_context(|| "Failed to write README.md")?;

    Ok(())
}
