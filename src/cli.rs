use clap::Parser;
use std::path::PathBuf;

/// Split a plain-text novel into per-chapter Markdown files
#[derive(Parser, Debug)]
#[command(name = "novel2md", version, about)]
pub struct Cli {
    /// Path to the input novel (plain text)
    pub input: PathBuf,

    /// Output directory. Chapters are written to a `chapters/` subfolder
    /// inside it. Defaults to the input file's directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Custom chapter-heading regex, replacing auto-detection.
    /// Matched per line; an optional capture group supplies the chapter number.
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Input encoding label (e.g. utf-8, gbk, big5), replacing auto-detection
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Fail on undecodable bytes instead of replacing them with U+FFFD
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// List every written chapter file
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
