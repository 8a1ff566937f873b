use anyhow::Result;
use clap::Parser;
use novel2md::cli::Cli;
use novel2md::splitter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let result = splitter::split(&cli)?;

    eprintln!(
        "Split {} chapters to {}",
        result.files.len(),
        result.output_dir.display()
    );
    eprintln!("  Encoding: {}", result.encoding);
    eprintln!("  Pattern: {}", result.pattern);

    if cli.verbose {
        for file in &result.files {
            eprintln!("  {}", file.display());
        }
    }

    Ok(())
}
