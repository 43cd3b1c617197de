use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use lunaria::{
    HighlightOptions, Highlighter, HtmlRenderer, Palette, RichTextRenderer, TerminalRenderer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `<color=#rrggbb>` tags
    Rich,
    Html,
    /// ANSI truecolor escape codes
    Ansi,
}

/// Highlight a Lua file
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The file to highlight, stdin if not given
    file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
    format: Format,

    /// A JSON file mapping token classes to hex colors
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Give up highlighting after that many milliseconds
    #[arg(long, default_value_t = 200)]
    timeout_ms: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let content = match &cli.file {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };

    let palette = match &cli.palette {
        Some(path) => Palette::load_from_file(path)?,
        None => Palette::default(),
    };
    let options = HighlightOptions::new()
        .palette(palette)
        .time_budget(Duration::from_millis(cli.timeout_ms));
    let highlighter = Highlighter::with_options(options)?;
    let highlighted = highlighter.highlight_code(&content)?;

    let output = match cli.format {
        Format::Rich => RichTextRenderer.render(&highlighted),
        Format::Html => HtmlRenderer::default().render(&highlighted),
        Format::Ansi => TerminalRenderer.render(&highlighted),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
