use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Source subtitle file; prompted for interactively when omitted
    pub input: Option<PathBuf>,

    /// Target language code (en, fa, ...); prompted for interactively when omitted
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Source language code, "auto" for detection
    #[arg(long)]
    pub source_lang: Option<String>,

    /// Maximum characters per translation request
    #[arg(long)]
    pub max_chunk_size: Option<usize>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Read one line from stdin after printing a prompt.
pub fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
