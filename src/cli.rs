use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Billboard text to check (extracted by OCR)
    pub text: Option<String>,

    /// Read the billboard text from a file instead
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// JSON file of registered billboard texts
    #[arg(short, long)]
    pub registry: Option<PathBuf>,

    /// Print the full decision report as JSON
    #[arg(short, long)]
    pub json: bool,
}
