use clap::Parser;
use log::debug;
use serde_json::to_string_pretty;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::authorisation::AuthorisationEngine;
use crate::cli::Cli;
use crate::models::DecisionReport;
use crate::registry::{Registry, load_registry_file};

mod authorisation;
mod cli;
mod models;
mod registry;

fn main() -> std::io::Result<()> {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let text = read_input_text(&cli)?;
    let registry = match &cli.registry {
        Some(path) => load_registry_file(path)?,
        None => Registry::new(),
    };
    debug!("Registry holds {} entries", registry.len());

    let engine = AuthorisationEngine::new();
    let result = engine.decide(&text, &registry.snapshot());
    let report = DecisionReport::new(&text, &result);

    if cli.json {
        println!("{}", to_string_pretty(&report)?);
    } else {
        println!("{}", report.message);
        println!("{}", report.reason);
    }
    Ok(())
}

fn read_input_text(cli: &Cli) -> Result<String, Box<dyn Error>> {
    match (&cli.text, &cli.file) {
        (Some(text), None) => Ok(text.clone()),
        (None, Some(path)) => Ok(read_text_file(path)?),
        (None, None) => Err("Provide billboard text or --file".into()),
        (Some(_), Some(_)) => Err("Provide either billboard text or --file, not both".into()),
    }
}

fn read_text_file(path: &Path) -> std::io::Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(content.trim().to_string())
}
