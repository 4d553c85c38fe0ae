//! owl-structural - flatten a batch of OWL 2 axioms
//!
//! ```bash
//! # Read a JSON array of axioms and print the normal form
//! owl-structural batch.json
//!
//! # From stdin, with settings and JSON output
//! cat batch.json | owl-structural --config settings.yaml --output json
//! ```

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use owl_structural::{
    config::Settings, logger, ontology::Axiom, Result, StructuralTransformation,
};

#[derive(Parser)]
#[command(name = "owl-structural", author, version, about = "Flatten OWL 2 axioms into structural normal form")]
struct Cli {
    /// JSON file holding an array of axioms; stdin when omitted
    input: Option<PathBuf>,

    /// YAML or TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Output::Text)]
    output: Output,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    /// One axiom per line in functional syntax
    Text,
    /// The transformed set as a JSON array
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    logger::init(&settings.logger)?;

    let content = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let batch: Vec<Axiom> = serde_json::from_str(&content)?;

    let engine = StructuralTransformation::from_config(&settings.transform)?;
    let result = engine.transform(&batch);

    match cli.output {
        Output::Text => {
            for axiom in &result {
                println!("{axiom}");
            }
        }
        Output::Json => {
            let axioms: Vec<&Axiom> = result.iter().collect();
            println!("{}", serde_json::to_string_pretty(&axioms)?);
        }
    }
    Ok(())
}
