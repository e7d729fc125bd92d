//! Command line entry point for the ground plane importer
//!
//! Prints a JSON envelope on stdout: the full load result with
//! `"success": true`, or `{"success": false, "error": ...}` with a nonzero
//! exit code. Downstream tooling parses this envelope to pick antenna
//! placement parameters.

use clap::Parser;
use gnd_import::GndLoader;
use log::LevelFilter;
use serde_json::{Value, json};
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about = "Import and validate a ground plane geometry file", long_about = None)]
struct Args {
    #[arg(help = "Path to the geometry file (.dxf, .stl, .step, .vbs)")]
    file: PathBuf,
    #[arg(help = "Project root used for output placement")]
    project: PathBuf,
    #[arg(
        short = 'v',
        action = clap::ArgAction::Count,
        help = "Sets the level of verbosity"
    )]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Vary the output based on how many times the user used the "verbose"
    // flag (i.e. 'gnd_import -v -v -v' or 'gnd_import -vvv' vs '-v')
    SimpleLogger::new()
        .with_level(match args.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init()
        .expect("Only Logger Setup");

    let envelope = match GndLoader::new(&args.file, &args.project).load() {
        Ok(result) => {
            let mut value =
                serde_json::to_value(&result).expect("LoadResult serializes to JSON");
            if let Value::Object(ref mut map) = value {
                map.insert("success".to_string(), Value::Bool(true));
            }
            value
        }
        Err(err) => json!({
            "success": false,
            "error": err.to_string(),
        }),
    };

    let success = envelope["success"] == Value::Bool(true);
    println!(
        "{}",
        serde_json::to_string_pretty(&envelope).expect("envelope serializes to JSON")
    );

    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
