//! Example: Preprocess a single file of raw 8-bit audio
//!
//! Usage:
//!   cargo run --example preprocess_file -- [--config config.json] [audio.raw]
//!
//! The file is read as-is; every byte becomes one sample. Container headers
//! are not parsed.

use std::env;
use std::fs;

use stratum_prep::{Pipeline, PipelineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let mut config = PipelineConfig::default();
    let mut path = String::from("audio.wav");

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--config" => {
                let config_path = args.first().ok_or("--config requires a path")?.clone();
                args.remove(0);
                config = serde_json::from_str(&fs::read_to_string(&config_path)?)?;
            }
            _ => path = a,
        }
    }

    config.validate()?;
    let file = fs::File::open(&path)?;
    let segments = Pipeline::new(config).process_reader(file)?;

    println!("{}: {} segments", path, segments.len());
    for (i, segment) in segments.iter().enumerate() {
        println!("  [{}] {:?}", i, segment.samples());
    }

    Ok(())
}
