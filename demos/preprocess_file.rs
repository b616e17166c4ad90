//! Demo: Preprocess a WAV file
//!
//! Usage: `cargo run --example preprocess_file -- <input.wav> [output.wav] [config.json]`
//!
//! Runs the configured chain (trim + normalize by default), prints the
//! result metadata as JSON and optionally writes the processed audio.

use stratum_scope::io::wav::{export_array, import_array};
use stratum_scope::{preprocess, PreprocessConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .ok_or("usage: preprocess_file <input.wav> [output.wav] [config.json]")?;
    let output = args.next();
    let config = match args.next() {
        Some(path) => PreprocessConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => PreprocessConfig::default(),
    };

    let audio = import_array(&input)?;
    println!(
        "Loaded {}: {} {} frames at {} Hz ({:?})",
        audio.name,
        audio.array.len(),
        audio.array.channels(),
        audio.sample_rate,
        audio.subtype
    );

    let result = preprocess(&audio.array, audio.sample_rate, &config)?;
    println!("{}", serde_json::to_string_pretty(&result.metadata)?);

    if let Some(output) = output {
        export_array(&output, &result.array, audio.sample_rate, audio.subtype)?;
        println!("Wrote {}", output);
    }

    Ok(())
}
