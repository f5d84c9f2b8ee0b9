// CryptoPad CLI
// One transform per invocation: encode, decode, encrypt or decrypt text

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use cryptopad_core::{transform, Mode, Settings, TransformRequest};

/// Base64 and AES text transforms from the command line
#[derive(Parser, Debug)]
#[command(name = "cryptopad")]
#[command(version)]
#[command(about = "Transform text: base64-encode, base64-decode, encrypt, decrypt", long_about = None)]
struct Args {
    /// Text to transform (otherwise read from --in or stdin)
    text: Option<String>,

    /// Transform to apply; defaults to the default_mode from settings.toml
    #[arg(short, long, value_name = "MODE")]
    mode: Option<Mode>,

    /// Encryption key (required for encrypt/decrypt)
    #[arg(short, long, value_name = "KEY")]
    key: Option<String>,

    /// Read input from a file instead of stdin
    #[arg(long = "in", value_name = "FILE")]
    input_file: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long = "out", value_name = "FILE")]
    output_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let mode = match args.mode {
        Some(mode) => mode,
        None => {
            let settings = Settings::load_default()
                .context("failed to read settings.toml")?;
            log::debug!("no --mode given, using default_mode = {}", settings.default_mode);
            settings.default_mode
        }
    };

    let input = read_input(&args)?;

    let request = TransformRequest::new(mode, &input, args.key.as_deref());
    let output = match transform(&request) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::debug!("wrote {} bytes to {}", output.len(), path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}

fn read_input(args: &Args) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    // A trailing newline from shell pipes would corrupt decode/decrypt input
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}
