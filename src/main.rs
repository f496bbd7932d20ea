mod args;
mod logger;

use std::process::ExitCode;

use aesfips::{Cipher, Key, RoundObserver, TraceRecorder, TracingObserver};
use args::{BlockArgs, Cli, Commands};
use clap::Parser;
use tracing::{debug, metadata::LevelFilter};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid {what} hex: {source}")]
    InvalidHex {
        what: &'static str,
        source: hex::FromHexError,
    },

    #[error(transparent)]
    Aes(#[from] aesfips::Error),
}

fn main() -> ExitCode {
    logger::init(LevelFilter::WARN);

    match aes_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn aes_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    let (args, decrypt) = match args.command {
        Commands::Encrypt(args) => (args, false),
        Commands::Decrypt(args) => (args, true),
    };
    let BlockArgs { key, block, trace } = args;

    let key = Key::try_from_slice(&parse_hex(&key, "key")?)?;
    let block = parse_hex(&block, "block")?;

    let cipher = Cipher::new(&key);
    debug!(key_size = ?cipher.key_size(), rounds = cipher.key_schedule().rounds(), "key expanded");

    let mut recorder = TraceRecorder::new();
    let mut observer = |event: &aesfips::TraceEvent| {
        TracingObserver.observe(event);
        if trace {
            recorder.observe(event);
        }
    };

    let output = if decrypt {
        cipher.decrypt_block_traced(&block, &mut observer)?
    } else {
        cipher.encrypt_block_traced(&block, &mut observer)?
    };
    debug!(decrypt, "block processed");

    for event in recorder.events() {
        println!("{event}");
    }
    println!("{}", hex::encode(output));
    Ok(())
}

/// Decodes a hex string, ignoring whitespace.
fn parse_hex(s: &str, what: &'static str) -> Result<Vec<u8>, CliError> {
    let hex: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(hex).map_err(|source| CliError::InvalidHex { what, source })
}
