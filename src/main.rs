//! dis8080 - Intel 8080 disassembler
//!
//! Reads a flat binary image and prints its listing to stdout.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use thiserror::Error;

use dis8080::error::{EXIT_IO, EXIT_MISSING_ARGUMENT};
use dis8080::{write_listing, LoadError, ProgramImage};

/// Disassemble an Intel 8080 binary image
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Binary image to disassemble
    file: Option<PathBuf>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("missing argument: expected a path to a binary image")]
    MissingArgument,

    #[error(transparent)]
    Usage(clap::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("cannot write listing: {0}")]
    Write(#[source] io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::MissingArgument | CliError::Usage(_) => EXIT_MISSING_ARGUMENT,
            CliError::Load(err) => err.exit_code(),
            CliError::Write(_) => EXIT_IO,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(err)) => {
            let _ = err.print();
            ExitCode::from(EXIT_MISSING_ARGUMENT)
        }
        Err(err) => {
            log::debug!("exiting after error: {:?}", err);
            eprintln!("{}: {}", env!("CARGO_PKG_NAME"), err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<(), CliError> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(CliError::Usage(err)),
    };

    let path = args.file.ok_or(CliError::MissingArgument)?;
    let image = ProgramImage::load(&path)?;
    log::info!("disassembling {} ({} bytes)", path.display(), image.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = write_listing(image.as_bytes(), &mut out).and_then(|lines| {
        out.flush()?;
        Ok(lines)
    });

    match result {
        Ok(lines) => {
            log::info!("wrote {} lines", lines);
            Ok(())
        }
        // Reader went away (e.g. piped into `head`)
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(CliError::Write(err)),
    }
}
