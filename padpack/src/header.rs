//! Header subcommand - emit decoded samples as an embeddable C header.

use crate::input;
use eyre::Result;
use padpack_core::cheader;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "embedded_samples.h";

/// CLI arguments for header emission.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Directory holding the kit's WAV files
    pub dir: PathBuf,

    /// Output header path (default: embedded_samples.h)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Resolved configuration for header emission.
#[derive(Debug)]
pub struct Config {
    pub dir: PathBuf,
    pub output: PathBuf,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            dir: args.dir,
            output: args.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let files = input::scan_wav_dir(&config.dir)?;
    let assignment = input::assign_pads(&files);
    let entries = input::decode_entries(&config.dir, &assignment)?;

    let header = cheader::render_header(&entries);
    input::write_output(&config.output, header.as_bytes())?;

    tracing::info!(
        path = ?config.output.display(),
        entries = entries.len(),
        "wrote embedded samples header"
    );

    Ok(())
}
