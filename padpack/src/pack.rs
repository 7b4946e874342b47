//! Pack subcommand - pack WAV files untouched into the raw blob.
//!
//! The firmware variant backing this mode parses the WAV headers itself at
//! boot, so payloads stay byte-identical to the source files.

use crate::input;
use eyre::Result;
use padpack_core::blob;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "build/samples.bin";

/// Raw blobs are flashed 256 KiB into QSPI, right behind the firmware.
const QSPI_BLOB_ADDR: u32 = 0x9008_0000;

/// CLI arguments for raw packing.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Directory holding the kit's WAV files
    pub dir: PathBuf,

    /// Output blob path (default: build/samples.bin)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Resolved configuration for raw packing.
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
    let entries = input::read_raw_entries(&config.dir, &assignment)?;

    let total_bytes: usize = entries.iter().map(|e| e.data.len()).sum();
    tracing::info!(pads = entries.len(), bytes = total_bytes, "collected WAV files");

    let blob = blob::build_raw_blob(&entries);
    input::write_output(&config.output, &blob)?;

    tracing::info!(
        path = ?config.output.display(),
        size = blob.len(),
        flash_addr = %format!("{QSPI_BLOB_ADDR:#010x}"),
        "wrote raw blob"
    );

    Ok(())
}
