//! Bin subcommand - decode WAVs and pack the canonical-PCM sample blob.

use crate::input;
use eyre::Result;
use padpack_core::blob;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "build/samples.bin";

/// QSPI flash budget on the Daisy Seed. The firmware image sits at
/// 0x90040000; the blob is flashed 768 KiB into the 7936 KiB QSPI region
/// and read memory-mapped from there.
const QSPI_BLOB_ADDR: u32 = 0x9010_0000;
const QSPI_TOTAL_KIB: usize = 7936;
const QSPI_BLOB_OFFSET_KIB: usize = 768;

/// CLI arguments for sample blob packing.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Directory holding the kit's WAV files
    pub dir: PathBuf,

    /// Output blob path (default: build/samples.bin)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Resolved configuration for sample blob packing.
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

    let total_samples: usize = entries.iter().map(|e| e.samples.len()).sum();
    tracing::info!(
        pads = entries.len(),
        samples = total_samples,
        bytes = total_samples * 2,
        "decoded sample data"
    );

    let blob = blob::build_sample_blob(&entries);
    input::write_output(&config.output, &blob)?;

    let free_kib = QSPI_TOTAL_KIB.saturating_sub(QSPI_BLOB_OFFSET_KIB + blob.len() / 1024);
    tracing::info!(
        path = ?config.output.display(),
        size = blob.len(),
        flash_addr = %format_addr(QSPI_BLOB_ADDR),
        qspi_free_kib = free_kib,
        "wrote sample blob"
    );

    Ok(())
}

/// Format a flash address the way the linker scripts spell it.
fn format_addr(addr: u32) -> String {
    format!("{addr:#010x}")
}
