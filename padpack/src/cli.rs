//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "padpack")]
#[command(about = "WAV drum kit packing tools for Daisy Seed flash")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode WAVs to mono 16-bit PCM and pack them into a sample blob
    Bin(crate::bin::Args),

    /// Pack WAV files untouched into a raw blob the firmware parses at boot
    Pack(crate::pack::Args),

    /// Emit decoded samples as a C header for link-time embedding
    Header(crate::header::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Bin(args) => crate::bin::execute(args.try_into()?),
        Commands::Pack(args) => crate::pack::execute(args.try_into()?),
        Commands::Header(args) => crate::header::execute(args.try_into()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bin_command() {
        let cli = Cli::parse_from(["padpack", "bin", "kit"]);

        match &cli.command {
            Commands::Bin(crate::bin::Args { dir, output: None }) if dir.to_str() == Some("kit") => {
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_bin_with_output() {
        let cli = Cli::parse_from(["padpack", "bin", "kit", "-o", "out/samples.bin"]);

        match &cli.command {
            Commands::Bin(crate::bin::Args {
                dir,
                output: Some(output),
            }) if dir.to_str() == Some("kit") && output.to_str() == Some("out/samples.bin") => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_pack_command() {
        let cli = Cli::parse_from(["padpack", "pack", "kit"]);

        match &cli.command {
            Commands::Pack(crate::pack::Args { dir, output: None })
                if dir.to_str() == Some("kit") => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_header_with_output() {
        let cli = Cli::parse_from(["padpack", "header", "kit", "-o", "samples.h"]);

        match &cli.command {
            Commands::Header(crate::header::Args {
                dir,
                output: Some(output),
            }) if dir.to_str() == Some("kit") && output.to_str() == Some("samples.h") => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }
}
