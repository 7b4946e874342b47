//! padpack-core: WAV drum-kit packing pipeline for memory-mapped flash.
//!
//! Firmware on the Daisy Seed reads sample data straight out of QSPI flash
//! with no filesystem and no decoder, so everything format-shaped happens
//! here on the build host, in three stages:
//!
//! - [`audio`]: decode one WAV into canonical mono 16-bit PCM
//! - [`pads`]: deterministically bind each file to one of 16 pad slots
//! - [`blob`]: lay the bound entries out as a header + TOC + aligned payload
//!
//! [`cheader`] renders the same entries as a C header for link-time
//! embedding instead of blob loading.
//!
//! # Quick Start
//!
//! ```ignore
//! use padpack_core::{audio, blob, pads};
//!
//! let assignment = pads::assign_pads(&file_names);
//! let entries: Vec<blob::SampleEntry> = /* decode assignment.slots */;
//! let bytes = blob::build_sample_blob(&entries);
//! ```

pub mod audio;
pub mod blob;
pub mod cheader;
pub mod error;
pub mod pads;
