//! Input directory scanning and entry loading.

use color_eyre::Section;
use eyre::{Context, Result, eyre};
use padpack_core::audio;
use padpack_core::blob::{RawEntry, SampleEntry};
use padpack_core::pads::{PAD_NAMES, PadAssignment};
use std::path::Path;

/// List `*.wav` files (case-insensitive) in `dir`, lexicographically sorted.
///
/// The sorted order is what makes the downstream pad assignment
/// deterministic.
///
/// # Errors
///
/// Fatal if the directory is missing or holds no WAV files. Nothing has
/// been written at that point, so a failed build leaves no output behind.
pub fn scan_wav_dir(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(eyre!("sample directory not found: {:?}", dir.display()));
    }

    let mut names: Vec<String> = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read directory: {:?}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.to_lowercase().ends_with(".wav"))
        .collect();
    names.sort();

    if names.is_empty() {
        return Err(eyre!("no WAV files in {:?}", dir.display())
            .suggestion("kit samples are expected as *.wav files directly in the directory"));
    }

    tracing::info!(dir = ?dir.display(), files = names.len(), "found WAV files");

    Ok(names)
}

/// Assign pads and report files dropped for lack of a free slot.
pub fn assign_pads(file_names: &[String]) -> PadAssignment {
    let assignment = padpack_core::pads::assign_pads(file_names);

    for file in &assignment.skipped {
        tracing::warn!(file = %file, "no free pad slot, skipping");
    }

    assignment
}

/// Decode every assigned file into a [`SampleEntry`], preserving pad order.
///
/// A file that fails to decode (unsupported format, malformed WAV) is
/// skipped with a warning; its slot stays empty. Other entries are
/// unaffected.
///
/// # Errors
///
/// Fatal when not a single assigned file decodes.
pub fn decode_entries(dir: &Path, assignment: &PadAssignment) -> Result<Vec<SampleEntry>> {
    let mut entries = Vec::with_capacity(assignment.slots.len());

    for slot in &assignment.slots {
        match audio::read_wav_mono16(dir.join(&slot.file_name)) {
            Ok(decoded) => {
                tracing::info!(
                    pad = slot.pad,
                    name = PAD_NAMES[slot.pad as usize],
                    file = %slot.file_name,
                    samples = decoded.samples.len(),
                    rate = decoded.sample_rate,
                    "assigned"
                );
                entries.push(SampleEntry {
                    pad: slot.pad,
                    file_name: slot.file_name.clone(),
                    samples: decoded.samples,
                    sample_rate: decoded.sample_rate,
                });
            }
            Err(error) => {
                tracing::warn!(file = %slot.file_name, %error, "cannot decode, skipping");
            }
        }
    }

    if entries.is_empty() {
        return Err(eyre!("no decodable WAV files in {:?}", dir.display()));
    }

    Ok(entries)
}

/// Read every assigned file untouched into a [`RawEntry`].
///
/// Raw packing performs no decoding, so a read failure here is a plain IO
/// error and fatal.
pub fn read_raw_entries(dir: &Path, assignment: &PadAssignment) -> Result<Vec<RawEntry>> {
    let mut entries = Vec::with_capacity(assignment.slots.len());

    for slot in &assignment.slots {
        let path = dir.join(&slot.file_name);
        let data =
            std::fs::read(&path).wrap_err_with(|| format!("failed to read {:?}", path.display()))?;

        tracing::info!(
            pad = slot.pad,
            name = PAD_NAMES[slot.pad as usize],
            file = %slot.file_name,
            bytes = data.len(),
            "assigned"
        );
        entries.push(RawEntry {
            pad: slot.pad,
            file_name: slot.file_name.clone(),
            data,
        });
    }

    Ok(entries)
}

/// Create the output's parent directory if needed and write it in one shot.
///
/// Artifacts are rendered fully in memory before this point, so a build that
/// fails earlier never leaves a partial file on disk.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).wrap_err_with(|| {
            format!("failed to create output directory: {:?}", parent.display())
        })?;
    }

    std::fs::write(path, contents)
        .wrap_err_with(|| format!("failed to write output: {:?}", path.display()))
}
