//! Embedded C header emission for link-time sample embedding.
//!
//! Renders the same entry list the blob builders consume as `static const
//! int16_t` arrays plus an index table, for firmware that links the samples
//! instead of loading a blob. Assignment and canonicalization are identical
//! to the binary path, so both outputs are interchangeable.

use crate::blob::SampleEntry;
use crate::pads::PAD_NAMES;

/// Derive a C identifier from a filename: drop the extension, map
/// non-alphanumerics to `_`, collapse runs, and prefix `wav_`.
pub fn sanitize_identifier(file_name: &str) -> String {
    let stem = file_name.rsplit_once('.').map_or(file_name, |(stem, _)| stem);

    let mut ident = String::with_capacity(stem.len());
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() {
            ident.push(c);
        } else if !ident.is_empty() && !ident.ends_with('_') {
            ident.push('_');
        }
    }

    format!("wav_{}", ident.trim_end_matches('_'))
}

/// Render the embedded-samples header for entries sorted ascending by pad.
pub fn render_header(entries: &[SampleEntry]) -> String {
    let mut out = String::new();

    out.push_str("/* embedded_samples.h - RED 808 KARZ samples for link-time embedding.\n");
    out.push_str(" * Generated by padpack. Do not edit by hand. */\n");
    out.push_str("#pragma once\n");
    out.push_str("#include <stdint.h>\n\n");
    out.push_str("/* Sample arrays live in memory-mapped QSPI flash so they stay out of SRAM. */\n");
    out.push_str("#define DSY_QSPI_DATA __attribute__((section(\".qspiflash_data\")))\n\n");
    out.push_str(&format!(
        "#define EMBEDDED_SAMPLE_COUNT {}\n\n",
        entries.len()
    ));

    for entry in entries {
        let ident = sanitize_identifier(&entry.file_name);
        out.push_str(&format!(
            "/* Pad {:2} ({}) - {} - {} samples @ {} Hz */\n",
            entry.pad,
            PAD_NAMES[entry.pad as usize],
            entry.file_name,
            entry.samples.len(),
            entry.sample_rate
        ));
        out.push_str(&format!(
            "static const DSY_QSPI_DATA int16_t {ident}[] = {{\n"
        ));

        let rows = entry.samples.chunks(16).count();
        for (i, row) in entry.samples.chunks(16).enumerate() {
            let line = row
                .iter()
                .map(i16::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let sep = if i + 1 < rows { "," } else { "" };
            out.push_str(&format!("    {line}{sep}\n"));
        }
        out.push_str("};\n\n");
    }

    out.push_str("/* Index table: pad -> embedded sample */\n");
    out.push_str("struct EmbeddedSample {\n");
    out.push_str("    uint8_t        padIdx;\n");
    out.push_str("    const int16_t* data;\n");
    out.push_str("    uint32_t       length;  /* number of int16_t samples */\n");
    out.push_str("    const char*    name;\n");
    out.push_str("};\n\n");

    out.push_str(&format!(
        "static const EmbeddedSample embeddedSamples[{}] = {{\n",
        entries.len()
    ));
    for entry in entries {
        out.push_str(&format!(
            "    {{ {:2}, {}, {:6}, \"{}\" }},\n",
            entry.pad,
            sanitize_identifier(&entry.file_name),
            entry.samples.len(),
            entry.file_name.replace('"', "\\\"")
        ));
    }
    out.push_str("};\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pad: u8, file_name: &str, samples: Vec<i16>) -> SampleEntry {
        SampleEntry {
            pad,
            file_name: file_name.to_string(),
            samples,
            sample_rate: 44100,
        }
    }

    #[test]
    fn sanitizes_identifiers() {
        assert_eq!(sanitize_identifier("808 BD.wav"), "wav_808_BD");
        assert_eq!(sanitize_identifier("kick!!(take 2).wav"), "wav_kick_take_2");
        assert_eq!(sanitize_identifier("plain"), "wav_plain");
    }

    #[test]
    fn renders_arrays_and_index_table() {
        let entries = [
            entry(0, "808 BD.wav", vec![1, -2, 3]),
            entry(5, "Clap.wav", vec![0; 17]),
        ];

        let header = render_header(&entries);

        assert!(header.contains("#define EMBEDDED_SAMPLE_COUNT 2"));
        assert!(header.contains("static const DSY_QSPI_DATA int16_t wav_808_BD[] = {"));
        assert!(header.contains("    1, -2, 3\n};"));
        assert!(header.contains("/* Pad  5 (CP) - Clap.wav - 17 samples @ 44100 Hz */"));
        assert!(header.contains("static const EmbeddedSample embeddedSamples[2] = {"));
        assert!(header.contains("wav_808_BD,      3, \"808 BD.wav\""));
    }

    #[test]
    fn splits_rows_of_sixteen() {
        let entries = [entry(0, "bd.wav", (0..17).collect())];

        let header = render_header(&entries);

        // 16 values on the first row (trailing comma), one on the second
        assert!(header.contains("14, 15,\n    16\n};"));
    }

    #[test]
    fn escapes_quotes_in_names() {
        let entries = [entry(0, "odd\"name.wav", vec![0])];

        let header = render_header(&entries);

        assert!(header.contains("\"odd\\\"name.wav\""));
    }
}
