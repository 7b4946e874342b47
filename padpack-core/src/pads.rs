//! Deterministic assignment of sample files to the 16 hardware pads.

/// Number of hardware pad slots.
pub const PAD_COUNT: usize = 16;

/// Short instrument name for each pad index.
pub const PAD_NAMES: [&str; PAD_COUNT] = [
    "BD", "SD", "CH", "OH", "CY", "CP", "RS", "CB", "LT", "MT", "HT", "MA", "CL", "HC", "MC", "LC",
];

/// Exact filename prefixes for the RED 808 KARZ kit, checked first.
/// Order matters: first match wins.
const PREFIX_TABLE: &[(&str, u8)] = &[
    ("808 BD", 0),   // Bass Drum
    ("808 SD", 1),   // Snare Drum
    ("808 HH", 2),   // Closed HiHat
    ("808 OH", 3),   // Open HiHat
    ("808 CY", 4),   // Cymbal
    ("808 CP", 5),   // Clap
    ("808 RS", 6),   // Rimshot
    ("808 COW", 7),  // Cowbell
    ("808 LT", 8),   // Low Tom
    ("808 MT", 9),   // Mid Tom
    ("808 HT", 10),  // High Tom
    ("808 MA", 11),  // Maracas
    ("808 CL", 12),  // Claves
    ("808 HC", 13),  // Hi Conga
    ("808 MC", 14),  // Mid Conga
    ("808 LC", 15),  // Low Conga
];

/// Generic keyword fallback for files that miss the exact prefixes.
/// Order matters: first match wins.
const KEYWORD_TABLE: &[(&str, u8)] = &[
    ("BD", 0),
    ("KICK", 0),
    ("SD", 1),
    ("SNARE", 1),
    ("CH", 2),
    ("HH", 2),
    ("HIHAT", 2),
    ("CLOSED", 2),
    ("OH", 3),
    ("OPEN", 3),
    ("CY", 4),
    ("CYMBAL", 4),
    ("CRASH", 4),
    ("RIDE", 4),
    ("CP", 5),
    ("CLAP", 5),
    ("RS", 6),
    ("RIM", 6),
    ("CB", 7),
    ("COW", 7),
    ("BELL", 7),
    ("LT", 8),
    ("LTOM", 8),
    ("MT", 9),
    ("MTOM", 9),
    ("HT", 10),
    ("HTOM", 10),
    ("MA", 11),
    ("MARAC", 11),
    ("CL", 12),
    ("CLAV", 12),
    ("CLAVE", 12),
    ("HC", 13),
    ("CONGA", 13),
    ("MC", 14),
    ("LC", 15),
];

/// Guess the pad for a filename, case-insensitively.
///
/// Exact prefixes are tried before keyword substrings; within each table the
/// first match wins. Returns `None` when nothing matches.
pub fn classify(file_name: &str) -> Option<u8> {
    let upper = file_name.to_uppercase();

    PREFIX_TABLE
        .iter()
        .find(|(prefix, _)| upper.starts_with(prefix))
        .or_else(|| KEYWORD_TABLE.iter().find(|(kw, _)| upper.contains(kw)))
        .map(|&(_, pad)| pad)
}

/// Mutable claimed-slot state shared by the two assignment passes.
#[derive(Clone, Debug, Default)]
pub struct SlotClaims {
    used: [bool; PAD_COUNT],
}

impl SlotClaims {
    /// Claim `pad` if it is still free; returns whether the claim succeeded.
    pub fn claim(&mut self, pad: u8) -> bool {
        let slot = &mut self.used[pad as usize];
        let was_free = !*slot;
        *slot = true;
        was_free
    }

    /// Lowest-numbered free slot, if any remains.
    pub fn first_free(&self) -> Option<u8> {
        self.used.iter().position(|used| !used).map(|pad| pad as u8)
    }
}

/// One pad bound to one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadSlot {
    pub pad: u8,
    pub file_name: String,
}

/// Result of assigning a sorted file list to the pad slots.
///
/// `slots` is sorted ascending by pad id and holds at most [`PAD_COUNT`]
/// entries with pairwise-distinct pads; `skipped` lists files dropped after
/// the slot space filled up.
#[derive(Clone, Debug, Default)]
pub struct PadAssignment {
    pub slots: Vec<PadSlot>,
    pub skipped: Vec<String>,
}

/// Assign each file to a unique pad.
///
/// `file_names` must be in lexicographic order; the result is deterministic
/// for a given ordering. Pass 1 gives each classified file its candidate slot
/// (first file in order wins), pass 2 places the remainder into the
/// lowest-numbered free slots, and anything left once all 16 slots are
/// claimed is dropped into `skipped`. This never fails.
pub fn assign_pads<S: AsRef<str>>(file_names: &[S]) -> PadAssignment {
    let classified: Vec<(&str, Option<u8>)> = file_names
        .iter()
        .map(|name| (name.as_ref(), classify(name.as_ref())))
        .collect();

    let mut claims = SlotClaims::default();
    let (mut slots, rest) = pass_unique(&classified, &mut claims);
    let (overflow, skipped) = pass_overflow(&rest, &mut claims);

    slots.extend(overflow);
    slots.sort_by_key(|slot| slot.pad);

    PadAssignment { slots, skipped }
}

/// Pass 1: files whose candidate slot is still free claim it.
fn pass_unique<'a>(
    classified: &[(&'a str, Option<u8>)],
    claims: &mut SlotClaims,
) -> (Vec<PadSlot>, Vec<&'a str>) {
    let mut slots = Vec::new();
    let mut rest = Vec::new();

    for &(name, candidate) in classified {
        match candidate {
            Some(pad) if claims.claim(pad) => slots.push(PadSlot {
                pad,
                file_name: name.to_string(),
            }),
            _ => rest.push(name),
        }
    }

    (slots, rest)
}

/// Pass 2: leftover files take the lowest free slot; none free means dropped.
fn pass_overflow(rest: &[&str], claims: &mut SlotClaims) -> (Vec<PadSlot>, Vec<String>) {
    let mut slots = Vec::new();
    let mut skipped = Vec::new();

    for &name in rest {
        match claims.first_free() {
            Some(pad) => {
                claims.claim(pad);
                slots.push(PadSlot {
                    pad,
                    file_name: name.to_string(),
                });
            }
            None => skipped.push(name.to_string()),
        }
    }

    (slots, skipped)
}
