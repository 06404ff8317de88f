//! Per-language abbreviation correction lists.
//!
//! Pretrained sentence models occasionally misjudge specific abbreviations.
//! The lists here patch those known cases: each entry is an abbreviation
//! (without its trailing period) whose period must not end a sentence. They
//! are merged into the bound model's exception set at call time as an
//! idempotent union.
//!
//! The lists are keyed by the language the tokenizer was constructed for,
//! before alias resolution, so an aliased language does not inherit the
//! corrections of its segmentation stand-in.

// Entries must not include the final period.
const ENGLISH: &[&str] = &["e.g", "al", "i.e"];
const GERMAN: &[&str] = &["al", "z.B", "Inc", "engl", "z. B", "vgl", "lat", "bzw", "S"];

/// Correction list for a canonical language code.
///
/// Returns an empty slice for languages with no registered corrections.
pub fn extra_abbreviations(language: &str) -> &'static [&'static str] {
    match language {
        "english" => ENGLISH,
        "german" => GERMAN,
        _ => &[],
    }
}
