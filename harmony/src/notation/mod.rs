//! Textual grammar of pitches, chords and keys.
use std::collections::HashMap;

use once_cell::sync::Lazy;

pub mod roman;

pub use roman::RomanNumeral;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("Unknown pitch name: `{0}`")]
    UnknownPitchName(String),
    #[error(
        "Invalid chord notation: `{0}`. Expected <pitch>, <pitch>m \
        or <pitch>°"
    )]
    InvalidChordNotation(String),
    #[error("Chord {0} is neither major, minor nor diminished triad")]
    UnclassifiedTriad(String),
    #[error("Invalid roman numeral: {0}")]
    InvalidRomanNumeral(String),
}
pub type NotationResult<T> = Result<T, NotationError>;

/// Canonical spelling of the twelve pitch classes, indexed from C.
///
/// Only these names are recognized: no sharps, no ASCII `b` for flats.
pub const PITCH_NAMES: [&'static str; 12] = [
    "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B",
];
pub const ROMAN_NUMERALS: [&'static str; 7] =
    ["i", "ii", "iii", "iv", "v", "vi", "vii"];

/// Suffix of minor chords and minor keys.
pub const MINOR_SUFFIX: &'static str = "m";
pub const DIMINISHED_SUFFIX: &'static str = "°";

static PITCH_LOOKUP: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    PITCH_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| (*name, idx as u8))
        .collect()
});

/// Find pitch-class index of the canonical pitch name.
pub fn pitch_index(name: &str) -> NotationResult<u8> {
    PITCH_LOOKUP
        .get(name)
        .copied()
        .ok_or_else(|| NotationError::UnknownPitchName(name.to_string()))
}

/// Split notation into body and a flag, whether it ended with the suffix.
///
/// A bare suffix (e.g. `"m"`) is not split, so the body is never empty
/// because of the suffix itself.
pub(crate) fn split_suffix<'a>(
    notation: &'a str,
    suffix: &str,
) -> (&'a str, bool) {
    match notation.strip_suffix(suffix) {
        Some(body) if !body.is_empty() => (body, true),
        _ => (notation, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_follows_table() {
        for (idx, name) in PITCH_NAMES.iter().enumerate() {
            assert_eq!(pitch_index(name), Ok(idx as u8));
        }
        assert_eq!(
            pitch_index("C#"),
            Err(NotationError::UnknownPitchName("C#".to_string()))
        );
        assert!(pitch_index("Db").is_err());
        assert!(pitch_index("c").is_err());
    }

    #[test]
    fn suffix_split() {
        assert_eq!(split_suffix("Am", MINOR_SUFFIX), ("A", true));
        assert_eq!(split_suffix("B°", DIMINISHED_SUFFIX), ("B", true));
        assert_eq!(split_suffix("E♭", MINOR_SUFFIX), ("E♭", false));
        assert_eq!(split_suffix("m", MINOR_SUFFIX), ("m", false));
    }
}
