//! Triads, their classification and chord notation.
use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::notation::{
    split_suffix, NotationError, NotationResult, DIMINISHED_SUFFIX,
    MINOR_SUFFIX,
};

use super::{
    is_major_third_above, is_minor_third_above, is_perfect_fifth_above,
    Pitch, DIMINISHED_FIFTH, MAJOR_THIRD, MINOR_THIRD, PERFECT_FIFTH,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TriadQuality {
    Major,
    Minor,
    Diminished,
    /// Not a triad, or a triad of unsupported quality (e.g. augmented).
    Other,
}
impl TriadQuality {
    /// Semitones of the third and the fifth above root.
    pub fn intervals(&self) -> Option<(u8, u8)> {
        match self {
            Self::Major => Some((MAJOR_THIRD, PERFECT_FIFTH)),
            Self::Minor => Some((MINOR_THIRD, PERFECT_FIFTH)),
            Self::Diminished => Some((MINOR_THIRD, DIMINISHED_FIFTH)),
            Self::Other => None,
        }
    }
    /// Notation suffix, appended to the root name.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Self::Major => Some(""),
            Self::Minor => Some(MINOR_SUFFIX),
            Self::Diminished => Some(DIMINISHED_SUFFIX),
            Self::Other => None,
        }
    }
}

/// Ordered pitches, where the first one is considered as root.
///
/// There is no inversion handling: `[E, G, C]` is not a C major triad.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chord {
    notes: Vec<Pitch>,
}
impl Chord {
    pub fn new(notes: impl Into<Vec<Pitch>>) -> Self {
        Self {
            notes: notes.into(),
        }
    }
    /// Build triad of given quality from root.
    ///
    /// # Returns
    /// None for [TriadQuality::Other].
    pub fn triad(root: Pitch, quality: TriadQuality) -> Option<Self> {
        let (third, fifth) = quality.intervals()?;
        Some(Self::new(vec![
            root,
            root + third as i32,
            root + fifth as i32,
        ]))
    }
    /// Parse `<pitch>`, `<pitch>m` or `<pitch>°`.
    ///
    /// # Example
    /// ```
    /// # use harmony::primitives::{Chord, Pitch, TriadQuality};
    /// let chord = Chord::from_chord_notation("B°").unwrap();
    /// assert_eq!(chord.quality(), TriadQuality::Diminished);
    /// assert_eq!(chord.notes()[2], Pitch::from_notation("F").unwrap());
    /// assert!(Chord::from_chord_notation("Bmaj7").is_err());
    /// ```
    pub fn from_chord_notation(notation: &str) -> NotationResult<Self> {
        log::trace!("parsing chord: {:?}", notation);
        let text = notation.trim();
        let (root, quality) = match split_suffix(text, DIMINISHED_SUFFIX) {
            (root, true) => (root, TriadQuality::Diminished),
            (_, false) => match split_suffix(text, MINOR_SUFFIX) {
                (root, true) => (root, TriadQuality::Minor),
                (root, false) => (root, TriadQuality::Major),
            },
        };
        let invalid =
            || NotationError::InvalidChordNotation(notation.to_string());
        let root = Pitch::from_name(root).map_err(|_| invalid())?;
        Self::triad(root, quality).ok_or_else(invalid)
    }
    pub fn notes(&self) -> &[Pitch] {
        &self.notes
    }
    /// The first note.
    pub fn root(&self) -> Option<Pitch> {
        self.notes.first().copied()
    }
    /// Classify chord by intervals from the first note.
    ///
    /// Anything, that is not exactly 3 notes, is [TriadQuality::Other].
    pub fn quality(&self) -> TriadQuality {
        match self.notes.as_slice() {
            &[root, third, fifth] => {
                if is_major_third_above(root, third)
                    && is_perfect_fifth_above(root, fifth)
                {
                    TriadQuality::Major
                } else if is_minor_third_above(root, third)
                    && is_perfect_fifth_above(root, fifth)
                {
                    TriadQuality::Minor
                } else if is_minor_third_above(root, third)
                    && is_minor_third_above(third, fifth)
                {
                    TriadQuality::Diminished
                } else {
                    TriadQuality::Other
                }
            }
            _ => TriadQuality::Other,
        }
    }
    pub fn is_major_triad(&self) -> bool {
        self.quality() == TriadQuality::Major
    }
    pub fn is_minor_triad(&self) -> bool {
        self.quality() == TriadQuality::Minor
    }
    pub fn is_diminished_triad(&self) -> bool {
        self.quality() == TriadQuality::Diminished
    }
    /// Chord notation, like `"Am"`.
    ///
    /// Fails with [NotationError::UnclassifiedTriad] if chord is neither
    /// major, minor nor diminished triad.
    pub fn to_notation(&self) -> NotationResult<String> {
        match (self.root(), self.quality().suffix()) {
            (Some(root), Some(suffix)) => Ok(format!("{}{}", root, suffix)),
            _ => Err(NotationError::UnclassifiedTriad(self.notes_string())),
        }
    }
    fn notes_string(&self) -> String {
        format!("{{{}}}", self.notes.iter().join(" "))
    }
}
/// Chord notation, or braced notes list for unclassified chords.
impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_notation() {
            Ok(notation) => write!(f, "{}", notation),
            Err(_) => write!(f, "{}", self.notes_string()),
        }
    }
}
impl FromStr for Chord {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_chord_notation(s)
    }
}
