//! Diatonic keys: scale construction, chord membership and degrees.
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::notation::{
    split_suffix, NotationError, RomanNumeral, MINOR_SUFFIX,
};

use super::{Chord, Pitch, SCALE_LENGTH};

/// Failure of labeling a chord by scale degree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DegreeError {
    #[error("Root note of chord {chord} is not in key {key}")]
    RootNotInKey { chord: String, key: String },
    #[error(
        "Can not label chord {0}: it is not a major, minor \
        or diminished triad"
    )]
    UnclassifiedChord(String),
}
pub type DegreeResult<T> = Result<T, DegreeError>;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Mode {
    Major,
    /// Natural minor.
    Minor,
}
impl Mode {
    /// Modes in the order keys are enumerated for every root.
    pub const ALL: [Mode; 2] = [Mode::Major, Mode::Minor];

    /// Semitone steps between consecutive scale notes.
    pub fn steps(&self) -> [u8; SCALE_LENGTH - 1] {
        match self {
            Self::Major => [2, 2, 1, 2, 2, 2],
            Self::Minor => [2, 1, 2, 2, 1, 2],
        }
    }
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Minor => MINOR_SUFFIX,
        }
    }
}

/// Root with mode, and the scale built from them.
///
/// Notation is `<pitch>` for major and `<pitch>m` for minor keys.
/// Serialized as notation string.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key {
    root: Pitch,
    mode: Mode,
    scale: [Pitch; SCALE_LENGTH],
}
impl Key {
    pub fn new(root: Pitch, mode: Mode) -> Self {
        let mut scale = [root; SCALE_LENGTH];
        for (idx, step) in mode.steps().into_iter().enumerate() {
            scale[idx + 1] = scale[idx] + step as i32;
        }
        Self { root, mode, scale }
    }
    /// Parse key notation, like `"G"` or `"G♭m"`.
    ///
    /// # Example
    /// ```
    /// # use harmony::primitives::{Key, Mode};
    /// let key = Key::from_notation("Am").unwrap();
    /// assert_eq!(key.mode(), Mode::Minor);
    /// assert_eq!(key.scale()[2].name(), "C");
    /// ```
    pub fn from_notation(notation: &str) -> Result<Self, NotationError> {
        log::trace!("parsing key: {:?}", notation);
        let (root, mode) = match split_suffix(notation.trim(), MINOR_SUFFIX) {
            (root, true) => (root, Mode::Minor),
            (root, false) => (root, Mode::Major),
        };
        Ok(Self::new(Pitch::from_name(root)?, mode))
    }
    /// All 24 keys: for every pitch in table order major, then minor.
    ///
    /// Every call returns a fresh iterator.
    pub fn all() -> impl Iterator<Item = Key> {
        Pitch::all().flat_map(|root| {
            Mode::ALL.into_iter().map(move |mode| Key::new(root, mode))
        })
    }
    pub fn root(&self) -> Pitch {
        self.root
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn scale(&self) -> &[Pitch; SCALE_LENGTH] {
        &self.scale
    }
    /// Zero-based scale degree of the pitch, if it belongs to the scale.
    pub fn degree_of(&self, pitch: Pitch) -> Option<usize> {
        self.scale.iter().position(|note| *note == pitch)
    }
    /// True if every note of the chord is in the scale.
    ///
    /// This checks notes only, not the quality of chord on the degree.
    pub fn contains_chord(&self, chord: &Chord) -> bool {
        chord.notes().iter().all(|note| self.scale.contains(note))
    }
    /// Roman numeral of the chord root degree, decorated by chord quality.
    ///
    /// Chord is not required to be contained in key: Cm in G major is
    /// `iv`.
    ///
    /// # Errors
    /// - [DegreeError::RootNotInKey] if the first note of chord is not
    ///   in scale.
    /// - [DegreeError::UnclassifiedChord] if chord is neither major,
    ///   minor nor diminished triad.
    pub fn degree_label(&self, chord: &Chord) -> DegreeResult<RomanNumeral> {
        let unclassified =
            || DegreeError::UnclassifiedChord(chord.to_string());
        let root = chord.root().ok_or_else(unclassified)?;
        let degree = self.degree_of(root).ok_or_else(|| {
            DegreeError::RootNotInKey {
                chord: chord.to_string(),
                key: self.to_string(),
            }
        })?;
        RomanNumeral::new(degree, chord.quality()).ok_or_else(unclassified)
    }
    /// Triads stacked in thirds on every scale degree, from the tonic.
    pub fn diatonic_triads(&self) -> impl Iterator<Item = Chord> + '_ {
        (0..SCALE_LENGTH).map(move |degree| {
            Chord::new(vec![
                self.scale[degree],
                self.scale[(degree + 2) % SCALE_LENGTH],
                self.scale[(degree + 4) % SCALE_LENGTH],
            ])
        })
    }
}
impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.root, self.mode.suffix())
    }
}
impl FromStr for Key {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}
impl TryFrom<String> for Key {
    type Error = NotationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_notation(&value)
    }
}
impl From<Key> for String {
    fn from(value: Key) -> Self {
        value.to_string()
    }
}
