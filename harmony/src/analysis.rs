//! Key search and Roman-numeral analysis of chord progressions.
use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    notation::{NotationError, NotationResult, RomanNumeral},
    primitives::{Chord, DegreeError, Key},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("No key contains all the given chords")]
    NoCandidateKeys,
    #[error(transparent)]
    Degree(#[from] DegreeError),
    #[error(transparent)]
    Notation(#[from] NotationError),
}
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Keys, which contain every given chord, in [Key::all] order.
///
/// Empty chord list matches all 24 keys. Since major key of every root is
/// enumerated before minor, C major comes before its relative A minor.
///
/// # Example
/// ```
/// # use harmony::analysis::{find_keys, parse_chords};
/// let chords = parse_chords(&["C", "G", "Am", "F"]).unwrap();
/// let keys = find_keys(&chords)
///     .iter()
///     .map(|key| key.to_string())
///     .collect::<Vec<_>>();
/// assert_eq!(keys, vec!["C", "Am"]);
/// ```
pub fn find_keys(chords: &[Chord]) -> Vec<Key> {
    let keys = Key::all()
        .filter(|key| chords.iter().all(|chord| key.contains_chord(chord)))
        .collect::<Vec<_>>();
    log::debug!(
        "keys for chords [{}]: [{}]",
        chords.iter().join(", "),
        keys.iter().join(", ")
    );
    keys
}

/// Parse chord notations, failing on the first invalid one.
pub fn parse_chords(
    notations: &[impl AsRef<str>],
) -> NotationResult<Vec<Chord>> {
    notations
        .iter()
        .map(|notation| Chord::from_chord_notation(notation.as_ref()))
        .collect()
}

/// How the key of a progression is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// If None, the first key from [find_keys] is taken.
    pub key: Option<Key>,
}
impl AnalysisSettings {
    pub fn new(key: impl Into<Option<Key>>) -> Self {
        Self { key: key.into() }
    }
}

/// Result of analysing a progression within one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub chords: Vec<Chord>,
    /// All keys, containing the progression.
    pub candidates: Vec<Key>,
    /// True if key was chosen from candidates, not given by settings.
    pub detected: bool,
    pub key: Key,
    pub labels: Vec<(Chord, RomanNumeral)>,
    /// Chords, which have notes outside of the key scale.
    pub outside: Vec<Chord>,
    pub diatonic_triads: Vec<Chord>,
}
impl Analysis {
    /// Choose key and label every chord in it.
    ///
    /// # Errors
    /// - [AnalysisError::NoCandidateKeys] if key is not given and no key
    ///   contains all the chords.
    /// - Any error of [Key::degree_label].
    pub fn run(
        chords: Vec<Chord>,
        settings: &AnalysisSettings,
    ) -> AnalysisResult<Self> {
        let candidates = find_keys(&chords);
        let (key, detected) = match &settings.key {
            Some(key) => (key.clone(), false),
            None => (
                candidates
                    .first()
                    .cloned()
                    .ok_or(AnalysisError::NoCandidateKeys)?,
                true,
            ),
        };
        log::debug!("analysing in key {} (detected: {})", key, detected);
        let labels = chords
            .iter()
            .map(|chord| Ok((chord.clone(), key.degree_label(chord)?)))
            .collect::<AnalysisResult<Vec<_>>>()?;
        let outside = chords
            .iter()
            .filter(|chord| !key.contains_chord(chord))
            .cloned()
            .collect();
        let diatonic_triads = key.diatonic_triads().collect();
        Ok(Self {
            chords,
            candidates,
            detected,
            key,
            labels,
            outside,
            diatonic_triads,
        })
    }
}
/// Report lines, as they are printed by the command line tool.
impl Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Chords: {}", self.chords.iter().join(", "))?;
        if self.detected {
            writeln!(
                f,
                "Possible keys: {}",
                self.candidates.iter().join(", ")
            )?;
        }
        writeln!(f, "Key: {}", self.key)?;
        for (chord, numeral) in self.labels.iter() {
            writeln!(f, "{}: {}", chord, numeral)?;
        }
        if !self.outside.is_empty() {
            writeln!(
                f,
                "Warning: {} not strictly in key {}",
                self.outside.iter().join(", "),
                self.key
            )?;
            writeln!(
                f,
                "Diatonic triads of {}: {}",
                self.key,
                self.diatonic_triads.iter().join(", ")
            )?;
        }
        Ok(())
    }
}
