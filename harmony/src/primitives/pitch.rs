use std::{
    fmt::Display,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::notation::{pitch_index, NotationError, PITCH_NAMES};

use super::{MAJOR_THIRD, MINOR_THIRD, PERFECT_FIFTH, PITCH_CLASSES};

/// One of the twelve pitch classes.
///
/// Index is always reduced modulo 12, so arithmetic wraps around octave.
/// Serialized as its canonical name.
#[derive(
    Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    index: u8,
}
impl Pitch {
    /// Any integer is accepted and wrapped to `[0, 12)`.
    ///
    /// # Example
    /// ```
    /// # use harmony::primitives::Pitch;
    /// assert_eq!(Pitch::new(14), Pitch::new(2));
    /// assert_eq!(Pitch::new(-1).name(), "B");
    /// ```
    pub fn new(index: i32) -> Self {
        Self {
            index: index.rem_euclid(PITCH_CLASSES) as u8,
        }
    }
    /// Parse canonical pitch name, like `"E♭"`.
    ///
    /// Whitespace around the name is ignored.
    pub fn from_notation(name: &str) -> Result<Self, NotationError> {
        Self::from_name(name.trim())
    }
    /// Exact table lookup, used for roots of chord and key notations.
    pub(crate) fn from_name(name: &str) -> Result<Self, NotationError> {
        log::trace!("parsing pitch: {:?}", name);
        Ok(Self {
            index: pitch_index(name)?,
        })
    }
    /// All twelve pitches, starting from C.
    pub fn all() -> impl Iterator<Item = Pitch> {
        (0..PITCH_CLASSES).map(Self::new)
    }
    pub fn index(&self) -> u8 {
        self.index
    }
    pub fn name(&self) -> &'static str {
        PITCH_NAMES[self.index as usize]
    }
}
impl Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl FromStr for Pitch {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}
impl TryFrom<String> for Pitch {
    type Error = NotationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_notation(&value)
    }
}
impl From<Pitch> for String {
    fn from(value: Pitch) -> Self {
        value.name().to_string()
    }
}
/// Pitch, given amount of semitones above (or below, if negative).
impl Add<i32> for Pitch {
    fn add(self, rhs: i32) -> Self::Output {
        Self::new(self.index as i32 + rhs.rem_euclid(PITCH_CLASSES))
    }
    type Output = Self;
}
/// Ascending distance in semitones from `rhs` to `self`, in `[0, 12)`.
impl Sub for Pitch {
    fn sub(self, rhs: Self) -> Self::Output {
        (self.index as i32 - rhs.index as i32).rem_euclid(PITCH_CLASSES) as u8
    }
    type Output = u8;
}

/// True if `upper` is a minor third above `lower`.
pub fn is_minor_third_above(lower: Pitch, upper: Pitch) -> bool {
    upper - lower == MINOR_THIRD
}
pub fn is_major_third_above(lower: Pitch, upper: Pitch) -> bool {
    upper - lower == MAJOR_THIRD
}
pub fn is_perfect_fifth_above(lower: Pitch, upper: Pitch) -> bool {
    upper - lower == PERFECT_FIFTH
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::PITCH_NAMES;

    #[test]
    fn notation_round_trip() {
        for name in PITCH_NAMES {
            let pitch: Pitch = name.parse().expect("name from table");
            assert_eq!(pitch.to_string(), name);
        }
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            Pitch::from_notation("H"),
            Err(NotationError::UnknownPitchName("H".to_string()))
        );
        assert_eq!(Pitch::from_notation(" G "), Ok(Pitch::new(7)));
        assert!(Pitch::from_name(" G").is_err());
    }

    #[test]
    fn addition_wraps() {
        for pitch in Pitch::all() {
            for interval in -30..30 {
                assert_eq!(
                    (pitch + interval).index() as i32,
                    (pitch.index() as i32 + interval).rem_euclid(12)
                );
            }
            for interval in [i32::MAX, i32::MIN, i32::MIN + 1] {
                assert_eq!(
                    (pitch + interval).index() as i64,
                    (pitch.index() as i64 + interval as i64).rem_euclid(12)
                );
            }
        }
        assert_eq!(Pitch::new(5) + i32::MAX, Pitch::new(5 + 7));
    }

    #[test]
    fn subtraction_is_ascending_distance() {
        let c = Pitch::new(0);
        let a = Pitch::new(9);
        assert_eq!(a - c, 9);
        assert_eq!(c - a, 3);
        assert_eq!(c - c, 0);
    }

    #[test]
    fn interval_predicates() {
        for pitch in Pitch::all() {
            assert!(is_perfect_fifth_above(pitch, pitch + 7));
            assert!(is_major_third_above(pitch, pitch + 4));
            assert!(is_minor_third_above(pitch, pitch + 3));
            assert!(!is_perfect_fifth_above(pitch + 7, pitch));
        }
        for a in Pitch::all() {
            for b in Pitch::all() {
                assert_eq!(is_perfect_fifth_above(a, b), b - a == 7);
            }
        }
    }

    #[test]
    fn equality_by_index() {
        assert_eq!(Pitch::new(3), Pitch::from_notation("E♭").unwrap());
        assert_eq!(Pitch::new(11) + 1, Pitch::new(0));
    }
}
