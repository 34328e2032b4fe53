//! Value types of the tonal model.
//!
//! Pitch is a pitch class (modulo octave), Chord is an ordered list of
//! pitches with the first one treated as root, Key is a root with mode and
//! its 7-note scale. All of them are immutable after construction.

pub mod chord;
pub mod key;
pub mod pitch;

pub use chord::{Chord, TriadQuality};
pub use key::{DegreeError, DegreeResult};
pub use key::{Key, Mode};
pub use pitch::{
    is_major_third_above, is_minor_third_above, is_perfect_fifth_above,
    Pitch,
};

/// Amount of pitch classes in octave.
pub const PITCH_CLASSES: i32 = 12;
/// Amount of notes in diatonic scale.
pub const SCALE_LENGTH: usize = 7;

pub const MINOR_THIRD: u8 = 3;
pub const MAJOR_THIRD: u8 = 4;
pub const DIMINISHED_FIFTH: u8 = 6;
pub const PERFECT_FIFTH: u8 = 7;
