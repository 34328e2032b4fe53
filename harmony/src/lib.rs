//! Harmonic analysis of simple triad progressions.
//!
//! Chord notations are parsed into [`primitives::Chord`], tested against
//! all 24 diatonic keys and labeled with Roman numerals of the chosen
//! [`primitives::Key`].
//!
//! ```
//! use harmony::analysis::{find_keys, parse_chords};
//!
//! let chords = parse_chords(&["C", "G", "Am", "F"]).unwrap();
//! let keys = find_keys(&chords);
//! let labels = chords
//!     .iter()
//!     .map(|chord| keys[0].degree_label(chord).unwrap().to_string())
//!     .collect::<Vec<_>>();
//! assert_eq!(keys[0].to_string(), "C");
//! assert_eq!(labels, vec!["I", "V", "vi", "IV"]);
//! ```

pub mod analysis;
pub mod notation;
pub mod primitives;
