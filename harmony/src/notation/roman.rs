use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::primitives::TriadQuality;

use super::{NotationError, DIMINISHED_SUFFIX, ROMAN_NUMERALS};

/// Scale-degree label of a chord inside a key.
///
/// Case and decoration follow the triad quality: `V` (major),
/// `vi` (minor), `vii°` (diminished).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawRomanNumeral")]
pub struct RomanNumeral {
    degree: usize,
    quality: TriadQuality,
}

/// Unchecked fields, validated by [RomanNumeral::new] on deserialize.
#[derive(Deserialize)]
struct RawRomanNumeral {
    degree: usize,
    quality: TriadQuality,
}
impl TryFrom<RawRomanNumeral> for RomanNumeral {
    type Error = NotationError;
    fn try_from(raw: RawRomanNumeral) -> Result<Self, Self::Error> {
        Self::new(raw.degree, raw.quality).ok_or_else(|| {
            NotationError::InvalidRomanNumeral(format!(
                "degree {}, {:?}",
                raw.degree, raw.quality
            ))
        })
    }
}
impl RomanNumeral {
    /// `degree` is zero-based.
    ///
    /// # Returns
    /// - None if degree is out of the 7 scale degrees, or quality is
    ///   [TriadQuality::Other], which has no label.
    pub fn new(degree: usize, quality: TriadQuality) -> Option<Self> {
        if degree >= ROMAN_NUMERALS.len() || quality == TriadQuality::Other
        {
            return None;
        }
        Some(Self { degree, quality })
    }
    pub fn degree(&self) -> usize {
        self.degree
    }
    pub fn quality(&self) -> TriadQuality {
        self.quality
    }
}
impl Display for RomanNumeral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let numeral = ROMAN_NUMERALS
            .get(self.degree)
            .copied()
            .unwrap_or("?");
        match self.quality {
            TriadQuality::Major => write!(f, "{}", numeral.to_uppercase()),
            TriadQuality::Minor | TriadQuality::Other => {
                write!(f, "{}", numeral)
            }
            TriadQuality::Diminished => {
                write!(f, "{}{}", numeral, DIMINISHED_SUFFIX)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RomanNumeral;
    use crate::primitives::TriadQuality;

    #[test]
    fn render() {
        let label = |degree, quality| {
            RomanNumeral::new(degree, quality)
                .expect("valid numeral")
                .to_string()
        };
        assert_eq!(label(0, TriadQuality::Major), "I");
        assert_eq!(label(3, TriadQuality::Minor), "iv");
        assert_eq!(label(6, TriadQuality::Diminished), "vii°");
        assert_eq!(label(6, TriadQuality::Major), "VII");
    }

    #[test]
    fn no_label_for_other() {
        assert_eq!(RomanNumeral::new(0, TriadQuality::Other), None);
        assert_eq!(RomanNumeral::new(7, TriadQuality::Major), None);
    }
}
