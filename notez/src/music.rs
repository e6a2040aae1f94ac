//! Pitch classes and scale presets

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 12 chromatic note names, octave-independent.
/// Declaration order is semitone distance from C, so `self as usize` is the
/// chromatic index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl PitchClass {
    /// The chromatic scale, using sharps.
    pub const CHROMATIC: [PitchClass; 12] = [
        Self::C,
        Self::Cs,
        Self::D,
        Self::Ds,
        Self::E,
        Self::F,
        Self::Fs,
        Self::G,
        Self::Gs,
        Self::A,
        Self::As,
        Self::B,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cs => "C#",
            Self::D => "D",
            Self::Ds => "D#",
            Self::E => "E",
            Self::F => "F",
            Self::Fs => "F#",
            Self::G => "G",
            Self::Gs => "G#",
            Self::A => "A",
            Self::As => "A#",
            Self::B => "B",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::CHROMATIC.into_iter().find(|p| p.name() == name)
    }

    /// The pitch class sounding at `fret` semitones above this open string.
    pub fn at_fret(self, fret: usize) -> PitchClass {
        Self::CHROMATIC[(self as usize + fret) % 12]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named scale preset: a fixed set of pitch classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    CMajor,
    AMinor,
    GMajor,
    EMinor,
    FMajor,
    DMinor,
}

impl Scale {
    pub const ALL: [Scale; 6] = [
        Self::CMajor,
        Self::AMinor,
        Self::GMajor,
        Self::EMinor,
        Self::FMajor,
        Self::DMinor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CMajor => "C Major",
            Self::AMinor => "A Minor",
            Self::GMajor => "G Major",
            Self::EMinor => "E Minor",
            Self::FMajor => "F Major",
            Self::DMinor => "D Minor",
        }
    }

    pub fn notes(self) -> &'static [PitchClass; 7] {
        use PitchClass::*;
        match self {
            Self::CMajor => &[C, D, E, F, G, A, B],
            Self::AMinor => &[A, B, C, D, E, F, G],
            Self::GMajor => &[G, A, B, C, D, E, Fs],
            Self::EMinor => &[E, Fs, G, A, B, C, D],
            Self::FMajor => &[F, G, A, As, C, D, E],
            Self::DMinor => &[D, E, F, G, A, As, C],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PitchClass::*;

    #[test]
    fn test_open_string_identity() {
        for p in PitchClass::CHROMATIC {
            assert_eq!(p.at_fret(0), p);
        }
    }

    #[test]
    fn test_octave_periodicity() {
        for p in PitchClass::CHROMATIC {
            for fret in 0..30 {
                assert_eq!(p.at_fret(fret), p.at_fret(fret % 12));
            }
        }
    }

    #[test]
    fn test_known_frets() {
        assert_eq!(E.at_fret(1), F);
        assert_eq!(E.at_fret(5), A);
        assert_eq!(A.at_fret(3), C);
        assert_eq!(B.at_fret(1), C);
        assert_eq!(G.at_fret(12), G);
    }

    #[test]
    fn test_chromatic_order() {
        // Declaration order must match semitone distance from C
        for (i, p) in PitchClass::CHROMATIC.iter().enumerate() {
            assert_eq!(*p as usize, i);
        }
    }

    #[test]
    fn test_name_round_trip() {
        for p in PitchClass::CHROMATIC {
            assert_eq!(PitchClass::from_name(p.name()), Some(p));
        }
        assert_eq!(PitchClass::from_name("H"), None);
        assert_eq!(PitchClass::from_name("c"), None);
    }

    #[test]
    fn test_preset_tables() {
        assert_eq!(Scale::CMajor.notes(), &[C, D, E, F, G, A, B]);
        assert_eq!(Scale::AMinor.notes(), &[A, B, C, D, E, F, G]);
        assert_eq!(Scale::GMajor.notes(), &[G, A, B, C, D, E, Fs]);
        assert_eq!(Scale::EMinor.notes(), &[E, Fs, G, A, B, C, D]);
        assert_eq!(Scale::FMajor.notes(), &[F, G, A, As, C, D, E]);
        assert_eq!(Scale::DMinor.notes(), &[D, E, F, G, A, As, C]);
    }

    #[test]
    fn test_scale_from_name() {
        for s in Scale::ALL {
            assert_eq!(Scale::from_name(s.name()), Some(s));
        }
        assert_eq!(Scale::from_name("B Locrian"), None);
        assert_eq!(Scale::from_name(""), None);
    }
}
