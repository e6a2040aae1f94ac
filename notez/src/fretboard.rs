//! Fretboard model — tuning, dimensions, highlight state
//!
//! The note grid itself is never stored: every cell is derived from
//! (tuning, fret count) on demand, and style flags from the highlight set.

use crate::music::{PitchClass, Scale};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MIN_STRINGS: usize = 1;
pub const MAX_STRINGS: usize = 12;
pub const MIN_FRETS: usize = 5;
pub const MAX_FRETS: usize = 24;

/// Standard 6-string guitar tuning in stored order (index 0 = top row).
const DEFAULT_TUNING: [PitchClass; 6] = [
    PitchClass::E,
    PitchClass::B,
    PitchClass::G,
    PitchClass::D,
    PitchClass::A,
    PitchClass::E,
];

const DEFAULT_FRETS: usize = 12;

/// Tuning assigned to a freshly added string.
const NEW_STRING_TUNING: PitchClass = PitchClass::E;

/// One cell of the derived note grid, with its style flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub note: PitchClass,
    pub open: bool,
    pub highlighted: bool,
    pub even_fret: bool,
}

/// Which fill a cell gets. Open strings win over highlights, highlights
/// win over the alternating fret shading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellShade {
    Open,
    Highlight,
    Even,
    Odd,
}

impl Cell {
    pub fn shade(&self) -> CellShade {
        if self.open {
            CellShade::Open
        } else if self.highlighted {
            CellShade::Highlight
        } else if self.even_fret {
            CellShade::Even
        } else {
            CellShade::Odd
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fretboard {
    /// One pitch class per string; the string count IS this vec's length.
    tuning: Vec<PitchClass>,
    fret_count: usize,
    highlights: BTreeSet<PitchClass>,
}

impl Default for Fretboard {
    fn default() -> Self {
        Self {
            tuning: DEFAULT_TUNING.to_vec(),
            fret_count: DEFAULT_FRETS,
            highlights: BTreeSet::new(),
        }
    }
}

impl Fretboard {
    pub fn string_count(&self) -> usize {
        self.tuning.len()
    }

    pub fn fret_count(&self) -> usize {
        self.fret_count
    }

    pub fn tuning(&self, string: usize) -> Option<PitchClass> {
        self.tuning.get(string).copied()
    }

    /// Retune one string. Out-of-range indices are ignored.
    pub fn set_tuning(&mut self, string: usize, note: PitchClass) {
        if let Some(t) = self.tuning.get_mut(string) {
            *t = note;
        }
    }

    /// Append a string (tuned to E). No-op at the 12-string limit.
    pub fn add_string(&mut self) {
        if self.tuning.len() < MAX_STRINGS {
            self.tuning.push(NEW_STRING_TUNING);
        }
    }

    /// Drop the last string. No-op at the 1-string limit.
    pub fn remove_string(&mut self) {
        if self.tuning.len() > MIN_STRINGS {
            self.tuning.pop();
        }
    }

    /// No-op at the 24-fret limit.
    pub fn add_fret(&mut self) {
        if self.fret_count < MAX_FRETS {
            self.fret_count += 1;
        }
    }

    /// No-op at the 5-fret limit.
    pub fn remove_fret(&mut self) {
        if self.fret_count > MIN_FRETS {
            self.fret_count -= 1;
        }
    }

    pub fn highlights(&self) -> &BTreeSet<PitchClass> {
        &self.highlights
    }

    pub fn is_highlighted(&self, note: PitchClass) -> bool {
        self.highlights.contains(&note)
    }

    pub fn set_highlight(&mut self, note: PitchClass, on: bool) {
        if on {
            self.highlights.insert(note);
        } else {
            self.highlights.remove(&note);
        }
    }

    /// Replace the whole highlight set with the preset's notes.
    pub fn apply_preset(&mut self, scale: Scale) {
        self.highlights = scale.notes().iter().copied().collect();
    }

    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    /// Clicking a note always adds it; a click never un-highlights.
    pub fn note_clicked(&mut self, note: PitchClass) {
        self.highlights.insert(note);
    }

    /// The pitch class at (string, fret), or None past the last string.
    pub fn note_at(&self, string: usize, fret: usize) -> Option<PitchClass> {
        self.tuning.get(string).map(|open| open.at_fret(fret))
    }

    /// The derived view cell at (string, fret).
    pub fn cell(&self, string: usize, fret: usize) -> Option<Cell> {
        self.note_at(string, fret).map(|note| Cell {
            note,
            open: fret == 0,
            highlighted: self.highlights.contains(&note),
            even_fret: fret % 2 == 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::PitchClass::*;

    #[test]
    fn test_default_board() {
        let b = Fretboard::default();
        assert_eq!(b.string_count(), 6);
        assert_eq!(b.fret_count(), 12);
        assert_eq!(b.tuning, vec![E, B, G, D, A, E]);
        assert!(b.highlights().is_empty());
    }

    #[test]
    fn test_string_limits() {
        let mut b = Fretboard::default();
        for _ in 0..20 {
            b.add_string();
        }
        assert_eq!(b.string_count(), MAX_STRINGS);
        // 13th add is a no-op
        b.add_string();
        assert_eq!(b.string_count(), MAX_STRINGS);

        for _ in 0..20 {
            b.remove_string();
        }
        assert_eq!(b.string_count(), MIN_STRINGS);
        b.remove_string();
        assert_eq!(b.string_count(), MIN_STRINGS);
    }

    #[test]
    fn test_new_strings_tune_to_e() {
        let mut b = Fretboard::default();
        b.add_string();
        assert_eq!(b.tuning(6), Some(E));
    }

    #[test]
    fn test_fret_limits() {
        let mut b = Fretboard::default();
        for _ in 0..6 {
            b.remove_fret();
        }
        assert_eq!(b.fret_count(), 6);
        b.remove_fret();
        assert_eq!(b.fret_count(), MIN_FRETS);
        // at the floor, removal is a no-op
        b.remove_fret();
        assert_eq!(b.fret_count(), MIN_FRETS);

        for _ in 0..30 {
            b.add_fret();
        }
        assert_eq!(b.fret_count(), MAX_FRETS);
    }

    #[test]
    fn test_set_tuning_recomputes_row() {
        let mut b = Fretboard::default();
        assert_eq!(b.note_at(2, 3), Some(As)); // G string, 3rd fret
        b.set_tuning(2, A);
        assert_eq!(b.note_at(2, 3), Some(C));
        // other rows untouched
        assert_eq!(b.note_at(0, 3), Some(G));
    }

    #[test]
    fn test_set_tuning_out_of_range_is_noop() {
        let mut b = Fretboard::default();
        let before = b.clone();
        b.set_tuning(6, C);
        b.set_tuning(usize::MAX, C);
        assert_eq!(b.tuning, before.tuning);
    }

    #[test]
    fn test_preset_replaces_highlights() {
        let mut b = Fretboard::default();
        b.apply_preset(Scale::CMajor);
        let c_major: BTreeSet<_> = [C, D, E, F, G, A, B].into_iter().collect();
        assert_eq!(*b.highlights(), c_major);

        // second preset replaces, never unions
        b.apply_preset(Scale::GMajor);
        let g_major: BTreeSet<_> = [G, A, B, C, D, E, Fs].into_iter().collect();
        assert_eq!(*b.highlights(), g_major);
    }

    #[test]
    fn test_clear_highlights() {
        let mut b = Fretboard::default();
        b.apply_preset(Scale::DMinor);
        b.clear_highlights();
        assert!(b.highlights().is_empty());
        for s in 0..b.string_count() {
            for f in 0..=b.fret_count() {
                assert!(!b.cell(s, f).unwrap().highlighted);
            }
        }
    }

    #[test]
    fn test_click_is_idempotent_add() {
        let mut b = Fretboard::default();
        b.note_clicked(Fs);
        assert!(b.is_highlighted(Fs));
        b.note_clicked(Fs);
        assert!(b.is_highlighted(Fs));
        assert_eq!(b.highlights().len(), 1);
    }

    #[test]
    fn test_highlights_survive_topology_changes() {
        let mut b = Fretboard::default();
        b.apply_preset(Scale::AMinor);
        let before = b.highlights().clone();
        b.add_string();
        b.remove_fret();
        b.remove_string();
        b.remove_string();
        assert_eq!(*b.highlights(), before);
    }

    #[test]
    fn test_cell_shade_precedence() {
        let mut b = Fretboard::default();
        b.note_clicked(E);
        // open string: open wins even when the note is highlighted
        assert_eq!(b.cell(0, 0).unwrap().shade(), CellShade::Open);
        // E string fret 12 is E again: highlighted, even fret
        assert_eq!(b.cell(0, 12).unwrap().shade(), CellShade::Highlight);
        b.clear_highlights();
        assert_eq!(b.cell(0, 12).unwrap().shade(), CellShade::Even);
        assert_eq!(b.cell(0, 3).unwrap().shade(), CellShade::Odd);
    }

    #[test]
    fn test_cell_out_of_range() {
        let b = Fretboard::default();
        assert_eq!(b.cell(6, 0), None);
        assert!(b.cell(5, 0).is_some());
    }

    #[test]
    fn test_json_round_trip() {
        let mut b = Fretboard::default();
        b.set_tuning(0, D);
        b.add_fret();
        b.apply_preset(Scale::FMajor);

        let json = serde_json::to_string(&b).unwrap();
        let restored: Fretboard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.tuning, b.tuning);
        assert_eq!(restored.fret_count(), b.fret_count());
        assert_eq!(*restored.highlights(), *b.highlights());
    }
}
