//! notezcore — shared library for the Notez fretboard explorer

pub mod storage;
pub mod theme;
pub mod widgets;

pub use theme::NotezTheme;
