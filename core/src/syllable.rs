// core/src/syllable.rs
//
// Canonical Hangul syllable composition over the typed jamo alphabets.

use crate::jamo::{Choseong, Jongseong, Jungseong, JONGSEONG_COUNT, JUNGSEONG_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First codepoint of the Hangul syllable block (가).
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last codepoint of the Hangul syllable block (힣).
pub const SYLLABLE_LAST: u32 = 0xD7A3;
/// Codepoints per leading consonant (21 × 28).
pub const SYLLABLES_PER_CHOSEONG: u32 = (JUNGSEONG_COUNT * JONGSEONG_COUNT) as u32;
/// Number of precomposed syllables.
pub const SYLLABLE_COUNT: usize = 11_172;

/// A (leading, vowel, trailing) triple identifying one syllable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Syllable {
    pub choseong: Choseong,
    pub jungseong: Jungseong,
    pub jongseong: Jongseong,
}

impl Syllable {
    pub fn new(choseong: Choseong, jungseong: Jungseong, jongseong: Jongseong) -> Self {
        Self {
            choseong,
            jungseong,
            jongseong,
        }
    }

    /// Build from raw alphabet indices. Returns `None` if any index is out of range.
    pub fn from_indices(choseong: usize, jungseong: usize, jongseong: usize) -> Option<Self> {
        Some(Self {
            choseong: Choseong::from_index(choseong)?,
            jungseong: Jungseong::from_index(jungseong)?,
            jongseong: Jongseong::from_index(jongseong)?,
        })
    }

    /// `0xAC00 + L·588 + V·28 + T`.
    pub fn codepoint(&self) -> u32 {
        SYLLABLE_BASE
            + self.choseong.index() as u32 * SYLLABLES_PER_CHOSEONG
            + self.jungseong.index() as u32 * JONGSEONG_COUNT as u32
            + self.jongseong.index() as u32
    }

    pub fn to_char(&self) -> char {
        // Every triple maps inside U+AC00..=U+D7A3, which holds only scalar values.
        char::from_u32(self.codepoint()).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Decompose a syllable codepoint. Returns `None` outside U+AC00..=U+D7A3.
    pub fn from_codepoint(codepoint: u32) -> Option<Self> {
        if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&codepoint) {
            return None;
        }
        let offset = (codepoint - SYLLABLE_BASE) as usize;
        let per_choseong = SYLLABLES_PER_CHOSEONG as usize;
        Self::from_indices(
            offset / per_choseong,
            (offset % per_choseong) / JONGSEONG_COUNT,
            offset % JONGSEONG_COUNT,
        )
    }

    pub fn from_char(ch: char) -> Option<Self> {
        Self::from_codepoint(ch as u32)
    }

    pub fn has_jongseong(&self) -> bool {
        self.jongseong.is_present()
    }

    /// All 11,172 syllables in canonical order: leading outermost, trailing innermost.
    pub fn all() -> impl Iterator<Item = Syllable> {
        Choseong::ALL.into_iter().flat_map(|choseong| {
            Jungseong::ALL.into_iter().flat_map(move |jungseong| {
                Jongseong::ALL
                    .into_iter()
                    .map(move |jongseong| Syllable::new(choseong, jungseong, jongseong))
            })
        })
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_syllable() {
        let ga = Syllable::new(Choseong::Giyeok, Jungseong::A, Jongseong::None);
        assert_eq!(ga.codepoint(), 0xAC00);
        assert_eq!(ga.to_char(), '가');

        let hih = Syllable::new(Choseong::Hieuh, Jungseong::I, Jongseong::Hieuh);
        assert_eq!(hih.codepoint(), SYLLABLE_LAST);
        assert_eq!(hih.to_char(), '힣');
    }

    #[test]
    fn canonical_order_is_contiguous() {
        let mut expected = SYLLABLE_BASE;
        let mut count = 0;
        for s in Syllable::all() {
            assert_eq!(s.codepoint(), expected);
            expected += 1;
            count += 1;
        }
        assert_eq!(count, SYLLABLE_COUNT);
        assert_eq!(expected - 1, SYLLABLE_LAST);
    }

    #[test]
    fn decompose_inverts_compose() {
        for s in Syllable::all() {
            assert_eq!(Syllable::from_char(s.to_char()), Some(s));
        }
    }

    #[test]
    fn outside_block_is_rejected() {
        assert_eq!(Syllable::from_codepoint(SYLLABLE_BASE - 1), None);
        assert_eq!(Syllable::from_codepoint(SYLLABLE_LAST + 1), None);
        assert_eq!(Syllable::from_char('A'), None);
        assert_eq!(Syllable::from_indices(19, 0, 0), None);
    }

    #[test]
    fn known_syllables() {
        let reo = Syllable::from_char('러').unwrap();
        assert_eq!(reo.choseong, Choseong::Rieul);
        assert_eq!(reo.jungseong, Jungseong::Eo);
        assert!(!reo.has_jongseong());

        let dot = Syllable::from_char('돝').unwrap();
        assert_eq!(dot.choseong, Choseong::Digeut);
        assert_eq!(dot.jungseong, Jungseong::O);
        assert_eq!(dot.jongseong, Jongseong::Tieut);
    }
}
