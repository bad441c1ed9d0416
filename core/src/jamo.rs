//! Jamo alphabets and membership predicates.
//!
//! The three alphabets below are the single source of truth for jamo order.
//! Every table that is indexed "by consonant" or "by vowel" elsewhere in the
//! workspace follows the index order of these arrays, and the typed enums
//! (`Choseong`, `Jungseong`, `Jongseong`) are declared in exactly the same
//! order so that `jamo as usize` is the alphabet index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading consonants.
pub const CHOSEONG_COUNT: usize = 19;
/// Number of vowels.
pub const JUNGSEONG_COUNT: usize = 21;
/// Number of trailing slots, including the empty slot at index 0.
pub const JONGSEONG_COUNT: usize = 28;

/// Leading consonants in Unicode composition order.
pub const CHOSEONG_ALPHABET: [char; CHOSEONG_COUNT] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Vowels in Unicode composition order.
pub const JUNGSEONG_ALPHABET: [char; JUNGSEONG_COUNT] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Trailing consonants in Unicode composition order. Index 0 (a space) is
/// the "no trailing consonant" slot.
pub const JONGSEONG_ALPHABET: [char; JONGSEONG_COUNT] = [
    ' ', 'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// One of the three jamo classes of a syllable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JamoClass {
    Choseong,
    Jungseong,
    Jongseong,
}

impl JamoClass {
    pub const ALL: [JamoClass; 3] = [JamoClass::Choseong, JamoClass::Jungseong, JamoClass::Jongseong];

    /// Tag used in placeholder glyph names.
    pub fn tag(self) -> &'static str {
        match self {
            JamoClass::Choseong => "choseong",
            JamoClass::Jungseong => "jungseong",
            JamoClass::Jongseong => "jongseong",
        }
    }

    pub fn alphabet(self) -> &'static [char] {
        match self {
            JamoClass::Choseong => &CHOSEONG_ALPHABET,
            JamoClass::Jungseong => &JUNGSEONG_ALPHABET,
            JamoClass::Jongseong => &JONGSEONG_ALPHABET,
        }
    }

    /// Alphabet size of this class (19, 21 or 28).
    pub fn len(self) -> usize {
        self.alphabet().len()
    }

    /// Symbol at `index`, or `None` when the index is outside the alphabet.
    pub fn symbol(self, index: usize) -> Option<char> {
        self.alphabet().get(index).copied()
    }

    /// Alphabet index of `symbol` within this class.
    pub fn index_of(self, symbol: char) -> Option<usize> {
        self.alphabet().iter().position(|&c| c == symbol)
    }

    /// Returns true iff the symbol at `index` is one of `candidates`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is outside the alphabet. Indices are produced by
    /// bounded loops over the alphabets, so an out-of-range value is a bug in
    /// the caller.
    pub fn contains(self, index: usize, candidates: &str) -> bool {
        let Some(symbol) = self.symbol(index) else {
            panic!(
                "{} index {} out of range (alphabet has {} entries)",
                self.tag(),
                index,
                self.len()
            );
        };
        candidates.chars().any(|c| c == symbol)
    }
}

impl fmt::Display for JamoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// `true` iff the leading consonant at `index` is one of `candidates`.
pub fn is_choseong(index: usize, candidates: &str) -> bool {
    JamoClass::Choseong.contains(index, candidates)
}

/// `true` iff the vowel at `index` is one of `candidates`.
pub fn is_jungseong(index: usize, candidates: &str) -> bool {
    JamoClass::Jungseong.contains(index, candidates)
}

/// `true` iff the trailing slot at `index` is one of `candidates`.
/// A space matches the empty slot.
pub fn is_jongseong(index: usize, candidates: &str) -> bool {
    JamoClass::Jongseong.contains(index, candidates)
}

/// Leading consonant (choseong).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Choseong {
    Giyeok,
    SsangGiyeok,
    Nieun,
    Digeut,
    SsangDigeut,
    Rieul,
    Mieum,
    Bieup,
    SsangBieup,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    SsangJieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieuh,
}

impl Choseong {
    pub const ALL: [Choseong; CHOSEONG_COUNT] = [
        Choseong::Giyeok,
        Choseong::SsangGiyeok,
        Choseong::Nieun,
        Choseong::Digeut,
        Choseong::SsangDigeut,
        Choseong::Rieul,
        Choseong::Mieum,
        Choseong::Bieup,
        Choseong::SsangBieup,
        Choseong::Siot,
        Choseong::SsangSiot,
        Choseong::Ieung,
        Choseong::Jieut,
        Choseong::SsangJieut,
        Choseong::Chieut,
        Choseong::Kieuk,
        Choseong::Tieut,
        Choseong::Pieup,
        Choseong::Hieuh,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        JamoClass::Choseong.index_of(symbol).and_then(Self::from_index)
    }

    pub fn symbol(self) -> char {
        CHOSEONG_ALPHABET[self.index()]
    }

    pub fn is_any(self, candidates: &[Choseong]) -> bool {
        candidates.contains(&self)
    }
}

/// Vowel (jungseong).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Jungseong {
    A,
    Ae,
    Ya,
    Yae,
    Eo,
    E,
    Yeo,
    Ye,
    O,
    Wa,
    Wae,
    Oe,
    Yo,
    U,
    Wo,
    We,
    Wi,
    Yu,
    Eu,
    Ui,
    I,
}

impl Jungseong {
    pub const ALL: [Jungseong; JUNGSEONG_COUNT] = [
        Jungseong::A,
        Jungseong::Ae,
        Jungseong::Ya,
        Jungseong::Yae,
        Jungseong::Eo,
        Jungseong::E,
        Jungseong::Yeo,
        Jungseong::Ye,
        Jungseong::O,
        Jungseong::Wa,
        Jungseong::Wae,
        Jungseong::Oe,
        Jungseong::Yo,
        Jungseong::U,
        Jungseong::Wo,
        Jungseong::We,
        Jungseong::Wi,
        Jungseong::Yu,
        Jungseong::Eu,
        Jungseong::Ui,
        Jungseong::I,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        JamoClass::Jungseong.index_of(symbol).and_then(Self::from_index)
    }

    pub fn symbol(self) -> char {
        JUNGSEONG_ALPHABET[self.index()]
    }

    pub fn is_any(self, candidates: &[Jungseong]) -> bool {
        candidates.contains(&self)
    }
}

/// Trailing consonant slot (jongseong). `None` is the empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Jongseong {
    None,
    Giyeok,
    SsangGiyeok,
    GiyeokSiot,
    Nieun,
    NieunJieut,
    NieunHieuh,
    Digeut,
    Rieul,
    RieulGiyeok,
    RieulMieum,
    RieulBieup,
    RieulSiot,
    RieulTieut,
    RieulPieup,
    RieulHieuh,
    Mieum,
    Bieup,
    BieupSiot,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieuh,
}

impl Jongseong {
    pub const ALL: [Jongseong; JONGSEONG_COUNT] = [
        Jongseong::None,
        Jongseong::Giyeok,
        Jongseong::SsangGiyeok,
        Jongseong::GiyeokSiot,
        Jongseong::Nieun,
        Jongseong::NieunJieut,
        Jongseong::NieunHieuh,
        Jongseong::Digeut,
        Jongseong::Rieul,
        Jongseong::RieulGiyeok,
        Jongseong::RieulMieum,
        Jongseong::RieulBieup,
        Jongseong::RieulSiot,
        Jongseong::RieulTieut,
        Jongseong::RieulPieup,
        Jongseong::RieulHieuh,
        Jongseong::Mieum,
        Jongseong::Bieup,
        Jongseong::BieupSiot,
        Jongseong::Siot,
        Jongseong::SsangSiot,
        Jongseong::Ieung,
        Jongseong::Jieut,
        Jongseong::Chieut,
        Jongseong::Kieuk,
        Jongseong::Tieut,
        Jongseong::Pieup,
        Jongseong::Hieuh,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        JamoClass::Jongseong.index_of(symbol).and_then(Self::from_index)
    }

    pub fn symbol(self) -> char {
        JONGSEONG_ALPHABET[self.index()]
    }

    /// `false` only for the empty slot.
    pub fn is_present(self) -> bool {
        self != Jongseong::None
    }

    pub fn is_any(self, candidates: &[Jongseong]) -> bool {
        candidates.contains(&self)
    }
}
