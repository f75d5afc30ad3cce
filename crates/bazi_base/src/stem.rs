//! The ten heavenly stems (十干).
//!
//! Stems pair up by element in order (甲乙 wood, 丙丁 fire, ...), and within
//! each pair the first is yang and the second yin.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, Element, Polarity};
use crate::error::BaziError;

/// The 10 heavenly stems starting from 甲 (kinoe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Kinoe,
    #[serde(rename = "乙")]
    Kinoto,
    #[serde(rename = "丙")]
    Hinoe,
    #[serde(rename = "丁")]
    Hinoto,
    #[serde(rename = "戊")]
    Tsuchinoe,
    #[serde(rename = "己")]
    Tsuchinoto,
    #[serde(rename = "庚")]
    Kanoe,
    #[serde(rename = "辛")]
    Kanoto,
    #[serde(rename = "壬")]
    Mizunoe,
    #[serde(rename = "癸")]
    Mizunoto,
}

/// All 10 stems in order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Kinoe,
    Stem::Kinoto,
    Stem::Hinoe,
    Stem::Hinoto,
    Stem::Tsuchinoe,
    Stem::Tsuchinoto,
    Stem::Kanoe,
    Stem::Kanoto,
    Stem::Mizunoe,
    Stem::Mizunoto,
];

const STEM_CHARS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

impl Stem {
    /// Kanji name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kinoe => "甲",
            Self::Kinoto => "乙",
            Self::Hinoe => "丙",
            Self::Hinoto => "丁",
            Self::Tsuchinoe => "戊",
            Self::Tsuchinoto => "己",
            Self::Kanoe => "庚",
            Self::Kanoto => "辛",
            Self::Mizunoe => "壬",
            Self::Mizunoto => "癸",
        }
    }

    pub const fn as_char(self) -> char {
        STEM_CHARS[self.index() as usize]
    }

    /// Japanese kun reading.
    pub const fn reading(self) -> &'static str {
        match self {
            Self::Kinoe => "きのえ",
            Self::Kinoto => "きのと",
            Self::Hinoe => "ひのえ",
            Self::Hinoto => "ひのと",
            Self::Tsuchinoe => "つちのえ",
            Self::Tsuchinoto => "つちのと",
            Self::Kanoe => "かのえ",
            Self::Kanoto => "かのと",
            Self::Mizunoe => "みずのえ",
            Self::Mizunoto => "みずのと",
        }
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Kinoe => 0,
            Self::Kinoto => 1,
            Self::Hinoe => 2,
            Self::Hinoto => 3,
            Self::Tsuchinoe => 4,
            Self::Tsuchinoto => 5,
            Self::Kanoe => 6,
            Self::Kanoto => 7,
            Self::Mizunoe => 8,
            Self::Mizunoto => 9,
        }
    }

    /// Stem at `index mod 10`. Never fails; use for cycle arithmetic.
    pub const fn from_cycle(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Stem at an exact index in 0..10.
    pub fn from_index(index: u8) -> Result<Self, BaziError> {
        ALL_STEMS
            .get(index as usize)
            .copied()
            .ok_or_else(|| BaziError::InvalidSymbol(format!("stem index {index} (0-9)")))
    }

    pub fn from_char(c: char) -> Result<Self, BaziError> {
        STEM_CHARS
            .iter()
            .position(|&s| s == c)
            .map(|i| ALL_STEMS[i])
            .ok_or_else(|| BaziError::InvalidSymbol(format!("not a stem: {c:?}")))
    }

    pub const fn element(self) -> Element {
        ALL_ELEMENTS[(self.index() / 2) as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// The stem `steps` positions later in the cycle.
    pub const fn advance(self, steps: i64) -> Self {
        Self::from_cycle(self.index() as i64 + steps)
    }
}

/// Element of a stem.
pub const fn stem_element(stem: Stem) -> Element {
    stem.element()
}

/// Polarity of a stem.
pub const fn stem_polarity(stem: Stem) -> Polarity {
    stem.polarity()
}

impl FromStr for Stem {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(BaziError::InvalidSymbol(format!("not a stem: {s:?}"))),
        }
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
