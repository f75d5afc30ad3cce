//! The twelve earthly branches (十二支) and their hidden stems (蔵干).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::BaziError;
use crate::stem::Stem;

/// The 12 earthly branches starting from 子 (ne).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Ne,
    #[serde(rename = "丑")]
    Ushi,
    #[serde(rename = "寅")]
    Tora,
    #[serde(rename = "卯")]
    U,
    #[serde(rename = "辰")]
    Tatsu,
    #[serde(rename = "巳")]
    Mi,
    #[serde(rename = "午")]
    Uma,
    #[serde(rename = "未")]
    Hitsuji,
    #[serde(rename = "申")]
    Saru,
    #[serde(rename = "酉")]
    Tori,
    #[serde(rename = "戌")]
    Inu,
    #[serde(rename = "亥")]
    I,
}

/// All 12 branches in order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ne,
    Branch::Ushi,
    Branch::Tora,
    Branch::U,
    Branch::Tatsu,
    Branch::Mi,
    Branch::Uma,
    Branch::Hitsuji,
    Branch::Saru,
    Branch::Tori,
    Branch::Inu,
    Branch::I,
];

const BRANCH_CHARS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// Hidden stems per branch, by branch index. The main qi (本気) is listed last.
pub(crate) const HIDDEN_STEMS: [&[Stem]; 12] = {
    use Stem::*;
    [
        &[Mizunoto],                          // 子
        &[Mizunoto, Kanoto, Tsuchinoto],      // 丑
        &[Tsuchinoe, Hinoe, Kinoe],           // 寅
        &[Kinoto],                            // 卯
        &[Kinoto, Mizunoto, Tsuchinoe],       // 辰
        &[Tsuchinoe, Kanoe, Hinoe],           // 巳
        &[Tsuchinoto, Hinoto],                // 午
        &[Hinoto, Kinoto, Tsuchinoto],        // 未
        &[Tsuchinoto, Mizunoe, Kanoe],        // 申
        &[Kanoto],                            // 酉
        &[Kanoto, Hinoto, Tsuchinoe],         // 戌
        &[Kinoe, Mizunoe],                    // 亥
    ]
};

impl Branch {
    /// Kanji name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ne => "子",
            Self::Ushi => "丑",
            Self::Tora => "寅",
            Self::U => "卯",
            Self::Tatsu => "辰",
            Self::Mi => "巳",
            Self::Uma => "午",
            Self::Hitsuji => "未",
            Self::Saru => "申",
            Self::Tori => "酉",
            Self::Inu => "戌",
            Self::I => "亥",
        }
    }

    pub const fn as_char(self) -> char {
        BRANCH_CHARS[self.index() as usize]
    }

    pub const fn reading(self) -> &'static str {
        match self {
            Self::Ne => "ね",
            Self::Ushi => "うし",
            Self::Tora => "とら",
            Self::U => "う",
            Self::Tatsu => "たつ",
            Self::Mi => "み",
            Self::Uma => "うま",
            Self::Hitsuji => "ひつじ",
            Self::Saru => "さる",
            Self::Tori => "とり",
            Self::Inu => "いぬ",
            Self::I => "い",
        }
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ne => 0,
            Self::Ushi => 1,
            Self::Tora => 2,
            Self::U => 3,
            Self::Tatsu => 4,
            Self::Mi => 5,
            Self::Uma => 6,
            Self::Hitsuji => 7,
            Self::Saru => 8,
            Self::Tori => 9,
            Self::Inu => 10,
            Self::I => 11,
        }
    }

    /// Branch at `index mod 12`.
    pub const fn from_cycle(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Branch at an exact index in 0..12.
    pub fn from_index(index: u8) -> Result<Self, BaziError> {
        ALL_BRANCHES
            .get(index as usize)
            .copied()
            .ok_or_else(|| BaziError::InvalidSymbol(format!("branch index {index} (0-11)")))
    }

    pub fn from_char(c: char) -> Result<Self, BaziError> {
        BRANCH_CHARS
            .iter()
            .position(|&b| b == c)
            .map(|i| ALL_BRANCHES[i])
            .ok_or_else(|| BaziError::InvalidSymbol(format!("not a branch: {c:?}")))
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Ne | Self::I => Element::Water,
            Self::Tora | Self::U => Element::Wood,
            Self::Mi | Self::Uma => Element::Fire,
            Self::Saru | Self::Tori => Element::Metal,
            Self::Ushi | Self::Tatsu | Self::Hitsuji | Self::Inu => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Hidden stems (1-3), main qi last.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// The main qi (本気): the last-listed hidden stem.
    pub const fn main_qi(self) -> Stem {
        let stems = self.hidden_stems();
        stems[stems.len() - 1]
    }

    /// The three-harmony frame (三合局) this branch belongs to.
    pub const fn trine(self) -> Trine {
        match self {
            Self::Saru | Self::Ne | Self::Tatsu => Trine::Water,
            Self::Tora | Self::Uma | Self::Inu => Trine::Fire,
            Self::Mi | Self::Tori | Self::Ushi => Trine::Metal,
            Self::I | Self::U | Self::Hitsuji => Trine::Wood,
        }
    }

    /// The branch `steps` positions later in the cycle.
    pub const fn advance(self, steps: i64) -> Self {
        Self::from_cycle(self.index() as i64 + steps)
    }
}

/// The four three-harmony frames (三合局): 申子辰 water, 寅午戌 fire,
/// 巳酉丑 metal, 亥卯未 wood. No frame is earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trine {
    #[serde(rename = "水局")]
    Water,
    #[serde(rename = "火局")]
    Fire,
    #[serde(rename = "金局")]
    Metal,
    #[serde(rename = "木局")]
    Wood,
}

pub const ALL_TRINES: [Trine; 4] = [Trine::Water, Trine::Fire, Trine::Metal, Trine::Wood];

impl Trine {
    pub const fn element(self) -> Element {
        match self {
            Self::Water => Element::Water,
            Self::Fire => Element::Fire,
            Self::Metal => Element::Metal,
            Self::Wood => Element::Wood,
        }
    }

    /// Member branches as (birth, peak, tomb): 長生, 帝旺 and 墓 of the frame.
    pub const fn members(self) -> [Branch; 3] {
        match self {
            Self::Water => [Branch::Saru, Branch::Ne, Branch::Tatsu],
            Self::Fire => [Branch::Tora, Branch::Uma, Branch::Inu],
            Self::Metal => [Branch::Mi, Branch::Tori, Branch::Ushi],
            Self::Wood => [Branch::I, Branch::U, Branch::Hitsuji],
        }
    }
}

/// Element of a branch.
pub const fn branch_element(branch: Branch) -> Element {
    branch.element()
}

/// Polarity of a branch.
pub const fn branch_polarity(branch: Branch) -> Polarity {
    branch.polarity()
}

/// Hidden stems of a branch.
pub const fn hidden_stems(branch: Branch) -> &'static [Stem] {
    branch.hidden_stems()
}

impl FromStr for Branch {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(BaziError::InvalidSymbol(format!("not a branch: {s:?}"))),
        }
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
