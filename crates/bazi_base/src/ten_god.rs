//! Ten-gods (通変星): the relation of any stem to the Day Master.
//!
//! The label is fixed by two facts: how many steps the other stem's element
//! lies ahead of the Day Master's element on the generation cycle, and
//! whether the two stems share polarity.
//!
//! | distance | relation        | same polarity | opposite |
//! |----------|-----------------|---------------|----------|
//! | 0        | same element    | 比肩          | 劫財     |
//! | 1        | I generate      | 食神          | 傷官     |
//! | 2        | I control       | 偏財          | 正財     |
//! | 3        | controls me     | 偏官          | 正官     |
//! | 4        | generates me    | 偏印          | 印綬     |

use serde::{Deserialize, Serialize};

use crate::stem::Stem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    #[serde(rename = "比肩")]
    Hiken,
    #[serde(rename = "劫財")]
    Gouzai,
    #[serde(rename = "食神")]
    Shokujin,
    #[serde(rename = "傷官")]
    Shoukan,
    #[serde(rename = "偏財")]
    Henzai,
    #[serde(rename = "正財")]
    Seizai,
    #[serde(rename = "偏官")]
    Henkan,
    #[serde(rename = "正官")]
    Seikan,
    #[serde(rename = "偏印")]
    Henin,
    #[serde(rename = "印綬")]
    Injyu,
}

/// All ten-gods, ordered by (distance, polarity match first).
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Hiken,
    TenGod::Gouzai,
    TenGod::Shokujin,
    TenGod::Shoukan,
    TenGod::Henzai,
    TenGod::Seizai,
    TenGod::Henkan,
    TenGod::Seikan,
    TenGod::Henin,
    TenGod::Injyu,
];

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hiken => "比肩",
            Self::Gouzai => "劫財",
            Self::Shokujin => "食神",
            Self::Shoukan => "傷官",
            Self::Henzai => "偏財",
            Self::Seizai => "正財",
            Self::Henkan => "偏官",
            Self::Seikan => "正官",
            Self::Henin => "偏印",
            Self::Injyu => "印綬",
        }
    }

    /// Element distance from the Day Master (0..=4).
    pub const fn distance(self) -> u8 {
        match self {
            Self::Hiken | Self::Gouzai => 0,
            Self::Shokujin | Self::Shoukan => 1,
            Self::Henzai | Self::Seizai => 2,
            Self::Henkan | Self::Seikan => 3,
            Self::Henin | Self::Injyu => 4,
        }
    }

    pub const fn same_polarity(self) -> bool {
        matches!(
            self,
            Self::Hiken | Self::Shokujin | Self::Henzai | Self::Henkan | Self::Henin
        )
    }
}

/// Ten-god of `other` as seen from `day_master`.
pub const fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let distance = day_master.element().distance_to(other.element());
    let same = day_master.index() % 2 == other.index() % 2;
    let offset = if same { 0 } else { 1 };
    ALL_TEN_GODS[(distance * 2 + offset) as usize]
}
