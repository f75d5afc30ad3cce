//! Twelve life-stages (十二運) of the Day Master against a branch.
//!
//! Stored as a direct 10×12 lookup table. Yang stems walk the stages forward
//! through the branches from their 長生 branch, yin stems walk backward;
//! [`crate::validate`] checks the table against that rule.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    #[serde(rename = "長生")]
    Chousei,
    #[serde(rename = "沐浴")]
    Mokuyoku,
    #[serde(rename = "冠帯")]
    Kantai,
    #[serde(rename = "建禄")]
    Kenroku,
    #[serde(rename = "帝旺")]
    Teiou,
    #[serde(rename = "衰")]
    Sui,
    #[serde(rename = "病")]
    Byou,
    #[serde(rename = "死")]
    Shi,
    #[serde(rename = "墓")]
    Bo,
    #[serde(rename = "絶")]
    Zetsu,
    #[serde(rename = "胎")]
    Tai,
    #[serde(rename = "養")]
    You,
}

/// All twelve stages in cycle order, starting at 長生.
pub const ALL_LIFE_STAGES: [LifeStage; 12] = [
    LifeStage::Chousei,
    LifeStage::Mokuyoku,
    LifeStage::Kantai,
    LifeStage::Kenroku,
    LifeStage::Teiou,
    LifeStage::Sui,
    LifeStage::Byou,
    LifeStage::Shi,
    LifeStage::Bo,
    LifeStage::Zetsu,
    LifeStage::Tai,
    LifeStage::You,
];

impl LifeStage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chousei => "長生",
            Self::Mokuyoku => "沐浴",
            Self::Kantai => "冠帯",
            Self::Kenroku => "建禄",
            Self::Teiou => "帝旺",
            Self::Sui => "衰",
            Self::Byou => "病",
            Self::Shi => "死",
            Self::Bo => "墓",
            Self::Zetsu => "絶",
            Self::Tai => "胎",
            Self::You => "養",
        }
    }

    /// Position in the cycle (長生=0 .. 養=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Chousei => 0,
            Self::Mokuyoku => 1,
            Self::Kantai => 2,
            Self::Kenroku => 3,
            Self::Teiou => 4,
            Self::Sui => 5,
            Self::Byou => 6,
            Self::Shi => 7,
            Self::Bo => 8,
            Self::Zetsu => 9,
            Self::Tai => 10,
            Self::You => 11,
        }
    }

    /// Energy weight, 1 (weakest) to 5.
    pub const fn power(self) -> u8 {
        match self {
            Self::Kantai | Self::Kenroku | Self::Teiou => 5,
            Self::Chousei => 4,
            Self::Mokuyoku | Self::Sui | Self::You => 3,
            Self::Byou | Self::Bo | Self::Tai => 2,
            Self::Shi | Self::Zetsu => 1,
        }
    }
}

/// Stage by [stem index][branch index], branches in 子..亥 order.
pub(crate) const LIFE_STAGE_TABLE: [[LifeStage; 12]; 10] = {
    use LifeStage::*;
    [
        // columns: 子 丑 寅 卯 辰 巳 午 未 申 酉 戌 亥
        [Mokuyoku, Kantai, Kenroku, Teiou, Sui, Byou, Shi, Bo, Zetsu, Tai, You, Chousei], // 甲
        [Byou, Sui, Teiou, Kenroku, Kantai, Mokuyoku, Chousei, You, Tai, Zetsu, Bo, Shi], // 乙
        [Tai, You, Chousei, Mokuyoku, Kantai, Kenroku, Teiou, Sui, Byou, Shi, Bo, Zetsu], // 丙
        [Zetsu, Bo, Shi, Byou, Sui, Teiou, Kenroku, Kantai, Mokuyoku, Chousei, You, Tai], // 丁
        [Tai, You, Chousei, Mokuyoku, Kantai, Kenroku, Teiou, Sui, Byou, Shi, Bo, Zetsu], // 戊
        [Zetsu, Bo, Shi, Byou, Sui, Teiou, Kenroku, Kantai, Mokuyoku, Chousei, You, Tai], // 己
        [Shi, Bo, Zetsu, Tai, You, Chousei, Mokuyoku, Kantai, Kenroku, Teiou, Sui, Byou], // 庚
        [Chousei, You, Tai, Zetsu, Bo, Shi, Byou, Sui, Teiou, Kenroku, Kantai, Mokuyoku], // 辛
        [Teiou, Sui, Byou, Shi, Bo, Zetsu, Tai, You, Chousei, Mokuyoku, Kantai, Kenroku], // 壬
        [Kenroku, Kantai, Mokuyoku, Chousei, You, Tai, Zetsu, Bo, Shi, Byou, Sui, Teiou], // 癸
    ]
};

/// Life-stage of `day_master` in `branch`.
pub const fn life_stage(day_master: Stem, branch: Branch) -> LifeStage {
    LIFE_STAGE_TABLE[day_master.index() as usize][branch.index() as usize]
}

/// Power weight (1..=5) of a stage.
pub const fn stage_power(stage: LifeStage) -> u8 {
    stage.power()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn kinoe_in_i_is_chousei() {
        let stage = life_stage(Stem::Kinoe, Branch::I);
        assert_eq!(stage, LifeStage::Chousei);
        assert_eq!(stage.power(), 4);
    }

    #[test]
    fn peak_stages() {
        assert_eq!(life_stage(Stem::Hinoe, Branch::Uma), LifeStage::Teiou);
        assert_eq!(life_stage(Stem::Mizunoto, Branch::I), LifeStage::Teiou);
        assert_eq!(life_stage(Stem::Kanoe, Branch::Saru), LifeStage::Kenroku);
    }

    #[test]
    fn powers_in_range() {
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                let p = stage_power(life_stage(s, b));
                assert!((1..=5).contains(&p), "{s}{b}: {p}");
            }
        }
    }

    #[test]
    fn indices_sequential() {
        for (i, st) in ALL_LIFE_STAGES.iter().enumerate() {
            assert_eq!(st.index() as usize, i);
        }
    }

    #[test]
    fn earth_stems_follow_fire() {
        for b in ALL_BRANCHES {
            assert_eq!(life_stage(Stem::Tsuchinoe, b), life_stage(Stem::Hinoe, b));
            assert_eq!(life_stage(Stem::Tsuchinoto, b), life_stage(Stem::Hinoto, b));
        }
    }
}
