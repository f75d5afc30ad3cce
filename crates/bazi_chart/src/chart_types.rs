//! Result types for chart computation.

use serde::Serialize;

use bazi_base::{
    Branch, FourPillars, LifeStage, Nacchin, PerPillar, Pillar, PillarPosition, Sexagenary,
    SpecialStar, Stem, TenGod, VoidPair,
};
use bazi_time::CivilDateTime;
use bazi_time::solar_term::SolarTermCutover;

/// Month of the solar-term calendar a moment falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaziMonth {
    /// 1 for the 寅 month (from 立春) through 12 for the 丑 month (from 小寒).
    pub ordinal: u8,
    /// The sectional term that opened this month.
    pub term: SolarTermCutover,
}

impl BaziMonth {
    /// Branch of the month: 寅 for ordinal 1, 丑 for ordinal 12.
    pub const fn branch(&self) -> Branch {
        Branch::from_cycle(self.ordinal as i64 + 1)
    }
}

/// The four pillars together with the calendar facts they were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chart {
    /// Local wall-clock input.
    pub civil: CivilDateTime,
    /// Gregorian year whose 立春 opened the Bazi year.
    pub bazi_year: i32,
    pub bazi_month: BaziMonth,
    pub pillars: FourPillars,
}

/// Everything derived for one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarDetail {
    pub position: PillarPosition,
    pub pillar: Pillar,
    pub sexagenary: Sexagenary,
    /// Hidden stems (蔵干), main qi last.
    pub hidden_stems: Vec<Stem>,
    /// Ten-god of the visible stem; `None` on the day pillar, whose stem is
    /// the Day Master itself.
    pub stem_ten_god: Option<TenGod>,
    /// Ten-god of the branch, read from its main qi.
    pub branch_ten_god: TenGod,
    /// One ten-god per hidden stem, same order as `hidden_stems`.
    pub hidden_ten_gods: Vec<TenGod>,
    pub life_stage: LifeStage,
    /// Power weight of `life_stage`, 1..=5.
    pub power: u8,
    pub nacchin: Nacchin,
    pub special_stars: Vec<SpecialStar>,
    /// The pillar's branch belongs to the chart's void pair.
    pub is_void: bool,
}

/// A fully annotated chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartInfo {
    pub chart: Chart,
    pub day_master: Stem,
    pub details: PerPillar<PillarDetail>,
    pub void_pair: VoidPair,
    /// Pillars whose branch falls in the void pair, in chart order.
    pub void_pillars: Vec<PillarPosition>,
}

impl ChartInfo {
    pub const fn pillars(&self) -> &FourPillars {
        &self.chart.pillars
    }

    pub fn detail(&self, pos: PillarPosition) -> &PillarDetail {
        self.details.get(pos)
    }

    /// Total number of hidden stems across the four branches.
    pub fn hidden_stem_count(&self) -> usize {
        self.details.iter().map(|(_, d)| d.hidden_stems.len()).sum()
    }

    /// Pillars carrying `star`.
    pub fn pillars_with(&self, star: SpecialStar) -> Vec<PillarPosition> {
        self.details
            .iter()
            .filter(|(_, d)| d.special_stars.contains(&star))
            .map(|(pos, _)| pos)
            .collect()
    }
}
