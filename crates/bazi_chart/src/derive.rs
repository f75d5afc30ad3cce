//! Annotating computed pillars with their symbolic derivations.

use tracing::trace;

use bazi_base::{
    FourPillars, PillarPosition, SpecialStar, apply_star_rules, life_stage, nacchin, ten_god,
    void_pair,
};

use crate::chart_types::{Chart, ChartInfo, PillarDetail};
use crate::config::ChartConfig;

/// Annotate a chart with every special star enabled.
pub fn derive_chart(chart: Chart) -> ChartInfo {
    derive_chart_with(chart, &ChartConfig::default())
}

/// Annotate a chart, evaluating only the stars listed in `config`.
pub fn derive_chart_with(chart: Chart, config: &ChartConfig) -> ChartInfo {
    let pillars = chart.pillars;
    let marks = apply_star_rules(&pillars, config.star_rules.iter().map(|s| s.rule()));
    for (pos, stars) in marks.iter() {
        if !stars.is_empty() {
            trace!(position = pos.name(), ?stars, "special stars");
        }
    }

    let void = void_pair(pillars.day);
    let details = pillars.map(|pos, p| {
        detail(&pillars, pos, marks.get(pos).clone(), void.contains(p.branch))
    });
    let void_pillars = details
        .iter()
        .filter(|(_, d)| d.is_void)
        .map(|(pos, _)| pos)
        .collect();

    ChartInfo {
        chart,
        day_master: pillars.day_master(),
        details,
        void_pair: void,
        void_pillars,
    }
}

fn detail(
    pillars: &FourPillars,
    pos: PillarPosition,
    special_stars: Vec<SpecialStar>,
    is_void: bool,
) -> PillarDetail {
    let dm = pillars.day_master();
    let pillar = *pillars.get(pos);
    let hidden = pillar.branch.hidden_stems();
    let stage = life_stage(dm, pillar.branch);

    PillarDetail {
        position: pos,
        pillar,
        sexagenary: pillar.sexagenary(),
        hidden_stems: hidden.to_vec(),
        stem_ten_god: (pos != PillarPosition::Day).then(|| ten_god(dm, pillar.stem)),
        branch_ten_god: ten_god(dm, pillar.branch.main_qi()),
        hidden_ten_gods: hidden.iter().map(|&s| ten_god(dm, s)).collect(),
        life_stage: stage,
        power: stage.power(),
        nacchin: nacchin(pillar),
        special_stars,
        is_void,
    }
}
