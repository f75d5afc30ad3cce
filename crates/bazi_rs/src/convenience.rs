use tracing::debug;

use bazi_base::{BaziError, FourPillars};
use bazi_chart::config::DEFAULT_HIDDEN_STEM_WEIGHT;
use bazi_chart::{
    ChartConfig, ChartInfo, ElementTally, compute_pillars, derive_chart_with, element_tally,
    surface_tally,
};
use bazi_time::CivilDateTime;

use crate::global::ensure_tables;

/// Compute a fully annotated chart from a local date-time string.
///
/// Accepts `YYYY-MM-DDThh:mm[:ss]`, `YYYY-MM-DD hh:mm[:ss]` and
/// `YYYY-MM-DD` (taken at 12:00). A trailing `Z` is ignored; no timezone
/// conversion is applied.
pub fn compute_chart(date_time: &str) -> Result<ChartInfo, BaziError> {
    compute_chart_with(date_time, &ChartConfig::default())
}

/// Like [`compute_chart`], with date-only input taking
/// `config.default_time` and only `config.star_rules` evaluated.
pub fn compute_chart_with(date_time: &str, config: &ChartConfig) -> Result<ChartInfo, BaziError> {
    let t = CivilDateTime::parse_with_default_time(date_time, &config.default_time)?;
    compute_chart_at(&t, config)
}

/// Compute a chart for an already parsed date-time.
pub fn compute_chart_at(t: &CivilDateTime, config: &ChartConfig) -> Result<ChartInfo, BaziError> {
    ensure_tables()?;
    config.validate()?;
    let info = derive_chart_with(compute_pillars(t), config);
    debug!(
        civil = %t,
        day_master = info.day_master.name(),
        void_pair = %info.void_pair,
        "chart computed"
    );
    Ok(info)
}

/// Only the four pillars of a date-time string.
pub fn pillars_of(date_time: &str) -> Result<FourPillars, BaziError> {
    let t = CivilDateTime::parse(date_time)?;
    Ok(compute_pillars(&t).pillars)
}

/// Element tally with hidden stems at the default weight (0.5).
pub fn compute_element_tally(chart: &ChartInfo) -> ElementTally {
    element_tally(chart.pillars(), DEFAULT_HIDDEN_STEM_WEIGHT)
}

/// Element tally with hidden stems weighted by `config.hidden_stem_weight`.
pub fn compute_element_tally_with(chart: &ChartInfo, config: &ChartConfig) -> ElementTally {
    element_tally(chart.pillars(), config.hidden_stem_weight)
}

/// Tally of the eight visible stems and branches only.
pub fn compute_surface_tally(chart: &ChartInfo) -> ElementTally {
    surface_tally(chart.pillars())
}
