//! Convenience wrapper for the Bazi (四柱推命) chart engine.
//!
//! Accepts date-time strings directly and returns fully annotated charts,
//! removing the need to parse [`CivilDateTime`] values, resolve the
//! solar-term calendar, or assemble derivations by hand.
//!
//! # Quick start
//!
//! ```rust
//! use bazi_rs::*;
//!
//! let chart = compute_chart("1990-01-15T08:30").unwrap();
//! assert_eq!(chart.pillars().day.name(), "庚辰");
//!
//! let tally = compute_element_tally(&chart);
//! assert_eq!(tally.dominant(), Some(Element::Earth));
//! ```

pub mod convenience;
pub mod global;

// Primary re-exports: users should only need `use bazi_rs::*`
pub use convenience::{
    compute_chart, compute_chart_at, compute_chart_with, compute_element_tally,
    compute_element_tally_with, compute_surface_tally, pillars_of,
};
pub use global::{ensure_tables, tables_checked};

pub use bazi_chart::{
    BaziMonth, Chart, ChartConfig, ChartInfo, ElementTally, PillarDetail,
    config::DEFAULT_HIDDEN_STEM_WEIGHT,
};

pub use bazi_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_LIFE_STAGES, ALL_POSITIONS, ALL_SPECIAL_STARS, ALL_STEMS,
    ALL_TEN_GODS, BaziError, Branch, Element, FourPillars, LifeStage, Nacchin, PerPillar, Pillar,
    PillarPosition, Polarity, Sexagenary, SpecialStar, Stem, TenGod, VoidPair, life_stage,
    nacchin, ten_god, void_pair,
};

pub use bazi_time::solar_term::{SolarTerm, SolarTermCutover, solar_term_cutover};
pub use bazi_time::{CivilDateTime, TimeError};
