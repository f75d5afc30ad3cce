//! Four-pillar chart assembly.
//!
//! [`compute_pillars`] turns a civil date-time into the four stem/branch
//! pillars; [`derive_chart`] annotates them with hidden stems, ten-gods,
//! life-stages, nacchin, special stars and the void pair; [`element_tally`]
//! weighs the five elements across the result.

pub mod chart_types;
pub mod config;
pub mod derive;
pub mod pillars;
pub mod tally;

pub use chart_types::{BaziMonth, Chart, ChartInfo, PillarDetail};
pub use config::ChartConfig;
pub use derive::{derive_chart, derive_chart_with};
pub use pillars::{
    bazi_month, bazi_year, compute_pillars, day_pillar, hour_pillar, month_pillar, year_pillar,
};
pub use tally::{ElementTally, element_tally, surface_tally};
