//! Cycle tables and symbolic derivations for Four Pillars (四柱推命) charts.
//!
//! This crate provides:
//! - The ten stems, twelve branches, five elements and the 60-term cycle
//! - Hidden stems (蔵干), ten-gods (通変星), twelve life-stages (十二運)
//! - Nacchin (納音), special stars (特殊星) and void pairs (空亡)
//!
//! Everything here is a pure function over closed enums and `const` tables.
//! Chart assembly lives in `bazi_chart`.

pub mod branch;
pub mod element;
pub mod error;
pub mod life_stage;
pub mod nacchin;
pub mod pillar;
pub mod special_star;
pub mod stem;
pub mod ten_god;
pub mod validate;
pub mod void_pair;

pub use branch::{
    ALL_BRANCHES, ALL_TRINES, Branch, Trine, branch_element, branch_polarity, hidden_stems,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::BaziError;
pub use life_stage::{ALL_LIFE_STAGES, LifeStage, life_stage, stage_power};
pub use nacchin::{Nacchin, nacchin};
pub use pillar::{ALL_POSITIONS, FourPillars, PerPillar, Pillar, PillarPosition, Sexagenary};
pub use special_star::{
    ALL_SPECIAL_STARS, STAR_RULES, SpecialStar, StarMarks, StarRule, StarTarget,
    apply_star_rules, special_stars,
};
pub use stem::{ALL_STEMS, Stem, stem_element, stem_polarity};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god};
pub use validate::validate_tables;
pub use void_pair::{VoidPair, void_pair};
