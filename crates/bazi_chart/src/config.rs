//! Chart configuration, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use bazi_base::{ALL_SPECIAL_STARS, BaziError, SpecialStar};
use bazi_time::DEFAULT_TIME;
use bazi_time::civil::parse_time;

/// Weight of one hidden stem in the element tally.
pub const DEFAULT_HIDDEN_STEM_WEIGHT: f64 = 0.5;

/// Options for chart computation.
///
/// Every field is optional in JSON; missing fields take their defaults.
///
/// ```json
/// { "default_time": "12:00", "hidden_stem_weight": 0.5, "star_rules": ["天乙貴人", "羊刃"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Time of day used when the input carries a date only (`hh:mm`).
    pub default_time: String,
    /// Weight of each hidden stem in the element tally, in `0.0..=1.0`.
    pub hidden_stem_weight: f64,
    /// Special stars to evaluate, in output order.
    pub star_rules: Vec<SpecialStar>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_time: DEFAULT_TIME.to_string(),
            hidden_stem_weight: DEFAULT_HIDDEN_STEM_WEIGHT,
            star_rules: ALL_SPECIAL_STARS.to_vec(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, BaziError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BaziError::Configuration(format!("config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BaziError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| BaziError::Configuration(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), BaziError> {
        parse_time(&self.default_time)
            .map_err(|e| BaziError::Configuration(format!("default_time: {e}")))?;

        let w = self.hidden_stem_weight;
        if !w.is_finite() || !(0.0..=1.0).contains(&w) {
            return Err(BaziError::Configuration(format!(
                "hidden_stem_weight must be within 0.0..=1.0, got {w}"
            )));
        }

        for (i, star) in self.star_rules.iter().enumerate() {
            if self.star_rules[..i].contains(star) {
                return Err(BaziError::Configuration(format!(
                    "star_rules lists {} twice",
                    star.name()
                )));
            }
        }
        Ok(())
    }
}
