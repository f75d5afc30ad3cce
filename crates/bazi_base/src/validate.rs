//! Consistency checks over the static tables.
//!
//! The tables are `const` data and cannot change at runtime, so a failure
//! here means the source itself is wrong. Callers run the check once before
//! serving charts and report it as [`BaziError::Configuration`]. Each check
//! takes the table it inspects, so the same rules apply to any candidate
//! table.

use crate::branch::{ALL_BRANCHES, Branch, HIDDEN_STEMS};
use crate::element::{Element, Polarity};
use crate::error::BaziError;
use crate::life_stage::{ALL_LIFE_STAGES, LIFE_STAGE_TABLE, LifeStage};
use crate::nacchin::NACCHIN_TABLE;
use crate::special_star::{ALL_SPECIAL_STARS, STAR_RULES, StarRule};
use crate::stem::{ALL_STEMS, Stem};
use crate::void_pair::VOID_TABLE;

fn config_err(msg: String) -> BaziError {
    BaziError::Configuration(msg)
}

fn check_hidden_stems(table: &[&[Stem]; 12]) -> Result<(), BaziError> {
    for b in ALL_BRANCHES {
        let stems = table[b.index() as usize];
        let Some(&main_qi) = stems.last() else {
            return Err(config_err(format!("branch {b}: no hidden stems")));
        };
        if stems.len() > 3 {
            return Err(config_err(format!("branch {b}: {} hidden stems", stems.len())));
        }
        if main_qi.element() != b.element() {
            return Err(config_err(format!(
                "branch {b}: main qi {main_qi} is not {}",
                b.element().name()
            )));
        }
    }
    Ok(())
}

fn check_life_stages(table: &[[LifeStage; 12]; 10]) -> Result<(), BaziError> {
    for stem in ALL_STEMS {
        let row = &table[stem.index() as usize];
        let mut seen = [false; 12];
        for stage in row {
            seen[stage.index() as usize] = true;
        }
        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(config_err(format!(
                "life-stage row {stem} lacks {}",
                ALL_LIFE_STAGES[missing].name()
            )));
        }

        let step: i64 = match stem.polarity() {
            Polarity::Yang => 1,
            Polarity::Yin => -1,
        };
        for b in ALL_BRANCHES {
            let here = row[b.index() as usize].index() as i64;
            let next = row[b.advance(1).index() as usize].index() as i64;
            if (next - here).rem_euclid(12) != step.rem_euclid(12) {
                return Err(config_err(format!(
                    "life-stage row {stem} breaks its cycle after {b}"
                )));
            }
        }
    }
    Ok(())
}

fn check_nacchin(table: &[(&str, Element); 30]) -> Result<(), BaziError> {
    for &(name, element) in table {
        let last = name.chars().last().map(String::from).unwrap_or_default();
        if last != element.name() {
            return Err(config_err(format!(
                "nacchin {name} tagged {}",
                element.name()
            )));
        }
    }
    Ok(())
}

fn check_void_pairs(table: &[(Branch, Branch); 6]) -> Result<(), BaziError> {
    for (block, &(first, second)) in table.iter().enumerate() {
        let start = block as i64 * 10;
        let expected = (Branch::from_cycle(start + 10), Branch::from_cycle(start + 11));
        if (first, second) != expected {
            return Err(config_err(format!(
                "void pair for block {block} is {first}{second}, expected {}{}",
                expected.0, expected.1
            )));
        }
    }
    Ok(())
}

fn check_star_rules(rules: &[StarRule]) -> Result<(), BaziError> {
    if rules.len() != ALL_SPECIAL_STARS.len() {
        return Err(config_err(format!(
            "{} star rules for {} stars",
            rules.len(),
            ALL_SPECIAL_STARS.len()
        )));
    }
    for (rule, star) in rules.iter().zip(ALL_SPECIAL_STARS) {
        if rule.star != star {
            return Err(config_err(format!(
                "star rule order: found {} where {} belongs",
                rule.star.name(),
                star.name()
            )));
        }
    }
    Ok(())
}

/// Verify every static lookup table.
pub fn validate_tables() -> Result<(), BaziError> {
    check_hidden_stems(&HIDDEN_STEMS)?;
    check_life_stages(&LIFE_STAGE_TABLE)?;
    check_nacchin(&NACCHIN_TABLE)?;
    check_void_pairs(&VOID_TABLE)?;
    check_star_rules(&STAR_RULES)?;
    Ok(())
}
