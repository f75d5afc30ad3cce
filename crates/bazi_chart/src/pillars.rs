//! Year, month, day and hour pillars from a civil date-time.
//!
//! The year and month boundaries follow the sectional solar terms: the Bazi
//! year turns at 立春 (early February), and each month turns at its term's
//! estimated day. Days run on the continuous 60-cycle anchored to the Julian
//! Day Number. The hour pillar uses two-hour branches with 子 centred on
//! midnight (23:00-00:59).

use tracing::debug;

use bazi_base::{Branch, FourPillars, Pillar, Sexagenary, Stem};
use bazi_time::CivilDateTime;
use bazi_time::solar_term::ALL_SOLAR_TERMS;

use crate::chart_types::{BaziMonth, Chart};

/// Offset from the Julian Day Number to the sexagenary day index.
const JDN_DAY_OFFSET: i64 = 49;

/// The Bazi year of a moment: the previous Gregorian year until February's
/// cutover has passed.
pub fn bazi_year(t: &CivilDateTime) -> i32 {
    if t.month() < 2 || (t.month() == 2 && !t.is_after_cutover()) {
        t.year() - 1
    } else {
        t.year()
    }
}

/// The Bazi month of a moment: this Gregorian month once its term has
/// begun, otherwise the previous one (December of the previous year for
/// early January).
pub fn bazi_month(t: &CivilDateTime) -> BaziMonth {
    let (year, month) = if t.is_after_cutover() {
        (t.year(), t.month())
    } else if t.month() == 1 {
        (t.year() - 1, 12)
    } else {
        (t.year(), t.month() - 1)
    };
    // month is 1..=12 here
    let term = ALL_SOLAR_TERMS[(month as usize + 11) % 12].cutover(year);
    BaziMonth {
        ordinal: ((month + 10) % 12 + 1) as u8,
        term,
    }
}

/// Year pillar: 甲子 fell on 4 CE, so the index is `year - 4`.
pub const fn year_pillar(bazi_year: i32) -> Pillar {
    Pillar::from_sexagenary(Sexagenary::from_cycle(bazi_year as i64 - 4))
}

/// Month pillar by the five-tigers rule (五虎遁): the 寅 month's stem is fixed
/// by the year stem, and the following months count on from it.
pub const fn month_pillar(year_stem: Stem, ordinal: u8) -> Pillar {
    let m = ordinal as i64 - 1;
    let first = (year_stem.index() % 5) as i64 * 2 + 2;
    Pillar {
        stem: Stem::from_cycle(first + m),
        branch: Branch::from_cycle(m + 2),
    }
}

/// Day pillar for a Julian Day Number.
pub const fn day_pillar(jdn: i64) -> Pillar {
    Pillar::from_sexagenary(Sexagenary::from_cycle(jdn + JDN_DAY_OFFSET))
}

/// Hour pillar by the five-rats rule (五鼠遁). Hour 23 takes the 子 branch
/// but keeps the current day's stem row.
pub const fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch = ((hour as i64 + 1) / 2) % 12;
    Pillar {
        stem: Stem::from_cycle((day_stem.index() % 5) as i64 * 2 + branch),
        branch: Branch::from_cycle(branch),
    }
}

/// Compute the four pillars for a local date-time.
pub fn compute_pillars(t: &CivilDateTime) -> Chart {
    let year = bazi_year(t);
    let month = bazi_month(t);
    debug!(
        civil = %t,
        bazi_year = year,
        bazi_month = month.ordinal,
        term = month.term.term.name(),
        "resolved solar-term calendar"
    );

    let year_p = year_pillar(year);
    let month_p = month_pillar(year_p.stem, month.ordinal);
    let day_p = day_pillar(t.julian_day_number());
    let hour_p = hour_pillar(day_p.stem, t.hour());

    Chart {
        civil: *t,
        bazi_year: year,
        bazi_month: month,
        pillars: FourPillars::new(year_p, month_p, day_p, hour_p),
    }
}
