//! End-to-end chart properties over ranges of dates.

use bazi_base::{ALL_LIFE_STAGES, Sexagenary, VoidPair};
use bazi_chart::{ChartConfig, compute_pillars, derive_chart, element_tally};
use bazi_time::CivilDateTime;
use bazi_time::julian::jdn_to_calendar;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> CivilDateTime {
    CivilDateTime::new(y, m, d, h, min).unwrap()
}

#[test]
fn deterministic() {
    let t = at(1990, 1, 15, 8, 30);
    assert_eq!(derive_chart(compute_pillars(&t)), derive_chart(compute_pillars(&t)));
}

#[test]
fn day_index_advances_daily() {
    let start = at(1999, 12, 1, 12, 0).julian_day_number();
    let mut prev = None;
    for jdn in start..start + 400 {
        let (y, m, d) = jdn_to_calendar(jdn);
        let idx = compute_pillars(&at(y, m, d, 12, 0)).pillars.day.sexagenary().index();
        if let Some(p) = prev {
            assert_eq!(idx, (p + 1) % 60, "{y}-{m}-{d}");
        }
        prev = Some(idx);
    }
}

#[test]
fn year_index_advances_yearly() {
    let mut prev: Option<u8> = None;
    for y in 1900..2100 {
        let idx = compute_pillars(&at(y, 6, 15, 12, 0)).pillars.year.sexagenary().index();
        if let Some(p) = prev {
            assert_eq!(idx, (p + 1) % 60, "{y}");
        }
        prev = Some(idx);
    }
}

#[test]
fn month_branch_matches_ordinal() {
    for m in 1..=12 {
        for d in [1, 10, 28] {
            let c = compute_pillars(&at(2021, m, d, 6, 0));
            assert_eq!(c.pillars.month.branch, c.bazi_month.branch());
        }
    }
}

#[test]
fn golden_1990_01_15() {
    let c = compute_pillars(&at(1990, 1, 15, 8, 30));
    assert_eq!(at(1990, 1, 15, 0, 0).julian_day_number(), 2_447_907);
    let names = [c.pillars.year, c.pillars.month, c.pillars.day, c.pillars.hour]
        .map(|p| p.name());
    assert_eq!(names, ["己巳", "丁丑", "庚辰", "庚辰"]);
    assert_eq!(c.pillars.day.sexagenary().index(), 16);
}

#[test]
fn golden_2000_01_01() {
    let c = compute_pillars(&at(2000, 1, 1, 12, 0));
    assert_eq!(c.pillars.day.name(), "戊午");
    assert_eq!(c.pillars.day.sexagenary().index(), 54);
    // before 小寒: still the 子 month of 己卯
    assert_eq!(c.pillars.year.name(), "己卯");
    assert_eq!(c.pillars.month.name(), "丙子");
}

#[test]
fn golden_2024_risshun() {
    let c = compute_pillars(&at(2024, 2, 4, 12, 0));
    assert_eq!(c.pillars.year.name(), "甲辰");
    assert_eq!(c.pillars.month.name(), "丙寅");

    let eve = compute_pillars(&at(2024, 2, 3, 12, 0));
    assert_eq!(eve.pillars.year.name(), "癸卯");
    assert_eq!(eve.pillars.month.name(), "乙丑");
}

#[test]
fn tally_sum_matches_hidden_count() {
    for d in 1..=28 {
        let info = derive_chart(compute_pillars(&at(2010, 8, d, 14, 0)));
        let sum = element_tally(info.pillars(), 0.5).total();
        assert_eq!(sum, 8.0 + 0.5 * info.hidden_stem_count() as f64);
    }
}

#[test]
fn life_stages_canonical() {
    for h in (0..24).step_by(2) {
        let info = derive_chart(compute_pillars(&at(1975, 11, 2, h, 0)));
        for (_, d) in info.details.iter() {
            assert!(ALL_LIFE_STAGES.contains(&d.life_stage));
            assert!((1..=5).contains(&d.power));
        }
    }
}

#[test]
fn void_pair_depends_only_on_day_block() {
    for d in 1..=28 {
        let info = derive_chart(compute_pillars(&at(2015, 2, d, 9, 0)));
        let block = info.pillars().day.sexagenary().decade();
        let expected = VoidPair::for_day(Sexagenary::from_cycle(i64::from(block) * 10));
        assert_eq!(info.void_pair, expected);
    }
}

#[test]
fn json_shape() {
    let info = derive_chart(compute_pillars(&at(1990, 1, 15, 8, 30)));
    let v = serde_json::to_value(&info).unwrap();
    assert_eq!(v["day_master"], "庚");
    assert_eq!(v["chart"]["pillars"]["year"], "己巳");
    assert_eq!(v["details"]["day"]["stem_ten_god"], serde_json::Value::Null);
    assert_eq!(v["details"]["year"]["life_stage"], "長生");
    assert_eq!(v["details"]["hour"]["nacchin"], "白鑞金");
    assert_eq!(v["void_pair"], "申酉");
    assert_eq!(v["chart"]["bazi_month"]["term"]["term"], "小寒");
    assert_eq!(v["void_pillars"], serde_json::json!([]));
}

#[test]
fn config_round_trip_through_json() {
    let c = ChartConfig::default();
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(ChartConfig::from_json(&json).unwrap(), c);
}
