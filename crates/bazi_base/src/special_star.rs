//! Special stars (特殊星).
//!
//! Every star is an independent rule: a key taken from one pillar (the
//! month branch, the Day Master, the day branch) selects a target stem or
//! branch, and each other pillar carrying that target gets the star. Rules
//! never interact; a pillar's stars are the union of all matching rules.

use serde::{Deserialize, Serialize};

use crate::branch::{Branch, Trine};
use crate::element::Polarity;
use crate::pillar::{ALL_POSITIONS, FourPillars, PerPillar, PillarPosition};
use crate::stem::Stem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialStar {
    #[serde(rename = "天徳貴人")]
    Tentoku,
    #[serde(rename = "月徳貴人")]
    Gettoku,
    #[serde(rename = "天乙貴人")]
    Tenotsu,
    #[serde(rename = "文昌貴人")]
    Bunsho,
    #[serde(rename = "羊刃")]
    Youjin,
    #[serde(rename = "駅馬")]
    Ekiba,
    #[serde(rename = "桃花")]
    Touka,
    #[serde(rename = "華蓋")]
    Kagai,
}

pub const ALL_SPECIAL_STARS: [SpecialStar; 8] = [
    SpecialStar::Tentoku,
    SpecialStar::Gettoku,
    SpecialStar::Tenotsu,
    SpecialStar::Bunsho,
    SpecialStar::Youjin,
    SpecialStar::Ekiba,
    SpecialStar::Touka,
    SpecialStar::Kagai,
];

impl SpecialStar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tentoku => "天徳貴人",
            Self::Gettoku => "月徳貴人",
            Self::Tenotsu => "天乙貴人",
            Self::Bunsho => "文昌貴人",
            Self::Youjin => "羊刃",
            Self::Ekiba => "駅馬",
            Self::Touka => "桃花",
            Self::Kagai => "華蓋",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Tentoku => 0,
            Self::Gettoku => 1,
            Self::Tenotsu => 2,
            Self::Bunsho => 3,
            Self::Youjin => 4,
            Self::Ekiba => 5,
            Self::Touka => 6,
            Self::Kagai => 7,
        }
    }

    /// The rule that places this star.
    pub fn rule(self) -> &'static StarRule {
        &STAR_RULES[self.index() as usize]
    }
}

/// What a star looks for on a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarTarget {
    Stem(Stem),
    Branch(Branch),
}

impl StarTarget {
    fn matches(self, pillars: &FourPillars, pos: PillarPosition) -> bool {
        let p = pillars.get(pos);
        match self {
            Self::Stem(s) => p.stem == s,
            Self::Branch(b) => p.branch == b,
        }
    }
}

/// A single star predicate.
pub struct StarRule {
    pub star: SpecialStar,
    /// True if the star sits on the pillar at `pos`.
    pub test: fn(&FourPillars, PillarPosition) -> bool,
}

impl std::fmt::Debug for StarRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarRule").field("star", &self.star).finish()
    }
}

/// Rules in the same order as [`ALL_SPECIAL_STARS`].
pub static STAR_RULES: [StarRule; 8] = [
    StarRule { star: SpecialStar::Tentoku, test: tentoku },
    StarRule { star: SpecialStar::Gettoku, test: gettoku },
    StarRule { star: SpecialStar::Tenotsu, test: tenotsu },
    StarRule { star: SpecialStar::Bunsho, test: bunsho },
    StarRule { star: SpecialStar::Youjin, test: youjin },
    StarRule { star: SpecialStar::Ekiba, test: ekiba },
    StarRule { star: SpecialStar::Touka, test: touka },
    StarRule { star: SpecialStar::Kagai, test: kagai },
];

// ---------------------------------------------------------------------------
// Keyed by the month branch; marks year/day/hour
// ---------------------------------------------------------------------------

/// 天徳貴人 target for a month branch. Four months point at a branch.
pub const fn tentoku_target(month_branch: Branch) -> StarTarget {
    use StarTarget as T;
    match month_branch {
        Branch::Tora => T::Stem(Stem::Hinoto),
        Branch::U => T::Branch(Branch::Saru),
        Branch::Tatsu => T::Stem(Stem::Mizunoe),
        Branch::Mi => T::Stem(Stem::Kanoto),
        Branch::Uma => T::Branch(Branch::I),
        Branch::Hitsuji => T::Stem(Stem::Kinoe),
        Branch::Saru => T::Stem(Stem::Mizunoto),
        Branch::Tori => T::Branch(Branch::Tora),
        Branch::Inu => T::Stem(Stem::Hinoe),
        Branch::I => T::Stem(Stem::Kinoto),
        Branch::Ne => T::Branch(Branch::Mi),
        Branch::Ushi => T::Stem(Stem::Kanoe),
    }
}

/// 月徳貴人 stem for a month branch, by its three-harmony frame.
pub const fn gettoku_target(month_branch: Branch) -> Stem {
    match month_branch.trine() {
        Trine::Fire => Stem::Hinoe,
        Trine::Water => Stem::Mizunoe,
        Trine::Wood => Stem::Kinoe,
        Trine::Metal => Stem::Kanoe,
    }
}

fn tentoku(p: &FourPillars, pos: PillarPosition) -> bool {
    pos != PillarPosition::Month && tentoku_target(p.month.branch).matches(p, pos)
}

fn gettoku(p: &FourPillars, pos: PillarPosition) -> bool {
    pos != PillarPosition::Month && p.get(pos).stem == gettoku_target(p.month.branch)
}

// ---------------------------------------------------------------------------
// Keyed by the Day Master; marks any pillar
// ---------------------------------------------------------------------------

/// 天乙貴人 branches for a Day Master.
pub const fn tenotsu_targets(day_master: Stem) -> [Branch; 2] {
    match day_master {
        Stem::Kinoe | Stem::Tsuchinoe | Stem::Kanoe => [Branch::Ushi, Branch::Hitsuji],
        Stem::Kinoto | Stem::Tsuchinoto => [Branch::Ne, Branch::Saru],
        Stem::Hinoe | Stem::Hinoto => [Branch::I, Branch::Tori],
        Stem::Kanoto => [Branch::Tora, Branch::Uma],
        Stem::Mizunoe | Stem::Mizunoto => [Branch::U, Branch::Mi],
    }
}

/// 文昌貴人 branch for a Day Master.
pub const fn bunsho_target(day_master: Stem) -> Branch {
    match day_master {
        Stem::Kinoe => Branch::Mi,
        Stem::Kinoto => Branch::Uma,
        Stem::Hinoe | Stem::Tsuchinoe => Branch::Saru,
        Stem::Hinoto | Stem::Tsuchinoto => Branch::Tori,
        Stem::Kanoe => Branch::I,
        Stem::Kanoto => Branch::Ne,
        Stem::Mizunoe => Branch::Tora,
        Stem::Mizunoto => Branch::U,
    }
}

/// 羊刃 branch: the 帝旺 branch of a yang Day Master. Yin stems have none.
pub const fn youjin_target(day_master: Stem) -> Option<Branch> {
    if !matches!(day_master.polarity(), Polarity::Yang) {
        return None;
    }
    Some(match day_master {
        Stem::Kinoe => Branch::U,
        Stem::Hinoe | Stem::Tsuchinoe => Branch::Uma,
        Stem::Kanoe => Branch::Tori,
        _ => Branch::Ne,
    })
}

fn tenotsu(p: &FourPillars, pos: PillarPosition) -> bool {
    tenotsu_targets(p.day_master()).contains(&p.get(pos).branch)
}

fn bunsho(p: &FourPillars, pos: PillarPosition) -> bool {
    p.get(pos).branch == bunsho_target(p.day_master())
}

fn youjin(p: &FourPillars, pos: PillarPosition) -> bool {
    youjin_target(p.day_master()) == Some(p.get(pos).branch)
}

// ---------------------------------------------------------------------------
// Keyed by the day branch's three-harmony frame; marks year/month/hour
// ---------------------------------------------------------------------------

/// (駅馬, 桃花, 華蓋) branches for a day branch.
pub const fn trine_star_targets(day_branch: Branch) -> (Branch, Branch, Branch) {
    match day_branch.trine() {
        Trine::Water => (Branch::Tora, Branch::Tori, Branch::Tatsu),
        Trine::Fire => (Branch::Saru, Branch::U, Branch::Inu),
        Trine::Metal => (Branch::I, Branch::Uma, Branch::Ushi),
        Trine::Wood => (Branch::Mi, Branch::Ne, Branch::Hitsuji),
    }
}

fn ekiba(p: &FourPillars, pos: PillarPosition) -> bool {
    pos != PillarPosition::Day && p.get(pos).branch == trine_star_targets(p.day.branch).0
}

fn touka(p: &FourPillars, pos: PillarPosition) -> bool {
    pos != PillarPosition::Day && p.get(pos).branch == trine_star_targets(p.day.branch).1
}

fn kagai(p: &FourPillars, pos: PillarPosition) -> bool {
    pos != PillarPosition::Day && p.get(pos).branch == trine_star_targets(p.day.branch).2
}

/// Stars per pillar.
pub type StarMarks = PerPillar<Vec<SpecialStar>>;

/// Apply every rule in `rules` to every pillar.
pub fn apply_star_rules<'a>(
    pillars: &FourPillars,
    rules: impl IntoIterator<Item = &'a StarRule>,
) -> StarMarks {
    let mut marks = StarMarks::default();
    for rule in rules {
        for pos in ALL_POSITIONS {
            if (rule.test)(pillars, pos) {
                marks.get_mut(pos).push(rule.star);
            }
        }
    }
    marks
}

/// All special stars of a chart.
pub fn special_stars(pillars: &FourPillars) -> StarMarks {
    apply_star_rules(pillars, &STAR_RULES)
}
