//! Sexagenary cycle (六十干支), pillars, and the four-pillar frame.
//!
//! A sexagenary index `i` in 0..60 names the pair (stem `i mod 10`,
//! branch `i mod 12`). Only stem/branch pairs of equal parity occur, so the
//! cycle has 60 members rather than 120.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::branch::Branch;
use crate::error::BaziError;
use crate::stem::Stem;

/// Index into the 60-term stem/branch cycle (甲子 = 0 .. 癸亥 = 59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Sexagenary(u8);

impl TryFrom<u8> for Sexagenary {
    type Error = BaziError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Sexagenary> for u8 {
    fn from(s: Sexagenary) -> Self {
        s.0
    }
}

impl Sexagenary {
    pub fn new(index: u8) -> Result<Self, BaziError> {
        if index < 60 {
            Ok(Self(index))
        } else {
            Err(BaziError::InvalidSymbol(format!("sexagenary index {index} (0-59)")))
        }
    }

    /// Index at `n mod 60`.
    pub const fn from_cycle(n: i64) -> Self {
        Self(n.rem_euclid(60) as u8)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn stem(self) -> Stem {
        Stem::from_cycle(self.0 as i64)
    }

    pub const fn branch(self) -> Branch {
        Branch::from_cycle(self.0 as i64)
    }

    /// Which 10-day block (旬) the index falls in, 0..6.
    pub const fn decade(self) -> u8 {
        self.0 / 10
    }

    pub const fn advance(self, steps: i64) -> Self {
        Self::from_cycle(self.0 as i64 + steps)
    }
}

/// A stem/branch pair. Serializes as its two-character name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Combine a stem and branch. Fails when their parities differ
    /// (e.g. 甲丑), since such pairs are not part of the cycle.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, BaziError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(BaziError::InvalidSymbol(format!(
                "{stem}{branch} is not a sexagenary pair"
            )));
        }
        Ok(Self { stem, branch })
    }

    pub const fn from_sexagenary(s: Sexagenary) -> Self {
        Self {
            stem: s.stem(),
            branch: s.branch(),
        }
    }

    /// Position in the 60-cycle, solved from the stem and branch indices.
    pub const fn sexagenary(self) -> Sexagenary {
        // i ≡ s (mod 10), i ≡ b (mod 12)  ⇒  i = 6s − 5b (mod 60)
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        Sexagenary::from_cycle(6 * s - 5 * b)
    }

    /// Two-character name, e.g. "甲子".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }
}

impl From<Sexagenary> for Pillar {
    fn from(s: Sexagenary) -> Self {
        Self::from_sexagenary(s)
    }
}

impl FromStr for Pillar {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => Self::new(Stem::from_char(a)?, Branch::from_char(b)?),
            _ => Err(BaziError::InvalidSymbol(format!(
                "expected two characters (stem, branch), got {s:?}"
            ))),
        }
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> Deserialize<'de> for Pillar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Which of the four pillars a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// Positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// Japanese label (年柱, 月柱, 日柱, 時柱).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "時柱",
        }
    }
}

/// One value per pillar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PerPillar<T> {
    pub year: T,
    pub month: T,
    pub day: T,
    pub hour: T,
}

impl<T> PerPillar<T> {
    pub const fn new(year: T, month: T, day: T, hour: T) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    pub fn get(&self, pos: PillarPosition) -> &T {
        match pos {
            PillarPosition::Year => &self.year,
            PillarPosition::Month => &self.month,
            PillarPosition::Day => &self.day,
            PillarPosition::Hour => &self.hour,
        }
    }

    pub fn get_mut(&mut self, pos: PillarPosition) -> &mut T {
        match pos {
            PillarPosition::Year => &mut self.year,
            PillarPosition::Month => &mut self.month,
            PillarPosition::Day => &mut self.day,
            PillarPosition::Hour => &mut self.hour,
        }
    }

    /// Apply `f` to each value, passing its position.
    pub fn map<U>(&self, mut f: impl FnMut(PillarPosition, &T) -> U) -> PerPillar<U> {
        PerPillar {
            year: f(PillarPosition::Year, &self.year),
            month: f(PillarPosition::Month, &self.month),
            day: f(PillarPosition::Day, &self.day),
            hour: f(PillarPosition::Hour, &self.hour),
        }
    }

    /// Values in chart order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, &T)> {
        ALL_POSITIONS.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// The four pillars of a chart.
pub type FourPillars = PerPillar<Pillar>;

impl FourPillars {
    /// The Day Master (日主): stem of the day pillar.
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sexagenary_bounds() {
        assert!(Sexagenary::new(59).is_ok());
        assert!(matches!(Sexagenary::new(60), Err(BaziError::InvalidSymbol(_))));
    }

    #[test]
    fn serde_keeps_index_in_range() {
        let s: Sexagenary = serde_json::from_str("59").unwrap();
        assert_eq!(s.index(), 59);
        assert_eq!(serde_json::to_string(&s).unwrap(), "59");
        for bad in ["60", "200"] {
            let err = serde_json::from_str::<Sexagenary>(bad).unwrap_err();
            assert!(err.to_string().contains("invalid symbol"), "{bad}: {err}");
        }
        assert!(matches!(Sexagenary::try_from(60), Err(BaziError::InvalidSymbol(_))));
    }

    #[test]
    fn first_and_last() {
        let first = Pillar::from_sexagenary(Sexagenary::from_cycle(0));
        assert_eq!(first.name(), "甲子");
        let last = Pillar::from_sexagenary(Sexagenary::from_cycle(59));
        assert_eq!(last.name(), "癸亥");
    }

    #[test]
    fn pillar_index_roundtrip() {
        for i in 0..60 {
            let s = Sexagenary::new(i).unwrap();
            assert_eq!(Pillar::from(s).sexagenary(), s);
        }
    }

    #[test]
    fn all_sixty_distinct() {
        let mut names: Vec<String> = (0..60)
            .map(|i| Pillar::from(Sexagenary::from_cycle(i)).name())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 60);
    }

    #[test]
    fn known_indices() {
        assert_eq!("戊午".parse::<Pillar>().unwrap().sexagenary().index(), 54);
        assert_eq!("庚辰".parse::<Pillar>().unwrap().sexagenary().index(), 16);
        assert_eq!("甲辰".parse::<Pillar>().unwrap().sexagenary().index(), 40);
    }

    #[test]
    fn mismatched_parity_rejected() {
        assert!(Pillar::new(Stem::Kinoe, Branch::Ushi).is_err());
        assert!("甲丑".parse::<Pillar>().is_err());
        assert!("甲".parse::<Pillar>().is_err());
        assert!("甲子丑".parse::<Pillar>().is_err());
    }

    #[test]
    fn decade_blocks() {
        assert_eq!(Sexagenary::from_cycle(9).decade(), 0);
        assert_eq!(Sexagenary::from_cycle(10).decade(), 1);
        assert_eq!(Sexagenary::from_cycle(59).decade(), 5);
    }

    #[test]
    fn advance_wraps() {
        assert_eq!(Sexagenary::from_cycle(59).advance(1).index(), 0);
        assert_eq!(Sexagenary::from_cycle(0).advance(-1).index(), 59);
    }

    #[test]
    fn serde_as_name() {
        let p: Pillar = "丙午".parse().unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"丙午\"");
        assert_eq!(serde_json::from_str::<Pillar>(&json).unwrap(), p);
        assert!(serde_json::from_str::<Pillar>("\"甲丑\"").is_err());
    }

    #[test]
    fn per_pillar_access() {
        let mut p = PerPillar::new(1, 2, 3, 4);
        assert_eq!(*p.get(PillarPosition::Day), 3);
        *p.get_mut(PillarPosition::Hour) = 40;
        let doubled = p.map(|_, v| v * 2);
        assert_eq!(doubled, PerPillar::new(2, 4, 6, 80));
        let order: Vec<_> = p.iter().map(|(pos, _)| pos).collect();
        assert_eq!(order, ALL_POSITIONS);
    }
}
