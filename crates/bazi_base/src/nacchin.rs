//! Nacchin (納音): sound-element label per pair of sexagenary indices.
//!
//! The 60-cycle splits into 30 consecutive pairs (甲子乙丑, 丙寅丁卯, ...);
//! both members of a pair share one label. The last character of every
//! label is its element.

use serde::{Serialize, Serializer};

use crate::element::Element;
use crate::pillar::{Pillar, Sexagenary};

pub(crate) const NACCHIN_TABLE: [(&str, Element); 30] = {
    use Element::*;
    [
        ("海中金", Metal),
        ("炉中火", Fire),
        ("大林木", Wood),
        ("路傍土", Earth),
        ("剣鋒金", Metal),
        ("山頭火", Fire),
        ("澗下水", Water),
        ("城頭土", Earth),
        ("白鑞金", Metal),
        ("楊柳木", Wood),
        ("泉中水", Water),
        ("屋上土", Earth),
        ("霹靂火", Fire),
        ("松柏木", Wood),
        ("長流水", Water),
        ("砂中金", Metal),
        ("山下火", Fire),
        ("平地木", Wood),
        ("壁上土", Earth),
        ("金箔金", Metal),
        ("覆燈火", Fire),
        ("天河水", Water),
        ("大駅土", Earth),
        ("釵釧金", Metal),
        ("桑柘木", Wood),
        ("大渓水", Water),
        ("沙中土", Earth),
        ("天上火", Fire),
        ("石榴木", Wood),
        ("大海水", Water),
    ]
};

/// One of the 30 nacchin labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nacchin(u8);

impl Nacchin {
    pub const fn of(s: Sexagenary) -> Self {
        Self(s.index() / 2)
    }

    /// 0-based label index (海中金=0 .. 大海水=29).
    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn name(self) -> &'static str {
        NACCHIN_TABLE[self.0 as usize].0
    }

    pub const fn element(self) -> Element {
        NACCHIN_TABLE[self.0 as usize].1
    }

    /// All 30 labels in cycle order.
    pub fn all() -> impl Iterator<Item = Nacchin> {
        (0..NACCHIN_TABLE.len() as u8).map(Self)
    }
}

/// Nacchin of a pillar.
pub const fn nacchin(pillar: Pillar) -> Nacchin {
    Nacchin::of(pillar.sexagenary())
}

impl Serialize for Nacchin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn of(name: &str) -> Nacchin {
        nacchin(name.parse().unwrap())
    }

    #[test]
    fn first_pair_shares_label() {
        assert_eq!(of("甲子").name(), "海中金");
        assert_eq!(of("乙丑").name(), "海中金");
        assert_eq!(of("丙寅").name(), "炉中火");
    }

    #[test]
    fn last_pair() {
        assert_eq!(of("壬戌").name(), "大海水");
        assert_eq!(of("癸亥").element(), Element::Water);
    }

    #[test]
    fn adjacent_even_odd_pairs_match() {
        for i in (0..60).step_by(2) {
            let a = Nacchin::of(Sexagenary::from_cycle(i));
            let b = Nacchin::of(Sexagenary::from_cycle(i + 1));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn thirty_labels() {
        assert_eq!(Nacchin::all().count(), 30);
    }

    #[test]
    fn serializes_as_name() {
        assert_eq!(serde_json::to_string(&of("戊午")).unwrap(), "\"天上火\"");
    }
}
