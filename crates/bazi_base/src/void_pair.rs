//! Void pair (空亡): the two branches left over by a 10-day block.
//!
//! Ten stems against twelve branches leave two branches unpaired in each
//! block of ten sexagenary indices (旬). The block is chosen by the day
//! pillar alone.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::pillar::{Pillar, Sexagenary};

/// Void branches per block, block 0 = 甲子旬.
pub(crate) const VOID_TABLE: [(Branch, Branch); 6] = [
    (Branch::Inu, Branch::I),
    (Branch::Saru, Branch::Tori),
    (Branch::Uma, Branch::Hitsuji),
    (Branch::Tatsu, Branch::Mi),
    (Branch::Tora, Branch::U),
    (Branch::Ne, Branch::Ushi),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoidPair {
    pub first: Branch,
    pub second: Branch,
}

impl VoidPair {
    /// Void pair of the block containing `day`.
    pub const fn for_day(day: Sexagenary) -> Self {
        let (first, second) = VOID_TABLE[day.decade() as usize];
        Self { first, second }
    }

    pub fn contains(self, branch: Branch) -> bool {
        branch == self.first || branch == self.second
    }

    /// Two-character label, e.g. "戌亥".
    pub fn name(self) -> String {
        format!("{}{}", self.first, self.second)
    }

    /// The six pairs in block order.
    pub fn all() -> impl Iterator<Item = VoidPair> {
        VOID_TABLE
            .into_iter()
            .map(|(first, second)| VoidPair { first, second })
    }
}

/// Void pair for a day pillar.
pub const fn void_pair(day_pillar: Pillar) -> VoidPair {
    VoidPair::for_day(day_pillar.sexagenary())
}

impl Display for VoidPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl Serialize for VoidPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinoe_ne_block() {
        assert_eq!(void_pair("甲子".parse().unwrap()).name(), "戌亥");
        assert_eq!(void_pair("癸酉".parse().unwrap()).name(), "戌亥");
    }

    #[test]
    fn last_block() {
        assert_eq!(void_pair("甲寅".parse().unwrap()).name(), "子丑");
        assert_eq!(void_pair("癸亥".parse().unwrap()).name(), "子丑");
    }

    #[test]
    fn depends_only_on_block() {
        for i in 0..60 {
            let s = Sexagenary::from_cycle(i);
            let block_start = Sexagenary::from_cycle(i - i % 10);
            assert_eq!(VoidPair::for_day(s), VoidPair::for_day(block_start));
        }
    }

    #[test]
    fn block_branches_are_not_void() {
        for i in 0..60 {
            let s = Sexagenary::from_cycle(i);
            assert!(!VoidPair::for_day(s).contains(s.branch()), "index {i}");
        }
    }

    #[test]
    fn six_distinct_pairs() {
        let names: Vec<String> = VoidPair::all().map(|v| v.name()).collect();
        assert_eq!(names, ["戌亥", "申酉", "午未", "辰巳", "寅卯", "子丑"]);
    }
}
