//! Five-element balance of a chart.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use bazi_base::{ALL_ELEMENTS, Element, FourPillars};

/// Weight per element. Serializes as a map keyed by element name (木火土金水).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementTally {
    weights: [f64; 5],
}

impl ElementTally {
    pub fn get(&self, element: Element) -> f64 {
        self.weights[element.index() as usize]
    }

    pub fn add(&mut self, element: Element, weight: f64) {
        self.weights[element.index() as usize] += weight;
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Elements with their weights in 木火土金水 order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.get(e)))
    }

    /// The heaviest element; ties go to the earlier one in 木火土金水 order.
    /// `None` for an empty tally.
    pub fn dominant(&self) -> Option<Element> {
        let mut best: Option<(Element, f64)> = None;
        for (e, w) in self.iter() {
            if w > best.map_or(0.0, |(_, b)| b) {
                best = Some((e, w));
            }
        }
        best.map(|(e, _)| e)
    }

    /// Elements with no weight at all.
    pub fn lacking(&self) -> Vec<Element> {
        self.iter().filter(|&(_, w)| w == 0.0).map(|(e, _)| e).collect()
    }
}

impl Serialize for ElementTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_ELEMENTS.len()))?;
        for (e, w) in self.iter() {
            map.serialize_entry(e.name(), &w)?;
        }
        map.end()
    }
}

/// Visible stems and branches count 1.0 each; every hidden stem adds
/// `hidden_weight` to its element.
pub fn element_tally(pillars: &FourPillars, hidden_weight: f64) -> ElementTally {
    let mut tally = surface_tally(pillars);
    for (_, p) in pillars.iter() {
        for s in p.branch.hidden_stems() {
            tally.add(s.element(), hidden_weight);
        }
    }
    tally
}

/// Only the eight visible symbols, 1.0 each.
pub fn surface_tally(pillars: &FourPillars) -> ElementTally {
    let mut tally = ElementTally::default();
    for (_, p) in pillars.iter() {
        tally.add(p.stem.element(), 1.0);
        tally.add(p.branch.element(), 1.0);
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::Pillar;

    fn pillars(names: [&str; 4]) -> FourPillars {
        let [y, m, d, h] = names.map(|n| n.parse::<Pillar>().unwrap());
        FourPillars::new(y, m, d, h)
    }

    #[test]
    fn surface_counts_eight() {
        let t = surface_tally(&pillars(["己巳", "丁丑", "庚辰", "庚辰"]));
        assert_eq!(t.total(), 8.0);
        // 己 丑 辰 辰 earth, 巳 丁 fire, 庚 庚 metal
        assert_eq!(t.get(Element::Earth), 4.0);
        assert_eq!(t.get(Element::Fire), 2.0);
        assert_eq!(t.get(Element::Metal), 2.0);
        assert_eq!(t.lacking(), vec![Element::Wood, Element::Water]);
        assert_eq!(t.dominant(), Some(Element::Earth));
    }

    #[test]
    fn hidden_weight_added() {
        let p = pillars(["己巳", "丁丑", "庚辰", "庚辰"]);
        // 巳 3 + 丑 3 + 辰 3 + 辰 3
        let t = element_tally(&p, 0.5);
        assert_eq!(t.total(), 8.0 + 0.5 * 12.0);
        assert_eq!(t.get(Element::Wood), 1.0);
        assert_eq!(element_tally(&p, 0.0), surface_tally(&p));
    }

    #[test]
    fn dominant_tie_breaks_in_cycle_order() {
        let mut t = ElementTally::default();
        assert_eq!(t.dominant(), None);
        t.add(Element::Water, 2.0);
        t.add(Element::Fire, 2.0);
        assert_eq!(t.dominant(), Some(Element::Fire));
    }

    #[test]
    fn serializes_as_named_map() {
        let t = surface_tally(&pillars(["甲子", "甲子", "甲子", "甲子"]));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"木":4.0,"火":0.0,"土":0.0,"金":0.0,"水":4.0}"#);
    }
}
