//! 五行及四柱五行統計

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Branch, FourPillars, Stem};

/// 五行
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// 依相生之序：木、火、土、金、水。
    pub const ALL: [Element; 5] = {
        use Element::*;
        [Wood, Fire, Earth, Metal, Water]
    };

    pub fn symbol(self) -> char {
        ['木', '火', '土', '金', '水'][self as usize]
    }
    pub fn english(self) -> &'static str {
        ["Wood", "Fire", "Earth", "Metal", "Water"][self as usize]
    }
}

/// 取得干支字的五行，非干支字返回 `None`。
///
/// # 用例
///
/// ```
/// use bazi::chinese::element::{element_of, Element};
///
/// assert_eq!(Some(Element::Metal), element_of('庚'));
/// assert_eq!(Some(Element::Earth), element_of('戌'));
/// assert_eq!(None, element_of('木'));
/// ```
pub fn element_of(c: char) -> Option<Element> {
    Stem::from_char(c)
        .map(Stem::element)
        .or_else(|| Branch::from_char(c).map(Branch::element))
}

/// 五行計數，五行俱在（含計數為零者）。
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ElementTally {
    counts: BTreeMap<Element, u32>,
}

impl Default for ElementTally {
    fn default() -> Self {
        Self {
            counts: Element::ALL.into_iter().map(|e| (e, 0)).collect(),
        }
    }
}

impl ElementTally {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add(&mut self, element: Element) {
        *self.counts.entry(element).or_insert(0) += 1;
    }
    pub fn get(&self, element: Element) -> u32 {
        self.counts.get(&element).copied().unwrap_or(0)
    }
    /// 依 [`Element::ALL`] 之序。
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        self.counts.iter().map(|(&e, &n)| (e, n))
    }
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
    /// 四柱中未出現的五行。
    pub fn missing(&self) -> Vec<Element> {
        self.iter().filter(|&(_, n)| n == 0).map(|(e, _)| e).collect()
    }
}

/// 統計四柱八字的五行，總數恆為 8。
pub fn tally(pillars: &FourPillars) -> ElementTally {
    let mut counts = ElementTally::new();
    for pillar in pillars.iter() {
        counts.add(pillar.stem.element());
        counts.add(pillar.branch.element());
    }
    counts
}

/// 統計柱文本的五行，每柱只看首兩字；非干支字不計。
///
/// # 用例
///
/// ```
/// use bazi::chinese::element::{tally_texts, Element};
///
/// let counts = tally_texts(&["甲子", "丙寅", "??"]);
/// assert_eq!(2, counts.get(Element::Wood));
/// assert_eq!(4, counts.total());
/// ```
pub fn tally_texts<S: AsRef<str>>(pillars: &[S]) -> ElementTally {
    let mut counts = ElementTally::new();
    for element in pillars
        .iter()
        .flat_map(|p| p.as_ref().chars().take(2))
        .filter_map(element_of)
    {
        counts.add(element);
    }
    counts
}
