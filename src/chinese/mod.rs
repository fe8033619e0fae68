//! Chinese Four Pillars (四柱)
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序以固定日期近似節氣：立春取二月四日，各月節取每月四日。實際節氣時刻每年
//! 前後浮動一至兩日，此處有意從簡，不作天文推算。

use std::fmt as std_fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::date::{Date, DateTime};
use crate::error::Error;

pub mod day_master;
pub mod element;
pub mod fmt;

use element::Element;

/// 近似立春及各月節所在日。
pub const SOLAR_TERM_DAY: i32 = 4;

/// 年柱基準年，1984 年為甲子年。
pub const YEAR_ANCHOR: i32 = 1984;

/// 日柱基準日 2000-01-01（戊午日）的儒略日數。
pub const DAY_ANCHOR_JDN: u32 = 2451545;
const DAY_ANCHOR_STEM: i64 = 4;
const DAY_ANCHOR_BRANCH: i64 = 6;

/// 節月（`1..=12`，以公曆月份標記）對應的月支序號。二月寅、三月卯……十一月亥、
/// 十二月子、一月丑。
const SOLAR_MONTH_BRANCH: [i64; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0];

/// 天干
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = {
        use Stem::*;
        [Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui]
    };

    /// 依序號取天干，序號按 10 取模，負數亦歸入 `0..=9`。
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(10) as usize]
    }
    /// 序號，甲為 0，癸為 9。
    pub fn index(self) -> usize {
        self as usize
    }
    /// 由漢字取天干，非天干則返回 `None`。
    pub fn from_char(c: char) -> Option<Self> {
        fmt::STEMS.iter().position(|&s| s == c).map(|i| Self::ALL[i])
    }
    pub fn symbol(self) -> char {
        fmt::STEMS[self.index()]
    }
    pub fn pinyin(self) -> &'static str {
        fmt::STEM_PINYIN[self.index()]
    }
    /// 天干五行：甲乙木、丙丁火、戊己土、庚辛金、壬癸水。
    pub fn element(self) -> Element {
        Element::ALL[self.index() / 2]
    }
}

/// 地支
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = {
        use Branch::*;
        [Zi, Chou, Yin, Mao, Chen, Si, Wu, Wei, Shen, You, Xu, Hai]
    };

    /// 依序號取地支，序號按 12 取模，負數亦歸入 `0..=11`。
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }
    /// 序號，子為 0，亥為 11。
    pub fn index(self) -> usize {
        self as usize
    }
    /// 由漢字取地支，非地支則返回 `None`。
    pub fn from_char(c: char) -> Option<Self> {
        fmt::BRANCHES.iter().position(|&b| b == c).map(|i| Self::ALL[i])
    }
    pub fn symbol(self) -> char {
        fmt::BRANCHES[self.index()]
    }
    pub fn pinyin(self) -> &'static str {
        fmt::BRANCH_PINYIN[self.index()]
    }
    /// 地支五行。
    pub fn element(self) -> Element {
        use Branch::*;
        use Element::*;
        match self {
            Zi | Hai => Water,
            Chou | Chen | Wei | Xu => Earth,
            Yin | Mao => Wood,
            Si | Wu => Fire,
            Shen | You => Metal,
        }
    }
    /// 該地支所屬生肖。
    pub fn animal(self) -> ZodiacAnimal {
        ZodiacAnimal::ALL[self.index()]
    }
}

/// 一柱，由一天干一地支組成。
///
/// 本程序分別計算干、支，不保證二者陰陽相合（見 [`Pillar::is_traditional`]）。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }
    /// 干支序號轉為柱，`1..=60` 分別為甲子到癸亥，超出範圍者按 60 取模。
    ///
    /// # 用例
    ///
    /// ```
    /// use bazi::chinese::{Branch, Pillar, Stem};
    ///
    /// assert_eq!(Pillar::new(Stem::Wu, Branch::Wu), Pillar::from_sexagenary(55));
    /// ```
    pub fn from_sexagenary(num: i32) -> Self {
        let idx = i64::from(num) - 1;
        Self::new(Stem::from_index(idx), Branch::from_index(idx))
    }
    /// 干支陰陽相合（序號同奇偶）時為 `true`，即六十甲子中實際出現的組合。
    pub fn is_traditional(&self) -> bool {
        self.stem.index() % 2 == self.branch.index() % 2
    }
}

impl std_fmt::Display for Pillar {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl FromStr for Pillar {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (
            chars.next().and_then(Stem::from_char),
            chars.next().and_then(Branch::from_char),
            chars.next(),
        ) {
            (Some(stem), Some(branch), None) => Ok(Self::new(stem, branch)),
            _ => Err(Error::InvalidPillar { text: s.to_owned() }),
        }
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 四柱：年、月、日、時。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// 依年、月、日、時之序。
    pub fn to_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
    pub fn iter(&self) -> impl Iterator<Item = Pillar> {
        self.to_array().into_iter()
    }
    /// 四柱文本，各兩字。
    pub fn texts(&self) -> [String; 4] {
        self.to_array().map(|p| p.to_string())
    }
}

impl std_fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

impl Serialize for FourPillars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

/// 生肖
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ZodiacAnimal {
    pub const ALL: [ZodiacAnimal; 12] = {
        use ZodiacAnimal::*;
        [
            Rat, Ox, Tiger, Rabbit, Dragon, Snake, Horse, Goat, Monkey, Rooster, Dog, Pig,
        ]
    };

    pub fn symbol(self) -> char {
        fmt::ANIMALS[self as usize]
    }
    pub fn english(self) -> &'static str {
        const NAMES: [&str; 12] = [
            "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey",
            "Rooster", "Dog", "Pig",
        ];
        NAMES[self as usize]
    }
}

/// 取得公元年的生肖，公元 4 年為鼠年，按 12 年循環。
///
/// 以公曆年計，不考慮立春。
///
/// # 用例
///
/// ```
/// use bazi::chinese::{animal_for, ZodiacAnimal};
///
/// assert_eq!(ZodiacAnimal::Dragon, animal_for(2024));
/// assert_eq!(ZodiacAnimal::Pig, animal_for(3));
/// ```
pub fn animal_for(year: i32) -> ZodiacAnimal {
    ZodiacAnimal::ALL[(i64::from(year) - 4).rem_euclid(12) as usize]
}

/// 以二月四日近似立春，取得所給日期所在的節年。
pub fn solar_year(date: Date) -> i32 {
    let (year, month, day) = date.gregorian();
    if month < 2 || (month == 2 && day < SOLAR_TERM_DAY) {
        year - 1
    } else {
        year
    }
}

/// 以每月四日近似月節，取得所給日期所在的節月，以公曆月份 `1..=12` 標記。
///
/// 四日前歸入上一月，一月一至三日歸入十二月。
pub fn solar_month(date: Date) -> i32 {
    let (_, month, day) = date.gregorian();
    if day >= SOLAR_TERM_DAY {
        month
    } else if month == 1 {
        12
    } else {
        month - 1
    }
}

/// 年柱。1984 年（甲子）為基準，立春前屬上一年。
///
/// # 用例
///
/// ```
/// use bazi::DateTime;
/// use bazi::chinese::year_pillar;
///
/// let dt = DateTime::new(1984, 2, 4, 0).unwrap();
/// assert_eq!("甲子", year_pillar(dt).to_string());
/// let dt = DateTime::new(1984, 2, 3, 23).unwrap();
/// assert_eq!("癸亥", year_pillar(dt).to_string());
/// ```
pub fn year_pillar(dt: DateTime) -> Pillar {
    let year = solar_year(dt.date());
    let offset = i64::from(year) - i64::from(YEAR_ANCHOR);
    trace!(solar_year = year, offset, "year pillar");
    Pillar::new(Stem::from_index(offset), Branch::from_index(offset))
}

/// 月柱。月支依節月查表，月干依年干以五虎遁推得：甲己之年丙作首，乙庚之歲戊為頭，
/// 丙辛必定尋庚起，丁壬壬位順行流，戊癸何方發，甲寅之上好追求。
///
/// # 用例
///
/// ```
/// use bazi::DateTime;
/// use bazi::chinese::{month_pillar, Stem};
///
/// let dt = DateTime::new(1984, 2, 4, 0).unwrap();
/// assert_eq!("丙寅", month_pillar(dt, Stem::Jia).to_string());
/// ```
pub fn month_pillar(dt: DateTime, year_stem: Stem) -> Pillar {
    let solar_month = solar_month(dt.date());
    let branch = Branch::from_index(SOLAR_MONTH_BRANCH[(solar_month - 1) as usize]);
    let start = (year_stem.index() % 5 * 2 + 2) % 10;
    let offset = (branch.index() as i64 - Branch::Yin.index() as i64).rem_euclid(12);
    trace!(solar_month, ?branch, offset, "month pillar");
    Pillar::new(Stem::from_index(start as i64 + offset), branch)
}

/// 同 [`month_pillar`]，但年干取自年柱文本首字，無法識別時作甲。
pub fn month_pillar_from_text(dt: DateTime, year_pillar: &str) -> Pillar {
    month_pillar(dt, stem_or_jia(year_pillar))
}

/// 日柱。以 2000-01-01 零時（戊午日）為基準，按經過的整日數推算，不足一日者向前取整。
///
/// # 用例
///
/// ```
/// use bazi::DateTime;
/// use bazi::chinese::day_pillar;
///
/// let dt = DateTime::new(2000, 1, 1, 0).unwrap();
/// assert_eq!("戊午", day_pillar(dt).to_string());
/// ```
pub fn day_pillar(dt: DateTime) -> Pillar {
    let anchor = DateTime::midnight(Date::from_jdn(DAY_ANCHOR_JDN));
    let days = dt.hours_since(anchor).div_euclid(24);
    trace!(days, "day pillar");
    Pillar::new(
        Stem::from_index(DAY_ANCHOR_STEM + days),
        Branch::from_index(DAY_ANCHOR_BRANCH + days),
    )
}

/// 時柱。時支每兩小時一支，子時為 23 時至次日 1 時前；時干依日干以五鼠遁推得：
/// 甲己還加甲，乙庚丙作初，丙辛從戊起，丁壬庚子居，戊癸何方發，壬子是真途。
///
/// 23 時仍用當日日干。
///
/// # 用例
///
/// ```
/// use bazi::DateTime;
/// use bazi::chinese::{hour_pillar, Stem};
///
/// let dt = DateTime::new(2000, 1, 1, 23).unwrap();
/// assert_eq!("壬子", hour_pillar(dt, Stem::Wu).to_string());
/// ```
pub fn hour_pillar(dt: DateTime, day_stem: Stem) -> Pillar {
    let branch = Branch::from_index(i64::from((dt.hour() + 1) / 2));
    let start = day_stem.index() % 5 * 2 % 10;
    trace!(hour = dt.hour(), ?branch, "hour pillar");
    Pillar::new(Stem::from_index((start + branch.index()) as i64), branch)
}

/// 同 [`hour_pillar`]，但日干取自日柱文本首字，無法識別時作甲。
pub fn hour_pillar_from_text(dt: DateTime, day_pillar: &str) -> Pillar {
    hour_pillar(dt, stem_or_jia(day_pillar))
}

fn stem_or_jia(pillar: &str) -> Stem {
    pillar
        .chars()
        .next()
        .and_then(Stem::from_char)
        .unwrap_or(Stem::Jia)
}

/// 排四柱。
///
/// # 用例
///
/// ```
/// use bazi::DateTime;
/// use bazi::chinese::compute_pillars;
///
/// let dt = DateTime::new(2000, 1, 1, 0).unwrap();
/// assert_eq!(["己卯", "丙子", "戊午", "壬子"], compute_pillars(dt).texts());
/// ```
pub fn compute_pillars(dt: DateTime) -> FourPillars {
    let year = year_pillar(dt);
    let month = month_pillar(dt, year.stem);
    let day = day_pillar(dt);
    let hour = hour_pillar(dt, day.stem);
    FourPillars {
        year,
        month,
        day,
        hour,
    }
}
