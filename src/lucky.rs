//! Decorative "lucky" color and number.
//!
//! Both are picked from a plain additive hash of the calendar date, so the
//! same date always yields the same pair. They carry no meaning.

use std::fmt;

use serde::Serialize;

use crate::date::Date;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckyColor {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
    White,
    Gold,
}

impl LuckyColor {
    pub const ALL: [LuckyColor; 10] = {
        use LuckyColor::*;
        [Red, Orange, Yellow, Green, Cyan, Blue, Purple, Pink, White, Gold]
    };

    /// Chinese name, e.g. `红色`.
    pub fn name(self) -> &'static str {
        const NAMES: [&str; 10] = [
            "红色", "橙色", "黄色", "绿色", "青色", "蓝色", "紫色", "粉色", "白色", "金色",
        ];
        NAMES[self as usize]
    }
}

impl fmt::Display for LuckyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct LuckyInfo {
    pub color: LuckyColor,
    /// In `1..=9`.
    pub number: u32,
}

/// `day + month_index + year`, with the month index counted from 0.
pub fn date_hash(date: Date) -> i64 {
    let (year, month, day) = date.gregorian();
    i64::from(day) + i64::from(month - 1) + i64::from(year)
}

/// # Example
///
/// ```
/// use bazi::Date;
/// use bazi::lucky::{lucky_info_of, LuckyColor};
///
/// let info = lucky_info_of(Date::new(2000, 1, 1).unwrap());
/// assert_eq!(LuckyColor::Orange, info.color);
/// assert_eq!(4, info.number);
/// ```
pub fn lucky_info_of(date: Date) -> LuckyInfo {
    let hash = date_hash(date);
    LuckyInfo {
        color: LuckyColor::ALL[hash.rem_euclid(10) as usize],
        number: hash.rem_euclid(9) as u32 + 1,
    }
}
