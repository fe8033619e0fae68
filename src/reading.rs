//! A full BaZi reading for one date-time.

use serde::Serialize;
use tracing::debug;

use crate::chinese::day_master::describe_day_master;
use crate::chinese::element::{ElementTally, tally};
use crate::chinese::{FourPillars, compute_pillars};
use crate::date::DateTime;
use crate::lucky::{LuckyColor, lucky_info_of};
use crate::western::{WesternZodiac, western_zodiac_for_date};

/// Everything derived from one date-time.
///
/// Serializes with the pillars as an array of four two-character strings
/// (year, month, day, hour) and the element tally as a map listing all five
/// elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub pillars: FourPillars,
    pub element_tally: ElementTally,
    /// Description of the day stem.
    pub day_master: &'static str,
    pub western_zodiac: WesternZodiac,
    pub lucky_color: LuckyColor,
    pub lucky_number: u32,
}

/// Computes the four pillars of `dt` and everything derived from them.
///
/// # Example
///
/// ```
/// use bazi::{DateTime, compute_bazi};
/// use bazi::western::WesternZodiac;
///
/// let reading = compute_bazi(DateTime::new(1990, 5, 17, 8).unwrap());
///
/// assert_eq!(["庚午", "辛巳", "壬午", "甲辰"], reading.pillars.texts());
/// assert_eq!(8, reading.element_tally.total());
/// assert!(reading.day_master.starts_with("壬水日元"));
/// assert_eq!(WesternZodiac::Taurus, reading.western_zodiac);
/// ```
pub fn compute_bazi(dt: DateTime) -> Reading {
    let pillars = compute_pillars(dt);
    let lucky = lucky_info_of(dt.date());
    debug!(
        input = %dt,
        year = %pillars.year,
        month = %pillars.month,
        day = %pillars.day,
        hour = %pillars.hour,
        "computed reading"
    );
    Reading {
        pillars,
        element_tally: tally(&pillars),
        day_master: describe_day_master(pillars.day.stem),
        western_zodiac: western_zodiac_for_date(dt.date()),
        lucky_color: lucky.color,
        lucky_number: lucky.number,
    }
}
