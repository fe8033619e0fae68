//! Western sun signs by calendar date.

use std::fmt;

use serde::Serialize;

use crate::date::Date;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WesternZodiac {
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
}

impl WesternZodiac {
    /// Chinese name, e.g. `水瓶座`.
    pub fn name(self) -> &'static str {
        const NAMES: [&str; 12] = [
            "水瓶座", "双鱼座", "白羊座", "金牛座", "双子座", "巨蟹座", "狮子座", "处女座",
            "天秤座", "天蝎座", "射手座", "摩羯座",
        ];
        NAMES[self as usize]
    }
    pub fn english(self) -> &'static str {
        const NAMES: [&str; 12] = [
            "Aquarius",
            "Pisces",
            "Aries",
            "Taurus",
            "Gemini",
            "Cancer",
            "Leo",
            "Virgo",
            "Libra",
            "Scorpio",
            "Sagittarius",
            "Capricorn",
        ];
        NAMES[self as usize]
    }
}

impl fmt::Display for WesternZodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english())
    }
}

/// `(sign, (first month, first day), (last month, last day))`, tested in
/// order. Capricorn, which spans the year boundary, is the fallback.
const RANGES: [(WesternZodiac, (i32, i32), (i32, i32)); 11] = {
    use WesternZodiac::*;
    [
        (Aquarius, (1, 20), (2, 18)),
        (Pisces, (2, 19), (3, 20)),
        (Aries, (3, 21), (4, 19)),
        (Taurus, (4, 20), (5, 20)),
        (Gemini, (5, 21), (6, 21)),
        (Cancer, (6, 22), (7, 22)),
        (Leo, (7, 23), (8, 22)),
        (Virgo, (8, 23), (9, 22)),
        (Libra, (9, 23), (10, 23)),
        (Scorpio, (10, 24), (11, 22)),
        (Sagittarius, (11, 23), (12, 21)),
    ]
};

/// Returns the sun sign for a month (`1..=12`) and day of month.
///
/// Out-of-range input is not rejected; anything matching no range is
/// Capricorn.
///
/// # Example
///
/// ```
/// use bazi::western::{western_zodiac_of, WesternZodiac};
///
/// assert_eq!(WesternZodiac::Aquarius, western_zodiac_of(2, 18));
/// assert_eq!(WesternZodiac::Pisces, western_zodiac_of(2, 19));
/// ```
pub fn western_zodiac_of(month: i32, day: i32) -> WesternZodiac {
    RANGES
        .iter()
        .find(|&&(_, (m1, d1), (m2, d2))| {
            (month == m1 && day >= d1) || (month == m2 && day <= d2)
        })
        .map_or(WesternZodiac::Capricorn, |&(sign, _, _)| sign)
}

/// Shorthand for [`western_zodiac_of`] on a [`Date`].
pub fn western_zodiac_for_date(date: Date) -> WesternZodiac {
    let (_, month, day) = date.gregorian();
    western_zodiac_of(month, day)
}
