//! Chinese Four Pillars (BaZi, 八字) designations for a date and hour.
//!
//! The year, month, day and hour pillars are computed with simple modular
//! arithmetic over the ten stems and twelve branches. Solar terms are
//! approximated by fixed days (February 4 starts the year, the 4th of each
//! month starts its solar month), so dates within a day or two of a real
//! solar term may differ from an almanac.
//!
//! Alongside the pillars, a [`Reading`] carries the five-element tally, a
//! short day-master description, the Western sun sign, and a decorative lucky
//! color and number.
//!
//! # Examples
//!
//! Basic usage with [`DateTime`]:
//!
//! ```
//! use bazi::{DateTime, compute_bazi};
//!
//! let dt = DateTime::new(2000, 1, 1, 0).unwrap();
//! let reading = compute_bazi(dt);
//!
//! assert_eq!("己卯 丙子 戊午 壬子", reading.pillars.to_string());
//! ```
//!
//! Individual pillars:
//!
//! ```
//! use bazi::DateTime;
//! use bazi::chinese::{day_pillar, hour_pillar, Branch};
//!
//! let dt = DateTime::new(2000, 1, 1, 23).unwrap();
//! let day = day_pillar(dt);
//!
//! assert_eq!("戊午", day.to_string());
//! assert_eq!(Branch::Zi, hour_pillar(dt, day.stem).branch);
//! ```
//!
//! Time zones are not handled: the wall-clock values given are used as-is.

pub mod chinese;
pub mod date;
pub mod error;
pub mod lucky;
pub mod reading;
pub mod western;

pub use date::{Date, DateTime, YearType};
pub use error::Error;
pub use reading::{Reading, compute_bazi};
