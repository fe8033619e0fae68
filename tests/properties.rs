//! Property tests over the public API.

use bazi::chinese::element::tally;
use bazi::chinese::{
    Stem, animal_for, compute_pillars, day_pillar, hour_pillar, month_pillar, solar_year,
    year_pillar,
};
use bazi::lucky::lucky_info_of;
use bazi::{Date, DateTime};
use proptest::prelude::*;

/// Julian day numbers from -4713-11-24 up to 2400-12-31.
fn any_date() -> impl Strategy<Value = Date> {
    (0u32..=2598007).prop_map(Date::from_jdn)
}

fn any_date_time() -> impl Strategy<Value = DateTime> {
    (any_date(), 0u32..24).prop_map(|(date, hour)| DateTime::at(date, hour).unwrap())
}

proptest! {
    #[test]
    fn animal_repeats_every_twelve_years(year in -100_000i32..100_000) {
        prop_assert_eq!(animal_for(year), animal_for(year + 12));
    }

    #[test]
    fn month_stem_follows_year_stem(dt in any_date_time()) {
        let year = year_pillar(dt);
        let month = month_pillar(dt, year.stem);
        let offset = (month.branch.index() + 12 - 2) % 12;
        prop_assert_eq!((year.stem.index() % 5 * 2 + 2 + offset) % 10, month.stem.index());
    }

    #[test]
    fn year_pillar_counts_from_1984(dt in any_date_time()) {
        let year = year_pillar(dt);
        let offset = i64::from(solar_year(dt.date())) - 1984;
        prop_assert_eq!(offset.rem_euclid(10) as usize, year.stem.index());
        prop_assert_eq!(offset.rem_euclid(12) as usize, year.branch.index());
    }

    #[test]
    fn pillars_pair_stems_and_branches_of_same_parity(dt in any_date_time()) {
        for pillar in compute_pillars(dt).iter() {
            prop_assert!(pillar.is_traditional(), "{} {}", dt, pillar);
        }
    }

    #[test]
    fn day_pillar_repeats_every_sixty_days(dt in any_date_time()) {
        let later = DateTime::at(dt.date() + 60, dt.hour()).unwrap();
        prop_assert_eq!(day_pillar(dt), day_pillar(later));
    }

    #[test]
    fn consecutive_days_advance_one_step(dt in any_date_time()) {
        let today = day_pillar(dt);
        let tomorrow = day_pillar(DateTime::at(dt.date() + 1, dt.hour()).unwrap());
        prop_assert_eq!((today.stem.index() + 1) % 10, tomorrow.stem.index());
        prop_assert_eq!((today.branch.index() + 1) % 12, tomorrow.branch.index());
    }

    #[test]
    fn element_tally_sums_to_eight(dt in any_date_time()) {
        prop_assert_eq!(8, tally(&compute_pillars(dt)).total());
    }

    #[test]
    fn hour_branch_depends_only_on_hour(dt in any_date_time(), day in 0i64..10) {
        let hour = hour_pillar(dt, Stem::from_index(day));
        prop_assert_eq!(((dt.hour() + 1) / 2 % 12) as usize, hour.branch.index());
        let other = DateTime::at(dt.date() + 1000, dt.hour()).unwrap();
        prop_assert_eq!(hour, hour_pillar(other, Stem::from_index(day)));
    }

    #[test]
    fn lucky_info_is_deterministic(date in any_date()) {
        let first = lucky_info_of(date);
        prop_assert_eq!(first, lucky_info_of(date));
        prop_assert!((1..=9).contains(&first.number));
    }
}
