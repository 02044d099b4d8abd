//! Eligibility scan: which calendar dates may an auction of a given type
//! start on, over a forward horizon.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use gavel_core::{AuctionConfig, AuctionType, Availability, ItemContext};

use crate::context::CalendarView;
use crate::window::is_weekend;

/// Forward horizon of the eligibility scan, in days.
pub const DEFAULT_HORIZON_DAYS: i64 = 365;

/// Earliest permissible start date for weekday-bound types: tomorrow, or
/// the following Monday when tomorrow falls on a weekend.
pub fn next_valid_start(today: NaiveDate) -> NaiveDate {
    let mut day = today + Duration::days(1);
    while is_weekend(day) {
        day += Duration::days(1);
    }
    day
}

/// Scan `[today + 1, today + horizon_days]` and classify every date for
/// `auction_type`.
///
/// Disqualifying conditions are independent and non-exclusive: a date is
/// disabled as soon as any rule disables it. A type absent from
/// `config.enabled_types` disables the whole horizon; like an exhausted
/// New Arrival window, that is a "no slot available" outcome, not an error.
pub fn eligible_dates(
    auction_type: AuctionType,
    item: &ItemContext,
    config: &AuctionConfig,
    calendar: &CalendarView,
    today: NaiveDate,
    horizon_days: i64,
) -> Availability {
    let horizon_start = today + Duration::days(1);
    let horizon_end = today + Duration::days(horizon_days);
    let floor = next_valid_start(today);
    let type_enabled = config.is_enabled(auction_type);

    let mut disabled = BTreeSet::new();
    let mut first_available = None;

    let mut day = horizon_start;
    while day <= horizon_end {
        if type_enabled && date_enabled(auction_type, day, item, calendar, floor) {
            first_available.get_or_insert(day);
        } else {
            disabled.insert(day);
        }
        day += Duration::days(1);
    }

    Availability {
        first_available,
        disabled,
        horizon_start,
        horizon_end,
    }
}

fn date_enabled(
    auction_type: AuctionType,
    day: NaiveDate,
    item: &ItemContext,
    calendar: &CalendarView,
    floor: NaiveDate,
) -> bool {
    if auction_type.excludes_weekends() && is_weekend(day) {
        return false;
    }

    match auction_type {
        AuctionType::Regular | AuctionType::DealersOnly => {
            day >= floor && !calendar.is_holiday(day)
        }
        AuctionType::NewArrival => {
            day >= floor && day < item.new_arrival_cutoff() && !calendar.is_holiday(day)
        }
        AuctionType::Clearance => {
            day >= floor && day >= item.clearance_floor() && !calendar.is_holiday(day)
        }
        AuctionType::BlackFriday => day == calendar.black_friday(),
        AuctionType::Holiday => calendar.is_holiday(day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Utc, Weekday};
    use gavel_core::Holiday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item_created(y: i32, m: u32, d: u32) -> ItemContext {
        ItemContext::new(Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap())
    }

    fn config() -> AuctionConfig {
        AuctionConfig {
            start_time: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            duration_hours: 27,
            holiday_end_time: chrono::NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            holiday_duration_hours: 24,
            enabled_types: AuctionType::ALL.into_iter().collect(),
        }
    }

    fn view(holidays: Vec<Holiday>) -> CalendarView {
        CalendarView::new(holidays, date(2024, 11, 29))
    }

    #[test]
    fn next_valid_start_skips_weekends() {
        // Jun 5, 2024 is a Wednesday; Jun 7 a Friday.
        assert_eq!(next_valid_start(date(2024, 6, 5)), date(2024, 6, 6));
        assert_eq!(next_valid_start(date(2024, 6, 7)), date(2024, 6, 10));
        assert_eq!(next_valid_start(date(2024, 6, 8)), date(2024, 6, 10));
    }

    #[test]
    fn regular_disables_weekends_and_holidays() {
        let calendar = view(vec![Holiday::new(date(2024, 6, 17), "Youth Day")]);
        let item = item_created(2024, 1, 1);
        let availability = eligible_dates(
            AuctionType::Regular,
            &item,
            &config(),
            &calendar,
            date(2024, 6, 5),
            DEFAULT_HORIZON_DAYS,
        );

        assert_eq!(availability.first_available, Some(date(2024, 6, 6)));
        assert!(!availability.is_eligible(date(2024, 6, 8)), "Saturday");
        assert!(!availability.is_eligible(date(2024, 6, 9)), "Sunday");
        assert!(!availability.is_eligible(date(2024, 6, 17)), "holiday");
        assert!(availability.is_eligible(date(2024, 6, 18)));
    }

    #[test]
    fn regular_first_available_waits_out_the_weekend() {
        let item = item_created(2024, 1, 1);
        let availability = eligible_dates(
            AuctionType::Regular,
            &item,
            &config(),
            &view(vec![]),
            date(2024, 6, 7),
            DEFAULT_HORIZON_DAYS,
        );
        assert_eq!(availability.first_available, Some(date(2024, 6, 10)));
    }

    #[test]
    fn new_arrival_window_is_thirty_days_from_creation_inclusive() {
        let item = item_created(2024, 1, 1);
        let availability = eligible_dates(
            AuctionType::NewArrival,
            &item,
            &config(),
            &view(vec![]),
            date(2024, 1, 10),
            DEFAULT_HORIZON_DAYS,
        );

        // Jan 11, 2024 is a Thursday.
        assert_eq!(availability.first_available, Some(date(2024, 1, 11)));
        // Jan 30 (a Tuesday) is the last date inside the window.
        assert!(availability.is_eligible(date(2024, 1, 30)));
        // Everything from creation + 30 days on is disabled.
        assert!(!availability.is_eligible(date(2024, 1, 31)));
        assert!(!availability.is_eligible(date(2024, 6, 3)));
    }

    #[test]
    fn stale_new_arrival_has_no_available_date() {
        let item = item_created(2024, 1, 1);
        let availability = eligible_dates(
            AuctionType::NewArrival,
            &item,
            &config(),
            &view(vec![]),
            date(2024, 2, 15),
            DEFAULT_HORIZON_DAYS,
        );

        assert_eq!(availability.first_available, None);
        assert_eq!(availability.disabled.len(), DEFAULT_HORIZON_DAYS as usize);
    }

    #[test]
    fn clearance_enables_nothing_before_the_sixty_day_floor() {
        let item = item_created(2024, 1, 1);
        let availability = eligible_dates(
            AuctionType::Clearance,
            &item,
            &config(),
            &view(vec![]),
            date(2024, 1, 10),
            DEFAULT_HORIZON_DAYS,
        );

        // Mar 1, 2024 (creation + 60 days) is a Friday.
        assert_eq!(availability.first_available, Some(date(2024, 3, 1)));
        assert!(!availability.is_eligible(date(2024, 2, 29)));
        for day in availability
            .horizon_start
            .iter_days()
            .take_while(|d| *d < date(2024, 3, 1))
        {
            assert!(!availability.is_eligible(day), "{day} is before the floor");
        }
    }

    #[test]
    fn clearance_floor_on_a_weekend_moves_to_monday() {
        // Creation + 60 days = Mar 2, 2024, a Saturday.
        let item = item_created(2024, 1, 2);
        let availability = eligible_dates(
            AuctionType::Clearance,
            &item,
            &config(),
            &view(vec![]),
            date(2024, 1, 10),
            DEFAULT_HORIZON_DAYS,
        );
        assert_eq!(availability.first_available, Some(date(2024, 3, 4)));
    }

    #[test]
    fn black_friday_enables_exactly_one_friday() {
        let item = item_created(2024, 1, 1);
        let availability = eligible_dates(
            AuctionType::BlackFriday,
            &item,
            &config(),
            &view(vec![]),
            date(2024, 6, 5),
            DEFAULT_HORIZON_DAYS,
        );

        assert_eq!(availability.first_available, Some(date(2024, 11, 29)));
        assert_eq!(availability.first_available.unwrap().weekday(), Weekday::Fri);
        assert_eq!(
            availability.disabled.len(),
            DEFAULT_HORIZON_DAYS as usize - 1,
            "every other scanned date is disabled"
        );
    }

    #[test]
    fn holiday_type_enables_exactly_the_observed_holidays() {
        let holidays = vec![
            Holiday::new(date(2024, 6, 17), "Youth Day"),
            Holiday::new(date(2024, 9, 24), "Heritage Day"),
            Holiday::new(date(2024, 12, 9), "Christmas Day"),
        ];
        let item = item_created(2024, 1, 1);
        let availability = eligible_dates(
            AuctionType::Holiday,
            &item,
            &config(),
            &view(holidays),
            date(2024, 6, 5),
            DEFAULT_HORIZON_DAYS,
        );

        assert_eq!(availability.first_available, Some(date(2024, 6, 17)));
        assert!(availability.is_eligible(date(2024, 9, 24)));
        assert!(availability.is_eligible(date(2024, 12, 9)));
        assert_eq!(
            availability.disabled.len(),
            DEFAULT_HORIZON_DAYS as usize - 3
        );
    }

    #[test]
    fn disabled_auction_type_yields_no_slot() {
        let mut config = config();
        config.enabled_types.remove(&AuctionType::Regular);
        let item = item_created(2024, 1, 1);
        let availability = eligible_dates(
            AuctionType::Regular,
            &item,
            &config,
            &view(vec![]),
            date(2024, 6, 5),
            DEFAULT_HORIZON_DAYS,
        );

        assert_eq!(availability.first_available, None);
        assert_eq!(availability.disabled.len(), DEFAULT_HORIZON_DAYS as usize);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: an item older than 30 days never has a New Arrival
            /// slot, regardless of how much older it is.
            #[test]
            fn stale_items_never_get_new_arrival_slots(age_days in 31i64..1000) {
                let today = date(2024, 6, 5);
                let created = today - Duration::days(age_days);
                let item = ItemContext::new(
                    Utc.with_ymd_and_hms(created.year(), created.month(), created.day(), 12, 0, 0)
                        .unwrap(),
                );
                let availability = eligible_dates(
                    AuctionType::NewArrival,
                    &item,
                    &config(),
                    &view(vec![]),
                    today,
                    DEFAULT_HORIZON_DAYS,
                );
                prop_assert_eq!(availability.first_available, None);
            }
        }
    }
}
