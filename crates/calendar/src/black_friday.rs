//! Annual Black Friday date resolution.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::holidays::shift_off_sunday;

/// The single Black Friday date of `year`: the fourth Friday of November.
///
/// The Sunday normalization can never fire for a Friday scan; it is kept as
/// a defensive guard so the result shares the weekday guarantee of every
/// other observed date.
pub fn black_friday(year: i32) -> NaiveDate {
    let mut day = NaiveDate::from_ymd_opt(year, 11, 1).expect("November 1 exists in every year");
    let mut fridays = 0;
    loop {
        if day.weekday() == Weekday::Fri {
            fridays += 1;
            if fridays == 4 {
                return shift_off_sunday(day);
            }
        }
        day += Duration::days(1);
    }
}

/// The nearest Black Friday on or after `today` (this year or next).
pub fn next_black_friday(today: NaiveDate) -> NaiveDate {
    let this_year = black_friday(today.year());
    if this_year < today {
        black_friday(today.year() + 1)
    } else {
        this_year
    }
}
