//! Calendar snapshot consumed by the scheduling rules.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use gavel_core::Holiday;

/// Immutable view of the calendar facts a scheduling query needs: the
/// observed holidays over the horizon and the resolved Black Friday date.
///
/// Built once per query from `gavel-calendar` output and shared by the
/// availability scan, the window calculator and the booking validator, so
/// all three agree on the same facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    holidays: BTreeMap<NaiveDate, Holiday>,
    black_friday: NaiveDate,
}

impl CalendarView {
    pub fn new(holidays: Vec<Holiday>, black_friday: NaiveDate) -> Self {
        Self {
            holidays: holidays.into_iter().map(|h| (h.date, h)).collect(),
            black_friday,
        }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// Observed holidays in ascending date order.
    pub fn holidays(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    pub fn black_friday(&self) -> NaiveDate {
        self.black_friday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn lookups_and_ordering() {
        let view = CalendarView::new(
            vec![
                Holiday::new(date(2024, 9, 24), "Heritage Day"),
                Holiday::new(date(2024, 6, 17), "Youth Day"),
            ],
            date(2024, 11, 29),
        );

        assert!(view.is_holiday(date(2024, 6, 17)));
        assert!(!view.is_holiday(date(2024, 6, 18)));
        assert_eq!(view.holiday_on(date(2024, 9, 24)).unwrap().name, "Heritage Day");
        assert_eq!(view.black_friday(), date(2024, 11, 29));

        let dates: Vec<NaiveDate> = view.holidays().map(|h| h.date).collect();
        assert_eq!(dates, vec![date(2024, 6, 17), date(2024, 9, 24)]);
    }
}
