use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use gavel_calendar::{black_friday, holidays::observed_holidays_for_year, provider::RawHoliday};
use gavel_core::{AuctionConfig, AuctionType, ItemContext};
use gavel_scheduling::{CalendarView, DEFAULT_HORIZON_DAYS, eligible_dates};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn za_raw(year: i32) -> Vec<RawHoliday> {
    [
        (3, 21, "Human Rights Day"),
        (4, 27, "Freedom Day"),
        (5, 1, "Workers' Day"),
        (6, 16, "Youth Day"),
        (8, 9, "National Women's Day"),
        (9, 24, "Heritage Day"),
        (12, 16, "Day of Reconciliation"),
        (12, 25, "Christmas Day"),
        (12, 26, "Day of Goodwill"),
        (1, 1, "New Year's Day"),
    ]
    .into_iter()
    .map(|(m, d, name)| RawHoliday::new(date(year, m, d), name, "public"))
    .collect()
}

fn bench_availability_scan(c: &mut Criterion) {
    let today = date(2024, 6, 5);
    let mut holidays = observed_holidays_for_year(&za_raw(2024), 2024);
    holidays.extend(observed_holidays_for_year(&za_raw(2025), 2025));
    holidays.retain(|h| h.date >= today);
    holidays.sort_by_key(|h| h.date);
    let calendar = CalendarView::new(holidays, black_friday(2024));

    let config = AuctionConfig {
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        duration_hours: 27,
        holiday_end_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        holiday_duration_hours: 24,
        enabled_types: AuctionType::ALL.into_iter().collect(),
    };
    let item = ItemContext::new(Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap());

    let mut group = c.benchmark_group("availability_scan");
    for auction_type in AuctionType::ALL {
        group.bench_function(auction_type.as_str(), |b| {
            b.iter(|| {
                eligible_dates(
                    black_box(auction_type),
                    black_box(&item),
                    black_box(&config),
                    black_box(&calendar),
                    black_box(today),
                    DEFAULT_HORIZON_DAYS,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_availability_scan);
criterion_main!(benches);
