use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use skycast::domain::{
    buckets::{DayLabel, day_labels, default_day, hourly_for_day},
    weather::{DailyForecast, HourlyForecast, category_for_code, lookup_category},
};

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, 16)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid base")
}

fn hourly(offsets: &[i64]) -> Vec<HourlyForecast> {
    offsets
        .iter()
        .map(|hour| HourlyForecast {
            time: base() + Duration::hours(*hour),
            temperature_2m: Some(*hour as f32),
            weather_code: Some(0),
        })
        .collect()
}

fn daily(days: i64) -> Vec<DailyForecast> {
    (0..days)
        .map(|offset| DailyForecast {
            date: base().date() + Duration::days(offset),
            weather_code: Some(3),
            temperature_max: None,
            temperature_min: None,
            sunrise: None,
            sunset: None,
        })
        .collect()
}

proptest! {
    /// Within one week, concatenating the per-day buckets in daily order
    /// reproduces the hourly series exactly.
    #[test]
    fn buckets_partition_a_week_of_hours(mut offsets in prop::collection::vec(0i64..168, 0..200)) {
        offsets.sort_unstable();
        let series = hourly(&offsets);
        let days = daily(7);

        let mut regrouped = Vec::new();
        for label in day_labels(&days) {
            regrouped.extend(hourly_for_day(&series, Some(label), &days));
        }

        let times: Vec<_> = series.iter().map(|hour| hour.time).collect();
        let regrouped_times: Vec<_> = regrouped.iter().map(|entry| entry.time).collect();
        prop_assert_eq!(regrouped_times, times);
    }

    #[test]
    fn bucket_keeps_series_order(offsets in prop::collection::vec(0i64..168, 0..100), day in 0i64..7) {
        let series = hourly(&offsets);
        let label = DayLabel::of_date(base().date() + Duration::days(day));
        let bucket = hourly_for_day(&series, Some(label), &daily(7));

        let expected: Vec<_> = series
            .iter()
            .filter(|hour| DayLabel::of_time(hour.time) == label)
            .map(|hour| hour.time)
            .collect();
        prop_assert_eq!(bucket.iter().map(|entry| entry.time).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn every_code_maps_to_some_category(code in any::<i32>()) {
        let category = category_for_code(code);
        if let Some(known) = lookup_category(code) {
            prop_assert_eq!(category, known);
        }
    }
}

#[test]
fn empty_hourly_series_gives_empty_buckets() {
    let days = daily(3);
    for label in day_labels(&days) {
        assert!(hourly_for_day(&[], Some(label), &days).is_empty());
    }
}

#[test]
fn unset_day_falls_back_to_the_first_daily_entry() {
    let series = hourly(&[0, 1, 24, 25]);
    let days = daily(2);
    assert_eq!(default_day(&days), Some(DayLabel::of_date(base().date())));
    assert_eq!(hourly_for_day(&series, None, &days).len(), 2);
    assert!(hourly_for_day(&series, None, &[]).is_empty());
}
