//! Report DTOs

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

/// Query parameters of the report endpoints
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Query parameters of `GET /reports/top-products`
#[derive(Debug, Deserialize)]
pub struct TopProductsQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
}

/// Resolves an optional date range into inclusive UTC bounds
///
/// Defaults to the last 30 days. The `to` bound is pushed to the end of its
/// day so the range is inclusive at full timestamp precision.
pub fn resolve_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> (DateTime<Utc>, DateTime<Utc>) {
    let today = Utc::now().date_naive();
    let to_date = to.unwrap_or(today);
    let from_date = from.unwrap_or_else(|| to_date - Duration::days(30));

    let from_at = from_date.and_time(NaiveTime::MIN).and_utc();
    let to_at = to_date.and_time(NaiveTime::MIN).and_utc()
        + Duration::hours(23)
        + Duration::minutes(59)
        + Duration::seconds(59);

    (from_at, to_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_range_is_inclusive_end_of_day() {
        let from = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();

        let (from_at, to_at) = resolve_range(Some(from), Some(to));
        assert_eq!(from_at.to_rfc3339(), "2026-01-01T00:00:00+00:00");
        assert_eq!(to_at.to_rfc3339(), "2026-01-31T23:59:59+00:00");
    }

    #[test]
    fn test_default_range_spans_thirty_days() {
        let (from_at, to_at) = resolve_range(None, None);
        assert_eq!((to_at.date_naive() - from_at.date_naive()).num_days(), 30);
        assert!(from_at < to_at);
    }
}
