// Timestamp expression parsing

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use anyhow::{Context, Result};

/// Parse a timestamp expression relative to `now`.
///
/// Supported forms:
/// - `now`
/// - RFC 3339 (`2026-01-10T14:30:00+03:00`)
/// - absolute local dates and times (`2026-01-10`, `2026-01-10T14:30`),
///   interpreted in `offset`
/// - unix seconds (`@1767225600`)
/// - relative past (`-2h`, `-3d`, `-1d6h`, `-45m`)
pub fn parse_timestamp(expr: &str, now: DateTime<Utc>, offset: FixedOffset) -> Result<DateTime<Utc>> {
    let expr = expr.trim();

    if expr == "now" {
        return Ok(now);
    }

    if let Some(secs) = expr.strip_prefix('@') {
        let secs: i64 = secs.parse()
            .with_context(|| format!("Invalid unix timestamp: {}", expr))?;
        return Utc.timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| anyhow::anyhow!("Unix timestamp out of range: {}", expr));
    }

    if let Some(relative) = expr.strip_prefix('-') {
        let hours = super::duration::parse_hours(relative)
            .with_context(|| format!("Invalid relative time: {}", expr))?;
        return Duration::try_milliseconds((hours * 3_600_000.0).round() as i64)
            .and_then(|offset| now.checked_sub_signed(offset))
            .ok_or_else(|| anyhow::anyhow!("Time out of range: {}", expr));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(expr) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(expr, "%Y-%m-%dT%H:%M") {
        return local_to_utc(&datetime, offset);
    }

    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        let datetime = date.and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid date"))?;
        return local_to_utc(&datetime, offset);
    }

    anyhow::bail!(
        "Unsupported time expression: {}. Use now, YYYY-MM-DD, YYYY-MM-DDTHH:MM, RFC 3339, @unix or -<hours> (e.g. -2h, -3d)",
        expr
    )
}

fn local_to_utc(datetime: &NaiveDateTime, offset: FixedOffset) -> Result<DateTime<Utc>> {
    offset.from_local_datetime(datetime)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow::anyhow!("Ambiguous datetime: {}", datetime))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_now() {
        assert_eq!(parse_timestamp("now", now(), utc()).unwrap(), now());
    }

    #[test]
    fn test_absolute_dates() {
        assert_eq!(
            parse_timestamp("2026-01-09", now(), utc()).unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 9, 0, 0, 0).unwrap()
        );
        let riyadh = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(
            parse_timestamp("2026-01-09T09:30", now(), riyadh).unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 9, 6, 30, 0).unwrap()
        );
        assert_eq!(
            parse_timestamp("2026-01-09T09:30:00+03:00", now(), utc()).unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 9, 6, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_relative_and_unix() {
        assert_eq!(parse_timestamp("-2h", now(), utc()).unwrap(), now() - Duration::hours(2));
        assert_eq!(parse_timestamp("-1d6h", now(), utc()).unwrap(), now() - Duration::hours(30));
        assert_eq!(parse_timestamp("@0", now(), utc()).unwrap(), Utc.timestamp_opt(0, 0).unwrap());
    }

    #[test]
    fn test_invalid_expressions() {
        assert!(parse_timestamp("yesterday-ish", now(), utc()).is_err());
        assert!(parse_timestamp("@abc", now(), utc()).is_err());
        assert!(parse_timestamp("-abc", now(), utc()).is_err());
    }

    #[test]
    fn test_relative_out_of_range() {
        let err = parse_timestamp("-10000000000", now(), utc()).unwrap_err();
        assert!(err.to_string().contains("Time out of range"), "{}", err);
        assert!(parse_timestamp("-1e300", now(), utc()).is_err());
        assert!(parse_timestamp("-inf", now(), utc()).is_err());
        assert!(parse_timestamp("--inf", now(), utc()).is_err());
    }
}
