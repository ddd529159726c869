//! Timestamp parsing with the naive-means-UTC convention.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Accepted layouts for timezone-naive timestamps.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an ISO-8601 timestamp into UTC.
///
/// Values carrying an offset are converted; timezone-naive values are
/// interpreted as UTC and stamped accordingly. Bare dates resolve to
/// midnight UTC. Returns `None` when no accepted layout matches.
#[must_use]
pub fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
mod tests {
    use super::parse_utc;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    #[rstest]
    #[case("2025-03-01T00:00:00Z")]
    #[case("2025-03-01T01:00:00+01:00")]
    #[case("2025-03-01T00:00:00")]
    #[case("2025-03-01 00:00:00")]
    #[case("2025-03-01")]
    fn accepted_layouts_resolve_to_the_same_utc_instant(#[case] value: &str) {
        let expected = Utc
            .with_ymd_and_hms(2025, 3, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(parse_utc(value), Some(expected));
    }

    #[rstest]
    #[case("next tuesday")]
    #[case("")]
    #[case("2025-13-40")]
    fn unparsable_values_return_none(#[case] value: &str) {
        assert_eq!(parse_utc(value), None);
    }
}
