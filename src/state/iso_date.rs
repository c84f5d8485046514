//! ISO-8601 date recognition
//!
//! Follows the lenient grammar of the usual JavaScript `parseISO`: a date part
//! (calendar, ordinal or week date, or a bare century), an optional time of
//! day after `T` or a space, and an optional zone designator.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The four-digit branch is unanchored so `YYYYMM` keeps its month as the rest
    RE.get_or_init(|| {
        Regex::new(r"^(?:([0-9]{4}|[+-][0-9]{6})|([0-9]{2}|[+-][0-9]{4})$)").expect("static regex")
    })
}

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^-?(?:([0-9]{3})|([0-9]{2})(?:-?([0-9]{2}))?|W([0-9]{2})(?:-?([0-9]))?|)$")
            .expect("static regex")
    })
}

fn time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^([0-9]{2}(?:[.,][0-9]*)?)(?::?([0-9]{2}(?:[.,][0-9]*)?))?(?::?([0-9]{2}(?:[.,][0-9]*)?))?$",
        )
        .expect("static regex")
    })
}

fn zone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([+-])([0-9]{2})(?::?([0-9]{2}))?$").expect("static regex"))
}

/// The three pieces of an ISO-8601 string
#[derive(Debug, PartialEq, Eq)]
struct IsoParts<'a> {
    date: &'a str,
    time: &'a str,
    zone: &'a str,
}

fn split_parts(value: &str) -> Option<IsoParts<'_>> {
    let mut segments = value.split(['T', ' ']);
    let first = segments.next().unwrap_or("");
    let second = segments.next();
    if segments.next().is_some() || first.contains(':') {
        return None;
    }

    let (date, rest) = match first.find(['Z', 'z', ' ']) {
        Some(idx) => (&value[..idx], &value[idx..]),
        None => (first, second.unwrap_or("")),
    };

    let (time, zone) = match rest.find(['Z', '+', '-']) {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };
    Some(IsoParts { date, time, zone })
}

/// Split the year (or century) off the front of the date part
fn split_year(date: &str) -> Option<(i64, &str)> {
    let caps = year_re().captures(date)?;
    if let Some(year) = caps.get(1) {
        let value = year.as_str().trim_start_matches('+').parse().ok()?;
        return Some((value, &date[year.end()..]));
    }
    let century = caps.get(2)?;
    let value: i64 = century.as_str().trim_start_matches('+').parse().ok()?;
    Some((value * 100, &date[century.end()..]))
}

fn unit_or_one(caps: &regex::Captures, index: usize) -> Option<u32> {
    match caps.get(index) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(1),
    }
}

fn is_valid_date_part(year: i64, rest: &str) -> bool {
    let Some(caps) = date_re().captures(rest) else {
        return false;
    };
    let Ok(year) = i32::try_from(year) else {
        return false;
    };
    let (Some(ordinal), Some(month), Some(day), Some(week), Some(weekday)) = (
        unit_or_one(&caps, 1),
        unit_or_one(&caps, 2),
        unit_or_one(&caps, 3),
        unit_or_one(&caps, 4),
        unit_or_one(&caps, 5),
    ) else {
        return false;
    };

    if caps.get(4).is_some() {
        // Week 53 is accepted in every year
        return (1..=53).contains(&week)
            && (1..=7).contains(&weekday)
            && NaiveDate::from_ymd_opt(year, 1, 1).is_some();
    }
    NaiveDate::from_ymd_opt(year, month, day).is_some()
        && NaiveDate::from_yo_opt(year, ordinal).is_some()
}

/// Fractional time unit, `,` or `.` as the decimal mark
fn time_unit(caps: &regex::Captures, index: usize) -> Option<f64> {
    match caps.get(index) {
        Some(m) => m
            .as_str()
            .replace(',', ".")
            .trim_end_matches('.')
            .parse()
            .ok(),
        None => Some(0.0),
    }
}

fn is_valid_time(time: &str) -> bool {
    let Some(caps) = time_re().captures(time) else {
        return false;
    };
    let (Some(hours), Some(minutes), Some(seconds)) =
        (time_unit(&caps, 1), time_unit(&caps, 2), time_unit(&caps, 3))
    else {
        return false;
    };
    if hours == 24.0 {
        return minutes == 0.0 && seconds == 0.0;
    }
    (0.0..60.0).contains(&seconds) && (0.0..60.0).contains(&minutes) && (0.0..25.0).contains(&hours)
}

/// Unrecognised designators count as UTC
fn is_valid_zone(zone: &str) -> bool {
    if zone == "Z" {
        return true;
    }
    match zone_re().captures(zone) {
        Some(caps) => caps
            .get(3)
            .map_or(true, |m| m.as_str().parse::<u32>().is_ok_and(|minutes| minutes <= 59)),
        None => true,
    }
}

/// Whether `value` parses as an ISO-8601 calendar date or year.
///
/// Accepts bare centuries (`20`), years, year-month in extended or basic
/// form, full dates, ordinal dates (`2020-123`), week dates (`2020-W05-3`),
/// and any of those followed by a time (`T10`, `T1030`, `T10:30:15.250`) and
/// a zone (`Z`, `+05:30`). Leading whitespace is rejected.
pub fn is_valid_date(value: &str) -> bool {
    let Some(parts) = split_parts(value) else {
        return false;
    };
    if parts.date.is_empty() {
        return false;
    }
    let Some((year, rest)) = split_year(parts.date) else {
        return false;
    };
    is_valid_date_part(year, rest)
        && (parts.time.is_empty() || is_valid_time(parts.time))
        && (parts.zone.is_empty() || is_valid_zone(parts.zone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_date_time_and_zone() {
        assert_eq!(
            split_parts("2020-05-17T10:30+05:30"),
            Some(IsoParts {
                date: "2020-05-17",
                time: "10:30",
                zone: "+05:30",
            })
        );
        assert_eq!(
            split_parts("2020Z"),
            Some(IsoParts {
                date: "2020",
                time: "",
                zone: "Z",
            })
        );
        assert_eq!(split_parts("2020-05-17T10:30 Z"), None);
        assert_eq!(split_parts("10:30"), None);
    }

    #[test]
    fn test_split_year_and_century() {
        assert_eq!(split_year("2020-05"), Some((2020, "-05")));
        assert_eq!(split_year("202005"), Some((2020, "05")));
        assert_eq!(split_year("20"), Some((2000, "")));
        assert_eq!(split_year("+002020-05"), Some((2020, "-05")));
        assert_eq!(split_year("123"), None);
    }

    #[test]
    fn test_accepts_calendar_dates() {
        assert!(is_valid_date("2020"));
        assert!(is_valid_date("2020-05"));
        assert!(is_valid_date("202005"));
        assert!(is_valid_date("2020-05-17"));
        assert!(is_valid_date("20200517"));
        assert!(is_valid_date("2024-02-29"));
    }

    #[test]
    fn test_accepts_century() {
        assert!(is_valid_date("20"));
    }

    #[test]
    fn test_accepts_ordinal_dates() {
        assert!(is_valid_date("2020-123"));
        assert!(is_valid_date("2020366"));
        assert!(!is_valid_date("2021-366"));
        assert!(!is_valid_date("2020-000"));
    }

    #[test]
    fn test_accepts_week_dates() {
        assert!(is_valid_date("2020-W05"));
        assert!(is_valid_date("2020-W05-3"));
        assert!(is_valid_date("2020W053"));
        assert!(!is_valid_date("2020-W54"));
        assert!(!is_valid_date("2020-W05-8"));
    }

    #[test]
    fn test_accepts_times() {
        assert!(is_valid_date("2020-05-17T10"));
        assert!(is_valid_date("2020-05-17T1030"));
        assert!(is_valid_date("2020-05-17T10:30"));
        assert!(is_valid_date("2020-05-17 10:30:15"));
        assert!(is_valid_date("2020-05-17T10:30:15.250Z"));
        assert!(is_valid_date("2020-05-17T10,5"));
        assert!(is_valid_date("2020-05-17T24:00"));
    }

    #[test]
    fn test_accepts_zones() {
        assert!(is_valid_date("2020-05-17T10:30:15+05:30"));
        assert!(is_valid_date("2020-05-17T10:30-0800"));
        assert!(is_valid_date("2020-05-17Z"));
        assert!(!is_valid_date("2020-05-17T10:30+05:75"));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(!is_valid_date("2020-13"));
        assert!(!is_valid_date("2021-02-29"));
        assert!(!is_valid_date("2020-05-17T25:00"));
        assert!(!is_valid_date("2020-05-17T24:30"));
        assert!(!is_valid_date("2020-05-17T10:60"));
    }

    #[test]
    fn test_rejects_non_dates() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("not-a-date"));
        assert!(!is_valid_date("Currently Pursuing"));
        assert!(!is_valid_date("2020-5"));
        assert!(!is_valid_date("123"));
        assert!(!is_valid_date(" 2020"));
        assert!(!is_valid_date("T10:30"));
        assert!(!is_valid_date("2020-05-17T1"));
        assert!(!is_valid_date("2020z"));
    }
}
