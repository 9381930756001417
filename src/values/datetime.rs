//
// datetime.rs
// Dicom-Iod-rs
//
// DA / TM / DT parsing and formatting on top of chrono.
//
// Dicom-Iod-rs contributors - October 2026

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use dicom::core::{Tag, VR};

use crate::dataset::{AttributeProvider, AttributeProviderMut};

/// Parses a DA value. Accepts `YYYYMMDD` and the pre-3.0 `YYYY.MM.DD` form.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    match value.len() {
        8 => NaiveDate::parse_from_str(value, "%Y%m%d").ok(),
        10 => NaiveDate::parse_from_str(value, "%Y.%m.%d").ok(),
        _ => None,
    }
}

/// Parses a TM value: `HH[MM[SS[.F{1,6}]]]`, colons tolerated.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ':').collect();
    let (main, fraction) = match cleaned.split_once('.') {
        Some((main, fraction)) => (main, Some(fraction)),
        None => (cleaned.as_str(), None),
    };
    if !main.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let field = |range: std::ops::Range<usize>| -> Option<u32> {
        main.get(range).map_or(Some(0), |s| s.parse().ok())
    };
    let (hour, minute, second) = match main.len() {
        2 | 4 | 6 => (field(0..2)?, field(2..4)?, field(4..6)?),
        _ => return None,
    };
    // a fraction only makes sense once seconds are present
    let micros = match fraction {
        Some(f) if main.len() == 6 && !f.is_empty() && f.len() <= 6 => {
            if !f.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            format!("{f:0<6}").parse().ok()?
        }
        Some(_) => return None,
        None => 0,
    };
    NaiveTime::from_hms_micro_opt(hour, minute, second, micros)
}

/// Parses a DT value: `YYYY[MM[DD[time]]][&ZZXX]`.
///
/// The UTC offset is added to the value rather than converting to UTC. Its
/// sign applies to both hours and minutes.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() || !value.is_ascii() {
        return None;
    }

    let (body, offset) = match value.find(['+', '-']) {
        Some(0) => return None,
        Some(index) if index < 8 => return None,
        Some(index) => (&value[..index], Some(&value[index..])),
        None => (value, None),
    };

    let (date_part, time_part) = if body.len() >= 8 {
        body.split_at(8)
    } else {
        (body, "")
    };
    if !date_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year = date_part.get(0..4)?.parse().ok()?;
    let month = date_part.get(4..6).map_or(Some(1), |s| s.parse().ok())?;
    let day = date_part.get(6..8).map_or(Some(1), |s| s.parse().ok())?;
    if !matches!(date_part.len(), 4 | 6 | 8) {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let mut result = if time_part.is_empty() {
        date.and_hms_opt(0, 0, 0)?
    } else {
        date.and_time(parse_time(time_part)?)
    };
    if let Some(offset) = offset {
        result = result.checked_add_signed(parse_offset(offset)?)?;
    }
    Some(result)
}

/// `&HH` or `&HHMM`.
fn parse_offset(offset: &str) -> Option<Duration> {
    let (sign, digits) = (offset.get(..1)?, offset.get(1..)?);
    if !matches!(digits.len(), 2 | 4) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i64 = digits.get(0..2)?.parse().ok()?;
    let minutes: i64 = digits.get(2..4).map_or(Some(0), |s| s.parse().ok())?;
    let offset = Duration::hours(hours) + Duration::minutes(minutes);
    match sign {
        "+" => Some(offset),
        "-" => Some(-offset),
        _ => None,
    }
}

/// DT wins when present; otherwise DA plus an optional TM.
pub fn parse_date_and_time(
    datetime: Option<&str>,
    date: Option<&str>,
    time: Option<&str>,
) -> Option<NaiveDateTime> {
    if let Some(dt) = datetime.map(str::trim).filter(|s| !s.is_empty()) {
        return parse_datetime(dt);
    }
    let date = parse_date(date.map(str::trim).filter(|s| !s.is_empty())?)?;
    match time.map(str::trim).filter(|s| !s.is_empty()) {
        Some(time) => Some(date.and_time(parse_time(time)?)),
        None => date.and_hms_opt(0, 0, 0),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    if time.nanosecond() == 0 {
        time.format("%H%M%S").to_string()
    } else {
        time.format("%H%M%S%.6f").to_string()
    }
}

pub fn format_datetime(value: NaiveDateTime) -> String {
    format!("{}{}", format_date(value.date()), format_time(value.time()))
}

/// Reads a date/time split over a DA and a TM attribute.
pub fn get_date_time<P: AttributeProvider + ?Sized>(
    provider: &P,
    date_tag: Tag,
    time_tag: Tag,
) -> Option<NaiveDateTime> {
    parse_date_and_time(
        None,
        provider.get_string(date_tag).as_deref(),
        provider.get_string(time_tag).as_deref(),
    )
}

/// Writes both attributes, or leaves both present and empty for `None`.
pub fn put_date_time<P: AttributeProviderMut + ?Sized>(
    provider: &mut P,
    date_tag: Tag,
    time_tag: Tag,
    value: Option<NaiveDateTime>,
) {
    match value {
        Some(value) => {
            provider.put_string(date_tag, VR::DA, &format_date(value.date()));
            provider.put_string(time_tag, VR::TM, &format_time(value.time()));
        }
        None => {
            provider.put_empty(date_tag, VR::DA);
            provider.put_empty(time_tag, VR::TM);
        }
    }
}

/// Type 3 variant of [`put_date_time`]: `None` removes both attributes.
pub fn put_date_time_or_remove<P: AttributeProviderMut + ?Sized>(
    provider: &mut P,
    date_tag: Tag,
    time_tag: Tag,
    value: Option<NaiveDateTime>,
) {
    match value {
        Some(_) => put_date_time(provider, date_tag, time_tag, value),
        None => {
            provider.remove(date_tag);
            provider.remove(time_tag);
        }
    }
}

pub fn get_dt<P: AttributeProvider + ?Sized>(provider: &P, tag: Tag) -> Option<NaiveDateTime> {
    parse_datetime(&provider.get_string(tag)?)
}

/// Type 3 DT setter: `None` removes the attribute.
pub fn put_dt<P: AttributeProviderMut + ?Sized>(
    provider: &mut P,
    tag: Tag,
    value: Option<NaiveDateTime>,
) {
    match value {
        Some(value) => provider.put_string(tag, VR::DT, &format_datetime(value)),
        None => {
            provider.remove(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::object::InMemDicomObject;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn dates_accept_both_forms() {
        let expected = NaiveDate::from_ymd_opt(2008, 3, 14);
        assert_eq!(parse_date("20080314"), expected);
        assert_eq!(parse_date("2008.03.14"), expected);
        assert_eq!(parse_date("2008031"), None);
        assert_eq!(parse_date("20081314"), None);
    }

    #[test]
    fn times_accept_partial_and_fractional() {
        assert_eq!(parse_time("13"), NaiveTime::from_hms_opt(13, 0, 0));
        assert_eq!(parse_time("1307"), NaiveTime::from_hms_opt(13, 7, 0));
        assert_eq!(parse_time("13:07:05"), NaiveTime::from_hms_opt(13, 7, 5));
        assert_eq!(parse_time("130705.25"), NaiveTime::from_hms_micro_opt(13, 7, 5, 250_000));
        assert_eq!(parse_time("130"), None);
        assert_eq!(parse_time("1307.5"), None);
    }

    #[test]
    fn datetime_offset_is_added() {
        assert_eq!(parse_datetime("20080314130705"), Some(dt(2008, 3, 14, 13, 7, 5)));
        assert_eq!(parse_datetime("2008"), Some(dt(2008, 1, 1, 0, 0, 0)));
        assert_eq!(parse_datetime("20080314130705+0130"), Some(dt(2008, 3, 14, 14, 37, 5)));
        assert_eq!(parse_datetime("20080314130705-0130"), Some(dt(2008, 3, 14, 11, 37, 5)));
        assert_eq!(parse_datetime("2008-0314"), None);
        assert_eq!(parse_datetime("20080314-0030"), Some(dt(2008, 3, 13, 23, 30, 0)));
        assert_eq!(parse_datetime("20080314+01"), Some(dt(2008, 3, 14, 1, 0, 0)));
    }

    #[test]
    fn malformed_datetimes_are_rejected() {
        assert_eq!(parse_datetime("2008031\u{e9}12+0000"), None);
        assert_eq!(parse_datetime("20080314+1\u{e9}"), None);
        assert_eq!(parse_datetime("20080314\u{e9}"), None);
        assert_eq!(parse_datetime("20080314+99999999999999"), None);
        assert_eq!(parse_datetime("20080314+01a0"), None);
        assert_eq!(parse_datetime("20080314+"), None);
        assert_eq!(parse_datetime("20080314++0100"), None);
        assert_eq!(parse_time("13\u{e9}"), None);
        assert_eq!(parse_date("2008\u{e9}314"), None);
    }

    #[test]
    fn datetime_attribute_wins_over_date_and_time() {
        let combined = parse_date_and_time(Some("20010101"), Some("20080314"), Some("1307"));
        assert_eq!(combined, Some(dt(2001, 1, 1, 0, 0, 0)));
        let split = parse_date_and_time(None, Some("20080314"), Some("1307"));
        assert_eq!(split, Some(dt(2008, 3, 14, 13, 7, 0)));
        assert_eq!(parse_date_and_time(None, None, Some("1307")), None);
    }

    #[test]
    fn formatting_round_trips() {
        let value = dt(2008, 3, 14, 13, 7, 5);
        assert_eq!(format_datetime(value), "20080314130705");
        let fractional = value + Duration::microseconds(1500);
        assert_eq!(format_time(fractional.time()), "130705.001500");
        assert_eq!(parse_datetime(&format_datetime(fractional)), Some(fractional));
    }

    #[test]
    fn clearing_writes_empty_attributes() {
        let date_tag = Tag(0x0008, 0x0021);
        let time_tag = Tag(0x0008, 0x0031);
        let mut obj = InMemDicomObject::new_empty();
        put_date_time(&mut obj, date_tag, time_tag, Some(dt(2020, 2, 29, 8, 0, 0)));
        assert_eq!(get_date_time(&obj, date_tag, time_tag), Some(dt(2020, 2, 29, 8, 0, 0)));
        put_date_time(&mut obj, date_tag, time_tag, None);
        assert!(obj.attribute(date_tag).is_some());
        assert_eq!(get_date_time(&obj, date_tag, time_tag), None);
    }
}
