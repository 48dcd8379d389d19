use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%H%M%S%.f", "%H%M"];

/// Parse an ISO 8601 datetime in extended (`2025-05-05T12:00:00Z`) or basic
/// (`20250505T120000Z`) form.
///
/// The time may stop at hours or minutes and may carry a `.` or `,` fraction.
/// The offset is optional and may be `Z`, `±HH`, `±HHMM` or `±HH:MM`. A bare
/// date is rejected.
pub(crate) fn parse_iso8601(s: &str) -> Option<(NaiveDateTime, Option<FixedOffset>)> {
    if s.is_empty() || s.trim() != s {
        return None;
    }
    let (date, rest) = s.split_once(['T', ' '])?;
    let date = parse_date(date)?;

    let (time, offset) = if let Some(time) = rest.strip_suffix(['Z', 'z']) {
        (time, FixedOffset::east_opt(0))
    } else if let Some(pos) = rest.find(['+', '-']) {
        (&rest[..pos], Some(parse_offset(&rest[pos..])?))
    } else {
        (rest, None)
    };

    let time = parse_time(time)?;
    Some((date.and_time(time), offset))
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    // Hour only: "12"
    if s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveTime::from_hms_opt(s.parse().ok()?, 0, 0);
    }
    // ISO 8601 allows a comma as the decimal sign
    let s = s.replacen(',', ".", 1);
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&s, fmt).ok())
}

/// `+HH`, `+HHMM` or `+HH:MM` (and `-` forms)
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, digits) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits = match digits.len() {
        2 | 4 => digits.to_string(),
        5 if digits.as_bytes()[2] == b':' => digits.replacen(':', "", 1),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = if digits.len() == 4 {
        digits[2..].parse().ok()?
    } else {
        0
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
