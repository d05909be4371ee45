use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Weekday};
use anyhow::{anyhow, Result};

const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parses the moment a dashboard is viewed "as of", relative to `now`.
///
/// Keywords and relative offsets keep `now`'s time of day; a bare date
/// means the start of that day.
pub fn parse_reference_date(input: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "" => return Err(anyhow!("Empty date string")),
        "now" | "today" | "tod" => return Ok(now),
        "tomorrow" | "tom" => return Ok(now + Duration::days(1)),
        "yesterday" | "yes" => return Ok(now - Duration::days(1)),
        _ => {}
    }

    // Relative format (+Nd, -Nw)
    if input.starts_with('+') || input.starts_with('-') {
        return parse_offset(input).map(|offset| now + offset);
    }

    // Weekday format (fri, 2:fri), looking forward from today
    if let Some((count, day_str)) = parse_weekday_token(input) {
        if let Ok(target) = parse_weekday_str(day_str) {
            let mut days_needed = target.num_days_from_monday() as i64
                - now.weekday().num_days_from_monday() as i64;
            if days_needed <= 0 {
                days_needed += 7;
            }
            days_needed += (count - 1) * 7;
            return Ok(now + Duration::days(days_needed));
        }
    }

    if let Ok(dt) = parse_timestamp(input) {
        return Ok(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(d.and_time(chrono::NaiveTime::MIN));
    }

    Err(anyhow!("Could not parse date: {}", input))
}

/// Parses a booking boundary such as `2024-03-04 09:30`.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| anyhow!("Could not parse timestamp: {} (expected YYYY-MM-DD HH:MM)", input))
}

fn parse_offset(input: &str) -> Result<Duration> {
    let invalid = || anyhow!("Invalid relative format: {}", input);
    let (sign, rest) = input.split_at(1);
    let (unit_at, unit) = rest.char_indices().last().ok_or_else(invalid)?;
    let num_str = &rest[..unit_at];
    if num_str.is_empty() {
        return Err(invalid());
    }
    let count: i64 = num_str.parse().map_err(|_| invalid())?;
    let count = if sign == "-" { -count } else { count };

    match unit.to_ascii_lowercase() {
        'd' => Ok(Duration::days(count)),
        'w' => Ok(Duration::weeks(count)),
        _ => Err(anyhow!("Unknown unit in relative time: {}", unit)),
    }
}

fn parse_weekday_token(input: &str) -> Option<(i64, &str)> {
    match input.split_once(':') {
        Some((count, day)) => count.parse::<i64>().ok().filter(|c| *c > 0).map(|c| (c, day)),
        None => Some((1, input)),
    }
}

// chrono accepts short and full English names, any case.
fn parse_weekday_str(s: &str) -> Result<Weekday> {
    s.parse::<Weekday>().map_err(|_| anyhow!("Invalid weekday: {}", s))
}
