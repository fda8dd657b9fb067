// Field normalizers shared by the live crawl and the tabular import.
//
// Malformed input never raises here: unknown days are skipped, unparsable
// prices become 0, missing coordinates become the empty-string placeholder.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{CoordValue, Locate, OpenHours, OpeningTime};
use crate::vocab;

/// Builds the weekday map from the listing endpoint's structured entries.
/// Entries with an unknown day code or an open-ended range are dropped.
pub fn open_hours_from_entries(entries: &[OpeningTime]) -> OpenHours {
    let mut hours = OpenHours::default();
    for entry in entries {
        let Some(day) = entry.day_of_week.and_then(vocab::weekday_from_code) else {
            continue;
        };
        let Some(slot) = hours.day_mut(day) else {
            continue;
        };
        for range in &entry.times {
            if let (Some(start), Some(end)) = (&range.start_time, &range.end_time) {
                slot.push(format!("{start} - {end}"));
            }
        }
    }
    hours
}

/// Builds the weekday map from exported free text: `;`-separated entries of
/// the form `"<day>, <range>"`, with the connector "đến" standing for "-".
pub fn open_hours_from_text(raw: &str) -> OpenHours {
    let mut hours = OpenHours::default();
    for entry in raw.split(';') {
        let Some((day_part, time_part)) = entry.split_once(',') else {
            continue;
        };
        let Some(day) = vocab::weekday_from_vietnamese(day_part.trim().to_lowercase().as_str())
        else {
            continue;
        };
        let times = time_part.trim().replace(" đến ", " - ");
        if let Some(slot) = hours.day_mut(day) {
            slot.push(times);
        }
    }
    hours
}

/// Parses a localized price like "1.500.000đ/giờ" down to 1500000.
/// Anything unparsable ("liên hệ", blanks) is 0.
pub fn parse_price(raw: &str) -> i64 {
    let numeric = raw.split('đ').next().unwrap_or("").replace('.', "");
    numeric.trim().parse::<i64>().unwrap_or(0)
}

static QUERY_COORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"query=([-+]?\d*\.\d+),([-+]?\d*\.\d+)").unwrap());

/// Pulls `lat`/`long` out of a map URL's `query=<lat>,<lon>` parameter.
/// No match yields the empty-string placeholders, never 0.
pub fn extract_coordinates(url: &str) -> Locate {
    let Some(caps) = QUERY_COORDS.captures(url) else {
        return Locate::unknown();
    };
    match (caps[1].parse::<f64>(), caps[2].parse::<f64>()) {
        (Ok(lat), Ok(long)) => Locate {
            lat: Some(CoordValue::Degrees(lat)),
            long: Some(CoordValue::Degrees(long)),
        },
        _ => Locate::unknown(),
    }
}

/// Positional split of a free-text address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressParts {
    pub street: String,
    pub ward: String,
    pub district: String,
    pub province: String,
}

/// Splits a comma-separated address into street/ward/district/province.
/// Fewer than four components collapse everything into `street`; with more
/// than four, the trailing three are ward/district/province and the rest
/// re-joins into `street`. Best effort, not a guaranteed-correct parse.
pub fn split_address(raw: &str) -> AddressParts {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() < 4 {
        return AddressParts {
            street: raw.trim().to_string(),
            ..AddressParts::default()
        };
    }
    AddressParts {
        street: parts[..parts.len() - 3].join(", "),
        ward: parts[parts.len() - 3].to_string(),
        district: parts[parts.len() - 2].to_string(),
        province: parts[parts.len() - 1].to_string(),
    }
}

/// Live-path phones: one contact number or nothing at all.
pub fn phones_or_empty(contact: Option<&str>) -> Vec<String> {
    match contact {
        Some(number) if !number.is_empty() => vec![number.to_string()],
        _ => Vec::new(),
    }
}

/// Import-path phones: the absent case keeps a single empty-string slot.
/// The two paths genuinely disagree on this placeholder; both shapes are
/// kept rather than unified.
pub fn phones_or_blank(contact: Option<&str>) -> Vec<String> {
    match contact {
        Some(number) if !number.is_empty() => vec![number.to_string()],
        _ => vec![String::new()],
    }
}
