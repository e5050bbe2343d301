// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Timezone values used by compiled formats.
//!
//! Two kinds of zone exist: a [`FixedZone`] with a constant UTC offset and no
//! daylight saving, and a named IANA zone backed by chrono-tz. Named zones
//! expose a raw offset and a DST savings amount; fixed zones never observe
//! DST.

use std::fmt;
use std::str::FromStr;

use chrono::{TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

pub(crate) const MILLIS_PER_MINUTE: i32 = 60_000;
pub(crate) const MILLIS_PER_HOUR: i32 = 3_600_000;

// Reference instants for probing a named zone's offset split. chrono-tz only
// exposes offsets per instant; probing January and July covers both
// hemispheres' DST windows.
const REF_JANUARY: i64 = 1_704_067_200; // 2024-01-01 00:00:00 UTC
const REF_JULY: i64 = 1_720_000_000; // 2024-07-03 10:26:40 UTC

/// A timezone with a constant UTC offset and no daylight saving transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedZone {
    offset_millis: i32,
}

impl FixedZone {
    /// The zero-offset fixed zone.
    pub const UTC: FixedZone = FixedZone { offset_millis: 0 };

    /// Create a fixed zone from a UTC offset in milliseconds.
    pub fn from_millis(offset_millis: i32) -> Self {
        Self { offset_millis }
    }

    /// The UTC offset in milliseconds (positive = east of UTC).
    pub fn offset_millis(&self) -> i32 {
        self.offset_millis
    }

    /// Parse a GMT-style offset string into a fixed zone.
    ///
    /// Accepts `"Z"`, `"UTC"`, `"GMT"`, `"GMT+H"`, `"GMT-HH:MM"`, and bare
    /// `"+H[H][:MM]"` forms. Returns `None` when the string is not a
    /// recognized offset; callers fall back to a named-zone lookup.
    pub fn parse(s: &str) -> Option<Self> {
        if matches!(s, "Z" | "UTC" | "GMT") {
            return Some(Self::UTC);
        }
        let rest = s.strip_prefix("GMT").unwrap_or(s);
        let bytes = rest.as_bytes();
        if bytes.is_empty() {
            return None;
        }

        let sign = match bytes[0] {
            b'+' => 1,
            b'-' => -1,
            _ => return None,
        };

        let mut i = 1;
        let mut hours: i32 = 0;
        let mut hour_digits = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() && hour_digits < 2 {
            hours = hours * 10 + (bytes[i] - b'0') as i32;
            i += 1;
            hour_digits += 1;
        }
        if hour_digits == 0 {
            return None;
        }

        let mut minutes: i32 = 0;
        if i < bytes.len() {
            if bytes[i] != b':' {
                return None;
            }
            i += 1;
            let mut minute_digits = 0;
            while i < bytes.len() && bytes[i].is_ascii_digit() && minute_digits < 2 {
                minutes = minutes * 10 + (bytes[i] - b'0') as i32;
                i += 1;
                minute_digits += 1;
            }
            if minute_digits != 2 {
                return None;
            }
        }

        if i != bytes.len() || hours > 23 || minutes > 59 {
            return None;
        }

        Some(Self::from_millis(
            sign * (hours * MILLIS_PER_HOUR + minutes * MILLIS_PER_MINUTE),
        ))
    }
}

impl fmt::Display for FixedZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_mins = self.offset_millis / MILLIS_PER_MINUTE;
        let hours = total_mins / 60;
        let mins = (total_mins % 60).abs();
        if self.offset_millis < 0 {
            write!(f, "GMT-{:02}:{:02}", -hours, mins)
        } else {
            write!(f, "GMT+{:02}:{:02}", hours, mins)
        }
    }
}

/// A timezone bound to a compiled format: either fixed-offset or IANA-named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Constant offset, never DST
    Fixed(FixedZone),
    /// Named IANA timezone backed by chrono-tz
    Named(Tz),
}

impl Zone {
    /// The UTC zone.
    pub const UTC: Zone = Zone::Fixed(FixedZone::UTC);

    /// Resolve a zone id: GMT-style offsets become fixed zones, anything
    /// else is looked up in the IANA registry. `None` if neither matches.
    pub fn lookup(id: &str) -> Option<Zone> {
        if let Some(fixed) = FixedZone::parse(id) {
            return Some(Zone::Fixed(fixed));
        }
        Tz::from_str(id).ok().map(Zone::Named)
    }

    /// The identifier used in cache keys and display.
    pub fn id(&self) -> String {
        match self {
            Zone::Fixed(fixed) => fixed.to_string(),
            Zone::Named(tz) => tz.name().to_string(),
        }
    }

    /// The standard-time UTC offset in milliseconds.
    pub fn raw_offset_millis(&self) -> i32 {
        match self {
            Zone::Fixed(fixed) => fixed.offset_millis(),
            Zone::Named(tz) => offset_split(tz).0,
        }
    }

    /// The additional offset in milliseconds while DST is in effect,
    /// or 0 for zones that never observe DST.
    pub fn dst_savings_millis(&self) -> i32 {
        match self {
            Zone::Fixed(_) => 0,
            Zone::Named(tz) => offset_split(tz).1,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Fixed(fixed) => fixed.fmt(f),
            Zone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Probe a named zone's (raw offset, DST savings) in milliseconds.
fn offset_split(tz: &Tz) -> (i32, i32) {
    let jan = components_at(tz, REF_JANUARY);
    let jul = components_at(tz, REF_JULY);
    (jan.0, jan.1.max(jul.1))
}

fn components_at(tz: &Tz, timestamp_secs: i64) -> (i32, i32) {
    let utc = match Utc.timestamp_opt(timestamp_secs, 0).single() {
        Some(dt) => dt,
        None => return (0, 0),
    };
    let local = utc.with_timezone(tz);
    let offset = local.offset();
    (
        offset.base_utc_offset().num_milliseconds() as i32,
        offset.dst_offset().num_milliseconds() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_aliases() {
        assert_eq!(FixedZone::parse("Z"), Some(FixedZone::UTC));
        assert_eq!(FixedZone::parse("UTC"), Some(FixedZone::UTC));
        assert_eq!(FixedZone::parse("GMT"), Some(FixedZone::UTC));
    }

    #[test]
    fn test_parse_gmt_offsets() {
        assert_eq!(
            FixedZone::parse("GMT+2").unwrap().offset_millis(),
            7_200_000
        );
        assert_eq!(
            FixedZone::parse("GMT-05:30").unwrap().offset_millis(),
            -(5 * MILLIS_PER_HOUR + 30 * MILLIS_PER_MINUTE)
        );
        assert_eq!(
            FixedZone::parse("GMT+10").unwrap().offset_millis(),
            10 * MILLIS_PER_HOUR
        );
    }

    #[test]
    fn test_parse_bare_offsets() {
        assert_eq!(
            FixedZone::parse("+02:00").unwrap().offset_millis(),
            7_200_000
        );
        assert_eq!(
            FixedZone::parse("-7").unwrap().offset_millis(),
            -7 * MILLIS_PER_HOUR
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(FixedZone::parse("bogus"), None);
        assert_eq!(FixedZone::parse(""), None);
        assert_eq!(FixedZone::parse("GMT+"), None);
        assert_eq!(FixedZone::parse("GMT+2:3"), None);
        assert_eq!(FixedZone::parse("+25"), None);
        assert_eq!(FixedZone::parse("+02:60"), None);
        assert_eq!(FixedZone::parse("+02:00x"), None);
    }

    #[test]
    fn test_fixed_display() {
        assert_eq!(FixedZone::from_millis(7_200_000).to_string(), "GMT+02:00");
        assert_eq!(
            FixedZone::from_millis(-(5 * MILLIS_PER_HOUR + 30 * MILLIS_PER_MINUTE)).to_string(),
            "GMT-05:30"
        );
        assert_eq!(FixedZone::UTC.to_string(), "GMT+00:00");
    }

    #[test]
    fn test_zone_lookup() {
        assert_eq!(
            Zone::lookup("GMT+2"),
            Some(Zone::Fixed(FixedZone::from_millis(7_200_000)))
        );
        let zone = Zone::lookup("America/New_York").unwrap();
        assert_eq!(zone.id(), "America/New_York");
        assert_eq!(Zone::lookup("Invalid/Zone"), None);
    }

    #[test]
    fn test_named_offset_split() {
        let zone = Zone::lookup("America/New_York").unwrap();
        assert_eq!(zone.raw_offset_millis(), -5 * MILLIS_PER_HOUR);
        assert_eq!(zone.dst_savings_millis(), MILLIS_PER_HOUR);

        // Japan has no DST
        let zone = Zone::lookup("Asia/Tokyo").unwrap();
        assert_eq!(zone.raw_offset_millis(), 9 * MILLIS_PER_HOUR);
        assert_eq!(zone.dst_savings_millis(), 0);
    }

    #[test]
    fn test_fixed_zone_never_dst() {
        let zone = Zone::Fixed(FixedZone::from_millis(7_200_000));
        assert_eq!(zone.raw_offset_millis(), 7_200_000);
        assert_eq!(zone.dst_savings_millis(), 0);
    }
}
