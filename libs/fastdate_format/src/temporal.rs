// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Field-value snapshots consumed and produced by compiled formats.
//!
//! A snapshot is a dumb store of calendar fields. Formatting reads fields
//! from it and trusts their values; parsing writes fields into it. No
//! reconciliation between fields (e.g. hour-of-day vs hour + am/pm) happens
//! here; that is the caller's concern.

use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::{OffsetComponents, Tz};

use crate::zone::Zone;

/// A calendar field a pattern directive can read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// 0 = before common era, 1 = common era
    Era,
    Year,
    /// Year of the ISO week (differs from `Year` around January 1st)
    WeekYear,
    /// 1-12
    Month,
    DayOfMonth,
    DayOfYear,
    /// 0 = Sunday .. 6 = Saturday
    DayOfWeek,
    /// Ordinal of this weekday within the month (1-5)
    DayOfWeekInMonth,
    WeekOfYear,
    WeekOfMonth,
    /// 0-23
    HourOfDay,
    /// 0-11, hour within the am/pm half-day
    Hour,
    Minute,
    Second,
    Millisecond,
    /// 0 = AM, 1 = PM
    AmPm,
    /// Standard UTC offset in milliseconds
    ZoneOffset,
    /// Additional DST offset in milliseconds (0 when not in DST)
    DstOffset,
}

/// Mutable access to a field-value snapshot.
///
/// One snapshot belongs to one format or parse call; snapshots must not be
/// shared between threads mid-call.
pub trait Temporal {
    fn get(&self, field: Field) -> i32;
    fn set(&mut self, field: Field, value: i32);
    fn zone(&self) -> Zone;
    fn set_zone(&mut self, zone: Zone);
}

/// A plain owned field-value snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFields {
    pub era: i32,
    pub year: i32,
    pub week_year: i32,
    pub month: i32,
    pub day_of_month: i32,
    pub day_of_year: i32,
    pub day_of_week: i32,
    pub day_of_week_in_month: i32,
    pub week_of_year: i32,
    pub week_of_month: i32,
    pub hour_of_day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub millisecond: i32,
    pub am_pm: i32,
    pub zone_offset_millis: i32,
    pub dst_offset_millis: i32,
    pub zone: Zone,
}

impl Default for DateTimeFields {
    fn default() -> Self {
        Self {
            era: 1,
            year: 1970,
            week_year: 1970,
            month: 1,
            day_of_month: 1,
            day_of_year: 1,
            day_of_week: 4, // 1970-01-01 was a Thursday
            day_of_week_in_month: 1,
            week_of_year: 1,
            week_of_month: 1,
            hour_of_day: 0,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            am_pm: 0,
            zone_offset_millis: 0,
            dst_offset_millis: 0,
            zone: Zone::UTC,
        }
    }
}

impl DateTimeFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from a chrono datetime in a named zone, filling
    /// every field including the zone-offset/DST split.
    pub fn from_datetime(dt: &DateTime<Tz>) -> Self {
        let year = dt.year();
        let (era, display_year) = if year <= 0 { (0, 1 - year) } else { (1, year) };

        let day = dt.day() as i32;
        let dow = dt.weekday().num_days_from_sunday() as i32;
        // Weekday of the first of this month, for week-of-month
        let first_dow = (dow - (day - 1)).rem_euclid(7);

        let hour_of_day = dt.hour() as i32;
        let offset = dt.offset();

        Self {
            era,
            year: display_year,
            week_year: dt.iso_week().year(),
            month: dt.month() as i32,
            day_of_month: day,
            day_of_year: dt.ordinal() as i32,
            day_of_week: dow,
            day_of_week_in_month: (day - 1) / 7 + 1,
            week_of_year: dt.iso_week().week() as i32,
            week_of_month: (day + first_dow - 1) / 7 + 1,
            hour_of_day,
            hour: hour_of_day % 12,
            minute: dt.minute() as i32,
            second: dt.second() as i32,
            millisecond: dt.timestamp_subsec_millis().min(999) as i32,
            am_pm: if hour_of_day >= 12 { 1 } else { 0 },
            zone_offset_millis: offset.base_utc_offset().num_milliseconds() as i32,
            dst_offset_millis: offset.dst_offset().num_milliseconds() as i32,
            zone: Zone::Named(dt.timezone()),
        }
    }
}

impl Temporal for DateTimeFields {
    fn get(&self, field: Field) -> i32 {
        match field {
            Field::Era => self.era,
            Field::Year => self.year,
            Field::WeekYear => self.week_year,
            Field::Month => self.month,
            Field::DayOfMonth => self.day_of_month,
            Field::DayOfYear => self.day_of_year,
            Field::DayOfWeek => self.day_of_week,
            Field::DayOfWeekInMonth => self.day_of_week_in_month,
            Field::WeekOfYear => self.week_of_year,
            Field::WeekOfMonth => self.week_of_month,
            Field::HourOfDay => self.hour_of_day,
            Field::Hour => self.hour,
            Field::Minute => self.minute,
            Field::Second => self.second,
            Field::Millisecond => self.millisecond,
            Field::AmPm => self.am_pm,
            Field::ZoneOffset => self.zone_offset_millis,
            Field::DstOffset => self.dst_offset_millis,
        }
    }

    fn set(&mut self, field: Field, value: i32) {
        match field {
            Field::Era => self.era = value,
            Field::Year => self.year = value,
            Field::WeekYear => self.week_year = value,
            Field::Month => self.month = value,
            Field::DayOfMonth => self.day_of_month = value,
            Field::DayOfYear => self.day_of_year = value,
            Field::DayOfWeek => self.day_of_week = value,
            Field::DayOfWeekInMonth => self.day_of_week_in_month = value,
            Field::WeekOfYear => self.week_of_year = value,
            Field::WeekOfMonth => self.week_of_month = value,
            Field::HourOfDay => self.hour_of_day = value,
            Field::Hour => self.hour = value,
            Field::Minute => self.minute = value,
            Field::Second => self.second = value,
            Field::Millisecond => self.millisecond = value,
            Field::AmPm => self.am_pm = value,
            Field::ZoneOffset => self.zone_offset_millis = value,
            Field::DstOffset => self.dst_offset_millis = value,
        }
    }

    fn zone(&self) -> Zone {
        self.zone
    }

    fn set_zone(&mut self, zone: Zone) {
        self.zone = zone;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn snapshot(tz_name: &str, secs: i64) -> DateTimeFields {
        let tz: Tz = tz_name.parse().unwrap();
        let dt = Utc.timestamp_opt(secs, 0).unwrap().with_timezone(&tz);
        DateTimeFields::from_datetime(&dt)
    }

    #[test]
    fn test_from_datetime_utc() {
        // 2024-03-15 14:30:45 UTC, a Friday
        let fields = snapshot("UTC", 1_710_513_045);
        assert_eq!(fields.year, 2024);
        assert_eq!(fields.month, 3);
        assert_eq!(fields.day_of_month, 15);
        assert_eq!(fields.hour_of_day, 14);
        assert_eq!(fields.hour, 2);
        assert_eq!(fields.am_pm, 1);
        assert_eq!(fields.minute, 30);
        assert_eq!(fields.second, 45);
        assert_eq!(fields.day_of_week, 5); // Friday
        assert_eq!(fields.era, 1);
        assert_eq!(fields.zone_offset_millis, 0);
        assert_eq!(fields.dst_offset_millis, 0);
    }

    #[test]
    fn test_from_datetime_dst_split() {
        // 2024-07-03 in New York: EDT, raw -5h plus 1h DST
        let fields = snapshot("America/New_York", 1_720_000_000);
        assert_eq!(fields.zone_offset_millis, -5 * 3_600_000);
        assert_eq!(fields.dst_offset_millis, 3_600_000);
    }

    #[test]
    fn test_week_of_month() {
        // 2024-03-01 was a Friday; March 15 falls in week 3
        let fields = snapshot("UTC", 1_710_513_045);
        assert_eq!(fields.week_of_month, 3);
        assert_eq!(fields.day_of_week_in_month, 3); // third Friday
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut fields = DateTimeFields::new();
        fields.set(Field::Year, 1999);
        fields.set(Field::Month, 6);
        assert_eq!(fields.get(Field::Year), 1999);
        assert_eq!(fields.get(Field::Month), 6);
    }
}
