// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Baked locale calendar data for date/time formatting and parsing.
//!
//! This crate contains pre-extracted display names and style patterns from
//! the Unicode CLDR project for a subset of common locales, enabling
//! locale-aware date/time handling without requiring the full ICU library.
//!
//! Data sourced from: https://github.com/unicode-org/cldr-json

/// Locale-specific calendar display names and style patterns.
#[derive(Debug, Clone)]
pub struct LocaleData {
    /// Canonical locale tag (lowercase, hyphenated)
    pub tag: &'static str,
    /// Era names (0 = before common era, 1 = common era)
    pub eras: [&'static str; 2],
    /// Month names (wide format, stored 0-indexed for months 1-12)
    pub months_wide: [&'static str; 12],
    /// Month names (abbreviated format)
    pub months_abbr: [&'static str; 12],
    /// Weekday names (wide format, 0 = Sunday)
    pub days_wide: [&'static str; 7],
    /// Weekday names (abbreviated format)
    pub days_abbr: [&'static str; 7],
    /// AM marker
    pub am: &'static str,
    /// PM marker
    pub pm: &'static str,
    /// Date format patterns (full, long, medium, short)
    pub date_formats: StylePatterns,
    /// Time format patterns (full, long, medium, short)
    pub time_formats: StylePatterns,
    /// Pattern for combining date and time (e.g., "{1}, {0}")
    pub datetime_pattern: &'static str,
    /// Timezone display names, sorted by zone id
    pub zones: &'static [ZoneNames],
    /// Set for locales whose calendar does not cover all historical dates.
    /// The text is appended to parse error messages.
    pub restricted_range: Option<&'static str>,
}

/// Format patterns for the four canned styles.
#[derive(Debug, Clone)]
pub struct StylePatterns {
    pub full: &'static str,
    pub long: &'static str,
    pub medium: &'static str,
    pub short: &'static str,
}

/// Display names for one timezone: standard and daylight, long and short.
#[derive(Debug, Clone, Copy)]
pub struct ZoneNames {
    /// IANA zone id (e.g., "America/New_York")
    pub id: &'static str,
    pub std_long: &'static str,
    pub std_short: &'static str,
    pub dst_long: &'static str,
    pub dst_short: &'static str,
}

impl LocaleData {
    /// Look up display names for a zone id. The table is sorted by id.
    pub fn zone_names(&self, id: &str) -> Option<&'static ZoneNames> {
        self.zones
            .binary_search_by(|z| z.id.cmp(id))
            .ok()
            .map(|idx| &self.zones[idx])
    }
}

/// Get locale data for a given locale tag.
/// Falls back to en-US for unknown locales.
pub fn get_locale_data(locale: &str) -> &'static LocaleData {
    // Normalize locale: lowercase, handle both - and _
    let locale_lower = locale.to_lowercase().replace('_', "-");

    // Try exact match first, then language-only fallback
    match locale_lower.as_str() {
        "en-us" | "en" => &EN_US,
        "en-gb" | "en-au" | "en-nz" | "en-ie" => &EN_GB,
        "de" | "de-de" | "de-at" | "de-ch" => &DE,
        "fr" | "fr-fr" | "fr-ca" | "fr-be" | "fr-ch" => &FR,
        "es" | "es-es" | "es-mx" | "es-ar" => &ES,
        "it" | "it-it" => &IT,
        "pt" | "pt-pt" | "pt-br" => &PT,
        "nl" | "nl-nl" | "nl-be" => &NL,
        "ja" | "ja-jp" => &JA,
        "ja-jp-u-ca-japanese" => &JA_JAPANESE,
        _ => {
            // Try to match just the language part
            match locale_lower.split('-').next() {
                Some("en") => &EN_US,
                Some("de") => &DE,
                Some("fr") => &FR,
                Some("es") => &ES,
                Some("it") => &IT,
                Some("pt") => &PT,
                Some("nl") => &NL,
                Some("ja") => &JA,
                _ => &EN_US,
            }
        },
    }
}

// Timezone display names are predominantly English across CLDR locales;
// one master table is shared by every baked locale. Sorted by zone id.
static ZONES: [ZoneNames; 10] = [
    ZoneNames {
        id: "America/Chicago",
        std_long: "Central Standard Time",
        std_short: "CST",
        dst_long: "Central Daylight Time",
        dst_short: "CDT",
    },
    ZoneNames {
        id: "America/Denver",
        std_long: "Mountain Standard Time",
        std_short: "MST",
        dst_long: "Mountain Daylight Time",
        dst_short: "MDT",
    },
    ZoneNames {
        id: "America/Los_Angeles",
        std_long: "Pacific Standard Time",
        std_short: "PST",
        dst_long: "Pacific Daylight Time",
        dst_short: "PDT",
    },
    ZoneNames {
        id: "America/New_York",
        std_long: "Eastern Standard Time",
        std_short: "EST",
        dst_long: "Eastern Daylight Time",
        dst_short: "EDT",
    },
    ZoneNames {
        id: "Asia/Tokyo",
        std_long: "Japan Standard Time",
        std_short: "JST",
        dst_long: "Japan Daylight Time",
        dst_short: "JDT",
    },
    ZoneNames {
        id: "Australia/Sydney",
        std_long: "Australian Eastern Standard Time",
        std_short: "AEST",
        dst_long: "Australian Eastern Daylight Time",
        dst_short: "AEDT",
    },
    ZoneNames {
        id: "Europe/Berlin",
        std_long: "Central European Standard Time",
        std_short: "CET",
        dst_long: "Central European Summer Time",
        dst_short: "CEST",
    },
    ZoneNames {
        id: "Europe/London",
        std_long: "Greenwich Mean Time",
        std_short: "GMT",
        dst_long: "British Summer Time",
        dst_short: "BST",
    },
    ZoneNames {
        id: "Europe/Paris",
        std_long: "Central European Standard Time",
        std_short: "CET",
        dst_long: "Central European Summer Time",
        dst_short: "CEST",
    },
    ZoneNames {
        id: "UTC",
        std_long: "Coordinated Universal Time",
        std_short: "UTC",
        dst_long: "Coordinated Universal Time",
        dst_short: "UTC",
    },
];

const EN_MONTHS_WIDE: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const EN_MONTHS_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_DAYS_WIDE: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const EN_DAYS_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// English (US) - en-US
static EN_US: LocaleData = LocaleData {
    tag: "en-us",
    eras: ["BC", "AD"],
    months_wide: EN_MONTHS_WIDE,
    months_abbr: EN_MONTHS_ABBR,
    days_wide: EN_DAYS_WIDE,
    days_abbr: EN_DAYS_ABBR,
    am: "AM",
    pm: "PM",
    date_formats: StylePatterns {
        full: "EEEE, MMMM d, y",
        long: "MMMM d, y",
        medium: "MMM d, y",
        short: "M/d/yy",
    },
    time_formats: StylePatterns {
        full: "h:mm:ss a zzzz",
        long: "h:mm:ss a z",
        medium: "h:mm:ss a",
        short: "h:mm a",
    },
    datetime_pattern: "{1}, {0}",
    zones: &ZONES,
    restricted_range: None,
};

// English (GB) - en-GB
static EN_GB: LocaleData = LocaleData {
    tag: "en-gb",
    eras: ["BC", "AD"],
    months_wide: EN_MONTHS_WIDE,
    months_abbr: EN_MONTHS_ABBR,
    days_wide: EN_DAYS_WIDE,
    days_abbr: EN_DAYS_ABBR,
    am: "am",
    pm: "pm",
    date_formats: StylePatterns {
        full: "EEEE, d MMMM y",
        long: "d MMMM y",
        medium: "d MMM y",
        short: "dd/MM/y",
    },
    time_formats: StylePatterns {
        full: "HH:mm:ss zzzz",
        long: "HH:mm:ss z",
        medium: "HH:mm:ss",
        short: "HH:mm",
    },
    datetime_pattern: "{1}, {0}",
    zones: &ZONES,
    restricted_range: None,
};

// German - de
static DE: LocaleData = LocaleData {
    tag: "de",
    eras: ["v. Chr.", "n. Chr."],
    months_wide: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    months_abbr: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.",
        "Dez.",
    ],
    days_wide: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    days_abbr: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    am: "AM",
    pm: "PM",
    date_formats: StylePatterns {
        full: "EEEE, d. MMMM y",
        long: "d. MMMM y",
        medium: "dd.MM.y",
        short: "dd.MM.yy",
    },
    time_formats: StylePatterns {
        full: "HH:mm:ss zzzz",
        long: "HH:mm:ss z",
        medium: "HH:mm:ss",
        short: "HH:mm",
    },
    datetime_pattern: "{1}, {0}",
    zones: &ZONES,
    restricted_range: None,
};

// French - fr
static FR: LocaleData = LocaleData {
    tag: "fr",
    eras: ["av. J.-C.", "ap. J.-C."],
    months_wide: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    months_abbr: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    days_wide: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    days_abbr: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    am: "AM",
    pm: "PM",
    date_formats: StylePatterns {
        full: "EEEE d MMMM y",
        long: "d MMMM y",
        medium: "d MMM y",
        short: "dd/MM/y",
    },
    time_formats: StylePatterns {
        full: "HH:mm:ss zzzz",
        long: "HH:mm:ss z",
        medium: "HH:mm:ss",
        short: "HH:mm",
    },
    datetime_pattern: "{1}, {0}",
    zones: &ZONES,
    restricted_range: None,
};

// Spanish - es
static ES: LocaleData = LocaleData {
    tag: "es",
    eras: ["a. C.", "d. C."],
    months_wide: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    months_abbr: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    days_wide: [
        "domingo",
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
    ],
    days_abbr: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
    am: "a.\u{a0}m.",
    pm: "p.\u{a0}m.",
    date_formats: StylePatterns {
        full: "EEEE, d 'de' MMMM 'de' y",
        long: "d 'de' MMMM 'de' y",
        medium: "d MMM y",
        short: "d/M/yy",
    },
    time_formats: StylePatterns {
        full: "H:mm:ss zzzz",
        long: "H:mm:ss z",
        medium: "H:mm:ss",
        short: "H:mm",
    },
    datetime_pattern: "{1}, {0}",
    zones: &ZONES,
    restricted_range: None,
};

// Italian - it
static IT: LocaleData = LocaleData {
    tag: "it",
    eras: ["a.C.", "d.C."],
    months_wide: [
        "gennaio",
        "febbraio",
        "marzo",
        "aprile",
        "maggio",
        "giugno",
        "luglio",
        "agosto",
        "settembre",
        "ottobre",
        "novembre",
        "dicembre",
    ],
    months_abbr: [
        "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
    ],
    days_wide: [
        "domenica",
        "lunedì",
        "martedì",
        "mercoledì",
        "giovedì",
        "venerdì",
        "sabato",
    ],
    days_abbr: ["dom", "lun", "mar", "mer", "gio", "ven", "sab"],
    am: "AM",
    pm: "PM",
    date_formats: StylePatterns {
        full: "EEEE d MMMM y",
        long: "d MMMM y",
        medium: "d MMM y",
        short: "dd/MM/yy",
    },
    time_formats: StylePatterns {
        full: "HH:mm:ss zzzz",
        long: "HH:mm:ss z",
        medium: "HH:mm:ss",
        short: "HH:mm",
    },
    datetime_pattern: "{1}, {0}",
    zones: &ZONES,
    restricted_range: None,
};

// Portuguese - pt
static PT: LocaleData = LocaleData {
    tag: "pt",
    eras: ["a.C.", "d.C."],
    months_wide: [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ],
    months_abbr: [
        "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
    ],
    days_wide: [
        "domingo",
        "segunda-feira",
        "terça-feira",
        "quarta-feira",
        "quinta-feira",
        "sexta-feira",
        "sábado",
    ],
    days_abbr: ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"],
    am: "AM",
    pm: "PM",
    date_formats: StylePatterns {
        full: "EEEE, d 'de' MMMM 'de' y",
        long: "d 'de' MMMM 'de' y",
        medium: "d 'de' MMM 'de' y",
        short: "dd/MM/y",
    },
    time_formats: StylePatterns {
        full: "HH:mm:ss zzzz",
        long: "HH:mm:ss z",
        medium: "HH:mm:ss",
        short: "HH:mm",
    },
    datetime_pattern: "{1}, {0}",
    zones: &ZONES,
    restricted_range: None,
};

// Dutch - nl
static NL: LocaleData = LocaleData {
    tag: "nl",
    eras: ["v.Chr.", "n.Chr."],
    months_wide: [
        "januari",
        "februari",
        "maart",
        "april",
        "mei",
        "juni",
        "juli",
        "augustus",
        "september",
        "oktober",
        "november",
        "december",
    ],
    months_abbr: [
        "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
    ],
    days_wide: [
        "zondag",
        "maandag",
        "dinsdag",
        "woensdag",
        "donderdag",
        "vrijdag",
        "zaterdag",
    ],
    days_abbr: ["zo", "ma", "di", "wo", "do", "vr", "za"],
    am: "a.m.",
    pm: "p.m.",
    date_formats: StylePatterns {
        full: "EEEE d MMMM y",
        long: "d MMMM y",
        medium: "d MMM y",
        short: "dd-MM-y",
    },
    time_formats: StylePatterns {
        full: "HH:mm:ss zzzz",
        long: "HH:mm:ss z",
        medium: "HH:mm:ss",
        short: "HH:mm",
    },
    datetime_pattern: "{1}, {0}",
    zones: &ZONES,
    restricted_range: None,
};

const JA_ERAS: [&str; 2] = ["紀元前", "西暦"];
const JA_MONTHS: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];
const JA_DAYS_WIDE: [&str; 7] = [
    "日曜日",
    "月曜日",
    "火曜日",
    "水曜日",
    "木曜日",
    "金曜日",
    "土曜日",
];
const JA_DAYS_ABBR: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

// Japanese - ja
static JA: LocaleData = LocaleData {
    tag: "ja",
    eras: JA_ERAS,
    months_wide: JA_MONTHS,
    months_abbr: JA_MONTHS,
    days_wide: JA_DAYS_WIDE,
    days_abbr: JA_DAYS_ABBR,
    am: "午前",
    pm: "午後",
    date_formats: StylePatterns {
        full: "y年M月d日EEEE",
        long: "y年M月d日",
        medium: "y/MM/dd",
        short: "y/MM/dd",
    },
    time_formats: StylePatterns {
        full: "H時mm分ss秒 zzzz",
        long: "H:mm:ss z",
        medium: "H:mm:ss",
        short: "H:mm",
    },
    datetime_pattern: "{1} {0}",
    zones: &ZONES,
    restricted_range: None,
};

// Japanese imperial calendar variant - ja-JP-u-ca-japanese.
// The imperial calendar starts at Meiji 1; two-digit years are anchored to a
// fixed epoch and parse errors carry a range hint.
static JA_JAPANESE: LocaleData = LocaleData {
    tag: "ja-jp-u-ca-japanese",
    eras: JA_ERAS,
    months_wide: JA_MONTHS,
    months_abbr: JA_MONTHS,
    days_wide: JA_DAYS_WIDE,
    days_abbr: JA_DAYS_ABBR,
    am: "午前",
    pm: "午後",
    date_formats: StylePatterns {
        full: "y年M月d日EEEE",
        long: "y年M月d日",
        medium: "y/MM/dd",
        short: "y/MM/dd",
    },
    time_formats: StylePatterns {
        full: "H時mm分ss秒 zzzz",
        long: "H:mm:ss z",
        medium: "H:mm:ss",
        short: "H:mm",
    },
    datetime_pattern: "{1} {0}",
    zones: &ZONES,
    restricted_range: Some("the Japanese imperial calendar does not support dates before 1868 AD"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(get_locale_data("en-US").tag, "en-us");
        assert_eq!(get_locale_data("de-DE").tag, "de");
        assert_eq!(get_locale_data("ja").tag, "ja");
    }

    #[test]
    fn test_normalization() {
        assert_eq!(get_locale_data("de_AT").tag, "de");
        assert_eq!(get_locale_data("EN_gb").tag, "en-gb");
    }

    #[test]
    fn test_language_fallback() {
        assert_eq!(get_locale_data("fr-LU").tag, "fr");
        assert_eq!(get_locale_data("pt-AO").tag, "pt");
    }

    #[test]
    fn test_unknown_falls_back_to_en_us() {
        assert_eq!(get_locale_data("xx-YY").tag, "en-us");
        assert_eq!(get_locale_data("").tag, "en-us");
    }

    #[test]
    fn test_imperial_variant() {
        let locale = get_locale_data("ja-JP-u-ca-japanese");
        assert!(locale.restricted_range.is_some());
        assert_eq!(locale.am, "午前");
    }

    #[test]
    fn test_zone_names_sorted() {
        let ids: Vec<&str> = ZONES.iter().map(|z| z.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_zone_lookup() {
        let locale = get_locale_data("en-US");
        let names = locale.zone_names("America/New_York").unwrap();
        assert_eq!(names.std_short, "EST");
        assert_eq!(names.dst_long, "Eastern Daylight Time");
        assert!(locale.zone_names("Mars/Olympus_Mons").is_none());
    }
}
