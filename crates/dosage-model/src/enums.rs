//! Closed vocabularies used by timing patterns.
//!
//! Each enum serializes to the code used in the exchange format and parses
//! case-insensitively from the forms human-entered schedules arrive in.

use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

/// Day of the week, serialized as its 3-letter lowercase code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Returns the 3-letter lowercase code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Parse a weekday code. Mixed case is accepted and lower-cased on intake.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        Weekday::ALL
            .into_iter()
            .find(|day| day.as_code() == normalized)
            .ok_or_else(|| format!("Unknown weekday code: {s}"))
    }
}

/// Coarse daily time bucket.
///
/// The declaration order is the canonical clinical order used whenever
/// several slots share one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NamedSlot {
    /// Morning (`MORN`).
    Morn,
    /// Noon (`NOON`).
    Noon,
    /// Evening (`EVE`).
    Eve,
    /// Night (`NIGHT`).
    Night,
}

impl NamedSlot {
    /// All slots in canonical order MORN, NOON, EVE, NIGHT.
    pub const ALL: [NamedSlot; 4] = [
        NamedSlot::Morn,
        NamedSlot::Noon,
        NamedSlot::Eve,
        NamedSlot::Night,
    ];

    /// Returns the event-timing code as it appears in the exchange format.
    pub fn as_code(&self) -> &'static str {
        match self {
            NamedSlot::Morn => "MORN",
            NamedSlot::Noon => "NOON",
            NamedSlot::Eve => "EVE",
            NamedSlot::Night => "NIGHT",
        }
    }
}

impl fmt::Display for NamedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for NamedSlot {
    type Err = String;

    /// Parse a slot from its code (`MORN`) or its English name (`morning`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "MORN" | "MORNING" => Ok(NamedSlot::Morn),
            "NOON" => Ok(NamedSlot::Noon),
            "EVE" | "EVENING" => Ok(NamedSlot::Eve),
            "NIGHT" => Ok(NamedSlot::Night),
            _ => Err(format!("Unknown time slot: {s}")),
        }
    }
}

/// Deserialize through `FromStr` so input is accepted in any case.
fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

impl<'de> Deserialize<'de> for NamedSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

/// Unit of time as used by `periodUnit` and duration bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfTime {
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "min")]
    Minute,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "wk")]
    Week,
    #[serde(rename = "mo")]
    Month,
    #[serde(rename = "a")]
    Year,
}

impl UnitOfTime {
    /// Returns the UCUM code.
    pub fn as_code(&self) -> &'static str {
        match self {
            UnitOfTime::Second => "s",
            UnitOfTime::Minute => "min",
            UnitOfTime::Hour => "h",
            UnitOfTime::Day => "d",
            UnitOfTime::Week => "wk",
            UnitOfTime::Month => "mo",
            UnitOfTime::Year => "a",
        }
    }

    /// Display label for duration bounds.
    ///
    /// Only calendar units (d, wk, mo, a) may bound a schedule; all other
    /// units return `None`.
    pub fn duration_label(&self) -> Option<&'static str> {
        match self {
            UnitOfTime::Day => Some("day(s)"),
            UnitOfTime::Week => Some("week(s)"),
            UnitOfTime::Month => Some("month(s)"),
            UnitOfTime::Year => Some("year(s)"),
            UnitOfTime::Second | UnitOfTime::Minute | UnitOfTime::Hour => None,
        }
    }
}

impl fmt::Display for UnitOfTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for UnitOfTime {
    type Err = String;

    /// Parse a UCUM time code. Case-sensitive; surrounding whitespace is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "s" => Ok(UnitOfTime::Second),
            "min" => Ok(UnitOfTime::Minute),
            "h" => Ok(UnitOfTime::Hour),
            "d" => Ok(UnitOfTime::Day),
            "wk" => Ok(UnitOfTime::Week),
            "mo" => Ok(UnitOfTime::Month),
            "a" => Ok(UnitOfTime::Year),
            _ => Err(format!("Unknown unit of time: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_from_str_lowercases() {
        assert_eq!("MON".parse::<Weekday>().unwrap(), Weekday::Mon);
        assert_eq!("Wed".parse::<Weekday>().unwrap(), Weekday::Wed);
        assert_eq!(" sun ".parse::<Weekday>().unwrap(), Weekday::Sun);
        assert!("monday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_named_slot_from_str() {
        assert_eq!("MORN".parse::<NamedSlot>().unwrap(), NamedSlot::Morn);
        assert_eq!("evening".parse::<NamedSlot>().unwrap(), NamedSlot::Eve);
        assert_eq!("night".parse::<NamedSlot>().unwrap(), NamedSlot::Night);
        assert!("afternoon".parse::<NamedSlot>().is_err());
    }

    #[test]
    fn test_named_slot_canonical_order() {
        let mut slots = vec![NamedSlot::Night, NamedSlot::Morn, NamedSlot::Eve];
        slots.sort();
        assert_eq!(slots, vec![NamedSlot::Morn, NamedSlot::Eve, NamedSlot::Night]);
    }

    #[test]
    fn test_duration_labels() {
        assert_eq!(UnitOfTime::Day.duration_label(), Some("day(s)"));
        assert_eq!(UnitOfTime::Week.duration_label(), Some("week(s)"));
        assert_eq!(UnitOfTime::Month.duration_label(), Some("month(s)"));
        assert_eq!(UnitOfTime::Year.duration_label(), Some("year(s)"));
        assert_eq!(UnitOfTime::Hour.duration_label(), None);
    }

    #[test]
    fn test_unit_of_time_codes_round_trip() {
        for code in ["s", "min", "h", "d", "wk", "mo", "a"] {
            assert_eq!(code.parse::<UnitOfTime>().unwrap().as_code(), code);
        }
        assert!("week".parse::<UnitOfTime>().is_err());
    }
}
