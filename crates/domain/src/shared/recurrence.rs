use chrono::Weekday;
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The set of weekdays an `Alarm` recurs on.
///
/// Serialized as a list of lowercase weekday names, e.g. `["monday", "friday"]`.
/// Days are kept unique and ordered from monday to sunday.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Recurrence {
    days: Vec<Weekday>,
}

impl Recurrence {
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut recurrence = Self { days: Vec::new() };
        for day in days {
            recurrence.insert(day);
        }
        recurrence
    }

    /// Monday to friday
    pub fn weekdays() -> Self {
        Self::new([
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ])
    }

    pub fn insert(&mut self, day: Weekday) {
        if self.contains(day) {
            return;
        }
        self.days.push(day);
        self.days.sort_by_key(|d| d.num_days_from_monday());
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn day_names(&self) -> Vec<&'static str> {
        self.days.iter().map(|d| weekday_to_str(*d)).collect()
    }
}

/// Weekday name in the format alarms are stored with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekdayName(pub Weekday);

impl Display for WeekdayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", weekday_to_str(self.0))
    }
}

impl FromStr for WeekdayName {
    type Err = InvalidWeekdayError;

    fn from_str(day: &str) -> Result<Self, Self::Err> {
        str_to_weekday(day).map(Self)
    }
}

pub fn weekday_to_str(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn str_to_weekday(day: &str) -> Result<Weekday, InvalidWeekdayError> {
    match day.trim().to_lowercase().as_str() {
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        "sunday" => Ok(Weekday::Sun),
        _ => Err(InvalidWeekdayError::InvalidWeekdayName(day.to_string())),
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidWeekdayError {
    #[error("Invalid weekday specified: {0}")]
    InvalidWeekdayName(String),
}

impl TryFrom<Vec<String>> for Recurrence {
    type Error = InvalidWeekdayError;

    fn try_from(days: Vec<String>) -> Result<Self, Self::Error> {
        let days = days
            .iter()
            .map(|d| str_to_weekday(d))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(days))
    }
}

impl Serialize for Recurrence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.day_names())
    }
}

impl<'de> Deserialize<'de> for Recurrence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RecurrenceVisitor;

        impl<'de> Visitor<'de> for RecurrenceVisitor {
            type Value = Recurrence;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A list of weekday names")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Recurrence, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut recurrence = Recurrence::default();
                while let Some(day) = seq.next_element::<String>()? {
                    let day = str_to_weekday(&day).map_err(serde::de::Error::custom)?;
                    recurrence.insert(day);
                }
                Ok(recurrence)
            }
        }

        deserializer.deserialize_seq(RecurrenceVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_weekday_names() {
        assert_eq!("monday".parse::<WeekdayName>().unwrap().0, Weekday::Mon);
        assert_eq!("Sunday".parse::<WeekdayName>().unwrap().0, Weekday::Sun);
        assert_eq!(" FRIDAY ".parse::<WeekdayName>().unwrap().0, Weekday::Fri);
        assert!("mon".parse::<WeekdayName>().is_err());
        assert!("".parse::<WeekdayName>().is_err());
        assert_eq!(WeekdayName(Weekday::Wed).to_string(), "wednesday");
    }

    #[test]
    fn recurrence_is_unique_and_ordered() {
        let recurrence = Recurrence::new([Weekday::Sun, Weekday::Mon, Weekday::Sun]);
        assert_eq!(recurrence.days(), &[Weekday::Mon, Weekday::Sun]);
        assert!(recurrence.contains(Weekday::Sun));
        assert!(!recurrence.contains(Weekday::Tue));
    }

    #[test]
    fn deserializes_recurrence() {
        let recurrence: Recurrence =
            serde_json::from_str(r#"["friday", "Monday", "friday"]"#).unwrap();
        assert_eq!(recurrence.day_names(), vec!["monday", "friday"]);
        assert_eq!(
            serde_json::to_string(&recurrence).unwrap(),
            r#"["monday","friday"]"#
        );

        assert!(serde_json::from_str::<Recurrence>(r#"["funday"]"#).is_err());
        assert!(serde_json::from_str::<Recurrence>(r#"[]"#).unwrap().is_empty());
    }
}
