use chrono::Timelike;
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Wall clock time of day with minute resolution, formatted as `HH:MM`.
///
/// There is no timezone attached, it is always interpreted in the local
/// timezone of whoever evaluates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduledTime {
    hour: u32,
    minute: u32,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidScheduledTimeError {
    #[error("Scheduled time: {0} is not formatted as HH:MM")]
    Malformed(String),
    #[error("Scheduled time: {0} is out of range")]
    OutOfRange(String),
}

impl ScheduledTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, InvalidScheduledTimeError> {
        if hour > 23 || minute > 59 {
            return Err(InvalidScheduledTimeError::OutOfRange(format!(
                "{}:{}",
                hour, minute
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Truncates the given time to the minute
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl Display for ScheduledTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ScheduledTime {
    type Err = InvalidScheduledTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidScheduledTimeError::Malformed(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(malformed)?;
        if hour.len() != 2
            || minute.len() != 2
            || !hour.chars().chain(minute.chars()).all(|c| c.is_ascii_digit())
        {
            return Err(malformed());
        }
        let hour = hour.parse::<u32>().map_err(|_| malformed())?;
        let minute = minute.parse::<u32>().map_err(|_| malformed())?;
        Self::new(hour, minute).map_err(|_| InvalidScheduledTimeError::OutOfRange(s.to_string()))
    }
}

impl Serialize for ScheduledTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ScheduledTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ScheduledTimeVisitor;

        impl<'de> Visitor<'de> for ScheduledTimeVisitor {
            type Value = ScheduledTime;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A time of day formatted as HH:MM")
            }

            fn visit_str<E>(self, value: &str) -> Result<ScheduledTime, E>
            where
                E: serde::de::Error,
            {
                value.parse::<ScheduledTime>().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ScheduledTimeVisitor)
    }
}
