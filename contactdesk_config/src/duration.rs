use std::{ops::Deref, str::FromStr};

use serde::{de, Deserialize};

/// A duration written as whitespace separated parts like `1d 2h 3m 4s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Duration {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(0u64, |total, part| {
                let split = part
                    .find(|c: char| !c.is_ascii_digit())
                    .ok_or("Missing unit")?;
                let (value, unit) = part.split_at(split);
                let value = value.parse::<u64>().map_err(|_| "Invalid number")?;
                let factor = match unit {
                    "s" => 1,
                    "m" => 60,
                    "h" => 60 * 60,
                    "d" => 24 * 60 * 60,
                    _ => return Err("Invalid unit"),
                };
                value
                    .checked_mul(factor)
                    .and_then(|x| total.checked_add(x))
                    .ok_or("Duration too long")
            })
            .map(|secs| Self(std::time::Duration::from_secs(secs)))
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(|err| de::Error::custom(format!("Invalid duration: {err}")))
    }
}
