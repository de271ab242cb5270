//! Season classification.
//!
//! A [`SeasonCalendar`] is an ordered table of inclusive month/day windows. The first
//! window containing a date decides its season; dates outside every window fall back to
//! [`Season::MidSeason`]. A window whose start is after its end wraps the new year, so
//! `12-20..01-10` covers both the end of December and the start of January of any year.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::error::config::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Season {
    HighSeason,
    LowSeason,
    MidSeason,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HighSeason => "highSeason",
            Self::LowSeason => "lowSeason",
            Self::MidSeason => "midSeason",
        };
        f.write_str(name)
    }
}

/// Calendar day without a year, written `MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a month/day, accepting Feb 29.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // 2000 is a leap year, so every day that exists in some year is accepted
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| Self { month, day })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl FromStr for MonthDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("expected MM-DD, got {s:?}"))?;
        let month = month
            .parse()
            .map_err(|_| format!("invalid month in {s:?}"))?;
        let day = day.parse().map_err(|_| format!("invalid day in {s:?}"))?;

        Self::new(month, day).ok_or_else(|| format!("{s:?} is not a calendar day"))
    }
}

impl TryFrom<String> for MonthDay {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Inclusive window of the year assigned to one season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWindow {
    pub start: MonthDay,
    pub end: MonthDay,
    pub season: Season,
}

impl SeasonWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        let day = MonthDay::of(date);

        if self.start <= self.end {
            self.start <= day && day <= self.end
        } else {
            day >= self.start || day <= self.end
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonCalendar {
    windows: Vec<SeasonWindow>,
    fallback: Season,
}

impl SeasonCalendar {
    pub const ENV_VAR: &'static str = "SEASON_CALENDAR";

    pub fn new(windows: Vec<SeasonWindow>, fallback: Season) -> Self {
        Self { windows, fallback }
    }

    /// Parses a calendar from a JSON array of windows.
    ///
    /// ```json
    /// [{ "start": "07-01", "end": "08-31", "season": "highSeason" }]
    /// ```
    ///
    /// Dates outside every listed window are mid season.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let windows: Vec<SeasonWindow> =
            serde_json::from_str(json).map_err(|e| ConfigError::invalid(Self::ENV_VAR, e))?;

        Ok(Self::new(windows, Season::MidSeason))
    }

    pub fn windows(&self) -> &[SeasonWindow] {
        &self.windows
    }

    /// Returns the season of the first window containing `date`.
    pub fn classify(&self, date: NaiveDate) -> Season {
        self.windows
            .iter()
            .find(|window| window.contains(date))
            .map(|window| window.season)
            .unwrap_or(self.fallback)
    }
}

impl Default for SeasonCalendar {
    /// High season over the northern summer and the year-end holidays, low season
    /// through April and most of May, mid season otherwise.
    fn default() -> Self {
        let window = |start: (u32, u32), end: (u32, u32), season| SeasonWindow {
            start: MonthDay {
                month: start.0,
                day: start.1,
            },
            end: MonthDay {
                month: end.0,
                day: end.1,
            },
            season,
        };

        Self::new(
            vec![
                window((7, 1), (8, 31), Season::HighSeason),
                window((12, 20), (1, 10), Season::HighSeason),
                window((4, 1), (5, 19), Season::LowSeason),
            ],
            Season::MidSeason,
        )
    }
}

/// Classifies `today` with the default calendar.
pub fn classify_season(today: NaiveDate) -> Season {
    SeasonCalendar::default().classify(today)
}
