// Settings module
// User-tunable display preferences, stored as TOML

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the event store picks a colour tag for a new event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorAssignment {
    /// Cycle through the palette in creation order
    #[default]
    Rotating,
    /// Derive the tag from a hash of the event id
    Hashed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday ... 6 = Saturday
    pub first_day_of_week: u8,
    pub color_assignment: ColorAssignment,
    pub show_week_numbers: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsValidationError {
    #[error("first_day_of_week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidFirstDayOfWeek(u8),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            color_assignment: ColorAssignment::Rotating,
            show_week_numbers: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.first_day_of_week > 6 {
            return Err(SettingsValidationError::InvalidFirstDayOfWeek(
                self.first_day_of_week,
            ));
        }
        Ok(())
    }

    /// The configured week start as a chrono weekday.
    ///
    /// Out-of-range values fall back to Sunday; call [`Settings::validate`]
    /// to surface them instead.
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
