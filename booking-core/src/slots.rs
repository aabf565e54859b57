/// Fixed option sets offered by the guest and time steps
///
/// Both groups are single-choice: the wizard only ever records one value
/// per group, and selecting a new one replaces the old.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// First seating of the day, in minutes after midnight (12:00 PM)
const FIRST_SLOT_MINUTES: u16 = 12 * 60;

/// Spacing between seatings
const SLOT_INTERVAL_MINUTES: u16 = 30;

/// Number of seatings: 12:00 PM through 9:30 PM inclusive
pub const TIME_SLOT_COUNT: usize = 20;

/// Largest party the guest buttons offer
pub const MAX_GUESTS: u8 = 8;

/// A half-hour arrival slot between noon and 9:30 PM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// Slot by position in the day's list, `None` past the last seating
    pub fn from_index(index: usize) -> Option<Self> {
        (index < TIME_SLOT_COUNT).then(|| Self(index as u8))
    }

    /// Every slot in display order
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..TIME_SLOT_COUNT).map(|i| TimeSlot(i as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    fn minutes(self) -> u16 {
        FIRST_SLOT_MINUTES + SLOT_INTERVAL_MINUTES * self.0 as u16
    }

    /// Button label, e.g. `7:00 PM`
    pub fn label(self) -> String {
        let minutes = self.minutes();
        let (hour, minute) = (minutes / 60, minutes % 60);
        let suffix = if hour >= 12 { "PM" } else { "AM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour12, minute, suffix)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an offered option")]
pub struct UnknownOption(pub String);

impl FromStr for TimeSlot {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TimeSlot::all()
            .find(|slot| slot.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = UnknownOption;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label()
    }
}

/// Party size picked from the guest buttons (1..=MAX_GUESTS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuestCount(u8);

impl GuestCount {
    pub fn new(count: u8) -> Option<Self> {
        (1..=MAX_GUESTS).contains(&count).then_some(Self(count))
    }

    pub fn all() -> impl Iterator<Item = GuestCount> {
        (1..=MAX_GUESTS).map(GuestCount)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// `1 Guest`, `4 Guests`
    pub fn describe(self) -> String {
        if self.0 == 1 {
            "1 Guest".to_string()
        } else {
            format!("{} Guests", self.0)
        }
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GuestCount {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(GuestCount::new)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}
