use crate::models::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};

/// Working weekdays, Monday-first. Weekend days are never tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Parse a day code: English ("mon", "monday"), Italian ("lun",
    /// "lunedì") or a 1-based index ("1".."5").
    pub fn from_code(code: &str) -> Option<Weekday> {
        let c = code.trim().to_lowercase();
        match c.as_str() {
            "1" => return Some(Weekday::Mon),
            "2" => return Some(Weekday::Tue),
            "3" => return Some(Weekday::Wed),
            "4" => return Some(Weekday::Thu),
            "5" => return Some(Weekday::Fri),
            _ => {}
        }
        let prefix: String = c.chars().take(3).collect();
        match prefix.as_str() {
            "mon" | "lun" => Some(Weekday::Mon),
            "tue" | "mar" => Some(Weekday::Tue),
            "wed" | "mer" => Some(Weekday::Wed),
            "thu" | "gio" => Some(Weekday::Thu),
            "fri" | "ven" => Some(Weekday::Fri),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(i: usize) -> Option<Weekday> {
        Weekday::ALL.get(i).copied()
    }

    /// Display name as it appears in the week table and CSV export.
    pub fn display_name(&self) -> &'static str {
        match self {
            Weekday::Mon => "Lunedì",
            Weekday::Tue => "Martedì",
            Weekday::Wed => "Mercoledì",
            Weekday::Thu => "Giovedì",
            Weekday::Fri => "Venerdì",
        }
    }
}

/// One weekday's input: up to two badge pairs, permit minutes and the
/// smart-working flag. A smart-working day carries no stamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub smartworking: bool,
    #[serde(default)]
    pub entry1: Option<TimeOfDay>,
    #[serde(default)]
    pub exit1: Option<TimeOfDay>,
    #[serde(default)]
    pub entry2: Option<TimeOfDay>,
    #[serde(default)]
    pub exit2: Option<TimeOfDay>,
    #[serde(default)]
    pub permit_minutes: u16,
}

impl DayRecord {
    pub fn has_no_stamps(&self) -> bool {
        self.entry1.is_none() && self.exit1.is_none() && self.entry2.is_none() && self.exit2.is_none()
    }

    /// Enabling smart working clears the four stamps; they contribute no
    /// balance and must not survive in the stored record.
    pub fn set_smartworking(&mut self, on: bool) {
        self.smartworking = on;
        if on {
            self.entry1 = None;
            self.exit1 = None;
            self.entry2 = None;
            self.exit2 = None;
        }
    }

    pub fn add_permit(&mut self, step: u16) {
        self.permit_minutes += step;
    }

    pub fn remove_permit(&mut self, step: u16) {
        self.permit_minutes = self.permit_minutes.saturating_sub(step);
    }

    pub fn clear(&mut self) {
        *self = DayRecord::default();
    }
}
