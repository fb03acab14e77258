use crate::models::day_record::{DayRecord, Weekday};
use crate::models::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};

/// The tracked week: exactly five records, Monday-first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekState {
    pub days: [DayRecord; 5],
}

impl WeekState {
    pub fn day(&self, wd: Weekday) -> &DayRecord {
        &self.days[wd.index()]
    }

    pub fn day_mut(&mut self, wd: Weekday) -> &mut DayRecord {
        &mut self.days[wd.index()]
    }

    pub fn clear_day(&mut self, wd: Weekday) {
        self.days[wd.index()].clear();
    }

    pub fn clear_all(&mut self) {
        for d in &mut self.days {
            d.clear();
        }
    }

    /// Fill one day from the template. The day's permit survives, smart
    /// working is switched off.
    pub fn apply_default_to_day(&mut self, wd: Weekday, dflt: &DefaultDayRecord) {
        let permit = self.days[wd.index()].permit_minutes;
        self.days[wd.index()] = DayRecord {
            smartworking: false,
            entry1: dflt.entry1,
            exit1: dflt.exit1,
            entry2: dflt.entry2,
            exit2: dflt.exit2,
            permit_minutes: permit,
        };
    }

    /// Fill the whole week from the template, resetting permits and smart
    /// working everywhere.
    pub fn apply_default_to_week(&mut self, dflt: &DefaultDayRecord) {
        for wd in Weekday::ALL {
            self.days[wd.index()] = DayRecord {
                smartworking: false,
                entry1: dflt.entry1,
                exit1: dflt.exit1,
                entry2: dflt.entry2,
                exit2: dflt.exit2,
                permit_minutes: 0,
            };
        }
    }
}

/// The reusable day template. Stored separately from the week: clearing
/// the week never touches it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultDayRecord {
    #[serde(default)]
    pub entry1: Option<TimeOfDay>,
    #[serde(default)]
    pub exit1: Option<TimeOfDay>,
    #[serde(default)]
    pub entry2: Option<TimeOfDay>,
    #[serde(default)]
    pub exit2: Option<TimeOfDay>,
}

impl DefaultDayRecord {
    pub fn is_empty(&self) -> bool {
        self.entry1.is_none() && self.exit1.is_none() && self.entry2.is_none() && self.exit2.is_none()
    }
}
