use crate::models::day_record::Weekday;
use crate::models::week::WeekState;
use crate::models::week_view::WeekView;
use crate::utils::time::format_minutes;
use serde::Serialize;

/// Struttura "piatta" per l'export di una giornata.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub day: String,
    pub smartworking: bool,
    pub entry1: String,
    pub exit1: String,
    pub entry2: String,
    pub exit2: String,
    pub permit: String,
    pub balance: String,
    pub balance_minutes: i64,
    pub rubato: String,
    pub rubato_minutes: i64,
}

#[derive(Serialize, Clone, Debug)]
pub struct WeekExport {
    pub days: Vec<DayExport>,
    pub total_balance: String,
    pub total_balance_minutes: i64,
    pub total_rubato: String,
    pub total_rubato_minutes: i64,
}

fn stamp(t: Option<crate::models::time_of_day::TimeOfDay>) -> String {
    t.map(|t| t.to_string()).unwrap_or_default()
}

impl WeekExport {
    pub fn build(state: &WeekState, view: &WeekView) -> Self {
        let days = Weekday::ALL
            .iter()
            .map(|wd| {
                let rec = state.day(*wd);
                let dv = &view.days[wd.index()];
                DayExport {
                    day: wd.display_name().to_string(),
                    smartworking: rec.smartworking,
                    entry1: stamp(rec.entry1),
                    exit1: stamp(rec.exit1),
                    entry2: stamp(rec.entry2),
                    exit2: stamp(rec.exit2),
                    permit: format_minutes(rec.permit_minutes as i64),
                    balance: format_minutes(dv.balance),
                    balance_minutes: dv.balance,
                    rubato: format_minutes(dv.rubato),
                    rubato_minutes: dv.rubato,
                }
            })
            .collect();

        WeekExport {
            days,
            total_balance: format_minutes(view.total_balance),
            total_balance_minutes: view.total_balance,
            total_rubato: format_minutes(view.total_rubato),
            total_rubato_minutes: view.total_rubato,
        }
    }
}
