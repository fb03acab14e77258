pub mod day_record;
pub mod time_of_day;
pub mod week;
pub mod week_view;
