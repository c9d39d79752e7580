use chrono::NaiveTime;
use clap::ValueEnum;
use tracing::debug;

/// How meeting start and end times are written into the schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TimeFormat {
    /// Keep the roster's string as-is, e.g. `9:00AM`.
    #[default]
    Raw,
    /// Convert 12-hour `H:MMAM`/`H:MMPM` strings into zero-padded `HH:MM`.
    #[value(name = "24h")]
    TwentyFourHour,
}

/// Applies `format` to a roster time string.
///
/// Under [`TimeFormat::TwentyFourHour`], values that are not a 12-hour clock
/// time (including the placeholder) come back unchanged.
pub fn format_time(value: &str, format: TimeFormat) -> String {
    match format {
        TimeFormat::Raw => value.to_string(),
        TimeFormat::TwentyFourHour => match parse_twelve_hour(value) {
            Some(t) => t.format("%H:%M").to_string(),
            None => {
                debug!(value, "Time is not in 12-hour form, keeping as-is");
                value.to_string()
            }
        },
    }
}

fn parse_twelve_hour(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(&value.trim().to_ascii_uppercase(), "%I:%M%p").ok()
}
