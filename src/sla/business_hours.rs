// Business-hours calendar: counts only time inside the working window

use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, TimeZone, Utc, Weekday};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("business calendar needs at least one working day")]
    NoWorkDays,
    #[error("business hours must open before they close ({open} >= {close})")]
    EmptyWindow { open: NaiveTime, close: NaiveTime },
    #[error("invalid weekday: '{0}'")]
    InvalidWeekday(String),
    #[error("invalid time of day: '{0}' (expected HH:MM)")]
    InvalidTime(String),
    #[error("invalid UTC offset: '{0}' (expected +HH:MM or -HH:MM)")]
    InvalidOffset(String),
}

/// Working days and daily window, evaluated in a fixed UTC offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    work_days: Vec<Weekday>,
    open: NaiveTime,
    close: NaiveTime,
    offset: FixedOffset,
}

impl BusinessCalendar {
    pub fn new(
        work_days: Vec<Weekday>,
        open: NaiveTime,
        close: NaiveTime,
        offset: FixedOffset,
    ) -> Result<Self, CalendarError> {
        if work_days.is_empty() {
            return Err(CalendarError::NoWorkDays);
        }
        if open >= close {
            return Err(CalendarError::EmptyWindow { open, close });
        }
        Ok(Self { work_days, open, close, offset })
    }

    pub fn work_days(&self) -> &[Weekday] {
        &self.work_days
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn is_work_day(&self, day: Weekday) -> bool {
        self.work_days.contains(&day)
    }

    /// Seconds of working time in [start, end); zero when end <= start
    pub fn business_seconds_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
        if end <= start {
            return 0;
        }
        let start_local = start.with_timezone(&self.offset);
        let end_local = end.with_timezone(&self.offset);
        let last_day = end_local.date_naive();
        let mut day = start_local.date_naive();
        let mut total = 0;

        while day <= last_day {
            if self.is_work_day(day.weekday()) {
                let window = (
                    self.offset.from_local_datetime(&day.and_time(self.open)).single(),
                    self.offset.from_local_datetime(&day.and_time(self.close)).single(),
                );
                if let (Some(open), Some(close)) = window {
                    let from = open.max(start_local);
                    let to = close.min(end_local);
                    if to > from {
                        total += (to - from).num_seconds();
                    }
                }
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        total
    }

    pub fn business_hours_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
        self.business_seconds_between(start, end) as f64 / 3600.0
    }
}

impl Default for BusinessCalendar {
    /// Sunday to Thursday, 08:00 to 17:00, UTC+03:00
    fn default() -> Self {
        Self {
            work_days: vec![Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu],
            open: NaiveTime::from_hms_opt(8, 0, 0).expect("08:00 is a valid time"),
            close: NaiveTime::from_hms_opt(17, 0, 0).expect("17:00 is a valid time"),
            offset: FixedOffset::east_opt(3 * 3600).expect("+03:00 is a valid offset"),
        }
    }
}

/// How elapsed time is measured
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HoursPolicy {
    #[default]
    WallClock,
    Business(BusinessCalendar),
}

impl HoursPolicy {
    /// Elapsed hours between start and end, clamped at zero
    pub fn elapsed_hours(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
        match self {
            HoursPolicy::WallClock => {
                let millis = (end - start).num_milliseconds();
                millis.max(0) as f64 / 3_600_000.0
            }
            HoursPolicy::Business(calendar) => calendar.business_hours_between(start, end),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HoursPolicy::WallClock => "wall",
            HoursPolicy::Business(_) => "business",
        }
    }
}

/// Parse a comma-separated weekday list (e.g. "sun,mon,tue")
pub fn parse_work_days(spec: &str) -> Result<Vec<Weekday>, CalendarError> {
    let mut days = Vec::new();
    for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let day: Weekday = part
            .parse()
            .map_err(|_| CalendarError::InvalidWeekday(part.to_string()))?;
        if !days.contains(&day) {
            days.push(day);
        }
    }
    if days.is_empty() {
        return Err(CalendarError::NoWorkDays);
    }
    Ok(days)
}

/// Parse a time of day in HH:MM form
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, CalendarError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| CalendarError::InvalidTime(s.to_string()))
}

/// Parse a UTC offset in +HH:MM / -HH:MM form
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset, CalendarError> {
    let invalid = || CalendarError::InvalidOffset(s.to_string());
    let trimmed = s.trim();
    let (sign, rest) = match trimmed.chars().next() {
        Some('+') => (1, &trimmed[1..]),
        Some('-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
