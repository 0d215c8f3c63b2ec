/// Upcoming birthday calculation
///
/// Given a reference date, finds the contacts whose next birthday falls within
/// the coming week and works out when to congratulate them. Greetings that
/// would land on a weekend move to the following Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::domain::{Birthday, Record};

/// How many days past `today` still count as "upcoming" (inclusive)
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact with a birthday inside the upcoming window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,
    /// The actual calendar date of the next birthday
    pub next_occurrence: NaiveDate,
    /// When to send the greeting (next_occurrence moved off weekends)
    pub congratulation_date: NaiveDate,
    /// Whole days from the reference date to next_occurrence (0..=7)
    pub days_ahead: i64,
}

/// The birthday's month and day placed in `year`
///
/// A 29 February birthday falls on 28 February in non-leap years. Returns
/// None only when `year` is outside the range chrono can represent.
pub fn occurrence_in_year(birthday: Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.is_leap_day() {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// The soonest date on or after `today` matching the birthday's month and day
pub fn next_occurrence(birthday: Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday to the following Monday; weekdays are unchanged
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Collect upcoming birthdays from `records`, relative to `today`
///
/// A record qualifies when its next occurrence is between 0 and
/// UPCOMING_WINDOW_DAYS days away, inclusive. Records without a birthday are
/// skipped. The result is ordered by congratulation date, then by name.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut upcoming: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| {
            let next = next_occurrence(record.birthday()?, today)?;
            let days_ahead = (next - today).num_days();
            if !(0..=UPCOMING_WINDOW_DAYS).contains(&days_ahead) {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                next_occurrence: next,
                congratulation_date: congratulation_date(next),
                days_ahead,
            })
        })
        .collect();

    upcoming.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.name.cmp(&b.name))
    });
    upcoming
}
