use std::collections::HashMap;

use once_cell::sync::Lazy;
use time::macros::format_description;
use time::{Duration, Time, Weekday};

use crate::error::DecodeError;
use crate::event::WeekParity;

const DAYS: [(&str, Weekday); 5] = [
  ("Po", Weekday::Monday),
  ("Út", Weekday::Tuesday),
  ("St", Weekday::Wednesday),
  ("Čt", Weekday::Thursday),
  ("Pá", Weekday::Friday),
];

static DAY_LOOKUP: Lazy<HashMap<&'static str, Weekday>> = Lazy::new(|| HashMap::from(DAYS));

/// Second word of a duration token marking odd weeks, e.g. "240 Liché týdny".
pub const ODD_WEEKS: &str = "Liché";

pub fn decode_day(token: &str) -> Result<Weekday, DecodeError> {
  DAY_LOOKUP
    .get(token)
    .copied()
    .ok_or_else(|| DecodeError::UnknownDay(token.to_string()))
}

/// Source token for a weekday, `"?"` for the weekend.
pub fn day_token(day: Weekday) -> &'static str {
  DAYS
    .iter()
    .find(|(_, weekday)| *weekday == day)
    .map_or("?", |(token, _)| *token)
}

pub fn decode_time_of_day(token: &str) -> Result<Time, DecodeError> {
  Time::parse(token, format_description!("[hour]:[minute]"))
    .map_err(|_| DecodeError::MalformedTime(token.to_string()))
}

/// Decodes strings such as `"90"` or `"240 Sudé týdny (liché kalendářní)"`.
///
/// Only the second word is inspected: [`ODD_WEEKS`] means odd weeks, anything
/// else present means even weeks and a missing one means every week.
pub fn decode_duration_and_parity(token: &str) -> Result<(i32, WeekParity), DecodeError> {
  let mut words = token.split_whitespace();

  let minutes = words
    .next()
    .and_then(|word| word.parse::<i32>().ok())
    .ok_or_else(|| DecodeError::MalformedDuration(token.to_string()))?;

  let parity = match words.next() {
    None => WeekParity::Every,
    Some(ODD_WEEKS) => WeekParity::Odd,
    Some(_) => WeekParity::Even,
  };

  Ok((minutes, parity))
}

/// Decodes strings such as `"Út 12:20"`. The separator between day and time is
/// skipped whatever it is, SIS sometimes renders it as a non-breaking space.
pub fn decode_day_time(token: &str) -> Result<(Weekday, Time), DecodeError> {
  let day = token.chars().take(2).collect::<String>();
  let time = token.chars().skip(3).collect::<String>();

  Ok((decode_day(&day)?, decode_time_of_day(&time)?))
}

/// Wraps around midnight.
pub fn end_time(from: Time, minutes: i32) -> Time {
  from + Duration::minutes(i64::from(minutes))
}
