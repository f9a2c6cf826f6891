use std::fmt::{Display, Formatter};

use time::{Time, Weekday};

use crate::decode::day_token;

/// Events which must be enrolled together. Never empty; lectures and
/// seminars/practicals end up in separate groups.
pub type EventGroup = Vec<Event>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WeekParity {
  #[default]
  Every = 0,
  Odd = 1,
  Even = 2,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
  /// Lecture/seminar/practical label as rendered by SIS.
  pub kind: String,
  pub name: String,
  pub teacher: String,
  /// Monday..Friday, `number_days_from_monday()` gives the 0..4 index.
  pub day: Weekday,
  pub time_from: Time,
  pub time_to: Time,
  pub week_parity: WeekParity,
}

impl Display for WeekParity {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Self::Every => "every week",
      Self::Odd => "odd weeks",
      Self::Even => "even weeks",
    })
  }
}

impl Display for Event {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{} {:0>2}:{:0>2}-{:0>2}:{:0>2} ({}) {} {} ({})",
      day_token(self.day),
      self.time_from.hour(),
      self.time_from.minute(),
      self.time_to.hour(),
      self.time_to.minute(),
      self.week_parity,
      self.kind,
      self.name,
      self.teacher,
    )
  }
}
