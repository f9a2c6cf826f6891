use crate::decode::{decode_day_time, decode_duration_and_parity, end_time};
use crate::error::{Error, Result};
use crate::event::Event;

/// Columns of a schedule table row: 0 holds the event code and 5 the room,
/// neither of which is needed.
const COLUMNS: usize = 7;

/// One schedule table row, split into the columns we care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
  pub kind: String,
  pub name: String,
  pub teacher: String,
  /// e.g. `"Út 12:20"`
  pub day_time: String,
  /// e.g. `"90"` or `"240 Liché týdny"`
  pub duration: String,
}

impl TryFrom<Vec<String>> for Row {
  type Error = Error;

  fn try_from(columns: Vec<String>) -> Result<Self> {
    if columns.len() < COLUMNS {
      return Err(Error::MissingColumns {
        found: columns.len(),
        expected: COLUMNS,
      });
    }

    let mut columns = columns.into_iter();
    let mut next = || columns.next().unwrap_or_default();

    let _code = next();
    let kind = next();
    let name = next();
    let teacher = next();
    let day_time = next();
    let _room = next();
    let duration = next();

    Ok(Self {
      kind,
      name,
      teacher,
      day_time,
      duration,
    })
  }
}

/// Parses the event of a row. Rows without a teacher are headers or
/// decorations and yield `None`.
pub fn parse_event(columns: Vec<String>) -> Result<Option<Event>> {
  let row = Row::try_from(columns)?;

  if row.teacher.is_empty() {
    return Ok(None);
  }

  let (day, time_from) = decode_day_time(&row.day_time)?;
  let (minutes, week_parity) = decode_duration_and_parity(&row.duration)?;

  Ok(Some(Event {
    kind: row.kind,
    name: row.name,
    teacher: row.teacher,
    day,
    time_from,
    time_to: end_time(time_from, minutes),
    week_parity,
  }))
}
