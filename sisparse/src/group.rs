use tracing::debug;

use crate::error::{Error, Result};
use crate::event::EventGroup;
use crate::row::parse_event;

/// Splits the rows of the schedule table into groups of events.
///
/// A non-empty name starts a new group; names and teachers are omitted in all
/// but the first event of a group and are copied over from it.
pub fn group_events<I>(rows: I) -> Result<Vec<EventGroup>>
where
  I: IntoIterator<Item = Vec<String>>,
{
  let mut groups = Vec::new();
  let mut group = EventGroup::new();

  for columns in rows {
    let mut event = match parse_event(columns)? {
      None => {
        debug!("Skipping row without teacher");
        continue;
      }
      Some(event) => event,
    };

    if !event.name.is_empty() {
      if !group.is_empty() {
        groups.push(std::mem::take(&mut group));
      }
      debug!("Starting group {} ({})", event.name, event.kind);
    } else {
      let first = group.first().ok_or(Error::OrphanContinuation)?;
      event.name = first.name.clone();
      event.teacher = first.teacher.clone();
    }

    group.push(event);
  }

  if !group.is_empty() {
    groups.push(group);
  }

  Ok(groups)
}
