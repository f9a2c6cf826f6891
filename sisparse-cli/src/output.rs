use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;
use time::Time;

use sisparse::{Event, EventGroup};

#[derive(Debug, Serialize)]
struct EventView<'a> {
  #[serde(rename = "type")]
  kind: &'a str,
  name: &'a str,
  teacher: &'a str,
  /// 0 = Monday .. 4 = Friday
  day: u8,
  from: String,
  to: String,
  /// 0 = every week, 1 = odd weeks, 2 = even weeks
  week_parity: u8,
}

impl<'a> From<&'a Event> for EventView<'a> {
  fn from(event: &'a Event) -> Self {
    Self {
      kind: &event.kind,
      name: &event.name,
      teacher: &event.teacher,
      day: event.day.number_days_from_monday(),
      from: hour_minute(event.time_from),
      to: hour_minute(event.time_to),
      week_parity: event.week_parity as u8,
    }
  }
}

fn hour_minute(time: Time) -> String {
  format!("{:0>2}:{:0>2}", time.hour(), time.minute())
}

pub fn json(courses: &BTreeMap<String, Vec<EventGroup>>) -> serde_json::Result<String> {
  let views = courses
    .iter()
    .map(|(course, groups)| {
      let groups = groups
        .iter()
        .map(|group| group.iter().map(EventView::from).collect::<Vec<_>>())
        .collect::<Vec<_>>();
      (course.as_str(), groups)
    })
    .collect::<BTreeMap<_, _>>();

  serde_json::to_string_pretty(&views)
}

pub fn text(courses: &BTreeMap<String, Vec<EventGroup>>) -> String {
  let mut text = String::new();

  for (course, groups) in courses {
    writeln!(text, "{course}").unwrap();

    if groups.is_empty() {
      writeln!(text, "  no schedule").unwrap();
    }

    for (index, group) in groups.iter().enumerate() {
      writeln!(text, "  group {}", index + 1).unwrap();
      for event in group {
        writeln!(text, "    {event}").unwrap();
      }
    }
  }

  text
}
