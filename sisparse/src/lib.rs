use reqwest::{Client, Url};
use select::document::Document;
use tracing::{info, warn};

pub use crate::error::{DecodeError, Error, Result};
pub use crate::event::{Event, EventGroup, WeekParity};
pub use crate::group::group_events;
pub use crate::page::{find_event_table, find_schedule_link};
pub use crate::row::{parse_event, Row};

pub mod decode;
mod error;
mod event;
mod group;
pub mod page;
mod row;
#[cfg(test)]
mod test;

/// Landing page of a course in the "Subjects" module, `{course}` is replaced by
/// the course code. Year and semester are fixed.
pub const COURSE_URL: &str =
  "https://is.cuni.cz/studium/predmety/index.php?do=predmet&kod={course}&skr=2018&sem=1";

const USER_AGENT: &str = concat!("sisparse/", env!("CARGO_PKG_VERSION"));

pub struct Sis {
  client: Client,
  url_template: String,
}

impl Sis {
  pub fn new() -> Result<Self> {
    Self::with_url_template(COURSE_URL)
  }

  pub fn with_url_template(url_template: impl Into<String>) -> Result<Self> {
    Ok(Self {
      client: Client::builder().user_agent(USER_AGENT).build()?,
      url_template: url_template.into(),
    })
  }

  pub fn course_url(&self, course_code: &str) -> Result<Url> {
    Ok(Url::parse(
      &self.url_template.replace("{course}", course_code),
    )?)
  }

  /// Returns the groups of events of a course. Each group is a set of events
  /// which must be enrolled together, the groups are the different
  /// times/teachers of the same course.
  pub async fn course_events(&self, course_code: &str) -> Result<Vec<EventGroup>> {
    // A course code alone doesn't lead to its schedule, SIS also wants the
    // faculty number. The landing page links to the schedule with it filled in.
    let course_url = self.course_url(course_code)?;
    let document = self.fetch(course_url.clone()).await?;

    let schedule_url = match find_schedule_link(&document) {
      None => return Err(Error::ScheduleLinkNotFound(course_url)),
      Some(href) => course_url.join(href)?,
    };

    let document = self.fetch(schedule_url).await?;
    parse_course_events(&document)
  }

  async fn fetch(&self, url: Url) -> Result<Document> {
    let text = self
      .client
      .get(url.clone())
      .send()
      .await?
      .error_for_status()?
      .text()
      .await?;

    info!("Crawled {}", url);

    Ok(Document::from(text.as_str()))
  }
}

/// Groups the events of an already fetched schedule page.
pub fn parse_course_events(document: &Document) -> Result<Vec<EventGroup>> {
  let rows = find_event_table(document);

  if rows.is_empty() {
    warn!("Missing schedule table in document");
    return Ok(Vec::new());
  }

  group_events(rows.iter().map(page::columns))
}
