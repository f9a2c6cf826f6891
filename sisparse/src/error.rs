use reqwest::Url;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("unable to retrieve page: {0}")]
  Retrieval(#[from] reqwest::Error),

  #[error("invalid url: {0}")]
  Url(#[from] url::ParseError),

  /// The landing page has no link labelled "Rozvrh", either because its layout
  /// changed or because the course code does not exist.
  #[error("couldn't find the schedule link on {0}")]
  ScheduleLinkNotFound(Url),

  #[error(transparent)]
  Decode(#[from] DecodeError),

  #[error("row has {found} columns, expected at least {expected}")]
  MissingColumns { found: usize, expected: usize },

  #[error("continuation row without a preceding group start")]
  OrphanContinuation,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
  #[error("unknown day \"{0}\"")]
  UnknownDay(String),

  #[error("unable to parse time \"{0}\"")]
  MalformedTime(String),

  #[error("unable to parse duration \"{0}\"")]
  MalformedDuration(String),
}
