use std::collections::BTreeMap;

use anyhow::bail;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sisparse::{EventGroup, Sis, COURSE_URL};

use crate::output::{json, text};

mod output;

#[derive(Parser)]
#[command(author, version, about, long_about)]
struct Args {
  /// Course codes, e.g. NPRG030
  #[arg(required = true)]
  courses: Vec<String>,
  /// Landing page of a course, `{course}` is replaced by the course code
  #[arg(long, short, env = "SISPARSE_URL_TEMPLATE", default_value = COURSE_URL)]
  url_template: String,
  /// Print JSON instead of text
  #[arg(long, short)]
  json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let sis = Sis::with_url_template(args.url_template)?;

  let mut courses: BTreeMap<String, Vec<EventGroup>> = BTreeMap::new();
  let mut failed = 0;

  for course in &args.courses {
    match sis.course_events(course).await {
      Err(err) => {
        error!("Unable to get events of {}: {}", course, err);
        failed += 1;
      }
      Ok(groups) => {
        info!("Found {} groups for {}", groups.len(), course);
        courses.insert(course.clone(), groups);
      }
    }
  }

  if args.json {
    println!("{}", json(&courses)?);
  } else {
    print!("{}", text(&courses));
  }

  if failed > 0 {
    bail!("{} of {} courses failed", failed, args.courses.len());
  }

  Ok(())
}
