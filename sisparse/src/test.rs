use time::macros::time;
use time::Weekday;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{DecodeError, Error, Sis, WeekParity, COURSE_URL};

const LANDING_PAGE: &str = r#"<html><body>
  <div id="content">
    <a href="/studium/predmety/index.php?do=predmet&amp;kod=NPRG030&amp;skr=2018">Sylabus</a>
    <a href="/schedule?x=1">Rozvrh</a>
  </div>
</body></html>"#;

fn schedule_page(rows: &str) -> String {
  format!(
    r#"<html><body>
  <table id="table1" class="tab1">
    <tr class="head1">
      <td>Kód</td><td>Typ</td><td>Název</td><td>Vyučující</td><td>Den</td><td>Místnost</td><td>Délka</td>
    </tr>
    {rows}
  </table>
</body></html>"#
  )
}

async fn server(landing: &str, schedule: Option<String>) -> (MockServer, Sis) {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/studium/predmety/index.php"))
    .and(query_param("kod", "NPRG030"))
    .respond_with(ResponseTemplate::new(200).set_body_string(landing))
    .expect(1)
    .mount(&server)
    .await;

  let schedule_mock = Mock::given(method("GET"))
    .and(path("/schedule"))
    .and(query_param("x", "1"));

  match schedule {
    Some(body) => {
      schedule_mock
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await
    }
    None => {
      schedule_mock
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await
    }
  }

  let template = format!(
    "{}/studium/predmety/index.php?do=predmet&kod={{course}}&skr=2018&sem=1",
    server.uri()
  );
  let sis = Sis::with_url_template(template).unwrap();

  (server, sis)
}

#[test]
fn course_url() {
  let sis = Sis::new().unwrap();

  assert_eq!(
    sis.course_url("NPRG030").unwrap().as_str(),
    "https://is.cuni.cz/studium/predmety/index.php?do=predmet&kod=NPRG030&skr=2018&sem=1"
  );
  assert!(COURSE_URL.contains("{course}"));
}

#[tokio::test]
async fn one_group_of_two_events() {
  let (_server, sis) = server(
    LANDING_PAGE,
    Some(schedule_page(
      r#"<tr class="row1">
        <td>18aNPRG030x01</td><td>X</td><td>Programování 1</td><td>Martin Mareš</td>
        <td>Po 09:00</td><td>S5</td><td>90</td>
      </tr>
      <tr class="row2">
        <td>18aNPRG030x02</td><td>X</td><td></td><td>Jan Novák</td>
        <td>Út 12:20</td><td>S6</td><td>240 Liché týdny</td>
      </tr>"#,
    )),
  )
  .await;

  let groups = sis.course_events("NPRG030").await.unwrap();

  assert_eq!(groups.len(), 1);
  assert_eq!(groups[0].len(), 2);
  for event in &groups[0] {
    assert_eq!(event.kind, "X");
    assert_eq!(event.name, "Programování 1");
    assert_eq!(event.teacher, "Martin Mareš");
  }

  let first = &groups[0][0];
  assert_eq!(first.day, Weekday::Monday);
  assert_eq!(first.time_from, time!(9:00));
  assert_eq!(first.time_to, time!(10:30));
  assert_eq!(first.week_parity, WeekParity::Every);

  let second = &groups[0][1];
  assert_eq!(second.day, Weekday::Tuesday);
  assert_eq!(second.time_from, time!(12:20));
  assert_eq!(second.time_to, time!(16:20));
  assert_eq!(second.week_parity, WeekParity::Odd);
}

#[tokio::test]
async fn rows_without_teacher_are_skipped() {
  let (_server, sis) = server(
    LANDING_PAGE,
    Some(schedule_page(
      r#"<tr><td>18aNPRG030p1</td><td>P</td><td>Programování 1</td><td>Martin Mareš</td>
        <td>St 10:40</td><td>S3</td><td>90</td></tr>
      <tr><td></td><td></td><td></td><td></td><td></td><td></td><td></td></tr>
      <tr><td>18aNPRG030x01</td><td>X</td><td>Programování 1</td><td>Jan Novák</td>
        <td>Čt 14:00</td><td>SU1</td><td>90 Sudé týdny</td></tr>"#,
    )),
  )
  .await;

  let groups = sis.course_events("NPRG030").await.unwrap();

  assert_eq!(groups.len(), 2);
  assert_eq!(groups[0][0].kind, "P");
  assert_eq!(groups[1][0].teacher, "Jan Novák");
  assert_eq!(groups[1][0].week_parity, WeekParity::Even);
}

#[tokio::test]
async fn no_schedule_table() {
  let (_server, sis) = server(
    LANDING_PAGE,
    Some("<html><body><p>Rozvrh nebyl nalezen.</p></body></html>".to_string()),
  )
  .await;

  assert!(sis.course_events("NPRG030").await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_schedule_table() {
  let (_server, sis) = server(LANDING_PAGE, Some(schedule_page(""))).await;

  assert!(sis.course_events("NPRG030").await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_schedule_link() {
  let (_server, sis) = server(
    r#"<html><body><a href="/schedule?x=1">Sylabus</a></body></html>"#,
    None,
  )
  .await;

  let result = sis.course_events("NPRG030").await;

  match result {
    Err(Error::ScheduleLinkNotFound(url)) => {
      assert_eq!(url.query(), Some("do=predmet&kod=NPRG030&skr=2018&sem=1"))
    }
    other => panic!("unexpected result {other:?}"),
  }
}

#[tokio::test]
async fn schedule_link_without_href() {
  let (_server, sis) = server(r#"<html><body><a>Rozvrh</a></body></html>"#, None).await;

  assert!(matches!(
    sis.course_events("NPRG030").await,
    Err(Error::ScheduleLinkNotFound(_))
  ));
}

#[tokio::test]
async fn huge_duration_is_malformed() {
  let (_server, sis) = server(
    LANDING_PAGE,
    Some(schedule_page(
      r#"<tr><td>a</td><td>X</td><td>Programování 1</td><td>Martin Mareš</td>
        <td>Po 09:00</td><td>S5</td><td>999999999999999999</td></tr>"#,
    )),
  )
  .await;

  assert!(matches!(
    sis.course_events("NPRG030").await,
    Err(Error::Decode(DecodeError::MalformedDuration(_)))
  ));
}

#[tokio::test]
async fn malformed_row_aborts_retrieval() {
  let (_server, sis) = server(
    LANDING_PAGE,
    Some(schedule_page(
      r#"<tr><td>a</td><td>X</td><td>Programování 1</td><td>Martin Mareš</td>
        <td>Po 09:00</td><td>S5</td><td>90</td></tr>
      <tr><td>b</td><td>X</td><td></td><td>Jan Novák</td>
        <td>So 09:00</td><td>S5</td><td>90</td></tr>"#,
    )),
  )
  .await;

  let result = sis.course_events("NPRG030").await;

  assert!(matches!(
    result,
    Err(Error::Decode(DecodeError::UnknownDay(day))) if day == "So"
  ));
}

#[tokio::test]
async fn http_error_status() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(503))
    .mount(&server)
    .await;

  let sis = Sis::with_url_template(format!("{}/predmet/{{course}}", server.uri())).unwrap();

  assert!(matches!(
    sis.course_events("NPRG030").await,
    Err(Error::Retrieval(_))
  ));
}
