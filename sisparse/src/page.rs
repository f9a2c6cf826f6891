use select::document::Document;
use select::node::Node;
use select::predicate::Name;

/// Label of the link from a course's landing page to its schedule.
pub const SCHEDULE_LINK_TEXT: &str = "Rozvrh";
/// `id` of the schedule table, the grandparent of its rows.
pub const TABLE_ID: &str = "table1";
/// `class` of the schedule table's header row.
pub const HEADER_CLASS: &str = "head1";

/// Returns the `href` of the first link labelled [`SCHEDULE_LINK_TEXT`].
pub fn find_schedule_link(document: &Document) -> Option<&str> {
  document
    .find(Name("a"))
    .find(|link| text(link) == SCHEDULE_LINK_TEXT)
    .and_then(|link| link.attr("href"))
}

/// Returns the data rows of the schedule table, without its header. Empty if the
/// page has no schedule table at all (SIS renders an error message instead).
pub fn find_event_table(document: &Document) -> Vec<Node<'_>> {
  document
    .find(Name("tr"))
    .filter(|row| {
      row
        .parent()
        .and_then(|parent| parent.parent())
        .and_then(|table| table.attr("id"))
        == Some(TABLE_ID)
    })
    .filter(|row| row.attr("class") != Some(HEADER_CLASS))
    .collect()
}

/// Text of every cell of a row, whitespace between the cells is not a cell.
pub fn columns(row: &Node) -> Vec<String> {
  row
    .children()
    .filter(|cell| cell.name().is_some())
    .map(|cell| text(&cell))
    .collect()
}

/// Trimmed text nodes below `node`, joined by single spaces.
fn text(node: &Node) -> String {
  node
    .descendants()
    .filter_map(|descendant| descendant.as_text())
    .map(str::trim)
    .filter(|text| !text.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}
