use std::io::{self, Write};
use wadm::definition_link::LinkPage;

/// Writes `total`, one tab-separated `class  resource  workflow` row per entry and the
/// page URL.
pub(crate) fn write_rows(out: &mut impl Write, page: &LinkPage, url: &str) -> io::Result<()> {
    writeln!(out, "total\t{}", page.total_count)?;
    for entry in &page.entries {
        writeln!(out, "{}\t{}\t{}", entry.class_name, entry.resource, entry.workflow_label)?;
    }
    writeln!(out, "url\t{url}")
}

/// Writes the page and URL as one JSON document.
pub(crate) fn write_json(out: &mut impl Write, page: &LinkPage, url: &str) -> io::Result<()> {
    let document = serde_json::json!({ "page": page, "url": url });
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wadm::domain::LinkEntry;

    fn page() -> LinkPage {
        LinkPage {
            total_count: 7,
            entries: vec![
                LinkEntry::new("blogs", "Blog Entry", "No Workflow"),
                LinkEntry::new("wiki", "Wiki Page", "Approval (Version 2)"),
            ],
        }
    }

    #[test]
    fn rows_are_tab_separated() {
        let mut out = Vec::new();
        write_rows(&mut out, &page(), "http://x/").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "total\t7\nblogs\tBlog Entry\tNo Workflow\nwiki\tWiki Page\tApproval (Version 2)\nurl\thttp://x/\n"
        );
    }

    #[test]
    fn json_wraps_page_and_url() {
        let mut out = Vec::new();
        write_json(&mut out, &page(), "http://x/").unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["page"]["totalCount"], 7);
        assert_eq!(value["url"], "http://x/");
    }
}
