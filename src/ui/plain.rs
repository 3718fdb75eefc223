//! Plain-text rendering of one page, for `--print`.

use crate::brewery::BreweryListing;
use crate::ui::table::{header_titles, EMPTY_MESSAGE};

const COLUMN_GAP: &str = "  ";

/// The current page as an aligned text table followed by the range label.
pub fn render_plain(listing: &BreweryListing) -> String {
    let page = listing.current_page();
    let header = header_titles(listing.sort());

    let rows: Vec<[&str; 4]> = page
        .items
        .iter()
        .map(|record| {
            [
                record.name.as_str(),
                record.city.as_str(),
                record.state.as_str(),
                record.website_label(),
            ]
        })
        .collect();

    let mut widths = header.clone().map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header.each_ref().map(String::as_str), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule.iter().map(String::as_str).collect::<Vec<_>>(), &widths);

    if page.total == 0 {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    }
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out.push('\n');
    out.push_str(&format!(
        "{}  (page {} of {})\n",
        page.range_label(),
        listing.page() + 1,
        listing.page_count().max(1)
    ));
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join(COLUMN_GAP).trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brewery::BreweryRecord;

    fn record(name: &str, state: &str, website: Option<&str>) -> BreweryRecord {
        BreweryRecord {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: "micro".to_string(),
            city: "Bend".to_string(),
            state: state.to_string(),
            website_url: website.map(str::to_string),
        }
    }

    #[test]
    fn renders_sorted_rows_and_label() {
        let listing = BreweryListing::new(
            vec![
                record("Zeta", "CA", None),
                record("Alpha", "NY", Some("http://alpha.example")),
            ],
            5,
        );
        let text = render_plain(&listing);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Name ▲"));
        assert!(lines[2].starts_with("Alpha"));
        assert!(lines[2].ends_with("http://alpha.example"));
        assert!(lines[3].starts_with("Zeta"));
        assert!(lines[3].ends_with("N/A"));
        assert!(text.contains("1-2 of 2  (page 1 of 1)"));
    }

    #[test]
    fn empty_view_prints_placeholder() {
        let mut listing = BreweryListing::new(vec![record("Zeta", "CA", None)], 5);
        listing.set_search("nope");
        let text = render_plain(&listing);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.contains("0-0 of 0"));
    }
}
