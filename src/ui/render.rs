use crate::brewery::BreweryListing;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::listing::ListingState;
use crate::ui::table::brewery_table;
use crate::ui::theme::{AMBER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub const LOADING_TEXT: &str = "Loading breweries...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    match app.listing() {
        ListingState::Loading => draw_loading(frame, area, app.spinner_frame()),
        ListingState::Failed { message } => draw_error(frame, area, message),
        ListingState::Ready(listing) => draw_listing(frame, area, listing),
    }
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect, spinner: &str) {
    let line = Line::from(vec![
        Span::styled(spinner.to_string(), Style::default().fg(AMBER)),
        Span::raw(" "),
        Span::styled(LOADING_TEXT, Style::default().fg(HEADER_TEXT)),
    ]);
    let width = line.width() as u16;
    let rect = centered_rect_by_size(area, width, 1);
    frame.render_widget(Paragraph::new(line), rect);
}

fn draw_error(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let text = format!("Error: {message}");
    let width = (text.chars().count() as u16)
        .saturating_add(4)
        .max(30)
        .min(area.width);
    let height = wrapped_rows(&text, width.saturating_sub(2)).saturating_add(2);
    let rect = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, rect);
    let widget = Paragraph::new(text)
        .style(Style::default().fg(STATUS_ERROR))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
    frame.render_widget(widget, rect);
}

/// Rows `text` takes when word-wrapped to `width` columns.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 1usize;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used > 0 && used + 1 + len <= width {
            used += 1 + len;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        // Words wider than the box are split across rows.
        let extra = (len - 1) / width;
        rows += extra;
        used = len - extra * width;
    }
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn draw_listing(frame: &mut Frame<'_>, area: Rect, listing: &BreweryListing) {
    let (header, body, footer) = layout_regions(area);
    let page = listing.current_page();
    let range_label = page.range_label();

    frame.render_widget(Header::new(listing.search()).widget(), header);
    frame.render_widget(brewery_table(&page, listing.sort()), body);
    frame.render_widget(Footer::new(&range_label).widget(footer), footer);
}
