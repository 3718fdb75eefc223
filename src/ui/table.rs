use crate::brewery::{BreweryRecord, Page, SortKey, SortSpec};
use crate::ui::theme::{AMBER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, ROW_STRIPE};
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

pub const EMPTY_MESSAGE: &str = "No breweries found";

const WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(35),
    Constraint::Percentage(20),
    Constraint::Percentage(15),
    Constraint::Percentage(30),
];

/// Header label, with the direction arrow when `key` is the sorted column.
pub fn column_title(label: &str, key: SortKey, sort: SortSpec) -> String {
    match sort.direction_for(key) {
        Some(direction) => format!("{label} {}", direction.arrow()),
        None => label.to_string(),
    }
}

pub fn header_titles(sort: SortSpec) -> [String; 4] {
    [
        column_title("Name", SortKey::Name, sort),
        "City".to_string(),
        column_title("State", SortKey::State, sort),
        "Website".to_string(),
    ]
}

fn record_row(index: usize, record: &BreweryRecord) -> Row<'static> {
    let website_style = if record.website_url.is_some() {
        Style::default().fg(AMBER)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    let row = Row::new(vec![
        Cell::from(record.name.clone()),
        Cell::from(record.city.clone()),
        Cell::from(record.state.clone()),
        Cell::from(record.website_label().to_string()).style(website_style),
    ]);
    if index % 2 == 1 {
        row.style(Style::default().bg(ROW_STRIPE))
    } else {
        row
    }
}

/// Table widget for one page window.
pub fn brewery_table(page: &Page<'_>, sort: SortSpec) -> Table<'static> {
    let header = Row::new(header_titles(sort).map(Cell::from)).style(
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row<'static>> = if page.total == 0 {
        vec![Row::new(vec![Cell::from(EMPTY_MESSAGE)]).style(Style::default().fg(MUTED_TEXT))]
    } else {
        page.items
            .iter()
            .enumerate()
            .map(|(index, record)| record_row(index, record))
            .collect()
    };

    Table::new(rows, WIDTHS)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
