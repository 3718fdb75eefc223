use crate::ui::theme::{AMBER, GLOBAL_BORDER, HEADER_TEXT, MALT_BROWN, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Microbrewery List";
pub const SEARCH_LABEL: &str = "Search by name or state";

/// Title bar with the live search field.
pub struct Header<'a> {
    search: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(search: &'a str) -> Self {
        Self { search }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let label_style = Style::default().fg(MUTED_TEXT);
        let text_style = Style::default().fg(HEADER_TEXT);
        let line = Line::from(vec![
            Span::styled(format!(" {SEARCH_LABEL}: "), label_style),
            Span::styled(self.search, text_style),
            Span::styled("█", Style::default().fg(AMBER)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .title(Span::styled(
                    format!(" {TITLE} "),
                    Style::default().fg(MALT_BROWN).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
