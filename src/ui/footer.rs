use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " │ ^N Name │ ^S State │ ←/→ Page │ ^U Clear │ Esc Quit";

/// Pagination label and key hints on the left, version on the right.
pub struct Footer<'a> {
    range_label: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(range_label: &'a str) -> Self {
        Self { range_label }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let range = format!(" {}", self.range_label);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain box-drawing glyphs
        let used = range.chars().count() + HINTS.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(range, Style::default().fg(HEADER_TEXT)),
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
