use crate::ui::app::Focus;
use crate::ui::theme::HEADER_TEXT;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, focus: Focus) -> Paragraph<'static> {
        let hints = hints_for(focus);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let padding = (area.width as usize)
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
    }
}

fn hints_for(focus: Focus) -> &'static str {
    match focus {
        Focus::AnimalType => " ←/→: Cats/Dogs │ Tab: Next │ q: Quit",
        Focus::Breed => " ↑/↓: Breed │ Tab: Next │ q: Quit",
        Focus::Search => " Enter: Find breed │ Esc: Back to grid │ Ctrl+C: Quit",
        Focus::Grid => " ↑/↓/PgUp/PgDn: Scroll │ Tab: Controls │ q: Quit",
    }
}
