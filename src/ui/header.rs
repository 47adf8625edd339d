use crate::api::AnimalType;
use crate::gallery::GalleryState;
use crate::ui::app::Focus;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, gallery: &GalleryState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled(
                " Pet Gallery",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(gallery.animal_type.label(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} breeds", gallery.breeds.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} images", gallery.images.len()), text_style),
        ]);
        Paragraph::new(line)
    }
}

/// Animal type toggle, breed selector and search box, side by side.
pub fn render_controls(frame: &mut Frame<'_>, area: Rect, gallery: &GalleryState, focus: Focus) {
    let [animal, breed, search] = Layout::horizontal([
        Constraint::Length(22),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let mut toggle = Vec::new();
    for (index, kind) in AnimalType::ALL.iter().enumerate() {
        if index > 0 {
            toggle.push(Span::raw("  "));
        }
        let style = if *kind == gallery.animal_type {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        toggle.push(Span::styled(format!(" {} ", kind.label()), style));
    }
    let animal_block = control_block("Animal", focus == Focus::AnimalType);
    frame.render_widget(Paragraph::new(Line::from(toggle)).block(animal_block), animal);

    let breed_line = Line::from(vec![
        Span::styled(
            gallery.selected_breed_label().to_string(),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled("  ↑/↓", Style::default().fg(HEADER_SEPARATOR)),
    ]);
    frame.render_widget(
        Paragraph::new(breed_line).block(control_block("Breed", focus == Focus::Breed)),
        breed,
    );

    let searching = focus == Focus::Search;
    let search_line = if gallery.search_term().is_empty() && !searching {
        Line::from(Span::styled(
            "Search breeds...",
            Style::default().fg(HEADER_SEPARATOR),
        ))
    } else {
        let cursor = if searching { "▏" } else { "" };
        Line::from(Span::styled(
            format!("{}{}", gallery.search_term(), cursor),
            Style::default().fg(HEADER_TEXT),
        ))
    };
    frame.render_widget(
        Paragraph::new(search_line).block(control_block("Search", searching)),
        search,
    );
}

fn control_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}
