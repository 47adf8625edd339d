use crate::ui::app::{App, ThumbnailSlot};
use crate::ui::card::{CardBody, CardView};
use crate::ui::footer::Footer;
use crate::ui::header::{render_controls, Header};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app.gallery()), regions.header);
    render_controls(frame, regions.controls, app.gallery(), app.focus());
    frame.render_widget(status_line(app), regions.status);
    frame.render_widget(Clear, regions.grid);
    render_grid(frame, regions.grid, app);
    frame.render_widget(
        Footer::new().widget(regions.footer, app.focus()),
        regions.footer,
    );
}

fn status_line(app: &App) -> Paragraph<'static> {
    let gallery = app.gallery();
    let mut spans = Vec::new();
    if gallery.is_loading() {
        let frame = SPINNER[usize::from(app.spinner_tick()) % SPINNER.len()];
        spans.push(Span::styled(
            format!(" {} Loading...", frame),
            Style::default().fg(ACCENT),
        ));
    }
    if let Some(error) = gallery.error().or(app.last_command_error()) {
        spans.push(Span::styled(
            format!(" {}", error),
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Paragraph::new(Line::from(spans))
}

fn render_grid(frame: &mut Frame<'_>, area: Rect, app: &App) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let gallery = app.gallery();
    if app.cards().is_empty() {
        if !gallery.is_loading() && gallery.error().is_none() {
            let notice = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            frame.render_widget(
                Paragraph::new("No images to show.")
                    .style(Style::default().fg(HEADER_SEPARATOR))
                    .alignment(Alignment::Center),
                notice,
            );
        }
        return;
    }

    let grid = app.grid();
    let scroll = app.scroll();
    let viewport = scroll.viewport();
    let size = (grid.card_width(), grid.card_height());
    let animal = gallery.animal_type;

    for (index, card) in app.cards().iter().enumerate() {
        let span = grid.card_span(index);
        if !span.intersects(&viewport) {
            continue;
        }
        let x = area.x + grid.card_column(index) * grid.card_width();
        if x >= area.right() {
            continue;
        }

        let slot = card
            .lazy
            .is_loaded()
            .then(|| app.thumbnail(&card.image.id))
            .flatten();
        let body = match slot {
            Some(ThumbnailSlot::Ready(thumbnail)) => CardBody::Image(thumbnail),
            Some(ThumbnailSlot::Failed(_)) => CardBody::Unavailable,
            None => CardBody::Loading,
        };
        let caption = card.image.caption(animal);
        CardView::new(&caption, body).render_clipped(
            x,
            span.top,
            size,
            scroll.offset(),
            area,
            frame.buffer_mut(),
        );
    }
}
