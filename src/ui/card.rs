use crate::lazy::Thumbnail;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER_FILL, PLACEHOLDER_TEXT, STATUS_ERROR,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// What the image area of a card shows.
#[derive(Debug, Clone, Copy)]
pub enum CardBody<'a> {
    /// Neutral placeholder, shown until a thumbnail is decoded.
    Loading,
    Image(&'a Thumbnail),
    Unavailable,
}

pub struct CardView<'a> {
    caption: &'a str,
    body: CardBody<'a>,
}

impl<'a> CardView<'a> {
    pub fn new(caption: &'a str, body: CardBody<'a>) -> Self {
        Self { caption, body }
    }

    /// Render into a scratch buffer and copy the rows of the card that fall
    /// inside `viewport`. `canvas_top` is the card's first row on the grid
    /// canvas, `offset` the canvas row drawn at `viewport.y`.
    pub fn render_clipped(
        self,
        x: u16,
        canvas_top: u32,
        (width, height): (u16, u16),
        offset: u32,
        viewport: Rect,
        buf: &mut Buffer,
    ) {
        let scratch_area = Rect::new(0, 0, width, height);
        let mut scratch = Buffer::empty(scratch_area);
        self.render(scratch_area, &mut scratch);

        let visible_cols = width.min(viewport.right().saturating_sub(x));
        for row in 0..height {
            let canvas_row = canvas_top + u32::from(row);
            if canvas_row < offset || canvas_row - offset >= u32::from(viewport.height) {
                continue;
            }
            let dst_y = viewport.y + (canvas_row - offset) as u16;
            for col in 0..visible_cols {
                if let Some(dst) = buf.cell_mut((x + col, dst_y)) {
                    *dst = scratch[(col, row)].clone();
                }
            }
        }
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(Span::styled(self.caption, Style::default().fg(HEADER_TEXT)));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.body {
            CardBody::Loading => {
                render_notice(inner, buf, "Loading...", PLACEHOLDER_TEXT);
            }
            CardBody::Unavailable => {
                render_notice(inner, buf, "Image unavailable", STATUS_ERROR);
            }
            CardBody::Image(thumbnail) => ThumbnailView::new(thumbnail).render(inner, buf),
        }
    }
}

fn render_notice(area: Rect, buf: &mut Buffer, text: &str, color: Color) {
    buf.set_style(area, Style::default().bg(PLACEHOLDER_FILL));
    if area.height == 0 {
        return;
    }
    let line = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    Paragraph::new(text)
        .style(Style::default().fg(color).bg(PLACEHOLDER_FILL))
        .alignment(Alignment::Center)
        .render(line, buf);
}

/// Draws a thumbnail with upper half blocks, clipped to `area`.
pub struct ThumbnailView<'a> {
    thumbnail: &'a Thumbnail,
}

impl<'a> ThumbnailView<'a> {
    pub fn new(thumbnail: &'a Thumbnail) -> Self {
        Self { thumbnail }
    }
}

impl Widget for ThumbnailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.thumbnail.size();
        for row in 0..area.height.min(size.rows) {
            for col in 0..area.width.min(size.cols) {
                let Some(block) = self.thumbnail.cell(col, row) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    let [tr, tg, tb] = block.top;
                    let [br, bg, bb] = block.bottom;
                    cell.set_symbol("▀")
                        .set_fg(Color::Rgb(tr, tg, tb))
                        .set_bg(Color::Rgb(br, bg, bb));
                }
            }
        }
    }
}
