use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub controls: Rect,
    pub status: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let [header, controls, status, grid, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    Regions {
        header,
        controls,
        status,
        grid,
        footer,
    }
}

pub fn grid_rect(area: Rect) -> Rect {
    layout_regions(area).grid
}
