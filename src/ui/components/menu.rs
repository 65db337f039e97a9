//! Top nav bar with a collapsible menu for narrow terminals.
//!
//! Wide and normal terminals show page titles inline. Narrow terminals show a
//! toggle control instead; activating it opens a dropdown over the document.
//! One marker bit drives both the control glyph and the dropdown, so the two
//! can never disagree.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::ui::components::theme::{TerminalWidth, ThemePalette};

/// Collapsed-nav toggle state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenu {
    active: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the open marker. The control and the dropdown both derive their
    /// appearance from the new value.
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn close(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Click targets produced by [`draw_nav`] for the current frame.
#[derive(Debug, Clone, Default)]
pub struct NavHits {
    /// Collapsed-nav toggle control, when shown.
    pub toggle: Option<Rect>,
    /// One rect per page title, in page order. Empty while the dropdown is
    /// closed on a narrow terminal.
    pub items: Vec<Rect>,
}

/// Render the nav strip into `area` and, when the collapsed menu is open, a
/// dropdown into the top of `below`.
pub fn draw_nav(
    f: &mut Frame<'_>,
    area: Rect,
    below: Rect,
    brand: &str,
    titles: &[String],
    current: usize,
    menu: NavMenu,
    width: TerminalWidth,
    palette: ThemePalette,
) -> NavHits {
    let mut hits = NavHits::default();
    if area.height == 0 {
        return hits;
    }

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(brand.to_string(), palette.title()),
    ];
    let brand_cols = 1 + brand.chars().count() as u16;

    if width.collapsed_nav() {
        // Toggle control at the right edge.
        let label = if menu.is_active() { "✕ Menu" } else { "≡ Menu" };
        let label_cols = label.chars().count() as u16;
        let x = area.right().saturating_sub(label_cols + 1);
        let pad = x.saturating_sub(area.x + brand_cols);
        spans.push(Span::raw(" ".repeat(pad as usize)));
        let style = if menu.is_active() {
            palette.highlight_style()
        } else {
            Style::default().fg(palette.fg)
        };
        spans.push(Span::styled(label.to_string(), style));
        hits.toggle = Some(Rect::new(x, area.y, label_cols, 1));
    } else {
        spans.push(Span::raw("   "));
        let mut x = area.x + brand_cols + 3;
        for (idx, title) in titles.iter().enumerate() {
            let cols = title.chars().count() as u16 + 2;
            let style = if idx == current {
                palette.highlight_style()
            } else {
                Style::default().fg(palette.fg)
            };
            spans.push(Span::styled(format!(" {title} "), style));
            hits.items.push(Rect::new(x, area.y, cols, 1));
            x += cols;
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), Rect { height: 1, ..area });

    if area.height > 1 {
        let rule = "─".repeat(area.width as usize);
        f.render_widget(
            Paragraph::new(Span::styled(rule, palette.border_style())),
            Rect::new(area.x, area.y + 1, area.width, 1),
        );
    }

    if width.collapsed_nav() && menu.is_active() {
        hits.items = draw_dropdown(f, below, titles, current, palette);
    }

    hits
}

/// Dropdown page list for the open collapsed menu. Returns one rect per page.
fn draw_dropdown(
    f: &mut Frame<'_>,
    below: Rect,
    titles: &[String],
    current: usize,
    palette: ThemePalette,
) -> Vec<Rect> {
    if below.height == 0 || titles.is_empty() {
        return Vec::new();
    }
    let widest = titles.iter().map(|t| t.chars().count()).max().unwrap_or(0) as u16;
    let w = (widest + 4).min(below.width);
    let h = (titles.len() as u16).min(below.height);
    let x = below.right().saturating_sub(w);
    let drop = Rect::new(x, below.y, w, h);

    f.render_widget(Clear, drop);
    let mut rects = Vec::new();
    let mut rows = Vec::new();
    for (idx, title) in titles.iter().enumerate() {
        if idx as u16 >= h {
            break;
        }
        let style = if idx == current {
            palette.highlight_style()
        } else {
            Style::default().fg(palette.fg).bg(palette.surface)
        };
        rows.push(Line::from(Span::styled(format!("  {title:<w$}", w = (w as usize).saturating_sub(2)), style)));
        rects.push(Rect::new(drop.x, drop.y + idx as u16, w, 1));
    }
    f.render_widget(
        Paragraph::new(rows).style(Style::default().bg(palette.surface)),
        drop,
    );
    rects
}
