//! FAQ accordion: a list of questions with at most one answer expanded.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::content::FaqItem;
use crate::ui::components::theme::ThemePalette;

/// Which answer is expanded, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaqAccordion {
    open: Option<usize>,
    len: usize,
}

impl FaqAccordion {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    /// Activate the question at `idx`: every item collapses, then `idx`
    /// expands unless it was the one already open. Out-of-range indices are
    /// ignored.
    pub fn activate(&mut self, idx: usize) {
        if idx >= self.len {
            return;
        }
        self.open = if self.open == Some(idx) {
            None
        } else {
            Some(idx)
        };
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, idx: usize) -> bool {
        self.open == Some(idx)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Rows one item occupies given its expansion state.
pub fn item_rows(item: &FaqItem, is_open: bool) -> u16 {
    let answer = if is_open { item.answer.len() as u16 } else { 0 };
    1 + answer
}

/// Total rows for the block body (title excluded).
pub fn body_rows(items: &[FaqItem], open: Option<usize>) -> u16 {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| item_rows(item, open == Some(i)))
        .sum()
}

/// Draw the accordion at `area` (document coordinates). Returns one rect per
/// question row, in item order, for click hit-testing.
pub fn draw_faq(
    buf: &mut Buffer,
    area: Rect,
    title: Option<&str>,
    items: &[FaqItem],
    state: FaqAccordion,
    palette: ThemePalette,
) -> Vec<Rect> {
    let mut y = area.y;
    if let Some(title) = title {
        buf.set_line(
            area.x,
            y,
            &Line::from(Span::styled(title.to_string(), palette.title())),
            area.width,
        );
        y += 1;
    }

    let mut rects = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        let open = state.is_open(idx);
        let (marker, style) = if open {
            ("▾", palette.title())
        } else {
            ("▸", Style::default().fg(palette.fg))
        };
        buf.set_line(
            area.x,
            y,
            &Line::from(Span::styled(format!("{marker} {}", item.question), style)),
            area.width,
        );
        rects.push(Rect::new(area.x, y, area.width, 1));
        y += 1;

        if open {
            for answer_line in &item.answer {
                buf.set_line(
                    area.x,
                    y,
                    &Line::from(Span::styled(
                        format!("    {answer_line}"),
                        Style::default().fg(palette.hint),
                    )),
                    area.width,
                );
                y += 1;
            }
        }
    }
    rects
}
