//! Skill categories with animated proficiency bars.
//!
//! A bar starts at its declared width (content renders before any animation
//! runs), drops to zero the first time half the skills block scrolls into
//! view, and refills to the declared width after a short delay. The refill
//! eases over a fixed transition window. Each bar animates once per session.

use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::content::SkillCategory;
use crate::ui::components::theme::ThemePalette;
use crate::ui::components::widgets::percent_bar;
use crate::ui::viewport::FractionGate;

/// Delay between the zero-capture and the refill.
pub const FILL_DELAY: Duration = Duration::from_millis(500);
/// Duration of the eased refill.
pub const FILL_EASE: Duration = Duration::from_millis(600);
/// Fraction of the block that must be visible to start the animation.
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Bar glyph column width.
const BAR_WIDTH: u16 = 20;
/// Label column width before the bar.
const LABEL_WIDTH: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BarPhase {
    /// Untouched; shows the declared width.
    Waiting,
    /// Zeroed; refill due at the deadline.
    Armed { fill_at: Instant },
    /// Refilled; easing measured from the deadline.
    Filled { since: Instant },
}

/// Animation state for one proficiency bar.
#[derive(Debug)]
pub struct SkillBar {
    target: u8,
    phase: BarPhase,
    gate: FractionGate,
}

impl SkillBar {
    pub fn new(target: u8) -> Self {
        Self {
            target,
            phase: BarPhase::Waiting,
            gate: FractionGate::new(VISIBILITY_THRESHOLD),
        }
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    /// Feed the visible fraction of the enclosing skills block. The first
    /// observation at or above the threshold zeroes the bar and schedules the
    /// refill; the animation never re-triggers.
    pub fn observe_visibility(&mut self, fraction: f32, now: Instant) {
        if self.gate.observe(fraction) {
            self.phase = BarPhase::Armed {
                fill_at: now + FILL_DELAY,
            };
        }
    }

    /// Process the refill deadline if it has passed.
    pub fn advance(&mut self, now: Instant) {
        if let BarPhase::Armed { fill_at } = self.phase {
            if fill_at <= now {
                self.phase = BarPhase::Filled { since: fill_at };
            }
        }
    }

    /// Logical width: declared before animation, zero while armed, declared
    /// again once refilled.
    pub fn width_percent(&self) -> u8 {
        match self.phase {
            BarPhase::Waiting => self.target,
            BarPhase::Armed { .. } => 0,
            BarPhase::Filled { .. } => self.target,
        }
    }

    /// Width to draw at `now`, including the eased refill.
    pub fn display_percent(&self, now: Instant) -> f32 {
        match self.phase {
            BarPhase::Waiting => f32::from(self.target),
            BarPhase::Armed { .. } => 0.0,
            BarPhase::Filled { since } => {
                let elapsed = now.saturating_duration_since(since);
                if elapsed >= FILL_EASE {
                    return f32::from(self.target);
                }
                let t = elapsed.as_secs_f32() / FILL_EASE.as_secs_f32();
                let eased = 1.0 - (1.0 - t).powi(3);
                f32::from(self.target) * eased
            }
        }
    }

    pub fn has_animated(&self) -> bool {
        self.gate.has_fired()
    }
}

/// Rows the category list occupies (title excluded): one per category name,
/// bar, and item, plus a separator row between categories.
pub fn body_rows(categories: &[SkillCategory]) -> u16 {
    let rows: usize = categories
        .iter()
        .map(|c| 1 + c.bars.len() + c.items.len())
        .sum();
    let gaps = categories.len().saturating_sub(1);
    (rows + gaps) as u16
}

/// Draw the skills block at `area` (document coordinates).
///
/// `bars` holds animation state for every bar across all categories, in
/// declaration order. Returns one rect per hoverable row (bars and items,
/// same order); the row at `hovered` is drawn shifted with a tinted
/// background.
#[allow(clippy::too_many_arguments)]
pub fn draw_skills(
    buf: &mut Buffer,
    area: Rect,
    title: Option<&str>,
    categories: &[SkillCategory],
    bars: &[SkillBar],
    hovered: Option<usize>,
    palette: ThemePalette,
    now: Instant,
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
    let mut bar_idx = 0;
    let mut hover_idx = 0;
    for (cat_idx, category) in categories.iter().enumerate() {
        if cat_idx > 0 {
            y += 1;
        }
        buf.set_line(
            area.x,
            y,
            &Line::from(Span::styled(
                category.name.clone(),
                Style::default().fg(palette.accent_alt),
            )),
            area.width,
        );
        y += 1;

        for bar_spec in &category.bars {
            let is_hovered = hovered == Some(hover_idx);
            let percent = bars
                .get(bar_idx)
                .map(|b| b.display_percent(now))
                .unwrap_or_else(|| f32::from(bar_spec.percent));
            let indent = if is_hovered { 3 } else { 2 };
            let mut spans = vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(
                    format!("{:<LABEL_WIDTH$}", bar_spec.label),
                    Style::default().fg(palette.fg),
                ),
            ];
            spans.extend(percent_bar(percent, BAR_WIDTH, palette));
            let mut line = Line::from(spans);
            if is_hovered {
                line = line.style(Style::default().bg(palette.hover_bg));
            }
            buf.set_line(area.x, y, &line, area.width);
            rects.push(Rect::new(area.x, y, area.width, 1));
            y += 1;
            bar_idx += 1;
            hover_idx += 1;
        }

        for item in &category.items {
            let is_hovered = hovered == Some(hover_idx);
            let indent = if is_hovered { 3 } else { 2 };
            let mut line = Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled("• ", Style::default().fg(palette.accent)),
                Span::styled(item.clone(), Style::default().fg(palette.fg)),
            ]);
            if is_hovered {
                line = line.style(Style::default().bg(palette.hover_bg));
            }
            buf.set_line(area.x, y, &line, area.width);
            rects.push(Rect::new(area.x, y, area.width, 1));
            y += 1;
            hover_idx += 1;
        }
    }
    rects
}
