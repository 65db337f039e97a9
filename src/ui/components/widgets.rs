//! Shared widget builders used across page blocks.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::ui::components::theme::{ThemePalette, kbd_style};

/// Bordered block with consistent title styling.
pub fn themed_block(title: &str, palette: ThemePalette, focused: bool) -> Block<'_> {
    let border_style = if focused {
        palette.border_focus_style()
    } else {
        palette.border_style()
    };

    let title_style = if focused {
        palette.title()
    } else {
        palette.title_subtle()
    };

    Block::default()
        .title(Span::styled(format!(" {title} "), title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Bracketed tag chips for project cards, e.g. `[rust] [terraform]`.
pub fn tag_chips(tags: &[String], palette: ThemePalette) -> Vec<Span<'static>> {
    let chip_style = Style::default()
        .fg(palette.accent_alt)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    for tag in tags {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{tag}]"), chip_style));
    }
    spans
}

/// Horizontal proficiency bar plus a numeric label.
///
/// `percent` may be fractional mid-animation; the label always shows the
/// rounded whole value.
pub fn percent_bar(percent: f32, width: u16, palette: ThemePalette) -> Vec<Span<'static>> {
    let clamped = percent.clamp(0.0, 100.0);
    let width = width as usize;
    let filled = ((clamped / 100.0) * width as f32).round() as usize;
    let filled = filled.min(width);
    let empty = width - filled;

    vec![
        Span::styled("█".repeat(filled), Style::default().fg(palette.accent)),
        Span::styled("░".repeat(empty), Style::default().fg(palette.bar_empty)),
        Span::raw(" "),
        Span::styled(
            format!("{:>3}%", clamped.round() as u8),
            Style::default().fg(palette.hint),
        ),
    ]
}

/// Footer-style hint pairs: `F1 help  ·  q quit`.
pub fn hint_line(palette: ThemePalette, entries: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, label) in entries {
        if !spans.is_empty() {
            spans.push(Span::styled("  ·  ", Style::default().fg(palette.hint)));
        }
        spans.push(Span::styled((*key).to_string(), kbd_style(palette)));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(palette.hint),
        ));
    }
    Line::from(spans)
}

/// Rect of the given size centered inside `r`, clamped to fit.
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width);
    let h = height.min(r.height);
    let x = r.x + (r.width - w) / 2;
    let y = r.y + (r.height - h) / 2;
    Rect::new(x, y, w, h)
}
