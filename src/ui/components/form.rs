//! Contact form: field editing, validation, and a simulated send.
//!
//! Submission never leaves the process. A valid submit enters a sending phase
//! for a fixed delay, then swaps the form for a success panel; after a longer
//! delay the panel clears and a blank form returns. Validation runs over every
//! required field on each submit attempt, so all problems surface at once.

use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};
use regex::Regex;

use crate::content::{FieldKind, FieldSpec};
use crate::ui::components::theme::ThemePalette;

/// How long the simulated send takes.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
/// How long the success panel stays before the form resets.
pub const RESET_DELAY: Duration = Duration::from_millis(5000);

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Shape check for email addresses: something, an `@`, something, a dot,
/// something, no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Keyboard focus inside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Field(usize),
    Submit,
}

impl FormTarget {
    /// Tab order: fields top to bottom, then the submit button, wrapping.
    pub fn next(self, field_count: usize) -> Self {
        match self {
            FormTarget::Field(i) if i + 1 < field_count => FormTarget::Field(i + 1),
            FormTarget::Field(_) => FormTarget::Submit,
            FormTarget::Submit if field_count == 0 => FormTarget::Submit,
            FormTarget::Submit => FormTarget::Field(0),
        }
    }

    pub fn prev(self, field_count: usize) -> Self {
        match self {
            FormTarget::Field(0) | FormTarget::Submit if field_count == 0 => FormTarget::Submit,
            FormTarget::Field(0) => FormTarget::Submit,
            FormTarget::Field(i) => FormTarget::Field(i - 1),
            FormTarget::Submit => FormTarget::Field(field_count - 1),
        }
    }
}

/// Lifecycle of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    /// Simulated send in flight; completes at the deadline.
    Submitting { done_at: Instant },
    /// Success panel shown; form returns at the deadline.
    Success { reset_at: Instant },
}

impl FormPhase {
    pub fn is_busy(&self) -> bool {
        !matches!(self, FormPhase::Editing)
    }
}

/// One field plus its buffer and current validation result.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub value: String,
    pub error: Option<&'static str>,
}

/// State for one contact form block.
#[derive(Debug)]
pub struct ContactForm {
    fields: Vec<FieldState>,
    success: String,
    focused: FormTarget,
    phase: FormPhase,
}

impl ContactForm {
    pub fn new(specs: &[FieldSpec], success: &str) -> Self {
        Self {
            fields: specs
                .iter()
                .map(|spec| FieldState {
                    spec: spec.clone(),
                    value: String::new(),
                    error: None,
                })
                .collect(),
            success: success.to_string(),
            focused: FormTarget::Field(0),
            phase: FormPhase::Editing,
        }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn focused(&self) -> FormTarget {
        self.focused
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn success_message(&self) -> &str {
        &self.success
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    /// Form hidden, success panel up.
    pub fn is_sent(&self) -> bool {
        matches!(self.phase, FormPhase::Success { .. })
    }

    pub fn focus(&mut self, target: FormTarget) {
        let valid = match target {
            FormTarget::Field(i) => i < self.fields.len(),
            FormTarget::Submit => true,
        };
        if valid {
            self.focused = target;
        }
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next(self.fields.len());
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev(self.fields.len());
    }

    /// Append to the focused field. Ignored while a send is in flight.
    pub fn push_char(&mut self, c: char) {
        if self.phase.is_busy() {
            return;
        }
        if let FormTarget::Field(i) = self.focused
            && let Some(field) = self.fields.get_mut(i)
        {
            field.value.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.phase.is_busy() {
            return;
        }
        if let FormTarget::Field(i) = self.focused
            && let Some(field) = self.fields.get_mut(i)
        {
            field.value.pop();
        }
    }

    /// True when the focused field accepts embedded newlines.
    pub fn focused_is_multiline(&self) -> bool {
        matches!(self.focused, FormTarget::Field(i)
            if self.fields.get(i).is_some_and(|f| f.spec.kind == FieldKind::Multiline))
    }

    /// Attempt a submit. Runs validation; on success enters the sending
    /// phase and returns `true`. Ignored outside the editing phase.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.phase.is_busy() {
            return false;
        }
        if !self.validate_all() {
            return false;
        }
        self.phase = FormPhase::Submitting {
            done_at: now + SUBMIT_DELAY,
        };
        true
    }

    /// Validate every field, recording or clearing errors as it goes.
    /// Only required fields can fail; all of them are checked so every
    /// problem is visible after one attempt.
    pub fn validate_all(&mut self) -> bool {
        let mut ok = true;
        for field in &mut self.fields {
            if !field.spec.required {
                field.error = None;
                continue;
            }
            if field.value.trim().is_empty() {
                field.error = Some(REQUIRED_MESSAGE);
                ok = false;
            } else if field.spec.kind == FieldKind::Email && !is_valid_email(&field.value) {
                field.error = Some(EMAIL_MESSAGE);
                ok = false;
            } else {
                field.error = None;
            }
        }
        ok
    }

    /// Process phase deadlines that have passed by `now`.
    pub fn advance(&mut self, now: Instant) {
        match self.phase {
            FormPhase::Editing => {}
            FormPhase::Submitting { done_at } => {
                if done_at <= now {
                    self.phase = FormPhase::Success {
                        reset_at: done_at + RESET_DELAY,
                    };
                }
            }
            FormPhase::Success { reset_at } => {
                if reset_at <= now {
                    for field in &mut self.fields {
                        field.value.clear();
                        field.error = None;
                    }
                    self.focused = FormTarget::Field(0);
                    self.phase = FormPhase::Editing;
                }
            }
        }
    }
}

fn input_rows(kind: FieldKind) -> u16 {
    match kind {
        FieldKind::Multiline => 4,
        FieldKind::Text | FieldKind::Email => 3,
    }
}

/// Rows one field occupies: label, input box, and the reserved error row.
fn field_rows(spec: &FieldSpec) -> u16 {
    1 + input_rows(spec.kind) + 1
}

/// Rows the form body occupies (title excluded). Constant across phases so
/// the page does not reflow when the success panel swaps in.
pub fn body_rows(specs: &[FieldSpec]) -> u16 {
    let fields: u16 = specs.iter().map(field_rows).sum();
    // Blank row, then the submit button row.
    fields + 2
}

/// Draw the form (or the success panel) at `area` in document coordinates.
///
/// `focused` selects whether keyboard focus is inside the form; focus
/// decoration is suppressed while browsing. Returns click targets; empty
/// while the success panel is up.
pub fn draw_contact_form(
    buf: &mut Buffer,
    area: Rect,
    title: Option<&str>,
    form: &ContactForm,
    focused: bool,
    palette: ThemePalette,
) -> Vec<(FormTarget, Rect)> {
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

    if form.is_sent() {
        draw_success_panel(buf, Rect::new(area.x, y, area.width, 3), form, palette);
        return Vec::new();
    }

    let mut hits = Vec::new();
    let box_width = area.width.min(60);

    for (idx, field) in form.fields().iter().enumerate() {
        let target = FormTarget::Field(idx);
        let has_focus = focused && form.focused() == target;
        let top = y;

        let marker = if field.spec.required { " *" } else { "" };
        let label_style = if has_focus {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.hint)
        };
        buf.set_line(
            area.x,
            y,
            &Line::from(Span::styled(
                format!("{}{marker}", field.spec.label),
                label_style,
            )),
            area.width,
        );
        y += 1;

        let rows = input_rows(field.spec.kind);
        let border_style = if field.error.is_some() {
            palette.error_style()
        } else if has_focus {
            palette.border_focus_style()
        } else {
            palette.border_style()
        };
        let input_area = Rect::new(area.x, y, box_width, rows);
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .render(input_area, buf);

        // Show the tail of the buffer so the insertion point stays visible.
        let inner_rows = rows - 2;
        let value_lines: Vec<&str> = field.value.split('\n').collect();
        let start = value_lines.len().saturating_sub(inner_rows as usize);
        for (row, text) in value_lines[start..].iter().enumerate() {
            let is_last = start + row == value_lines.len() - 1;
            let mut spans = vec![Span::styled(
                (*text).to_string(),
                Style::default().fg(palette.fg),
            )];
            if is_last && has_focus {
                spans.push(Span::styled("▎", Style::default().fg(palette.accent)));
            }
            buf.set_line(
                input_area.x + 1,
                input_area.y + 1 + row as u16,
                &Line::from(spans),
                box_width.saturating_sub(2),
            );
        }
        y += rows;

        if let Some(error) = field.error {
            buf.set_line(
                area.x,
                y,
                &Line::from(Span::styled(error.to_string(), palette.error_style())),
                area.width,
            );
        }
        y += 1;

        hits.push((target, Rect::new(area.x, top, box_width, y - top)));
    }

    y += 1;
    let label = if form.is_sending() {
        "Sending..."
    } else {
        "Send message"
    };
    let submit_focus = focused && form.focused() == FormTarget::Submit;
    let button_style = if form.is_sending() {
        Style::default().fg(palette.hint)
    } else if submit_focus {
        Style::default()
            .fg(palette.bg)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.accent)
    };
    let button = format!("[ {label} ]");
    let button_cols = button.chars().count() as u16;
    buf.set_line(
        area.x,
        y,
        &Line::from(Span::styled(button, button_style)),
        area.width,
    );
    hits.push((FormTarget::Submit, Rect::new(area.x, y, button_cols, 1)));

    hits
}

fn draw_success_panel(buf: &mut Buffer, area: Rect, form: &ContactForm, palette: ThemePalette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.success_style());
    let inner = block.inner(area);
    block.render(area, buf);
    buf.set_line(
        inner.x + 1,
        inner.y,
        &Line::from(Span::styled(
            form.success_message().to_string(),
            palette.success_style(),
        )),
        inner.width.saturating_sub(1),
    );
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn plain_addresses_always_pass(
            local in "[a-z0-9]{1,12}",
            domain in "[a-z0-9]{1,12}",
            tld in "[a-z]{2,6}",
        ) {
            let addr = format!("{local}@{domain}.{tld}");
            prop_assert!(is_valid_email(&addr));
        }

        #[test]
        fn whitespace_anywhere_fails(
            local in "[a-z0-9]{1,8}",
            domain in "[a-z0-9]{1,8}",
            pos in 0usize..3,
        ) {
            let addr = match pos {
                0 => format!(" {local}@{domain}.dev"),
                1 => format!("{local} @{domain}.dev"),
                _ => format!("{local}@{domain}.dev "),
            };
            prop_assert!(!is_valid_email(&addr));
        }

        #[test]
        fn missing_at_or_dot_fails(s in "[a-z0-9]{1,20}") {
            prop_assert!(!is_valid_email(&s), "no @ at all");
            prop_assert!(!is_valid_email(&format!("{s}@{s}")), "no dot after @");
        }
    }
}
