//! Scripted transcript reel.
//!
//! The demo block replays a canned terminal exchange: lines appear one at a
//! time on a fixed cadence, the finished transcript holds on screen, then the
//! reel clears and starts over. Playback arms once, the first time at least
//! half of the block scrolls into view.
//!
//! All transitions are anchored to their scheduled deadline rather than the
//! tick that observed it, so a slow tick cannot stretch the cadence.

use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::ui::components::theme::ThemePalette;
use crate::ui::components::widgets::themed_block;
use crate::ui::viewport::FractionGate;

/// Delay between arming and the first line.
pub const START_DELAY: Duration = Duration::from_millis(1000);
/// Cadence between consecutive lines.
pub const LINE_INTERVAL: Duration = Duration::from_millis(1500);
/// How long the completed transcript holds before clearing.
pub const HOLD_DELAY: Duration = Duration::from_millis(3000);
/// Gap between the clear and the restart.
pub const RESTART_GAP: Duration = Duration::from_millis(1000);
/// Fraction of the block that must be visible to arm playback.
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoPhase {
    /// Not yet scrolled into view.
    Waiting,
    /// Seen; first line due at the deadline.
    Armed { start_at: Instant },
    /// Lines appearing; next line (or the completion check) due at the
    /// deadline.
    Revealing { next_at: Instant },
    /// Full transcript on screen until the deadline.
    Holding { until: Instant },
    /// Cleared; replay due at the deadline.
    Resetting { resume_at: Instant },
}

/// Playback state for one demo block.
#[derive(Debug)]
pub struct DemoReel {
    line_count: usize,
    visible: usize,
    phase: DemoPhase,
    gate: FractionGate,
}

impl DemoReel {
    pub fn new(line_count: usize) -> Self {
        Self {
            line_count,
            visible: 0,
            phase: DemoPhase::Waiting,
            gate: FractionGate::new(VISIBILITY_THRESHOLD),
        }
    }

    /// Feed the current visible fraction of the block. Arms playback on the
    /// first observation at or above the threshold; later observations are
    /// ignored, including scrolling back out of view.
    pub fn observe_visibility(&mut self, fraction: f32, now: Instant) {
        if self.gate.observe(fraction) {
            self.phase = DemoPhase::Armed {
                start_at: now + START_DELAY,
            };
        }
    }

    pub fn has_started(&self) -> bool {
        self.gate.has_fired()
    }

    /// Lines currently shown, from the top of the transcript.
    pub fn visible_lines(&self) -> usize {
        self.visible
    }

    /// Process every deadline that has passed by `now`.
    pub fn advance(&mut self, now: Instant) {
        loop {
            match self.phase {
                DemoPhase::Waiting => return,
                DemoPhase::Armed { start_at } => {
                    if start_at > now {
                        return;
                    }
                    self.begin_reveal(start_at);
                }
                DemoPhase::Revealing { next_at } => {
                    if next_at > now {
                        return;
                    }
                    if self.visible < self.line_count {
                        self.visible += 1;
                        self.phase = DemoPhase::Revealing {
                            next_at: next_at + LINE_INTERVAL,
                        };
                    } else {
                        self.phase = DemoPhase::Holding {
                            until: next_at + HOLD_DELAY,
                        };
                    }
                }
                DemoPhase::Holding { until } => {
                    if until > now {
                        return;
                    }
                    self.visible = 0;
                    self.phase = DemoPhase::Resetting {
                        resume_at: until + RESTART_GAP,
                    };
                }
                DemoPhase::Resetting { resume_at } => {
                    if resume_at > now {
                        return;
                    }
                    self.begin_reveal(resume_at);
                }
            }
        }
    }

    fn begin_reveal(&mut self, at: Instant) {
        if self.line_count == 0 {
            // Nothing to type out; cycle straight through the hold.
            self.phase = DemoPhase::Holding {
                until: at + HOLD_DELAY,
            };
        } else {
            self.visible = 1;
            self.phase = DemoPhase::Revealing {
                next_at: at + LINE_INTERVAL,
            };
        }
    }
}

/// Rows the demo block occupies: transcript plus the window border.
pub fn block_rows(line_count: usize) -> u16 {
    line_count as u16 + 2
}

/// Draw the demo window at `area` (document coordinates), showing the first
/// `visible` transcript lines.
pub fn draw_demo(
    buf: &mut Buffer,
    area: Rect,
    title: Option<&str>,
    lines: &[String],
    visible: usize,
    palette: ThemePalette,
) {
    let block = themed_block(title.unwrap_or("demo"), palette, false);
    let inner = block.inner(area);
    block.render(area, buf);

    for (idx, text) in lines.iter().take(visible).enumerate() {
        let y = inner.y + idx as u16;
        if y >= inner.bottom() {
            break;
        }
        // Prompt lines in accent, bot replies in body text.
        let style = if text.starts_with("[bot]") {
            Style::default().fg(palette.fg)
        } else {
            Style::default().fg(palette.accent)
        };
        buf.set_line(
            inner.x,
            y,
            &Line::from(Span::styled(text.clone(), style)),
            inner.width,
        );
    }
}
