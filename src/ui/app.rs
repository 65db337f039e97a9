//! Application state and event dispatch.
//!
//! One [`App`] owns the portfolio, the open page's widget state, and the
//! viewport. Input arrives as crossterm events, time arrives as ticks, and
//! every frame is drawn from scratch: the page renders into an off-screen
//! document buffer, the visible window is blitted into the frame, and the
//! interaction rects collected during the draw become next frame's click
//! and hover targets.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear, Paragraph};
use tracing::{debug, info, warn};

use crate::content::Portfolio;
use crate::guard::{self, ArtShield};
use crate::ui::components::form::FormTarget;
use crate::ui::components::theme::{TerminalWidth, ThemePalette, ThemePreset};
use crate::ui::components::widgets::{centered_rect_fixed, themed_block};
use crate::ui::components::menu;
use crate::ui::data::{FOOTER_HEIGHT, InputMode, NAV_HEIGHT};
use crate::ui::page::{self, PageState, layout_page};
use crate::ui::tui;
use crate::ui::viewport::{
    REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD, Viewport, visible_fraction,
};

/// Rows moved per wheel notch.
const WHEEL_STEP: f32 = 3.0;

/// Interaction targets from the last draw, already in screen coordinates and
/// clipped to the visible window.
#[derive(Debug, Default)]
pub struct FrameHits {
    pub nav_toggle: Option<Rect>,
    pub nav_items: Vec<Rect>,
    pub links: Vec<(String, Rect)>,
    pub faq: Vec<(usize, usize, Rect)>,
    pub form: Vec<(FormTarget, Rect)>,
    pub skill_rows: Vec<(usize, usize, Rect)>,
    pub cards: Vec<(usize, Rect)>,
}

pub struct App {
    pub portfolio: Portfolio,
    pub current_page: usize,
    pub theme: ThemePreset,
    pub palette: ThemePalette,
    pub viewport: Viewport,
    pub page_state: PageState,
    pub mode: InputMode,
    pub show_help: bool,
    pub guard_enabled: bool,
    pub should_quit: bool,
    pub hits: FrameHits,
    pub shield: ArtShield,
    /// Left button went down on shielded artwork; drags are swallowed until
    /// the button comes back up.
    drag_from_art: bool,
    /// Last reported pointer cell.
    pointer: Option<(u16, u16)>,
    loaded: bool,
}

impl App {
    pub fn new(
        portfolio: Portfolio,
        start_page: usize,
        theme: ThemePreset,
        guard_enabled: bool,
    ) -> Self {
        let mut app = Self {
            portfolio,
            current_page: 0,
            theme,
            palette: theme.to_palette(),
            viewport: Viewport::new(),
            page_state: PageState::empty(),
            mode: InputMode::Browse,
            show_help: false,
            guard_enabled,
            should_quit: false,
            hits: FrameHits::default(),
            shield: ArtShield::new(),
            drag_from_art: false,
            pointer: None,
            loaded: false,
        };
        app.open_page(start_page);
        app
    }

    /// Switch to the page at `idx`, resetting scroll and all widget state, as
    /// a fresh document load would. Out-of-range indices are ignored.
    pub fn open_page(&mut self, idx: usize) {
        let Some(page) = self.portfolio.pages.get(idx) else {
            debug!(component = "app", idx, "page index out of range");
            return;
        };
        self.current_page = idx;
        self.page_state = PageState::wire(page);
        self.viewport.jump_top();
        self.mode = InputMode::Browse;
        self.hits = FrameHits::default();
        self.drag_from_art = false;
        info!(
            component = "app",
            operation = "open_page",
            page = %page.id,
            title = %page.title,
            "page opened"
        );
    }

    /// Glide the viewport to a named anchor on the current page. A missing
    /// anchor leaves the scroll untouched.
    pub fn fragment(&mut self, anchor: &str, now: Instant) {
        let Some(page) = self.portfolio.pages.get(self.current_page) else {
            return;
        };
        let layout = layout_page(page, &self.page_state);
        match layout.anchor_top(anchor) {
            Some(top) => {
                self.viewport.glide_to(top, now);
                debug!(component = "app", operation = "fragment", anchor, "gliding to anchor");
            }
            None => {
                debug!(component = "app", operation = "fragment", anchor, "anchor not on page");
            }
        }
    }

    fn next_page(&mut self) {
        let n = self.portfolio.pages.len();
        if n > 0 {
            self.open_page((self.current_page + 1) % n);
        }
    }

    fn prev_page(&mut self) {
        let n = self.portfolio.pages.len();
        if n > 0 {
            self.open_page((self.current_page + n - 1) % n);
        }
    }

    fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.palette = self.theme.to_palette();
        info!(component = "app", theme = self.theme.name(), "theme switched");
    }

    /// Drive time-based state: the scroll glide, visibility-triggered
    /// reveals, the demo reel, skill bar fills, and the form send cycle.
    pub fn on_tick(&mut self, now: Instant) {
        self.viewport.on_tick(now);
        let Some(page) = self.portfolio.pages.get(self.current_page) else {
            return;
        };
        let layout = layout_page(page, &self.page_state);
        self.viewport
            .set_extent(layout.doc_height, self.viewport.view_height());
        let scroll = self.viewport.offset();
        let view = self.viewport.view_height();

        for (idx, element) in layout.elements.iter().enumerate() {
            if !element.reveal {
                continue;
            }
            if let Some(flag) = self.page_state.revealed.get_mut(idx)
                && !*flag
            {
                let fraction =
                    visible_fraction(element.region, scroll, view, REVEAL_BOTTOM_MARGIN);
                if fraction >= REVEAL_THRESHOLD {
                    *flag = true;
                }
            }
        }

        for (block, reel) in self.page_state.demos.iter_mut() {
            if let Some(element) = layout.elements.iter().find(|e| e.block == *block) {
                reel.observe_visibility(visible_fraction(element.region, scroll, view, 0), now);
            }
            reel.advance(now);
        }

        for (block, bars) in self.page_state.bars.iter_mut() {
            if let Some(element) = layout.elements.iter().find(|e| e.block == *block) {
                let fraction = visible_fraction(element.region, scroll, view, 0);
                for bar in bars.iter_mut() {
                    bar.observe_visibility(fraction, now);
                }
            }
            for bar in bars.iter_mut() {
                bar.advance(now);
            }
        }

        if let Some((_, form)) = self.page_state.form.as_mut() {
            let sending = form.is_sending();
            form.advance(now);
            if sending && form.is_sent() {
                info!(component = "form", operation = "send", "simulated send complete");
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if self.guard_enabled {
            if guard::is_screenshot_release(&key) {
                guard::clear_clipboard();
                warn!(component = "guard", operation = "screenshot", "screenshot key detected");
                return;
            }
            if guard::should_swallow_key(&key) {
                let over_art = self
                    .pointer
                    .is_some_and(|(col, row)| self.shield.covers(col, row));
                if over_art && guard::is_art_guarded_combo(key.code, key.modifiers) {
                    warn!(
                        component = "guard",
                        operation = "swallow_key",
                        context = "artwork",
                        "inspect chord blocked"
                    );
                } else {
                    warn!(component = "guard", operation = "swallow_key", "inspect chord blocked");
                }
                return;
            }
        }
        if key.kind == KeyEventKind::Release {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match self.mode {
            InputMode::Browse => self.on_browse_key(key, now),
            InputMode::Form => self.on_form_key(key, now),
        }
    }

    fn on_browse_key(&mut self, key: KeyEvent, _now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::F(1) => self.show_help = true,
            KeyCode::F(2) => self.cycle_theme(),
            KeyCode::Char('m') => self.page_state.menu.toggle(),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                if idx < self.portfolio.pages.len() {
                    self.open_page(idx);
                }
            }
            KeyCode::Char(']') => self.next_page(),
            KeyCode::Char('[') => self.prev_page(),
            KeyCode::Char('j') | KeyCode::Down => self.viewport.scroll_by(1.0),
            KeyCode::Char('k') | KeyCode::Up => self.viewport.scroll_by(-1.0),
            KeyCode::PageDown => self.viewport.scroll_by(self.page_step()),
            KeyCode::PageUp => {
                let step = self.page_step();
                self.viewport.scroll_by(-step);
            }
            KeyCode::Home => self.viewport.jump_top(),
            KeyCode::End => self.viewport.jump_bottom(),
            KeyCode::Tab => {
                if self.page_state.form.is_some() {
                    self.mode = InputMode::Form;
                    debug!(component = "app", "form focused");
                }
            }
            _ => {}
        }
    }

    fn on_form_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        let Some((_, form)) = self.page_state.form.as_mut() else {
            self.mode = InputMode::Browse;
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.mode = InputMode::Browse;
                debug!(component = "app", "form left");
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Enter => {
                if form.focused() == FormTarget::Submit {
                    if form.submit(now) {
                        info!(component = "form", operation = "submit", "submission started");
                    }
                } else if form.focused_is_multiline() {
                    form.push_char('\n');
                } else {
                    form.next_field();
                }
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                form.push_char(c);
            }
            _ => {}
        }
    }

    fn page_step(&self) -> f32 {
        f32::from(self.viewport.view_height().saturating_sub(2).max(1))
    }

    pub fn on_mouse(&mut self, event: MouseEvent, now: Instant) {
        self.pointer = Some((event.column, event.row));
        if self.guard_enabled && guard::is_right_button(&event) {
            if matches!(event.kind, MouseEventKind::Down(MouseButton::Right)) {
                debug!(
                    component = "guard",
                    operation = "context_menu",
                    column = event.column,
                    row = event.row,
                    "right click suppressed"
                );
            }
            return;
        }
        match event.kind {
            MouseEventKind::ScrollDown => self.viewport.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.viewport.scroll_by(-WHEEL_STEP),
            MouseEventKind::Moved => self.update_hover(event.column, event.row),
            MouseEventKind::Down(MouseButton::Left) => {
                self.on_left_click(event.column, event.row, now);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                // Swallowed while a drag that started on artwork is live.
                if !self.drag_from_art {
                    self.update_hover(event.column, event.row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.drag_from_art = false,
            _ => {}
        }
    }

    fn update_hover(&mut self, column: u16, row: u16) {
        let pos = Position::new(column, row);
        self.page_state.hovered_skill = self
            .hits
            .skill_rows
            .iter()
            .find(|(_, _, rect)| rect.contains(pos))
            .map(|(block, skill_row, _)| (*block, *skill_row));
        self.page_state.hovered_card = self
            .hits
            .cards
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(el_idx, _)| *el_idx);
    }

    fn on_left_click(&mut self, column: u16, row: u16, now: Instant) {
        if self.guard_enabled && self.shield.covers(column, row) {
            self.drag_from_art = true;
            debug!(
                component = "guard",
                operation = "art_press",
                column,
                row,
                "press on artwork swallowed"
            );
            return;
        }
        let pos = Position::new(column, row);

        if let Some(toggle) = self.hits.nav_toggle
            && toggle.contains(pos)
        {
            self.page_state.menu.toggle();
            return;
        }
        if let Some(idx) = self.hits.nav_items.iter().position(|r| r.contains(pos)) {
            self.open_page(idx);
            return;
        }
        if let Some(anchor) = self
            .hits
            .links
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(anchor, _)| anchor.clone())
        {
            self.fragment(&anchor, now);
            return;
        }
        if let Some((block, item)) = self
            .hits
            .faq
            .iter()
            .find(|(_, _, rect)| rect.contains(pos))
            .map(|(block, item, _)| (*block, *item))
        {
            if let Some(acc) = self.page_state.faq_for(block) {
                acc.activate(item);
                debug!(component = "app", operation = "faq", item, open = acc.is_open(item), "faq toggled");
            }
            return;
        }
        if let Some(target) = self
            .hits
            .form
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(target, _)| *target)
        {
            if let Some((_, form)) = self.page_state.form.as_mut() {
                form.focus(target);
                self.mode = InputMode::Form;
                if target == FormTarget::Submit && form.submit(now) {
                    info!(component = "form", operation = "submit", "submission started");
                }
            }
        }
    }

    /// Render one frame and refresh interaction targets.
    pub fn draw(&mut self, f: &mut Frame<'_>, now: Instant) {
        let size = f.area();
        f.render_widget(
            Block::default().style(Style::default().bg(self.palette.bg).fg(self.palette.fg)),
            size,
        );

        let chunks = Layout::vertical([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(size);
        let nav_area = chunks[0];
        let content_full = chunks[1];
        let footer_area = chunks[2];

        let width_class = TerminalWidth::from_cols(size.width);
        let margin = width_class.content_margin(size.width);
        let content = Rect {
            x: content_full.x + margin,
            width: content_full.width.saturating_sub(margin * 2),
            ..content_full
        };

        let Some(page) = self.portfolio.pages.get(self.current_page) else {
            return;
        };
        let layout = layout_page(page, &self.page_state);
        self.viewport.set_extent(layout.doc_height, content.height);

        self.hits = FrameHits::default();
        self.shield.begin_frame();

        if content.width > 0 && content.height > 0 {
            let doc_area = Rect::new(0, 0, content.width, layout.doc_height.max(1));
            let mut doc = Buffer::empty(doc_area);
            doc.set_style(
                doc_area,
                Style::default().bg(self.palette.bg).fg(self.palette.fg),
            );
            let page_hits = page::draw_page(
                &mut doc,
                page,
                &self.page_state,
                &layout,
                self.palette,
                self.mode.is_form(),
                now,
            );

            let scroll = self.viewport.scroll_row();
            let fbuf = f.buffer_mut();
            for row in 0..content.height {
                let Some(doc_row) = scroll.checked_add(row) else {
                    break;
                };
                if doc_row >= layout.doc_height {
                    break;
                }
                for col in 0..content.width {
                    if let Some(src) = doc.cell((col, doc_row))
                        && let Some(dst) = fbuf.cell_mut((content.x + col, content.y + row))
                    {
                        *dst = src.clone();
                    }
                }
            }

            for (anchor, rect) in page_hits.links {
                if let Some(rect) = doc_to_screen(rect, scroll, content) {
                    self.hits.links.push((anchor, rect));
                }
            }
            for (block, item, rect) in page_hits.faq {
                if let Some(rect) = doc_to_screen(rect, scroll, content) {
                    self.hits.faq.push((block, item, rect));
                }
            }
            for (target, rect) in page_hits.form {
                if let Some(rect) = doc_to_screen(rect, scroll, content) {
                    self.hits.form.push((target, rect));
                }
            }
            for (block, skill_row, rect) in page_hits.skill_rows {
                if let Some(rect) = doc_to_screen(rect, scroll, content) {
                    self.hits.skill_rows.push((block, skill_row, rect));
                }
            }
            for (el_idx, rect) in page_hits.cards {
                if let Some(rect) = doc_to_screen(rect, scroll, content) {
                    self.hits.cards.push((el_idx, rect));
                }
            }
            for rect in page_hits.art {
                if let Some(rect) = doc_to_screen(rect, scroll, content) {
                    self.shield.add(rect);
                }
            }
        }

        let titles: Vec<String> = self.portfolio.pages.iter().map(|p| p.title.clone()).collect();
        let nav_hits = menu::draw_nav(
            f,
            nav_area,
            content_full,
            &self.portfolio.name,
            &titles,
            self.current_page,
            self.page_state.menu,
            width_class,
            self.palette,
        );
        self.hits.nav_toggle = nav_hits.toggle;
        self.hits.nav_items = nav_hits.items;

        if footer_area.height > 0 && width_class.show_hints() {
            let legend = tui::footer_legend(self.mode.is_form());
            f.render_widget(
                Paragraph::new(legend).style(Style::default().fg(self.palette.hint)),
                footer_area,
            );
        }

        if self.show_help {
            let lines = tui::help_lines(self.palette);
            let h = lines.len() as u16 + 2;
            let area = centered_rect_fixed(58, h, size);
            f.render_widget(Clear, area);
            let block = themed_block("Help", self.palette, true);
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(
                Paragraph::new(lines).style(Style::default().bg(self.palette.surface)),
                inner,
            );
        }

        if !self.loaded {
            self.loaded = true;
            info!(
                component = "app",
                cols = size.width,
                rows = size.height,
                "interface ready"
            );
        }
    }
}

/// Translate a document-coordinate rect into screen coordinates, clipping to
/// the visible window. Fully scrolled-out rects disappear.
fn doc_to_screen(rect: Rect, scroll: u16, content: Rect) -> Option<Rect> {
    if rect.width == 0 || rect.height == 0 || rect.x >= content.width {
        return None;
    }
    let top = rect.y;
    let bottom = rect.y.saturating_add(rect.height);
    let view_bottom = scroll.saturating_add(content.height);
    if bottom <= scroll || top >= view_bottom {
        return None;
    }
    let clipped_top = top.max(scroll);
    let clipped_bottom = bottom.min(view_bottom);
    Some(Rect::new(
        content.x + rect.x,
        content.y + (clipped_top - scroll),
        rect.width.min(content.width - rect.x),
        clipped_bottom - clipped_top,
    ))
}
