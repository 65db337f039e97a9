//! Page layout and rendering.
//!
//! A page renders as one tall column of rows (the document). [`layout_page`]
//! assigns every element a [`Region`]; [`draw_page`] paints the elements into
//! an off-screen buffer in document coordinates, and the app blits the
//! visible window. Heights depend only on content and widget state (an open
//! FAQ answer adds rows), never on scroll position, so regions stay stable
//! while the user scrolls.
//!
//! Reveal-eligible elements (sections, cards, projects, the demo, skills)
//! start hidden and are skipped by the draw until their region has been seen;
//! the app flips `revealed` flags from viewport visibility.

use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use tracing::{debug, warn};

use crate::content::{Block, BlockKind, Page};
use crate::ui::components::demo::{self, DemoReel};
use crate::ui::components::faq::{self, FaqAccordion};
use crate::ui::components::form::{self, ContactForm, FormTarget};
use crate::ui::components::menu::NavMenu;
use crate::ui::components::skills::{self, SkillBar};
use crate::ui::components::theme::ThemePalette;
use crate::ui::components::widgets::{tag_chips, themed_block};
use crate::ui::viewport::Region;

/// Blank rows between consecutive blocks.
const BLOCK_GAP: u16 = 1;

/// Which part of a block an element draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Whole,
    Card(usize),
    Project(usize),
}

/// One independently placed (and possibly independently revealed) unit.
#[derive(Debug, Clone)]
pub struct Element {
    pub block: usize,
    pub part: Part,
    pub region: Region,
    pub anchor: Option<String>,
    /// Hidden until scrolled into view when set.
    pub reveal: bool,
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    pub elements: Vec<Element>,
    pub doc_height: u16,
}

impl PageLayout {
    /// Document row of the anchored block, if the anchor exists.
    pub fn anchor_top(&self, anchor: &str) -> Option<u16> {
        self.elements
            .iter()
            .find(|e| e.anchor.as_deref() == Some(anchor))
            .map(|e| e.region.top)
    }
}

/// Interactive widget state for the open page. Rebuilt from scratch on every
/// page switch, like a fresh document load.
#[derive(Debug)]
pub struct PageState {
    pub menu: NavMenu,
    /// Aligned with `PageLayout::elements`.
    pub revealed: Vec<bool>,
    pub demos: Vec<(usize, DemoReel)>,
    pub form: Option<(usize, ContactForm)>,
    pub faqs: Vec<(usize, FaqAccordion)>,
    /// Bar animation state per skills block, in block order.
    pub bars: Vec<(usize, Vec<SkillBar>)>,
    /// Hovered skills row: (block index, row index).
    pub hovered_skill: Option<(usize, usize)>,
    /// Hovered card or project element index.
    pub hovered_card: Option<usize>,
}

impl PageState {
    /// State with no widgets at all, used before any page has been opened.
    pub fn empty() -> Self {
        Self {
            menu: NavMenu::new(),
            revealed: Vec::new(),
            demos: Vec::new(),
            form: None,
            faqs: Vec::new(),
            bars: Vec::new(),
            hovered_skill: None,
            hovered_card: None,
        }
    }

    /// Wire up widget state for every interactive block on the page.
    /// Blocks that are absent simply get no state; nothing assumes a
    /// particular page composition.
    pub fn wire(page: &Page) -> Self {
        let mut state = Self::empty();

        for (idx, block) in page.blocks.iter().enumerate() {
            match &block.kind {
                BlockKind::Demo { lines, .. } => {
                    state.demos.push((idx, DemoReel::new(lines.len())));
                    debug!(
                        component = "page",
                        operation = "wire",
                        page = %page.id,
                        lines = lines.len(),
                        "demo reel ready"
                    );
                }
                BlockKind::ContactForm {
                    fields, success, ..
                } => {
                    if state.form.is_none() {
                        state.form = Some((idx, ContactForm::new(fields, success)));
                        debug!(
                            component = "page",
                            operation = "wire",
                            page = %page.id,
                            fields = fields.len(),
                            "contact form ready"
                        );
                    } else {
                        warn!(
                            component = "page",
                            page = %page.id,
                            block = idx,
                            "extra contact form ignored"
                        );
                    }
                }
                BlockKind::Faq { items, .. } => {
                    state.faqs.push((idx, FaqAccordion::new(items.len())));
                    debug!(
                        component = "page",
                        operation = "wire",
                        page = %page.id,
                        items = items.len(),
                        "faq accordion ready"
                    );
                }
                BlockKind::Skills { categories, .. } => {
                    let bars: Vec<SkillBar> = categories
                        .iter()
                        .flat_map(|c| c.bars.iter())
                        .map(|b| SkillBar::new(b.percent))
                        .collect();
                    if !bars.is_empty() {
                        debug!(
                            component = "page",
                            operation = "wire",
                            page = %page.id,
                            bars = bars.len(),
                            "skill bars ready"
                        );
                    }
                    state.bars.push((idx, bars));
                }
                _ => {}
            }
        }

        state.revealed = vec![false; layout_page(page, &state).elements.len()];
        state
    }

    pub fn demo_for(&mut self, block: usize) -> Option<&mut DemoReel> {
        self.demos
            .iter_mut()
            .find(|(b, _)| *b == block)
            .map(|(_, reel)| reel)
    }

    pub fn faq_for(&mut self, block: usize) -> Option<&mut FaqAccordion> {
        self.faqs
            .iter_mut()
            .find(|(b, _)| *b == block)
            .map(|(_, acc)| acc)
    }

    fn faq_open(&self, block: usize) -> Option<usize> {
        self.faqs
            .iter()
            .find(|(b, _)| *b == block)
            .and_then(|(_, acc)| acc.open())
    }
}

fn block_title_rows(title: &Option<String>) -> u16 {
    u16::from(title.is_some())
}

/// Compute regions for every element of `page` under the current widget
/// state.
pub fn layout_page(page: &Page, state: &PageState) -> PageLayout {
    let mut elements = Vec::new();
    let mut y: u16 = 0;

    for (idx, block) in page.blocks.iter().enumerate() {
        if idx > 0 {
            y += BLOCK_GAP;
        }
        let anchor = block.anchor.clone();
        match &block.kind {
            BlockKind::Hero {
                tagline,
                art,
                lines,
                ..
            } => {
                let mut rows = art.len() as u16;
                if !art.is_empty() {
                    rows += 1;
                }
                rows += 1; // heading
                rows += u16::from(tagline.is_some());
                if !lines.is_empty() {
                    rows += 1 + lines.len() as u16;
                }
                push_element(&mut elements, idx, Part::Whole, &mut y, rows, anchor, false);
            }
            BlockKind::Section { body, .. } => {
                let rows = 1 + body.len() as u16;
                push_element(&mut elements, idx, Part::Whole, &mut y, rows, anchor, true);
            }
            BlockKind::Cards { title, cards } => {
                let mut anchor = anchor;
                if title.is_some() {
                    push_element(
                        &mut elements,
                        idx,
                        Part::Whole,
                        &mut y,
                        1,
                        anchor.take(),
                        false,
                    );
                }
                for (card_idx, card) in cards.iter().enumerate() {
                    let rows = 3 + card.body.len() as u16;
                    push_element(
                        &mut elements,
                        idx,
                        Part::Card(card_idx),
                        &mut y,
                        rows,
                        anchor.take(),
                        true,
                    );
                }
            }
            BlockKind::Projects { title, projects } => {
                let mut anchor = anchor;
                if title.is_some() {
                    push_element(
                        &mut elements,
                        idx,
                        Part::Whole,
                        &mut y,
                        1,
                        anchor.take(),
                        false,
                    );
                }
                for (proj_idx, project) in projects.iter().enumerate() {
                    let rows = 3
                        + project.summary.len() as u16
                        + u16::from(!project.tags.is_empty())
                        + project.art.len() as u16;
                    push_element(
                        &mut elements,
                        idx,
                        Part::Project(proj_idx),
                        &mut y,
                        rows,
                        anchor.take(),
                        true,
                    );
                }
            }
            BlockKind::Demo { lines, .. } => {
                let rows = demo::block_rows(lines.len());
                push_element(&mut elements, idx, Part::Whole, &mut y, rows, anchor, true);
            }
            BlockKind::Skills { title, categories } => {
                let rows = block_title_rows(title) + skills::body_rows(categories);
                push_element(&mut elements, idx, Part::Whole, &mut y, rows, anchor, true);
            }
            BlockKind::ContactForm { title, fields, .. } => {
                let rows = block_title_rows(title) + form::body_rows(fields);
                push_element(&mut elements, idx, Part::Whole, &mut y, rows, anchor, false);
            }
            BlockKind::Faq { title, items } => {
                let rows =
                    block_title_rows(title) + faq::body_rows(items, state.faq_open(idx));
                push_element(&mut elements, idx, Part::Whole, &mut y, rows, anchor, false);
            }
            BlockKind::Links { .. } => {
                push_element(&mut elements, idx, Part::Whole, &mut y, 1, anchor, false);
            }
        }
    }

    PageLayout {
        elements,
        doc_height: y,
    }
}

#[allow(clippy::too_many_arguments)]
fn push_element(
    elements: &mut Vec<Element>,
    block: usize,
    part: Part,
    y: &mut u16,
    rows: u16,
    anchor: Option<String>,
    reveal: bool,
) {
    elements.push(Element {
        block,
        part,
        region: Region::new(*y, rows),
        anchor,
        reveal,
    });
    *y += rows;
}

/// Click and hover targets collected during a draw, in document coordinates.
#[derive(Debug, Default)]
pub struct PageHits {
    pub links: Vec<(String, Rect)>,
    /// (block, item, question row).
    pub faq: Vec<(usize, usize, Rect)>,
    pub form: Vec<(FormTarget, Rect)>,
    /// (block, row) for hoverable skills rows.
    pub skill_rows: Vec<(usize, usize, Rect)>,
    /// Card and project elements by element index.
    pub cards: Vec<(usize, Rect)>,
    /// Artwork regions for the shield.
    pub art: Vec<Rect>,
}

/// Paint the whole document into `buf` (whose area starts at row 0) and
/// collect interaction targets. Unrevealed elements stay blank.
pub fn draw_page(
    buf: &mut Buffer,
    page: &Page,
    state: &PageState,
    layout: &PageLayout,
    palette: ThemePalette,
    form_focused: bool,
    now: Instant,
) -> PageHits {
    let mut hits = PageHits::default();
    let width = buf.area.width;

    for (el_idx, element) in layout.elements.iter().enumerate() {
        if element.reveal && !state.revealed.get(el_idx).copied().unwrap_or(false) {
            continue;
        }
        let area = Rect::new(0, element.region.top, width, element.region.height);
        let Some(block) = page.blocks.get(element.block) else {
            continue;
        };
        draw_element(
            buf, area, element, el_idx, block, state, palette, form_focused, now, &mut hits,
        );
    }
    hits
}

#[allow(clippy::too_many_arguments)]
fn draw_element(
    buf: &mut Buffer,
    area: Rect,
    element: &Element,
    el_idx: usize,
    block: &Block,
    state: &PageState,
    palette: ThemePalette,
    form_focused: bool,
    now: Instant,
    hits: &mut PageHits,
) {
    match (&block.kind, element.part) {
        (
            BlockKind::Hero {
                heading,
                tagline,
                art,
                lines,
            },
            Part::Whole,
        ) => {
            let mut y = area.y;
            if !art.is_empty() {
                let art_width = art.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
                for line in art {
                    buf.set_line(
                        area.x,
                        y,
                        &Line::from(Span::styled(line.clone(), Style::default().fg(palette.accent))),
                        area.width,
                    );
                    y += 1;
                }
                hits.art
                    .push(Rect::new(area.x, area.y, art_width.min(area.width), art.len() as u16));
                y += 1;
            }
            buf.set_line(
                area.x,
                y,
                &Line::from(Span::styled(heading.clone(), palette.title())),
                area.width,
            );
            y += 1;
            if let Some(tagline) = tagline {
                buf.set_line(
                    area.x,
                    y,
                    &Line::from(Span::styled(
                        tagline.clone(),
                        Style::default().fg(palette.hint),
                    )),
                    area.width,
                );
                y += 1;
            }
            if !lines.is_empty() {
                y += 1;
                for line in lines {
                    buf.set_line(
                        area.x,
                        y,
                        &Line::from(Span::styled(line.clone(), Style::default().fg(palette.fg))),
                        area.width,
                    );
                    y += 1;
                }
            }
        }
        (BlockKind::Section { title, body }, Part::Whole) => {
            buf.set_line(
                area.x,
                area.y,
                &Line::from(Span::styled(title.clone(), palette.title())),
                area.width,
            );
            for (row, line) in body.iter().enumerate() {
                buf.set_line(
                    area.x,
                    area.y + 1 + row as u16,
                    &Line::from(Span::styled(line.clone(), Style::default().fg(palette.fg))),
                    area.width,
                );
            }
        }
        (BlockKind::Cards { title, .. }, Part::Whole)
        | (BlockKind::Projects { title, .. }, Part::Whole) => {
            if let Some(title) = title {
                buf.set_line(
                    area.x,
                    area.y,
                    &Line::from(Span::styled(title.clone(), palette.title())),
                    area.width,
                );
            }
        }
        (BlockKind::Cards { cards, .. }, Part::Card(card_idx)) => {
            if let Some(card) = cards.get(card_idx) {
                let hovered = state.hovered_card == Some(el_idx);
                let boxed = themed_block(&card.title, palette, hovered);
                let inner = boxed.inner(area);
                boxed.render(area, buf);
                for (row, line) in card.body.iter().enumerate() {
                    if inner.y + (row as u16) >= inner.bottom() {
                        break;
                    }
                    buf.set_line(
                        inner.x + 1,
                        inner.y + row as u16,
                        &Line::from(Span::styled(line.clone(), Style::default().fg(palette.fg))),
                        inner.width.saturating_sub(1),
                    );
                }
                hits.cards.push((el_idx, area));
            }
        }
        (BlockKind::Projects { projects, .. }, Part::Project(proj_idx)) => {
            if let Some(project) = projects.get(proj_idx) {
                let hovered = state.hovered_card == Some(el_idx);
                let boxed = themed_block(&project.name, palette, hovered);
                let inner = boxed.inner(area);
                boxed.render(area, buf);
                let mut y = inner.y;
                for line in &project.summary {
                    buf.set_line(
                        inner.x + 1,
                        y,
                        &Line::from(Span::styled(line.clone(), Style::default().fg(palette.fg))),
                        inner.width.saturating_sub(1),
                    );
                    y += 1;
                }
                if !project.tags.is_empty() {
                    buf.set_line(
                        inner.x + 1,
                        y,
                        &Line::from(tag_chips(&project.tags, palette)),
                        inner.width.saturating_sub(1),
                    );
                    y += 1;
                }
                if !project.art.is_empty() {
                    let art_width =
                        project.art.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
                    let art_top = y;
                    for line in &project.art {
                        buf.set_line(
                            inner.x + 1,
                            y,
                            &Line::from(Span::styled(
                                line.clone(),
                                Style::default().fg(palette.accent),
                            )),
                            inner.width.saturating_sub(1),
                        );
                        y += 1;
                    }
                    hits.art.push(Rect::new(
                        inner.x + 1,
                        art_top,
                        art_width.min(inner.width),
                        project.art.len() as u16,
                    ));
                }
            }
        }
        (BlockKind::Demo { title, lines }, Part::Whole) => {
            let visible = state
                .demos
                .iter()
                .find(|(b, _)| *b == element.block)
                .map(|(_, reel)| reel.visible_lines())
                .unwrap_or(0);
            demo::draw_demo(buf, area, title.as_deref(), lines, visible, palette);
        }
        (BlockKind::Skills { title, categories }, Part::Whole) => {
            let empty: Vec<SkillBar> = Vec::new();
            let bars = state
                .bars
                .iter()
                .find(|(b, _)| *b == element.block)
                .map(|(_, bars)| bars)
                .unwrap_or(&empty);
            let hovered = state
                .hovered_skill
                .filter(|(b, _)| *b == element.block)
                .map(|(_, row)| row);
            let rects = skills::draw_skills(
                buf,
                area,
                title.as_deref(),
                categories,
                bars,
                hovered,
                palette,
                now,
            );
            for (row, rect) in rects.into_iter().enumerate() {
                hits.skill_rows.push((element.block, row, rect));
            }
        }
        (BlockKind::ContactForm { title, .. }, Part::Whole) => {
            if let Some((form_block, form)) = &state.form
                && *form_block == element.block
            {
                let targets =
                    form::draw_contact_form(buf, area, title.as_deref(), form, form_focused, palette);
                hits.form.extend(targets);
            }
        }
        (BlockKind::Faq { title, items }, Part::Whole) => {
            let acc = state
                .faqs
                .iter()
                .find(|(b, _)| *b == element.block)
                .map(|(_, acc)| *acc)
                .unwrap_or_else(|| FaqAccordion::new(items.len()));
            let rects = faq::draw_faq(buf, area, title.as_deref(), items, acc, palette);
            for (item, rect) in rects.into_iter().enumerate() {
                hits.faq.push((element.block, item, rect));
            }
        }
        (BlockKind::Links { title, links }, Part::Whole) => {
            let label = title.as_deref().unwrap_or("Jump to");
            let mut spans = vec![Span::styled(
                format!("{label}: "),
                Style::default().fg(palette.hint),
            )];
            let mut x = area.x + label.chars().count() as u16 + 2;
            for (idx, link) in links.iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::raw("  "));
                    x += 2;
                }
                let text = format!("[{}]", link.label);
                let cols = text.chars().count() as u16;
                spans.push(Span::styled(
                    text,
                    Style::default()
                        .fg(palette.accent_alt)
                        .add_modifier(ratatui::style::Modifier::UNDERLINED),
                ));
                hits.links.push((link.target.clone(), Rect::new(x, area.y, cols, 1)));
                x += cols;
            }
            buf.set_line(area.x, area.y, &Line::from(spans), area.width);
        }
        // Part/kind combinations that cannot occur.
        _ => {}
    }
}
