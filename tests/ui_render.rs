//! Full-frame render tests against the test backend.

use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use termfolio::content::Portfolio;
use termfolio::ui::app::App;
use termfolio::ui::components::theme::{ContrastLevel, ThemePreset, check_contrast};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn app_on(page: usize) -> App {
    App::new(Portfolio::builtin(), page, ThemePreset::Dark, true)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Render one frame and return the buffer's debug text for substring checks.
fn render(app: &mut App, width: u16, height: u16, now: Instant) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f, now)).unwrap();
    format!("{:?}", terminal.backend().buffer())
}

#[test]
fn home_page_shows_brand_nav_and_footer() {
    let now = Instant::now();
    let mut app = app_on(0);
    let frame = render(&mut app, 100, 35, now);

    assert!(frame.contains("Iris Calder"), "brand missing:\n{frame}");
    for title in ["Home", "Skills", "Projects", "Contact"] {
        assert!(frame.contains(title), "nav should list {title}");
    }
    assert!(frame.contains("F1 help"), "footer hints missing");
    assert!(frame.contains("q quit"), "footer hints missing");
}

#[test]
fn narrow_terminal_collapses_the_nav_behind_a_menu() {
    let now = Instant::now();
    let mut app = app_on(0);
    let frame = render(&mut app, 60, 30, now);
    assert!(frame.contains("≡ Menu"), "collapsed toggle missing:\n{frame}");

    app.on_key(key(KeyCode::Char('m')), now);
    let frame = render(&mut app, 60, 30, now);
    assert!(frame.contains("✕ Menu"), "open toggle missing");
    assert!(frame.contains("Projects"), "open menu should list pages");
}

#[test]
fn footer_hints_swap_in_form_mode() {
    let now = Instant::now();
    let mut app = app_on(3);
    let frame = render(&mut app, 100, 40, now);
    assert!(frame.contains("m menu"));

    app.on_key(key(KeyCode::Tab), now);
    let frame = render(&mut app, 100, 40, now);
    assert!(frame.contains("Tab next field"), "form hints missing");
    assert!(frame.contains("Esc leave form"));
}

#[test]
fn below_the_fold_sections_appear_only_after_scrolling() {
    let now = Instant::now();
    let mut app = app_on(0);

    // First frame: nothing has ticked, so reveal-gated blocks are blank and
    // the hero still shows.
    let frame = render(&mut app, 80, 30, now);
    assert!(frame.contains("Iris Calder"));
    assert!(
        !frame.contains("folio-bot, my on-call assistant"),
        "demo sits far below the fold"
    );

    // A tick reveals what the viewport already covers, but not the demo.
    app.on_tick(now);
    let frame = render(&mut app, 80, 30, now);
    assert!(frame.contains("unglamorous layers"), "about should reveal");
    assert!(!frame.contains("folio-bot, my on-call assistant"));

    // Jump to the bottom; the next tick reveals the demo block.
    app.on_key(key(KeyCode::End), now);
    app.on_tick(now);
    let frame = render(&mut app, 80, 30, now);
    assert!(
        frame.contains("folio-bot, my on-call assistant"),
        "demo should reveal at the bottom:\n{frame}"
    );
}

#[test]
fn help_overlay_draws_over_the_page() {
    let now = Instant::now();
    let mut app = app_on(0);
    app.on_key(key(KeyCode::F(1)), now);
    let frame = render(&mut app, 80, 30, now);
    assert!(frame.contains("Help"), "overlay title missing");
    assert!(frame.contains("switch theme"), "overlay body missing");

    app.on_key(key(KeyCode::Esc), now);
    let frame = render(&mut app, 80, 30, now);
    assert!(!frame.contains("switch theme"), "overlay should close");
}

#[test]
fn contact_page_renders_fields_and_faq() {
    let now = Instant::now();
    let mut app = app_on(3);
    let frame = render(&mut app, 90, 50, now);

    for label in ["Name", "Email", "Subject", "Message"] {
        assert!(frame.contains(label), "field {label} missing:\n{frame}");
    }
    assert!(frame.contains("Send message"));
    assert!(frame.contains("Are you available for new work?"));
}

#[test]
fn every_theme_keeps_core_text_readable() {
    for preset in ThemePreset::all() {
        let palette = preset.to_palette();
        assert_eq!(
            check_contrast(palette.fg, palette.bg),
            ContrastLevel::Aaa,
            "{preset:?} body text"
        );
        assert_ne!(
            check_contrast(palette.accent, palette.bg),
            ContrastLevel::Fail,
            "{preset:?} accent"
        );
        assert_ne!(
            check_contrast(palette.error, palette.bg),
            ContrastLevel::Fail,
            "{preset:?} error text"
        );
    }
}

#[test]
fn theme_cycle_changes_the_rendered_palette() {
    let now = Instant::now();
    let mut app = app_on(0);
    assert_eq!(app.theme, ThemePreset::Dark);
    app.on_key(key(KeyCode::F(2)), now);
    assert_eq!(app.theme, ThemePreset::Light);
    assert_eq!(app.palette, ThemePreset::Light.to_palette());
}
