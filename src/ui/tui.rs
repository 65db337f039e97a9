//! Terminal lifecycle and the interactive run loop.
//!
//! Raw mode, the alternate screen, and mouse capture are set up on entry and
//! torn down on every exit path. When the terminal supports the kitty
//! keyboard protocol, enhancement flags are pushed so key release events are
//! reported; the screenshot deterrent needs that edge.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use tracing::debug;

use crate::ui::app::App;
use crate::ui::components::theme::{ThemePalette, kbd_style};
use crate::ui::shortcuts;

type Term = Terminal<CrosstermBackend<Stdout>>;

fn init_terminal() -> io::Result<(Term, bool)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    if keyboard_enhanced {
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    Ok((Terminal::new(backend)?, keyboard_enhanced))
}

fn restore_terminal(terminal: &mut Term, keyboard_enhanced: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if keyboard_enhanced {
        execute!(
            terminal.backend_mut(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
    } else {
        execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;
    Ok(())
}

/// Run the interface until the user quits. The terminal is restored on every
/// exit path, including errors from the loop.
pub fn run(app: &mut App, tick_rate: Duration) -> Result<()> {
    let (mut terminal, keyboard_enhanced) = init_terminal()?;
    debug!(
        component = "tui",
        keyboard_enhanced,
        tick_ms = tick_rate.as_millis() as u64,
        "terminal ready"
    );
    let result = run_loop(&mut terminal, app, tick_rate);
    let _ = restore_terminal(&mut terminal, keyboard_enhanced);
    result
}

/// Inner loop, separated so terminal restore always happens.
fn run_loop(terminal: &mut Term, app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();
    while !app.should_quit {
        terminal.draw(|f| app.draw(f, Instant::now()))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.on_key(key, Instant::now()),
                Event::Mouse(mouse) => app.on_mouse(mouse, Instant::now()),
                // The next draw picks up the new size.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        if last_tick.elapsed() >= tick_rate {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// One-line key legend for the footer, switched by input mode.
pub fn footer_legend(form_mode: bool) -> String {
    if form_mode {
        format!(
            " {} next field  {} leave form  {} send",
            shortcuts::FORM_FOCUS,
            shortcuts::FORM_LEAVE,
            shortcuts::FORM_SUBMIT
        )
    } else {
        format!(
            " {} pages  {} scroll  {} menu  {} theme  {} help  {} quit",
            shortcuts::PAGE_JUMP,
            shortcuts::SCROLL,
            shortcuts::MENU_TOGGLE,
            shortcuts::THEME,
            shortcuts::HELP,
            shortcuts::QUIT
        )
    }
}

/// Body of the help overlay, one binding per line.
pub fn help_lines(palette: ThemePalette) -> Vec<Line<'static>> {
    fn entry(palette: ThemePalette, keys: &str, what: &str) -> Line<'static> {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{keys:<12}"), kbd_style(palette)),
            Span::styled(what.to_string(), Style::default().fg(palette.fg)),
        ])
    }

    vec![
        entry(palette, shortcuts::PAGE_JUMP, "open page by number"),
        entry(
            palette,
            &format!("{}/{}", shortcuts::NEXT_PAGE, shortcuts::PREV_PAGE),
            "next / previous page",
        ),
        entry(palette, shortcuts::MENU_TOGGLE, "toggle the nav menu"),
        entry(palette, shortcuts::SCROLL, "scroll one row"),
        entry(palette, shortcuts::PAGE_SCROLL, "scroll one screen"),
        entry(
            palette,
            &format!("{}/{}", shortcuts::JUMP_TOP, shortcuts::JUMP_BOTTOM),
            "jump to top / bottom",
        ),
        entry(palette, shortcuts::FORM_FOCUS, "focus the contact form"),
        entry(palette, shortcuts::FORM_LEAVE, "leave the form"),
        entry(palette, shortcuts::FORM_SUBMIT, "send the message"),
        entry(palette, shortcuts::THEME, "switch theme"),
        entry(palette, shortcuts::HELP, "toggle this help"),
        entry(palette, shortcuts::QUIT, "quit"),
    ]
}
