//! The contact form, driven end to end through key events: validation
//! failures, a successful simulated send, and the timed reset.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use termfolio::content::Portfolio;
use termfolio::ui::app::App;
use termfolio::ui::components::form::{
    ContactForm, EMAIL_MESSAGE, REQUIRED_MESSAGE, RESET_DELAY, SUBMIT_DELAY,
};
use termfolio::ui::components::theme::ThemePreset;
use termfolio::ui::data::InputMode;

fn contact_app() -> App {
    App::new(Portfolio::builtin(), 3, ThemePreset::Dark, true)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        app.on_key(key(KeyCode::Char(c)), now);
    }
}

fn at(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}

fn form(app: &App) -> &ContactForm {
    &app.page_state.form.as_ref().expect("contact page has a form").1
}

fn render(app: &mut App, now: Instant) -> String {
    let backend = TestBackend::new(90, 50);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f, now)).unwrap();
    format!("{:?}", terminal.backend().buffer())
}

/// Tab from the first field to the submit button (name, email, subject,
/// message, then submit).
fn tab_to_submit(app: &mut App, now: Instant) {
    for _ in 0..4 {
        app.on_key(key(KeyCode::Tab), now);
    }
}

#[test]
fn empty_submit_flags_every_required_field() {
    let now = Instant::now();
    let mut app = contact_app();
    app.on_key(key(KeyCode::Tab), now);
    assert_eq!(app.mode, InputMode::Form);

    tab_to_submit(&mut app, now);
    app.on_key(key(KeyCode::Enter), now);

    let fields = form(&app).fields();
    assert_eq!(fields[0].error, Some(REQUIRED_MESSAGE), "name");
    assert_eq!(fields[1].error, Some(REQUIRED_MESSAGE), "email");
    assert_eq!(fields[2].error, None, "subject is optional");
    assert_eq!(fields[3].error, Some(REQUIRED_MESSAGE), "message");
    assert!(!form(&app).is_sending());

    let frame = render(&mut app, now);
    assert!(frame.contains(REQUIRED_MESSAGE), "errors should render");
}

#[test]
fn malformed_email_is_called_out_by_name() {
    let now = Instant::now();
    let mut app = contact_app();
    app.on_key(key(KeyCode::Tab), now);

    type_str(&mut app, "Ada", now);
    app.on_key(key(KeyCode::Tab), now);
    type_str(&mut app, "not-an-email", now);
    app.on_key(key(KeyCode::Tab), now); // subject
    app.on_key(key(KeyCode::Tab), now); // message
    type_str(&mut app, "Hello", now);
    app.on_key(key(KeyCode::Tab), now); // submit
    app.on_key(key(KeyCode::Enter), now);

    let fields = form(&app).fields();
    assert_eq!(fields[0].error, None);
    assert_eq!(fields[1].error, Some(EMAIL_MESSAGE));
    assert!(!form(&app).is_sending());

    let frame = render(&mut app, now);
    assert!(frame.contains(EMAIL_MESSAGE));
}

#[test]
fn valid_submission_sends_succeeds_and_resets() {
    let t0 = Instant::now();
    let mut app = contact_app();
    app.on_key(key(KeyCode::Tab), t0);

    type_str(&mut app, "Ada", t0);
    app.on_key(key(KeyCode::Tab), t0);
    type_str(&mut app, "ada@example.com", t0);
    app.on_key(key(KeyCode::Tab), t0);
    app.on_key(key(KeyCode::Tab), t0);
    type_str(&mut app, "Do you take audits in Q4?", t0);
    app.on_key(key(KeyCode::Tab), t0);
    app.on_key(key(KeyCode::Enter), t0);

    assert!(form(&app).is_sending());
    let frame = render(&mut app, t0);
    assert!(frame.contains("Sending..."), "send phase label:\n{frame}");

    // Typing during the send is swallowed.
    type_str(&mut app, "zzz", t0);
    assert_eq!(form(&app).fields()[0].value, "Ada");

    // The send completes after its fixed delay.
    let sent_at = SUBMIT_DELAY.as_millis() as u64 + 1;
    app.on_tick(at(t0, sent_at));
    assert!(form(&app).is_sent());
    let frame = render(&mut app, at(t0, sent_at));
    assert!(
        frame.contains("Message sent!"),
        "success panel should replace the form"
    );

    // After the hold the form returns blank.
    let reset_at = sent_at + RESET_DELAY.as_millis() as u64 + 1;
    app.on_tick(at(t0, reset_at));
    assert!(!form(&app).is_sent());
    assert!(form(&app).fields().iter().all(|f| f.value.is_empty()));
    let frame = render(&mut app, at(t0, reset_at));
    assert!(frame.contains("Send message"), "form should be back");
}

#[test]
fn fixing_the_email_clears_the_error_on_resubmit() {
    let now = Instant::now();
    let mut app = contact_app();
    app.on_key(key(KeyCode::Tab), now);

    type_str(&mut app, "Ada", now);
    app.on_key(key(KeyCode::Tab), now);
    type_str(&mut app, "ada@broken", now);
    app.on_key(key(KeyCode::Tab), now);
    app.on_key(key(KeyCode::Tab), now);
    type_str(&mut app, "Hi", now);
    app.on_key(key(KeyCode::Tab), now);
    app.on_key(key(KeyCode::Enter), now);
    assert_eq!(form(&app).fields()[1].error, Some(EMAIL_MESSAGE));

    // Shift+Tab back to the email field and append the missing domain.
    app.on_key(
        KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        now,
    );
    app.on_key(
        KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        now,
    );
    app.on_key(
        KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        now,
    );
    type_str(&mut app, ".dev", now);

    // Forward again: subject, message, submit.
    for _ in 0..3 {
        app.on_key(key(KeyCode::Tab), now);
    }
    app.on_key(key(KeyCode::Enter), now);
    assert_eq!(form(&app).fields()[1].error, None);
    assert!(form(&app).is_sending());
}

#[test]
fn enter_in_a_multiline_field_inserts_a_newline() {
    let now = Instant::now();
    let mut app = contact_app();
    app.on_key(key(KeyCode::Tab), now);

    // Jump to the message field.
    for _ in 0..3 {
        app.on_key(key(KeyCode::Tab), now);
    }
    type_str(&mut app, "line one", now);
    app.on_key(key(KeyCode::Enter), now);
    type_str(&mut app, "line two", now);

    assert_eq!(form(&app).fields()[3].value, "line one\nline two");
    assert!(!form(&app).is_sending(), "Enter must not submit here");
}

#[test]
fn enter_in_a_single_line_field_moves_focus_on() {
    let now = Instant::now();
    let mut app = contact_app();
    app.on_key(key(KeyCode::Tab), now);

    type_str(&mut app, "Ada", now);
    app.on_key(key(KeyCode::Enter), now);
    type_str(&mut app, "ada@example.com", now);

    let fields = form(&app).fields();
    assert_eq!(fields[0].value, "Ada");
    assert_eq!(fields[1].value, "ada@example.com");
}
