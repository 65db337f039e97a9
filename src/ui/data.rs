//! Small shared types for the interactive session.

/// Where keystrokes are routed.
///
/// `Browse` is the default: navigation, scrolling, and single-key commands.
/// `Form` routes printable characters into the focused contact-form field and
/// is entered by clicking a field or pressing Tab on a page that has a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Form,
}

impl InputMode {
    pub fn is_form(self) -> bool {
        matches!(self, InputMode::Form)
    }
}

/// Rows reserved above the document for the nav bar.
pub const NAV_HEIGHT: u16 = 2;
/// Rows reserved below the document for the status footer.
pub const FOOTER_HEIGHT: u16 = 1;
