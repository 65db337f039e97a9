//! Keyboard shortcut constants for consistent documentation.

pub const HELP: &str = "F1";
pub const THEME: &str = "F2";
pub const QUIT: &str = "q";
pub const MENU_TOGGLE: &str = "m";
pub const PAGE_JUMP: &str = "1-9";
pub const NEXT_PAGE: &str = "]";
pub const PREV_PAGE: &str = "[";

// Navigation
pub const SCROLL: &str = "j/k";
pub const PAGE_SCROLL: &str = "PgUp/PgDn";
pub const JUMP_TOP: &str = "Home";
pub const JUMP_BOTTOM: &str = "End";

// Contact form
pub const FORM_FOCUS: &str = "Tab";
pub const FORM_LEAVE: &str = "Esc";
pub const FORM_SUBMIT: &str = "Enter";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn shortcuts_are_not_empty() {
        for key in [
            HELP,
            THEME,
            QUIT,
            MENU_TOGGLE,
            PAGE_JUMP,
            NEXT_PAGE,
            PREV_PAGE,
            SCROLL,
            PAGE_SCROLL,
            JUMP_TOP,
            JUMP_BOTTOM,
            FORM_FOCUS,
            FORM_LEAVE,
            FORM_SUBMIT,
        ] {
            assert!(!key.is_empty());
        }
    }

    #[test]
    fn function_keys_have_expected_values() {
        assert_eq!(HELP, "F1");
        assert_eq!(THEME, "F2");
    }

    #[test]
    fn function_key_format_is_valid() {
        for key in [HELP, THEME] {
            assert!(
                key.starts_with('F') && key[1..].chars().all(|c| c.is_ascii_digit()),
                "Invalid function key format: {}",
                key
            );
        }
    }

    #[test]
    fn single_key_commands_are_unique() {
        let mut seen = HashSet::new();
        for key in [QUIT, MENU_TOGGLE, NEXT_PAGE, PREV_PAGE, FORM_FOCUS] {
            assert!(seen.insert(key), "Duplicate shortcut found: {}", key);
        }
    }

    #[test]
    fn form_keys_do_not_collide_with_page_cycling() {
        // Typing into a field must not be interpreted as page navigation.
        assert_ne!(FORM_FOCUS, NEXT_PAGE);
        assert_ne!(FORM_FOCUS, PREV_PAGE);
        assert_ne!(FORM_SUBMIT, NEXT_PAGE);
    }
}
