//! Drawable page components. Stateful ones pair a plain state struct with a
//! draw function that renders into the document buffer and returns hit rects.

pub mod demo;
pub mod faq;
pub mod form;
pub mod menu;
pub mod skills;
pub mod theme;
pub mod widgets;
