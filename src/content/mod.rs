//! Portfolio content: pages and the blocks they are built from.
//!
//! Content is data, not behavior. A [`Portfolio`] is a list of [`Page`]s;
//! each page is a column of [`Block`]s rendered top to bottom. The built-in
//! profile ships in [`builtin`]; a custom portfolio can be loaded from a TOML
//! file instead (`--content` or the `content` config key).
//!
//! # Example content file
//!
//! ```toml
//! name = "Sam Voss"
//! tagline = "Infrastructure engineer"
//!
//! [[pages]]
//! id = "home"
//! title = "Home"
//!
//! [[pages.blocks]]
//! kind = "section"
//! anchor = "about"
//! title = "About"
//! body = ["I build boring, reliable systems."]
//!
//! [[pages.blocks]]
//! kind = "faq"
//! title = "FAQ"
//!
//! [[pages.blocks.items]]
//! question = "Are you available for contract work?"
//! answer = ["Occasionally. Email me with a short brief."]
//! ```

pub mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading portfolio content.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse content file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Root content document: the whole portfolio.
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    /// Display name shown in the nav bar brand slot.
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// One navigable page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Stable identifier used by nav targets and `--page`.
    pub id: String,
    /// Label shown in the nav bar.
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A block plus its optional anchor id for in-page jump links.
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub anchor: Option<String>,
    #[serde(flatten)]
    pub kind: BlockKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockKind {
    /// Page opener: large heading, optional ASCII art and intro lines.
    Hero {
        heading: String,
        #[serde(default)]
        tagline: Option<String>,
        #[serde(default)]
        art: Vec<String>,
        #[serde(default)]
        lines: Vec<String>,
    },
    /// Titled prose.
    Section {
        title: String,
        #[serde(default)]
        body: Vec<String>,
    },
    /// A stack of small bordered cards.
    Cards {
        #[serde(default)]
        title: Option<String>,
        cards: Vec<Card>,
    },
    /// Project showcase cards with tags and optional art.
    Projects {
        #[serde(default)]
        title: Option<String>,
        projects: Vec<Project>,
    },
    /// Scripted terminal transcript that replays line by line once visible.
    Demo {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        lines: Vec<String>,
    },
    /// Skill categories with animated proficiency bars.
    Skills {
        #[serde(default)]
        title: Option<String>,
        categories: Vec<SkillCategory>,
    },
    /// Contact form with validation and a simulated send.
    ContactForm {
        #[serde(default)]
        title: Option<String>,
        fields: Vec<FieldSpec>,
        /// Shown in place of the form after a successful submission.
        success: String,
    },
    /// Accordion of question/answer pairs, one open at a time.
    Faq {
        #[serde(default)]
        title: Option<String>,
        items: Vec<FaqItem>,
    },
    /// Row of in-page jump links to anchored blocks.
    Links {
        #[serde(default)]
        title: Option<String>,
        links: Vec<PageLink>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub art: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub bars: Vec<SkillBarSpec>,
    /// Plain skill lines without a bar, hover-highlightable.
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillBarSpec {
    pub label: String,
    /// Target fill 0..=100.
    pub percent: u8,
}

/// Input discipline applied to a contact-form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    /// Checked against the address shape on submit.
    Email,
    /// Multi-row input.
    Multiline,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    /// Stable id, unique within the form.
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    /// Required fields fail validation when left empty.
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaqItem {
    pub question: String,
    #[serde(default)]
    pub answer: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageLink {
    pub label: String,
    /// Anchor id on the current page. Unknown targets are ignored at runtime.
    pub target: String,
}

impl Portfolio {
    /// The profile compiled into the binary.
    pub fn builtin() -> Self {
        builtin::portfolio()
    }

    /// Load and validate a portfolio from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = toml::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Index of the page with the given id.
    pub fn page_index(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    pub fn page_ids(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.id.as_str()).collect()
    }

    /// Structural checks; content that parses may still be unusable.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.name.trim().is_empty() {
            return Err(ContentError::Validation("portfolio name is empty".into()));
        }
        if self.pages.is_empty() {
            return Err(ContentError::Validation(
                "portfolio has no pages".into(),
            ));
        }
        let mut page_ids = HashSet::new();
        for page in &self.pages {
            if page.id.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "page '{}' has an empty id",
                    page.title
                )));
            }
            if !page_ids.insert(page.id.as_str()) {
                return Err(ContentError::Validation(format!(
                    "duplicate page id '{}'",
                    page.id
                )));
            }
            page.validate()?;
        }
        Ok(())
    }
}

impl Page {
    fn validate(&self) -> Result<(), ContentError> {
        let mut anchors = HashSet::new();
        for block in &self.blocks {
            if let Some(anchor) = &block.anchor {
                if anchor.trim().is_empty() {
                    return Err(ContentError::Validation(format!(
                        "page '{}' has a block with an empty anchor",
                        self.id
                    )));
                }
                if !anchors.insert(anchor.as_str()) {
                    return Err(ContentError::Validation(format!(
                        "page '{}' reuses anchor '{}'",
                        self.id, anchor
                    )));
                }
            }
            block.kind.validate(&self.id)?;
        }
        Ok(())
    }

    pub fn has_demo(&self) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b.kind, BlockKind::Demo { .. }))
    }

    pub fn has_contact_form(&self) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b.kind, BlockKind::ContactForm { .. }))
    }

    pub fn has_skill_bars(&self) -> bool {
        self.blocks.iter().any(|b| match &b.kind {
            BlockKind::Skills { categories, .. } => {
                categories.iter().any(|c| !c.bars.is_empty())
            }
            _ => false,
        })
    }

    pub fn has_faq(&self) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b.kind, BlockKind::Faq { .. }))
    }
}

impl BlockKind {
    fn validate(&self, page_id: &str) -> Result<(), ContentError> {
        match self {
            BlockKind::Skills { categories, .. } => {
                for category in categories {
                    for bar in &category.bars {
                        if bar.percent > 100 {
                            return Err(ContentError::Validation(format!(
                                "page '{page_id}': skill '{}' exceeds 100%",
                                bar.label
                            )));
                        }
                    }
                }
            }
            BlockKind::ContactForm { fields, .. } => {
                if fields.is_empty() {
                    return Err(ContentError::Validation(format!(
                        "page '{page_id}': contact form has no fields"
                    )));
                }
                let mut ids = HashSet::new();
                for field in fields {
                    if !ids.insert(field.id.as_str()) {
                        return Err(ContentError::Validation(format!(
                            "page '{page_id}': duplicate form field id '{}'",
                            field.id
                        )));
                    }
                }
            }
            BlockKind::Links { links, .. } => {
                for link in links {
                    if link.target.trim().is_empty() {
                        return Err(ContentError::Validation(format!(
                            "page '{page_id}': link '{}' has an empty target",
                            link.label
                        )));
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_portfolio_validates() {
        let portfolio = Portfolio::builtin();
        portfolio.validate().expect("builtin content must be valid");
        assert!(!portfolio.pages.is_empty());
    }

    #[test]
    fn builtin_covers_every_block_behavior() {
        let portfolio = Portfolio::builtin();
        assert!(portfolio.pages.iter().any(Page::has_demo));
        assert!(portfolio.pages.iter().any(Page::has_contact_form));
        assert!(portfolio.pages.iter().any(Page::has_skill_bars));
        assert!(portfolio.pages.iter().any(Page::has_faq));
    }

    #[test]
    fn parses_a_minimal_content_file() {
        let raw = r#"
            name = "Test Person"

            [[pages]]
            id = "home"
            title = "Home"

            [[pages.blocks]]
            kind = "section"
            anchor = "about"
            title = "About"
            body = ["hello"]
        "#;
        let portfolio = Portfolio::from_toml(raw).unwrap();
        assert_eq!(portfolio.pages.len(), 1);
        let block = &portfolio.pages[0].blocks[0];
        assert_eq!(block.anchor.as_deref(), Some("about"));
        match &block.kind {
            BlockKind::Section { title, body } => {
                assert_eq!(title, "About");
                assert_eq!(body, &["hello".to_string()]);
            }
            other => panic!("expected section, got {other:?}"),
        }
    }

    #[test]
    fn parses_form_fields_with_kinds() {
        let raw = r#"
            name = "Test Person"

            [[pages]]
            id = "contact"
            title = "Contact"

            [[pages.blocks]]
            kind = "contact_form"
            success = "Thanks!"

            [[pages.blocks.fields]]
            id = "email"
            label = "Email"
            kind = "email"
            required = true

            [[pages.blocks.fields]]
            id = "message"
            label = "Message"
            kind = "multiline"
            required = true
        "#;
        let portfolio = Portfolio::from_toml(raw).unwrap();
        match &portfolio.pages[0].blocks[0].kind {
            BlockKind::ContactForm { fields, .. } => {
                assert_eq!(fields[0].kind, FieldKind::Email);
                assert_eq!(fields[1].kind, FieldKind::Multiline);
                assert!(fields.iter().all(|f| f.required));
            }
            other => panic!("expected contact_form, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_page_ids() {
        let raw = r#"
            name = "Test Person"

            [[pages]]
            id = "home"
            title = "Home"

            [[pages]]
            id = "home"
            title = "Also Home"
        "#;
        let err = Portfolio::from_toml(raw).unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)), "got {err}");
    }

    #[test]
    fn rejects_duplicate_anchor_on_one_page() {
        let raw = r#"
            name = "Test Person"

            [[pages]]
            id = "home"
            title = "Home"

            [[pages.blocks]]
            kind = "section"
            anchor = "x"
            title = "One"

            [[pages.blocks]]
            kind = "section"
            anchor = "x"
            title = "Two"
        "#;
        assert!(Portfolio::from_toml(raw).is_err());
    }

    #[test]
    fn rejects_skill_percent_over_100() {
        let raw = r#"
            name = "Test Person"

            [[pages]]
            id = "skills"
            title = "Skills"

            [[pages.blocks]]
            kind = "skills"

            [[pages.blocks.categories]]
            name = "Languages"

            [[pages.blocks.categories.bars]]
            label = "Rust"
            percent = 140
        "#;
        assert!(Portfolio::from_toml(raw).is_err());
    }

    #[test]
    fn page_lookup_by_id() {
        let portfolio = Portfolio::builtin();
        let first = portfolio.pages[0].id.clone();
        assert_eq!(portfolio.page_index(&first), Some(0));
        assert_eq!(portfolio.page_index("no-such-page"), None);
    }
}
