//! The portfolio compiled into the binary.
//!
//! Used whenever no content file is configured. Doubles as the reference
//! profile for tests, so it deliberately exercises every block kind.

use super::{
    Block, BlockKind, Card, FaqItem, FieldKind, FieldSpec, Page, PageLink, Portfolio, Project,
    SkillBarSpec, SkillCategory,
};

fn s(text: &str) -> String {
    text.to_string()
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|l| s(l)).collect()
}

pub fn portfolio() -> Portfolio {
    Portfolio {
        name: s("Iris Calder"),
        tagline: Some(s("Platform engineering without the drama")),
        pages: vec![home(), skills(), projects(), contact()],
    }
}

fn home() -> Page {
    Page {
        id: s("home"),
        title: s("Home"),
        blocks: vec![
            Block {
                anchor: None,
                kind: BlockKind::Hero {
                    heading: s("Iris Calder"),
                    tagline: Some(s("Platform engineer. I keep the pager quiet.")),
                    art: lines(&[
                        "██╗██████╗ ██╗███████╗",
                        "██║██╔══██╗██║██╔════╝",
                        "██║██████╔╝██║███████╗",
                        "██║██╔══██╗██║╚════██║",
                        "██║██║  ██║██║███████║",
                        "╚═╝╚═╝  ╚═╝╚═╝╚══════╝",
                    ]),
                    lines: lines(&[
                        "Ten years of building and running production platforms,",
                        "from bare-metal fleets to managed Kubernetes.",
                    ]),
                },
            },
            Block {
                anchor: None,
                kind: BlockKind::Links {
                    title: Some(s("Jump to")),
                    links: vec![
                        PageLink {
                            label: s("About"),
                            target: s("about"),
                        },
                        PageLink {
                            label: s("What I do"),
                            target: s("services"),
                        },
                        PageLink {
                            label: s("Live demo"),
                            target: s("demo"),
                        },
                    ],
                },
            },
            Block {
                anchor: Some(s("about")),
                kind: BlockKind::Section {
                    title: s("About"),
                    body: lines(&[
                        "I design the unglamorous layers: deploy pipelines, service",
                        "meshes, observability stacks, and the runbooks that make",
                        "3am pages rare and short. Most of my work is measured by",
                        "incidents that never happened.",
                        "",
                        "Previously at two payments companies and a map provider.",
                    ]),
                },
            },
            Block {
                anchor: Some(s("services")),
                kind: BlockKind::Cards {
                    title: Some(s("What I do")),
                    cards: vec![
                        Card {
                            title: s("Platform audits"),
                            body: lines(&[
                                "A two-week review of your deploy path, rollback story,",
                                "and on-call load, with a prioritized fix list.",
                            ]),
                        },
                        Card {
                            title: s("Reliability retainers"),
                            body: lines(&[
                                "Ongoing capacity planning, incident reviews, and SLO",
                                "tuning for teams without a dedicated SRE.",
                            ]),
                        },
                        Card {
                            title: s("Tooling"),
                            body: lines(&[
                                "Small sharp internal tools, mostly Rust and Go, that",
                                "replace the shell script everyone is afraid of.",
                            ]),
                        },
                    ],
                },
            },
            Block {
                anchor: Some(s("demo")),
                kind: BlockKind::Demo {
                    title: Some(s("folio-bot, my on-call assistant")),
                    lines: lines(&[
                        "iris@ops ~ $ folio-bot status --cluster prod",
                        "[bot] querying 3 regions...",
                        "[bot] prod-eu    ok    42 nodes, p99 12ms",
                        "[bot] prod-us    ok    58 nodes, p99 14ms",
                        "[bot] prod-apac  warn  9 nodes, 1 pending rollout",
                        "iris@ops ~ $ folio-bot rollout resume prod-apac",
                        "[bot] resuming rollout api-v2 in prod-apac...",
                        "[bot] done. all regions green.",
                    ]),
                },
            },
        ],
    }
}

fn skills() -> Page {
    Page {
        id: s("skills"),
        title: s("Skills"),
        blocks: vec![
            Block {
                anchor: None,
                kind: BlockKind::Section {
                    title: s("Skills"),
                    body: lines(&[
                        "Self-assessed, argued about in interviews, revised yearly.",
                    ]),
                },
            },
            Block {
                anchor: Some(s("stack")),
                kind: BlockKind::Skills {
                    title: None,
                    categories: vec![
                        SkillCategory {
                            name: s("Languages"),
                            bars: vec![
                                SkillBarSpec {
                                    label: s("Rust"),
                                    percent: 90,
                                },
                                SkillBarSpec {
                                    label: s("Go"),
                                    percent: 80,
                                },
                                SkillBarSpec {
                                    label: s("Python"),
                                    percent: 85,
                                },
                                SkillBarSpec {
                                    label: s("TypeScript"),
                                    percent: 70,
                                },
                            ],
                            items: vec![],
                        },
                        SkillCategory {
                            name: s("Infrastructure"),
                            bars: vec![
                                SkillBarSpec {
                                    label: s("Kubernetes"),
                                    percent: 85,
                                },
                                SkillBarSpec {
                                    label: s("Terraform"),
                                    percent: 75,
                                },
                                SkillBarSpec {
                                    label: s("Postgres"),
                                    percent: 80,
                                },
                            ],
                            items: vec![],
                        },
                        SkillCategory {
                            name: s("Practices"),
                            bars: vec![],
                            items: lines(&[
                                "Incident response and blameless reviews",
                                "Capacity planning",
                                "Design review facilitation",
                                "Mentoring mid-level engineers",
                            ]),
                        },
                    ],
                },
            },
        ],
    }
}

fn projects() -> Page {
    Page {
        id: s("projects"),
        title: s("Projects"),
        blocks: vec![
            Block {
                anchor: None,
                kind: BlockKind::Section {
                    title: s("Selected projects"),
                    body: lines(&["Things I am allowed to talk about."]),
                },
            },
            Block {
                anchor: Some(s("work")),
                kind: BlockKind::Projects {
                    title: None,
                    projects: vec![
                        Project {
                            name: s("driftwatch"),
                            summary: lines(&[
                                "Detects config drift between declared and running",
                                "infrastructure, with a daily digest instead of alarms.",
                            ]),
                            tags: lines(&["rust", "terraform", "aws"]),
                            art: lines(&[
                                "[declared] ──diff──▶ [running]",
                                "              │",
                                "              ▼",
                                "          [digest]",
                            ]),
                        },
                        Project {
                            name: s("quietpager"),
                            summary: lines(&[
                                "Alert routing layer that deduplicates, batches, and",
                                "downgrades pages outside business-impact windows.",
                                "Cut night pages by 70% at my last job.",
                            ]),
                            tags: lines(&["go", "pagerduty", "slo"]),
                            art: vec![],
                        },
                        Project {
                            name: s("shipnote"),
                            summary: lines(&[
                                "Generates human-readable release notes from merge",
                                "history and deploy markers.",
                            ]),
                            tags: lines(&["rust", "git"]),
                            art: vec![],
                        },
                    ],
                },
            },
        ],
    }
}

fn contact() -> Page {
    Page {
        id: s("contact"),
        title: s("Contact"),
        blocks: vec![
            Block {
                anchor: None,
                kind: BlockKind::Section {
                    title: s("Contact"),
                    body: lines(&[
                        "The form below goes to my inbox. No newsletter, no CRM.",
                    ]),
                },
            },
            Block {
                anchor: None,
                kind: BlockKind::Links {
                    title: Some(s("Jump to")),
                    links: vec![
                        PageLink {
                            label: s("Write to me"),
                            target: s("form"),
                        },
                        PageLink {
                            label: s("FAQ"),
                            target: s("faq"),
                        },
                    ],
                },
            },
            Block {
                anchor: Some(s("form")),
                kind: BlockKind::ContactForm {
                    title: Some(s("Write to me")),
                    fields: vec![
                        FieldSpec {
                            id: s("name"),
                            label: s("Name"),
                            kind: FieldKind::Text,
                            required: true,
                        },
                        FieldSpec {
                            id: s("email"),
                            label: s("Email"),
                            kind: FieldKind::Email,
                            required: true,
                        },
                        FieldSpec {
                            id: s("subject"),
                            label: s("Subject"),
                            kind: FieldKind::Text,
                            required: false,
                        },
                        FieldSpec {
                            id: s("message"),
                            label: s("Message"),
                            kind: FieldKind::Multiline,
                            required: true,
                        },
                    ],
                    success: s("Message sent! I read everything myself and reply within two days."),
                },
            },
            Block {
                anchor: Some(s("faq")),
                kind: BlockKind::Faq {
                    title: Some(s("FAQ")),
                    items: vec![
                        FaqItem {
                            question: s("Are you available for new work?"),
                            answer: lines(&[
                                "For audits and retainers, usually within a month.",
                                "Full-time roles only if the on-call story is sane.",
                            ]),
                        },
                        FaqItem {
                            question: s("Do you work remotely?"),
                            answer: lines(&[
                                "Yes, UTC+0 to UTC+2 overlap preferred. I travel for",
                                "kickoffs and incident postmortems.",
                            ]),
                        },
                        FaqItem {
                            question: s("What does an audit cost?"),
                            answer: lines(&[
                                "Fixed price, agreed before we start, depends on fleet",
                                "size. The fix list is yours either way.",
                            ]),
                        },
                        FaqItem {
                            question: s("Can you join our incident call right now?"),
                            answer: lines(&[
                                "If we have a retainer, yes. Otherwise email me and I",
                                "will tell you honestly whether I can help.",
                            ]),
                        },
                    ],
                },
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_pages_in_nav_order() {
        let p = portfolio();
        let ids = p.page_ids();
        assert_eq!(ids, vec!["home", "skills", "projects", "contact"]);
    }

    #[test]
    fn home_page_carries_the_demo() {
        let p = portfolio();
        let home = &p.pages[0];
        assert!(home.has_demo());
        assert!(!home.has_contact_form());
    }

    #[test]
    fn contact_page_form_has_required_and_optional_fields() {
        let p = portfolio();
        let contact = p.pages.iter().find(|pg| pg.id == "contact").unwrap();
        let form = contact
            .blocks
            .iter()
            .find_map(|b| match &b.kind {
                BlockKind::ContactForm { fields, .. } => Some(fields),
                _ => None,
            })
            .unwrap();
        assert!(form.iter().any(|f| f.required));
        assert!(
            form.iter().any(|f| !f.required),
            "at least one optional field keeps the skip path exercised"
        );
        assert!(form.iter().any(|f| f.kind == FieldKind::Email));
    }

    #[test]
    fn links_resolve_to_anchors_on_their_own_page() {
        let p = portfolio();
        for page in &p.pages {
            let anchors: Vec<&str> = page
                .blocks
                .iter()
                .filter_map(|b| b.anchor.as_deref())
                .collect();
            for block in &page.blocks {
                if let BlockKind::Links { links, .. } = &block.kind {
                    for link in links {
                        assert!(
                            anchors.contains(&link.target.as_str()),
                            "page '{}': link '{}' targets missing anchor '{}'",
                            page.id,
                            link.label,
                            link.target
                        );
                    }
                }
            }
        }
    }
}
