//! Canonical site map for the documentation area.
//!
//! The catalog is a flat, declarative description of every documentation
//! page the site links to: sections in display order, each holding entries
//! in display order. It is the single source of truth for the navigation
//! menu and for any flat path lookup, so the flattened view is always
//! derived from the sectioned view rather than maintained separately.

use serde::Serialize;

/// Symbolic glyph identifier attached to a navigation entry.
///
/// Opaque to this crate. The presentation layer resolves each variant to a
/// concrete glyph; serialization uses the kebab-case key of the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Rocket,
    Download,
    Braces,
    Webhook,
    GitBranch,
    MessageSquare,
}

/// Single documentation page link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Display title.
    pub title: &'static str,
    /// Absolute site-relative path (`/docs/...`), unique across the catalog.
    pub href: &'static str,
    /// Glyph identifier, resolved by the presentation layer.
    pub icon: Icon,
}

/// Titled group of navigation entries.
///
/// Item order is display order and is preserved exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    /// Section label.
    pub title: &'static str,
    /// Entries in display order.
    pub items: &'static [NavEntry],
}

/// The documentation site map, frozen at compile time.
const CATALOG: &[NavSection] = &[
    NavSection {
        title: "Getting Started",
        items: &[
            NavEntry {
                title: "Quick Start",
                href: "/docs/quick-start",
                icon: Icon::Rocket,
            },
            NavEntry {
                title: "Installation",
                href: "/docs/installation",
                icon: Icon::Download,
            },
        ],
    },
    NavSection {
        title: "API Reference",
        items: &[
            NavEntry {
                title: "REST API",
                href: "/docs/rest-api",
                icon: Icon::Braces,
            },
            NavEntry {
                title: "Webhooks",
                href: "/docs/webhooks",
                icon: Icon::Webhook,
            },
        ],
    },
    NavSection {
        title: "Integrations",
        items: &[
            NavEntry {
                title: "GitHub",
                href: "/docs/github",
                icon: Icon::GitBranch,
            },
            NavEntry {
                title: "Slack",
                href: "/docs/slack",
                icon: Icon::MessageSquare,
            },
        ],
    },
];

/// Get the full catalog in display order.
#[must_use]
pub const fn sections() -> &'static [NavSection] {
    CATALOG
}

/// Iterate over all entries flattened in section-then-item order.
///
/// Always exactly the concatenation of each section's items in order, so
/// this view can never disagree with [`sections`].
pub fn flat_entries() -> impl Iterator<Item = &'static NavEntry> {
    sections().iter().flat_map(|section| section.items.iter())
}

/// Find an entry by its site-relative path.
///
/// # Arguments
///
/// * `href` - Absolute site-relative path (e.g., "/docs/quick-start")
///
/// # Returns
///
/// Entry reference if found, `None` otherwise.
#[must_use]
pub fn find_by_href(href: &str) -> Option<&'static NavEntry> {
    flat_entries().find(|entry| entry.href == href)
}
