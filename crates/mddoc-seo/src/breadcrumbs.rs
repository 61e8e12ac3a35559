//! Breadcrumb JSON-LD for documentation pages.
//!
//! Every documentation page sits at a fixed depth: Home -> Docs -> page.
//! [`breadcrumbs`] derives the schema.org `BreadcrumbList` document for that
//! trail from the page's title and path alone.
//!
//! The generator is pure and total. It does not check the path against the
//! navigation catalog and does not normalize or encode anything; callers own
//! the correctness of the inputs, and malformed input yields a well-typed
//! but semantically wrong document rather than an error.

use std::fmt;

use serde::Serialize;

/// Canonical root URL of the site.
pub const SITE_URL: &str = "https://mddoc.app";

/// Single entry of a [`BreadcrumbList`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    item_type: &'static str,
    /// 1-based position in the trail.
    pub position: u32,
    /// Display name.
    pub name: String,
    /// Fully qualified absolute URL.
    pub item: String,
}

impl ListItem {
    fn new(position: u32, name: impl Into<String>, item: String) -> Self {
        Self {
            item_type: "ListItem",
            position,
            name: name.into(),
            item,
        }
    }
}

/// A schema.org `BreadcrumbList` document.
///
/// Serialized field order matches declaration order and is part of the
/// output contract: `@context`, `@type`, `itemListElement`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    list_type: &'static str,
    /// Trail items in position order.
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

impl BreadcrumbList {
    /// Render as an `application/ld+json` script element.
    ///
    /// This is the form a page template embeds verbatim into its metadata
    /// region.
    #[must_use]
    pub fn script_tag(&self) -> String {
        format!(r#"<script type="application/ld+json">{self}</script>"#)
    }
}

impl fmt::Display for BreadcrumbList {
    /// Compact JSON-LD serialization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Build the breadcrumb document for a documentation page.
///
/// # Arguments
///
/// * `title` - Page title, used verbatim as the final item's name
/// * `href` - Site-relative path (e.g., "/docs/quick-start"), appended
///   verbatim to [`SITE_URL`]
#[must_use]
pub fn breadcrumbs(title: &str, href: &str) -> BreadcrumbList {
    BreadcrumbList {
        context: "https://schema.org",
        list_type: "BreadcrumbList",
        item_list_element: vec![
            ListItem::new(1, "Home", SITE_URL.to_owned()),
            ListItem::new(2, "Docs", format!("{SITE_URL}/docs")),
            ListItem::new(3, title, format!("{SITE_URL}{href}")),
        ],
    }
}
