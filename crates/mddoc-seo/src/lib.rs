//! Structured-data generation for mddoc.app pages.
//!
//! This crate provides:
//! - [`breadcrumbs`]: derive a schema.org `BreadcrumbList` document for a
//!   documentation page
//! - [`BreadcrumbList`]: the JSON-LD document, serialized via `Display` and
//!   embedded via [`BreadcrumbList::script_tag`]
//!
//! The output shape is an external contract consumed by search-engine
//! crawlers, so field names and ordering are fixed.
//!
//! # Quick Start
//!
//! ```
//! use mddoc_seo::breadcrumbs;
//!
//! let doc = breadcrumbs("Quick Start", "/docs/quick-start");
//! let tag = doc.script_tag();
//! assert!(tag.starts_with(r#"<script type="application/ld+json">"#));
//! ```

mod breadcrumbs;

pub use breadcrumbs::{BreadcrumbList, ListItem, SITE_URL, breadcrumbs};
