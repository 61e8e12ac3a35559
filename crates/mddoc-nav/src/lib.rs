//! Documentation navigation catalog for mddoc.app.
//!
//! This crate provides:
//! - [`NavSection`] / [`NavEntry`]: the canonical documentation site map
//! - [`flat_entries`]: the flattened view used for path lookups
//!
//! The catalog is frozen static data. It is built once at compile time and
//! never mutated, so accessors borrow with `'static` lifetime and there is
//! nothing to lock or reload.
//!
//! # Quick Start
//!
//! ```
//! use mddoc_nav::{find_by_href, sections};
//!
//! // Render a navigation menu
//! for section in sections() {
//!     for entry in section.items {
//!         println!("{} -> {}", entry.title, entry.href);
//!     }
//! }
//!
//! // Look up a single page by path
//! let entry = find_by_href("/docs/quick-start").unwrap();
//! assert_eq!(entry.title, "Quick Start");
//! ```

mod catalog;

pub use catalog::{Icon, NavEntry, NavSection, find_by_href, flat_entries, sections};
