//! Presentation-layer content for mddoc.app.
//!
//! This crate provides the declarative content and small rendering helpers
//! consumed by page templates:
//! - [`testimonials`]: the customer testimonial list
//! - [`gradient_text`]: the styled-text wrapper used in headlines
//! - [`icon_glyph`]: resolution of navigation icon identifiers to glyphs
//!
//! Nothing here is part of the navigation or structured-data core; the core
//! treats this crate as an external collaborator.

mod icons;
mod styled_text;
mod testimonials;

pub use icons::icon_glyph;
pub use styled_text::{GradientVariant, gradient_text};
pub use testimonials::{Testimonial, testimonials};
