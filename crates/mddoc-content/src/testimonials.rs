//! Customer testimonial records.

use serde::Serialize;

/// Single customer testimonial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    /// Quoted statement.
    pub quote: &'static str,
    /// Person quoted.
    pub author: &'static str,
    /// Author's role.
    pub role: &'static str,
    /// Author's company.
    pub company: &'static str,
}

/// The testimonial list, frozen at compile time.
const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "We replaced three internal wikis with mddoc and our docs \
                finally stay in sync with the product.",
        author: "Maya Lindqvist",
        role: "Head of Platform",
        company: "Northbeam Labs",
    },
    Testimonial {
        quote: "The API reference pages practically write themselves. Our \
                support ticket volume dropped within a month.",
        author: "Daniel Okafor",
        role: "Developer Experience Lead",
        company: "Relayform",
    },
    Testimonial {
        quote: "Onboarding new engineers used to take a week of tribal \
                knowledge. Now we point them at the quick start.",
        author: "Sofia Reyes",
        role: "Engineering Manager",
        company: "Cartwheel",
    },
];

/// Get the testimonial list in display order.
#[must_use]
pub const fn testimonials() -> &'static [Testimonial] {
    TESTIMONIALS
}
