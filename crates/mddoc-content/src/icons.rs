//! Glyph resolution for navigation icon identifiers.

use mddoc_nav::Icon;

/// Resolve a navigation icon identifier to its glyph name.
///
/// The navigation catalog treats icons as opaque identifiers; this lookup
/// table is where they gain meaning for rendering.
#[must_use]
pub const fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Rocket => "rocket",
        Icon::Download => "download",
        Icon::Braces => "braces",
        Icon::Webhook => "webhook",
        Icon::GitBranch => "git-branch",
        Icon::MessageSquare => "message-square",
    }
}
