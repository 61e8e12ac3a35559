//! Gradient styled-text helper for headline fragments.

use serde::Serialize;

/// Gradient treatment applied by [`gradient_text`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientVariant {
    /// Default treatment when none is specified.
    #[default]
    Orange,
    Teal,
    Golden,
}

impl GradientVariant {
    /// CSS utility classes for this variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Orange => {
                "bg-gradient-to-r from-orange-400 via-amber-400 to-rose-400 bg-clip-text text-transparent"
            }
            Self::Teal => {
                "bg-gradient-to-r from-teal-400 via-cyan-400 to-sky-400 bg-clip-text text-transparent"
            }
            Self::Golden => {
                "bg-gradient-to-r from-yellow-400 via-amber-300 to-orange-300 bg-clip-text text-transparent"
            }
        }
    }
}

/// Wrap `content` in a span carrying the variant's gradient classes.
///
/// Total lookup over the closed variant set; the content is not escaped or
/// altered.
#[must_use]
pub fn gradient_text(content: &str, variant: GradientVariant) -> String {
    format!(r#"<span class="{}">{content}</span>"#, variant.class())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_gradient_text_wraps_content() {
        let html = gradient_text("in minutes", GradientVariant::Teal);

        assert_eq!(
            html,
            format!(
                r#"<span class="{}">in minutes</span>"#,
                GradientVariant::Teal.class()
            )
        );
    }

    #[test]
    fn test_default_variant_is_orange() {
        assert_eq!(GradientVariant::default(), GradientVariant::Orange);
        assert_eq!(
            gradient_text("ship docs", GradientVariant::default()),
            gradient_text("ship docs", GradientVariant::Orange)
        );
    }

    #[test]
    fn test_each_variant_has_fixed_classes() {
        let classes = [
            GradientVariant::Orange.class(),
            GradientVariant::Teal.class(),
            GradientVariant::Golden.class(),
        ];

        for class in classes {
            assert!(class.contains("bg-clip-text"));
            assert!(class.contains("text-transparent"));
        }
        // Treatments are distinct per variant
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
    }

    #[test]
    fn test_variant_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(GradientVariant::Golden).unwrap(),
            serde_json::Value::String("golden".to_owned())
        );
    }
}
