use serde::{Deserialize, Serialize};

/// Visual properties for one animation state
///
/// `None` means "leave the property alone"; the empty descriptor produces
/// no visual change at all.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleDescriptor {
    pub opacity: Option<f64>,
    pub translate_x: Option<f64>,
    pub translate_y: Option<f64>,
    pub scale: Option<f64>,
    /// Transition length when animating into this style, 0 for host default
    pub duration_ms: u64,
}

impl StyleDescriptor {
    pub const EMPTY: StyleDescriptor = StyleDescriptor {
        opacity: None,
        translate_x: None,
        translate_y: None,
        scale: None,
        duration_ms: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.opacity.is_none()
            && self.translate_x.is_none()
            && self.translate_y.is_none()
            && self.scale.is_none()
    }

    /// Fill unset properties with their identity values
    pub fn resolve(&self) -> ResolvedStyle {
        ResolvedStyle {
            opacity: self.opacity.unwrap_or(1.0),
            translate_x: self.translate_x.unwrap_or(0.0),
            translate_y: self.translate_y.unwrap_or(0.0),
            scale: self.scale.unwrap_or(1.0),
        }
    }
}

/// Fully specified style, the unit renderers interpolate over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        StyleDescriptor::EMPTY.resolve()
    }
}

/// Hidden/visible pair for a variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantStyles {
    pub hidden: StyleDescriptor,
    pub visible: StyleDescriptor,
}

const REVEAL_DURATION_MS: u64 = 600;

/// Named reveal animation
///
/// Unknown names resolve to `FadeIn`, both from config and from `from_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RevealVariant {
    #[default]
    FadeIn,
    SlideUp,
    SlideIn,
    Scale,
    None,
}

impl RevealVariant {
    pub const ALL: [RevealVariant; 5] = [
        RevealVariant::FadeIn,
        RevealVariant::SlideUp,
        RevealVariant::SlideIn,
        RevealVariant::Scale,
        RevealVariant::None,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "fadeIn" => RevealVariant::FadeIn,
            "slideUp" => RevealVariant::SlideUp,
            "slideIn" => RevealVariant::SlideIn,
            "scale" => RevealVariant::Scale,
            "none" => RevealVariant::None,
            _ => RevealVariant::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RevealVariant::FadeIn => "fadeIn",
            RevealVariant::SlideUp => "slideUp",
            RevealVariant::SlideIn => "slideIn",
            RevealVariant::Scale => "scale",
            RevealVariant::None => "none",
        }
    }

    pub fn styles(&self) -> VariantStyles {
        let shown = |descriptor: StyleDescriptor| StyleDescriptor {
            opacity: Some(1.0),
            duration_ms: REVEAL_DURATION_MS,
            ..descriptor
        };

        match self {
            RevealVariant::FadeIn => VariantStyles {
                hidden: StyleDescriptor {
                    opacity: Some(0.0),
                    ..StyleDescriptor::EMPTY
                },
                visible: shown(StyleDescriptor::EMPTY),
            },
            RevealVariant::SlideUp => VariantStyles {
                hidden: StyleDescriptor {
                    opacity: Some(0.0),
                    translate_y: Some(50.0),
                    ..StyleDescriptor::EMPTY
                },
                visible: shown(StyleDescriptor {
                    translate_y: Some(0.0),
                    ..StyleDescriptor::EMPTY
                }),
            },
            RevealVariant::SlideIn => VariantStyles {
                hidden: StyleDescriptor {
                    opacity: Some(0.0),
                    translate_x: Some(-50.0),
                    ..StyleDescriptor::EMPTY
                },
                visible: shown(StyleDescriptor {
                    translate_x: Some(0.0),
                    ..StyleDescriptor::EMPTY
                }),
            },
            RevealVariant::Scale => VariantStyles {
                hidden: StyleDescriptor {
                    opacity: Some(0.0),
                    scale: Some(0.8),
                    ..StyleDescriptor::EMPTY
                },
                visible: shown(StyleDescriptor {
                    scale: Some(1.0),
                    ..StyleDescriptor::EMPTY
                }),
            },
            RevealVariant::None => VariantStyles {
                hidden: StyleDescriptor::EMPTY,
                visible: StyleDescriptor::EMPTY,
            },
        }
    }
}

impl From<String> for RevealVariant {
    fn from(name: String) -> Self {
        RevealVariant::from_name(&name)
    }
}

impl From<RevealVariant> for String {
    fn from(variant: RevealVariant) -> Self {
        variant.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_falls_back_to_fade_in() {
        let bogus = RevealVariant::from_name("bogus");
        assert_eq!(bogus, RevealVariant::FadeIn);
        assert_eq!(bogus.styles(), RevealVariant::FadeIn.styles());
    }

    #[test]
    fn test_names_roundtrip() {
        for variant in RevealVariant::ALL {
            assert_eq!(RevealVariant::from_name(variant.name()), variant);
        }
    }

    #[test]
    fn test_none_variant_is_empty_both_ways() {
        let styles = RevealVariant::None.styles();
        assert!(styles.hidden.is_empty());
        assert!(styles.visible.is_empty());
        assert_eq!(styles.hidden.resolve(), styles.visible.resolve());
    }

    #[test]
    fn test_visible_styles_resolve_to_identity() {
        for variant in RevealVariant::ALL {
            assert_eq!(variant.styles().visible.resolve(), ResolvedStyle::default());
        }
    }

    #[test]
    fn test_hidden_offsets() {
        assert_eq!(RevealVariant::SlideUp.styles().hidden.translate_y, Some(50.0));
        assert_eq!(RevealVariant::SlideIn.styles().hidden.translate_x, Some(-50.0));
        assert_eq!(RevealVariant::Scale.styles().hidden.scale, Some(0.8));
    }

    #[test]
    fn test_deserialize_unknown_name() {
        #[derive(Deserialize)]
        struct Holder {
            variant: RevealVariant,
        }
        let holder: Holder = toml::from_str("variant = \"sparkle\"").unwrap();
        assert_eq!(holder.variant, RevealVariant::FadeIn);
    }
}
