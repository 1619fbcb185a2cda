//! Width→tier classification.

use serde::{Deserialize, Serialize};

/// Inclusive lower bound of the tablet tier, in CSS pixels.
pub const TABLET_MIN_WIDTH: f64 = 768.0;

/// Inclusive lower bound of the desktop tier, in CSS pixels.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

/// Device class derived from viewport width.
///
/// Ordered `Mobile < Tablet < Desktop` so the classification is monotonic in
/// width.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LayoutTier {
    Mobile,
    Tablet,
    Desktop,
}

impl LayoutTier {
    /// Classify a viewport width.
    ///
    /// Total for all `f64` inputs: negative and non-finite widths fall
    /// through to `Mobile`.
    pub fn for_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            LayoutTier::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            LayoutTier::Tablet
        } else {
            LayoutTier::Mobile
        }
    }
}

impl core::fmt::Display for LayoutTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            LayoutTier::Mobile => "mobile",
            LayoutTier::Tablet => "tablet",
            LayoutTier::Desktop => "desktop",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive_lower_bounds() {
        assert_eq!(LayoutTier::for_width(767.0), LayoutTier::Mobile);
        assert_eq!(LayoutTier::for_width(768.0), LayoutTier::Tablet);
        assert_eq!(LayoutTier::for_width(1023.0), LayoutTier::Tablet);
        assert_eq!(LayoutTier::for_width(1024.0), LayoutTier::Desktop);
    }

    #[test]
    fn degenerate_widths_classify_as_mobile() {
        assert_eq!(LayoutTier::for_width(0.0), LayoutTier::Mobile);
        assert_eq!(LayoutTier::for_width(-500.0), LayoutTier::Mobile);
        assert_eq!(LayoutTier::for_width(f64::NAN), LayoutTier::Mobile);
        assert_eq!(LayoutTier::for_width(f64::NEG_INFINITY), LayoutTier::Mobile);
    }

    #[test]
    fn huge_widths_classify_as_desktop() {
        assert_eq!(LayoutTier::for_width(4096.0), LayoutTier::Desktop);
        assert_eq!(LayoutTier::for_width(f64::INFINITY), LayoutTier::Desktop);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: classification is total and lands on a known tier.
            #[test]
            fn classification_is_total(width in proptest::num::f64::ANY) {
                let tier = LayoutTier::for_width(width);
                prop_assert!(matches!(
                    tier,
                    LayoutTier::Mobile | LayoutTier::Tablet | LayoutTier::Desktop
                ));
            }

            /// Property: tier is monotonic non-decreasing in width.
            #[test]
            fn classification_is_monotonic(a in -10_000.0f64..10_000.0, b in -10_000.0f64..10_000.0) {
                let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(LayoutTier::for_width(narrow) <= LayoutTier::for_width(wide));
            }
        }
    }
}
