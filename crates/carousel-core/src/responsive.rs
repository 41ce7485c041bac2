//! Responsive visible-count resolution
//!
//! Options may give the visible count as a plain number or as a mapping from
//! minimum viewport width to count. The widgets re-run the resolver whenever
//! the observed viewport width changes.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Visible count used when no breakpoint matches the viewport
pub const FALLBACK_VISIBLE_COUNT: usize = 1;

/// Visible-count option of the basic variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VisibleCountSpec {
    Fixed(usize),
    /// Minimum viewport width (px) to visible count
    Breakpoints(BTreeMap<u32, usize>),
}

impl Default for VisibleCountSpec {
    fn default() -> Self {
        VisibleCountSpec::Fixed(1)
    }
}

impl VisibleCountSpec {
    /// Resolve against the current viewport width.
    ///
    /// The widest breakpoint not exceeding `viewport_width` wins; when none
    /// matches the fallback of 1 is used. A zero result is coerced to 1.
    pub fn resolve(&self, viewport_width: u32) -> usize {
        let count = match self {
            VisibleCountSpec::Fixed(count) => *count,
            VisibleCountSpec::Breakpoints(breakpoints) => breakpoints
                .range(..=viewport_width)
                .next_back()
                .map(|(_, count)| *count)
                .unwrap_or(FALLBACK_VISIBLE_COUNT),
        };
        coerce_visible_count(count)
    }
}

impl<'de> Deserialize<'de> for VisibleCountSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = VisibleCountSpec;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a slide count or a map of viewport width to slide count")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                usize::try_from(value)
                    .map(VisibleCountSpec::Fixed)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                u64::try_from(value)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
                    .and_then(|value| self.visit_u64(value))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut breakpoints = BTreeMap::new();
                while let Some((width, count)) = map.next_entry::<u32, usize>()? {
                    breakpoints.insert(width, count);
                }
                Ok(VisibleCountSpec::Breakpoints(breakpoints))
            }
        }

        deserializer.deserialize_any(SpecVisitor)
    }
}

/// Visible-count option of the extended variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SlidesPerViewRepr", into = "SlidesPerViewRepr")]
pub enum SlidesPerView {
    Fixed(usize),
    /// Show every slide at once
    Auto,
}

impl Default for SlidesPerView {
    fn default() -> Self {
        SlidesPerView::Fixed(1)
    }
}

impl SlidesPerView {
    /// Resolve against the slide count; `Auto` shows all of them
    pub fn resolve(&self, item_count: usize) -> usize {
        match self {
            SlidesPerView::Fixed(count) => coerce_visible_count(*count),
            SlidesPerView::Auto => item_count.max(1),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, SlidesPerView::Auto)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SlidesPerViewRepr {
    Count(usize),
    Keyword(String),
}

impl TryFrom<SlidesPerViewRepr> for SlidesPerView {
    type Error = String;

    fn try_from(repr: SlidesPerViewRepr) -> Result<Self, Self::Error> {
        match repr {
            SlidesPerViewRepr::Count(count) => Ok(SlidesPerView::Fixed(count)),
            SlidesPerViewRepr::Keyword(keyword) if keyword == "auto" => Ok(SlidesPerView::Auto),
            SlidesPerViewRepr::Keyword(other) => {
                Err(format!("expected a slide count or \"auto\", found \"{other}\""))
            }
        }
    }
}

impl From<SlidesPerView> for SlidesPerViewRepr {
    fn from(value: SlidesPerView) -> Self {
        match value {
            SlidesPerView::Fixed(count) => SlidesPerViewRepr::Count(count),
            SlidesPerView::Auto => SlidesPerViewRepr::Keyword("auto".to_string()),
        }
    }
}

fn coerce_visible_count(count: usize) -> usize {
    if count == 0 {
        warn!("visible slide count of 0 is invalid, using 1");
        return 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakpoints() -> VisibleCountSpec {
        VisibleCountSpec::Breakpoints(BTreeMap::from([(0, 1), (640, 2), (1024, 3)]))
    }

    #[test]
    fn test_fixed_spec_ignores_width() {
        assert_eq!(VisibleCountSpec::Fixed(4).resolve(10), 4);
        assert_eq!(VisibleCountSpec::Fixed(4).resolve(4000), 4);
    }

    #[test]
    fn test_breakpoints_pick_widest_match() {
        let spec = breakpoints();
        assert_eq!(spec.resolve(800), 2);
        assert_eq!(spec.resolve(50), 1);
        assert_eq!(spec.resolve(640), 2);
        assert_eq!(spec.resolve(1920), 3);
    }

    #[test]
    fn test_breakpoints_fall_back_to_one() {
        let spec = VisibleCountSpec::Breakpoints(BTreeMap::from([(768, 3)]));
        assert_eq!(spec.resolve(320), 1);
        assert_eq!(VisibleCountSpec::Breakpoints(BTreeMap::new()).resolve(320), 1);
    }

    #[test]
    fn test_zero_is_coerced() {
        assert_eq!(VisibleCountSpec::Fixed(0).resolve(100), 1);
        assert_eq!(SlidesPerView::Fixed(0).resolve(5), 1);
        assert_eq!(SlidesPerView::Auto.resolve(0), 1);
    }

    #[test]
    fn test_auto_shows_every_slide() {
        assert_eq!(SlidesPerView::Auto.resolve(7), 7);
        assert_eq!(SlidesPerView::Fixed(2).resolve(7), 2);
    }

    #[test]
    fn test_deserialize_scalar_and_map() {
        let fixed: VisibleCountSpec = serde_json::from_str("3").unwrap();
        assert_eq!(fixed, VisibleCountSpec::Fixed(3));

        let mapped: VisibleCountSpec =
            serde_json::from_str(r#"{"0": 1, "640": 2, "1024": 3}"#).unwrap();
        assert_eq!(mapped, breakpoints());
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_breakpoints() {
        assert!(serde_json::from_str::<VisibleCountSpec>(r#"{"wide": 3}"#).is_err());
        assert!(serde_json::from_str::<VisibleCountSpec>("-2").is_err());
    }

    #[test]
    fn test_slides_per_view_keyword() {
        let auto: SlidesPerView = serde_json::from_str(r#""auto""#).unwrap();
        assert_eq!(auto, SlidesPerView::Auto);
        let fixed: SlidesPerView = serde_json::from_str("2").unwrap();
        assert_eq!(fixed, SlidesPerView::Fixed(2));
        assert!(serde_json::from_str::<SlidesPerView>(r#""most""#).is_err());
        assert_eq!(serde_json::to_string(&SlidesPerView::Auto).unwrap(), r#""auto""#);
    }
}
