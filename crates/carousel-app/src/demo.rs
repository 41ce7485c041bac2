//! Demo configuration and slide-change logging

use carousel_core::options::{load_options, ConfigError};
use carousel_core::{
    LiteCarouselOptions, NavigationContext, NavigationSubscriber, SlidesPerView, SwiperOptions,
    TransitionKind,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Options document accepted on the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoOptions {
    /// Number of demo slides
    pub slide_count: usize,
    pub lite: LiteCarouselOptions,
    pub swiper: SwiperOptions,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            slide_count: 8,
            lite: LiteCarouselOptions {
                autoplay: true,
                ..LiteCarouselOptions::default()
            },
            swiper: SwiperOptions {
                slides_per_view: SlidesPerView::Fixed(3),
                centered_slides: true,
                effect: TransitionKind::Coverflow,
                looping: true,
                ..SwiperOptions::default()
            },
        }
    }
}

impl DemoOptions {
    /// Load from `path`, or fall back to the built-in demo
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                info!(path = %path.display(), "loading carousel options");
                load_options(path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Logs every slide change of the carousel it is attached to
pub struct SlideLogger {
    pub name: &'static str,
}

impl NavigationSubscriber for SlideLogger {
    fn on_navigation_change(&self, context: &NavigationContext) {
        info!(
            carousel = self.name,
            active = context.active_index,
            paused = context.is_paused,
            source = ?context.last_source,
            "navigation changed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_defaults_without_file() {
        let options = DemoOptions::load(None).unwrap();
        assert_eq!(options.slide_count, 8);
        assert!(options.swiper.uses_coverflow());
        assert!(options.lite.autoplay);
    }

    #[test]
    fn test_partial_document_keeps_demo_defaults() {
        let options: DemoOptions =
            serde_json::from_str(r#"{"slideCount": 12, "lite": {"mode": "fade"}}"#).unwrap();
        assert_eq!(options.slide_count, 12);
        assert_eq!(options.lite.mode, carousel_core::options::LiteMode::Fade);
        assert!(!options.lite.autoplay);
        assert!(options.swiper.uses_coverflow());
    }
}
