//! Widget option records
//!
//! Both widgets take a flat option bag. Each field carries the widget's
//! documented default, so a partial JSON document only needs the fields it
//! changes.

pub mod lite;
pub mod swiper;

pub use lite::{LiteCarouselOptions, LiteMode};
pub use swiper::{AutoplayOption, AutoplayParams, SwiperOptions};

use crate::autoplay::AutoplaySettings;
use crate::frame::SlideFrame;
use crate::navigation::{NavigationContext, NavigatorConfig};
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading widget options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid options document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Behavior shared by the option records of both widgets
pub trait SlideOptions {
    /// Short name used in logs
    fn widget_name(&self) -> &'static str;

    /// Resolve the navigator configuration for this render cycle
    fn navigator_config(&self, item_count: usize, viewport_width: u32) -> NavigatorConfig;

    fn autoplay_settings(&self) -> AutoplaySettings;

    /// Derive the rendering instructions for `context`
    fn frame(&self, context: &NavigationContext) -> SlideFrame;
}

/// Parse an options document
pub fn parse_options<T: DeserializeOwned>(json: &str) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse an options document from disk
pub fn load_options<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_options(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_options::<LiteCarouselOptions>("/nonexistent/carousel.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_malformed_document_is_json_error() {
        let result = parse_options::<SwiperOptions>(r#"{"slidesPerView": "many"}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("carousel-options-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{"autoplay": true, "autoplayInterval": 1500}"#).unwrap();
        let options: LiteCarouselOptions = load_options(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(options.autoplay);
        assert_eq!(options.autoplay_interval, 1500);
    }
}
