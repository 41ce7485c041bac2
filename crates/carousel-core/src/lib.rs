//! Core state machine for the slide carousel widgets
//!
//! This crate owns everything that is not drawing: the navigator, the
//! derived visual state, pagination, responsive resolution and the autoplay
//! and keyboard drivers. Renderers consume [`SlideFrame`]s.

pub mod autoplay;
pub mod frame;
pub mod keyboard;
pub mod navigation;
pub mod options;
pub mod pagination;
pub mod responsive;
pub mod visual;

/// Identifier of a mounted widget instance
pub type CarouselId = uuid::Uuid;

// Re-export commonly used types
pub use autoplay::{AutoplayDriver, AutoplaySettings};
pub use frame::{SlideFrame, SlideVisual};
pub use keyboard::{KeyListener, KeyboardRouter, NavKey};
pub use navigation::{
    NavigationContext, NavigationControls, NavigationSource, NavigationSubscriber,
    NavigatorConfig, SlideNavigator, Variant, WrapMode,
};
pub use options::{ConfigError, LiteCarouselOptions, SlideOptions, SwiperOptions};
pub use pagination::MarkerState;
pub use responsive::{SlidesPerView, VisibleCountSpec};
pub use visual::{CoverflowParams, ItemVisual, Transform3D, TransitionKind};
