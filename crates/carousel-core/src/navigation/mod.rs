use serde::{Deserialize, Serialize};

mod engine;
mod position;
mod subscriber;

pub use engine::SlideNavigator;
pub use position::{max_bounded_index, resolve_index, NavigationControls};
pub use subscriber::NavigationSubscriber;

/// How navigation behaves at either end of the slide collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Clamp to the first/last valid window
    Bounded,
    /// Cycle modulo the slide count
    Infinite,
}

impl WrapMode {
    /// Map a boolean `infinite`/`loop` option onto a wrap mode
    pub fn from_looping(looping: bool) -> Self {
        if looping {
            WrapMode::Infinite
        } else {
            WrapMode::Bounded
        }
    }
}

/// Which widget family a navigator serves.
///
/// The two families share the state machine but differ in step size,
/// pagination and the container offset formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Lite carousel: pages by `visible_count`, one marker per page
    Basic,
    /// Swiper: moves one slide at a time, one marker per slide
    Extended,
}

/// What triggered a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationSource {
    Initial,
    Pointer,
    Keyboard,
    Autoplay,
    Reconfigure,
}

impl NavigationSource {
    /// Whether this source is a direct user interaction
    pub fn is_interaction(self) -> bool {
        matches!(self, NavigationSource::Pointer | NavigationSource::Keyboard)
    }
}

/// Resolved navigator configuration for one render cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorConfig {
    pub item_count: usize,
    pub visible_count: usize,
    pub wrap_mode: WrapMode,
    pub step: usize,
    pub variant: Variant,
}

impl NavigatorConfig {
    /// Build a config with the variant's natural step.
    ///
    /// `visible_count` and the derived step are coerced to at least 1.
    pub fn new(item_count: usize, visible_count: usize, wrap_mode: WrapMode, variant: Variant) -> Self {
        let visible_count = visible_count.max(1);
        let step = match variant {
            Variant::Basic => visible_count,
            Variant::Extended => 1,
        };
        Self {
            item_count,
            visible_count,
            wrap_mode,
            step,
            variant,
        }
    }

    /// Override the step size (coerced to at least 1)
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step.max(1);
        self
    }
}

/// Snapshot handed to subscribers and renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    pub config: NavigatorConfig,
    pub active_index: usize,
    pub is_paused: bool,
    pub last_source: NavigationSource,
    /// Incremented every time `active_index` changes
    pub revision: u64,
    /// Pointer/keyboard requests accepted so far, including ones that
    /// left the index where it was
    pub interactions: u64,
}

impl NavigationContext {
    /// Prev/next availability for this snapshot
    pub fn controls(&self) -> NavigationControls {
        NavigationControls::for_position(&self.config, self.active_index)
    }
}
