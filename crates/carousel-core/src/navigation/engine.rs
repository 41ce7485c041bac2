//! Slide navigator implementation

use super::{
    resolve_index, NavigationContext, NavigationSource, NavigationSubscriber, NavigatorConfig,
};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::debug;

/// Navigator state stored internally
#[derive(Debug, Clone)]
struct NavigatorState {
    config: NavigatorConfig,
    active_index: usize,
    is_paused: bool,
    last_source: NavigationSource,
    revision: u64,
    interactions: u64,
}

impl NavigatorState {
    fn context(&self) -> NavigationContext {
        NavigationContext {
            config: self.config,
            active_index: self.active_index,
            is_paused: self.is_paused,
            last_source: self.last_source,
            revision: self.revision,
            interactions: self.interactions,
        }
    }
}

/// The slide navigation state machine.
///
/// Shared behind an `Arc` by the owning widget, its keyboard listener and any
/// subscribers. Every operation reads the state at call time, so a handler
/// holding the navigator never acts on a stale index.
pub struct SlideNavigator {
    state: RwLock<NavigatorState>,
    subscribers: RwLock<Vec<Weak<dyn NavigationSubscriber>>>,
}

impl SlideNavigator {
    /// Create a navigator positioned on the first slide
    pub fn new(config: NavigatorConfig) -> Self {
        let state = NavigatorState {
            config,
            active_index: 0,
            is_paused: false,
            last_source: NavigationSource::Initial,
            revision: 0,
            interactions: 0,
        };

        Self {
            state: RwLock::new(state),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Navigate to `requested`, wrapping or clamping per the wrap mode.
    ///
    /// Returns the resulting active index. An empty collection leaves the
    /// index untouched.
    pub fn go_to(&self, requested: i64, source: NavigationSource) -> usize {
        self.navigate(|_| requested, source)
    }

    /// Move forward by the configured step
    pub fn advance(&self, source: NavigationSource) -> usize {
        self.navigate(|state| state.active_index as i64 + state.config.step as i64, source)
    }

    /// Move backward by the configured step
    pub fn retreat(&self, source: NavigationSource) -> usize {
        self.navigate(|state| state.active_index as i64 - state.config.step as i64, source)
    }

    fn navigate(&self, target: impl FnOnce(&NavigatorState) -> i64, source: NavigationSource) -> usize {
        let mut state = self.state.write();
        let requested = target(&state);

        let Some(next) = resolve_index(requested, &state.config) else {
            return state.active_index;
        };

        state.last_source = source;
        if source.is_interaction() {
            state.interactions += 1;
        }
        if next == state.active_index {
            return next;
        }

        debug!(from = state.active_index, to = next, requested, ?source, "slide changed");
        state.active_index = next;
        state.revision += 1;

        drop(state);
        self.notify_subscribers();
        next
    }

    /// Install a new configuration and re-clamp the active index against it
    pub fn reconfigure(&self, config: NavigatorConfig) {
        let mut state = self.state.write();
        if state.config == config {
            return;
        }

        let previous = state.active_index;
        state.config = config;
        state.active_index = resolve_index(previous as i64, &config).unwrap_or(0);
        if state.active_index != previous {
            state.revision += 1;
            state.last_source = NavigationSource::Reconfigure;
        }

        debug!(
            items = config.item_count,
            visible = config.visible_count,
            from = previous,
            to = state.active_index,
            "navigator reconfigured"
        );

        drop(state);
        self.notify_subscribers();
    }

    /// Suspend or resume autoplay without touching the index
    pub fn set_paused(&self, paused: bool) {
        let mut state = self.state.write();
        if state.is_paused == paused {
            return;
        }
        state.is_paused = paused;
        drop(state);
        self.notify_subscribers();
    }

    /// Current active index
    pub fn active_index(&self) -> usize {
        self.state.read().active_index
    }

    /// Current configuration
    pub fn config(&self) -> NavigatorConfig {
        self.state.read().config
    }

    /// Get current navigation context
    pub fn context(&self) -> NavigationContext {
        self.state.read().context()
    }

    /// Add a subscriber. Only a weak handle is kept.
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of navigation change
    fn notify_subscribers(&self) {
        let context = self.context();

        let live: Vec<Arc<dyn NavigationSubscriber>> = {
            let mut subscribers = self.subscribers.write();
            // Remove any dead weak references
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in live {
            subscriber.on_navigation_change(&context);
        }
    }
}

impl std::fmt::Debug for SlideNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideNavigator")
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}
