//! Global keyboard routing
//!
//! One [`KeyboardRouter`] represents the application's global input scope.
//! Each mounted widget registers once and keeps the returned [`KeyListener`];
//! dropping the listener deregisters it. The router holds only weak handles
//! and the navigator reads its own state when a key arrives, so listeners
//! never need re-registering when the active slide changes.

use crate::navigation::{NavigationSource, SlideNavigator};
use crate::CarouselId;
use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// Keys the carousels respond to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    /// Parse a DOM-style key name
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(NavKey::ArrowLeft),
            "ArrowRight" => Some(NavKey::ArrowRight),
            _ => None,
        }
    }
}

type ListenerTable = RwLock<AHashMap<CarouselId, Weak<SlideNavigator>>>;

/// Process-wide key dispatch for mounted carousels
#[derive(Default)]
pub struct KeyboardRouter {
    listeners: Arc<ListenerTable>,
}

impl KeyboardRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `navigator` under `id` for the lifetime of the returned guard
    pub fn register(&self, id: CarouselId, navigator: &Arc<SlideNavigator>) -> KeyListener {
        self.listeners.write().insert(id, Arc::downgrade(navigator));
        debug!(%id, "keyboard listener registered");
        KeyListener {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Deliver a key press to every registered carousel.
    ///
    /// Returns how many carousels handled it.
    pub fn dispatch(&self, key: NavKey) -> usize {
        // Collect first so navigator callbacks run without the table lock held.
        let targets: Vec<Arc<SlideNavigator>> = self
            .listeners
            .read()
            .values()
            .filter_map(Weak::upgrade)
            .collect();

        for navigator in &targets {
            let index = match key {
                NavKey::ArrowRight => navigator.advance(NavigationSource::Keyboard),
                NavKey::ArrowLeft => navigator.retreat(NavigationSource::Keyboard),
            };
            trace!(?key, index, "key handled");
        }
        targets.len()
    }

    /// Number of live registrations
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

impl std::fmt::Debug for KeyboardRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyboardRouter")
            .field("listeners", &self.listeners.read().len())
            .finish()
    }
}

/// Registration guard; deregisters on drop
#[derive(Debug)]
pub struct KeyListener {
    id: CarouselId,
    listeners: Weak<ListenerTable>,
}

impl KeyListener {
    pub fn id(&self) -> CarouselId {
        self.id
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.write().remove(&self.id);
            debug!(id = %self.id, "keyboard listener removed");
        }
    }
}
