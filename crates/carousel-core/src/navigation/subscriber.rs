//! Navigation subscriber trait

use super::NavigationContext;

/// Trait for components that need to respond to slide changes
pub trait NavigationSubscriber: Send + Sync {
    /// Called after the active index, pause state or configuration changes
    fn on_navigation_change(&self, context: &NavigationContext);
}
