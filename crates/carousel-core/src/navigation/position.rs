use super::{NavigatorConfig, WrapMode};

/// Largest legal index in bounded mode
pub fn max_bounded_index(item_count: usize, visible_count: usize) -> usize {
    item_count.saturating_sub(visible_count.max(1))
}

/// Resolve a requested index into a legal one for `config`.
///
/// Returns `None` for an empty collection; callers keep their current index.
pub fn resolve_index(requested: i64, config: &NavigatorConfig) -> Option<usize> {
    if config.item_count == 0 {
        return None;
    }

    let resolved = match config.wrap_mode {
        WrapMode::Infinite => {
            let total = config.item_count as i64;
            requested.rem_euclid(total)
        }
        WrapMode::Bounded => {
            let max = max_bounded_index(config.item_count, config.visible_count) as i64;
            requested.clamp(0, max)
        }
    };

    Some(resolved as usize)
}

/// Enabled state of the previous/next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationControls {
    pub can_retreat: bool,
    pub can_advance: bool,
}

impl NavigationControls {
    /// Compute control availability for `active_index` under `config`.
    ///
    /// Infinite mode never disables a control; bounded mode disables the
    /// control pointing past the corresponding extreme.
    pub fn for_position(config: &NavigatorConfig, active_index: usize) -> Self {
        if config.item_count == 0 {
            return Self::default();
        }

        match config.wrap_mode {
            WrapMode::Infinite => Self {
                can_retreat: true,
                can_advance: true,
            },
            WrapMode::Bounded => {
                let max = max_bounded_index(config.item_count, config.visible_count);
                Self {
                    can_retreat: active_index > 0,
                    can_advance: active_index < max,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Variant;

    fn config(items: usize, visible: usize, wrap: WrapMode) -> NavigatorConfig {
        NavigatorConfig::new(items, visible, wrap, Variant::Extended)
    }

    #[test]
    fn test_infinite_wraps_negative_requests() {
        let cfg = config(5, 1, WrapMode::Infinite);
        assert_eq!(resolve_index(-1, &cfg), Some(4));
        assert_eq!(resolve_index(-6, &cfg), Some(4));
        assert_eq!(resolve_index(5, &cfg), Some(0));
        assert_eq!(resolve_index(12, &cfg), Some(2));
    }

    #[test]
    fn test_bounded_clamps_to_last_window() {
        let cfg = config(10, 3, WrapMode::Bounded);
        assert_eq!(resolve_index(-4, &cfg), Some(0));
        assert_eq!(resolve_index(7, &cfg), Some(7));
        assert_eq!(resolve_index(8, &cfg), Some(7));
    }

    #[test]
    fn test_bounded_with_more_visible_than_items() {
        let cfg = config(2, 5, WrapMode::Bounded);
        assert_eq!(resolve_index(1, &cfg), Some(0));
    }

    #[test]
    fn test_empty_collection_is_idle() {
        assert_eq!(resolve_index(3, &config(0, 1, WrapMode::Infinite)), None);
        assert_eq!(resolve_index(3, &config(0, 1, WrapMode::Bounded)), None);
        let controls = NavigationControls::for_position(&config(0, 1, WrapMode::Infinite), 0);
        assert_eq!(controls, NavigationControls::default());
    }

    #[test]
    fn test_bounded_controls_disable_at_extremes() {
        let cfg = config(4, 2, WrapMode::Bounded);
        let start = NavigationControls::for_position(&cfg, 0);
        assert!(!start.can_retreat);
        assert!(start.can_advance);

        let end = NavigationControls::for_position(&cfg, 2);
        assert!(end.can_retreat);
        assert!(!end.can_advance);

        let single_window = NavigationControls::for_position(&config(2, 2, WrapMode::Bounded), 0);
        assert!(!single_window.can_retreat && !single_window.can_advance);
    }

    #[test]
    fn test_infinite_controls_always_enabled() {
        let controls = NavigationControls::for_position(&config(3, 1, WrapMode::Infinite), 0);
        assert!(controls.can_retreat && controls.can_advance);
    }
}
