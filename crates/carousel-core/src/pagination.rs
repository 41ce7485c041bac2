//! Pagination markers

use crate::navigation::{NavigatorConfig, Variant};

/// Number of markers to render
pub fn marker_count(item_count: usize, visible_count: usize, variant: Variant) -> usize {
    match variant {
        Variant::Basic => item_count.div_ceil(visible_count.max(1)),
        Variant::Extended => item_count,
    }
}

/// Marker highlighted for `active_index`
pub fn active_marker(active_index: usize, visible_count: usize, variant: Variant) -> usize {
    match variant {
        Variant::Basic => active_index / visible_count.max(1),
        Variant::Extended => active_index,
    }
}

/// Index requested when `marker` is clicked
pub fn marker_target(marker: usize, visible_count: usize, variant: Variant) -> usize {
    match variant {
        Variant::Basic => marker * visible_count.max(1),
        Variant::Extended => marker,
    }
}

/// Marker row for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerState {
    pub count: usize,
    /// `None` when there are no markers
    pub active: Option<usize>,
}

impl MarkerState {
    pub fn new(config: &NavigatorConfig, active_index: usize) -> Self {
        let count = marker_count(config.item_count, config.visible_count, config.variant);
        let active = (count > 0)
            .then(|| active_marker(active_index, config.visible_count, config.variant));
        Self { count, active }
    }

    /// Whether `marker` is the highlighted one
    pub fn is_active(&self, marker: usize) -> bool {
        self.active == Some(marker)
    }
}
