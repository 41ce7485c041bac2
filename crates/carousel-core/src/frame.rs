//! Rendering instructions for one frame

use crate::navigation::NavigationControls;
use crate::pagination::MarkerState;
use crate::visual::{ContainerLayout, ItemVisual, Transition};

/// Visual state of one slide, tagged with its position in the collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVisual {
    pub index: usize,
    /// `None` lets the slide size itself
    pub width_percent: Option<f32>,
    pub visual: ItemVisual,
}

/// Everything a renderer needs to draw a carousel
#[derive(Debug, Clone, PartialEq)]
pub struct SlideFrame {
    pub container: ContainerLayout,
    /// Transition applied to every slide
    pub item_transition: Option<Transition>,
    pub items: Vec<SlideVisual>,
    /// `None` when pagination is hidden
    pub markers: Option<MarkerState>,
    /// `None` when the prev/next arrows are hidden
    pub controls: Option<NavigationControls>,
}

impl SlideFrame {
    /// Slides in back-to-front paint order
    pub fn paint_order(&self) -> Vec<&SlideVisual> {
        let mut ordered: Vec<&SlideVisual> = self.items.iter().collect();
        ordered.sort_by_key(|item| item.visual.stack_order.unwrap_or(0));
        ordered
    }
}
