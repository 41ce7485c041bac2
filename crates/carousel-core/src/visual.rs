//! Per-item and container visual state derived from the navigator
//!
//! Nothing here draws anything. The output describes offsets, opacity,
//! 3-D transforms and transitions for whichever renderer hosts the widget.

use crate::navigation::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Perspective distance applied to off-center coverflow slides
pub const COVERFLOW_PERSPECTIVE_PX: f32 = 1200.0;

/// Opacity lost per slide of distance from the center in coverflow
pub const COVERFLOW_OPACITY_FALLOFF: f32 = 0.3;

/// Stacking order of the centered coverflow slide
pub const COVERFLOW_TOP_STACK: i32 = 10;

/// How slides transition between positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    #[default]
    Slide,
    Fade,
    Coverflow,
}

/// Coverflow tuning parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverflowParams {
    /// Y-axis rotation of off-center slides, in degrees
    pub rotate: f32,
    /// Horizontal pull towards the center per slide of distance, in px
    pub stretch: f32,
    /// Recession per slide of distance, in px
    pub depth: f32,
    /// Scale factor compounded per slide of distance
    pub scale: f32,
}

impl Default for CoverflowParams {
    fn default() -> Self {
        Self {
            rotate: 50.0,
            stretch: 0.0,
            depth: 100.0,
            scale: 0.85,
        }
    }
}

/// A 3-D transform for one slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    /// `None` for the centered slide, which is drawn without perspective
    pub perspective_px: Option<f32>,
    pub rotate_y_deg: f32,
    pub translate_x_px: f32,
    pub translate_z_px: f32,
    pub scale: f32,
}

impl Transform3D {
    pub const IDENTITY: Transform3D = Transform3D {
        perspective_px: None,
        rotate_y_deg: 0.0,
        translate_x_px: 0.0,
        translate_z_px: 0.0,
        scale: 1.0,
    };

    /// Render as a CSS transform list
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transform3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.perspective_px {
            None => write!(f, "translateZ({}px) scale({})", self.translate_z_px, self.scale),
            Some(perspective) => {
                write!(f, "perspective({}px) rotateY({}deg) ", perspective, self.rotate_y_deg)?;
                if self.translate_x_px != 0.0 {
                    write!(f, "translateX({}px) ", self.translate_x_px)?;
                }
                write!(f, "translateZ({}px) scale({})", self.translate_z_px, self.scale)
            }
        }
    }
}

/// Derived visual attributes of a single slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisual {
    /// Not clamped: coverflow slides far from the center go negative
    pub opacity: f32,
    pub transform: Option<Transform3D>,
    pub stack_order: Option<i32>,
}

impl ItemVisual {
    pub const PLAIN: ItemVisual = ItemVisual {
        opacity: 1.0,
        transform: None,
        stack_order: None,
    };
}

/// Compute the visual state of `item_index` while `active_index` is active.
///
/// Coverflow only applies to the extended variant with centered slides;
/// otherwise it falls back to the plain style.
pub fn visual_state_of(
    item_index: usize,
    active_index: usize,
    visible_count: usize,
    transition: TransitionKind,
    coverflow: Option<&CoverflowParams>,
) -> ItemVisual {
    let distance = item_index as i64 - active_index as i64;
    let abs_distance = distance.unsigned_abs();

    match transition {
        TransitionKind::Slide => ItemVisual::PLAIN,
        TransitionKind::Fade => {
            let visible = abs_distance < visible_count.max(1) as u64;
            ItemVisual {
                opacity: if visible { 1.0 } else { 0.0 },
                ..ItemVisual::PLAIN
            }
        }
        TransitionKind::Coverflow => match coverflow {
            Some(params) => coverflow_visual(distance, params),
            None => ItemVisual::PLAIN,
        },
    }
}

fn coverflow_visual(distance: i64, params: &CoverflowParams) -> ItemVisual {
    if distance == 0 {
        return ItemVisual {
            opacity: 1.0,
            transform: Some(Transform3D::IDENTITY),
            stack_order: Some(COVERFLOW_TOP_STACK),
        };
    }

    let abs_distance = distance.unsigned_abs() as f32;
    let stack_depth = i32::try_from(distance.unsigned_abs()).unwrap_or(i32::MAX);
    let rotate_y_deg = if distance > 0 { params.rotate } else { -params.rotate };

    ItemVisual {
        opacity: 1.0 - abs_distance * COVERFLOW_OPACITY_FALLOFF,
        transform: Some(Transform3D {
            perspective_px: Some(COVERFLOW_PERSPECTIVE_PX),
            rotate_y_deg,
            translate_x_px: -(distance as f32) * params.stretch,
            translate_z_px: -abs_distance * params.depth,
            scale: params.scale.powi(abs_distance as i32),
        }),
        stack_order: Some(COVERFLOW_TOP_STACK.saturating_sub(stack_depth)),
    }
}

/// Horizontal container offset, in percent of the container width.
///
/// Only the slide transition translates the container. The two variants
/// keep their own formulas: the basic one divides the index before scaling,
/// the extended one scales the raw index.
pub fn container_offset_percent(
    variant: Variant,
    active_index: usize,
    visible_count: usize,
    transition: TransitionKind,
) -> Option<f64> {
    if transition != TransitionKind::Slide {
        return None;
    }

    let active = active_index as f64;
    let visible = visible_count.max(1) as f64;
    let offset = match variant {
        Variant::Basic => (active / visible) * 100.0,
        Variant::Extended => active * (100.0 / visible),
    };
    Some(-offset)
}

/// Width of each slide in percent of the container
pub fn item_width_percent(visible_count: usize) -> f32 {
    100.0 / visible_count.max(1) as f32
}

/// Property animated by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionProperty {
    Transform,
    Opacity,
    All,
}

/// Timing curve of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Ease,
    EaseOut,
}

/// Transition descriptor handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub property: TransitionProperty,
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(property: TransitionProperty, millis: u64, easing: Easing) -> Self {
        Self {
            property,
            duration: Duration::from_millis(millis),
            easing,
        }
    }

    /// Eased progress in `0.0..=1.0` after `elapsed`
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        match self.easing {
            Easing::Ease => t * t * (3.0 - 2.0 * t),
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Container-level layout for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerLayout {
    pub offset_percent: Option<f64>,
    pub transition: Option<Transition>,
    pub gap_px: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_items_are_opaque() {
        for i in 0..5 {
            let visual = visual_state_of(i, 2, 1, TransitionKind::Slide, None);
            assert_eq!(visual, ItemVisual::PLAIN);
        }
    }

    #[test]
    fn test_fade_shows_window_around_active() {
        let opacity = |i| visual_state_of(i, 4, 2, TransitionKind::Fade, None).opacity;
        assert_eq!(opacity(2), 0.0);
        assert_eq!(opacity(3), 1.0);
        assert_eq!(opacity(4), 1.0);
        assert_eq!(opacity(5), 1.0);
        assert_eq!(opacity(6), 0.0);
    }

    #[test]
    fn test_coverflow_center_is_identity() {
        let params = CoverflowParams { scale: 0.3, ..CoverflowParams::default() };
        let visual = visual_state_of(3, 3, 1, TransitionKind::Coverflow, Some(&params));
        assert_eq!(visual.opacity, 1.0);
        assert_eq!(visual.stack_order, Some(10));
        let transform = visual.transform.unwrap();
        assert_eq!(transform.scale, 1.0);
        assert_eq!(transform.to_css(), "translateZ(0px) scale(1)");
    }

    #[test]
    fn test_coverflow_neighbours() {
        let params = CoverflowParams::default();
        let right = visual_state_of(3, 2, 1, TransitionKind::Coverflow, Some(&params));
        let transform = right.transform.unwrap();
        assert_eq!(transform.rotate_y_deg, 50.0);
        assert_eq!(transform.translate_z_px, -100.0);
        assert_eq!(transform.scale, 0.85);
        assert!((right.opacity - 0.7).abs() < 1e-6);
        assert_eq!(right.stack_order, Some(9));
        assert_eq!(
            transform.to_css(),
            "perspective(1200px) rotateY(50deg) translateZ(-100px) scale(0.85)"
        );

        let left = visual_state_of(0, 2, 1, TransitionKind::Coverflow, Some(&params));
        let transform = left.transform.unwrap();
        assert_eq!(transform.rotate_y_deg, -50.0);
        assert_eq!(transform.translate_z_px, -200.0);
        assert!((transform.scale - 0.85 * 0.85).abs() < 1e-6);
        assert_eq!(left.stack_order, Some(8));
    }

    #[test]
    fn test_coverflow_opacity_goes_negative_far_from_center() {
        // Four slides away the falloff passes zero and is reported as-is.
        let params = CoverflowParams::default();
        let far = visual_state_of(4, 0, 1, TransitionKind::Coverflow, Some(&params));
        assert!(far.opacity < 0.0);
        assert!((far.opacity + 0.2).abs() < 1e-6);
        assert_eq!(far.stack_order, Some(6));
    }

    #[test]
    fn test_coverflow_stretch_pulls_towards_center() {
        let params = CoverflowParams { stretch: 20.0, ..CoverflowParams::default() };
        let visual = visual_state_of(2, 0, 1, TransitionKind::Coverflow, Some(&params));
        assert_eq!(visual.transform.unwrap().translate_x_px, -40.0);
    }

    #[test]
    fn test_coverflow_without_centering_is_plain() {
        let visual = visual_state_of(1, 0, 1, TransitionKind::Coverflow, None);
        assert_eq!(visual, ItemVisual::PLAIN);
    }

    #[test]
    fn test_container_offset_formulas_per_variant() {
        let basic = container_offset_percent(Variant::Basic, 1, 3, TransitionKind::Slide).unwrap();
        let extended = container_offset_percent(Variant::Extended, 1, 3, TransitionKind::Slide).unwrap();
        assert_eq!(basic, -((1.0 / 3.0) * 100.0));
        assert_eq!(extended, -(1.0 * (100.0 / 3.0)));

        assert_eq!(container_offset_percent(Variant::Basic, 6, 3, TransitionKind::Slide), Some(-200.0));
        assert_eq!(container_offset_percent(Variant::Basic, 2, 1, TransitionKind::Fade), None);
        assert_eq!(container_offset_percent(Variant::Extended, 2, 1, TransitionKind::Coverflow), None);
    }

    #[test]
    fn test_transition_progress_is_bounded() {
        let transition = Transition::new(TransitionProperty::Transform, 500, Easing::Ease);
        assert_eq!(transition.progress(Duration::ZERO), 0.0);
        assert_eq!(transition.progress(Duration::from_millis(500)), 1.0);
        assert_eq!(transition.progress(Duration::from_secs(3)), 1.0);
        let half = transition.progress(Duration::from_millis(250));
        assert!(half > 0.0 && half < 1.0);
    }
}
