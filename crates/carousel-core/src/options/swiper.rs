//! Options of the Swiper

use super::SlideOptions;
use crate::autoplay::{AutoplaySettings, DEFAULT_AUTOPLAY_INTERVAL};
use crate::frame::{SlideFrame, SlideVisual};
use crate::navigation::{NavigationContext, NavigatorConfig, Variant, WrapMode};
use crate::pagination::MarkerState;
use crate::responsive::SlidesPerView;
use crate::visual::{
    container_offset_percent, item_width_percent, visual_state_of, ContainerLayout, CoverflowParams,
    Easing, Transition, TransitionKind, TransitionProperty,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const CONTAINER_TRANSITION: Transition = Transition::new(TransitionProperty::Transform, 600, Easing::EaseOut);
const ITEM_TRANSITION: Transition = Transition::new(TransitionProperty::All, 600, Easing::Ease);

/// Object form of the `autoplay` option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoplayParams {
    /// Delay between slides in milliseconds
    pub delay: Option<u64>,
    pub disable_on_interaction: bool,
}

/// `autoplay` accepts either a flag or a parameter object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AutoplayOption {
    Toggle(bool),
    Custom(AutoplayParams),
}

impl Default for AutoplayOption {
    fn default() -> Self {
        AutoplayOption::Toggle(false)
    }
}

impl AutoplayOption {
    pub fn is_enabled(&self) -> bool {
        match self {
            AutoplayOption::Toggle(enabled) => *enabled,
            AutoplayOption::Custom(_) => true,
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            AutoplayOption::Custom(AutoplayParams { delay: Some(ms), .. }) => {
                Duration::from_millis((*ms).max(1))
            }
            _ => DEFAULT_AUTOPLAY_INTERVAL,
        }
    }

    pub fn disable_on_interaction(&self) -> bool {
        matches!(self, AutoplayOption::Custom(params) if params.disable_on_interaction)
    }
}

/// Swiper configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwiperOptions {
    pub slides_per_view: SlidesPerView,

    /// Gap between slides in px
    pub space_between: f32,

    /// Required for the coverflow layout
    pub centered_slides: bool,

    #[serde(rename = "loop")]
    pub looping: bool,

    pub autoplay: AutoplayOption,

    pub effect: TransitionKind,

    /// Missing fields keep their defaults
    pub coverflow: CoverflowParams,

    pub pagination: bool,

    pub navigation: bool,
}

impl Default for SwiperOptions {
    fn default() -> Self {
        Self {
            slides_per_view: SlidesPerView::default(),
            space_between: 0.0,
            centered_slides: false,
            looping: false,
            autoplay: AutoplayOption::default(),
            effect: TransitionKind::Slide,
            coverflow: CoverflowParams::default(),
            pagination: true,
            navigation: true,
        }
    }
}

impl SwiperOptions {
    /// Whether the 3-D coverflow layout is active
    pub fn uses_coverflow(&self) -> bool {
        self.effect == TransitionKind::Coverflow && self.centered_slides
    }
}

impl SlideOptions for SwiperOptions {
    fn widget_name(&self) -> &'static str {
        "swiper"
    }

    fn navigator_config(&self, item_count: usize, _viewport_width: u32) -> NavigatorConfig {
        NavigatorConfig::new(
            item_count,
            self.slides_per_view.resolve(item_count),
            WrapMode::from_looping(self.looping),
            Variant::Extended,
        )
    }

    fn autoplay_settings(&self) -> AutoplaySettings {
        AutoplaySettings {
            enabled: self.autoplay.is_enabled(),
            interval: self.autoplay.delay(),
            pause_on_hover: false,
            disable_on_interaction: self.autoplay.disable_on_interaction(),
        }
    }

    fn frame(&self, context: &NavigationContext) -> SlideFrame {
        let config = &context.config;
        let coverflow = self.uses_coverflow().then_some(&self.coverflow);
        let width = (!self.slides_per_view.is_auto()).then(|| item_width_percent(config.visible_count));

        let items = (0..config.item_count)
            .map(|index| SlideVisual {
                index,
                width_percent: width,
                visual: visual_state_of(index, context.active_index, config.visible_count, self.effect, coverflow),
            })
            .collect();

        SlideFrame {
            container: ContainerLayout {
                offset_percent: container_offset_percent(
                    Variant::Extended,
                    context.active_index,
                    config.visible_count,
                    self.effect,
                ),
                transition: Some(CONTAINER_TRANSITION),
                gap_px: self.space_between,
            },
            item_transition: Some(ITEM_TRANSITION),
            items,
            markers: self.pagination.then(|| MarkerState::new(config, context.active_index)),
            controls: self.navigation.then(|| context.controls()),
        }
    }
}
