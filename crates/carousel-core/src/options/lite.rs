//! Options of the Lite carousel

use super::SlideOptions;
use crate::autoplay::AutoplaySettings;
use crate::frame::{SlideFrame, SlideVisual};
use crate::navigation::{NavigationContext, NavigatorConfig, Variant, WrapMode};
use crate::pagination::MarkerState;
use crate::responsive::VisibleCountSpec;
use crate::visual::{
    container_offset_percent, item_width_percent, visual_state_of, ContainerLayout, Easing,
    Transition, TransitionKind, TransitionProperty,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SLIDE_TRANSITION: Transition = Transition::new(TransitionProperty::Transform, 500, Easing::Ease);
const FADE_TRANSITION: Transition = Transition::new(TransitionProperty::Opacity, 600, Easing::Ease);

/// Transitions the Lite carousel supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteMode {
    #[default]
    Slide,
    Fade,
}

impl From<LiteMode> for TransitionKind {
    fn from(mode: LiteMode) -> Self {
        match mode {
            LiteMode::Slide => TransitionKind::Slide,
            LiteMode::Fade => TransitionKind::Fade,
        }
    }
}

/// Lite carousel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiteCarouselOptions {
    /// Slides shown at once, fixed or keyed by viewport width
    pub slides_to_show: VisibleCountSpec,

    pub autoplay: bool,

    /// Autoplay interval in milliseconds
    pub autoplay_interval: u64,

    /// Wrap around at either end
    pub infinite: bool,

    pub mode: LiteMode,

    pub show_dots: bool,

    pub show_arrows: bool,

    pub pause_on_hover: bool,
}

impl Default for LiteCarouselOptions {
    fn default() -> Self {
        Self {
            slides_to_show: VisibleCountSpec::default(),
            autoplay: false,
            autoplay_interval: 3000,
            infinite: true,
            mode: LiteMode::Slide,
            show_dots: true,
            show_arrows: true,
            pause_on_hover: true,
        }
    }
}

impl SlideOptions for LiteCarouselOptions {
    fn widget_name(&self) -> &'static str {
        "lite-carousel"
    }

    fn navigator_config(&self, item_count: usize, viewport_width: u32) -> NavigatorConfig {
        NavigatorConfig::new(
            item_count,
            self.slides_to_show.resolve(viewport_width),
            WrapMode::from_looping(self.infinite),
            Variant::Basic,
        )
    }

    fn autoplay_settings(&self) -> AutoplaySettings {
        AutoplaySettings {
            enabled: self.autoplay,
            interval: Duration::from_millis(self.autoplay_interval.max(1)),
            pause_on_hover: self.pause_on_hover,
            disable_on_interaction: false,
        }
    }

    fn frame(&self, context: &NavigationContext) -> SlideFrame {
        let config = &context.config;
        let transition = TransitionKind::from(self.mode);
        let width = item_width_percent(config.visible_count);

        let items = (0..config.item_count)
            .map(|index| SlideVisual {
                index,
                width_percent: Some(width),
                visual: visual_state_of(index, context.active_index, config.visible_count, transition, None),
            })
            .collect();

        SlideFrame {
            container: ContainerLayout {
                offset_percent: container_offset_percent(
                    Variant::Basic,
                    context.active_index,
                    config.visible_count,
                    transition,
                ),
                transition: (self.mode == LiteMode::Slide).then_some(SLIDE_TRANSITION),
                gap_px: 0.0,
            },
            item_transition: (self.mode == LiteMode::Fade).then_some(FADE_TRANSITION),
            items,
            markers: self.show_dots.then(|| MarkerState::new(config, context.active_index)),
            controls: self.show_arrows.then(|| context.controls()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::SlideNavigator;
    use crate::navigation::NavigationSource;
    use std::collections::BTreeMap;

    #[test]
    fn test_defaults_match_widget_props() {
        let options = LiteCarouselOptions::default();
        assert_eq!(options.slides_to_show, VisibleCountSpec::Fixed(1));
        assert_eq!(options.autoplay_interval, 3000);
        assert!(options.infinite && options.show_dots && options.show_arrows && options.pause_on_hover);
        assert!(!options.autoplay);

        let parsed: LiteCarouselOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_deserialize_camel_case_document() {
        let options: LiteCarouselOptions = serde_json::from_str(
            r#"{
                "slidesToShow": {"0": 1, "640": 2, "1024": 3},
                "autoplay": true,
                "autoplayInterval": 5000,
                "infinite": false,
                "mode": "fade",
                "pauseOnHover": false
            }"#,
        )
        .unwrap();

        assert_eq!(
            options.slides_to_show,
            VisibleCountSpec::Breakpoints(BTreeMap::from([(0, 1), (640, 2), (1024, 3)]))
        );
        assert_eq!(options.mode, LiteMode::Fade);
        let settings = options.autoplay_settings();
        assert!(settings.enabled && !settings.pause_on_hover);
        assert_eq!(settings.interval, Duration::from_millis(5000));
    }

    #[test]
    fn test_navigator_config_pages_by_visible_count() {
        let options = LiteCarouselOptions {
            slides_to_show: VisibleCountSpec::Breakpoints(BTreeMap::from([(0, 1), (640, 2), (1024, 3)])),
            ..LiteCarouselOptions::default()
        };
        let config = options.navigator_config(10, 800);
        assert_eq!(config.visible_count, 2);
        assert_eq!(config.step, 2);
        assert_eq!(config.wrap_mode, WrapMode::Infinite);
        assert_eq!(config.variant, Variant::Basic);
    }

    #[test]
    fn test_slide_frame() {
        let options = LiteCarouselOptions {
            slides_to_show: VisibleCountSpec::Fixed(3),
            ..LiteCarouselOptions::default()
        };
        let nav = SlideNavigator::new(options.navigator_config(10, 1024));
        nav.advance(NavigationSource::Pointer);

        let frame = options.frame(&nav.context());
        assert_eq!(frame.items.len(), 10);
        assert_eq!(frame.container.offset_percent, Some(-100.0));
        assert_eq!(frame.container.transition, Some(SLIDE_TRANSITION));
        assert_eq!(frame.item_transition, None);
        assert_eq!(frame.markers, Some(MarkerState { count: 4, active: Some(1) }));
        assert!(frame.items.iter().all(|item| item.visual.opacity == 1.0));
        let width = frame.items[0].width_percent.unwrap();
        assert!((width - 100.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_fade_frame_hides_distant_slides() {
        let options = LiteCarouselOptions {
            mode: LiteMode::Fade,
            show_dots: false,
            show_arrows: false,
            ..LiteCarouselOptions::default()
        };
        let nav = SlideNavigator::new(options.navigator_config(4, 1024));
        nav.go_to(2, NavigationSource::Pointer);

        let frame = options.frame(&nav.context());
        let opacities: Vec<f32> = frame.items.iter().map(|item| item.visual.opacity).collect();
        assert_eq!(opacities, vec![0.0, 0.0, 1.0, 0.0]);
        assert_eq!(frame.container.offset_percent, None);
        assert_eq!(frame.item_transition, Some(FADE_TRANSITION));
        assert!(frame.markers.is_none());
        assert!(frame.controls.is_none());
    }
}
