//! egui carousel widget
//!
//! One generic widget serves both option records: [`LiteCarousel`] and
//! [`Swiper`] differ only in the options they resolve frames from.

use crate::theme::CarouselTheme;
use carousel_core::pagination::marker_target;
use carousel_core::{
    AutoplayDriver, CarouselId, KeyListener, KeyboardRouter, LiteCarouselOptions,
    NavigationSource, SlideFrame, SlideNavigator, SlideOptions, SlideVisual, SwiperOptions,
    Transform3D,
};
use egui::{vec2, Align2, Color32, FontId, Id, Layout, Pos2, Rect, Response, Rounding, Sense, Ui, Vec2};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Carousel with paging, breakpoints, slide/fade and hover pause
pub type LiteCarousel = Carousel<LiteCarouselOptions>;

/// Carousel with single-slide steps, coverflow and looping
pub type Swiper = Carousel<SwiperOptions>;

const ARROW_SIZE: f32 = 40.0;
const ARROW_MARGIN: f32 = 16.0;
const MARKER_SIZE: f32 = 8.0;
const ACTIVE_MARKER_WIDTH: f32 = 28.0;
const MARKER_GAP: f32 = 8.0;
const MARKER_MARGIN: f32 = 16.0;

/// A mounted carousel instance.
///
/// Owns its navigator, autoplay timer and keyboard registration. Dropping
/// the widget cancels the timer and removes the key listener.
pub struct Carousel<O: SlideOptions> {
    id: CarouselId,
    options: O,
    navigator: Arc<SlideNavigator>,
    autoplay: AutoplayDriver,
    _key_listener: KeyListener,
    theme: CarouselTheme,
    height: f32,
    viewport_width: Option<u32>,
    item_count: usize,
    hovered: bool,
}

impl<O: SlideOptions> Carousel<O> {
    /// Mount a carousel and register it with the global key router
    pub fn new(options: O, router: &KeyboardRouter) -> Self {
        let id = CarouselId::new_v4();
        let navigator = Arc::new(SlideNavigator::new(options.navigator_config(0, 0)));
        let autoplay = AutoplayDriver::new(options.autoplay_settings());
        let key_listener = router.register(id, &navigator);

        info!(%id, widget = options.widget_name(), "carousel mounted");

        Self {
            id,
            options,
            navigator,
            autoplay,
            _key_listener: key_listener,
            theme: CarouselTheme::default(),
            height: 240.0,
            viewport_width: None,
            item_count: 0,
            hovered: false,
        }
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_theme(mut self, theme: CarouselTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn id(&self) -> CarouselId {
        self.id
    }

    pub fn navigator(&self) -> &Arc<SlideNavigator> {
        &self.navigator
    }

    pub fn options(&self) -> &O {
        &self.options
    }

    /// Swap the options; configuration is re-resolved on the next frame
    pub fn set_options(&mut self, options: O) {
        self.autoplay.set_settings(options.autoplay_settings());
        self.options = options;
        self.viewport_width = None;
    }

    /// Draw the carousel. `add_slide` draws slide `index` into the given ui.
    pub fn show(&mut self, ui: &mut Ui, item_count: usize, mut add_slide: impl FnMut(&mut Ui, usize)) -> Response {
        self.sync_config(ui.ctx().screen_rect().width(), item_count);

        let (rect, response) = ui.allocate_exact_size(vec2(ui.available_width(), self.height), Sense::hover());
        self.track_hover(ui.rect_contains_pointer(rect));

        if let Some(wait) = self.autoplay.poll(&self.navigator, Instant::now()) {
            ui.ctx().request_repaint_after(wait);
        }

        let frame = self.options.frame(&self.navigator.context());
        self.paint_slides(ui, rect, &frame, &mut add_slide);

        if let Some(controls) = frame.controls {
            self.show_arrows(ui, rect, controls.can_retreat, controls.can_advance);
        }
        if let Some(markers) = frame.markers {
            self.show_markers(ui, rect, markers.count, markers.active);
        }

        response
    }

    /// Re-resolve the navigator config when the viewport or item count moved
    fn sync_config(&mut self, viewport_width: f32, item_count: usize) {
        let width = viewport_width.max(0.0) as u32;
        if self.viewport_width == Some(width) && self.item_count == item_count {
            return;
        }
        self.viewport_width = Some(width);
        self.item_count = item_count;
        self.navigator.reconfigure(self.options.navigator_config(item_count, width));
    }

    fn track_hover(&mut self, hovered: bool) {
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        if hovered {
            self.autoplay.pointer_entered(&self.navigator);
        } else {
            self.autoplay.pointer_left(&self.navigator);
        }
    }

    fn paint_slides(&self, ui: &mut Ui, rect: Rect, frame: &SlideFrame, add_slide: &mut impl FnMut(&mut Ui, usize)) {
        let ctx = ui.ctx().clone();
        let base = Id::new(self.id);
        let gap = frame.container.gap_px;
        let count = frame.items.len().max(1) as f32;

        let target_offset = frame
            .container
            .offset_percent
            .map(|percent| rect.width() * percent as f32 / 100.0)
            .unwrap_or(0.0);
        let offset = match frame.container.transition {
            Some(transition) => ctx.animate_value_with_time(
                base.with("offset"),
                target_offset,
                transition.duration.as_secs_f32(),
            ),
            None => target_offset,
        };

        ui.painter_at(rect).rect_filled(rect, Rounding::same(6.0), self.theme.backdrop);

        for slide in frame.paint_order() {
            let width = slide
                .width_percent
                .map(|percent| rect.width() * percent / 100.0)
                .unwrap_or_else(|| (rect.width() - gap * (count - 1.0)) / count);
            let left = rect.left() + offset + slide.index as f32 * (width + gap);
            let natural = Rect::from_min_size(Pos2::new(left, rect.top()), vec2(width, rect.height()));
            let slide_rect = match slide.visual.transform {
                Some(transform) => project(natural, &transform),
                None => natural,
            };

            let clip = rect.intersect(slide_rect);
            if !clip.is_positive() {
                continue;
            }

            let opacity = self.slide_opacity(&ctx, base, slide, frame);
            if opacity <= 0.0 {
                continue;
            }

            let mut child = ui.child_ui(slide_rect, Layout::top_down(egui::Align::Center));
            child.set_clip_rect(clip);
            add_slide(&mut child, slide.index);

            if opacity < 1.0 {
                ui.painter_at(clip)
                    .rect_filled(slide_rect, Rounding::ZERO, self.theme.backdrop.linear_multiply(1.0 - opacity));
            }
        }
    }

    fn slide_opacity(&self, ctx: &egui::Context, base: Id, slide: &SlideVisual, frame: &SlideFrame) -> f32 {
        let target = slide.visual.opacity.clamp(0.0, 1.0);
        match frame.item_transition {
            Some(transition) => ctx.animate_value_with_time(
                base.with(("opacity", slide.index)),
                target,
                transition.duration.as_secs_f32(),
            ),
            None => target,
        }
    }

    fn show_arrows(&self, ui: &mut Ui, rect: Rect, can_retreat: bool, can_advance: bool) {
        let size = Vec2::splat(ARROW_SIZE);
        let prev = Rect::from_center_size(
            Pos2::new(rect.left() + ARROW_MARGIN + ARROW_SIZE / 2.0, rect.center().y),
            size,
        );
        let next = Rect::from_center_size(
            Pos2::new(rect.right() - ARROW_MARGIN - ARROW_SIZE / 2.0, rect.center().y),
            size,
        );

        if self.arrow_button(ui, prev, "‹", "Previous", can_retreat).clicked() {
            self.navigator.retreat(NavigationSource::Pointer);
        }
        if self.arrow_button(ui, next, "›", "Next", can_advance).clicked() {
            self.navigator.advance(NavigationSource::Pointer);
        }
    }

    fn arrow_button(&self, ui: &mut Ui, rect: Rect, glyph: &str, label: &str, enabled: bool) -> Response {
        let id = Id::new(self.id).with(label);
        let sense = if enabled { Sense::click() } else { Sense::hover() };
        let response = ui.interact(rect, id, sense);

        let fill = match (enabled, response.hovered()) {
            (false, _) => self.theme.arrow_disabled,
            (true, true) => self.theme.arrow_hover,
            (true, false) => self.theme.arrow_fill,
        };
        let painter = ui.painter();
        painter.circle_filled(rect.center(), ARROW_SIZE / 2.0, fill);
        painter.text(rect.center(), Align2::CENTER_CENTER, glyph, FontId::proportional(24.0), self.theme.arrow_glyph);

        response.on_hover_text(label)
    }

    fn show_markers(&self, ui: &mut Ui, rect: Rect, count: usize, active: Option<usize>) {
        if count == 0 {
            return;
        }

        let active_extra = if active.is_some() { ACTIVE_MARKER_WIDTH - MARKER_SIZE } else { 0.0 };
        let total = count as f32 * MARKER_SIZE + (count - 1) as f32 * MARKER_GAP + active_extra;
        let mut x = rect.center().x - total / 2.0;
        let y = rect.bottom() - MARKER_MARGIN - MARKER_SIZE / 2.0;
        let config = self.navigator.config();

        for marker in 0..count {
            let is_active = active == Some(marker);
            let width = if is_active { ACTIVE_MARKER_WIDTH } else { MARKER_SIZE };
            let dot = Rect::from_min_size(Pos2::new(x, y - MARKER_SIZE / 2.0), vec2(width, MARKER_SIZE));
            x += width + MARKER_GAP;

            let response = ui.interact(dot, Id::new(self.id).with(("marker", marker)), Sense::click());
            let color: Color32 = if is_active || response.hovered() {
                self.theme.marker_active
            } else {
                self.theme.marker_inactive
            };
            ui.painter().rect_filled(dot, Rounding::same(MARKER_SIZE / 2.0), color);

            if response.on_hover_text(format!("Go to slide {}", marker + 1)).clicked() {
                let target = marker_target(marker, config.visible_count, config.variant);
                self.navigator.go_to(target as i64, NavigationSource::Pointer);
            }
        }
    }
}

impl<O: SlideOptions> Drop for Carousel<O> {
    fn drop(&mut self) {
        self.autoplay.cancel();
        info!(id = %self.id, widget = self.options.widget_name(), "carousel torn down");
    }
}

/// Flatten a 3-D slide transform onto the 2-D slide rect
fn project(natural: Rect, transform: &Transform3D) -> Rect {
    let depth_scale = match transform.perspective_px {
        Some(perspective) => perspective / (perspective - transform.translate_z_px).max(1.0),
        None => 1.0,
    };
    let turn = transform.rotate_y_deg.to_radians().cos().abs();
    let scale = (transform.scale * depth_scale).max(0.0);

    let size = vec2(natural.width() * scale * turn, natural.height() * scale);
    let center = natural.center() + vec2(transform.translate_x_px * depth_scale, 0.0);
    Rect::from_center_size(center, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(200.0, 100.0))
    }

    #[test]
    fn test_identity_projection_keeps_rect() {
        assert_eq!(project(natural(), &Transform3D::IDENTITY), natural());
    }

    #[test]
    fn test_receded_slide_shrinks_around_center() {
        let transform = Transform3D {
            perspective_px: Some(1200.0),
            rotate_y_deg: 60.0,
            translate_x_px: 0.0,
            translate_z_px: -1200.0,
            scale: 1.0,
        };
        let projected = project(natural(), &transform);
        assert_eq!(projected.center(), natural().center());
        assert!((projected.height() - 50.0).abs() < 1e-3);
        assert!((projected.width() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_dropping_widget_releases_key_listener() {
        let router = KeyboardRouter::new();
        let carousel = Swiper::new(SwiperOptions::default(), &router);
        assert_eq!(router.listener_count(), 1);
        drop(carousel);
        assert_eq!(router.listener_count(), 0);
    }

    #[test]
    fn test_sync_config_reclamps_on_resize() {
        use carousel_core::VisibleCountSpec;
        use std::collections::BTreeMap;

        let router = KeyboardRouter::new();
        let options = LiteCarouselOptions {
            slides_to_show: VisibleCountSpec::Breakpoints(BTreeMap::from([(0, 1), (640, 2), (1024, 4)])),
            infinite: false,
            ..LiteCarouselOptions::default()
        };
        let mut carousel = LiteCarousel::new(options, &router);

        carousel.sync_config(800.0, 8);
        carousel.navigator().go_to(6, NavigationSource::Pointer);
        assert_eq!(carousel.navigator().active_index(), 6);

        carousel.sync_config(1280.0, 8);
        assert_eq!(carousel.navigator().config().visible_count, 4);
        assert_eq!(carousel.navigator().active_index(), 4);
    }

    #[test]
    fn test_hover_pauses_lite_carousel() {
        let router = KeyboardRouter::new();
        let mut carousel = LiteCarousel::new(LiteCarouselOptions::default(), &router);
        carousel.track_hover(true);
        assert!(carousel.navigator().context().is_paused);
        carousel.track_hover(false);
        assert!(!carousel.navigator().context().is_paused);
    }
}
