//! egui widgets for the slide carousels
//!
//! The widgets here only draw; navigation, autoplay and key routing live in
//! `carousel-core`.

pub mod carousel;
pub mod theme;

pub use carousel::{Carousel, LiteCarousel, Swiper};
pub use theme::CarouselTheme;

use carousel_core::{KeyboardRouter, NavKey};

/// Forward this frame's arrow key presses to every mounted carousel.
///
/// Call once per frame from the application, which owns the router.
pub fn forward_keys(ctx: &egui::Context, router: &KeyboardRouter) {
    let pressed: Vec<NavKey> = ctx.input(|i| {
        [
            (egui::Key::ArrowLeft, NavKey::ArrowLeft),
            (egui::Key::ArrowRight, NavKey::ArrowRight),
        ]
        .into_iter()
        .filter(|(key, _)| i.key_pressed(*key))
        .map(|(_, nav_key)| nav_key)
        .collect()
    });

    for key in pressed {
        router.dispatch(key);
    }
}
