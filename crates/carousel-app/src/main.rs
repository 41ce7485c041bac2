//! Demo application hosting both carousel widgets

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, Color32, Context, RichText, Ui};
use tracing::info;

use carousel_core::{KeyboardRouter, SlideOptions, TransitionKind};
use carousel_ui::theme::{accent_color, slide_color};
use carousel_ui::{LiteCarousel, Swiper};

mod demo;

use demo::{DemoOptions, SlideLogger};

/// Main application state
struct CarouselDemoApp {
    /// Global input scope shared by every mounted carousel
    router: KeyboardRouter,

    lite: LiteCarousel,

    swiper: Swiper,

    /// Kept alive so the navigators' weak handles stay valid
    _loggers: Vec<Arc<SlideLogger>>,

    slide_count: usize,
}

impl CarouselDemoApp {
    fn new(options: DemoOptions) -> Self {
        let router = KeyboardRouter::new();
        let lite = LiteCarousel::new(options.lite, &router).with_height(220.0);
        let swiper = Swiper::new(options.swiper, &router).with_height(260.0);

        let loggers = vec![
            Arc::new(SlideLogger { name: "lite" }),
            Arc::new(SlideLogger { name: "swiper" }),
        ];
        lite.navigator().add_subscriber(loggers[0].clone());
        swiper.navigator().add_subscriber(loggers[1].clone());

        Self {
            router,
            lite,
            swiper,
            _loggers: loggers,
            slide_count: options.slide_count,
        }
    }

    fn show_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Slides:");
            ui.add(egui::DragValue::new(&mut self.slide_count).clamp_range(0..=40));

            ui.separator();

            ui.label("Swiper effect:");
            let mut options = self.swiper.options().clone();
            let before = options.effect;
            for (effect, label) in [
                (TransitionKind::Slide, "Slide"),
                (TransitionKind::Fade, "Fade"),
                (TransitionKind::Coverflow, "Coverflow"),
            ] {
                ui.selectable_value(&mut options.effect, effect, label);
            }
            if options.effect != before {
                info!(effect = ?options.effect, "swiper effect changed");
                self.swiper.set_options(options);
            }
        });
    }
}

fn demo_slide(ui: &mut Ui, index: usize) {
    let rect = ui.max_rect().shrink(6.0);
    ui.painter().rect_filled(rect, egui::Rounding::same(8.0), slide_color(index));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("Slide {}", index + 1),
        egui::FontId::proportional(22.0),
        Color32::WHITE,
    );
}

impl eframe::App for CarouselDemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Arrow keys go to every mounted carousel
        carousel_ui::forward_keys(ctx, &self.router);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_controls(ui);
            ui.add_space(12.0);

            ui.label(RichText::new(self.lite.options().widget_name()).color(accent_color()).strong());
            self.lite.show(ui, self.slide_count, demo_slide);
            ui.add_space(16.0);

            ui.label(RichText::new(self.swiper.options().widget_name()).color(accent_color()).strong());
            self.swiper.show(ui, self.slide_count, demo_slide);
        });
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let options = DemoOptions::load(path.as_deref())?;

    info!(slides = options.slide_count, "Starting carousel demo");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 480.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Carousel demo",
        native_options,
        Box::new(move |_cc| Box::new(CarouselDemoApp::new(options))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
