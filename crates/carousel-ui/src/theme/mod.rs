use egui::Color32;

/// Colors used to draw carousel chrome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTheme {
    /// Fill behind the slides, also used to fade slides out
    pub backdrop: Color32,
    pub arrow_fill: Color32,
    pub arrow_hover: Color32,
    pub arrow_disabled: Color32,
    pub arrow_glyph: Color32,
    pub marker_active: Color32,
    pub marker_inactive: Color32,
}

impl Default for CarouselTheme {
    fn default() -> Self {
        Self {
            backdrop: Color32::from_rgb(23, 23, 23),
            arrow_fill: Color32::from_black_alpha(153),
            arrow_hover: Color32::from_black_alpha(204),
            arrow_disabled: Color32::from_black_alpha(60),
            arrow_glyph: Color32::WHITE,
            marker_active: Color32::WHITE,
            marker_inactive: Color32::from_white_alpha(128),
        }
    }
}

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 150, 250)
}

/// Palette for demo slides, cycled by index
pub fn slide_color(index: usize) -> Color32 {
    const PALETTE: [Color32; 6] = [
        Color32::from_rgb(100, 150, 250),
        Color32::from_rgb(230, 80, 80),
        Color32::from_rgb(230, 180, 80),
        Color32::from_rgb(80, 200, 120),
        Color32::from_rgb(170, 110, 230),
        Color32::from_rgb(60, 190, 200),
    ];
    PALETTE[index % PALETTE.len()]
}
