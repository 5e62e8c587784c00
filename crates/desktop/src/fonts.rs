//! Icon font and text scaling for the desktop window

use eframe::egui;

use crate::config::Config;

/// egui's default body text size
const BASE_BODY_SIZE: f32 = 14.0;

/// Factor applied to every text style for a configured body size
pub fn text_scale(font_size: f32) -> f32 {
    if !font_size.is_finite() || font_size <= 0.0 {
        return 1.0;
    }
    (font_size / BASE_BODY_SIZE).clamp(0.75, 2.0)
}

/// Install phosphor icons (sort carets, nav icons) and scale text to `font_size`
pub fn apply_font_settings(ctx: &egui::Context, config: &Config) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let scale = text_scale(config.font_size);
    ctx.style_mut(|style| {
        for font_id in style.text_styles.values_mut() {
            font_id.size *= scale;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_scale() {
        assert_eq!(text_scale(14.0), 1.0);
        assert_eq!(text_scale(21.0), 1.5);
        assert_eq!(text_scale(100.0), 2.0);
        assert_eq!(text_scale(0.0), 1.0);
        assert_eq!(text_scale(f32::NAN), 1.0);
    }
}
