//! Loading screen shown while a route transition is pending

use egui::RichText;

use crate::constants::APP_TITLE;

pub fn render_loading(ctx: &egui::Context, progress: f32) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(RichText::new(APP_TITLE).heading().strong());
            ui.add_space(12.0);
            ui.spinner();
            ui.add_space(12.0);
            ui.add(egui::ProgressBar::new(progress).desired_width(240.0).animate(progress < 1.0));
        });
    });
}
