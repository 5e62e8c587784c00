//! Landing and sign-in pages

use egui::{RichText, Ui};
use egui_phosphor::regular;

use super::{error_label, Action};
use crate::pages::{LoginPage, Outcome};
use crate::routes::Route;
use crate::session::Role;

pub(crate) fn render_landing(ui: &mut Ui) -> Option<Action> {
    let mut action = None;
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("Track your activity points").size(32.0).strong());
        ui.add_space(8.0);
        ui.label("Upload certificates, follow their review and keep an eye on the points you need to graduate.");
        ui.add_space(24.0);
        ui.horizontal(|ui| {
            if ui.button(format!("{} Get Started", regular::ARROW_RIGHT)).clicked() {
                action = Some(Outcome::Navigate(Route::Login).into());
            }
            if ui.button(format!("{} View Guidelines", regular::FILE_PDF)).clicked() {
                action = Some(Action::Guidelines);
            }
        });
        ui.add_space(48.0);
        ui.columns(3, |cols| {
            feature(&mut cols[0], regular::UPLOAD_SIMPLE, "Easy Upload", "Drop certificate images or PDFs and fill in the details.");
            feature(&mut cols[1], regular::MAGNIFYING_GLASS, "Quick Review", "Staff approve, reject or flag submissions in one place.");
            feature(&mut cols[2], regular::CHART_BAR, "Live Progress", "See your points by category as soon as they are approved.");
        });
    });
    action
}

fn feature(ui: &mut Ui, icon: &str, title: &str, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(icon).size(28.0));
        ui.label(RichText::new(title).strong());
        ui.label(RichText::new(text).weak());
    });
}

pub(crate) fn render_login(ui: &mut Ui, page: &mut LoginPage) -> Option<Action> {
    let mut action = None;
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.set_max_width(360.0);
        let title = if page.admin_only { "Admin Sign In" } else { "Sign In" };
        ui.heading(title);
        ui.add_space(16.0);

        egui::Grid::new("login_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
            if !page.admin_only {
                ui.label("Role");
                ui.horizontal(|ui| {
                    for role in [Role::Student, Role::Staff] {
                        ui.selectable_value(&mut page.form.role, role, role.label());
                    }
                });
                ui.end_row();
            }
            ui.label("Email");
            ui.text_edit_singleline(&mut page.form.email);
            ui.end_row();
            ui.label("Password");
            let response = ui.add(egui::TextEdit::singleline(&mut page.form.password).password(true));
            ui.end_row();
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = page.submit().map(Action::Login);
            }
        });

        ui.add_space(12.0);
        error_label(ui, &page.error);
        if ui.button(format!("{} Sign In", regular::SIGN_IN)).clicked() {
            action = page.submit().map(Action::Login);
        }
        ui.add_space(8.0);
        let other = if page.admin_only { ("Student or staff? Sign in here", Route::Login) } else { ("Administrator sign in", Route::AdminLogin) };
        if ui.link(other.0).clicked() {
            action = Some(Outcome::Navigate(other.1).into());
        }
    });
    action
}
