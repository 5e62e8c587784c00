//! Add/edit forms and the certificate upload page

use egui::{RichText, Ui};
use egui_phosphor::regular;

use super::{error_label, Action};
use crate::constants::{CERTIFICATE_CATEGORIES, DEPARTMENTS};
use crate::forms::FileKind;
use crate::pages::{Outcome, StaffFormPage, StudentFormPage, UploadPage};
use crate::routes::Route;
use crate::session::Role;

fn choice(ui: &mut Ui, id_salt: &str, value: &mut String, options: &[&str], placeholder: &str) {
    let selected = if value.is_empty() { placeholder.to_string() } else { value.clone() };
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(selected)
        .width(280.0)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, option.to_string(), *option);
            }
        });
}

fn save_cancel(ui: &mut Ui, save_label: &str) -> (bool, bool) {
    let mut save = false;
    let mut cancel = false;
    ui.horizontal(|ui| {
        if ui.button(format!("{} {}", regular::FLOPPY_DISK, save_label)).clicked() {
            save = true;
        }
        if ui.button("Cancel").clicked() {
            cancel = true;
        }
    });
    (save, cancel)
}

pub(crate) fn render_student_form(ui: &mut Ui, page: &mut StudentFormPage) -> Option<Action> {
    let title = if page.editing.is_some() { "Edit Student" } else { "Add Student" };
    ui.heading(title);
    ui.separator();

    egui::Grid::new("student_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
        ui.label("Full Name");
        ui.text_edit_singleline(&mut page.form.name);
        ui.end_row();
        ui.label("KTU ID");
        ui.text_edit_singleline(&mut page.form.ktu_id);
        ui.end_row();
        ui.label("Department");
        choice(ui, "student_department", &mut page.form.department, &DEPARTMENTS, "Select department");
        ui.end_row();
    });

    if page.scope == Role::Admin {
        ui.add_space(12.0);
        ui.label(RichText::new("Assign Staff").strong());
        ui.horizontal(|ui| {
            ui.label(regular::MAGNIFYING_GLASS);
            ui.add(egui::TextEdit::singleline(&mut page.form.staff_search).hint_text("Search by name or department"));
        });
        for (id, name, department) in page.form.staff_matches() {
            let selected = page.form.assigned_staff_id == id;
            if ui.selectable_label(selected, format!("{}  ·  {}", name, department)).clicked() {
                page.form.assigned_staff_id = id;
            }
        }
    }

    ui.add_space(12.0);
    error_label(ui, &page.error);
    let (save, cancel) = save_cancel(ui, if page.editing.is_some() { "Save Changes" } else { "Add Student" });
    if save {
        return Some(page.submit().into());
    }
    if cancel {
        return Some(Outcome::Navigate(page.list_route()).into());
    }
    None
}

pub(crate) fn render_staff_form(ui: &mut Ui, page: &mut StaffFormPage) -> Option<Action> {
    let adding = page.editing.is_none();
    ui.heading(if adding { "Add Staff Member" } else { "Edit Staff Member" });
    ui.separator();

    egui::Grid::new("staff_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
        ui.label("Full Name");
        ui.text_edit_singleline(&mut page.form.name);
        ui.end_row();
        ui.label("Email");
        ui.text_edit_singleline(&mut page.form.email);
        ui.end_row();
        ui.label("Department");
        choice(ui, "staff_department", &mut page.form.department, &DEPARTMENTS, "Select department");
        ui.end_row();
        if adding {
            ui.label("Password");
            ui.add(egui::TextEdit::singleline(&mut page.form.password).password(true));
            ui.end_row();
            ui.label("Confirm Password");
            ui.add(egui::TextEdit::singleline(&mut page.form.confirm_password).password(true));
            ui.end_row();
        }
    });

    ui.add_space(12.0);
    error_label(ui, &page.error);
    let (save, cancel) = save_cancel(ui, if adding { "Add Staff" } else { "Save Changes" });
    if save {
        return Some(page.submit().into());
    }
    if cancel {
        return Some(Outcome::Navigate(Route::AdminStaff).into());
    }
    None
}

pub(crate) fn render_upload(ui: &mut Ui, page: &mut UploadPage, dropped: Vec<String>) -> Option<Action> {
    if !dropped.is_empty() {
        page.add_files(dropped.iter().map(String::as_str));
    }

    ui.heading("Upload Certificates");
    ui.label(RichText::new("Drop certificate images or PDFs onto the window, or add them by file name.").weak());
    ui.separator();

    let picker_id = ui.make_persistent_id("upload_file_name");
    let mut file_name: String = ui.data_mut(|d| d.get_temp(picker_id).unwrap_or_default());
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(&mut file_name).hint_text("certificate.pdf"));
        if ui.button(format!("{} Add File", regular::PLUS)).clicked() && !file_name.trim().is_empty() {
            page.add_files([file_name.trim()]);
            file_name.clear();
        }
    });
    ui.data_mut(|d| d.insert_temp(picker_id, file_name));
    ui.add_space(8.0);

    let mut remove = None;
    for (i, entry) in page.form.entries.iter_mut().enumerate() {
        egui::Frame::new()
            .fill(ui.style().visuals.extreme_bg_color)
            .corner_radius(4.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let icon = match entry.kind {
                        FileKind::Pdf => regular::FILE_PDF,
                        FileKind::Image => regular::FILE_IMAGE,
                    };
                    ui.label(RichText::new(format!("{} {}", icon, entry.file_name)).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(regular::X).on_hover_text("Remove").clicked() {
                            remove = Some(i);
                        }
                    });
                });
                egui::Grid::new(("upload_entry", i)).num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
                    ui.label("Title");
                    ui.text_edit_singleline(&mut entry.title);
                    ui.end_row();
                    ui.label("Category");
                    choice(ui, &format!("upload_category_{}", i), &mut entry.category, &CERTIFICATE_CATEGORIES, "Select category");
                    ui.end_row();
                    ui.label("Points");
                    ui.add(egui::TextEdit::singleline(&mut entry.points).desired_width(80.0));
                    ui.end_row();
                });
            });
        ui.add_space(6.0);
    }
    if let Some(i) = remove {
        page.form.remove(i);
    }

    error_label(ui, &page.error);
    if let Some(count) = page.submitted {
        ui.colored_label(
            super::status_color(crate::models::CertificateStatus::Approved),
            format!("{} {} certificate(s) submitted for review", regular::CHECK_CIRCLE, count),
        );
    }
    let can_submit = !page.form.entries.is_empty();
    if ui.add_enabled(can_submit, egui::Button::new(format!("{} Submit", regular::UPLOAD_SIMPLE))).clicked() {
        page.submit();
    }
    None
}
