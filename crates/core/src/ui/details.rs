//! Certificate preview and student/staff detail pages

use egui::{RichText, Ui};
use egui_phosphor::regular;

use super::lists::date_cell;
use super::table::{sortable_table, TableColumn};
use super::{error_label, status_badge, Action};
use crate::constants::CERTIFICATE_CATEGORIES;
use crate::models::{CertificateStatus, Student, StudentColumn};
use crate::pages::{CertificatePage, Outcome, StaffDetailPage, StudentDetailPage};

fn info_grid(ui: &mut Ui, id: &str, rows: &[(&str, String)]) {
    egui::Grid::new(id).num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
        for (label, value) in rows {
            ui.label(RichText::new(*label).weak());
            ui.label(value);
            ui.end_row();
        }
    });
}

pub(crate) fn render_certificate(ui: &mut Ui, page: &mut CertificatePage) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button(format!("{} Back", regular::ARROW_LEFT)).clicked() {
            action = Some(Outcome::Back.into());
        }
        ui.heading(&page.certificate.title);
        status_badge(ui, page.certificate.status);
    });
    ui.separator();

    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .corner_radius(4.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_min_height(160.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(regular::FILE_PDF).size(48.0));
                ui.label(RichText::new(&page.certificate.file).weak());
                if ui.button(format!("{} Download", regular::DOWNLOAD_SIMPLE)).clicked() {
                    page.download();
                }
            });
        });
    ui.add_space(12.0);

    match page.edit.as_mut() {
        Some(edit) => {
            let mut save = false;
            let mut cancel = false;
            egui::Grid::new("certificate_edit").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("Title");
                ui.text_edit_singleline(&mut edit.title);
                ui.end_row();
                ui.label("Category");
                egui::ComboBox::from_id_salt("certificate_category")
                    .selected_text(edit.category.clone())
                    .show_ui(ui, |ui| {
                        for category in CERTIFICATE_CATEGORIES {
                            ui.selectable_value(&mut edit.category, category.to_string(), category);
                        }
                    });
                ui.end_row();
                ui.label("Points");
                ui.add(egui::TextEdit::singleline(&mut edit.points).desired_width(80.0));
                ui.end_row();
            });
            error_label(ui, &page.error);
            ui.horizontal(|ui| {
                save = ui.button(format!("{} Save Changes", regular::FLOPPY_DISK)).clicked();
                cancel = ui.button("Cancel").clicked();
            });
            if save {
                page.save_changes();
            } else if cancel {
                page.cancel_manual_entry();
            }
        }
        None => {
            let cert = &page.certificate;
            info_grid(
                ui,
                "certificate_info",
                &[
                    ("Student", cert.student_name.clone()),
                    ("Category", cert.category.clone()),
                    ("Points", cert.points.to_string()),
                    ("Uploaded", cert.upload_date.clone()),
                ],
            );
            ui.add_space(12.0);

            if page.can_review() {
                ui.horizontal(|ui| {
                    if ui.button(format!("{} Accept", regular::CHECK)).clicked() {
                        action = Some(page.accept().into());
                    }
                    if ui.button(format!("{} Reject", regular::X)).clicked() {
                        action = Some(page.reject().into());
                    }
                    let flagged = page.certificate.status == CertificateStatus::Flagged;
                    if ui.add_enabled(!flagged, egui::Button::new(format!("{} Flag as Incorrect", regular::FLAG))).clicked() {
                        page.flag_incorrect();
                    }
                    if ui.button(format!("{} Manual Entry", regular::PENCIL_SIMPLE)).clicked() {
                        page.start_manual_entry();
                    }
                });
            }
        }
    }
    action
}

pub(crate) fn render_student_detail(ui: &mut Ui, page: &mut StudentDetailPage) -> Option<Action> {
    let mut action = None;
    let s = &page.student;
    ui.horizontal(|ui| {
        if ui.button(format!("{} Back", regular::ARROW_LEFT)).clicked() {
            action = Some(Outcome::Back.into());
        }
        ui.heading(&s.name);
    });
    ui.separator();
    info_grid(
        ui,
        "student_info",
        &[
            ("Register No", s.register_no.clone()),
            ("Department", s.department.clone()),
            ("Certificates", s.total_certificates.to_string()),
            ("Total Points", s.total_points.to_string()),
            ("Last Upload", s.last_upload.clone()),
            ("Assigned Staff", s.assigned_staff.clone().unwrap_or_else(|| "Unassigned".to_string())),
        ],
    );
    ui.add_space(16.0);

    if let Some(certs_action) = super::lists::render_certificate_list(ui, "Certificates", &mut page.certificates) {
        action = Some(certs_action);
    }
    action
}

pub(crate) fn render_staff_detail(ui: &mut Ui, page: &mut StaffDetailPage) -> Option<Action> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button(format!("{} Back", regular::ARROW_LEFT)).clicked() {
            action = Some(Outcome::Back.into());
        }
        ui.heading(&page.staff.name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{} Edit", regular::PENCIL_SIMPLE)).clicked() {
                action = Some(page.edit().into());
            }
        });
    });
    ui.separator();
    let st = &page.staff;
    info_grid(
        ui,
        "staff_info",
        &[
            ("Email", st.email.clone()),
            ("Department", st.department.clone()),
            ("Assigned Students", st.assigned_students.to_string()),
            ("Total Student Points", st.total_student_points.to_string()),
            ("Last Active", st.last_active.clone()),
        ],
    );
    ui.add_space(16.0);

    ui.heading("Assigned Students");
    ui.separator();
    if page.students.is_empty() {
        ui.label("No students assigned.");
        return action;
    }
    let columns = [
        TableColumn::sorted("Name", StudentColumn::Name, 180.0),
        TableColumn::sorted("Register No", StudentColumn::RegisterNo, 120.0),
        TableColumn::sorted("Points", StudentColumn::TotalPoints, 80.0),
        TableColumn::sorted("Last Upload", StudentColumn::LastUpload, 100.0),
        TableColumn::plain("", 60.0),
    ];
    let mut open = None;
    sortable_table(ui, "staff_students_table", &mut page.students, &columns, |ui, col, s: &Student| match col {
        0 => {
            ui.label(RichText::new(&s.name).strong());
        }
        1 => {
            ui.label(&s.register_no);
        }
        2 => {
            ui.label(s.total_points.to_string());
        }
        3 => date_cell(ui, &s.last_upload),
        _ => {
            if ui.small_button(regular::EYE).on_hover_text("View").clicked() {
                open = Some(s.id.clone());
            }
        }
    });
    if let Some(id) = open {
        action = Some(page.view_student(&id).into());
    }
    action
}
