//! Sortable list pages

use egui::{RichText, Ui};
use egui_phosphor::regular;

use super::table::{sortable_table, TableColumn};
use super::{confirm_dialog, instant_tooltip, status_badge, Action};
use crate::list_view::{format_number, parse_date, Sortable, SortableList};
use crate::models::*;
use crate::pages::{CertificateListPage, ManagePage, Outcome, StaffListPage, StudentsPage};
use crate::session::Role;

/// Row buttons of a management list
enum RowAction {
    View(String),
    Edit(String),
    Delete(String),
}

fn row_buttons(ui: &mut Ui, id: &str, actions: &mut Option<RowAction>) {
    if ui.small_button(regular::EYE).on_hover_text("View").clicked() {
        *actions = Some(RowAction::View(id.to_string()));
    }
    if ui.small_button(regular::PENCIL_SIMPLE).on_hover_text("Edit").clicked() {
        *actions = Some(RowAction::Edit(id.to_string()));
    }
    if ui.small_button(regular::TRASH).on_hover_text("Delete").clicked() {
        *actions = Some(RowAction::Delete(id.to_string()));
    }
}

/// Delete confirmation for a management list
fn delete_dialog<T: Sortable + Entity>(ui: &Ui, page: &mut ManagePage<T>, kind: &str) {
    let Some(pending) = &page.pending_delete else {
        return;
    };
    let message = format!("Delete {} \"{}\"? This cannot be undone.", kind, pending.name);
    match confirm_dialog(ui.ctx(), &format!("Delete {}", kind), &message, "Delete") {
        Some(true) => page.confirm_delete(),
        Some(false) => page.cancel_delete(),
        None => {}
    }
}

/// Dates render as "Mar 8, 2024"; unparseable values are shown as stored
pub(crate) fn date_cell(ui: &mut Ui, date: &str) {
    match parse_date(date) {
        Some(d) => {
            ui.label(d.format("%b %-d, %Y").to_string()).on_hover_text(date);
        }
        None if date.is_empty() => {
            ui.label(RichText::new("—").weak());
        }
        None => {
            ui.label(date);
        }
    }
}

pub(crate) fn render_students(ui: &mut Ui, page: &mut StudentsPage) -> Option<Action> {
    let scope = page.scope;
    let mut row_action = None;
    let mut action = None;

    ui.horizontal(|ui| {
        ui.heading("Manage Students");
        ui.label(RichText::new(format!("({})", page.list.len())).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{} Add Student", regular::USER_PLUS)).clicked() {
                action = Some(page.add().into());
            }
        });
    });
    ui.separator();

    let mut columns = vec![
        TableColumn::sorted("Name", StudentColumn::Name, 180.0),
        TableColumn::sorted("Register No", StudentColumn::RegisterNo, 120.0),
        TableColumn::sorted("Department", StudentColumn::Department, 150.0),
        TableColumn::sorted("Certificates", StudentColumn::TotalCertificates, 100.0),
        TableColumn::sorted("Points", StudentColumn::TotalPoints, 80.0),
        TableColumn::sorted("Last Upload", StudentColumn::LastUpload, 100.0),
    ];
    if scope == Role::Admin {
        columns.push(TableColumn::sorted("Assigned Staff", StudentColumn::AssignedStaff, 160.0));
    }
    columns.push(TableColumn::plain("Actions", 100.0));
    let fields: Vec<Option<StudentColumn>> = columns.iter().map(|c| c.field).collect();

    sortable_table(ui, "students_table", &mut page.list, &columns, |ui, col, s: &Student| match fields[col] {
        Some(StudentColumn::Name) => {
            ui.label(RichText::new(&s.name).strong());
        }
        Some(StudentColumn::RegisterNo) => {
            ui.label(&s.register_no);
        }
        Some(StudentColumn::Department) => {
            ui.label(&s.department);
        }
        Some(StudentColumn::TotalCertificates) => {
            ui.label(s.total_certificates.to_string());
        }
        Some(StudentColumn::TotalPoints) => {
            ui.label(RichText::new(s.total_points.to_string()).strong());
        }
        Some(StudentColumn::LastUpload) => date_cell(ui, &s.last_upload),
        Some(StudentColumn::AssignedStaff) => match &s.assigned_staff {
            Some(staff) => {
                ui.label(staff);
            }
            None => {
                ui.label(RichText::new("Unassigned").weak());
            }
        },
        None => row_buttons(ui, &s.id, &mut row_action),
    });

    match row_action {
        Some(RowAction::View(id)) => action = Some(page.view(&id).into()),
        Some(RowAction::Edit(id)) => action = Some(page.edit(&id).into()),
        Some(RowAction::Delete(id)) => page.request_delete(&id),
        None => {}
    }
    delete_dialog(ui, page, "student");
    action
}

pub(crate) fn render_staff(ui: &mut Ui, page: &mut StaffListPage) -> Option<Action> {
    let mut row_action = None;
    let mut action = None;

    ui.horizontal(|ui| {
        ui.heading("Manage Staff");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{} Add Staff", regular::USER_PLUS)).clicked() {
                action = Some(Outcome::Navigate(crate::routes::Route::AdminAddStaff).into());
            }
        });
    });
    ui.separator();

    let columns = [
        TableColumn::sorted("Name", StaffColumn::Name, 180.0),
        TableColumn::sorted("Email", StaffColumn::Email, 200.0),
        TableColumn::sorted("Department", StaffColumn::Department, 150.0),
        TableColumn::sorted("Students", StaffColumn::AssignedStudents, 90.0),
        TableColumn::sorted("Student Points", StaffColumn::TotalStudentPoints, 120.0),
        TableColumn::sorted("Last Active", StaffColumn::LastActive, 100.0),
        TableColumn::plain("Actions", 100.0),
    ];

    sortable_table(ui, "staff_table", &mut page.list, &columns, |ui, col, s: &Staff| match col {
        0 => {
            ui.label(RichText::new(&s.name).strong());
        }
        1 => {
            ui.label(&s.email);
        }
        2 => {
            ui.label(&s.department);
        }
        3 => {
            ui.label(s.assigned_students.to_string());
        }
        4 => {
            ui.label(s.total_student_points.to_string());
        }
        5 => date_cell(ui, &s.last_active),
        _ => row_buttons(ui, &s.id, &mut row_action),
    });

    match row_action {
        Some(RowAction::View(id)) => action = Some(page.view(&id).into()),
        Some(RowAction::Edit(id)) => action = Some(page.edit(&id).into()),
        Some(RowAction::Delete(id)) => page.request_delete(&id),
        None => {}
    }
    delete_dialog(ui, page, "staff member");
    action
}

pub(crate) fn render_flagged(ui: &mut Ui, list: &mut SortableList<FlaggedCertificate>) -> Option<Action> {
    ui.heading("Flagged Certificates");
    ui.label(RichText::new("Certificates marked for a closer look.").weak());
    ui.separator();

    let columns = [
        TableColumn::sorted("Certificate", FlaggedColumn::Title, 200.0),
        TableColumn::sorted("Student", FlaggedColumn::StudentName, 160.0),
        TableColumn::sorted("Category", FlaggedColumn::Category, 150.0),
        TableColumn::sorted("Points", FlaggedColumn::Points, 80.0),
        TableColumn::sorted("Uploaded", FlaggedColumn::UploadDate, 100.0),
        TableColumn::plain("", 60.0),
    ];
    let mut open = None;
    sortable_table(ui, "flagged_table", list, &columns, |ui, col, c: &FlaggedCertificate| match col {
        0 => {
            ui.label(RichText::new(&c.title).strong());
        }
        1 => {
            ui.label(&c.student_name);
        }
        2 => {
            ui.label(&c.category);
        }
        3 => {
            ui.label(format_number(c.points as f64));
        }
        4 => date_cell(ui, &c.upload_date),
        _ => {
            if ui.small_button(regular::EYE).on_hover_text("Review").clicked() {
                open = Some(c.id.clone());
            }
        }
    });
    open.map(|id| Outcome::Navigate(crate::routes::Route::StaffCertificate(id)).into())
}

pub(crate) fn render_incomplete(ui: &mut Ui, items: &[IncompleteSubmission]) -> Option<Action> {
    ui.heading("Incomplete Submissions");
    ui.label(RichText::new("Uploads that are missing required details.").weak());
    ui.separator();

    if items.is_empty() {
        ui.label("Nothing to follow up.");
        return None;
    }
    egui::Grid::new("incomplete_grid").striped(true).num_columns(4).spacing([16.0, 8.0]).show(ui, |ui| {
        ui.strong("Student");
        ui.strong("Certificate");
        ui.strong("Missing");
        ui.strong("Uploaded");
        ui.end_row();
        for item in items {
            ui.label(&item.student_name);
            if item.title.is_empty() {
                ui.label(RichText::new("Untitled").italics().weak());
            } else {
                ui.label(&item.title);
            }
            let response = ui.label(RichText::new(item.missing.join(", ")).color(super::status_color(CertificateStatus::Flagged)));
            instant_tooltip(&response, "Ask the student to complete these fields");
            ui.label(&item.upload_date);
            ui.end_row();
        }
    });
    None
}

pub(crate) fn render_certificate_list(ui: &mut Ui, title: &str, page: &mut CertificateListPage) -> Option<Action> {
    ui.heading(title);
    ui.separator();
    if page.list.is_empty() {
        ui.label("No certificates yet.");
        return None;
    }

    let show_student = page.scope != Role::Student;
    let mut columns = vec![
        TableColumn::sorted("Title", CertificateColumn::Title, 200.0),
        TableColumn::sorted("Category", CertificateColumn::Category, 150.0),
        TableColumn::sorted("Uploaded", CertificateColumn::UploadDate, 100.0),
        TableColumn::sorted("Status", CertificateColumn::Status, 90.0),
        TableColumn::sorted("Points", CertificateColumn::Points, 70.0),
    ];
    if show_student {
        columns.insert(1, TableColumn::plain("Student", 140.0));
    }
    columns.push(TableColumn::plain("", 80.0));
    let labels: Vec<&'static str> = columns.iter().map(|c| c.label).collect();

    let mut open = None;
    let mut download = None;
    sortable_table(ui, "certificates_table", &mut page.list, &columns, |ui, col, c: &Certificate| match labels[col] {
        "Title" => {
            ui.label(RichText::new(&c.title).strong());
        }
        "Student" => {
            ui.label(&c.student_name);
        }
        "Category" => {
            ui.label(&c.category);
        }
        "Uploaded" => date_cell(ui, &c.upload_date),
        "Status" => status_badge(ui, c.status),
        "Points" => {
            ui.label(c.points.to_string());
        }
        _ => {
            if ui.small_button(regular::EYE).on_hover_text("View").clicked() {
                open = Some(c.id.clone());
            }
            if ui.small_button(regular::DOWNLOAD_SIMPLE).on_hover_text("Download").clicked() {
                download = Some(c.id.clone());
            }
        }
    });

    if let Some(id) = download {
        page.download(&id);
    }
    open.map(|id| page.view(&id).into())
}
