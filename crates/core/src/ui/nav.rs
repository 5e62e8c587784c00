//! Top header and role shells

use egui::RichText;
use egui_phosphor::regular;

use crate::constants::APP_TITLE;
use crate::routes::Route;
use crate::session::Role;

#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    Go(Route),
    Logout,
    Guidelines,
}

/// Sidebar entries of each role's shell
fn nav_links(role: Role) -> Vec<(&'static str, &'static str, Route)> {
    match role {
        Role::Student => vec![
            (regular::HOUSE, "Dashboard", Route::StudentDashboard),
            (regular::UPLOAD_SIMPLE, "Upload Certificate", Route::StudentUpload),
            (regular::CERTIFICATE, "My Certificates", Route::StudentCertificates),
        ],
        Role::Staff => vec![
            (regular::HOUSE, "Dashboard", Route::StaffDashboard),
            (regular::STUDENT, "Students", Route::StaffStudents),
            (regular::CHECK_SQUARE, "Review Certificates", Route::StaffReview),
            (regular::FLAG, "Flagged Certificates", Route::StaffFlagged),
            (regular::WARNING_CIRCLE, "Incomplete Submissions", Route::StaffIncomplete),
        ],
        Role::Admin => vec![
            (regular::HOUSE, "Dashboard", Route::AdminDashboard),
            (regular::STUDENT, "Manage Students", Route::AdminStudents),
            (regular::USERS, "Manage Staff", Route::AdminStaff),
        ],
    }
}

/// Link is highlighted for its own route and the pages below it
fn is_active(current: &Route, link: &Route) -> bool {
    current == link || current.path().starts_with(&format!("{}/", link.path()))
}

/// Header and sidebar of a signed-in role's pages
pub fn render_role_nav(ctx: &egui::Context, role: Role, current: &Route) -> Option<NavAction> {
    let mut action = None;

    egui::TopBottomPanel::top("role_header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(APP_TITLE);
            ui.separator();
            ui.label(RichText::new(format!("{} Portal", role.label())).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(format!("{} Logout", regular::SIGN_OUT)).clicked() {
                    action = Some(NavAction::Logout);
                }
                if ui.button(format!("{} Guidelines", regular::FILE_PDF)).clicked() {
                    action = Some(NavAction::Guidelines);
                }
            });
        });
    });

    egui::SidePanel::left("role_nav").resizable(false).default_width(200.0).show(ctx, |ui| {
        ui.add_space(8.0);
        for (icon, label, route) in nav_links(role) {
            let selected = is_active(current, &route);
            if ui.selectable_label(selected, format!("{} {}", icon, label)).clicked() && current != &route {
                action = Some(NavAction::Go(route));
            }
        }
    });

    action
}

/// Header of the landing and sign-in pages
pub fn render_public_header(ctx: &egui::Context, role: Option<Role>) -> Option<NavAction> {
    let mut action = None;
    egui::TopBottomPanel::top("public_header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.link(RichText::new(APP_TITLE).heading()).clicked() {
                action = Some(NavAction::Go(Route::Landing));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match role {
                    Some(role) => {
                        if ui.button(format!("{} Logout", regular::SIGN_OUT)).clicked() {
                            action = Some(NavAction::Logout);
                        }
                        if ui.button(format!("{} Dashboard", regular::HOUSE)).clicked() {
                            action = Some(NavAction::Go(Route::dashboard(role)));
                        }
                    }
                    None => {
                        if ui.button(format!("{} Admin", regular::SHIELD)).clicked() {
                            action = Some(NavAction::Go(Route::AdminLogin));
                        }
                        if ui.button(format!("{} Login", regular::SIGN_IN)).clicked() {
                            action = Some(NavAction::Go(Route::Login));
                        }
                    }
                }
                if ui.button(format!("{} Guidelines", regular::FILE_PDF)).clicked() {
                    action = Some(NavAction::Guidelines);
                }
            });
        });
    });
    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_shell_links_review() {
        assert!(nav_links(Role::Staff).iter().any(|(_, _, r)| r == &Route::StaffReview));
    }

    #[test]
    fn test_active_link_covers_sub_pages() {
        let edit = Route::AdminEditStudent("1".to_string());
        assert!(is_active(&edit, &Route::AdminStudents));
        assert!(!is_active(&edit, &Route::AdminStaff));
        assert!(!is_active(&edit, &Route::AdminDashboard));
        assert!(is_active(&Route::AdminDashboard, &Route::AdminDashboard));
    }
}
