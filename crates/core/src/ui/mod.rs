//! Shared UI for desktop and WASM
//!
//! Renders the portal with egui. Platform details (opening the guidelines
//! document) are provided by the shell through `PortalPlatform`.

mod dashboards;
mod details;
mod forms;
mod lists;
mod loading;
mod nav;
mod public;
mod table;

pub use loading::render_loading;
pub use nav::{render_public_header, render_role_nav, NavAction};
pub use table::{sort_indicator, sortable_table, TableColumn};

use egui::containers::Popup;
use egui::{Color32, RectAlign, Response, RichText, Ui};

use crate::models::{CertificateStatus, StatCard};
use crate::pages::Outcome;
use crate::portal::{Page, Portal};
use crate::session::Role;

/// What the shell must provide to the shared UI
pub trait PortalPlatform {
    /// Open the activity point guidelines document
    fn open_guidelines(&mut self);

    /// Files dropped onto the window since the last frame
    fn take_dropped_files(&mut self, ctx: &egui::Context) -> Vec<String> {
        ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| {
                    f.path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().into_owned())
                        .or_else(|| (!f.name.is_empty()).then(|| f.name.clone()))
                })
                .collect()
        })
    }
}

/// Page-level action a renderer hands back to `render_portal`
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    Outcome(Outcome),
    Login(Role),
    Logout,
    Guidelines,
}

impl From<Outcome> for Action {
    fn from(outcome: Outcome) -> Self {
        Action::Outcome(outcome)
    }
}

/// Render one frame of the portal: loading screen, role shell and current page
pub fn render_portal<P: PortalPlatform>(ctx: &egui::Context, portal: &mut Portal, platform: &mut P) {
    let now = ctx.input(|i| i.time);

    if portal.is_loading(now) {
        render_loading(ctx, portal.transition().progress(now));
        ctx.request_repaint();
        return;
    }

    let mut action: Option<Action> = None;

    let shell_role = portal.route().required_role().and(portal.role());
    let nav = match shell_role {
        Some(role) => render_role_nav(ctx, role, portal.route()),
        None => render_public_header(ctx, portal.role()),
    };
    match nav {
        Some(NavAction::Go(route)) => action = Some(Outcome::Navigate(route).into()),
        Some(NavAction::Logout) => action = Some(Action::Logout),
        Some(NavAction::Guidelines) => action = Some(Action::Guidelines),
        None => {}
    }

    let dropped = match portal.page() {
        Page::Upload(_) => platform.take_dropped_files(ctx),
        _ => Vec::new(),
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            let page_action = match portal.page_mut() {
                Page::Landing => public::render_landing(ui),
                Page::Login(page) => public::render_login(ui, page),

                Page::StudentDashboard => dashboards::render_student_dashboard(ui),
                Page::Upload(page) => forms::render_upload(ui, page, dropped),
                Page::Certificates(page) => lists::render_certificate_list(ui, "My Certificates", page),
                Page::Certificate(page) => details::render_certificate(ui, page),

                Page::StaffDashboard => dashboards::render_staff_dashboard(ui),
                Page::Students(page) => lists::render_students(ui, page),
                Page::StudentForm(page) => forms::render_student_form(ui, page),
                Page::StudentDetail(page) => details::render_student_detail(ui, page),
                Page::Flagged(list) => lists::render_flagged(ui, list),
                Page::Incomplete(items) => lists::render_incomplete(ui, items),
                Page::Review(page) => lists::render_certificate_list(ui, "Review Certificates", page),

                Page::AdminDashboard => dashboards::render_admin_dashboard(ui),
                Page::StaffList(page) => lists::render_staff(ui, page),
                Page::StaffForm(page) => forms::render_staff_form(ui, page),
                Page::StaffDetail(page) => details::render_staff_detail(ui, page),
            };
            if page_action.is_some() {
                action = page_action;
            }
        });
    });

    match action {
        Some(Action::Outcome(outcome)) => portal.apply(outcome, now),
        Some(Action::Login(role)) => portal.login(role, now),
        Some(Action::Logout) => portal.logout(now),
        Some(Action::Guidelines) => platform.open_guidelines(),
        None => {}
    }
    if portal.transition().is_pending() {
        ctx.request_repaint();
    }
}

// ============================================================================
// Widgets
// ============================================================================

/// Show a tooltip immediately (no delay) positioned to the left
pub(crate) fn instant_tooltip(response: &Response, text: impl Into<String>) {
    if response.hovered() {
        let text = text.into();
        Popup::from_response(response)
            .align(RectAlign::LEFT_START)
            .gap(4.0)
            .show(|ui| {
                ui.label(&text);
            });
    }
}

pub(crate) fn status_color(status: CertificateStatus) -> Color32 {
    match status {
        CertificateStatus::Pending => Color32::from_rgb(230, 180, 60),
        CertificateStatus::Approved => Color32::from_rgb(90, 190, 110),
        CertificateStatus::Rejected => Color32::from_rgb(220, 90, 90),
        CertificateStatus::Flagged => Color32::from_rgb(240, 130, 60),
    }
}

pub(crate) fn status_badge(ui: &mut Ui, status: CertificateStatus) {
    ui.label(RichText::new(status.label()).color(status_color(status)).strong());
}

/// Row of headline figures
pub(crate) fn stat_cards(ui: &mut Ui, cards: &[StatCard]) {
    ui.horizontal_wrapped(|ui| {
        for card in cards {
            egui::Frame::new()
                .fill(ui.style().visuals.extreme_bg_color)
                .corner_radius(4.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_min_width(160.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(card.label).weak());
                        ui.label(RichText::new(&card.value).heading().strong());
                        if let Some(sub) = card.subtext {
                            ui.label(RichText::new(sub).small().weak());
                        }
                    });
                });
        }
    });
}

/// Inline error message under a form
pub(crate) fn error_label(ui: &mut Ui, error: &Option<String>) {
    if let Some(error) = error {
        ui.colored_label(Color32::from_rgb(220, 90, 90), format!("{} {}", egui_phosphor::regular::WARNING, error));
    }
}

/// Centered yes/no dialog; returns Some(true) on confirm, Some(false) on cancel
pub(crate) fn confirm_dialog(ctx: &egui::Context, title: &str, message: &str, confirm_text: &str) -> Option<bool> {
    let mut answer = None;
    egui::Window::new(format!("{} {}", egui_phosphor::regular::WARNING, title))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label(message);
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
                if ui.button(confirm_text).clicked() {
                    answer = Some(true);
                }
            });
        });
    answer
}
