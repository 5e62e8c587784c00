//! Role dashboards

use egui::{RichText, Ui};
use egui_phosphor::regular;
use egui_plot::{Bar, BarChart, Plot};

use super::{stat_cards, status_badge, Action};
use crate::fixtures;
use crate::models::ActivityEntry;
use crate::pages::Outcome;
use crate::routes::Route;

pub(crate) fn render_student_dashboard(ui: &mut Ui) -> Option<Action> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.heading("Student Dashboard");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{} Upload Certificate", regular::UPLOAD_SIMPLE)).clicked() {
                action = Some(Outcome::Navigate(Route::StudentUpload).into());
            }
        });
    });
    ui.separator();
    stat_cards(ui, &fixtures::student_stats());
    ui.add_space(16.0);

    ui.heading("Points by Category");
    render_points_chart(ui, &fixtures::student_points_by_category());
    ui.add_space(16.0);

    ui.heading("Recent Activity");
    ui.separator();
    activity_feed(ui, &fixtures::student_recent_activity());
    action
}

/// Approved points per category as a bar chart
fn render_points_chart(ui: &mut Ui, categories: &[(&str, u32)]) {
    let bars: Vec<Bar> = categories
        .iter()
        .enumerate()
        .map(|(i, (name, points))| Bar::new(i as f64, *points as f64).name(*name).width(0.6))
        .collect();
    let labels: Vec<String> = categories.iter().map(|(name, _)| name.to_string()).collect();

    Plot::new("points_by_category")
        .height(200.0)
        .width(ui.available_width())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_x(false)
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > f64::EPSILON || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Points", bars).color(egui::Color32::from_rgb(100, 180, 255)));
        });
}

fn activity_feed(ui: &mut Ui, entries: &[ActivityEntry]) {
    for entry in entries {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                let title = match &entry.student_name {
                    Some(student) => format!("{} · {}", student, entry.title),
                    None => entry.title.clone(),
                };
                ui.label(RichText::new(title).strong());
                let detail = match &entry.category {
                    Some(category) => format!("{} · {}", category, entry.when),
                    None => entry.when.clone(),
                };
                ui.label(RichText::new(detail).weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                status_badge(ui, entry.status);
                ui.label(format!("{} pts", entry.points));
            });
        });
        ui.separator();
    }
}

pub(crate) fn render_staff_dashboard(ui: &mut Ui) -> Option<Action> {
    let mut action = None;
    ui.heading("Staff Dashboard");
    ui.separator();

    ui.label(RichText::new("Certificates").strong());
    stat_cards(ui, &fixtures::staff_certificate_stats());
    ui.add_space(8.0);
    ui.label(RichText::new("Students").strong());
    stat_cards(ui, &fixtures::staff_student_stats());
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        let shortcuts = [
            (regular::CHECK_SQUARE, "Review Certificates", Route::StaffReview),
            (regular::FLAG, "Flagged Certificates", Route::StaffFlagged),
            (regular::WARNING_CIRCLE, "Incomplete Submissions", Route::StaffIncomplete),
        ];
        for (icon, label, route) in shortcuts {
            if ui.button(format!("{} {}", icon, label)).clicked() {
                action = Some(Outcome::Navigate(route).into());
            }
        }
    });
    ui.add_space(16.0);

    ui.heading("Recent Activity");
    ui.separator();
    activity_feed(ui, &fixtures::staff_recent_activity());
    action
}

pub(crate) fn render_admin_dashboard(ui: &mut Ui) -> Option<Action> {
    let mut action = None;
    ui.heading("Admin Dashboard");
    ui.label(RichText::new("Manage your institution's students and staff.").weak());
    ui.separator();

    ui.horizontal(|ui| {
        let cards = [
            (regular::STUDENT, "Manage Students", "View and manage all students in the system", Route::AdminStudents),
            (regular::USERS, "Manage Staff", "View and manage staff members", Route::AdminStaff),
        ];
        for (icon, title, description, route) in cards {
            let text = format!("{} {}\n{}", icon, title, description);
            if ui.add(egui::Button::new(text).min_size(egui::vec2(260.0, 64.0))).clicked() {
                action = Some(Outcome::Navigate(route).into());
            }
        }
    });
    ui.add_space(16.0);

    ui.heading("Quick Stats");
    stat_cards(ui, &fixtures::admin_stats());
    action
}
