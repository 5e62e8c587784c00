//! WASM App state and UI

use activity_points_core::constants::GUIDELINES_PATH;
use activity_points_core::ui::{render_portal, PortalPlatform};
use activity_points_core::{Portal, RouteTransition, Session};
use eframe::egui;

use crate::storage::{get_path_from_location, open_in_new_tab, replace_location_path, LocalStorageRoleStore};

struct WebPlatform;

impl PortalPlatform for WebPlatform {
    fn open_guidelines(&mut self) {
        tracing::info!(path = GUIDELINES_PATH, "opening guidelines");
        open_in_new_tab(GUIDELINES_PATH);
    }
}

pub struct WasmApp {
    portal: Portal,
    platform: WebPlatform,
    /// Path last written to the address bar
    shown_path: String,
}

impl WasmApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let session = Session::init(Box::new(LocalStorageRoleStore));
        let now = cc.egui_ctx.input(|i| i.time);
        let portal = match get_path_from_location() {
            Some(path) if path != "/" => Portal::with_path(session, RouteTransition::default(), &path, now),
            _ => Portal::new(session, RouteTransition::default(), now),
        };
        Self {
            portal,
            platform: WebPlatform,
            shown_path: String::new(),
        }
    }
}

impl eframe::App for WasmApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        render_portal(ctx, &mut self.portal, &mut self.platform);

        let path = self.portal.route().path();
        if path != self.shown_path {
            replace_location_path(&path);
            self.shown_path = path;
        }
    }
}

impl Drop for WasmApp {
    fn drop(&mut self) {
        self.portal.teardown();
    }
}
