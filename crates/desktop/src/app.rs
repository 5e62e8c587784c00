//! Main application module

use activity_points_core::ui::{render_portal, PortalPlatform};
use activity_points_core::{Portal, RouteTransition, Session};
use eframe::egui;

use crate::config::Config;
use crate::role_store::FileRoleStore;

/// Native side of the shared UI
struct DesktopPlatform {
    guidelines_path: String,
}

impl PortalPlatform for DesktopPlatform {
    fn open_guidelines(&mut self) {
        tracing::info!(path = %self.guidelines_path, "opening guidelines");
        if let Err(e) = open::that(&self.guidelines_path) {
            tracing::warn!(path = %self.guidelines_path, error = %e, "failed to open guidelines");
        }
    }
}

pub struct ActivityPointsApp {
    config: Config,
    portal: Portal,
    platform: DesktopPlatform,
}

impl ActivityPointsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let store = FileRoleStore::in_config_dir();
        tracing::debug!(path = %store.path().display(), "role flag location");
        let session = Session::init(Box::new(store));
        let now = cc.egui_ctx.input(|i| i.time);
        let portal = Portal::new(session, RouteTransition::new(config.transition_delay()), now);
        let platform = DesktopPlatform {
            guidelines_path: config.guidelines_path.clone(),
        };
        Self { config, portal, platform }
    }
}

impl eframe::App for ActivityPointsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window state for persistence (only when not maximized to preserve restore size)
        ctx.input(|i| {
            let maximized = i.viewport().maximized.unwrap_or(false);
            self.config.window_maximized = maximized;
            if !maximized {
                if let Some(rect) = i.viewport().inner_rect {
                    self.config.window_x = Some(rect.min.x);
                    self.config.window_y = Some((rect.min.y - 30.0).max(0.0));
                    self.config.window_width = Some(rect.width());
                    self.config.window_height = Some(rect.height());
                }
            }
        });

        render_portal(ctx, &mut self.portal, &mut self.platform);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.portal.teardown();
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to save config");
        }
    }
}
