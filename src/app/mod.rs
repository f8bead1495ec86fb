//! App module - contains the main application state and logic

mod controller;
mod header;
mod modals;
mod sections;
mod signup;

pub use controller::ViewController;

use crate::settings::Settings;
use crate::theme;
use crate::utils::rasterize_logo;
use crate::wallet::{provider_from_settings, WalletConnector};
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) view: ViewController,
    // Worker threads for wallet calls
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) was_connected: bool,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let connector = WalletConnector::new(provider_from_settings(&settings));
        if !connector.has_provider() {
            info!("No wallet provider configured");
        }
        let repaint_ctx = cc.egui_ctx.clone();
        let mut view = ViewController::new(connector, runtime.handle().clone())
            .with_repaint(move || repaint_ctx.request_repaint());
        view.select_section(settings.last_section);

        let (rgba, w, h) = rasterize_logo(theme::LOGO_SIZE as u32 * 2);
        let logo = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &rgba);
        let logo_texture = Some(cc.egui_ctx.load_texture("logo", logo, egui::TextureOptions::LINEAR));

        Self {
            view,
            runtime,
            logo_texture,
            toast_message: None,
            toast_start: None,
            was_connected: false,
            central_panel_rect: None,
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.last_section = self.view.active_section();
        self.settings.save(&self.data_dir);
    }

    pub(crate) fn show_toast(&mut self, msg: impl Into<String>) {
        self.toast_message = Some(msg.into());
        self.toast_start = Some(std::time::Instant::now());
    }
}
