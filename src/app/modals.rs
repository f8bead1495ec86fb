//! Blocking wallet alert and toast notifications

use super::App;
use crate::theme;
use eframe::egui;

impl App {
    pub(crate) fn render_alert_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.view.current_alert() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("wallet_alert"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let response = modal.show(ctx, |ui| {
            ui.set_width(340.0);
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::WARNING)
                        .size(36.0)
                        .color(theme::STATUS_WARNING),
                );
                ui.add_space(theme::SPACING_MD);
                ui.label(egui::RichText::new(&message).color(theme::TEXT_SECONDARY));
                ui.add_space(theme::SPACING_XL);
                ui.add(theme::button_accent("OK")).clicked()
            })
            .inner
        });

        if response.inner || response.should_close() {
            self.view.dismiss_alert();
        }
    }

    /// Announce a fresh wallet connection once
    pub(crate) fn check_wallet_connected(&mut self) {
        let connected = self.view.is_connected();
        if connected && !self.was_connected {
            if let Some(address) = self.view.wallet().address() {
                self.show_toast(format!("Wallet connected: {}", address));
            }
        }
        self.was_connected = connected;
    }

    // Bottom-right of central panel, 3s visible then fade, pause on hover
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect) else {
            return;
        };
        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        let alpha = if elapsed > visible_duration {
            ((total_duration - elapsed) / fade_duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0x11, 0x1a, 0x13, (230.0 * alpha) as u8))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgba_unmultiplied(
                            theme::ACCENT.r(),
                            theme::ACCENT.g(),
                            theme::ACCENT.b(),
                            (100.0 * alpha) as u8,
                        ),
                    ))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(msg).color(
                            egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8),
                        ));
                    });
            });

        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
