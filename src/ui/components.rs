//! Reusable UI components
//!
//! Standalone widgets shared by the page sections.

use crate::theme;
use crate::types::{PolicyStatus, Trend};
use eframe::egui;

/// Colors for a policy status pill: (fill, text)
pub fn status_colors(status: PolicyStatus) -> (egui::Color32, egui::Color32) {
    match status {
        PolicyStatus::Active => (
            egui::Color32::from_rgba_unmultiplied(0x14, 0x53, 0x2d, 90),
            theme::STATUS_SUCCESS,
        ),
        PolicyStatus::Pending => (
            egui::Color32::from_rgba_unmultiplied(0xca, 0x8a, 0x04, 60),
            theme::STATUS_WARNING,
        ),
    }
}

pub fn trend_color(trend: Trend) -> egui::Color32 {
    match trend {
        Trend::Rising => theme::STATUS_WARNING,
        Trend::Falling => theme::ACCENT_LIGHT,
        Trend::Steady => theme::TEXT_MUTED,
    }
}

/// Rounded pill with a status label
pub fn status_pill(ui: &mut egui::Ui, status: PolicyStatus) -> egui::Response {
    let (fill, text) = status_colors(status);
    egui::Frame::new()
        .fill(fill)
        .corner_radius(theme::RADIUS_PILL)
        .inner_margin(egui::Margin::symmetric(10, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(status.label()).size(theme::FONT_SMALL).strong().color(text));
        })
        .response
}

/// Big-number stat card
pub fn stat_card(ui: &mut egui::Ui, title: &str, value: &str) {
    theme::tinted_frame(theme::BORDER_ACCENT, theme::TECH_COLORS[0].1).show(ui, |ui| {
        ui.set_min_width(220.0);
        ui.label(egui::RichText::new(title).strong().color(theme::TEXT_PRIMARY));
        ui.add_space(theme::SPACING_SM);
        ui.label(egui::RichText::new(value).size(theme::FONT_STAT).strong().color(theme::ACCENT_LIGHT));
    });
}

/// Section heading with optional leading icon
pub fn heading(ui: &mut egui::Ui, icon: Option<&str>, text: &str) {
    let text = match icon {
        Some(icon) => format!("{}  {}", icon, text),
        None => text.to_string(),
    };
    ui.label(egui::RichText::new(text).size(theme::FONT_TITLE).strong().color(theme::TEXT_PRIMARY));
    ui.add_space(theme::SPACING_MD);
}

/// Circular avatar with a single initial
pub fn avatar(ui: &mut egui::Ui, initial: char) -> egui::Response {
    let size = theme::AVATAR_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let (fill, _) = theme::button_visual(&response, theme::ACCENT_DARK, rect);
        let painter = ui.painter();
        painter.circle_filled(rect.center(), size / 2.0, fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initial,
            egui::FontId::proportional(size * 0.45),
            theme::TEXT_PRIMARY,
        );
    }
    response
}

/// Bulleted line with a check icon
pub fn check_item(ui: &mut egui::Ui, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE).color(theme::ACCENT));
        ui.label(egui::RichText::new(text).color(theme::TEXT_SECONDARY));
    });
}
