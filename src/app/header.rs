//! Header bar, mobile menu and footer

use super::App;
use crate::constants::*;
use crate::theme;
use crate::types::NavSection;
use chrono::Datelike;
use eframe::egui;
use egui_phosphor::regular as icons;
use tracing::{debug, warn};

impl App {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        let compact = ctx.screen_rect().width() < theme::COMPACT_WIDTH;

        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .frame(theme::header_frame())
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    self.render_brand(ui);
                    ui.add_space(theme::SPACING_XL);

                    if !compact {
                        self.render_nav_items(ui);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if compact {
                            let icon = if self.view.is_menu_open() { icons::X } else { icons::LIST };
                            let toggle = ui.add(
                                egui::Button::new(egui::RichText::new(icon).size(theme::FONT_HEADING))
                                    .fill(egui::Color32::TRANSPARENT),
                            );
                            if toggle.clicked() {
                                self.view.toggle_menu();
                            }
                        }
                        self.render_wallet_area(ui);
                    });
                });
            });

        if compact && self.view.is_menu_open() {
            egui::TopBottomPanel::top("mobile_menu")
                .frame(theme::header_frame())
                .show(ctx, |ui| {
                    ui.vertical(|ui| {
                        self.render_nav_items(ui);
                        ui.add_space(theme::SPACING_MD);
                        self.render_wallet_area(ui);
                    });
                });
        }
    }

    fn render_brand(&mut self, ui: &mut egui::Ui) {
        if let Some(texture) = &self.logo_texture {
            ui.add(
                egui::Image::new(texture)
                    .fit_to_exact_size(egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE)),
            );
        }
        let brand = ui.add(
            egui::Label::new(
                egui::RichText::new(APP_NAME)
                    .size(theme::FONT_HEADING + 4.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .sense(egui::Sense::click()),
        );
        if brand.clicked() {
            self.view.select_section(NavSection::About);
        }
    }

    /// Navigation buttons, laid out in whatever direction the parent uses
    fn render_nav_items(&mut self, ui: &mut egui::Ui) {
        let active = self.view.active_section();
        for section in NavSection::ALL {
            if theme::nav_item(ui, section.icon(), section.label(), section == active) {
                self.view.select_section(section);
            }
        }
    }

    /// Balance and address once connected, otherwise the connect button
    fn render_wallet_area(&mut self, ui: &mut egui::Ui) {
        let wallet = self.view.wallet();
        match (wallet.address(), wallet.balance()) {
            (Some(address), Some(balance)) => {
                egui::Frame::new()
                    .fill(theme::BG_SURFACE)
                    .corner_radius(theme::RADIUS_PILL)
                    .inner_margin(egui::Margin::symmetric(12, 6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format!("{} ETH", balance))
                                    .strong()
                                    .color(theme::ACCENT_LIGHT),
                            );
                            ui.separator();
                            ui.label(
                                egui::RichText::new(format!("{}  {}", icons::WALLET, address))
                                    .color(theme::TEXT_SECONDARY),
                            );
                        });
                    });
            }
            _ => {
                let label = format!("{}  Connect Wallet", icons::WALLET);
                let mut button = ui.add(theme::button_accent(label));
                if !self.view.has_provider() {
                    button = button.on_hover_text("No wallet provider configured");
                }
                if button.clicked() {
                    self.view.connect_wallet();
                }
                if self.view.is_connecting() {
                    ui.spinner();
                }
            }
        }
    }

    pub(crate) fn render_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .frame(theme::footer_frame())
            .show(ctx, |ui| {
                ui.columns(3, |cols| {
                    cols[0].label(
                        egui::RichText::new(format!("{}  {}", icons::LEAF, APP_NAME))
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::ACCENT_LIGHT),
                    );
                    cols[0].label(egui::RichText::new(FOOTER_BLURB).color(theme::TEXT_MUTED));

                    cols[1].label(egui::RichText::new("Quick Links").strong());
                    for section in NavSection::ALL {
                        let link = cols[1].add(
                            egui::Label::new(
                                egui::RichText::new(format!("{}  {}", section.icon(), section.label()))
                                    .color(theme::TEXT_MUTED),
                            )
                            .sense(egui::Sense::click()),
                        );
                        if link.clicked() {
                            self.view.select_section(section);
                        }
                    }

                    cols[2].label(egui::RichText::new("Contact").strong());
                    if cols[2]
                        .link(format!("{}  {}", icons::ENVELOPE, SUPPORT_EMAIL))
                        .clicked()
                    {
                        open_mail_client();
                    }
                    cols[2].label(egui::RichText::new(CONTACT_LINE).color(theme::TEXT_MUTED));
                });

                ui.separator();
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "© {} {}. All rights reserved.",
                            chrono::Local::now().year(),
                            APP_NAME
                        ))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                    );
                });
            });
    }
}

fn open_mail_client() {
    let uri = format!("mailto:{}", SUPPORT_EMAIL);
    debug!(uri = %uri, "Opening mail client");
    if let Err(e) = open::that(&uri) {
        warn!(error = %e, "Failed to open mail client");
    }
}
