//! Page content for each navigation section

use super::App;
use crate::constants::*;
use crate::theme;
use crate::types::{InfoCard, NavSection};
use crate::ui::components::{self, avatar, check_item, heading, stat_card, status_pill};
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub(crate) fn render_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                self.central_panel_rect = Some(ui.max_rect());
                let section = self.view.active_section();
                egui::ScrollArea::vertical()
                    .id_salt(section.id())
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let width = ui.available_width().min(theme::CONTENT_MAX_WIDTH);
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(width);
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                match section {
                                    NavSection::About => self.render_about(ui),
                                    NavSection::Dashboard => render_dashboard(ui),
                                    NavSection::Policies => render_policies(ui),
                                    NavSection::Signup => self.render_signup(ui),
                                }
                            });
                        });
                    });
            });
    }

    fn render_about(&mut self, ui: &mut egui::Ui) {
        // Hero
        theme::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icons::PLANT).size(48.0).color(theme::ACCENT));
                ui.label(
                    egui::RichText::new(APP_NAME)
                        .size(theme::FONT_HERO)
                        .strong()
                        .color(theme::ACCENT_LIGHT),
                );
                ui.label(egui::RichText::new(TAGLINE).size(theme::FONT_HEADING).color(theme::TEXT_SECONDARY));
            });
            ui.add_space(theme::SPACING_XL);
            ui.label(egui::RichText::new("Our Mission").size(theme::FONT_HEADING).strong());
            ui.label(egui::RichText::new(MISSION).color(theme::TEXT_MUTED));
            ui.add_space(theme::SPACING_SM);
            for risk in COVERED_RISKS {
                check_item(ui, risk);
            }
        });
        ui.add_space(theme::SPACING_SECTION);

        heading(ui, None, "How We Protect Your Crops");
        card_grid(ui, "protection_steps", PROTECTION_STEPS, |_| theme::card_frame());
        ui.add_space(theme::SPACING_SECTION);

        heading(ui, None, "Our Technology");
        card_grid(ui, "technology", TECHNOLOGY, |i| {
            let (border, fill) = theme::TECH_COLORS[i % theme::TECH_COLORS.len()];
            theme::tinted_frame(border, fill)
        });
        ui.add_space(theme::SPACING_SECTION);

        heading(ui, Some(icons::USERS), "Leadership Team");
        egui::Grid::new("team")
            .num_columns(TEAM.len())
            .spacing([theme::SPACING_XL, theme::SPACING_XL])
            .show(ui, |ui| {
                for member in TEAM {
                    theme::card_frame().show(ui, |ui| {
                        ui.set_width(280.0);
                        ui.vertical_centered(|ui| {
                            avatar(ui, member.initial());
                            ui.label(egui::RichText::new(member.name).strong().size(theme::FONT_HEADING));
                            ui.label(egui::RichText::new(member.role).color(theme::ACCENT_LIGHT));
                            ui.label(egui::RichText::new(member.bio).color(theme::TEXT_MUTED));
                            ui.label(
                                egui::RichText::new(member.expertise)
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_DIM),
                            );
                        });
                    });
                }
                ui.end_row();
            });
        ui.add_space(theme::SPACING_SECTION);

        heading(ui, None, "Trusted Partners");
        ui.horizontal_wrapped(|ui| {
            for partner in PARTNERS {
                theme::card_frame().show(ui, |ui| {
                    ui.set_min_width(160.0);
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(*partner).strong().size(theme::FONT_HEADING));
                    });
                });
            }
        });
        ui.add_space(theme::SPACING_SECTION);

        // Call to action
        theme::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Ready to Protect Your Crops?")
                        .size(theme::FONT_TITLE)
                        .strong(),
                );
                ui.add_space(theme::SPACING_MD);
                let cta = format!("{}  Get Started Now", icons::ARROW_RIGHT);
                if ui.add(theme::button_accent(cta)).clicked() {
                    self.view.select_section(NavSection::Signup);
                }
            });
        });
    }
}

fn render_dashboard(ui: &mut egui::Ui) {
    heading(ui, Some(icons::CHART_LINE), "Farm Overview");
    ui.horizontal_wrapped(|ui| {
        for (title, value) in FARM_OVERVIEW {
            stat_card(ui, title, value);
        }
    });
    ui.add_space(theme::SPACING_SECTION);

    render_weather(ui);
    ui.add_space(theme::SPACING_SECTION);

    heading(ui, Some(icons::UMBRELLA), "Recent Policies");
    policy_table(ui, "recent_policies", false);
}

fn render_weather(ui: &mut egui::Ui) {
    heading(ui, Some(icons::CLOUD_SUN), "Current Weather Conditions");
    ui.horizontal_wrapped(|ui| {
        for reading in WEATHER {
            theme::card_frame().show(ui, |ui| {
                ui.set_min_width(200.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(reading.icon).size(theme::FONT_HEADING).color(theme::ACCENT));
                    ui.label(egui::RichText::new(reading.title).size(theme::FONT_LABEL).strong());
                });
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(reading.value).size(theme::FONT_STAT).strong());
                    ui.label(
                        egui::RichText::new(reading.trend.arrow())
                            .size(theme::FONT_TITLE)
                            .color(components::trend_color(reading.trend)),
                    );
                });
            });
        }
    });
}

fn render_policies(ui: &mut egui::Ui) {
    heading(ui, Some(icons::UMBRELLA), "Available Insurance Plans");
    ui.label(egui::RichText::new(POLICIES_INTRO).color(theme::TEXT_MUTED));
    ui.add_space(theme::SPACING_LG);
    policy_table(ui, "policy_plans", true);
    ui.add_space(theme::SPACING_SECTION);

    ui.label(egui::RichText::new("How It Works").size(theme::FONT_HEADING + 2.0).strong());
    ui.add_space(theme::SPACING_MD);
    card_grid(ui, "plan_steps", PLAN_STEPS, |_| theme::card_frame());
}

/// Policy rows. The expanded variant uses taller rows.
fn policy_table(ui: &mut egui::Ui, id: &str, expanded: bool) {
    use egui_extras::{Column, TableBuilder};

    let row_height = if expanded { 40.0 } else { 32.0 };
    ui.push_id(id, |ui| {
        theme::card_frame().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(false)
                .resizable(false)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(Column::remainder(), POLICY_HEADERS.len())
                .header(28.0, |mut header| {
                    for title in POLICY_HEADERS {
                        header.col(|ui| {
                            ui.label(
                                egui::RichText::new(title.to_uppercase())
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_DIM),
                            );
                        });
                    }
                })
                .body(|mut body| {
                    for policy in POLICIES {
                        body.row(row_height, |mut row| {
                            row.col(|ui| {
                                ui.label(egui::RichText::new(policy.crop_type).strong());
                            });
                            row.col(|ui| {
                                ui.label(policy.coverage);
                            });
                            row.col(|ui| {
                                ui.label(policy.premium);
                            });
                            row.col(|ui| {
                                status_pill(ui, policy.status);
                            });
                        });
                    }
                });
        });
    });
}

/// Row of titled cards; `frame_for` picks the frame by card index
fn card_grid(
    ui: &mut egui::Ui,
    id: &str,
    cards: &[InfoCard],
    frame_for: impl Fn(usize) -> egui::Frame,
) {
    let spacing = theme::SPACING_XL;
    let per_row = if ui.available_width() < theme::COMPACT_WIDTH { 1 } else { cards.len().max(1) };
    let card_width = (ui.available_width() - spacing * (per_row as f32 - 1.0)) / per_row as f32
        - 2.0 * theme::SPACING_XL;

    egui::Grid::new(id)
        .spacing([spacing, spacing])
        .show(ui, |ui| {
            for (i, card) in cards.iter().enumerate() {
                frame_for(i).show(ui, |ui| {
                    ui.set_width(card_width.max(120.0));
                    ui.label(egui::RichText::new(card.icon).size(28.0).color(theme::ACCENT_LIGHT));
                    ui.label(egui::RichText::new(card.title).strong().size(theme::FONT_HEADING));
                    ui.label(egui::RichText::new(card.description).color(theme::TEXT_MUTED));
                    for item in card.list {
                        check_item(ui, item);
                    }
                });
                if (i + 1) % per_row == 0 {
                    ui.end_row();
                }
            }
        });
}
