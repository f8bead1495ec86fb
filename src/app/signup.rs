//! Sign-up form

use super::App;
use crate::constants::CROP_OPTIONS;
use crate::theme;
use crate::types::FormField;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub(crate) fn render_signup(&mut self, ui: &mut egui::Ui) {
        let errors: Vec<FormField> = self.view.form_errors().to_vec();
        let mut submitted = false;

        ui.vertical_centered(|ui| {
            theme::section_frame().show(ui, |ui| {
                ui.set_width(theme::INPUT_WIDTH + 48.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{}  Join Agrosurance", icons::PLANT))
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::ACCENT_LIGHT),
                    );
                });
                ui.add_space(theme::SPACING_XL);

                let form = &mut self.view.form;
                text_field(ui, FormField::Name, &mut form.name, "", &errors);
                text_field(ui, FormField::Email, &mut form.email, "name@example.com", &errors);
                text_field(ui, FormField::FarmLocation, &mut form.farm_location, "", &errors);

                field_label(ui, FormField::CropType, &errors, form.crop_type.is_empty());
                let selected = if form.crop_type.is_empty() {
                    "Select a crop".to_string()
                } else {
                    form.crop_type.clone()
                };
                egui::ComboBox::from_id_salt("crop_type")
                    .selected_text(selected)
                    .width(theme::INPUT_WIDTH)
                    .show_ui(ui, |ui| {
                        for crop in CROP_OPTIONS {
                            ui.selectable_value(&mut form.crop_type, crop.to_string(), *crop);
                        }
                    });
                ui.add_space(theme::SPACING_XL);

                ui.vertical_centered(|ui| {
                    let label = format!("{}  Sign Up & Connect Wallet", icons::WALLET);
                    let submit = ui.add(
                        theme::button_accent(label).min_size(egui::vec2(theme::INPUT_WIDTH, 40.0)),
                    );
                    if submit.clicked() {
                        submitted = true;
                    }
                    if self.view.is_connecting() {
                        ui.spinner();
                    }
                    ui.add_space(theme::SPACING_MD);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("Already have an account?").color(theme::TEXT_MUTED));
                        // No account system: signing in is the same wallet connect
                        if ui.link("Sign In").clicked() {
                            self.view.connect_wallet();
                        }
                    });
                });
            });
        });

        if submitted {
            if let Err(invalid) = self.view.submit_signup() {
                let message = self.view.form.rejection_message(&invalid);
                self.show_toast(message);
            }
        }
    }
}

fn field_label(ui: &mut egui::Ui, field: FormField, errors: &[FormField], blank: bool) {
    let invalid = errors.contains(&field);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(field.label()).size(theme::FONT_LABEL).strong());
        if invalid {
            let hint = if blank { "required" } else { "invalid" };
            ui.label(
                egui::RichText::new(format!("{} {}", icons::WARNING, hint))
                    .size(theme::FONT_SMALL)
                    .color(theme::STATUS_ERROR),
            );
        }
    });
}

fn text_field(
    ui: &mut egui::Ui,
    field: FormField,
    value: &mut String,
    hint: &str,
    errors: &[FormField],
) {
    field_label(ui, field, errors, value.trim().is_empty());
    let stroke = if errors.contains(&field) { theme::STATUS_ERROR } else { theme::BORDER_DEFAULT };
    egui::Frame::new()
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, stroke))
        .corner_radius(theme::RADIUS_DEFAULT)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(theme::INPUT_WIDTH)
                    .margin(egui::Margin::symmetric(8, 6))
                    .frame(false),
            );
        });
    ui.add_space(theme::SPACING_MD);
}
