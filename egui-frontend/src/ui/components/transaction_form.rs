//! # Transaction Form
//!
//! This module contains the transaction entry form.
//!
//! ## Responsibilities:
//! - Field rendering with inline, per-field validation errors
//! - Live character counter for the description
//! - Category selection with conditional subcategory visibility
//! - Submission gating and the submit action
//!
//! ## Purpose:
//! Everything here binds to `TransactionFormState`; accepting or rejecting a
//! submission is the backend's call. The subcategory selector appears exactly
//! while the selected category is Expense and disappears otherwise.

use eframe::egui;
use shared::{ExpenseCategory, TransactionCategory};

use crate::backend::domain::validation::MAX_DESCRIPTION_LEN;
use crate::ui::app_state::ExpenseTrackerApp;
use crate::ui::components::styling::colors;

impl ExpenseTrackerApp {
    /// Render the transaction entry form
    pub fn render_transaction_form(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("➕ New Transaction")
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.add_space(8.0);

                let mut fields_changed = false;

                // Description label with character count
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Description:")
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_PRIMARY),
                    );

                    let char_count = self.transaction_form.description.chars().count();
                    let count_color = if char_count > MAX_DESCRIPTION_LEN {
                        colors::TEXT_ERROR // Red if over limit
                    } else if char_count > (MAX_DESCRIPTION_LEN * 4 / 5) {
                        colors::COUNTER_WARNING // Orange if approaching limit (80%)
                    } else {
                        colors::TEXT_MUTED // Gray for normal
                    };

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{}/{}", char_count, MAX_DESCRIPTION_LEN))
                                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                                .color(count_color),
                        );
                    });
                });

                // Description field
                let description_response = ui.add(
                    egui::TextEdit::singleline(&mut self.transaction_form.description)
                        .hint_text("What was this for?")
                        .desired_width(f32::INFINITY)
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional)),
                );
                fields_changed |= description_response.changed();

                // Show description error message
                if let Some(error) = &self.transaction_form.description_error {
                    ui.add_space(3.0);
                    ui.label(
                        egui::RichText::new(error)
                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_ERROR),
                    );
                }

                ui.add_space(8.0);

                // Amount input with static dollar sign
                ui.label(
                    egui::RichText::new("Amount:")
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_PRIMARY),
                );
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("$")
                            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_PRIMARY),
                    );

                    ui.add_space(2.0);

                    let amount_response = ui.add(
                        egui::TextEdit::singleline(&mut self.transaction_form.amount_text)
                            .hint_text("0.00")
                            .desired_width(120.0)
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional)),
                    );
                    fields_changed |= amount_response.changed();
                });

                // Show amount error message
                if let Some(error) = &self.transaction_form.amount_error {
                    ui.add_space(3.0);
                    ui.label(
                        egui::RichText::new(error)
                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_ERROR),
                    );
                }

                // Validate form whenever fields change
                if fields_changed {
                    self.transaction_form.validate();
                }

                ui.add_space(8.0);

                // Category selectors. The expense subcategory only exists
                // while Expense is selected.
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Category:")
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_PRIMARY),
                    );

                    egui::ComboBox::from_id_source("transaction_category")
                        .width(130.0)
                        .selected_text(self.transaction_form.category.label())
                        .show_ui(ui, |ui| {
                            for category in TransactionCategory::ALL {
                                ui.selectable_value(
                                    &mut self.transaction_form.category,
                                    category,
                                    category.label(),
                                );
                            }
                        });

                    if self.transaction_form.shows_expense_categories() {
                        ui.add_space(12.0);

                        ui.label(
                            egui::RichText::new("Expense category:")
                                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                .color(colors::TEXT_SECONDARY),
                        );

                        egui::ComboBox::from_id_source("expense_category")
                            .width(150.0)
                            .selected_text(self.transaction_form.expense_category.label())
                            .show_ui(ui, |ui| {
                                for category in ExpenseCategory::ALL {
                                    ui.selectable_value(
                                        &mut self.transaction_form.expense_category,
                                        category,
                                        category.label(),
                                    );
                                }
                            });
                    }
                });

                ui.add_space(12.0);

                // Submit button
                let button_enabled = self.transaction_form.can_submit();

                let button_color = if button_enabled {
                    colors::SUBMIT_ENABLED
                } else {
                    colors::SUBMIT_DISABLED // Gray when disabled
                };

                let submit_button = egui::Button::new(
                    egui::RichText::new("Add Transaction")
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                        .color(egui::Color32::WHITE),
                )
                .fill(button_color)
                .stroke(egui::Stroke::new(2.0, button_color))
                .rounding(egui::Rounding::same(10.0))
                .min_size(egui::vec2(170.0, 36.0));

                let submit_response = ui.add(submit_button);

                if submit_response.clicked() && button_enabled {
                    self.submit_transaction();
                }

                // Show tooltip for disabled button
                if !button_enabled && submit_response.hovered() {
                    submit_response.on_hover_text("Please fix the errors above to continue");
                }
            });
        });
    }
}
