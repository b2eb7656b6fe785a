//! # Header Module
//!
//! This module handles rendering the application header with the running
//! balance display.
//!
//! ## Key Functions:
//! - `render_header()` - Main header rendering with title and balance
//!
//! ## Purpose:
//! The balance is the one number the whole app maintains, so it lives in the
//! header where it stays visible no matter how long the log below grows.

use eframe::egui;
use shared::format_currency;

use crate::ui::app_state::ExpenseTrackerApp;
use crate::ui::components::styling::colors;

impl ExpenseTrackerApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        // Create a frame with translucent background
        let frame = egui::Frame::none()
            .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 30))
            .inner_margin(egui::Margin::symmetric(10.0, 10.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                // Title - disable text selection
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Expense Tracker")
                            .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );

                // Flexible space to push the balance to the right
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Balance with clean styling (no color coding) - disable text selection
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format_currency(self.current_balance))
                                .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );

                    ui.add_space(6.0);

                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Balance:")
                                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                                .color(colors::TEXT_SECONDARY),
                        )
                        .selectable(false),
                    );
                });
            });
        });
    }
}
