//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the
//! primary update loop.
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Main application update loop (implements eframe::App trait)
//! - `render_messages()` - Error and success banners below the header
//!
//! ## Purpose:
//! This module serves as the central coordinator for the entire application,
//! orchestrating:
//! - UI styling setup
//! - Message banner expiry
//! - Header rendering
//! - Main content rendering (form above, log below)
//!
//! ## Application Flow:
//! 1. Set up application styling
//! 2. Expire stale message banners
//! 3. Render header with the running balance
//! 4. Render any active banners
//! 5. Render the entry form and the transaction log
//!
//! This is the main entry point that ties together all other UI modules.

use eframe::egui;

use crate::ui::app_state::ExpenseTrackerApp;
use crate::ui::*;

impl eframe::App for ExpenseTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_app_style(ctx);

        // Banners clear themselves after a few seconds; keep repainting
        // while one is up so the expiry check actually runs
        self.expire_stale_messages();
        if self.error_message.is_some() || self.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);

            ui.separator();

            self.render_messages(ui);

            self.render_main_content(ui);
        });
    }
}

impl ExpenseTrackerApp {
    /// Render error and success messages
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        use crate::ui::components::styling::colors;

        if let Some(error) = &self.error_message {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
        }

        if let Some(success) = &self.success_message {
            ui.colored_label(colors::INCOME, format!("✅ {}", success));
        }
    }

    /// Render the main content area: entry form above, log below
    fn render_main_content(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        self.render_transaction_form(ui);

        ui.add_space(10.0);
        self.render_transaction_log(ui);
    }
}
