use eframe::egui;
use log::info;

mod backend;
mod ui;

use ui::app_state::ExpenseTrackerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Expense Tracker egui application");

    // Window sized for the entry form plus a comfortable stretch of log rows
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 740.0])
            .with_min_inner_size([720.0, 540.0]) // Minimum usable size
            .with_title("Expense Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    // Run the application
    info!("Launching egui window");
    eframe::run_native(
        "Expense Tracker",
        options,
        Box::new(|cc| {
            // Persistence only covers window state; the ledger itself is
            // in-memory and starts empty on every launch
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            Ok(Box::new(ExpenseTrackerApp::new()))
        }),
    )
}
