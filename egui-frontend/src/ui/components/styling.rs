//! # Styling Module
//!
//! This module contains all styling functions and color constants for the
//! expense tracker app.
//!
//! ## Key Functions:
//! - `setup_app_style()` - Configure global egui styling
//! - `table_header_color()` - Get colors for the log table headers
//! - `draw_header_cell_background()` - Solid fill behind a header cell
//!
//! ## Color Palette:
//! The colors module contains all the color constants used throughout the
//! app:
//! - Income green and expense crimson for log rows and amounts
//! - Neutral grays for text
//! - A pink-to-purple band across the log table headers
//!
//! ## Purpose:
//! This module ensures visual consistency and provides a centralized place
//! for all styling concerns.

use eframe::egui;
use egui::Color32;

/// Setup UI styling for the entire application
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.button_frame = true;

        // In egui 0.28, text edits use extreme_bg_color (not text_edit_bg_color
        // which was added later); without this the fields blend into the panel
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(248, 248, 248);

        // Larger text for readability
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Color constants for the app theme
pub mod colors {
    use eframe::egui::Color32;

    // Transaction colors
    pub const INCOME: Color32 = Color32::from_rgb(34, 139, 34); // Green
    pub const EXPENSE: Color32 = Color32::from_rgb(220, 20, 60); // Crimson

    // Typography
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(60, 60, 60);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(90, 90, 90);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(130, 130, 130);
    pub const TEXT_ERROR: Color32 = Color32::from_rgb(220, 50, 50);

    // Form accents
    pub const SUBMIT_ENABLED: Color32 = Color32::from_rgb(79, 109, 245);
    pub const SUBMIT_DISABLED: Color32 = Color32::from_rgb(180, 180, 180);
    pub const COUNTER_WARNING: Color32 = Color32::from_rgb(255, 140, 0);

    // Log table header gradient endpoints
    pub const TABLE_HEADER_START: Color32 = Color32::from_rgb(255, 182, 193); // Light pink
    pub const TABLE_HEADER_END: Color32 = Color32::from_rgb(186, 85, 211); // Purple
}

/// Get the header band color for a log table column.
/// Interpolates pink to purple across the five columns.
pub fn table_header_color(header_index: usize) -> egui::Color32 {
    let t = (header_index as f32) / 4.0;

    let pink = colors::TABLE_HEADER_START;
    let purple = colors::TABLE_HEADER_END;

    Color32::from_rgb(
        (pink.r() as f32 * (1.0 - t) + purple.r() as f32 * t) as u8,
        (pink.g() as f32 * (1.0 - t) + purple.g() as f32 * t) as u8,
        (pink.b() as f32 * (1.0 - t) + purple.b() as f32 * t) as u8,
    )
}

/// Draw a solid background behind a log table header cell
pub fn draw_header_cell_background(ui: &mut egui::Ui, rect: egui::Rect, color: egui::Color32) {
    ui.painter().rect_filled(rect, egui::Rounding::ZERO, color);
}
