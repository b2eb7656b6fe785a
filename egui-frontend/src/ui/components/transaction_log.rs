//! # Transaction Log
//!
//! This module renders the log of accepted transactions, most recent first.
//!
//! ## Key Functions:
//! - `render_transaction_log()` - Log section with heading and empty state
//! - `render_log_table()` - The table itself
//!
//! ## Purpose:
//! The log is display-only: rows cannot be edited or removed, and every row
//! shows the amount with its sign, the category chip, and the balance after
//! that transaction. Expenses also carry their subcategory under the
//! description.

use chrono::DateTime;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{format_currency, LogEntry};

use crate::ui::app_state::ExpenseTrackerApp;
use crate::ui::components::styling::{colors, draw_header_cell_background, table_header_color};

const HEADERS: [&str; 5] = ["DATE", "CATEGORY", "AMOUNT", "DESCRIPTION", "BALANCE"];

impl ExpenseTrackerApp {
    /// Render the transaction log section
    pub fn render_transaction_log(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("📋 Transaction Log")
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.add_space(6.0);

                if self.log_entries.is_empty() {
                    ui.label("No transactions yet!");
                    return;
                }

                render_log_table(ui, &self.log_entries);
            });
        });
    }
}

/// Render the transaction log table, newest entry in the top row
pub fn render_log_table(ui: &mut egui::Ui, entries: &[LogEntry]) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(130.0)) // DATE column
        .column(Column::exact(100.0)) // CATEGORY column
        .column(Column::exact(100.0)) // AMOUNT column
        .column(Column::remainder()) // DESCRIPTION column
        .column(Column::exact(100.0)) // BALANCE column
        .header(36.0, |mut header| {
            for (index, title) in HEADERS.iter().enumerate() {
                header.col(|ui| {
                    let rect = ui.max_rect();
                    draw_header_cell_background(ui, rect, table_header_color(index));

                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.colored_label(
                                egui::Color32::WHITE,
                                egui::RichText::new(*title)
                                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                                    .strong(),
                            );
                        },
                    );
                });
            }
        })
        .body(|mut body| {
            for entry in entries {
                // Expense rows get a second line for the subcategory
                let row_height = if entry.expense_category.is_some() {
                    52.0
                } else {
                    45.0
                };

                body.row(row_height, |mut row| {
                    // Date column
                    row.col(|ui| {
                        ui.with_layout(
                            egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(format_entry_date(&entry.date))
                                        .font(egui::FontId::new(
                                            13.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .color(colors::TEXT_SECONDARY),
                                );
                            },
                        );
                    });

                    // Category column with color coding
                    row.col(|ui| {
                        let (label, color) = if entry.is_income() {
                            ("INCOME", colors::INCOME)
                        } else {
                            ("EXPENSE", colors::EXPENSE)
                        };
                        ui.with_layout(
                            egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                            |ui| {
                                ui.colored_label(
                                    color,
                                    egui::RichText::new(label)
                                        .font(egui::FontId::new(
                                            13.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .strong(),
                                );
                            },
                        );
                    });

                    // Amount column with sign and color coding
                    row.col(|ui| {
                        let signed = entry.signed_amount();
                        ui.with_layout(
                            egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                            |ui| {
                                if signed >= 0.0 {
                                    ui.colored_label(
                                        colors::INCOME, // Green for positive
                                        egui::RichText::new(format!(
                                            "+{}",
                                            format_currency(signed)
                                        ))
                                        .font(egui::FontId::new(
                                            14.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .strong(),
                                    );
                                } else {
                                    ui.colored_label(
                                        colors::EXPENSE, // Red for negative
                                        egui::RichText::new(format!(
                                            "-{}",
                                            format_currency(signed.abs())
                                        ))
                                        .font(egui::FontId::new(
                                            14.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .strong(),
                                    );
                                }
                            },
                        );
                    });

                    // Description column, with the subcategory underneath for
                    // expenses
                    row.col(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(&entry.description)
                                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                    .strong()
                                    .color(colors::TEXT_PRIMARY),
                            );
                            if let Some(category) = entry.expense_category {
                                ui.label(
                                    egui::RichText::new(format!("Category: {}", category.label()))
                                        .font(egui::FontId::new(
                                            11.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .color(colors::TEXT_MUTED),
                                );
                            }
                        });
                    });

                    // Balance column
                    row.col(|ui| {
                        ui.with_layout(
                            egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(format_currency(entry.balance))
                                        .font(egui::FontId::new(
                                            14.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .strong()
                                        .color(colors::TEXT_PRIMARY),
                                );
                            },
                        );
                    });
                });
            }
        });
}

/// Shorten an RFC 3339 timestamp for the date column
fn format_entry_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%b %d, %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
