//! # UI Components Module
//!
//! This module organizes all UI components for the expense tracker
//! application. Each submodule handles a specific aspect of the interface.
//!
//! ## Module Organization:
//! - `styling` - Visual styling, colors, and global egui style setup
//! - `header` - Application header with the running balance display
//! - `transaction_form` - Transaction entry form with inline validation
//! - `transaction_log` - Rendered log of accepted transactions
//!
//! ## Architecture:
//! The components are organized to promote reusability and maintainability.
//! Each module has a clear responsibility and minimal dependencies on others.

pub mod header;
pub mod styling;
pub mod transaction_form;
pub mod transaction_log;

pub use styling::{setup_app_style, table_header_color};
