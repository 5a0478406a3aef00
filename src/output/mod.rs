//! Output module
//!
//! Renders analysis results and snapshot inventories, and writes them out.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Rendering reports as JSON, YAML or human-readable tables
//! - Listing the stores of a snapshot without analyzing them
//! - Writing reports to stdout or to a file

mod render;
mod writer;

pub use render::{
    inventory, render_inventory, render_report, InventoryEntry, RenderOptions, ReportFormat,
};
pub use writer::write_report;
