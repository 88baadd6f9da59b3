//! Logging utilities for output
//!
//! This module provides utilities for logging and console output.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use self::console::{print_filter_options, print_report_summary};
pub use self::log::{log_operation_complete, log_operation_start, log_warning};
