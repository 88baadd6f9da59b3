//! Shared helpers
//!
//! Logging helpers keep log messages uniform across loading, export and the
//! command line tool.

pub mod logging;
