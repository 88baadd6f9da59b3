//! Utility functions for error handling
//!
//! File access helpers that report the path and the purpose of the access
//! when something goes wrong.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, SalaryError};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(
            SalaryError::io_error(format!("File not found, needed for {purpose}")).with_path(path),
        );
    }

    if !path.is_file() {
        return Err(
            SalaryError::io_error(format!("Path is not a file, expected one for {purpose}"))
                .with_path(path),
        );
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to open file for {purpose}"),
        };
        SalaryError::io_error_with_source(context, e).with_path(path)
    })
}

/// Create (or truncate) a file for writing, creating parent directories
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                SalaryError::io_error_with_source(
                    format!("Failed to create directory for {purpose}"),
                    e,
                )
                .with_path(parent)
            })?;
        }
    }

    fs::File::create(path).map_err(|e| {
        SalaryError::io_error_with_source(format!("Failed to create file for {purpose}"), e)
            .with_path(path)
    })
}
