//! # File I/O Module
//!
//! Study files and single-case JSON:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility on load
//!
//! ## File Format
//!
//! Studies are saved as `.wlc` (wing load case) files containing pretty JSON.
//! A single case is a plain `.json` file holding [`WingParameters`]; results
//! are written the same way.
//!
//! ## Example
//!
//! ```rust,no_run
//! use spanload_core::file_io::{load_study, save_study};
//! use spanload_core::study::LoadStudy;
//! use std::path::Path;
//!
//! let study = LoadStudy::new("Engineer", "Aerobatic biplane");
//! let path = Path::new("biplane.wlc");
//!
//! save_study(&study, path).unwrap();
//! let loaded = load_study(path).unwrap();
//! assert_eq!(loaded.meta.aircraft, "Aerobatic biplane");
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::calculations::{CalculationResult, WingParameters};
use crate::errors::{CalcError, CalcResult};
use crate::study::{LoadStudy, SCHEMA_VERSION};

/// Extension used for study files
pub const STUDY_EXTENSION: &str = "wlc";

/// Serialize `value` to pretty JSON and write it atomically.
///
/// The save process:
/// 1. Write to a temporary file next to the target (`<ext>.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over the target (atomic on most filesystems)
fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CalcError::serialization(e.to_string()))?;

    let tmp_extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    let tmp_path = path.with_extension(tmp_extension);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!("wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}

/// Read a whole file into a string.
fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Save a study with atomic write semantics.
///
/// # Example
///
/// ```rust,no_run
/// use spanload_core::file_io::save_study;
/// use spanload_core::study::LoadStudy;
/// use std::path::Path;
///
/// let study = LoadStudy::new("Engineer", "Trainer");
/// save_study(&study, Path::new("trainer.wlc"))?;
/// # Ok::<(), spanload_core::errors::CalcError>(())
/// ```
pub fn save_study(study: &LoadStudy, path: &Path) -> CalcResult<()> {
    write_json_atomic(study, path)
}

/// Load a study from a `.wlc` file.
///
/// # Returns
///
/// * `Ok(LoadStudy)` - Successfully loaded study
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_study(path: &Path) -> CalcResult<LoadStudy> {
    let contents = read_to_string(path)?;

    let study: LoadStudy = serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&study.meta.version)?;
    debug!("loaded study with {} cases from {}", study.case_count(), path.display());

    Ok(study)
}

/// Load one case's parameters from a JSON file.
///
/// Only parsing happens here; the engine validates values when it runs.
pub fn load_parameters(path: &Path) -> CalcResult<WingParameters> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })
}

/// Save a calculation result as pretty JSON (atomic write).
pub fn save_result(result: &CalculationResult, path: &Path) -> CalcResult<()> {
    write_json_atomic(result, path)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<Vec<u32>> { v.split('.').map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version).ok_or_else(mismatch)?;
    let current_parts = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
