//! # spanload_core - Spanwise Wing Load Engine
//!
//! `spanload_core` computes the spanwise lift distribution of a tapered wing
//! and the shear-force and bending-moment diagrams it produces together with
//! the wing's own weight and a point mass, at limit and ultimate load.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Fail Fast**: Invalid input is rejected before any station is computed
//!
//! ## Quick Start
//!
//! ```rust
//! use spanload_core::calculations::{calculate, CalcOptions, DistributionKind, WingParameters};
//!
//! let params = WingParameters::default();
//! let result = calculate(&params, DistributionKind::Elliptic, &CalcOptions::default()).unwrap();
//!
//! let json = serde_json::to_string_pretty(&result.summary).unwrap();
//! assert!(json.contains("root_ultimate_moment_ftlb"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The load pipeline and its entry point
//! - [`study`] - A set of named load cases with shared settings
//! - [`units`] - Unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Study and case files with atomic saves

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod study;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalcOptions, CalculationResult, DistributionKind, WingParameters};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_parameters, load_study, save_result, save_study};
pub use study::{LoadCaseInput, LoadStudy, StudyMetadata, StudySettings};
