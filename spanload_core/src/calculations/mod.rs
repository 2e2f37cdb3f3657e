//! # Wing Load Calculations
//!
//! The spanwise load engine, one module per pipeline stage. The entry point
//! follows the usual pattern:
//!
//! - [`WingParameters`] / [`CalcOptions`] - inputs (JSON-serializable)
//! - [`CalculationResult`] - results (JSON-serializable)
//! - [`calculate`] - pure calculation function
//!
//! ## Stages
//!
//! - [`planform`] - chords and the shared station grid
//! - [`lift_distribution`] - Schrenk or constrained lift shape
//! - [`inertia`] - self-weight and point mass
//! - [`integration`] - tip-to-root shear and moment
//! - [`combination`] - limit and ultimate loads
//! - [`summary`] - headline values

pub mod combination;
pub mod inertia;
pub mod integration;
pub mod lift_distribution;
pub mod planform;
pub mod summary;
pub mod wing_load;

// Re-export commonly used types
pub use combination::{CombinedLoadPoint, ULTIMATE_FACTOR};
pub use inertia::PointMassPlacement;
pub use lift_distribution::{DistributionKind, LiftDistributionPoint};
pub use summary::LoadSummary;
pub use wing_load::{calculate, CalcOptions, CalculationResult, WingParameters};
