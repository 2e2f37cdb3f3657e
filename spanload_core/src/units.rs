//! # Unit Types
//!
//! Lightweight newtype wrappers for the units the load engine moves between.
//! Public input and output structs keep plain `f64` fields with a unit suffix
//! (`span_ft`, `moment_ftlb`) for clean JSON; these wrappers are used where a
//! value crosses from one unit to another.
//!
//! ## Conventions
//!
//! - Span, chord, spanwise position: feet (ft)
//! - Wing stations (point mass, root): inches outboard of centerline (in)
//! - Weight, lift, shear: pounds (lb)
//! - Bending moment: foot-pounds (ft-lb)
//! - Running load: pounds per foot of span (lb/ft)
//! - Wing loading, dynamic pressure: pounds per square foot (psf)
//!
//! ## Example
//!
//! ```rust
//! use spanload_core::units::{Feet, Inches};
//!
//! let semi_span = Feet(9.5);
//! let tip_station: Inches = semi_span.into();
//! assert_eq!(tip_station.0, 114.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Force and Moment Units
// ============================================================================

/// Force in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Moment in foot-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FtLb(pub f64);

/// Moment in inch-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InLb(pub f64);

impl From<FtLb> for InLb {
    fn from(ftlb: FtLb) -> Self {
        InLb(ftlb.0 * 12.0)
    }
}

impl From<InLb> for FtLb {
    fn from(inlb: InLb) -> Self {
        FtLb(inlb.0 / 12.0)
    }
}

/// Running load in pounds per foot of span
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LbPerFt(pub f64);

impl Div<Feet> for Pounds {
    type Output = LbPerFt;
    fn div(self, rhs: Feet) -> LbPerFt {
        LbPerFt(self.0 / rhs.0)
    }
}

// ============================================================================
// Area and Pressure Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Pressure (or wing loading) in pounds per square foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

impl Div<SqFt> for Pounds {
    type Output = Psf;
    fn div(self, rhs: SqFt) -> Psf {
        Psf(self.0 / rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Pounds);
impl_arithmetic!(FtLb);
impl_arithmetic!(InLb);
impl_arithmetic!(LbPerFt);
impl_arithmetic!(SqFt);
impl_arithmetic!(Psf);
