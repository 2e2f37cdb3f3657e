//! # Spanwise Lift Distribution
//!
//! Synthesizes the lift carried per foot of span at every station, scaled so
//! that its integral over the modeled half-span equals the required lift
//!
//! ```text
//! L_req = n · W_max + L_tail
//! ```
//!
//! The tail load is signed: a download (negative) reduces the lift the wing
//! must produce.
//!
//! ## Shapes
//!
//! - [`DistributionKind::Elliptic`]: Schrenk's approximation. The working
//!   shape is the mean of the true chord and the chord of a half-ellipse with
//!   the same area.
//! - [`DistributionKind::Constrained`]: bell-shaped loading `(1 - η²)^p`,
//!   the minimum-induced-drag family for a fixed lift and a fixed integrated
//!   bending moment (structural weight). `p` defaults to 1.5.
//!
//! Both shapes are normalized with one constant `k = L_req / ∫raw`, using the
//! same trapezoidal rule the integrator uses.
//!
//! ## Example
//!
//! ```rust
//! use spanload_core::calculations::lift_distribution::{synthesize, DistributionKind};
//! use spanload_core::calculations::planform::{Planform, StationGrid};
//!
//! let planform = Planform::new(19.0, 66.5, 0.4).unwrap();
//! let grid = StationGrid::new(planform.span_ft, 81).unwrap();
//! let lift = synthesize(&grid, &planform, DistributionKind::Elliptic, 4850.0, 1.5).unwrap();
//!
//! assert!((lift.integral(grid.spacing_ft()) - 4850.0).abs() < 1e-6);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::integration::integrate_trapezoid;
use super::planform::{Planform, StationGrid};
use crate::errors::{CalcError, CalcResult};

/// Default exponent for the constrained (bell) shape
pub const DEFAULT_CONSTRAINED_EXPONENT: f64 = 1.5;

/// Which lift shape to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    /// Schrenk blend of the true chord and the area-matched ellipse
    #[default]
    #[serde(alias = "schrenk")]
    Elliptic,
    /// Bell-shaped loading for fixed lift and fixed bending moment
    Constrained,
}

impl DistributionKind {
    /// All selectable shapes
    pub const ALL: [DistributionKind; 2] = [DistributionKind::Elliptic, DistributionKind::Constrained];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DistributionKind::Elliptic => "Elliptic (Schrenk)",
            DistributionKind::Constrained => "Constrained (bell)",
        }
    }

    /// Short code, also the accepted string form
    pub fn code(&self) -> &'static str {
        match self {
            DistributionKind::Elliptic => "elliptic",
            DistributionKind::Constrained => "constrained",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for DistributionKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elliptic" | "schrenk" => Ok(DistributionKind::Elliptic),
            "constrained" => Ok(DistributionKind::Constrained),
            other => Err(CalcError::invalid_input(
                "distribution",
                other,
                "Expected 'elliptic' (or 'schrenk') or 'constrained'",
            )),
        }
    }
}

/// Lift shape and diagnostics at one station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftDistributionPoint {
    /// Wing station (in)
    pub station_in: f64,
    /// Distance outboard of centerline (ft)
    pub y_ft: f64,
    /// True chord from the linear taper (ft)
    pub chord_ft: f64,
    /// Chord of the area-matched half-ellipse (ft)
    pub ellipse_chord_ft: f64,
    /// Normalized lift per unit span (lb/ft); this is what gets integrated
    pub shape_lb_per_ft: f64,
    /// Shape divided by chord, relative to its spanwise mean.
    ///
    /// Values above 1 mark stations where the section works harder than
    /// average. Display only.
    pub local_cl_index: f64,
}

/// A normalized lift distribution over a station grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftDistribution {
    /// Shape that was synthesized
    pub kind: DistributionKind,
    /// Lift the shape integrates to (lb)
    pub required_lift_lb: f64,
    /// Constant applied to the raw shape
    pub normalization: f64,
    /// Per-station values, tip first
    pub points: Vec<LiftDistributionPoint>,
}

impl LiftDistribution {
    /// Lift per unit span at each station (lb/ft)
    pub fn shape_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.shape_lb_per_ft).collect()
    }

    /// Integral of the shape over the half-span (lb)
    pub fn integral(&self, spacing_ft: f64) -> f64 {
        integrate_trapezoid(&self.shape_values(), spacing_ft)
    }

    /// Index of the station with the highest local lift index
    pub fn peak_local_cl_index(&self) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.local_cl_index.total_cmp(&b.1.local_cl_index))
            .map(|(i, _)| i)
    }
}

/// Required wing lift `n · W + L_tail` (lb)
pub fn required_lift_lb(load_factor: f64, max_weight_lb: f64, tail_load_lb: f64) -> f64 {
    load_factor * max_weight_lb + tail_load_lb
}

/// Un-normalized shape value at every station
fn raw_shape(
    grid: &StationGrid,
    planform: &Planform,
    kind: DistributionKind,
    constrained_exponent: f64,
) -> Vec<f64> {
    match kind {
        DistributionKind::Elliptic => grid
            .stations()
            .iter()
            .map(|s| (planform.chord_at_eta(s.eta) + planform.ellipse_chord_at_eta(s.eta)) / 2.0)
            .collect(),
        DistributionKind::Constrained => grid
            .stations()
            .iter()
            .map(|s| (1.0 - s.eta * s.eta).max(0.0).powf(constrained_exponent))
            .collect(),
    }
}

/// Build the normalized lift distribution.
///
/// # Errors
///
/// * `CalcError::InvalidInput` - non-finite required lift or a bad exponent
/// * `CalcError::DegenerateNormalization` - the raw shape integrates to zero
///   or a station has no chord
pub fn synthesize(
    grid: &StationGrid,
    planform: &Planform,
    kind: DistributionKind,
    required_lift_lb: f64,
    constrained_exponent: f64,
) -> CalcResult<LiftDistribution> {
    if !required_lift_lb.is_finite() {
        return Err(CalcError::invalid_input(
            "required_lift_lb",
            required_lift_lb.to_string(),
            "Required lift must be finite",
        ));
    }
    if kind == DistributionKind::Constrained
        && (!constrained_exponent.is_finite() || constrained_exponent <= 0.0)
    {
        return Err(CalcError::invalid_input(
            "constrained_exponent",
            constrained_exponent.to_string(),
            "Exponent must be positive",
        ));
    }

    let spacing = grid.spacing_ft();
    let raw = raw_shape(grid, planform, kind, constrained_exponent);
    let raw_integral = integrate_trapezoid(&raw, spacing);
    if !raw_integral.is_finite() || raw_integral.abs() < f64::EPSILON {
        return Err(CalcError::degenerate_normalization(
            kind.code(),
            format!("raw shape integrates to {raw_integral}"),
        ));
    }
    let normalization = required_lift_lb / raw_integral;

    let chords = grid.chords(planform);
    if let Some(i) = chords.iter().position(|c| !(c.is_finite() && *c > 0.0)) {
        return Err(CalcError::degenerate_normalization(
            kind.code(),
            format!("chord at station {:.2} in is {}", grid.stations()[i].station_in, chords[i]),
        ));
    }

    let shape: Vec<f64> = raw.iter().map(|r| r * normalization).collect();
    let per_chord: Vec<f64> = shape.iter().zip(&chords).map(|(s, c)| s / c).collect();
    let mean_per_chord = integrate_trapezoid(&per_chord, spacing) / grid.semi_span_ft();

    let points = grid
        .stations()
        .iter()
        .zip(shape.iter().zip(per_chord.iter().zip(&chords)))
        .map(|(station, (&shape_lb_per_ft, (&cl, &chord_ft)))| LiftDistributionPoint {
            station_in: station.station_in,
            y_ft: station.y_ft,
            chord_ft,
            ellipse_chord_ft: planform.ellipse_chord_at_eta(station.eta),
            shape_lb_per_ft,
            local_cl_index: if mean_per_chord.abs() > f64::EPSILON {
                cl / mean_per_chord
            } else {
                0.0
            },
        })
        .collect();

    Ok(LiftDistribution {
        kind,
        required_lift_lb,
        normalization,
        points,
    })
}
