//! # Tip-to-Root Load Integration
//!
//! Shear and bending moment from a running load by cumulative trapezoidal
//! integration over the station grid.
//!
//! ## Direction
//!
//! Integration runs in grid index order, which is tip (index 0) to root.
//! The free tip carries no shear and no moment, so both series start at
//! exactly zero and accumulate inboard.
//!
//! ```text
//! V[0] = 0
//! V⁻[i] = V[i-1] + (w[i-1] + w[i]) / 2 · Δy
//! V[i] = V⁻[i] + P[i]
//! M[0] = 0
//! M[i] = M[i-1] + (V[i-1] + V⁻[i]) / 2 · Δy
//! ```
//!
//! `P[i]` is a concentrated force applied at station `i` (for example a point
//! mass). It shows up as a step in shear at its station and does not affect
//! anything outboard of it. The bay ending at `i` integrates the shear just
//! outboard of the step, so the force adds no moment at its own station.
//!
//! The tip entries stay exactly zero. A force sitting on the tip station acts
//! over the whole first bay: it is taken as `V[0]` when integrating bay 0→1
//! and so appears in `V[1]` onwards.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Shear and moment series over the station grid (tip first)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadDiagram {
    /// Shear force at each station (lb)
    pub shear_lb: Vec<f64>,
    /// Bending moment at each station (ft-lb)
    pub moment_ftlb: Vec<f64>,
}

impl LoadDiagram {
    /// Number of stations in the diagram
    pub fn len(&self) -> usize {
        self.shear_lb.len()
    }

    /// True when the diagram holds no stations
    pub fn is_empty(&self) -> bool {
        self.shear_lb.is_empty()
    }
}

/// Definite integral of equally spaced samples by the trapezoidal rule.
///
/// Uses the same rule as [`integrate_tip_to_root`], so the root shear of a
/// running load equals this integral.
pub fn integrate_trapezoid(values: &[f64], spacing: f64) -> f64 {
    values
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) / 2.0 * spacing)
        .sum()
}

/// Integrate a running load (lb/ft) from tip to root.
///
/// # Arguments
///
/// * `running_load` - Load per unit span at each station, tip first
/// * `point_forces` - Optional concentrated force at each station (lb)
/// * `spacing_ft` - Station spacing
///
/// # Errors
///
/// Returns `CalcError::Internal` if the series lengths disagree, and
/// `CalcError::InvalidInput` for fewer than two stations or a bad spacing.
pub fn integrate_tip_to_root(
    running_load: &[f64],
    point_forces: Option<&[f64]>,
    spacing_ft: f64,
) -> CalcResult<LoadDiagram> {
    let n = running_load.len();
    if n < 2 {
        return Err(CalcError::invalid_input(
            "stations",
            n.to_string(),
            "At least two stations are needed to integrate",
        ));
    }
    if !spacing_ft.is_finite() || spacing_ft <= 0.0 {
        return Err(CalcError::invalid_input(
            "spacing_ft",
            spacing_ft.to_string(),
            "Station spacing must be positive",
        ));
    }
    if let Some(forces) = point_forces {
        if forces.len() != n {
            return Err(CalcError::Internal {
                message: format!(
                    "point force series has {} stations, running load has {}",
                    forces.len(),
                    n
                ),
            });
        }
    }

    let force_at = |i: usize| point_forces.map_or(0.0, |f| f[i]);

    let mut shear_lb = Vec::with_capacity(n);
    let mut moment_ftlb = Vec::with_capacity(n);
    shear_lb.push(0.0);
    moment_ftlb.push(0.0);

    for i in 1..n {
        // Shear just inboard of station i-1; the tip force acts from the tip on
        let outboard = if i == 1 { force_at(0) } else { shear_lb[i - 1] };
        // Shear just outboard of station i, before its own step
        let inboard = outboard + (running_load[i - 1] + running_load[i]) / 2.0 * spacing_ft;
        let v = inboard + force_at(i);
        let m = moment_ftlb[i - 1] + (outboard + inboard) / 2.0 * spacing_ft;
        shear_lb.push(v);
        moment_ftlb.push(m);
    }

    Ok(LoadDiagram {
        shear_lb,
        moment_ftlb,
    })
}
