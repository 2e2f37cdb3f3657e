//! # Inertia Loads
//!
//! Wing self-weight and a concentrated point mass (landing gear, fuel tank,
//! store) as loads opposing lift.
//!
//! - Self-weight is spread **uniformly per unit span**:
//!   `w = -W_side / (b/2)` lb/ft at every station.
//! - The point mass is a concentrated force of `-W_pm` at the grid station
//!   nearest its wing station. Through the integrator it appears as a step in
//!   shear at that station and everywhere inboard, never outboard.
//!
//! Loads are at 1 g: the point-mass step in the shear diagram equals the
//! point-mass weight.

use log::warn;
use serde::{Deserialize, Serialize};

use super::planform::StationGrid;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Feet, Pounds};

/// Where the point mass was actually applied.
///
/// A station off the half-span is clamped to the nearest end rather than
/// dropped; `clamped` tells the caller that happened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMassPlacement {
    /// Wing station from the input (in)
    pub requested_station_in: f64,
    /// Grid station the weight was applied at (in)
    pub applied_station_in: f64,
    /// Grid index the weight was applied at.
    ///
    /// Index 0 is the free tip, where shear is zero by definition: a mass
    /// placed there acts over the whole first bay, so its shear step first
    /// shows at index 1 while its moment arm is still measured from the tip.
    pub station_index: usize,
    /// True when the requested station was outside `[0, b/2]`
    pub clamped: bool,
}

/// Inertia loads over the station grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InertiaLoads {
    /// Distributed self-weight at each station (lb/ft, negative)
    pub running_load_lb_per_ft: Vec<f64>,
    /// Concentrated forces at each station (lb, negative)
    pub point_forces_lb: Vec<f64>,
    /// Placement of the point mass
    pub point_mass: PointMassPlacement,
}

/// Build self-weight and point-mass loads for one wing side.
///
/// # Errors
///
/// `CalcError::InvalidInput` for a negative or non-finite weight, or a
/// non-finite point-mass station.
pub fn build(
    grid: &StationGrid,
    wing_weight_per_side_lb: f64,
    point_mass_lb: f64,
    point_mass_station_in: f64,
) -> CalcResult<InertiaLoads> {
    if !wing_weight_per_side_lb.is_finite() || wing_weight_per_side_lb < 0.0 {
        return Err(CalcError::invalid_input(
            "wing_weight_per_side_lb",
            wing_weight_per_side_lb.to_string(),
            "Wing weight cannot be negative",
        ));
    }
    if !point_mass_lb.is_finite() || point_mass_lb < 0.0 {
        return Err(CalcError::invalid_input(
            "point_mass_lb",
            point_mass_lb.to_string(),
            "Point mass cannot be negative",
        ));
    }
    if !point_mass_station_in.is_finite() {
        return Err(CalcError::invalid_input(
            "point_mass_station_in",
            point_mass_station_in.to_string(),
            "Point mass station must be finite",
        ));
    }

    let n = grid.len();
    let running = (Pounds(-wing_weight_per_side_lb) / Feet(grid.semi_span_ft())).value();
    let running_load_lb_per_ft = vec![running; n];

    let (_, clamped) = grid.clamp_station_in(point_mass_station_in);
    let station_index = grid.nearest_index(point_mass_station_in);
    let applied_station_in = grid.stations()[station_index].station_in;
    if clamped {
        warn!(
            "point mass station {:.2} in is outside 0..{:.2} in; applied at {:.2} in",
            point_mass_station_in,
            grid.semi_span_in(),
            applied_station_in
        );
    }

    let mut point_forces_lb = vec![0.0; n];
    point_forces_lb[station_index] = -point_mass_lb;

    Ok(InertiaLoads {
        running_load_lb_per_ft,
        point_forces_lb,
        point_mass: PointMassPlacement {
            requested_station_in: point_mass_station_in,
            applied_station_in,
            station_index,
            clamped,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::integration::integrate_trapezoid;

    fn grid() -> StationGrid {
        StationGrid::new(19.0, 81).unwrap()
    }

    #[test]
    fn test_self_weight_integrates_to_side_weight() {
        let g = grid();
        let loads = build(&g, 74.0, 0.0, 30.0).unwrap();
        let total = integrate_trapezoid(&loads.running_load_lb_per_ft, g.spacing_ft());
        assert!((total + 74.0).abs() < 1e-9);
        assert!(loads.running_load_lb_per_ft.iter().all(|w| *w < 0.0));
    }

    #[test]
    fn test_point_mass_at_nearest_station() {
        let g = grid();
        let loads = build(&g, 74.0, 25.0, 30.0).unwrap();
        assert_eq!(loads.point_mass.station_index, 59);
        assert!(!loads.point_mass.clamped);
        assert!((loads.point_mass.applied_station_in - 29.925).abs() < 1e-9);
        assert_eq!(loads.point_forces_lb[59], -25.0);
        assert_eq!(loads.point_forces_lb.iter().filter(|f| **f != 0.0).count(), 1);
    }

    #[test]
    fn test_point_mass_clamped_outboard() {
        let g = grid();
        let loads = build(&g, 74.0, 25.0, 150.0).unwrap();
        assert!(loads.point_mass.clamped);
        assert_eq!(loads.point_mass.requested_station_in, 150.0);
        assert_eq!(loads.point_mass.station_index, 0);
        assert!((loads.point_mass.applied_station_in - 114.0).abs() < 1e-9);
        assert_eq!(loads.point_forces_lb[0], -25.0);
    }

    #[test]
    fn test_tip_placement_loads_first_bay() {
        use crate::calculations::integration::integrate_tip_to_root;

        let g = grid();
        let loads = build(&g, 0.0, 25.0, 150.0).unwrap();
        let diagram = integrate_tip_to_root(
            &loads.running_load_lb_per_ft,
            Some(&loads.point_forces_lb),
            g.spacing_ft(),
        )
        .unwrap();

        assert_eq!(loads.point_mass.station_index, 0);
        assert_eq!(diagram.shear_lb[0], 0.0);
        assert_eq!(diagram.shear_lb[1], -25.0);
        // Lever arm measured from the reported station (the tip)
        let root = g.len() - 1;
        let arm_ft = g.stations()[0].y_ft - g.stations()[root].y_ft;
        assert!((diagram.moment_ftlb[root] + 25.0 * arm_ft).abs() < 1e-9);
    }

    #[test]
    fn test_point_mass_clamped_inboard() {
        let g = grid();
        let loads = build(&g, 74.0, 25.0, -12.0).unwrap();
        assert!(loads.point_mass.clamped);
        assert_eq!(loads.point_mass.station_index, g.len() - 1);
        assert_eq!(loads.point_mass.applied_station_in, 0.0);
    }

    #[test]
    fn test_negative_weights_rejected() {
        let g = grid();
        assert!(build(&g, -1.0, 0.0, 30.0).is_err());
        assert!(build(&g, 74.0, -5.0, 30.0).is_err());
        assert!(build(&g, 74.0, 5.0, f64::NAN).is_err());
    }
}
