//! # Load Summary
//!
//! Headline values pulled from the per-station series: required lift, wing
//! loading, chords, and the limit/ultimate loads at the wing root.
//!
//! The root is the grid station nearest the requested root wing station
//! (typically the fuselage side), found by nearest-match lookup rather than
//! extrapolation.

use serde::{Deserialize, Serialize};

use super::combination::CombinedLoadPoint;
use super::inertia::PointMassPlacement;
use super::lift_distribution::LiftDistribution;
use super::planform::{Planform, StationGrid};
use crate::units::{Pounds, SqFt};

/// Scalar results of a wing load calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    // === Lift ===
    /// `n · W + L_tail` (lb)
    pub required_lift_lb: f64,
    /// Required lift / wing area (psf)
    pub wing_loading_psf: f64,
    /// `L_req / (q · S)`, present only when a dynamic pressure was supplied
    pub lift_coefficient: Option<f64>,

    // === Planform ===
    /// Root chord (ft)
    pub root_chord_ft: f64,
    /// Tip chord (ft)
    pub tip_chord_ft: f64,
    /// Mean geometric chord (ft)
    pub mean_chord_ft: f64,
    /// Aspect ratio
    pub aspect_ratio: f64,

    // === Root Loads ===
    /// Grid station used as the root (in)
    pub root_station_in: f64,
    /// Limit shear at the root (lb)
    pub root_limit_shear_lb: f64,
    /// Limit moment at the root (ft-lb)
    pub root_limit_moment_ftlb: f64,
    /// Ultimate shear at the root (lb)
    pub root_ultimate_shear_lb: f64,
    /// Ultimate moment at the root (ft-lb)
    pub root_ultimate_moment_ftlb: f64,

    // === Peaks Along the Span ===
    /// Largest ultimate shear magnitude anywhere on the half-span (lb)
    pub max_ultimate_shear_lb: f64,
    /// Station of the largest ultimate shear (in)
    pub max_ultimate_shear_station_in: f64,
    /// Largest ultimate moment magnitude anywhere on the half-span (ft-lb)
    pub max_ultimate_moment_ftlb: f64,
    /// Station of the largest ultimate moment (in)
    pub max_ultimate_moment_station_in: f64,
    /// Highest local lift index (1.0 = spanwise average)
    pub peak_local_cl_index: f64,
    /// Station of the highest local lift index (in)
    pub peak_local_cl_station_in: f64,

    // === Point Mass ===
    /// Where the point mass was applied
    pub point_mass: PointMassPlacement,
}

/// Largest |value| and the station it occurs at
fn peak_abs(loads: &[CombinedLoadPoint], value: impl Fn(&CombinedLoadPoint) -> f64) -> (f64, f64) {
    loads
        .iter()
        .map(|p| (value(p).abs(), p.station_in))
        .fold((0.0, 0.0), |best, cur| if cur.0 > best.0 { cur } else { best })
}

/// Reduce the per-station series to a [`LoadSummary`].
pub fn reduce(
    planform: &Planform,
    grid: &StationGrid,
    lift: &LiftDistribution,
    loads: &[CombinedLoadPoint],
    point_mass: PointMassPlacement,
    wing_root_station_in: f64,
    dynamic_pressure_psf: Option<f64>,
) -> LoadSummary {
    let required_lift_lb = lift.required_lift_lb;
    let wing_loading_psf = (Pounds(required_lift_lb) / SqFt(planform.area_sqft)).value();
    let lift_coefficient = dynamic_pressure_psf
        .filter(|q| *q > 0.0)
        .map(|q| wing_loading_psf / q);

    let root = &loads[grid.nearest_index(wing_root_station_in)];
    let (max_ultimate_shear_lb, max_ultimate_shear_station_in) =
        peak_abs(loads, |p| p.ultimate_shear_lb);
    let (max_ultimate_moment_ftlb, max_ultimate_moment_station_in) =
        peak_abs(loads, |p| p.ultimate_moment_ftlb);

    let (peak_local_cl_index, peak_local_cl_station_in) = lift
        .peak_local_cl_index()
        .map(|i| (lift.points[i].local_cl_index, lift.points[i].station_in))
        .unwrap_or((0.0, 0.0));

    LoadSummary {
        required_lift_lb,
        wing_loading_psf,
        lift_coefficient,
        root_chord_ft: planform.root_chord_ft,
        tip_chord_ft: planform.tip_chord_ft,
        mean_chord_ft: planform.mean_chord_ft(),
        aspect_ratio: planform.aspect_ratio(),
        root_station_in: root.station_in,
        root_limit_shear_lb: root.limit_shear_lb,
        root_limit_moment_ftlb: root.limit_moment_ftlb,
        root_ultimate_shear_lb: root.ultimate_shear_lb,
        root_ultimate_moment_ftlb: root.ultimate_moment_ftlb,
        max_ultimate_shear_lb,
        max_ultimate_shear_station_in,
        max_ultimate_moment_ftlb,
        max_ultimate_moment_station_in,
        peak_local_cl_index,
        peak_local_cl_station_in,
        point_mass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::combination::combine;
    use crate::calculations::inertia;
    use crate::calculations::integration::integrate_tip_to_root;
    use crate::calculations::lift_distribution::{synthesize, DistributionKind};

    fn summary(q: Option<f64>, root_in: f64) -> LoadSummary {
        let planform = Planform::new(19.0, 66.5, 0.4).unwrap();
        let grid = StationGrid::new(planform.span_ft, 81).unwrap();
        let lift = synthesize(&grid, &planform, DistributionKind::Elliptic, 4850.0, 1.5).unwrap();
        let aero = integrate_tip_to_root(&lift.shape_values(), None, grid.spacing_ft()).unwrap();
        let inertia = inertia::build(&grid, 74.0, 25.0, 30.0).unwrap();
        let inertia_diagram = integrate_tip_to_root(
            &inertia.running_load_lb_per_ft,
            Some(&inertia.point_forces_lb),
            grid.spacing_ft(),
        )
        .unwrap();
        let loads = combine(&grid, &aero, &inertia_diagram).unwrap();
        reduce(&planform, &grid, &lift, &loads, inertia.point_mass, root_in, q)
    }

    #[test]
    fn test_wing_loading_and_lift_coefficient() {
        let s = summary(Some(50.0), 15.0);
        assert!((s.wing_loading_psf - 4850.0 / 66.5).abs() < 1e-9);
        assert!((s.lift_coefficient.unwrap() - 4850.0 / (66.5 * 50.0)).abs() < 1e-12);
        assert!(summary(None, 15.0).lift_coefficient.is_none());
    }

    #[test]
    fn test_root_is_nearest_grid_station() {
        let s = summary(None, 15.0);
        // Index 69 on an 81-station grid over 114 in
        assert!((s.root_station_in - 15.675).abs() < 1e-9);
        assert_eq!(s.root_ultimate_moment_ftlb, s.root_limit_moment_ftlb * 1.5);
    }

    #[test]
    fn test_peaks_at_centerline() {
        let s = summary(None, 15.0);
        assert_eq!(s.max_ultimate_moment_station_in, 0.0);
        assert!(s.max_ultimate_moment_ftlb >= s.root_ultimate_moment_ftlb.abs());
        assert!(s.peak_local_cl_index > 1.0);
    }
}
