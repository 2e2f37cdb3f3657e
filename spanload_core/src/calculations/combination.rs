//! # Limit and Ultimate Loads
//!
//! Limit shear and moment are the signed sum of the aerodynamic and inertia
//! diagrams. Ultimate loads are limit loads times the structural safety
//! factor [`ULTIMATE_FACTOR`]. No other factor is applied here.

use serde::{Deserialize, Serialize};

use super::integration::LoadDiagram;
use super::planform::StationGrid;
use crate::errors::{CalcError, CalcResult};

/// Ultimate / limit structural safety factor
pub const ULTIMATE_FACTOR: f64 = 1.5;

/// Shear and moment breakdown at one station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinedLoadPoint {
    /// Wing station (in)
    pub station_in: f64,
    /// Distance outboard of centerline (ft)
    pub y_ft: f64,
    /// Shear from lift alone (lb)
    pub aero_shear_lb: f64,
    /// Moment from lift alone (ft-lb)
    pub aero_moment_ftlb: f64,
    /// Shear from self-weight and point mass (lb)
    pub inertia_shear_lb: f64,
    /// Moment from self-weight and point mass (ft-lb)
    pub inertia_moment_ftlb: f64,
    /// Aero + inertia shear (lb)
    pub limit_shear_lb: f64,
    /// Aero + inertia moment (ft-lb)
    pub limit_moment_ftlb: f64,
    /// Limit shear × 1.5 (lb)
    pub ultimate_shear_lb: f64,
    /// Limit moment × 1.5 (ft-lb)
    pub ultimate_moment_ftlb: f64,
}

/// Combine the aerodynamic and inertia diagrams station by station.
///
/// # Errors
///
/// `CalcError::Internal` if either diagram does not match the grid length.
pub fn combine(
    grid: &StationGrid,
    aero: &LoadDiagram,
    inertia: &LoadDiagram,
) -> CalcResult<Vec<CombinedLoadPoint>> {
    if aero.len() != grid.len() || inertia.len() != grid.len() {
        return Err(CalcError::Internal {
            message: format!(
                "diagram lengths (aero {}, inertia {}) do not match {} stations",
                aero.len(),
                inertia.len(),
                grid.len()
            ),
        });
    }

    Ok(grid
        .stations()
        .iter()
        .enumerate()
        .map(|(i, station)| {
            let limit_shear_lb = aero.shear_lb[i] + inertia.shear_lb[i];
            let limit_moment_ftlb = aero.moment_ftlb[i] + inertia.moment_ftlb[i];
            CombinedLoadPoint {
                station_in: station.station_in,
                y_ft: station.y_ft,
                aero_shear_lb: aero.shear_lb[i],
                aero_moment_ftlb: aero.moment_ftlb[i],
                inertia_shear_lb: inertia.shear_lb[i],
                inertia_moment_ftlb: inertia.moment_ftlb[i],
                limit_shear_lb,
                limit_moment_ftlb,
                ultimate_shear_lb: limit_shear_lb * ULTIMATE_FACTOR,
                ultimate_moment_ftlb: limit_moment_ftlb * ULTIMATE_FACTOR,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_signed_sum_and_ultimate_scaled() {
        let grid = StationGrid::new(10.0, 3).unwrap();
        let aero = LoadDiagram {
            shear_lb: vec![0.0, 100.0, 300.0],
            moment_ftlb: vec![0.0, 200.0, 900.0],
        };
        let inertia = LoadDiagram {
            shear_lb: vec![0.0, -20.0, -60.0],
            moment_ftlb: vec![0.0, -40.0, -180.0],
        };
        let points = combine(&grid, &aero, &inertia).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].limit_shear_lb, 240.0);
        assert_eq!(points[2].limit_moment_ftlb, 720.0);
        for p in &points {
            assert_eq!(p.ultimate_shear_lb, p.limit_shear_lb * 1.5);
            assert_eq!(p.ultimate_moment_ftlb, p.limit_moment_ftlb * 1.5);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let grid = StationGrid::new(10.0, 4).unwrap();
        let short = LoadDiagram {
            shear_lb: vec![0.0; 3],
            moment_ftlb: vec![0.0; 3],
        };
        assert!(combine(&grid, &short, &short).is_err());
    }
}
