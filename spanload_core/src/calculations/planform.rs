//! # Wing Planform and Station Grid
//!
//! Geometry of a linearly tapered wing and the spanwise station grid every
//! other series is built on.
//!
//! ## Station Convention
//!
//! - `y_ft`: distance outboard of the aircraft centerline (ft)
//! - `station_in`: the same position as a wing station in inches
//! - `eta`: non-dimensional semi-span position, `y / (b/2)`
//! - Index 0 is the **tip** (`y = b/2`), the last index is the centerline
//!   (`y = 0`). All integration runs in index order, i.e. tip to root.
//!
//! ## Example
//!
//! ```rust
//! use spanload_core::calculations::planform::{Planform, StationGrid};
//!
//! let planform = Planform::new(19.0, 66.5, 0.4).unwrap();
//! assert!((planform.root_chord_ft - 5.0).abs() < 1e-12);
//! assert!((planform.tip_chord_ft - 2.0).abs() < 1e-12);
//!
//! let grid = StationGrid::new(planform.span_ft, 5).unwrap();
//! assert_eq!(grid.tip().y_ft, 9.5);
//! assert_eq!(grid.root().y_ft, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Feet, Inches};

/// Linearly tapered wing planform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planform {
    /// Full tip-to-tip span (ft)
    pub span_ft: f64,
    /// Reference wing area, both sides (sq ft)
    pub area_sqft: f64,
    /// Tip chord / root chord
    pub taper_ratio: f64,
    /// Root chord `c_r = 2S / (b(1+λ))` (ft)
    pub root_chord_ft: f64,
    /// Tip chord `c_t = λ c_r` (ft)
    pub tip_chord_ft: f64,
}

impl Planform {
    /// Derive root and tip chord from span, area and taper ratio.
    ///
    /// Rejects non-positive span or area and any taper ratio outside `(0, 1]`.
    pub fn new(span_ft: f64, area_sqft: f64, taper_ratio: f64) -> CalcResult<Self> {
        if !span_ft.is_finite() || span_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_ft",
                span_ft.to_string(),
                "Span must be positive",
            ));
        }
        if !area_sqft.is_finite() || area_sqft <= 0.0 {
            return Err(CalcError::invalid_input(
                "area_sqft",
                area_sqft.to_string(),
                "Wing area must be positive",
            ));
        }
        if !taper_ratio.is_finite() || taper_ratio <= 0.0 || taper_ratio > 1.0 {
            return Err(CalcError::invalid_input(
                "taper_ratio",
                taper_ratio.to_string(),
                "Taper ratio must be greater than 0 and at most 1",
            ));
        }

        let root_chord_ft = 2.0 * area_sqft / (span_ft * (1.0 + taper_ratio));
        Ok(Planform {
            span_ft,
            area_sqft,
            taper_ratio,
            root_chord_ft,
            tip_chord_ft: taper_ratio * root_chord_ft,
        })
    }

    /// Half of the span (ft)
    pub fn semi_span_ft(&self) -> f64 {
        self.span_ft / 2.0
    }

    /// Physical chord at a non-dimensional semi-span position (0 = root, 1 = tip)
    pub fn chord_at_eta(&self, eta: f64) -> f64 {
        self.root_chord_ft - (self.root_chord_ft - self.tip_chord_ft) * eta
    }

    /// Chord of the half-ellipse with the same area as the true planform.
    ///
    /// `c_e = (4S / (πb)) · sqrt(1 - η²)`, zero at the tip.
    pub fn ellipse_chord_at_eta(&self, eta: f64) -> f64 {
        let root = 4.0 * self.area_sqft / (std::f64::consts::PI * self.span_ft);
        root * (1.0 - eta * eta).max(0.0).sqrt()
    }

    /// Mean geometric chord `S / b` (ft)
    pub fn mean_chord_ft(&self) -> f64 {
        self.area_sqft / self.span_ft
    }

    /// Aspect ratio `b² / S`
    pub fn aspect_ratio(&self) -> f64 {
        self.span_ft * self.span_ft / self.area_sqft
    }
}

/// One discretized point on the half-span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanStation {
    /// Position in the grid (0 = tip)
    pub index: usize,
    /// Distance outboard of centerline (ft)
    pub y_ft: f64,
    /// Wing station (in)
    pub station_in: f64,
    /// `y / (b/2)`: 1 at the tip, 0 at the centerline
    pub eta: f64,
}

/// Uniformly spaced stations from tip to centerline.
///
/// Built once per calculation; every per-station series is indexed by it.
#[derive(Debug, Clone, PartialEq)]
pub struct StationGrid {
    semi_span_ft: f64,
    stations: Vec<SpanStation>,
}

impl StationGrid {
    /// Fewest stations for which shear and moment integration means anything
    pub const MIN_STATIONS: usize = 3;

    /// Upper bound that keeps a recompute cheap enough for interactive use
    pub const MAX_STATIONS: usize = 2001;

    /// Build a grid of `count` stations over the half-span of `span_ft`.
    pub fn new(span_ft: f64, count: usize) -> CalcResult<Self> {
        if !span_ft.is_finite() || span_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_ft",
                span_ft.to_string(),
                "Span must be positive",
            ));
        }
        if !(Self::MIN_STATIONS..=Self::MAX_STATIONS).contains(&count) {
            return Err(CalcError::invalid_input(
                "stations",
                count.to_string(),
                format!(
                    "Station count must be between {} and {}",
                    Self::MIN_STATIONS,
                    Self::MAX_STATIONS
                ),
            ));
        }

        let semi_span_ft = span_ft / 2.0;
        let last = (count - 1) as f64;
        let stations = (0..count)
            .map(|index| {
                // eta computed from the index so the tip (1.0) and root (0.0) are exact
                let eta = 1.0 - index as f64 / last;
                let y_ft = semi_span_ft * eta;
                SpanStation {
                    index,
                    y_ft,
                    station_in: Inches::from(Feet(y_ft)).value(),
                    eta,
                }
            })
            .collect();

        Ok(StationGrid {
            semi_span_ft,
            stations,
        })
    }

    /// Number of stations
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false for a constructed grid; provided for API completeness
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All stations, tip first
    pub fn stations(&self) -> &[SpanStation] {
        &self.stations
    }

    /// Half-span covered by the grid (ft)
    pub fn semi_span_ft(&self) -> f64 {
        self.semi_span_ft
    }

    /// Outermost wing station (in)
    pub fn semi_span_in(&self) -> f64 {
        Inches::from(Feet(self.semi_span_ft)).value()
    }

    /// Distance between adjacent stations (ft)
    pub fn spacing_ft(&self) -> f64 {
        self.semi_span_ft / (self.stations.len() - 1) as f64
    }

    /// Tip station (index 0)
    pub fn tip(&self) -> &SpanStation {
        &self.stations[0]
    }

    /// Centerline station (last index)
    pub fn root(&self) -> &SpanStation {
        &self.stations[self.stations.len() - 1]
    }

    /// Clamp a wing station into `[0, b/2]`.
    ///
    /// Returns the clamped station and whether clamping changed it.
    pub fn clamp_station_in(&self, station_in: f64) -> (f64, bool) {
        let clamped = station_in.clamp(0.0, self.semi_span_in());
        (clamped, clamped != station_in)
    }

    /// Index of the grid station nearest to a wing station.
    ///
    /// Positions off the half-span resolve to the nearest end of the grid;
    /// there is no extrapolation.
    pub fn nearest_index(&self, station_in: f64) -> usize {
        let (station_in, _) = self.clamp_station_in(station_in);
        let y_ft = Feet::from(Inches(station_in)).value();
        let offset = (self.semi_span_ft - y_ft) / self.spacing_ft();
        (offset.round().max(0.0) as usize).min(self.stations.len() - 1)
    }

    /// Physical chord at every station
    pub fn chords(&self, planform: &Planform) -> Vec<f64> {
        self.stations
            .iter()
            .map(|s| planform.chord_at_eta(s.eta))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_root_and_tip_chord() {
        let p = Planform::new(19.0, 66.5, 0.4).unwrap();
        assert!((p.root_chord_ft - 2.0 * 66.5 / (19.0 * 1.4)).abs() < TOL);
        assert!((p.tip_chord_ft - 0.4 * p.root_chord_ft).abs() < TOL);
        assert!((p.mean_chord_ft() - 3.5).abs() < TOL);
        assert!((p.aspect_ratio() - 19.0 * 19.0 / 66.5).abs() < TOL);
    }

    #[test]
    fn test_chord_interpolation_endpoints() {
        let p = Planform::new(30.0, 150.0, 0.5).unwrap();
        assert!((p.chord_at_eta(0.0) - p.root_chord_ft).abs() < TOL);
        assert!((p.chord_at_eta(1.0) - p.tip_chord_ft).abs() < TOL);
        let mid = p.chord_at_eta(0.5);
        assert!((mid - (p.root_chord_ft + p.tip_chord_ft) / 2.0).abs() < TOL);
    }

    #[test]
    fn test_rectangular_wing_constant_chord() {
        let p = Planform::new(20.0, 80.0, 1.0).unwrap();
        let grid = StationGrid::new(p.span_ft, 41).unwrap();
        let chords = grid.chords(&p);
        for pair in chords.windows(2) {
            assert!((pair[1] - pair[0]).abs() < 1e-12);
        }
        assert!((chords[0] - 4.0).abs() < TOL);
    }

    #[test]
    fn test_ellipse_matches_half_area() {
        let p = Planform::new(19.0, 66.5, 0.4).unwrap();
        // Fine midpoint sum of the ellipse chord over the half-span
        let n = 200_000;
        let dy = p.semi_span_ft() / n as f64;
        let area: f64 = (0..n)
            .map(|i| {
                let y = (i as f64 + 0.5) * dy;
                p.ellipse_chord_at_eta(y / p.semi_span_ft()) * dy
            })
            .sum();
        assert!((area - 66.5 / 2.0).abs() < 1e-3);
        assert_eq!(p.ellipse_chord_at_eta(1.0), 0.0);
    }

    #[test]
    fn test_invalid_planform_rejected() {
        assert!(matches!(
            Planform::new(0.0, 66.5, 0.4),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "span_ft"
        ));
        assert!(matches!(
            Planform::new(19.0, -1.0, 0.4),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "area_sqft"
        ));
        assert!(Planform::new(19.0, 66.5, 0.0).is_err());
        assert!(Planform::new(19.0, 66.5, -0.2).is_err());
        assert!(Planform::new(19.0, 66.5, 1.2).is_err());
        assert!(Planform::new(f64::NAN, 66.5, 0.4).is_err());
    }

    #[test]
    fn test_grid_ordering_and_spacing() {
        let grid = StationGrid::new(19.0, 81).unwrap();
        assert_eq!(grid.len(), 81);
        assert_eq!(grid.tip().eta, 1.0);
        assert_eq!(grid.root().eta, 0.0);
        assert!((grid.tip().station_in - 114.0).abs() < TOL);
        assert!((grid.spacing_ft() - 9.5 / 80.0).abs() < TOL);
        for pair in grid.stations().windows(2) {
            assert!(pair[1].y_ft < pair[0].y_ft);
            assert!((pair[0].y_ft - pair[1].y_ft - grid.spacing_ft()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_grid_station_count_bounds() {
        assert!(StationGrid::new(19.0, 2).is_err());
        assert!(StationGrid::new(19.0, 3).is_ok());
        assert!(StationGrid::new(19.0, StationGrid::MAX_STATIONS + 1).is_err());
    }

    #[test]
    fn test_nearest_index() {
        let grid = StationGrid::new(19.0, 81).unwrap();
        // WS 30 in = 2.5 ft, (9.5 - 2.5) / 0.11875 = 58.95
        assert_eq!(grid.nearest_index(30.0), 59);
        // WS 15 in = 1.25 ft, 8.25 / 0.11875 = 69.47
        assert_eq!(grid.nearest_index(15.0), 69);
        assert_eq!(grid.nearest_index(0.0), 80);
        assert_eq!(grid.nearest_index(-10.0), 80);
        assert_eq!(grid.nearest_index(500.0), 0);
    }

    #[test]
    fn test_clamp_station() {
        let grid = StationGrid::new(19.0, 11).unwrap();
        assert_eq!(grid.clamp_station_in(50.0), (50.0, false));
        assert_eq!(grid.clamp_station_in(130.0), (114.0, true));
        assert_eq!(grid.clamp_station_in(-4.0), (0.0, true));
    }
}
