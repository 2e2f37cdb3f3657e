//! # Wing Lift Distribution and Load Calculation
//!
//! Runs the full spanwise load pipeline for one wing:
//!
//! 1. Planform and station grid
//! 2. Lift distribution normalized to `n · W + L_tail`
//! 3. Self-weight and point-mass inertia loads
//! 4. Tip-to-root shear and moment for lift and inertia separately
//! 5. Limit (sum) and ultimate (× 1.5) loads
//! 6. Summary
//!
//! Every call builds a fresh [`CalculationResult`]; nothing is cached or
//! updated in place.
//!
//! ## Example
//!
//! ```rust
//! use spanload_core::calculations::wing_load::{calculate, CalcOptions, WingParameters};
//! use spanload_core::calculations::lift_distribution::DistributionKind;
//!
//! let params = WingParameters::default();
//! let result = calculate(&params, DistributionKind::Elliptic, &CalcOptions::default()).unwrap();
//!
//! assert_eq!(result.summary.required_lift_lb, 4850.0);
//! assert_eq!(result.loads[0].limit_shear_lb, 0.0);
//! println!("Root ultimate moment: {:.0} ft-lb", result.summary.root_ultimate_moment_ftlb);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::combination::{combine, CombinedLoadPoint};
use super::inertia;
use super::integration::integrate_tip_to_root;
use super::lift_distribution::{
    required_lift_lb, synthesize, DistributionKind, LiftDistributionPoint,
    DEFAULT_CONSTRAINED_EXPONENT,
};
use super::planform::{Planform, StationGrid};
use super::summary::{reduce, LoadSummary};
use crate::errors::{CalcError, CalcResult};

/// Input parameters for a wing load calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Aerobatic +6g",
///   "span_ft": 19.0,
///   "area_sqft": 66.5,
///   "taper_ratio": 0.4,
///   "max_weight_lb": 850.0,
///   "load_factor": 6.0,
///   "tail_load_lb": -250.0,
///   "wing_weight_per_side_lb": 74.0,
///   "point_mass_lb": 25.0,
///   "point_mass_station_in": 30.0,
///   "wing_root_station_in": 15.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingParameters {
    /// User label for this case
    #[serde(default)]
    pub label: String,

    /// Tip-to-tip span (ft)
    pub span_ft: f64,

    /// Reference wing area, both sides (sq ft)
    pub area_sqft: f64,

    /// Tip chord / root chord, in `(0, 1]`
    pub taper_ratio: f64,

    /// Maximum design weight (lb)
    pub max_weight_lb: f64,

    /// Design load factor (g)
    pub load_factor: f64,

    /// Tail balancing load (lb), signed; negative is a download
    pub tail_load_lb: f64,

    /// Structural weight of one wing panel (lb)
    pub wing_weight_per_side_lb: f64,

    /// Concentrated weight carried by the wing (lb)
    #[serde(default)]
    pub point_mass_lb: f64,

    /// Wing station of the point mass (in from centerline)
    #[serde(default)]
    pub point_mass_station_in: f64,

    /// Wing station treated as the root, e.g. the fuselage side (in)
    #[serde(default)]
    pub wing_root_station_in: f64,
}

impl Default for WingParameters {
    fn default() -> Self {
        WingParameters {
            label: "Example".to_string(),
            span_ft: 19.0,
            area_sqft: 66.5,
            taper_ratio: 0.4,
            max_weight_lb: 850.0,
            load_factor: 6.0,
            tail_load_lb: -250.0,
            wing_weight_per_side_lb: 74.0,
            point_mass_lb: 25.0,
            point_mass_station_in: 30.0,
            wing_root_station_in: 15.0,
        }
    }
}

impl WingParameters {
    /// Validate input parameters.
    ///
    /// Planform checks (span, area, taper) are repeated by
    /// [`Planform::new`]; the rest are checked here.
    pub fn validate(&self) -> CalcResult<()> {
        Planform::new(self.span_ft, self.area_sqft, self.taper_ratio)?;

        let finite = [
            ("max_weight_lb", self.max_weight_lb),
            ("load_factor", self.load_factor),
            ("tail_load_lb", self.tail_load_lb),
            ("wing_weight_per_side_lb", self.wing_weight_per_side_lb),
            ("point_mass_lb", self.point_mass_lb),
            ("point_mass_station_in", self.point_mass_station_in),
            ("wing_root_station_in", self.wing_root_station_in),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
            }
        }

        if self.max_weight_lb <= 0.0 {
            return Err(CalcError::invalid_input(
                "max_weight_lb",
                self.max_weight_lb.to_string(),
                "Design weight must be positive",
            ));
        }
        if self.wing_weight_per_side_lb < 0.0 {
            return Err(CalcError::invalid_input(
                "wing_weight_per_side_lb",
                self.wing_weight_per_side_lb.to_string(),
                "Wing weight cannot be negative",
            ));
        }
        if self.point_mass_lb < 0.0 {
            return Err(CalcError::invalid_input(
                "point_mass_lb",
                self.point_mass_lb.to_string(),
                "Point mass cannot be negative",
            ));
        }
        Ok(())
    }

    /// `n · W + L_tail` (lb)
    pub fn required_lift_lb(&self) -> f64 {
        required_lift_lb(self.load_factor, self.max_weight_lb, self.tail_load_lb)
    }
}

/// Engine options that are not properties of the wing.
///
/// ## JSON Example
///
/// ```json
/// { "stations": 81, "dynamic_pressure_psf": 42.0, "constrained_exponent": 1.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcOptions {
    /// Number of spanwise stations, tip and root included
    pub stations: usize,

    /// Dynamic pressure for the lift coefficient (psf); omitted means no CL
    pub dynamic_pressure_psf: Option<f64>,

    /// Exponent `p` of the constrained shape `(1 - η²)^p`
    pub constrained_exponent: f64,
}

impl CalcOptions {
    /// Default station count
    pub const DEFAULT_STATIONS: usize = 81;

    /// Set the station count (builder pattern)
    pub fn with_stations(mut self, stations: usize) -> Self {
        self.stations = stations;
        self
    }

    /// Set the dynamic pressure (builder pattern)
    pub fn with_dynamic_pressure(mut self, q_psf: f64) -> Self {
        self.dynamic_pressure_psf = Some(q_psf);
        self
    }

    /// Validate options.
    pub fn validate(&self) -> CalcResult<()> {
        if !(StationGrid::MIN_STATIONS..=StationGrid::MAX_STATIONS).contains(&self.stations) {
            return Err(CalcError::invalid_input(
                "stations",
                self.stations.to_string(),
                format!(
                    "Station count must be between {} and {}",
                    StationGrid::MIN_STATIONS,
                    StationGrid::MAX_STATIONS
                ),
            ));
        }
        if let Some(q) = self.dynamic_pressure_psf {
            if !q.is_finite() || q <= 0.0 {
                return Err(CalcError::invalid_input(
                    "dynamic_pressure_psf",
                    q.to_string(),
                    "Dynamic pressure must be positive",
                ));
            }
        }
        if !self.constrained_exponent.is_finite() || self.constrained_exponent <= 0.0 {
            return Err(CalcError::invalid_input(
                "constrained_exponent",
                self.constrained_exponent.to_string(),
                "Exponent must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for CalcOptions {
    fn default() -> Self {
        CalcOptions {
            stations: Self::DEFAULT_STATIONS,
            dynamic_pressure_psf: None,
            constrained_exponent: DEFAULT_CONSTRAINED_EXPONENT,
        }
    }
}

/// Full output of a wing load calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Inputs, for traceability
    pub parameters: WingParameters,
    /// Shape that was used
    pub distribution: DistributionKind,
    /// Options that were used
    pub options: CalcOptions,
    /// Headline values
    pub summary: LoadSummary,
    /// Lift distribution, tip first
    pub lift_distribution: Vec<LiftDistributionPoint>,
    /// Shear and moment breakdown, tip first
    pub loads: Vec<CombinedLoadPoint>,
    /// Non-fatal adjustments made during the calculation
    pub warnings: Vec<String>,
}

impl CalculationResult {
    /// Root ultimate moment / root limit moment; 1.5 unless the limit is zero
    pub fn root_moment_factor(&self) -> Option<f64> {
        let limit = self.summary.root_limit_moment_ftlb;
        (limit != 0.0).then(|| self.summary.root_ultimate_moment_ftlb / limit)
    }
}

/// Calculate the spanwise lift distribution and wing loads.
///
/// This is a pure function: the same inputs always give the same result.
///
/// # Errors
///
/// * `CalcError::InvalidInput` - bad parameters or options; nothing is computed
/// * `CalcError::DegenerateNormalization` - the lift shape cannot be scaled
///
/// An out-of-range point-mass station is not an error. It is clamped, and
/// the result reports it in `summary.point_mass` and `warnings`.
pub fn calculate(
    params: &WingParameters,
    kind: DistributionKind,
    options: &CalcOptions,
) -> CalcResult<CalculationResult> {
    params.validate()?;
    options.validate()?;

    let planform = Planform::new(params.span_ft, params.area_sqft, params.taper_ratio)?;
    let grid = StationGrid::new(planform.span_ft, options.stations)?;
    let spacing = grid.spacing_ft();
    debug!(
        "planform c_r={:.4} ft c_t={:.4} ft, {} stations at {:.4} ft",
        planform.root_chord_ft,
        planform.tip_chord_ft,
        grid.len(),
        spacing
    );

    let mut warnings = Vec::new();

    let required = params.required_lift_lb();
    if required <= 0.0 {
        warn!("required lift {required:.1} lb is not positive; lift loads act downward");
        warnings.push(format!(
            "Required lift is {required:.1} lb; the lift distribution acts downward"
        ));
    }

    let lift = synthesize(&grid, &planform, kind, required, options.constrained_exponent)?;
    debug!("{} shape normalized with k={:.6}", kind, lift.normalization);

    let inertia_loads = inertia::build(
        &grid,
        params.wing_weight_per_side_lb,
        params.point_mass_lb,
        params.point_mass_station_in,
    )?;
    let placement = inertia_loads.point_mass;
    if placement.clamped {
        warnings.push(format!(
            "Point mass station {:.2} in is outside 0..{:.2} in; applied at {:.2} in",
            placement.requested_station_in,
            grid.semi_span_in(),
            placement.applied_station_in
        ));
    }

    let (_, root_clamped) = grid.clamp_station_in(params.wing_root_station_in);
    if root_clamped {
        warn!(
            "wing root station {:.2} in is outside the half-span; using nearest station",
            params.wing_root_station_in
        );
        warnings.push(format!(
            "Wing root station {:.2} in is outside 0..{:.2} in; nearest station used",
            params.wing_root_station_in,
            grid.semi_span_in()
        ));
    }

    let aero = integrate_tip_to_root(&lift.shape_values(), None, spacing)?;
    let inertia_diagram = integrate_tip_to_root(
        &inertia_loads.running_load_lb_per_ft,
        Some(&inertia_loads.point_forces_lb),
        spacing,
    )?;
    let loads = combine(&grid, &aero, &inertia_diagram)?;

    let summary = reduce(
        &planform,
        &grid,
        &lift,
        &loads,
        placement,
        params.wing_root_station_in,
        options.dynamic_pressure_psf,
    );
    debug!(
        "root limit V={:.1} lb M={:.1} ft-lb",
        summary.root_limit_shear_lb, summary.root_limit_moment_ftlb
    );

    Ok(CalculationResult {
        parameters: params.clone(),
        distribution: kind,
        options: options.clone(),
        summary,
        lift_distribution: lift.points,
        loads,
        warnings,
    })
}
