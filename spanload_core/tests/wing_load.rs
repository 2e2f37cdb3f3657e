//! End-to-end checks of the wing load pipeline through the public API.

use spanload_core::calculations::{
    calculate, CalcOptions, CalculationResult, DistributionKind, WingParameters,
};
use spanload_core::study::{LoadCaseInput, LoadStudy};

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

fn run(params: &WingParameters, kind: DistributionKind) -> CalculationResult {
    calculate(params, kind, &CalcOptions::default()).unwrap()
}

fn spacing_ft(result: &CalculationResult) -> f64 {
    let lift = &result.lift_distribution;
    lift[0].y_ft - lift[1].y_ft
}

fn lift_integral(result: &CalculationResult) -> f64 {
    let dy = spacing_ft(result);
    result
        .lift_distribution
        .windows(2)
        .map(|w| (w[0].shape_lb_per_ft + w[1].shape_lb_per_ft) / 2.0 * dy)
        .sum()
}

#[test]
fn lift_integrates_to_required_lift_for_every_shape() {
    let params = WingParameters::default();
    for kind in DistributionKind::ALL {
        let result = run(&params, kind);
        assert!(approx_eq(lift_integral(&result), 4850.0, 1e-6), "{kind}");
        let centerline = result.loads.last().unwrap();
        assert!(approx_eq(centerline.aero_shear_lb, 4850.0, 1e-6), "{kind}");
    }
}

#[test]
fn tip_carries_no_shear_or_moment() {
    let mut params = WingParameters::default();
    // Point mass at the tip still must not load the tip station itself
    params.point_mass_station_in = 114.0;
    for kind in DistributionKind::ALL {
        let tip = run(&params, kind).loads[0];
        assert_eq!(tip.aero_shear_lb, 0.0);
        assert_eq!(tip.aero_moment_ftlb, 0.0);
        assert_eq!(tip.inertia_shear_lb, 0.0);
        assert_eq!(tip.inertia_moment_ftlb, 0.0);
        assert_eq!(tip.limit_shear_lb, 0.0);
        assert_eq!(tip.ultimate_moment_ftlb, 0.0);
    }
}

#[test]
fn ultimate_is_limit_times_one_and_a_half() {
    let result = run(&WingParameters::default(), DistributionKind::Constrained);
    for p in &result.loads {
        assert_eq!(p.ultimate_shear_lb, p.limit_shear_lb * 1.5);
        assert_eq!(p.ultimate_moment_ftlb, p.limit_moment_ftlb * 1.5);
        assert!(approx_eq(p.limit_shear_lb, p.aero_shear_lb + p.inertia_shear_lb, 1e-9));
    }
}

#[test]
fn chords_follow_the_taper() {
    let result = run(&WingParameters::default(), DistributionKind::Elliptic);
    let tip = result.lift_distribution.first().unwrap();
    let root = result.lift_distribution.last().unwrap();
    assert!(approx_eq(tip.chord_ft, 2.0, 1e-12));
    assert!(approx_eq(root.chord_ft, 5.0, 1e-12));
    assert!(approx_eq(tip.chord_ft / root.chord_ft, 0.4, 1e-12));
    assert_eq!(tip.ellipse_chord_ft, 0.0);
}

#[test]
fn rectangular_wing_has_constant_chord() {
    let params = WingParameters {
        taper_ratio: 1.0,
        ..WingParameters::default()
    };
    let result = run(&params, DistributionKind::Elliptic);
    for p in &result.lift_distribution {
        assert!(approx_eq(p.chord_ft, 66.5 / 19.0, 1e-12));
    }
}

#[test]
fn point_mass_steps_shear_by_its_weight() {
    let with_mass = run(&WingParameters::default(), DistributionKind::Elliptic);
    let without_mass = run(
        &WingParameters {
            point_mass_lb: 0.0,
            ..WingParameters::default()
        },
        DistributionKind::Elliptic,
    );

    let index = with_mass.summary.point_mass.station_index;
    assert_eq!(index, 59);
    for (i, (a, b)) in with_mass.loads.iter().zip(&without_mass.loads).enumerate() {
        let delta = a.inertia_shear_lb - b.inertia_shear_lb;
        if i < index {
            assert_eq!(delta, 0.0, "outboard station {i}");
        } else {
            assert!(approx_eq(delta, -25.0, 1e-9), "station {i}: {delta}");
        }
    }

    // Moment from the mass starts at its own station and grows with the lever arm
    let y_mass = with_mass.loads[index].y_ft;
    for (a, b) in with_mass.loads.iter().zip(&without_mass.loads).skip(index) {
        let delta = a.inertia_moment_ftlb - b.inertia_moment_ftlb;
        assert!(approx_eq(delta, -25.0 * (y_mass - a.y_ft), 1e-9), "WS {}: {delta}", a.station_in);
    }
}

#[test]
fn zero_point_mass_gives_uniform_shear_increments() {
    let params = WingParameters {
        point_mass_lb: 0.0,
        ..WingParameters::default()
    };
    let result = run(&params, DistributionKind::Elliptic);
    let dy = spacing_ft(&result);
    let expected = -74.0 / 9.5 * dy;
    for w in result.loads.windows(2) {
        assert!(approx_eq(w[1].inertia_shear_lb - w[0].inertia_shear_lb, expected, 1e-9));
    }
    assert!(approx_eq(result.loads.last().unwrap().inertia_shear_lb, -74.0, 1e-9));
}

#[test]
fn example_aircraft_scenario() {
    let result = run(&WingParameters::default(), DistributionKind::Elliptic);
    let s = &result.summary;

    assert_eq!(s.required_lift_lb, 4850.0);
    assert!(approx_eq(s.root_chord_ft, 5.0, 1e-12));
    assert!(approx_eq(s.tip_chord_ft, 2.0, 1e-12));
    assert!(approx_eq(s.root_station_in, 15.675, 1e-9));
    assert!(s.root_limit_shear_lb > 0.0);
    assert!(s.root_limit_moment_ftlb > 0.0);
    assert!(s.root_ultimate_moment_ftlb.abs() > s.root_limit_moment_ftlb.abs());
    assert!(!s.point_mass.clamped);
    assert!(result.warnings.is_empty());

    // Centerline equilibrium: lift less self-weight and point mass
    let centerline = result.loads.last().unwrap();
    assert!(approx_eq(centerline.limit_shear_lb, 4850.0 - 74.0 - 25.0, 1e-6));
}

#[test]
fn changing_shape_keeps_required_lift() {
    let params = WingParameters::default();
    let elliptic = run(&params, DistributionKind::Elliptic);
    let constrained = run(&params, DistributionKind::Constrained);

    assert_eq!(elliptic.summary.required_lift_lb, constrained.summary.required_lift_lb);
    assert!(approx_eq(lift_integral(&elliptic), lift_integral(&constrained), 1e-6));

    // Bell loading sits further inboard, so the same lift bends the root less
    let m_elliptic = elliptic.loads.last().unwrap().aero_moment_ftlb;
    let m_constrained = constrained.loads.last().unwrap().aero_moment_ftlb;
    assert!(m_constrained < m_elliptic);
}

#[test]
fn finer_grid_converges() {
    let params = WingParameters::default();
    let coarse = run(&params, DistributionKind::Elliptic);
    let fine = calculate(
        &params,
        DistributionKind::Elliptic,
        &CalcOptions::default().with_stations(801),
    )
    .unwrap();

    let m_coarse = coarse.loads.last().unwrap().limit_moment_ftlb;
    let m_fine = fine.loads.last().unwrap().limit_moment_ftlb;
    assert!(approx_eq(m_coarse / m_fine, 1.0, 0.01));
}

#[test]
fn negative_required_lift_is_reported() {
    let params = WingParameters {
        load_factor: 0.0,
        ..WingParameters::default()
    };
    let result = run(&params, DistributionKind::Elliptic);
    assert_eq!(result.summary.required_lift_lb, -250.0);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.lift_distribution.iter().all(|p| p.shape_lb_per_ft <= 0.0));
}

#[test]
fn study_runs_each_case_with_its_shape() {
    let mut study = LoadStudy::new("Engineer", "Example");
    study.add_case(LoadCaseInput::new("1 elliptic", WingParameters::default()));
    study.add_case(
        LoadCaseInput::new("2 bell", WingParameters::default())
            .with_distribution(DistributionKind::Constrained),
    );

    let results = study.run_all();
    let kinds: Vec<DistributionKind> = results
        .iter()
        .map(|(_, r)| r.as_ref().unwrap().distribution)
        .collect();
    assert_eq!(kinds, vec![DistributionKind::Elliptic, DistributionKind::Constrained]);
}
