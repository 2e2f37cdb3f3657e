//! # Spanload CLI Application
//!
//! Terminal front end for the spanwise wing load engine.
//!
//! ## Usage
//!
//! ```text
//! spanload                          # prompt for inputs (Enter keeps the default)
//! spanload wing.json [constrained]  # one case from a parameter file
//! spanload study.wlc                # every case in a study
//! ```
//!
//! Set `RUST_LOG=debug` to see engine diagnostics.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use log::{error, info};
use spanload_core::calculations::{
    calculate, CalcOptions, CalculationResult, DistributionKind, WingParameters, ULTIMATE_FACTOR,
};
use spanload_core::errors::{CalcError, CalcResult};
use spanload_core::file_io::{load_parameters, load_study, STUDY_EXTENSION};
use spanload_core::units::{FtLb, InLb};

/// Rows printed in the station table, tip and centerline included
const TABLE_ROWS: usize = 21;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_parameters() -> WingParameters {
    let d = WingParameters::default();
    println!("Enter wing data (press Enter to keep the example aircraft value)");
    println!();
    WingParameters {
        label: "Interactive".to_string(),
        span_ft: prompt_f64("Wing span (ft)", d.span_ft),
        area_sqft: prompt_f64("Wing area (sq ft)", d.area_sqft),
        taper_ratio: prompt_f64("Taper ratio (tip/root)", d.taper_ratio),
        max_weight_lb: prompt_f64("Maximum weight (lb)", d.max_weight_lb),
        load_factor: prompt_f64("Load factor (g)", d.load_factor),
        tail_load_lb: prompt_f64("Tail load (lb, negative = down)", d.tail_load_lb),
        wing_weight_per_side_lb: prompt_f64("Wing weight per side (lb)", d.wing_weight_per_side_lb),
        point_mass_lb: prompt_f64("Point mass (lb)", d.point_mass_lb),
        point_mass_station_in: prompt_f64("Point mass station (in)", d.point_mass_station_in),
        wing_root_station_in: prompt_f64("Wing root station (in)", d.wing_root_station_in),
    }
}

fn parse_distribution(arg: Option<&String>) -> CalcResult<Option<DistributionKind>> {
    arg.map(|s| s.parse()).transpose()
}

fn print_report(result: &CalculationResult) {
    let p = &result.parameters;
    let s = &result.summary;

    println!("═══════════════════════════════════════════════════════════════");
    println!("  WING LOADS: {} ({})", p.label, result.distribution.display_name());
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Span:        {:.2} ft   Area: {:.2} sq ft   Taper: {:.2}", p.span_ft, p.area_sqft, p.taper_ratio);
    println!("  Weight:      {:.0} lb at n = {:.2}, tail load {:.0} lb", p.max_weight_lb, p.load_factor, p.tail_load_lb);
    println!("  Wing weight: {:.1} lb/side   Point mass: {:.1} lb at WS {:.1}", p.wing_weight_per_side_lb, p.point_mass_lb, p.point_mass_station_in);
    println!();
    println!("Planform:");
    println!("  c_root = {:.3} ft   c_tip = {:.3} ft   MGC = {:.3} ft   AR = {:.2}", s.root_chord_ft, s.tip_chord_ft, s.mean_chord_ft, s.aspect_ratio);
    println!("  L_req  = {:.0} lb   W/S = {:.2} psf", s.required_lift_lb, s.wing_loading_psf);
    if let Some(cl) = s.lift_coefficient {
        println!("  CL     = {:.3}", cl);
    }
    println!();

    println!("   WS(in)   chord(ft)   w(lb/ft)    V_lim(lb)   M_lim(ft-lb)    V_ult(lb)   M_ult(ft-lb)");
    let step = (result.loads.len() / (TABLE_ROWS - 1)).max(1);
    let last = result.loads.len() - 1;
    for (i, (lift, load)) in result.lift_distribution.iter().zip(&result.loads).enumerate() {
        if i % step != 0 && i != last {
            continue;
        }
        println!(
            "  {:7.2}   {:9.3}   {:8.2}   {:10.1}   {:12.1}   {:10.1}   {:12.1}",
            load.station_in,
            lift.chord_ft,
            lift.shape_lb_per_ft,
            load.limit_shear_lb,
            load.limit_moment_ftlb,
            load.ultimate_shear_lb,
            load.ultimate_moment_ftlb
        );
    }
    println!();

    println!("Root (WS {:.2}):", s.root_station_in);
    println!("  Limit:    V = {:.0} lb   M = {:.0} ft-lb", s.root_limit_shear_lb, s.root_limit_moment_ftlb);
    println!("  Ultimate: V = {:.0} lb   M = {:.0} ft-lb  (x{})", s.root_ultimate_shear_lb, s.root_ultimate_moment_ftlb, ULTIMATE_FACTOR);
    println!("            M_ult = {:.0} in-lb", InLb::from(FtLb(s.root_ultimate_moment_ftlb)).value());
    println!("Peaks:");
    println!("  |V_ult| = {:.0} lb at WS {:.2}", s.max_ultimate_shear_lb, s.max_ultimate_shear_station_in);
    println!("  |M_ult| = {:.0} ft-lb at WS {:.2}", s.max_ultimate_moment_ftlb, s.max_ultimate_moment_station_in);
    println!("  Local lift index {:.3} at WS {:.2}", s.peak_local_cl_index, s.peak_local_cl_station_in);

    for warning in &result.warnings {
        println!("  {} {}", status_icon(false), warning);
    }
    if result.warnings.is_empty() {
        println!("  {} no adjustments", status_icon(true));
    }
    println!("═══════════════════════════════════════════════════════════════");
}

fn print_json(result: &CalculationResult) {
    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn run_study(path: &Path) -> CalcResult<bool> {
    let study = load_study(path)?;
    info!("study '{}' with {} cases", study.meta.aircraft, study.case_count());
    println!("Study: {} ({})", study.meta.aircraft, study.meta.engineer);
    println!();

    let mut all_ok = true;
    for (label, outcome) in study.run_all() {
        match outcome {
            Ok(result) => {
                print_report(&result);
                println!();
            }
            Err(e) => {
                all_ok = false;
                error!("case '{}' failed: {}", label, e);
                eprintln!("Case '{}':", label);
                print_error(&e);
            }
        }
    }
    Ok(all_ok)
}

fn run_single(params: &WingParameters, kind: DistributionKind) -> CalcResult<()> {
    let result = calculate(params, kind, &CalcOptions::default())?;
    print_report(&result);
    print_json(&result);
    Ok(())
}

fn run(args: &[String]) -> CalcResult<bool> {
    let kind = parse_distribution(args.get(2))?;

    match args.get(1) {
        Some(arg) => {
            let path = Path::new(arg);
            let is_study = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(STUDY_EXTENSION));
            if is_study {
                if kind.is_some() {
                    info!("distribution argument ignored; study settings apply");
                }
                run_study(path)
            } else {
                let params = load_parameters(path)?;
                run_single(&params, kind.unwrap_or_default())?;
                Ok(true)
            }
        }
        None => {
            let params = prompt_parameters();
            println!();
            run_single(&params, DistributionKind::default())?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    println!("Spanload CLI - Spanwise Wing Load Calculator");
    println!("============================================");
    println!();

    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[WARN]" }
}
