//! Error-handling walkthrough
//!
//! Demonstrates the four ways to interact with the diagnostics core:
//!
//! 1. Throw policy: raise + catch_raised.
//! 2. Functional style: Status / StatusOr, no unwinding.
//! 3. Custom logger injection (unbuffered stderr logger).
//! 4. Language switching (i18n).

use std::panic;
use std::sync::Arc;

use fvgrid_error::codes::GridErr;
use fvgrid_error::{
    catch_raised, fvg_error, raise_status, Config, ErrorConfig, ErrorManager, Language, Policy,
    Severity, Status, StatusOr, StderrLogger,
};

// Classic style: raises (and unwinds under Policy::Throw) on bad input.
fn build_mesh(n: i64) -> Vec<f64> {
    if n <= 0 {
        fvg_error!(GridErr::InvalidN, "N" => n);
    }
    (0..=n).map(|i| i as f64 / n as f64).collect()
}

// Functional style: returns Status, never unwinds. Suited to inner
// loops where a panic would be too expensive or too blunt.
fn validate_spacing(spacing: &[f64]) -> Status {
    for dx in spacing {
        if *dx <= 0.0 {
            return raise_status(GridErr::DegenerateMesh, &[]);
        }
    }
    Status::ok()
}

// Value-or-error style: StatusOr.
fn cell_volume(dx: f64) -> StatusOr<f64> {
    if dx.is_nan() {
        return raise_status(GridErr::NaNCoordinate, &[("i", "0".to_string())]).into();
    }
    if dx <= 0.0 {
        return raise_status(GridErr::DegenerateMesh, &[]).into();
    }
    StatusOr::from_value(dx * dx * dx)
}

fn main() {
    println!("=== FVGrid error handling walkthrough ===\n");

    // ------------------------------------------------------------------
    // Scenario 1: Throw policy, catch the unwind
    // ------------------------------------------------------------------
    println!("--- 1. raise + catch_raised (Policy::Throw) ---");
    Config::set(ErrorConfig::new().policy(Policy::Throw));

    panic::set_hook(Box::new(|_| {})); // keep the raise quiet
    match catch_raised(|| build_mesh(-5)) {
        Ok(_) => println!("unexpected: mesh built"),
        Err(raised) => {
            println!("caught: {}", raised);
            println!("  code:     {:#010x}", raised.code());
            println!("  severity: {}", raised.severity());
        }
    }
    let _ = panic::take_hook();

    // ------------------------------------------------------------------
    // Scenario 2: Status / StatusOr, no unwinding
    // ------------------------------------------------------------------
    println!("\n--- 2. Status / StatusOr (Policy::Status) ---");
    Config::set(ErrorConfig::new().policy(Policy::Status).min_severity(Severity::Trace));

    let status = validate_spacing(&[0.1, 0.2, -0.3]);
    println!("validate_spacing: ok={} msg={:?}", status.is_ok(), status.message());

    match cell_volume(0.5).into_value() {
        Ok(v) => println!("cell_volume(0.5) = {v}"),
        Err(s) => println!("cell_volume failed: {}", s.message()),
    }
    match cell_volume(f64::NAN).into_value() {
        Ok(v) => println!("unexpected volume {v}"),
        Err(s) => println!("cell_volume(NaN) failed: {}", s.message()),
    }

    let pending = ErrorManager::flush();
    println!("records buffered on this thread: {}", pending.len());
    for rec in &pending {
        println!("  {}", rec);
    }

    // ------------------------------------------------------------------
    // Scenario 3: custom logger (unbuffered, straight to stderr)
    // ------------------------------------------------------------------
    println!("\n--- 3. injected StderrLogger ---");
    Config::set(
        ErrorConfig::new()
            .policy(Policy::Status)
            .logger(Arc::new(StderrLogger)),
    );
    let _ = validate_spacing(&[-1.0]);
    println!("(record above went straight to stderr; flush returns nothing)");
    assert!(ErrorManager::flush().is_empty());

    // ------------------------------------------------------------------
    // Scenario 4: localized messages
    // ------------------------------------------------------------------
    println!("\n--- 4. i18n ---");
    Config::set(
        ErrorConfig::new()
            .policy(Policy::Status)
            .language(Language::PtBr),
    );
    let status = raise_status(GridErr::InvalidN, &[("N", "0".to_string())]);
    println!("pt-BR: {}", status.message());

    Config::set(ErrorConfig::default());
    println!("\ndone.");
}
