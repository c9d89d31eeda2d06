//! Walkthrough of the Dubinin–Radushkevich model: construction, metadata
//! introspection, a sample evaluation, and a linearized plot-data file.

use std::error::Error;

use isorb_core::Isotherm;
use isorb_isotherms::DubininRadushkevich;
use isorb_plot::{Sampling, write_series};

const RULE_WIDTH: usize = 80;

fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn main() -> Result<(), Box<dyn Error>> {
    let temperature = 400.0; // K
    let ce = 2.0e-3; // mg/L
    let qmax = 150.0e-3; // mol/g
    let k1 = 1.0e-8;

    print_rule();
    println!("Dubinin-Radushkevich isotherm walkthrough");
    print_rule();

    let model = DubininRadushkevich::new(qmax, k1)?;
    let qe = model.qe(ce, temperature)?;

    println!();
    println!("Model: {} (ID {})", model.name(), model.kind().id());
    println!("Number of isotherm constants: {}", model.coefficient_count());
    println!();
    println!("{:<20}{:<50}", "Constant", "Description");
    for (info, value) in model.coefficient_info().iter().zip(model.coefficients()) {
        println!("{:<20}{:<50}{value:>12.6e}", info.symbol, info.description);
    }
    println!();
    println!("At T = {temperature} and Ce = {ce}: Qe = {qe:.6e}");

    // Linearized form: ln(Qe) = ln(Qmax) − K1·(Rgas·T)²·ln(1+1/Ce)², so the
    // transformed samples fall on a straight line of slope K1.
    let scale_x = |_qe: f64, ce: f64| {
        let auxi = (1.0 + 1.0 / ce).ln();
        auxi * auxi
    };
    let rgas_t = model.rgas() * temperature;
    let scale_y = move |qe: f64, _ce: f64| -qe.ln() / (rgas_t * rgas_t);

    let sampling = Sampling {
        points: 1001,
        start: 1.0e-3,
        end: 1.5,
        temperature,
    };
    let path = std::env::temp_dir().join("dubinin_radushkevich.dat");

    println!();
    print_rule();
    println!("Writing linearized samples to {}", path.display());
    print_rule();

    write_series(&model, &path, &scale_x, &scale_y, &sampling)?;

    Ok(())
}
