//! Newton Square Roots
//!
//! This example demonstrates the three result shapes of `find_fixed_point`.
//!
//! Key concepts:
//! - `Value` mode resolves eagerly
//! - `Thunk` mode defers the search until called
//! - `Iterator` mode chains into ordinary iterator pipelines
//! - Approximate fixed points come from the comparator, not the search
//!
//! Run with: cargo run --example newton_sqrt

use tetras_toolbox::{find_fixed_point, ReturnMode};

fn close_enough(a: &f64, b: &f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(1.0)
}

fn main() {
    println!("=== Newton Square Roots ===\n");

    for target in [2.0_f64, 10.0, 1234.5] {
        let newton = move |x: &f64| (x + target / x) / 2.0;

        let eager = find_fixed_point(target, newton, close_enough, ReturnMode::Value);
        println!("sqrt({target}) ~ {:?} (value mode)", eager.as_value());

        let mut thunk = match find_fixed_point(target, newton, close_enough, ReturnMode::Thunk)
            .try_into_thunk()
        {
            Ok(thunk) => thunk,
            Err(err) => {
                eprintln!("unexpected result shape: {err}");
                return;
            }
        };
        let root = thunk.call();
        println!(
            "sqrt({target}) ~ {root} after {} evolution steps (thunk mode)",
            thunk.steps()
        );
    }

    let mode: ReturnMode = match "infiter".parse() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    println!("\nParsed legacy mode name 'infiter' as {mode}");

    if let Ok(points) = find_fixed_point(2.0_f64, |x: &f64| (x + 2.0 / x) / 2.0, close_enough, mode)
        .try_into_iter()
    {
        let first: Vec<f64> = points.take(3).collect();
        println!("First three converged points for sqrt(2): {first:?}");
    }

    println!("\n=== Example Complete ===");
}
