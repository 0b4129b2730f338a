//! Damped N-Body Relaxation
//!
//! This example demonstrates `interact` and `fixed_point_by` working together.
//!
//! Key concepts:
//! - Each body reacts to every other body via `interact`
//! - One simulation step is an evolution function over the whole system
//! - A tolerance comparator decides when the system has come to rest
//!
//! Run with: cargo run --example nbody

use tetras_toolbox::{fixed_point_by, interact};

#[derive(Clone, Debug, PartialEq)]
struct Body {
    position: f64,
    velocity: f64,
}

impl Body {
    fn still(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }
}

const STIFFNESS: f64 = 1.0;
const DAMPING: f64 = 0.8;
const DT: f64 = 0.1;
const REST_TOLERANCE: f64 = 1e-9;

fn step(bodies: &Vec<Body>) -> Vec<Body> {
    interact(bodies, |body, others| {
        let pull: f64 = others
            .iter()
            .map(|other| STIFFNESS * (other.position - body.position))
            .sum();
        let acceleration = pull - DAMPING * body.velocity;
        let velocity = body.velocity + acceleration * DT;
        Body {
            position: body.position + velocity * DT,
            velocity,
        }
    })
    .collect()
}

fn at_rest(a: &Vec<Body>, b: &Vec<Body>) -> bool {
    a.iter().zip(b).all(|(before, after)| {
        (before.position - after.position).abs() < REST_TOLERANCE
            && (before.velocity - after.velocity).abs() < REST_TOLERANCE
    })
}

fn main() {
    println!("=== Damped N-Body Relaxation ===\n");

    let bodies: Vec<Body> = [-3.0, 0.5, 4.0, 10.5].into_iter().map(Body::still).collect();
    let centre: f64 = bodies.iter().map(|b| b.position).sum::<f64>() / bodies.len() as f64;

    println!("Initial bodies:");
    for body in &bodies {
        println!("  x = {:>7.3}", body.position);
    }

    let settled = fixed_point_by(bodies, step, at_rest);

    println!("\nSettled bodies:");
    for body in &settled {
        println!("  x = {:>7.3}  v = {:>10.2e}", body.position, body.velocity);
    }
    println!("\nCentre of mass: {centre:.3}");

    println!("\n=== Example Complete ===");
}
