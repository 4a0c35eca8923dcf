//! Two-body gravitational runs.
//!
//! Evolves a pair of mutually attracting bodies with velocity Verlet for a
//! fixed number of steps, recording the diagnostics the demonstration is
//! about: separation distance, the kinetic/potential/total energy split, and
//! the barycenter. No closed form is computed here; flat total energy and
//! bounded separation are the correctness check.

use crate::observer::StepObserver;
use crate::simulation::error::SimError;
use crate::simulation::integrator::verlet_integrator;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec3, System};

/// Energy split of the pair at one instant.
#[derive(Debug, Clone, Copy)]
pub struct EnergyBreakdown {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

/// Kinetic, potential and total energy of the two-body system.
#[allow(non_snake_case)]
pub fn pair_energies(sys: &System, G: f64) -> EnergyBreakdown {
    let (b1, b2) = (&sys.bodies[0], &sys.bodies[1]);
    let r = (b1.x - b2.x).norm();
    let kinetic = b1.kinetic_energy() + b2.kinetic_energy();
    let potential = -G * b1.m * b2.m / r;
    EnergyBreakdown {
        kinetic,
        potential,
        total: kinetic + potential,
    }
}

/// Result of a two-body run. All series have one entry per step.
#[derive(Debug, Clone)]
pub struct OrbitOutcome {
    pub separations: Vec<f64>, // |r| after each step
    pub kinetic: Vec<f64>,
    pub potential: Vec<f64>,
    pub total: Vec<f64>,
    pub barycenters: Vec<NVec3>, // mass-weighted center after each step
    pub steps: usize,
    pub elapsed: f64, // steps * h0 of simulated time
}

impl OrbitOutcome {
    pub fn min_separation(&self) -> f64 {
        self.separations.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max_separation(&self) -> f64 {
        self.separations
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Largest relative excursion of the total energy from its first sample.
    pub fn energy_drift(&self) -> f64 {
        let first = self.total[0];
        self.total
            .iter()
            .map(|te| (te - first).abs() / first.abs())
            .fold(0.0, f64::max)
    }
}

/// Run the two-body scenario for exactly `max_iter` Verlet steps, notifying
/// `observer` after each one.
pub fn run_two_body(
    scenario: &mut Scenario,
    observer: &mut dyn StepObserver,
) -> Result<OrbitOutcome, SimError> {
    let params = scenario.parameters.clone();
    let n = scenario.system.bodies.len();
    if n != 2 {
        return Err(SimError::BodyCount {
            expected: 2,
            actual: n,
        });
    }
    for (i, b) in scenario.system.bodies.iter().enumerate() {
        if !(b.m > 0.0) || !b.m.is_finite() {
            return Err(SimError::InvalidBody {
                index: i,
                reason: format!("mass must be positive and finite, got {}", b.m),
            });
        }
    }

    let max_iter = params.max_iter;
    let mut outcome = OrbitOutcome {
        separations: Vec::with_capacity(max_iter),
        kinetic: Vec::with_capacity(max_iter),
        potential: Vec::with_capacity(max_iter),
        total: Vec::with_capacity(max_iter),
        barycenters: Vec::with_capacity(max_iter),
        steps: 0,
        elapsed: 0.0,
    };

    // Purely step-count driven: exactly max_iter steps, then stop.
    for _ in 0..max_iter {
        verlet_integrator(&mut scenario.system, &scenario.forces, &params);

        let sys = &scenario.system;
        let sep = (sys.bodies[0].x - sys.bodies[1].x).norm();
        let energy = pair_energies(sys, params.G);

        outcome.separations.push(sep);
        outcome.kinetic.push(energy.kinetic);
        outcome.potential.push(energy.potential);
        outcome.total.push(energy.total);
        outcome.barycenters.push(sys.barycenter());

        observer.on_step(sys);
    }

    outcome.steps = max_iter;
    outcome.elapsed = max_iter as f64 * params.h0;
    Ok(outcome)
}
