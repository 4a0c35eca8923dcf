//! Drag-limited fall runs.
//!
//! Advances one or more spheres under gravity opposed by velocity-squared
//! drag until the configured stop rule fires or the iteration ceiling is
//! hit. Each body carries its own [`Track`] of (time, position, velocity)
//! samples plus the analytically derived terminal velocity, so the plotting
//! collaborator can compare the numerical trajectory against the closed
//! form.

use crate::observer::StepObserver;
use crate::simulation::engine::{Convergence, StopRule};
use crate::simulation::error::SimError;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec3};
use crate::simulation::trajectory::Track;

/// Per-body drag constants with the closed-form solution attached.
///
/// The reference functions are pure functions of these constants and a time;
/// they validate the numerical trajectory and never drive it.
#[derive(Debug, Clone)]
pub struct DragModel {
    pub mass: f64,
    pub area: f64, // cross section
    pub cd: f64,
    pub rho: f64,
    pub g: f64,
}

impl DragModel {
    /// Build the model for one body, failing fast on malformed inputs
    /// instead of letting them surface later as NaN.
    pub fn for_body(body: &Body, params: &Parameters, index: usize) -> Result<Self, SimError> {
        if !(body.m > 0.0) || !body.m.is_finite() {
            return Err(SimError::InvalidBody {
                index,
                reason: format!("mass must be positive and finite, got {}", body.m),
            });
        }
        let area = body.cross_section();
        if !(area > 0.0) || !area.is_finite() {
            return Err(SimError::InvalidBody {
                index,
                reason: format!("cross section must be positive and finite, got {area}"),
            });
        }
        Ok(Self {
            mass: body.m,
            area,
            cd: params.cd,
            rho: params.rho,
            g: params.g,
        })
    }

    /// `k = 0.5 * cd * rho * A`, the factor in front of `|v|^2`.
    fn drag_factor(&self) -> f64 {
        0.5 * self.cd * self.rho * self.area
    }

    /// Speed at which drag balances weight: `sqrt(2 m g / (cd rho A))`.
    pub fn terminal_velocity(&self) -> f64 {
        (self.mass * self.g / self.drag_factor()).sqrt()
    }

    /// Closed-form fall-axis position, `-(m/k) * ln(cosh(omega t))` with
    /// `omega = sqrt(g k / m)`.
    pub fn reference_position(&self, t: f64) -> f64 {
        let k = self.drag_factor();
        let omega = (self.g * k / self.mass).sqrt();
        -(self.mass / k) * ln_cosh(omega * t)
    }

    /// Closed-form fall speed, `v_term * tanh(omega t)`.
    pub fn reference_velocity(&self, t: f64) -> f64 {
        let k = self.drag_factor();
        let omega = (self.g * k / self.mass).sqrt();
        self.terminal_velocity() * (omega * t).tanh()
    }
}

// ln(cosh(x)) without overflowing cosh for large |x|.
fn ln_cosh(x: f64) -> f64 {
    let ax = x.abs();
    if ax > 350.0 {
        ax - std::f64::consts::LN_2
    } else {
        ax.cosh().ln()
    }
}

/// One body's share of a fall run.
#[derive(Debug, Clone)]
pub struct BodyRecord {
    pub track: Track, // (time, fall-axis position, fall-axis velocity) samples
    pub terminal_velocity: f64, // analytic terminal speed for this body
    pub converged: bool, // whether the stop rule froze this body
}

/// Result of a fall run.
#[derive(Debug, Clone)]
pub struct DragOutcome {
    pub records: Vec<BodyRecord>,
    pub steps: usize, // integration steps actually taken
    pub elapsed: f64, // simulated time covered by the run
}

/// Run the drag-limited fall described by `scenario`, notifying `observer`
/// after every completed step.
pub fn run_drag(
    scenario: &mut Scenario,
    observer: &mut dyn StepObserver,
) -> Result<DragOutcome, SimError> {
    let params = scenario.parameters.clone();

    // Validate every body and precompute its terminal velocity before any
    // stepping happens.
    let models = scenario
        .system
        .bodies
        .iter()
        .enumerate()
        .map(|(i, b)| DragModel::for_body(b, &params, i))
        .collect::<Result<Vec<_>, _>>()?;

    let mut records: Vec<BodyRecord> = models
        .iter()
        .map(|m| BodyRecord {
            track: Track::default(),
            terminal_velocity: m.terminal_velocity(),
            converged: false,
        })
        .collect();

    let steps = match scenario.engine.stop {
        StopRule::Floor(floor) => run_to_floor(scenario, &params, floor, &mut records, observer),
        StopRule::Terminal(conv) => {
            run_to_terminal(scenario, &params, conv, &mut records, observer)
        }
    };

    Ok(DragOutcome {
        records,
        steps,
        elapsed: scenario.system.t,
    })
}

/// Altitude-threshold mode: step the whole system while any body is still
/// above `floor`, bounded by `max_iter`.
fn run_to_floor(
    scenario: &mut Scenario,
    params: &Parameters,
    floor: f64,
    records: &mut [BodyRecord],
    observer: &mut dyn StepObserver,
) -> usize {
    let mut steps = 0;

    while scenario.system.bodies.iter().any(|b| b.x.y > floor) && steps < params.max_iter {
        // Samples carry the time at the top of the step, matching the
        // closed-form comparison grid.
        let t_sample = scenario.system.t;

        euler_integrator(&mut scenario.system, &scenario.forces, params);

        for (b, rec) in scenario.system.bodies.iter().zip(records.iter_mut()) {
            rec.track.push(t_sample, b.x.y, b.v.y);
        }

        steps += 1;
        observer.on_step(&scenario.system);
    }

    steps
}

/// Terminal-velocity mode: per-body Euler updates with converged bodies
/// frozen, until every body has converged or `max_iter` is hit.
fn run_to_terminal(
    scenario: &mut Scenario,
    params: &Parameters,
    conv: Convergence,
    records: &mut [BodyRecord],
    observer: &mut dyn StepObserver,
) -> usize {
    let dt = params.h0;
    let mut steps = 0;
    let n = scenario.system.bodies.len();
    let mut accels = vec![NVec3::zeros(); n];

    while steps < params.max_iter {
        // Freeze every body that satisfies the stop rule before updating, so
        // a frozen body's track stops changing from this step on.
        for (b, rec) in scenario.system.bodies.iter().zip(records.iter_mut()) {
            if !rec.converged && reached_terminal(b.speed(), rec.terminal_velocity, conv) {
                rec.converged = true;
            }
        }
        if records.iter().all(|r| r.converged) {
            break;
        }

        let t_sample = scenario.system.t;

        scenario
            .forces
            .accumulate_accels(scenario.system.t, &scenario.system, &mut accels);

        for (i, (b, rec)) in scenario
            .system
            .bodies
            .iter_mut()
            .zip(records.iter_mut())
            .enumerate()
        {
            if rec.converged {
                continue;
            }
            b.v += dt * accels[i];
            b.x += dt * b.v;
            rec.track.push(t_sample, b.x.y, b.v.y);
        }

        scenario.system.t += dt;
        steps += 1;
        observer.on_step(&scenario.system);
    }

    steps
}

fn reached_terminal(speed: f64, terminal: f64, conv: Convergence) -> bool {
    match conv {
        Convergence::Rounded => speed.round() >= terminal.round(),
        Convergence::Tolerance(eps) => terminal - speed <= eps,
    }
}
