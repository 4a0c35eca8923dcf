//! Fixed-step time integrators.
//!
//! Two schemes, one per model: explicit Euler for the drag-limited fall and
//! velocity Verlet for the two-body orbit. Both advance the system in place
//! by `params.h0` and are driven by an [`AccelSet`].

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{System, NVec3};

/// Advance the system by one explicit Euler step.
///
/// Update order matters: the velocity is kicked first and the position then
/// drifts with the *updated* velocity.
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.h0;

    // a_n from x_n at time t_n.
    let mut accels = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut accels);

    // v_n+1 = v_n + dt * a_n, then x_n+1 = x_n + dt * v_n+1.
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.v += dt * *a;
        b.x += dt * b.v;
    }

    sys.t += dt;
}

/// Advance the system by one velocity Verlet step.
///
/// Kick-drift-kick with two force evaluations: half velocity update at the
/// old positions, full position update, half velocity update at the new
/// positions. Symplectic, so the orbit demo's total energy stays bounded
/// over many steps instead of drifting.
pub fn verlet_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.h0;
    let half_dt = 0.5 * dt;

    // a_n from x_n at time t_n.
    let mut a_old = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_old);

    // First kick: v_n+1/2 = v_n + (dt/2) * a_n.
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        b.v += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2.
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    sys.t += dt;

    // a_n+1 from x_n+1 at time t_n+1.
    let mut a_new = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_new);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1.
    for (b, a) in sys.bodies.iter_mut().zip(a_new.iter()) {
        b.v += half_dt * *a;
    }
}
