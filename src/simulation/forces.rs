//! Acceleration contributors for the integration core.
//!
//! Each force law implements [`Acceleration`] and adds its contribution into
//! a per-body buffer; an [`AccelSet`] sums an arbitrary combination of terms.
//! The drag demos combine `UniformGravity` with `QuadraticDrag`, the orbit
//! demo uses `NewtonianGravity` alone.

use crate::simulation::states::{System, NVec3};

use std::fmt;

/// Collection of acceleration terms whose contributions are summed into a
/// single acceleration vector per body.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl AccelSet {
    /// Create an empty acceleration set.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term.
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`.
    /// `out[i]` ends up holding the sum of all term contributions for body i.
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on a [`System`].
/// Implementations add their contribution into `out[i]` for each body.
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Softened pairwise Newtonian gravity, direct n^2 sum.
///
/// Close encounters are smoothed with the mean squared body radius plus the
/// global floor `eps2`, which keeps the force finite at small separations.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening floor
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();

        // Each unordered pair (i, j) with i < j.
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Separation from i to j: i is pulled along +r, j along -r.
                let r = bj.x - bi.x;

                // Softened squared distance. Body radii act as core sizes so
                // overlapping bodies see a bounded force.
                let soft2 = 0.5 * (bi.radius * bi.radius + bj.radius * bj.radius) + self.eps2;
                let d2 = r.norm_squared() + soft2;

                // a = G * m * r / |r|^3, with the softened distance.
                let inv_r = d2.sqrt().recip();
                let coef = self.G * inv_r * inv_r * inv_r;

                // Equal and opposite contributions.
                out[i] += coef * bj.m * r;
                out[j] -= coef * bi.m * r;
            }
        }
    }
}

/// Constant gravitational acceleration `g` along the negative fall axis.
/// Mass-independent, so it never divides by `m`.
pub struct UniformGravity {
    pub g: f64,
}

impl Acceleration for UniformGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        for a in out.iter_mut().take(sys.bodies.len()) {
            a.y -= self.g;
        }
    }
}

/// Velocity-squared air drag on a sphere.
///
/// Force magnitude `0.5 * cd * rho * A * |v|^2` directed against the motion,
/// with the cross section `A` taken from each body's radius. Written in
/// vector form as `-(k/m) * |v| * v`, which reduces to the scalar law on the
/// fall axis when the velocity is vertical.
pub struct QuadraticDrag {
    pub rho: f64, // air density
    pub cd: f64, // drag coefficient
}

impl Acceleration for QuadraticDrag {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        for (b, a) in sys.bodies.iter().zip(out.iter_mut()) {
            let k = 0.5 * self.cd * self.rho * b.cross_section();
            *a -= (k / b.m) * b.speed() * b.v;
        }
    }
}
